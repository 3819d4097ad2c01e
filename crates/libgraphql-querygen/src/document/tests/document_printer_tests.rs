use crate::document::Argument;
use crate::document::FieldNode;
use crate::document::Operation;
use crate::document::QueryDocument;
use crate::document::Selection;
use crate::document::SelectionSet;
use crate::document::Value;
use crate::document::VariableDefinition;
use crate::types::TypeAnnotation;

fn user_query_doc() -> QueryDocument {
    let user = FieldNode::new("user")
        .with_arguments(vec![
            Argument::new("id", Value::Variable("id".to_string())),
        ])
        .with_selection_set(Some(SelectionSet::new(vec![
            Selection::Field(FieldNode::new("id")),
            Selection::Field(FieldNode::new("name")),
        ])));

    QueryDocument::new(
        Operation::new(SelectionSet::new(vec![Selection::Field(user)]))
            .with_variables(vec![
                VariableDefinition::new("id", TypeAnnotation::named("ID", false)),
            ]),
    )
}

#[test]
fn prints_with_default_indent() {
    assert_eq!(
        user_query_doc().to_string(),
        "query($id: ID!) {\n  user(id: $id) {\n    id\n    name\n  }\n}\n",
    );
}

#[test]
fn prints_with_custom_indent() {
    assert_eq!(
        user_query_doc().to_query_text(4),
        "query($id: ID!) {\n    user(id: $id) {\n        id\n        name\n    }\n}\n",
    );
}

#[test]
fn prints_operation_name_and_variable_defaults() {
    let doc = user_query_doc();
    let op = doc.operation().clone()
        .with_name(Some("GetUser".to_string()))
        .with_variables(vec![
            VariableDefinition::new("id", TypeAnnotation::named("ID", false))
                .with_default_value(Some(Value::from("abc"))),
        ]);

    let text = doc.with_operation(op).to_string();
    assert!(
        text.starts_with("query GetUser($id: ID! = \"abc\") {\n"),
        "unexpected output: {text}",
    );
}

#[test]
fn empty_child_selection_set_prints_bare() {
    let doc = QueryDocument::new(Operation::new(SelectionSet::new(vec![
        Selection::Field(FieldNode::new("viewer")
            .with_selection_set(Some(SelectionSet::default()))),
    ])));

    assert_eq!(doc.to_string(), "query {\n  viewer\n}\n");
}

#[test]
fn auxiliary_definitions_print_after_the_operation() {
    let doc = QueryDocument::parse(
        "fragment F on User { id }\nquery { me { ...F } }",
    ).unwrap();
    let text = doc.to_string();

    let query_pos = text.find("query").unwrap();
    let fragment_pos = text.find("fragment F on User").unwrap();
    assert!(query_pos < fragment_pos);
    assert!(text.contains("    ...F\n"));
}
