use crate::document::QueryDocument;
use crate::document::Value;
use crate::schema::SchemaError;
use crate::schema::SchemaModel;
use crate::schema::SchemaModelBuilder;
use crate::synthesis::QuerySynthesizer;
use crate::synthesis::SelectionNode;
use crate::synthesis::SynthesisConfig;
use crate::synthesis::SynthesisError;
use crate::types::TypeAnnotation;
use std::collections::HashSet;

fn build_schema(src: &str) -> SchemaModel {
    SchemaModelBuilder::new()
        .load_str(None, src)
        .unwrap()
        .build()
        .unwrap()
}

fn child_names(node: &SelectionNode) -> Vec<&str> {
    node.children().unwrap_or_default().iter()
        .map(|child| child.name())
        .collect()
}

fn child<'a>(node: &'a SelectionNode, name: &str) -> &'a SelectionNode {
    node.children().unwrap_or_default().iter()
        .find(|child| child.name() == name)
        .unwrap_or_else(|| panic!("`{}` has no child named `{name}`", node.name()))
}

const USER_SCHEMA: &str = r#"
    type Query {
        user(id: ID!): User
    }

    type User {
        id: ID!
        name: String!
    }
"#;

const CYCLIC_SCHEMA: &str = r#"
    type Query {
        a: A
    }

    type A {
        self: A
        name: String
    }
"#;

// =============================================================================
// Basic shapes
// =============================================================================

#[test]
fn user_scenario() {
    let schema = build_schema(USER_SCHEMA);
    let query = QuerySynthesizer::new(&schema).synthesize("user").unwrap();

    assert_eq!(
        query.to_query_text(),
        "query($id: ID!) {\n  user(id: $id) {\n    id\n    name\n  }\n}\n",
    );

    assert_eq!(query.variables().len(), 1);
    assert_eq!(query.variables()[0].name(), "id");
    assert_eq!(
        query.variables()[0].type_annotation(),
        &TypeAnnotation::named("ID", false),
    );

    let root = query.root();
    assert_eq!(root.name(), "user");
    assert_eq!(root.arguments()[0].value(), &Value::Variable("id".to_string()));
    assert_eq!(child_names(root), vec!["id", "name"]);
    assert!(child(root, "id").is_leaf());
}

#[test]
fn leaf_root_field() {
    let schema = build_schema("type Query { version: String }");
    let query = QuerySynthesizer::new(&schema).synthesize("version").unwrap();

    assert!(query.root().is_leaf());
    assert_eq!(query.to_query_text(), "query {\n  version\n}\n");
}

#[test]
fn operation_name_and_indent_are_configurable() {
    let schema = build_schema(USER_SCHEMA);
    let query = QuerySynthesizer::new(&schema)
        .with_config(
            SynthesisConfig::new()
                .with_operation_name(Some("GetUser".to_string()))
                .with_indent(4),
        )
        .synthesize("user")
        .unwrap();

    assert_eq!(query.operation_name(), Some("GetUser"));
    assert_eq!(
        query.to_query_text(),
        "query GetUser($id: ID!) {\n    user(id: $id) {\n        id\n        name\n    }\n}\n",
    );
}

#[test]
fn schema_argument_defaults_carry_into_variables() {
    let schema = build_schema(r#"
        type Query { users(first: Int = 10, after: String): [User!]! }
        type User { id: ID! }
    "#);
    let query = QuerySynthesizer::new(&schema).synthesize("users").unwrap();

    let var_names = query.variables().iter()
        .map(|var_def| var_def.name())
        .collect::<Vec<_>>();
    assert_eq!(var_names, vec!["first", "after"]);
    assert_eq!(query.variables()[0].default_value(), Some(&Value::Int(10)));
    assert_eq!(query.variables()[1].default_value(), None);
}

#[test]
fn nested_field_arguments_are_not_bound_by_default() {
    let schema = build_schema(r#"
        type Query { user(id: ID!): User }
        type User { posts(first: Int): [Post] }
        type Post { id: ID }
    "#);
    let query = QuerySynthesizer::new(&schema).synthesize("user").unwrap();

    assert_eq!(query.variables().len(), 1);
    assert!(child(query.root(), "posts").arguments().is_empty());
}

#[test]
fn union_return_types_select_typename() {
    let schema = build_schema(r#"
        type Query { search(term: String): [SearchResult] }
        type A { a: Int }
        type B { b: Int }
        union SearchResult = A | B
    "#);
    let query = QuerySynthesizer::new(&schema).synthesize("search").unwrap();

    assert_eq!(child_names(query.root()), vec!["__typename"]);
    assert_eq!(
        query.to_query_text(),
        "query($term: String) {\n  search(term: $term) {\n    __typename\n  }\n}\n",
    );
}

#[test]
fn interface_return_types_expand_their_fields() {
    let schema = build_schema(r#"
        type Query { node(id: ID!): Node }
        interface Node { id: ID! kind: String }
    "#);
    let query = QuerySynthesizer::new(&schema).synthesize("node").unwrap();

    assert_eq!(child_names(query.root()), vec!["id", "kind"]);
}

#[test]
fn synthesized_text_reparses_to_the_same_document() {
    let schema = build_schema(r#"
        type Query { user(id: ID!, role: Role = GUEST): User }
        type User { id: ID! role: Role friends: [User!]! }
        enum Role { ADMIN GUEST }
    "#);
    let query = QuerySynthesizer::new(&schema).synthesize("user").unwrap();

    let reparsed = QueryDocument::parse(&query.to_query_text()).unwrap();
    assert_eq!(reparsed, query.to_document());
}

#[test]
fn synthesize_all_follows_declaration_order() {
    let schema = build_schema(r#"
        type Query { b: Int a(id: ID): User c: [User] }
        type User { id: ID }
    "#);
    let all = QuerySynthesizer::new(&schema).synthesize_all().unwrap();

    assert_eq!(all.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    assert_eq!(all["a"].root().name(), "a");
    assert_eq!(all["a"].variables()[0].name(), "id");
}

// =============================================================================
// Depth and cycles
// =============================================================================

#[test]
fn max_depth_bounds_a_self_referential_type() {
    let schema = build_schema(CYCLIC_SCHEMA);
    let query = QuerySynthesizer::new(&schema)
        .with_config(SynthesisConfig::new().with_max_depth(Some(3)))
        .synthesize("a")
        .unwrap();

    let root = query.root();
    assert_eq!(root.depth(), 3);

    let innermost = child(child(root, "self"), "self");
    assert!(innermost.is_truncated());
    assert!(innermost.children().is_none());

    assert_eq!(
        query.to_query_text(),
        concat!(
            "query {\n",
            "  a {\n",
            "    self {\n",
            "      self\n",
            "      name\n",
            "    }\n",
            "    name\n",
            "  }\n",
            "}\n",
        ),
    );
}

#[test]
fn max_depth_of_one_leaves_the_root_bare() {
    let schema = build_schema(USER_SCHEMA);
    let query = QuerySynthesizer::new(&schema)
        .with_config(SynthesisConfig::new().with_max_depth(Some(1)))
        .synthesize("user")
        .unwrap();

    assert!(query.root().is_truncated());
    assert_eq!(query.root().depth(), 1);
    // Root arguments are still bound.
    assert_eq!(query.variables().len(), 1);
}

#[test]
fn unbounded_synthesis_stops_at_repeated_types() {
    let schema = build_schema(CYCLIC_SCHEMA);
    let query = QuerySynthesizer::new(&schema).synthesize("a").unwrap();

    let root = query.root();
    assert_eq!(root.depth(), 2);
    assert_eq!(child_names(root), vec!["self", "name"]);
    assert!(child(root, "self").is_truncated());
}

#[test]
fn unbounded_synthesis_over_a_mutual_cycle() {
    let schema = build_schema(r#"
        type Query { user: User }
        type User { id: ID posts: [Post] }
        type Post { title: String author: User comments: [Comment] }
        type Comment { text: String post: Post author: User }
    "#);
    let query = QuerySynthesizer::new(&schema).synthesize("user").unwrap();

    let posts = child(query.root(), "posts");
    assert!(child(posts, "author").is_truncated());

    let comments = child(posts, "comments");
    assert!(child(comments, "post").is_truncated());
    assert!(child(comments, "author").is_truncated());
    assert_eq!(query.root().depth(), 4);
}

#[test]
fn sibling_branches_may_reuse_a_type() {
    let schema = build_schema(r#"
        type Query { pair: Pair }
        type Pair { left: Leaf right: Leaf }
        type Leaf { value: Int }
    "#);
    let query = QuerySynthesizer::new(&schema).synthesize("pair").unwrap();

    assert!(!child(query.root(), "left").is_truncated());
    assert!(!child(query.root(), "right").is_truncated());
    assert_eq!(child_names(child(query.root(), "right")), vec!["value"]);
}

#[test]
fn types_without_fields_are_truncated() {
    let schema = build_schema(r#"
        type Query { empty: Empty holder: Holder }
        type Holder { id: ID inner: Empty }
        type Empty
    "#);
    let synthesizer = QuerySynthesizer::new(&schema);

    let query = synthesizer.synthesize("empty").unwrap();
    assert!(query.root().is_truncated());
    assert!(query.root().children().is_none());
    assert_eq!(query.to_query_text(), "query {\n  empty\n}\n");

    let query = synthesizer.synthesize("holder").unwrap();
    assert!(!query.root().is_truncated());
    assert!(child(query.root(), "inner").is_truncated());
}

// =============================================================================
// Nested argument binding
// =============================================================================

#[test]
fn nested_arguments_get_unique_variables_in_document_order() {
    let schema = build_schema(r#"
        type Query { user(id: ID!): User }
        type User {
            id: ID!
            friend(id: ID, first: Int): User
            posts(first: Int): [Post]
        }
        type Post { id: ID }
    "#);
    let query = QuerySynthesizer::new(&schema)
        .with_config(
            SynthesisConfig::new()
                .with_bind_nested_arguments(true)
                .with_max_depth(Some(3)),
        )
        .synthesize("user")
        .unwrap();

    let var_names = query.variables().iter()
        .map(|var_def| var_def.name())
        .collect::<Vec<_>>();
    assert_eq!(
        var_names,
        vec!["id", "id1", "first", "id2", "first1", "first2", "first3"],
    );
    assert_eq!(
        var_names.iter().collect::<HashSet<_>>().len(),
        var_names.len(),
    );

    let friend = child(query.root(), "friend");
    assert_eq!(friend.arguments()[0].name(), "id");
    assert_eq!(friend.arguments()[0].value(), &Value::Variable("id1".to_string()));

    // Every bound variable has exactly one definition, so the printed query
    // re-parses cleanly.
    let reparsed = QueryDocument::parse(&query.to_query_text()).unwrap();
    assert_eq!(reparsed.operation().variables().len(), 7);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unknown_root_field() {
    let schema = build_schema(USER_SCHEMA);
    let result = QuerySynthesizer::new(&schema).synthesize("nope");

    assert_eq!(result, Err(SynthesisError::UnknownRootField {
        available: vec!["user".to_string()],
        field_name: "nope".to_string(),
    }));
}

#[test]
fn schema_without_root_type() {
    let schema = build_schema("type User { id: ID }");
    let result = QuerySynthesizer::new(&schema).synthesize("user");

    assert_eq!(result, Err(SynthesisError::Schema(SchemaError::NoRootType)));
}

#[test]
fn undeclared_return_type_is_reported() {
    let schema = build_schema(r#"
        type Query { user: User }
        type User { id: ID pet: Pet }
    "#);
    let result = QuerySynthesizer::new(&schema).synthesize("user");

    assert!(matches!(
        result,
        Err(SynthesisError::Schema(SchemaError::InvalidFieldType { return_type_name, .. }))
            if return_type_name == "Pet",
    ));
}
