use crate::document::QueryDocument;
use crate::document::Value;
use crate::transform::TransformEngine;
use crate::transform::TransformError;
use crate::types::TypeAnnotation;

fn parse(query_src: &str) -> QueryDocument {
    QueryDocument::parse(query_src).unwrap()
}

// =============================================================================
// apply_argument
// =============================================================================

mod structured_values {
    use super::*;

    #[test]
    fn variable_bound_argument_sets_the_variable_default() {
        let doc = parse("query($id: ID!) { user(id: $id) { id name } }");

        let edited = TransformEngine::new().apply_argument(&doc, "id", Value::from("abc")).unwrap();

        let var_def = edited.operation().variable("id").unwrap();
        assert_eq!(var_def.default_value(), Some(&Value::from("abc")));
        assert_eq!(var_def.type_annotation(), &TypeAnnotation::named("ID", false));

        // Selections (and the argument's variable reference) are untouched.
        assert_eq!(edited.operation().selection_set(), doc.operation().selection_set());
        assert_eq!(
            edited.to_string(),
            "query($id: ID! = \"abc\") {\n  user(id: $id) {\n    id\n    name\n  }\n}\n",
        );
    }

    #[test]
    fn literal_argument_is_replaced_inline() {
        let doc = parse(r#"query { user(id: "1") { id } }"#);

        let doc = TransformEngine::new().apply_argument(&doc, "id", Value::from("2")).unwrap();

        assert_eq!(doc.to_string(), "query {\n  user(id: \"2\") {\n    id\n  }\n}\n");
    }

    #[test]
    fn every_occurrence_is_rewritten() {
        let doc = parse(r#"
            query($first: Int) {
                posts(first: $first) { id }
                comments(first: 3) { id }
            }
        "#);

        let doc = TransformEngine::new().apply_argument(&doc, "first", Value::Int(10)).unwrap();

        assert_eq!(
            doc.to_string(),
            "query($first: Int = 10) {\n  posts(first: $first) {\n    id\n  }\n  \
             comments(first: 10) {\n    id\n  }\n}\n",
        );
    }

    #[test]
    fn directive_arguments_are_rewritten() {
        let doc = parse("query { user { email @include(if: true) } }");

        let doc = TransformEngine::new().apply_argument(&doc, "if", Value::Boolean(false)).unwrap();

        assert_eq!(
            doc.to_string(),
            "query {\n  user {\n    email @include(if: false)\n  }\n}\n",
        );
    }

    #[test]
    fn absent_argument_leaves_document_unchanged() {
        let doc = parse("query($id: ID!) { user(id: $id) { id } }");

        let edited = TransformEngine::new().apply_argument(&doc, "first", Value::Int(1)).unwrap();

        assert_eq!(edited, doc);
    }

    #[test]
    fn applying_twice_equals_applying_once() {
        let doc = parse(r#"query($id: ID!) { user(id: $id) { id } node(id: "x") { id } }"#);
        let engine = TransformEngine::new();

        let once = engine.apply_argument(&doc, "id", Value::from("abc")).unwrap();
        let twice = engine.apply_argument(&once, "id", Value::from("abc")).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn int_literal_stays_an_int() {
        let doc = parse("query { list(page: 1) { id } }");

        let doc = TransformEngine::new().apply_argument(&doc, "page", Value::from("2")).unwrap();

        let list = doc.operation().selection_set().field("list").unwrap();
        assert_eq!(list.argument("page").unwrap().value(), &Value::Int(2));
        assert_eq!(doc.to_string(), "query {\n  list(page: 2) {\n    id\n  }\n}\n");
    }

    #[test]
    fn enum_literal_stays_an_enum() {
        let doc = parse("query { posts(orderBy: DATE) { id } }");

        let doc = TransformEngine::new()
            .apply_argument(&doc, "orderBy", Value::from("TITLE"))
            .unwrap();

        assert_eq!(doc.to_string(), "query {\n  posts(orderBy: TITLE) {\n    id\n  }\n}\n");
    }

    #[test]
    fn unconvertible_literal_value_is_an_error() {
        let doc = parse("query { list(page: 1) { id } }");

        let result = TransformEngine::new().apply_argument(&doc, "page", Value::from("two"));

        assert_eq!(result, Err(TransformError::ValueCoercion {
            argument_name: "page".to_string(),
            expected: "a value like the current IntValue".to_string(),
            raw: "two".to_string(),
        }));
    }

    #[test]
    fn null_replaces_any_literal() {
        let doc = parse("query { list(page: 1) { id } }");

        let doc = TransformEngine::new().apply_argument(&doc, "page", Value::Null).unwrap();

        assert_eq!(doc.to_string(), "query {\n  list(page: null) {\n    id\n  }\n}\n");
    }
}

// =============================================================================
// apply_argument with a variable reference
// =============================================================================

mod variable_values {
    use super::*;

    fn other() -> Value {
        Value::Variable("other".to_string())
    }

    #[test]
    fn rebinds_to_a_defined_variable_and_drops_the_orphan() {
        let doc = parse("query($id: ID!, $other: ID!) { user(id: $id) { id } }");

        let doc = TransformEngine::new().apply_argument(&doc, "id", other()).unwrap();

        let user = doc.operation().selection_set().field("user").unwrap();
        assert_eq!(user.argument("id").unwrap().value(), &other());
        let var_names = doc.operation().variables().iter()
            .map(|var_def| var_def.name())
            .collect::<Vec<_>>();
        assert_eq!(var_names, vec!["other"]);
    }

    #[test]
    fn undefined_variable_takes_over_the_orphaned_definition() {
        let doc = parse("query($id: ID! = \"1\") { user(id: $id) { id } }");

        let doc = TransformEngine::new().apply_argument(&doc, "id", other()).unwrap();

        assert_eq!(
            doc.to_string(),
            "query($other: ID! = \"1\") {\n  user(id: $other) {\n    id\n  }\n}\n",
        );
    }

    #[test]
    fn definitions_still_in_use_are_kept() {
        let doc = parse(r#"
            query($id: ID!, $other: ID!) {
                user(id: $id) { id }
                node(key: $id) { id }
            }
        "#);

        let doc = TransformEngine::new().apply_argument(&doc, "id", other()).unwrap();

        assert!(doc.operation().variable("id").is_some());
        assert!(doc.operation().variable("other").is_some());
    }

    #[test]
    fn references_inside_fragments_keep_a_definition() {
        let doc = parse(r#"
            query($id: ID!, $other: ID!) {
                user(id: $id) { ...UserBits }
            }

            fragment UserBits on User { friend(id: $id) { name } }
        "#);

        let doc = TransformEngine::new().apply_argument(&doc, "id", other()).unwrap();

        assert!(doc.operation().variable("id").is_some());
    }

    #[test]
    fn unrelated_unused_definitions_are_kept() {
        let doc = parse("query($id: ID!, $other: ID!, $spare: Int) { user(id: $id) { id } }");

        let doc = TransformEngine::new().apply_argument(&doc, "id", other()).unwrap();

        let var_names = doc.operation().variables().iter()
            .map(|var_def| var_def.name())
            .collect::<Vec<_>>();
        assert_eq!(var_names, vec!["other", "spare"]);
    }

    #[test]
    fn undefined_variable_without_a_definition_to_rename_is_an_error() {
        let doc = parse("query { user(id: \"1\") { id } }");

        let result = TransformEngine::new().apply_argument(&doc, "id", other());

        assert_eq!(result, Err(TransformError::UndefinedVariable {
            name: "other".to_string(),
        }));
    }

    #[test]
    fn rebinding_twice_equals_rebinding_once() {
        let doc = parse("query($id: ID!) { user(id: $id) { id } }");
        let engine = TransformEngine::new();

        let once = engine.apply_argument(&doc, "id", other()).unwrap();
        let twice = engine.apply_argument(&once, "id", other()).unwrap();

        assert_eq!(once, twice);
    }
}

// =============================================================================
// apply_argument_text
// =============================================================================

mod raw_text {
    use super::*;

    #[test]
    fn coerces_to_the_bound_variable_type() {
        let doc = parse("query($first: Int) { users(first: $first) { id } }");

        let doc = TransformEngine::new().apply_argument_text(&doc, "first", "25").unwrap();

        assert_eq!(
            doc.operation().variable("first").unwrap().default_value(),
            Some(&Value::Int(25)),
        );
    }

    #[test]
    fn id_text_stays_a_string() {
        let doc = parse("query($id: ID!) { user(id: $id) { id } }");

        let doc = TransformEngine::new().apply_argument_text(&doc, "id", "123").unwrap();

        assert_eq!(
            doc.operation().variable("id").unwrap().default_value(),
            Some(&Value::from("123")),
        );
    }

    #[test]
    fn single_item_is_wrapped_for_list_variables() {
        let doc = parse("query($ids: [ID!]) { users(ids: $ids) { id } }");

        let doc = TransformEngine::new().apply_argument_text(&doc, "ids", "a").unwrap();

        assert_eq!(
            doc.operation().variable("ids").unwrap().default_value(),
            Some(&Value::List(vec![Value::from("a")])),
        );
    }

    #[test]
    fn coerces_like_the_current_literal() {
        let doc = parse("query { users(first: 5, orderBy: NAME) { id } }");
        let engine = TransformEngine::new();

        let doc = engine.apply_argument_text(&doc, "first", "7").unwrap();
        let doc = engine.apply_argument_text(&doc, "orderBy", "AGE").unwrap();

        let users = doc.operation().selection_set().field("users").unwrap();
        assert_eq!(users.argument("first").unwrap().value(), &Value::Int(7));
        assert_eq!(
            users.argument("orderBy").unwrap().value(),
            &Value::Enum("AGE".to_string()),
        );
    }

    #[test]
    fn mistyped_text_is_an_error() {
        let doc = parse("query($first: Int) { users(first: $first) { id } }");

        let result = TransformEngine::new().apply_argument_text(&doc, "first", "ten");

        assert_eq!(result, Err(TransformError::ValueCoercion {
            argument_name: "first".to_string(),
            expected: "an Int".to_string(),
            raw: "ten".to_string(),
        }));
    }

    #[test]
    fn null_for_non_null_variable_is_an_error() {
        let doc = parse("query($id: ID!) { user(id: $id) { id } }");

        let result = TransformEngine::new().apply_argument_text(&doc, "id", "null");

        assert!(matches!(result, Err(TransformError::ValueCoercion { .. })));
    }

    #[test]
    fn absent_argument_leaves_document_unchanged() {
        let doc = parse("query { user { id } }");

        let edited = TransformEngine::new().apply_argument_text(&doc, "id", "1").unwrap();

        assert_eq!(edited, doc);
    }
}

// =============================================================================
// Parsing and renaming
// =============================================================================

mod operation_edits {
    use super::*;

    #[test]
    fn parse_errors_are_invalid_documents() {
        let result = TransformEngine::new().parse_document("query {");

        assert!(matches!(result, Err(TransformError::InvalidDocument(_))));
    }

    #[test]
    fn rename_sets_the_operation_name() {
        let doc = parse("query { user { id } }");

        let doc = TransformEngine::new().rename_operation(&doc, Some("GetUser")).unwrap();

        assert_eq!(doc.operation().name(), Some("GetUser"));
        assert!(doc.to_string().starts_with("query GetUser {\n"));
    }

    #[test]
    fn rename_to_none_clears_the_name() {
        let doc = parse("query GetUser { user { id } }");

        let doc = TransformEngine::new().rename_operation(&doc, None).unwrap();

        assert_eq!(doc.operation().name(), None);
    }

    #[test]
    fn invalid_names_are_rejected() {
        let doc = parse("query { user { id } }");
        let engine = TransformEngine::new();

        for name in ["", "1up", "get-user", "has space"] {
            assert_eq!(
                engine.rename_operation(&doc, Some(name)),
                Err(TransformError::InvalidOperationName {
                    name: name.to_string(),
                }),
            );
        }
    }
}
