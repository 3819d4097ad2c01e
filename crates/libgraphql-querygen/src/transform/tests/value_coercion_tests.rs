use crate::document::Value;
use crate::transform::value_coercion::coerce_like;
use crate::transform::value_coercion::coerce_to_type;
use crate::transform::value_coercion::conform_to_literal;
use crate::transform::value_coercion::is_valid_name;
use crate::transform::value_coercion::parse_value_literal;
use crate::transform::TransformError;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

fn named(name: &str, nullable: bool) -> TypeAnnotation {
    TypeAnnotation::named(name, nullable)
}

// =============================================================================
// Names and literals
// =============================================================================

#[test]
fn valid_names() {
    for name in ["a", "_", "GetUser", "get_user2", "__typename"] {
        assert!(is_valid_name(name), "{name}");
    }
    for name in ["", "2a", "a-b", "a b", "é"] {
        assert!(!is_valid_name(name), "{name}");
    }
}

#[test]
fn parses_complete_literals() {
    assert_eq!(
        parse_value_literal("[1, 2]"),
        Some(Value::List(vec![Value::Int(1), Value::Int(2)])),
    );
    assert_eq!(
        parse_value_literal("{a: B, c: \"d\"}"),
        Some(Value::Object(IndexMap::from([
            ("a".to_string(), Value::Enum("B".to_string())),
            ("c".to_string(), Value::from("d")),
        ]))),
    );
    assert_eq!(parse_value_literal("null"), Some(Value::Null));
}

#[test]
fn rejects_variables_and_trailing_text() {
    assert_eq!(parse_value_literal("$id"), None);
    assert_eq!(parse_value_literal("[1, $id]"), None);
    assert_eq!(parse_value_literal("1) { x"), None);
    assert_eq!(parse_value_literal("1, other: 2"), None);
    assert_eq!(parse_value_literal("not a literal"), None);
}

// =============================================================================
// Coercion against a declared type
// =============================================================================

mod to_type {
    use super::*;

    #[test]
    fn builtin_scalars() {
        assert_eq!(coerce_to_type("a", "42", &named("Int", false)), Ok(Value::Int(42)));
        assert_eq!(coerce_to_type("a", "1.5", &named("Float", false)), Ok(Value::Float(1.5)));
        assert_eq!(
            coerce_to_type("a", "true", &named("Boolean", true)),
            Ok(Value::Boolean(true)),
        );
        assert_eq!(coerce_to_type("a", "42", &named("ID", false)), Ok(Value::from("42")));
        assert_eq!(
            coerce_to_type("a", " hi there ", &named("String", false)),
            Ok(Value::from(" hi there ")),
        );
    }

    #[test]
    fn malformed_scalars_are_errors() {
        assert_eq!(
            coerce_to_type("count", "1.5", &named("Int", false)),
            Err(TransformError::ValueCoercion {
                argument_name: "count".to_string(),
                expected: "an Int".to_string(),
                raw: "1.5".to_string(),
            }),
        );
        assert!(coerce_to_type("a", "NaN", &named("Float", false)).is_err());
        assert!(coerce_to_type("a", "yes", &named("Boolean", false)).is_err());
    }

    #[test]
    fn null_requires_a_nullable_type() {
        assert_eq!(coerce_to_type("a", "null", &named("Int", true)), Ok(Value::Null));
        assert!(coerce_to_type("a", "null", &named("Int", false)).is_err());
    }

    #[test]
    fn lists() {
        let ints = TypeAnnotation::list(named("Int", false), true);

        assert_eq!(
            coerce_to_type("a", "[1, 2]", &ints),
            Ok(Value::List(vec![Value::Int(1), Value::Int(2)])),
        );
        assert_eq!(coerce_to_type("a", "3", &ints), Ok(Value::List(vec![Value::Int(3)])));
        assert!(coerce_to_type("a", "[1, 2", &ints).is_err());
    }

    #[test]
    fn enums_input_objects_and_custom_scalars() {
        assert_eq!(
            coerce_to_type("a", "NAME", &named("SortOrder", false)),
            Ok(Value::Enum("NAME".to_string())),
        );
        assert_eq!(
            coerce_to_type("a", "{limit: 3}", &named("PageInput", false)),
            Ok(Value::Object(IndexMap::from([
                ("limit".to_string(), Value::Int(3)),
            ]))),
        );
        assert_eq!(
            coerce_to_type("a", "2024-01-01", &named("Date", false)),
            Ok(Value::from("2024-01-01")),
        );
    }
}

// =============================================================================
// Coercion against an existing literal
// =============================================================================

mod like_existing {
    use super::*;

    #[test]
    fn follows_the_existing_kind() {
        assert_eq!(coerce_like("a", "7", &Value::Int(1)), Ok(Value::Int(7)));
        assert_eq!(coerce_like("a", "false", &Value::Boolean(true)), Ok(Value::Boolean(false)));
        assert_eq!(coerce_like("a", "2", &Value::Float(1.0)), Ok(Value::Float(2.0)));
        assert_eq!(coerce_like("a", "7", &Value::from("x")), Ok(Value::from("7")));
        assert_eq!(
            coerce_like("a", "DESC", &Value::Enum("ASC".to_string())),
            Ok(Value::Enum("DESC".to_string())),
        );
    }

    #[test]
    fn composite_literals_need_complete_text() {
        assert_eq!(
            coerce_like("a", "[\"x\"]", &Value::List(vec![])),
            Ok(Value::List(vec![Value::from("x")])),
        );
        assert_eq!(coerce_like("a", "5", &Value::Null), Ok(Value::Int(5)));
        assert!(coerce_like("a", "[oops", &Value::List(vec![])).is_err());
    }

    #[test]
    fn mismatched_kind_is_an_error() {
        assert_eq!(
            coerce_like("first", "many", &Value::Int(1)),
            Err(TransformError::ValueCoercion {
                argument_name: "first".to_string(),
                expected: "a value like the current IntValue".to_string(),
                raw: "many".to_string(),
            }),
        );
    }

    #[test]
    fn true_is_not_an_enum_value() {
        assert_eq!(
            coerce_like("a", "true", &Value::Enum("ASC".to_string())),
            Ok(Value::Boolean(true)),
        );
    }
}

// =============================================================================
// Conforming a structured value to the literal it replaces
// =============================================================================

mod conform {
    use super::*;

    #[test]
    fn same_kind_passes_through() {
        assert_eq!(conform_to_literal("a", &Value::Int(2), &Value::Int(1)), Ok(Value::Int(2)));
        assert_eq!(
            conform_to_literal("a", &Value::List(vec![]), &Value::List(vec![Value::Int(1)])),
            Ok(Value::List(vec![])),
        );
    }

    #[test]
    fn nulls_pass_through() {
        assert_eq!(conform_to_literal("a", &Value::Null, &Value::Int(1)), Ok(Value::Null));
        assert_eq!(conform_to_literal("a", &Value::from("x"), &Value::Null), Ok(Value::from("x")));
    }

    #[test]
    fn text_takes_the_existing_kind() {
        assert_eq!(conform_to_literal("a", &Value::from("2"), &Value::Int(1)), Ok(Value::Int(2)));
        assert_eq!(conform_to_literal("a", &Value::Int(2), &Value::Float(1.5)), Ok(Value::Float(2.0)));
        assert_eq!(conform_to_literal("a", &Value::Int(2), &Value::from("1")), Ok(Value::from("2")));
        assert_eq!(
            conform_to_literal("a", &Value::from("DESC"), &Value::Enum("ASC".to_string())),
            Ok(Value::Enum("DESC".to_string())),
        );
    }

    #[test]
    fn a_different_kind_after_coercion_is_an_error() {
        assert_eq!(
            conform_to_literal("ids", &Value::Int(5), &Value::List(vec![])),
            Err(TransformError::ValueCoercion {
                argument_name: "ids".to_string(),
                expected: "a value like the current ListValue".to_string(),
                raw: "5".to_string(),
            }),
        );
        assert!(conform_to_literal("a", &Value::Float(2.5), &Value::Int(1)).is_err());
    }
}
