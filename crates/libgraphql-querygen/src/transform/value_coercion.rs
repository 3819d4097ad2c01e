use crate::ast;
use crate::document::Value;
use crate::transform::TransformError;
use crate::types::TypeAnnotation;

type Result<T> = std::result::Result<T, TransformError>;

/// Indicates whether `name` matches the GraphQL `Name` production.
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|ch| ch == '_' || ch.is_ascii_alphabetic())
        && chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric())
}

/// Parse `raw` as a GraphQL literal (`[1, 2]`, `{a: B}`, `"str"`, ...).
/// Variable references are not literals and are rejected.
pub(crate) fn parse_value_literal(raw: &str) -> Option<Value> {
    use ast::operation::Definition;
    use ast::operation::OperationDefinition;
    use ast::operation::Selection;

    // Anything that spills out of the argument position shows up as extra
    // definitions, selections or arguments.
    let doc = ast::operation::parse(&format!("{{ f(v: {raw}) }}")).ok()?;
    let [Definition::Operation(OperationDefinition::SelectionSet(selection_set))] =
        doc.definitions.as_slice() else {
        return None;
    };
    let [Selection::Field(field)] = selection_set.items.as_slice() else {
        return None;
    };
    let [(_, ast_value)] = field.arguments.as_slice() else {
        return None;
    };

    let value = Value::from_ast(ast_value);
    if contains_variable(&value) {
        None
    } else {
        Some(value)
    }
}

/// A name that can stand as an enum value: `true`, `false` and `null` are
/// names but read back as other literals.
fn is_enum_value_name(name: &str) -> bool {
    is_valid_name(name) && !matches!(name, "true" | "false" | "null")
}

fn contains_variable(value: &Value) -> bool {
    let mut stack = vec![value];
    while let Some(value) = stack.pop() {
        match value {
            Value::Variable(_) => return true,
            Value::List(items) => stack.extend(items.iter()),
            Value::Object(entries) => stack.extend(entries.values()),
            _ => (),
        }
    }
    false
}

/// Coerce raw user text into a value of the type described by
/// `type_annotation` (typically a variable's declared type).
pub(crate) fn coerce_to_type(
    argument_name: &str,
    raw: &str,
    type_annotation: &TypeAnnotation,
) -> Result<Value> {
    let trimmed = raw.trim();
    let coercion_err = |expected: String| TransformError::ValueCoercion {
        argument_name: argument_name.to_string(),
        expected,
        raw: raw.to_string(),
    };

    if trimmed == "null" {
        return if type_annotation.nullable() {
            Ok(Value::Null)
        } else {
            Err(coercion_err(format!("a non-null {type_annotation}")))
        };
    }

    match type_annotation {
        TypeAnnotation::List { inner, .. } =>
            if trimmed.starts_with('[') {
                parse_value_literal(trimmed)
                    .filter(|value| matches!(value, Value::List(_)))
                    .ok_or_else(|| coercion_err(format!("a {type_annotation} list literal")))
            } else {
                // A single item is accepted where a list is expected.
                Ok(Value::List(vec![coerce_to_type(argument_name, raw, inner)?]))
            },

        TypeAnnotation::Named { name, .. } => match name.as_str() {
            "ID" | "String" =>
                Ok(Value::String(raw.to_string())),

            "Int" => trimmed.parse::<i64>()
                .map(Value::Int)
                .map_err(|_| coercion_err("an Int".to_string())),

            "Float" => parse_float(trimmed)
                .ok_or_else(|| coercion_err("a Float".to_string())),

            "Boolean" => parse_bool(trimmed)
                .ok_or_else(|| coercion_err("a Boolean (`true` or `false`)".to_string())),

            // Enums, input objects and custom scalars: an object literal is
            // taken as-is, a bare name becomes an enum value and anything
            // else is passed along as a string.
            _ if trimmed.starts_with('{') => parse_value_literal(trimmed)
                .filter(|value| matches!(value, Value::Object(_)))
                .ok_or_else(|| coercion_err(format!("a {name} input object literal"))),

            _ if is_enum_value_name(trimmed) =>
                Ok(Value::Enum(trimmed.to_string())),

            _ => Ok(Value::String(raw.to_string())),
        },
    }
}

/// Coerce raw user text into a value of the same kind as `existing` (the
/// literal currently bound to the argument).
pub(crate) fn coerce_like(
    argument_name: &str,
    raw: &str,
    existing: &Value,
) -> Result<Value> {
    let trimmed = raw.trim();
    let coercion_err = || TransformError::ValueCoercion {
        argument_name: argument_name.to_string(),
        expected: format!("a value like the current {}", existing.kind_name()),
        raw: raw.to_string(),
    };

    match existing {
        Value::Boolean(_) => parse_bool(trimmed).ok_or_else(coercion_err),

        Value::Enum(_) if is_enum_value_name(trimmed) =>
            Ok(Value::Enum(trimmed.to_string())),

        Value::Float(_) => parse_float(trimmed).ok_or_else(coercion_err),

        Value::Int(_) => trimmed.parse::<i64>()
            .map(Value::Int)
            .map_err(|_| coercion_err()),

        Value::String(_) => Ok(Value::String(raw.to_string())),

        // Nulls, lists and objects carry no usable kind hint for a single
        // scalar, so the text must be a complete literal.
        Value::Enum(_)
            | Value::List(_)
            | Value::Null
            | Value::Object(_)
            | Value::Variable(_) => parse_value_literal(trimmed).ok_or_else(coercion_err),
    }
}

/// Bring `new_value` to the kind of `existing`, the literal it is about to
/// replace.
///
/// A value of the same kind passes through untouched, as does anything
/// replacing (or replaced by) `null`. Otherwise the value's text goes
/// through [`coerce_like`] and must come out with the existing kind.
pub(crate) fn conform_to_literal(
    argument_name: &str,
    new_value: &Value,
    existing: &Value,
) -> Result<Value> {
    let same_kind = std::mem::discriminant(new_value) == std::mem::discriminant(existing);
    if same_kind || matches!(existing, Value::Null) || matches!(new_value, Value::Null) {
        return Ok(new_value.clone());
    }

    let raw = match new_value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    let coerced = coerce_like(argument_name, &raw, existing)?;
    if std::mem::discriminant(&coerced) != std::mem::discriminant(existing) {
        return Err(TransformError::ValueCoercion {
            argument_name: argument_name.to_string(),
            expected: format!("a value like the current {}", existing.kind_name()),
            raw,
        });
    }
    Ok(coerced)
}

fn parse_bool(raw: &str) -> Option<Value> {
    match raw {
        "true" => Some(Value::Boolean(true)),
        "false" => Some(Value::Boolean(false)),
        _ => None,
    }
}

fn parse_float(raw: &str) -> Option<Value> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Value::Float)
}
