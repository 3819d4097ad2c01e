use crate::ast;
use indexmap::IndexMap;

/// A literal (or variable reference) appearing as an argument value, a
/// directive argument value, or a variable's default value.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    Variable(String),
}
impl Value {
    pub(crate) fn from_ast(ast_value: &ast::Value) -> Self {
        match ast_value {
            ast::Value::Boolean(value) =>
                Value::Boolean(*value),

            ast::Value::Enum(value) =>
                Value::Enum(value.to_string()),

            ast::Value::Float(value) =>
                Value::Float(*value),

            // graphql-parser stores every Int literal as an `i64` (wider
            // literals fail to parse), so `as_i64` never comes back empty.
            ast::Value::Int(value) => match value.as_i64() {
                Some(int) => Value::Int(int),
                None => Value::Null,
            },

            ast::Value::List(values) =>
                Value::List(values.iter().map(Value::from_ast).collect()),

            ast::Value::Null =>
                Value::Null,

            ast::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, ast_value)|
                    (key.to_string(), Value::from_ast(ast_value))
                ).collect()),

            ast::Value::String(value) =>
                Value::String(value.clone()),

            ast::Value::Variable(var_name) =>
                Value::Variable(var_name.to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// If this value is a variable reference, the referenced variable's name
    /// (without the leading `$`).
    pub fn as_variable_name(&self) -> Option<&str> {
        if let Self::Variable(name) = self {
            Some(name.as_str())
        } else {
            None
        }
    }

    /// The GraphQL name of this value's kind (e.g. `IntValue`).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "BooleanValue",
            Self::Enum(_) => "EnumValue",
            Self::Float(_) => "FloatValue",
            Self::Int(_) => "IntValue",
            Self::List(_) => "ListValue",
            Self::Null => "NullValue",
            Self::Object(_) => "ObjectValue",
            Self::String(_) => "StringValue",
            Self::Variable(_) => "Variable",
        }
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Enum(name) => f.write_str(name),
            // `{:?}` always keeps a fractional or exponent part, so the
            // printed literal re-parses as a float rather than an int.
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::List(values) => {
                f.write_str("[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            },
            Self::Null => f.write_str("null"),
            Self::Object(entries) => {
                f.write_str("{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            },
            Self::String(value) => write_escaped_string(f, value),
            Self::Variable(name) => write!(f, "${name}"),
        }
    }
}

fn write_escaped_string(
    f: &mut std::fmt::Formatter<'_>,
    value: &str,
) -> std::fmt::Result {
    f.write_str("\"")?;
    for ch in value.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{08}' => f.write_str("\\b")?,
            '\u{0C}' => f.write_str("\\f")?,
            ch if ch.is_control() => write!(f, "\\u{:04X}", ch as u32)?,
            ch => write!(f, "{ch}")?,
        }
    }
    f.write_str("\"")
}
