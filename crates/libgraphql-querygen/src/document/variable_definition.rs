use crate::ast;
use crate::document::Value;
use crate::types::TypeAnnotation;

/// An operation-level variable declaration, e.g. `$id: ID! = "1"`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableDefinition {
    pub(crate) default_value: Option<Value>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl VariableDefinition {
    pub(crate) fn from_ast(ast_var_def: &ast::operation::VariableDefinition) -> Self {
        Self {
            default_value: ast_var_def.default_value.as_ref().map(Value::from_ast),
            name: ast_var_def.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&ast_var_def.var_type),
        }
    }

    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            default_value: None,
            name: name.into(),
            type_annotation,
        }
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// The variable's name, without the leading `$`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    /// Produce a copy of this definition with a different default value. The
    /// declared type annotation is kept as-is.
    pub fn with_default_value(&self, default_value: Option<Value>) -> Self {
        Self {
            default_value,
            name: self.name.clone(),
            type_annotation: self.type_annotation.clone(),
        }
    }

    /// Produce a copy of this definition under another name, keeping its
    /// type annotation and default value.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            default_value: self.default_value.clone(),
            name: name.into(),
            type_annotation: self.type_annotation.clone(),
        }
    }
}
