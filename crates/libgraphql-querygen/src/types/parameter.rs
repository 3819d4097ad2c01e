use crate::ast;
use crate::document::Value;
use crate::types::TypeAnnotation;

/// An argument declared on a schema [`Field`](crate::types::Field), or an
/// input field declared on an
/// [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) default_value: Option<Value>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub(crate) fn from_ast(input_value: &ast::schema::InputValue) -> Self {
        Self {
            default_value: input_value.default_value.as_ref().map(Value::from_ast),
            name: input_value.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&input_value.value_type),
        }
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
