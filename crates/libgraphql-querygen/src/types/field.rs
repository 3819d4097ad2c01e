use crate::ast;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// A field declared on an [`ObjectType`](crate::types::ObjectType) or
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) parent_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub(crate) fn from_ast(
        parent_type_name: &str,
        ast_field: &ast::schema::Field,
    ) -> Self {
        Self {
            name: ast_field.name.to_string(),
            parameters: ast_field.arguments.iter()
                .map(|input_value| (
                    input_value.name.to_string(),
                    Parameter::from_ast(input_value),
                ))
                .collect(),
            parent_type_name: parent_type_name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&ast_field.field_type),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The arguments declared on this field, in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    /// The name of the type this field is declared on.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
