use crate::types::Parameter;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`SchemaModel`](crate::schema::SchemaModel).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Parameter>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, Parameter> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
