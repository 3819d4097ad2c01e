/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`SchemaModel`](crate::schema::SchemaModel).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) values: Vec<String>,
}
impl EnumType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The names of the values defined on this enum, in declaration order.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}
