/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`SchemaModel`](crate::schema::SchemaModel).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) description: Option<String>,
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// An ordered list of the names of each type defined as a member of this
    /// union.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.iter().map(|name| name.as_str()).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
