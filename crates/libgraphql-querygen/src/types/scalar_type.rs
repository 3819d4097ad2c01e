/// A custom scalar type declared with `scalar Name` in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
