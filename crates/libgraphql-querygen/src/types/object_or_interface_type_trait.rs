use crate::types::Field;
use indexmap::IndexMap;

pub(crate) trait ObjectOrInterfaceTypeTrait {
    fn description(&self) -> Option<&str>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn interface_names(&self) -> Vec<&str>;
    fn name(&self) -> &str;
}
