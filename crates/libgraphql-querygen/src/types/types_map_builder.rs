use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Accumulates named types while a schema is loaded. The built-in scalars
/// are always present.
#[derive(Debug)]
pub(crate) struct TypesMapBuilder {
    def_locations: IndexMap<String, loc::SchemaDefLocation>,
    types: IndexMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        let builtins = [
            GraphQLType::Bool,
            GraphQLType::Float,
            GraphQLType::ID,
            GraphQLType::Int,
            GraphQLType::String,
        ];

        Self {
            def_locations: builtins.iter()
                .map(|type_| (
                    type_.name().to_string(),
                    loc::SchemaDefLocation::GraphQLBuiltIn,
                ))
                .collect(),
            types: builtins.into_iter()
                .map(|type_| (type_.name().to_string(), type_))
                .collect(),
        }
    }

    pub fn add_new_type(
        &mut self,
        file_position: loc::FilePosition,
        type_name: &str,
        type_: GraphQLType,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: file_position.into(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(conflicting_loc) = self.def_locations.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_loc.clone(),
                def2: file_position.into(),
            });
        }

        self.def_locations.insert(type_name.to_string(), file_position.into());
        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    pub fn get_type_mut(
        &mut self,
        type_name: &str,
    ) -> Option<&mut GraphQLType> {
        self.types.get_mut(type_name)
    }

    pub fn into_types_map(self) -> IndexMap<String, GraphQLType> {
        self.types
    }
}
