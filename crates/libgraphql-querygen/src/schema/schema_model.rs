use crate::schema::SchemaError;
use crate::types::Field;
use crate::types::GraphQLType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaError>;

/// An immutable, fully-loaded GraphQL type schema.
///
/// Every lookup is a pure read. Field maps preserve schema declaration order
/// (fields added by `extend type` are appended after the originals).
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaModel {
    pub(crate) query_type_name: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl SchemaModel {
    /// The fields declared on the named object or interface type.
    pub fn fields_of(&self, type_name: &str) -> Result<&IndexMap<String, Field>> {
        let type_ = self.type_of(type_name)?;
        type_.fields().ok_or_else(|| SchemaError::LeafType {
            kind: type_.kind().name(),
            type_name: type_name.to_string(),
        })
    }

    /// Indicates whether `type_name` names an object, interface or union
    /// type. Unknown names are not composite.
    pub fn is_composite_type(&self, type_name: &str) -> bool {
        self.types.get(type_name).is_some_and(GraphQLType::is_composite)
    }

    /// The name of the root Query type, if the schema designates one
    /// (explicitly through `schema { query: ... }`, or implicitly through a
    /// type named `Query`).
    pub fn query_type_name(&self) -> Option<&str> {
        self.query_type_name.as_deref()
    }

    /// Strip list and non-null wrappers from `field`'s return type and
    /// return the bare type name, provided it names a declared (or built-in)
    /// type.
    pub fn resolve_return_type<'a>(&self, field: &'a Field) -> Result<&'a str> {
        let type_name = field.type_annotation().innermost_type_name();
        if !self.types.contains_key(type_name) {
            return Err(SchemaError::InvalidFieldType {
                field_name: field.name().to_string(),
                parent_type_name: field.parent_type_name().to_string(),
                return_type_name: type_name.to_string(),
            });
        }
        Ok(type_name)
    }

    /// The fields of the root Query type, in declaration order.
    pub fn root_fields(&self) -> Result<&IndexMap<String, Field>> {
        let query_type_name = self.query_type_name()
            .ok_or(SchemaError::NoRootType)?;

        match self.types.get(query_type_name) {
            Some(GraphQLType::Object(obj_type)) => Ok(obj_type.fields()),
            _ => Err(SchemaError::NoRootType),
        }
    }

    pub fn type_of(&self, type_name: &str) -> Result<&GraphQLType> {
        self.types.get(type_name).ok_or_else(|| SchemaError::UnknownType {
            type_name: type_name.to_string(),
        })
    }

    /// All types in the schema (built-in scalars first, then in load order).
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }
}
