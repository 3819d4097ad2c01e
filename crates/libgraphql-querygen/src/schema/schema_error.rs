use thiserror::Error;

/// Errors raised by read-only lookups against a
/// [`SchemaModel`](crate::schema::SchemaModel).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error(
        "The `{field_name}` field on `{parent_type_name}` returns \
        `{return_type_name}`, which is not a type defined in the schema"
    )]
    InvalidFieldType {
        field_name: String,
        parent_type_name: String,
        return_type_name: String,
    },

    #[error("The `{type_name}` type is a {kind} type and has no fields")]
    LeafType {
        kind: &'static str,
        type_name: String,
    },

    #[error("The schema does not define a root Query type")]
    NoRootType,

    #[error("No type named `{type_name}` is defined in the schema")]
    UnknownType {
        type_name: String,
    },
}
