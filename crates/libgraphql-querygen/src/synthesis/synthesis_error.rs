use crate::schema::SchemaError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SynthesisError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(
        "`{field_name}` is not a field of the root Query type (available: {})",
        available.join(", "),
    )]
    UnknownRootField {
        available: Vec<String>,
        field_name: String,
    },
}
