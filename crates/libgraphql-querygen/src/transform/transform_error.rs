use crate::document::DocumentError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TransformError {
    #[error("Invalid query document: {0}")]
    InvalidDocument(#[from] DocumentError),

    #[error("`{name}` is not a valid GraphQL operation name")]
    InvalidOperationName {
        name: String,
    },

    #[error("`${name}` is not defined by the operation and has no definition to take over")]
    UndefinedVariable {
        name: String,
    },

    #[error("No field with children exists at `{path}`")]
    UnknownSelectionPath {
        path: String,
    },

    #[error("Cannot use `{raw}` as a value for `{argument_name}`: expected {expected}")]
    ValueCoercion {
        argument_name: String,
        expected: String,
        raw: String,
    },
}
