use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DocumentError {
    #[error("The query document does not contain a query operation: {reason}")]
    InvalidDocument {
        reason: String,
    },

    #[error("Error parsing query document: {message}")]
    ParseError {
        message: String,
    },
}
