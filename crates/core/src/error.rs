//! Error types for Shiftboard Core

use thiserror::Error;

/// Failure while decoding a model from its JSON wire shape
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("Unknown enum tag: {0}")]
    UnknownEnumTag(String),

    #[error("Invalid field {field}: expected {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Expected a JSON object")]
    NotAnObject,

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
