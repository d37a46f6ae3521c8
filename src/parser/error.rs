use thiserror::Error;

use crate::models::ValidationError;

/// Why a line of input could not be turned into a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid command format!\n{usage}")]
    InvalidFormat { usage: &'static str },

    #[error("The command requires mandatory fields to be filled in, missing: {field}")]
    MissingField { field: &'static str },

    #[error("Multiple values specified for the following single-valued field(s): {prefixes}")]
    DuplicatePrefix { prefixes: String },

    #[error("Invalid {field} format.")]
    InvalidNumber { field: &'static str },

    #[error("Invalid date format for {field}, expected YYYY-MM-DD.")]
    InvalidDate { field: &'static str },

    #[error("Invalid {field}: expected one of {allowed}")]
    InvalidChoice {
        field: &'static str,
        allowed: &'static str,
    },

    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    #[error(transparent)]
    Validation(ValidationError),
}

impl From<ValidationError> for ParseError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidDate { field } => ParseError::InvalidDate { field },
            other => ParseError::Validation(other),
        }
    }
}
