//! Domain error types.

use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<ValidationErrors> for ContactError {
    fn from(errors: ValidationErrors) -> Self {
        ContactError::InvalidArgument(errors.to_string())
    }
}
