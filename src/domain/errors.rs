use thiserror::Error;

use super::models::{ErrorMap, Field};

/// A rejected field value, as shown beneath the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl FromIterator<FieldError> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = ErrorMap::new();
        for error in iter {
            errors.insert(error.field, error.message);
        }
        errors
    }
}

impl ErrorMap {
    pub fn to_field_errors(&self) -> Vec<FieldError> {
        self.iter()
            .map(|(field, message)| FieldError::new(field, message))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Export failed: {0}")]
    Export(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
