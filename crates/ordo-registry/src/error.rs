//! Registry errors
use ordo_core::OrdoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("REGISTRY/FIELD: invalid field name '{0}'")]
    InvalidFieldName(String),

    #[error("REGISTRY/COMPARATOR: {field}: {reason}")]
    InvalidComparator { field: String, reason: String },

    #[error(transparent)]
    Config(#[from] OrdoError),
}

/// Failure raised by a comparator while ordering two values.
///
/// The registry hands it back to the caller exactly as the comparator
/// produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ComparatorError {
    message: String,
}

impl ComparatorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
