//! Shared domain errors.

use std::fmt;

/// Errors raised by value-object construction and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field holds an invalid value.
    InvalidValue {
        /// Field with the invalid value.
        field: String,
        /// What was wrong with it.
        message: String,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
