//! Phone number value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A customer phone number, stored as entered (trimmed).
///
/// Orders and customer profiles are keyed by the raw phone string; external
/// courier lookups use the digits-only normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Create a phone number, trimming surrounding whitespace.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_string())
    }

    /// Get the raw phone string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits-only form used for external courier lookups.
    #[must_use]
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }

    /// Returns true if the raw string is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length of the raw string in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Phone {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
