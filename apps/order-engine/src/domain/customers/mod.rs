//! Customers context.
//!
//! Customers are keyed by phone, not by an auth identity. Checkout reads the
//! block flag, the fraud engine reads history, and admins upsert profiles.

pub mod repository;

pub use repository::{CustomerPatch, CustomerRepository, CustomerStoreError};

use serde::{Deserialize, Serialize};

use crate::domain::shared::Phone;

/// A customer profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Phone number, the primary key.
    pub phone: Phone,
    /// Display name, if known.
    pub name: Option<String>,
    /// Free-text admin notes.
    pub notes: Option<String>,
    /// Manual block flag; blocked phones cannot place orders.
    pub is_blocked: bool,
}

impl Customer {
    /// A bare profile for a phone that has ordered but was never edited.
    #[must_use]
    pub const fn bare(phone: Phone) -> Self {
        Self {
            phone,
            name: None,
            notes: None,
            is_blocked: false,
        }
    }
}
