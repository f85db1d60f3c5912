//! Customer Repository Trait

use async_trait::async_trait;
use thiserror::Error;

use super::Customer;
use crate::domain::shared::Phone;

/// Customer store error.
#[derive(Debug, Clone, Error)]
pub enum CustomerStoreError {
    /// Underlying store failed.
    #[error("Customer query failed: {message}")]
    QueryFailed {
        /// Adapter-provided detail.
        message: String,
    },
}

/// Partial update/upsert applied by admin endpoints.
///
/// `None` leaves a field untouched; the inner `Option` distinguishes "set"
/// from "clear".
#[derive(Debug, Clone, Default)]
pub struct CustomerPatch {
    /// New display name, or `Some(None)` to clear it.
    pub name: Option<Option<String>>,
    /// New notes, or `Some(None)` to clear them.
    pub notes: Option<Option<String>>,
    /// New block flag.
    pub is_blocked: Option<bool>,
}

/// Repository trait for customer persistence.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by phone.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_phone(&self, phone: &Phone) -> Result<Option<Customer>, CustomerStoreError>;

    /// Upsert a profile keyed by phone, applying the patch over the existing
    /// row (or a bare profile when none exists).
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    async fn upsert(&self, phone: &Phone, patch: CustomerPatch) -> Result<(), CustomerStoreError>;

    /// All stored customer profiles.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn list(&self) -> Result<Vec<Customer>, CustomerStoreError>;
}
