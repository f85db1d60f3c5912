//! Coupon Repository Trait
//!
//! Persistence abstraction for coupons, including the atomic usage-count
//! increment that makes redemption safe under concurrent checkouts.

use async_trait::async_trait;
use thiserror::Error;

use super::Coupon;

/// Coupon store error.
#[derive(Debug, Clone, Error)]
pub enum CouponStoreError {
    /// Underlying store failed.
    #[error("Coupon query failed: {message}")]
    QueryFailed {
        /// Adapter-provided detail.
        message: String,
    },
}

/// Repository trait for coupon persistence.
#[async_trait]
pub trait CouponRepository: Send + Sync {
    /// Find a coupon by exact, case-sensitive code.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, CouponStoreError>;

    /// Atomically increment `used_count` if the usage limit allows it.
    ///
    /// Must behave like a conditional update with a WHERE guard
    /// (`usage_limit IS NULL OR used_count < usage_limit`), serialized per
    /// coupon row. Returns `false` when the guard fails, so two concurrent
    /// checkouts can never both succeed past a limit of one.
    ///
    /// # Errors
    ///
    /// Returns error if the update fails or the code does not exist.
    async fn increment_usage(&self, code: &str) -> Result<bool, CouponStoreError>;
}
