//! Courier Ports (Driven Ports)
//!
//! Interfaces for the external courier services the fraud engine consults.
//! Both are best-effort: callers treat any error as a missing signal and keep
//! scoring with whatever else they have.

use async_trait::async_trait;

use crate::domain::fraud::CourierStats;

/// Courier lookup error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CourierError {
    /// Connection error.
    #[error("Courier connection error: {message}")]
    ConnectionError {
        /// Error details.
        message: String,
    },

    /// Authentication failed.
    #[error("Courier authentication failed")]
    AuthenticationFailed,

    /// The service answered with something unusable.
    #[error("Courier API error: {message}")]
    ApiError {
        /// Error details.
        message: String,
    },
}

/// Port for the delivery-history aggregator.
///
/// Looks up how many parcels a phone number has received across couriers and
/// what fraction were actually delivered.
#[async_trait]
pub trait DeliveryHistoryPort: Send + Sync {
    /// Delivery statistics for a phone (digits only, no formatting).
    ///
    /// Returns `None` when the aggregator has no record for the phone.
    ///
    /// # Errors
    ///
    /// Returns error if the lookup fails; callers degrade to a null signal.
    async fn delivery_stats(&self, phone_digits: &str)
    -> Result<Option<CourierStats>, CourierError>;

    /// Connectivity probe for the health-check action.
    ///
    /// # Errors
    ///
    /// Returns error if the service is unreachable or rejects our credentials.
    async fn probe(&self) -> Result<(), CourierError>;
}

/// Port for the courier network's risky-customer flag.
#[async_trait]
pub trait RiskFlagPort: Send + Sync {
    /// Whether the courier network flags this phone as risky.
    ///
    /// Returns `None` when the network has no verdict for the phone.
    ///
    /// # Errors
    ///
    /// Returns error if the lookup fails; callers degrade to a null signal.
    async fn is_risky(&self, phone_digits: &str) -> Result<Option<bool>, CourierError>;
}
