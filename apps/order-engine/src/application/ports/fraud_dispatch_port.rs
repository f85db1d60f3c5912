//! Fraud Dispatch Port (Driven Port)
//!
//! After an order commits, a fraud check is kicked off without awaiting it.
//! The port makes that fire-and-forget seam explicit so checkout never blocks
//! on (or fails because of) scoring.

use crate::domain::shared::{OrderId, Phone};

/// Port for dispatching an asynchronous fraud check.
///
/// Implementations must return immediately; any failure is theirs to log.
pub trait FraudDispatchPort: Send + Sync {
    /// Request a fraud check for a freshly committed order.
    fn dispatch(&self, order_id: OrderId, phone: Phone);
}

/// No-op dispatcher for tests and environments without scoring.
#[derive(Debug, Clone, Default)]
pub struct NoOpFraudDispatcher;

impl FraudDispatchPort for NoOpFraudDispatcher {
    fn dispatch(&self, order_id: OrderId, _phone: Phone) {
        tracing::debug!(order_id = %order_id, "Fraud dispatch disabled, skipping");
    }
}
