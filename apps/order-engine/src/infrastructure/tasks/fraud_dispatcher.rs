//! Tokio-backed fraud dispatcher.
//!
//! Spawns the fraud check as a detached task after checkout commits. The
//! checkout response never waits on it; failures are logged and swallowed.

use std::sync::Arc;

use crate::application::ports::{DeliveryHistoryPort, FraudDispatchPort, RiskFlagPort};
use crate::application::use_cases::CheckFraudUseCase;
use crate::domain::customers::CustomerRepository;
use crate::domain::ordering::repository::OrderRepository;
use crate::domain::shared::{OrderId, Phone};

/// `FraudDispatchPort` implementation that runs the check on the runtime.
pub struct TokioFraudDispatcher<O, Cus, H, R>
where
    O: OrderRepository + 'static,
    Cus: CustomerRepository + 'static,
    H: DeliveryHistoryPort + 'static,
    R: RiskFlagPort + 'static,
{
    use_case: Arc<CheckFraudUseCase<O, Cus, H, R>>,
}

impl<O, Cus, H, R> TokioFraudDispatcher<O, Cus, H, R>
where
    O: OrderRepository + 'static,
    Cus: CustomerRepository + 'static,
    H: DeliveryHistoryPort + 'static,
    R: RiskFlagPort + 'static,
{
    /// Create a new dispatcher.
    pub fn new(use_case: Arc<CheckFraudUseCase<O, Cus, H, R>>) -> Self {
        Self { use_case }
    }
}

impl<O, Cus, H, R> FraudDispatchPort for TokioFraudDispatcher<O, Cus, H, R>
where
    O: OrderRepository + 'static,
    Cus: CustomerRepository + 'static,
    H: DeliveryHistoryPort + 'static,
    R: RiskFlagPort + 'static,
{
    fn dispatch(&self, order_id: OrderId, phone: Phone) {
        let use_case = Arc::clone(&self.use_case);
        tokio::spawn(async move {
            tracing::debug!(order_id = %order_id, "Running dispatched fraud check");
            if let Err(e) = use_case.check(phone.as_str(), Some(order_id.as_str())).await {
                tracing::error!(order_id = %order_id, error = %e, "Dispatched fraud check failed");
            }
        });
    }
}
