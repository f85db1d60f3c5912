//! Check Fraud Use Case
//!
//! Gathers signals from the order history, the customer profile and the
//! external courier services, folds them into a score, and persists the
//! assessment onto the order when one was named. External lookups fail soft:
//! an unreachable courier nulls that signal and scoring continues.

use std::sync::Arc;

use crate::application::dto::{FraudCheckResponseDto, ProbeResponseDto};
use crate::application::ports::{DeliveryHistoryPort, RiskFlagPort};
use crate::domain::customers::CustomerRepository;
use crate::domain::fraud::{self, FraudSignals, InternalHistory, OrderFinancials};
use crate::domain::ordering::OrderStatus;
use crate::domain::ordering::repository::OrderRepository;
use crate::domain::shared::{OrderId, Phone, Timestamp};
use crate::error::{ApiError, ErrorCode};

const MAX_PHONE_CHARS: usize = 30;

/// Use case for scoring a phone (and optionally an order) for fraud risk.
pub struct CheckFraudUseCase<O, Cus, H, R>
where
    O: OrderRepository,
    Cus: CustomerRepository,
    H: DeliveryHistoryPort,
    R: RiskFlagPort,
{
    orders: Arc<O>,
    customers: Arc<Cus>,
    delivery_history: Arc<H>,
    risk_flags: Arc<R>,
}

impl<O, Cus, H, R> CheckFraudUseCase<O, Cus, H, R>
where
    O: OrderRepository,
    Cus: CustomerRepository,
    H: DeliveryHistoryPort,
    R: RiskFlagPort,
{
    /// Create a new CheckFraudUseCase.
    pub fn new(
        orders: Arc<O>,
        customers: Arc<Cus>,
        delivery_history: Arc<H>,
        risk_flags: Arc<R>,
    ) -> Self {
        Self {
            orders,
            customers,
            delivery_history,
            risk_flags,
        }
    }

    /// Score a phone and, when `order_id` names a known order, persist the
    /// assessment onto it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for malformed input and `StoreError` when our
    /// own store fails. Courier failures never error: the signal is nulled.
    pub async fn check(
        &self,
        phone: &str,
        order_id: Option<&str>,
    ) -> Result<FraudCheckResponseDto, ApiError> {
        let phone = Phone::new(phone);
        if phone.is_empty() || phone.len() > MAX_PHONE_CHARS {
            return Err(ApiError::invalid_request("Phone number is required"));
        }

        let history = self.internal_history(&phone).await?;

        let digits = phone.digits();
        let courier = match self.delivery_history.delivery_stats(&digits).await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::warn!(error = %e, "Delivery history lookup failed, nulling signal");
                None
            }
        };
        let risky_flag = match self.risk_flags.is_risky(&digits).await {
            Ok(flag) => flag,
            Err(e) => {
                tracing::warn!(error = %e, "Risk flag lookup failed, nulling signal");
                None
            }
        };

        let order = match order_id {
            Some(raw) => self.load_order(raw).await?,
            None => None,
        };

        let signals = FraudSignals {
            history,
            courier,
            risky_flag,
            order: order.as_ref().map(|o| OrderFinancials {
                payment_method: o.payment_method(),
                total: o.total(),
            }),
        };

        let assessment = fraud::score(&signals, Timestamp::now());
        tracing::info!(
            phone = %phone,
            score = assessment.score,
            level = ?assessment.level,
            "Fraud check completed"
        );

        if let Some(order) = &order {
            self.orders
                .record_fraud(order.id(), &assessment)
                .await
                .map_err(|e| ApiError::new(ErrorCode::StoreError, e.to_string()))?;
        }

        Ok(FraudCheckResponseDto::from_assessment(
            phone.as_str(),
            &assessment,
            &signals,
        ))
    }

    /// Probe the primary courier integration for the admin health check.
    pub async fn probe(&self) -> ProbeResponseDto {
        match self.delivery_history.probe().await {
            Ok(()) => ProbeResponseDto {
                ok: true,
                courier_api: "connected".to_string(),
            },
            Err(e) => ProbeResponseDto {
                ok: false,
                courier_api: e.to_string(),
            },
        }
    }

    async fn internal_history(&self, phone: &Phone) -> Result<InternalHistory, ApiError> {
        let customer = self
            .customers
            .find_by_phone(phone)
            .await
            .map_err(|e| ApiError::new(ErrorCode::StoreError, e.to_string()))?;
        let entries = self
            .orders
            .history_for_phone(phone)
            .await
            .map_err(|e| ApiError::new(ErrorCode::StoreError, e.to_string()))?;

        let delivered = entries
            .iter()
            .filter(|e| e.status == OrderStatus::Delivered)
            .count();
        let cancelled = entries
            .iter()
            .filter(|e| e.status == OrderStatus::Cancelled)
            .count();

        #[allow(clippy::cast_possible_truncation)]
        Ok(InternalHistory {
            is_blocked: customer.is_some_and(|c| c.is_blocked),
            delivered_count: delivered as u32,
            cancelled_count: cancelled as u32,
            total_orders: entries.len() as u32,
        })
    }

    /// A named but unknown order nulls the order signal rather than failing
    /// the check; the dispatcher may race an admin delete.
    async fn load_order(
        &self,
        raw: &str,
    ) -> Result<Option<crate::domain::ordering::Order>, ApiError> {
        let id = OrderId::new(raw.trim());
        let order = self
            .orders
            .find_by_id(&id)
            .await
            .map_err(|e| ApiError::new(ErrorCode::StoreError, e.to_string()))?;
        if order.is_none() {
            tracing::warn!(order_id = %id, "Fraud check named an unknown order");
        }
        Ok(order)
    }
}
