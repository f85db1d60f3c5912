//! Track Order Use Case

use std::sync::Arc;

use crate::application::dto::{TrackOrderRequestDto, TrackOrderResponseDto};
use crate::domain::ordering::TrackingCode;
use crate::domain::ordering::repository::OrderRepository;
use crate::domain::shared::Phone;
use crate::error::{ApiError, ErrorCode};

const MAX_CODE_CHARS: usize = 32;
const MAX_PHONE_CHARS: usize = 30;

/// Use case for public order tracking.
///
/// The lookup requires both the tracking code and the phone the order was
/// placed with; a wrong phone is reported exactly like an unknown code so the
/// endpoint cannot be used to enumerate codes.
pub struct TrackOrderUseCase<O>
where
    O: OrderRepository,
{
    orders: Arc<O>,
}

impl<O> TrackOrderUseCase<O>
where
    O: OrderRepository,
{
    /// Create a new TrackOrderUseCase.
    pub fn new(orders: Arc<O>) -> Self {
        Self { orders }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for malformed input, a single generic
    /// `OrderNotFound` for both miss cases, and `StoreError` on store
    /// failures.
    pub async fn execute(
        &self,
        request: TrackOrderRequestDto,
    ) -> Result<TrackOrderResponseDto, ApiError> {
        let code = request.tracking_code.trim();
        if code.is_empty() || code.chars().count() > MAX_CODE_CHARS {
            return Err(ApiError::invalid_request("Tracking code is required"));
        }
        let phone = Phone::new(request.phone);
        if phone.is_empty() || phone.len() > MAX_PHONE_CHARS {
            return Err(ApiError::invalid_request("Phone number is required"));
        }

        let order = self
            .orders
            .find_by_tracking_and_phone(&TrackingCode::new(code), &phone)
            .await
            .map_err(|e| ApiError::new(ErrorCode::StoreError, e.to_string()))?
            .ok_or_else(ApiError::order_not_found)?;

        Ok(TrackOrderResponseDto::from_order(&order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::domain::catalog::Product;
    use crate::domain::fraud::FraudAssessment;
    use crate::domain::ordering::repository::{OrderHistoryEntry, OrderPatch, OrderStoreError};
    use crate::domain::ordering::{Order, OrderItem, PlaceOrderCommand};
    use crate::domain::shared::{Money, OrderId, ProductId};

    struct OneOrder(Order);

    #[async_trait]
    impl OrderRepository for OneOrder {
        async fn insert_order(&self, _order: &Order) -> Result<(), OrderStoreError> {
            Ok(())
        }

        async fn insert_items(
            &self,
            _order_id: &OrderId,
            _items: &[OrderItem],
        ) -> Result<(), OrderStoreError> {
            Ok(())
        }

        async fn delete(&self, _id: &OrderId) -> Result<(), OrderStoreError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &OrderId) -> Result<Option<Order>, OrderStoreError> {
            Ok(None)
        }

        async fn find_by_tracking_and_phone(
            &self,
            code: &TrackingCode,
            phone: &Phone,
        ) -> Result<Option<Order>, OrderStoreError> {
            let matches = self.0.tracking_code() == code && self.0.customer_phone() == phone;
            Ok(matches.then(|| self.0.clone()))
        }

        async fn history_for_phone(
            &self,
            _phone: &Phone,
        ) -> Result<Vec<OrderHistoryEntry>, OrderStoreError> {
            Ok(vec![])
        }

        async fn record_fraud(
            &self,
            _id: &OrderId,
            _assessment: &FraudAssessment,
        ) -> Result<(), OrderStoreError> {
            Ok(())
        }

        async fn list_recent(&self, _limit: usize) -> Result<Vec<Order>, OrderStoreError> {
            Ok(vec![])
        }

        async fn update(&self, _id: &OrderId, _patch: OrderPatch) -> Result<bool, OrderStoreError> {
            Ok(false)
        }
    }

    fn order() -> Order {
        let product = Product {
            id: ProductId::new("prod-1"),
            title_bn: "শাড়ি".to_string(),
            price: Money::bdt(500),
            is_active: true,
        };
        Order::place(
            PlaceOrderCommand {
                customer_name: "Rahim".to_string(),
                customer_phone: Phone::new("01712345678"),
                delivery_address_bn: "ঢাকা".to_string(),
                notes_bn: None,
                coupon_code: None,
                delivery_fee: Money::bdt(60),
                discount: Money::ZERO,
                items: vec![OrderItem::snapshot(&product, None, 2)],
            },
            TrackingCode::new("HJ-TESTCODE"),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn matching_code_and_phone_returns_summary() {
        let uc = TrackOrderUseCase::new(Arc::new(OneOrder(order())));

        let response = uc
            .execute(TrackOrderRequestDto {
                tracking_code: " HJ-TESTCODE ".to_string(),
                phone: "01712345678".to_string(),
            })
            .await
            .unwrap();

        assert!(response.ok);
        assert_eq!(response.order.tracking_code, "HJ-TESTCODE");
        assert_eq!(response.order.items.len(), 1);
        assert_eq!(response.order.items[0].qty, 2);
    }

    #[tokio::test]
    async fn wrong_phone_is_indistinguishable_from_unknown_code() {
        let uc = TrackOrderUseCase::new(Arc::new(OneOrder(order())));

        let wrong_phone = uc
            .execute(TrackOrderRequestDto {
                tracking_code: "HJ-TESTCODE".to_string(),
                phone: "01800000000".to_string(),
            })
            .await
            .unwrap_err();
        let unknown_code = uc
            .execute(TrackOrderRequestDto {
                tracking_code: "HJ-NOPE1234".to_string(),
                phone: "01712345678".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(wrong_phone.code(), ErrorCode::OrderNotFound);
        assert_eq!(unknown_code.code(), ErrorCode::OrderNotFound);
        assert_eq!(wrong_phone.message(), unknown_code.message());
    }

    #[tokio::test]
    async fn empty_input_is_a_validation_error() {
        let uc = TrackOrderUseCase::new(Arc::new(OneOrder(order())));

        let err = uc
            .execute(TrackOrderRequestDto {
                tracking_code: String::new(),
                phone: "01712345678".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }
}
