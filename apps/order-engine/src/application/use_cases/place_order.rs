//! Place Order Use Case
//!
//! The checkout pipeline: validate input, refuse blocked customers, resolve
//! catalog lines, redeem the coupon, commit the order with a collision-retried
//! tracking code, then kick off the fraud check without awaiting it.

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::dto::{CreateOrderRequestDto, CreateOrderResponseDto};
use crate::application::ports::FraudDispatchPort;
use crate::domain::catalog::{CatalogRepository, Product, Variant};
use crate::domain::customers::CustomerRepository;
use crate::domain::ordering::repository::{OrderRepository, OrderStoreError};
use crate::domain::ordering::{Order, OrderItem, PlaceOrderCommand, TrackingCode};
use crate::domain::pricing::repository::CouponRepository;
use crate::domain::pricing::service::{self as pricing, CouponError};
use crate::domain::shared::{Money, Phone, ProductId, Timestamp, VariantId};
use crate::error::{ApiError, ErrorCode};

const MAX_NAME_CHARS: usize = 100;
const MAX_PHONE_CHARS: usize = 30;
const MAX_ADDRESS_CHARS: usize = 500;
const MAX_NOTES_CHARS: usize = 500;
const MAX_COUPON_CHARS: usize = 50;
const MAX_ITEMS: usize = 50;
const MAX_QTY: u32 = 20;
const MAX_DELIVERY_FEE: i64 = 1000;

/// Attempts at generating a unique tracking code before giving up.
const TRACKING_CODE_ATTEMPTS: u32 = 5;

/// Validated and normalized checkout input.
struct CheckoutInput {
    customer_name: String,
    customer_phone: Phone,
    delivery_address_bn: String,
    notes_bn: Option<String>,
    coupon_code: Option<String>,
    delivery_fee: Money,
    items: Vec<RequestedLine>,
}

struct RequestedLine {
    product_id: ProductId,
    variant_id: Option<VariantId>,
    qty: u32,
}

/// Use case for placing a customer order.
pub struct PlaceOrderUseCase<Cat, Cus, Cpn, O, D>
where
    Cat: CatalogRepository,
    Cus: CustomerRepository,
    Cpn: CouponRepository,
    O: OrderRepository,
    D: FraudDispatchPort,
{
    catalog: Arc<Cat>,
    customers: Arc<Cus>,
    coupons: Arc<Cpn>,
    orders: Arc<O>,
    fraud_dispatcher: Arc<D>,
}

impl<Cat, Cus, Cpn, O, D> PlaceOrderUseCase<Cat, Cus, Cpn, O, D>
where
    Cat: CatalogRepository,
    Cus: CustomerRepository,
    Cpn: CouponRepository,
    O: OrderRepository,
    D: FraudDispatchPort,
{
    /// Create a new PlaceOrderUseCase.
    pub fn new(
        catalog: Arc<Cat>,
        customers: Arc<Cus>,
        coupons: Arc<Cpn>,
        orders: Arc<O>,
        fraud_dispatcher: Arc<D>,
    ) -> Self {
        Self {
            catalog,
            customers,
            coupons,
            orders,
            fraud_dispatcher,
        }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns a structured error for validation failures, blocked customers,
    /// unavailable items, rejected coupons and store failures. No partial
    /// order survives any error path.
    pub async fn execute(
        &self,
        request: CreateOrderRequestDto,
    ) -> Result<CreateOrderResponseDto, ApiError> {
        let input = validate(request)?;

        self.ensure_not_blocked(&input.customer_phone).await?;

        let items = self.resolve_items(&input.items).await?;
        let subtotal = items
            .iter()
            .fold(Money::ZERO, |acc, item| acc + item.line_total);

        let (coupon_code, discount) = match &input.coupon_code {
            Some(code) => {
                let outcome = self.redeem_coupon(code, subtotal).await?;
                (Some(outcome.0), outcome.1)
            }
            None => (None, Money::ZERO),
        };

        let command = PlaceOrderCommand {
            customer_name: input.customer_name,
            customer_phone: input.customer_phone,
            delivery_address_bn: input.delivery_address_bn,
            notes_bn: input.notes_bn,
            coupon_code,
            delivery_fee: input.delivery_fee,
            discount,
            items,
        };

        let order = self.commit(command).await?;

        tracing::info!(
            order_id = %order.id(),
            tracking_code = %order.tracking_code(),
            total = %order.total(),
            "Order placed"
        );
        self.fraud_dispatcher
            .dispatch(order.id().clone(), order.customer_phone().clone());

        Ok(CreateOrderResponseDto::from_order(&order))
    }

    async fn ensure_not_blocked(&self, phone: &Phone) -> Result<(), ApiError> {
        let customer = self
            .customers
            .find_by_phone(phone)
            .await
            .map_err(|e| ApiError::new(ErrorCode::StoreError, e.to_string()))?;

        if customer.is_some_and(|c| c.is_blocked) {
            tracing::warn!(phone = %phone, "Blocked customer attempted checkout");
            return Err(ApiError::new(
                ErrorCode::CustomerBlocked,
                "This phone number is not allowed to place orders",
            ));
        }
        Ok(())
    }

    /// Batch-load the catalog and snapshot each requested line.
    async fn resolve_items(&self, lines: &[RequestedLine]) -> Result<Vec<OrderItem>, ApiError> {
        let product_ids: Vec<ProductId> = lines.iter().map(|l| l.product_id.clone()).collect();
        let variant_ids: Vec<VariantId> = lines
            .iter()
            .filter_map(|l| l.variant_id.clone())
            .collect();

        let products: HashMap<ProductId, Product> = self
            .catalog
            .products_by_ids(&product_ids)
            .await
            .map_err(|e| ApiError::new(ErrorCode::StoreError, e.to_string()))?
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();
        let variants: HashMap<VariantId, Variant> = self
            .catalog
            .variants_by_ids(&variant_ids)
            .await
            .map_err(|e| ApiError::new(ErrorCode::StoreError, e.to_string()))?
            .into_iter()
            .map(|v| (v.id.clone(), v))
            .collect();

        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            let product = products
                .get(&line.product_id)
                .filter(|p| p.is_active)
                .ok_or_else(|| {
                    ApiError::invalid_item(
                        "Product is unavailable",
                        line.product_id.as_str(),
                    )
                })?;

            let variant = match &line.variant_id {
                Some(variant_id) => {
                    let variant = variants
                        .get(variant_id)
                        .filter(|v| v.product_id == line.product_id && v.is_active)
                        .ok_or_else(|| {
                            ApiError::invalid_item(
                                format!("Selected option is unavailable for {}", product.title_bn),
                                line.product_id.as_str(),
                            )
                        })?;
                    if !variant.has_stock_for(line.qty) {
                        return Err(ApiError::invalid_item(
                            format!("Insufficient stock for {}", product.title_bn),
                            line.product_id.as_str(),
                        ));
                    }
                    Some(variant)
                }
                None => None,
            };

            items.push(OrderItem::snapshot(product, variant, line.qty));
        }
        Ok(items)
    }

    async fn redeem_coupon(
        &self,
        code: &str,
        subtotal: Money,
    ) -> Result<(String, Money), ApiError> {
        let outcome = pricing::redeem(self.coupons.as_ref(), code, subtotal, Timestamp::now())
            .await
            .map_err(|e| match e {
                CouponError::Rejected(rejection) => {
                    ApiError::new(ErrorCode::CouponRejected, rejection.to_string())
                }
                CouponError::Store(store) => {
                    ApiError::new(ErrorCode::StoreError, store.to_string())
                }
            })?;
        Ok((outcome.code, outcome.discount))
    }

    /// Insert the order row (retrying tracking-code collisions) then its
    /// items, deleting the orphaned row if the second step fails.
    async fn commit(&self, command: PlaceOrderCommand) -> Result<Order, ApiError> {
        let mut attempt = 0;
        let order = loop {
            let order = Order::place(command.clone(), TrackingCode::generate())
                .map_err(|e| ApiError::invalid_request(e.to_string()))?;

            match self.orders.insert_order(&order).await {
                Ok(()) => break order,
                Err(OrderStoreError::DuplicateTrackingCode { code }) => {
                    attempt += 1;
                    tracing::warn!(code, attempt, "Tracking code collision, regenerating");
                    if attempt >= TRACKING_CODE_ATTEMPTS {
                        return Err(ApiError::internal(
                            "Could not allocate a unique tracking code",
                        ));
                    }
                }
                Err(e) => return Err(ApiError::new(ErrorCode::StoreError, e.to_string())),
            }
        };

        if let Err(e) = self.orders.insert_items(order.id(), order.items()).await {
            tracing::error!(order_id = %order.id(), error = %e, "Item insert failed, deleting order row");
            if let Err(delete_err) = self.orders.delete(order.id()).await {
                tracing::error!(
                    order_id = %order.id(),
                    error = %delete_err,
                    "Compensating delete failed, orphaned order row remains"
                );
            }
            return Err(ApiError::internal("Order could not be saved"));
        }

        Ok(order)
    }
}

fn validate(request: CreateOrderRequestDto) -> Result<CheckoutInput, ApiError> {
    let customer_name = request.customer_name.trim().to_string();
    if customer_name.is_empty() || customer_name.chars().count() > MAX_NAME_CHARS {
        return Err(ApiError::invalid_request("Customer name is required (max 100 characters)"));
    }

    let customer_phone = Phone::new(request.customer_phone);
    if customer_phone.is_empty() || customer_phone.len() > MAX_PHONE_CHARS {
        return Err(ApiError::invalid_request("Phone number is required (max 30 characters)"));
    }

    let delivery_address_bn = request.delivery_address_bn.trim().to_string();
    if delivery_address_bn.is_empty() || delivery_address_bn.chars().count() > MAX_ADDRESS_CHARS {
        return Err(ApiError::invalid_request(
            "Delivery address is required (max 500 characters)",
        ));
    }

    let notes_bn = request
        .notes_bn
        .map(|n| clamp_chars(n.trim(), MAX_NOTES_CHARS))
        .filter(|n| !n.is_empty());
    let coupon_code = request
        .coupon_code
        .map(|c| clamp_chars(c.trim(), MAX_COUPON_CHARS))
        .filter(|c| !c.is_empty());

    let delivery_fee = Money::new(request.delivery_fee);
    if delivery_fee.is_negative() || delivery_fee > Money::bdt(MAX_DELIVERY_FEE) {
        return Err(ApiError::invalid_request("Delivery fee must be between 0 and 1000"));
    }

    if request.items.is_empty() || request.items.len() > MAX_ITEMS {
        return Err(ApiError::invalid_request("Order must contain between 1 and 50 items"));
    }

    let mut items = Vec::with_capacity(request.items.len());
    for item in request.items {
        let product_id = item.product_id.trim().to_string();
        if product_id.is_empty() {
            return Err(ApiError::invalid_request("Each item needs a product id"));
        }
        if item.qty == 0 || item.qty > MAX_QTY {
            return Err(ApiError::invalid_request(
                "Item quantity must be between 1 and 20",
            ));
        }
        items.push(RequestedLine {
            product_id: ProductId::new(product_id),
            variant_id: item
                .variant_id
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(VariantId::new),
            qty: item.qty,
        });
    }

    Ok(CheckoutInput {
        customer_name,
        customer_phone,
        delivery_address_bn,
        notes_bn,
        coupon_code,
        delivery_fee,
        items,
    })
}

/// Truncate to at most `max` characters (not bytes).
fn clamp_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::sync::Mutex;

    use crate::application::dto::OrderItemRequestDto;
    use crate::application::ports::NoOpFraudDispatcher;
    use crate::domain::catalog::CatalogError;
    use crate::domain::customers::{Customer, CustomerPatch, CustomerStoreError};
    use crate::domain::ordering::repository::{OrderHistoryEntry, OrderPatch};
    use crate::domain::pricing::coupon::Coupon;
    use crate::domain::pricing::repository::CouponStoreError;
    use crate::domain::shared::OrderId;
    use crate::error::ErrorCode;

    struct FakeCatalog {
        products: Vec<Product>,
        variants: Vec<Variant>,
    }

    #[async_trait]
    impl CatalogRepository for FakeCatalog {
        async fn products_by_ids(
            &self,
            ids: &[ProductId],
        ) -> Result<Vec<Product>, CatalogError> {
            Ok(self
                .products
                .iter()
                .filter(|p| ids.contains(&p.id))
                .cloned()
                .collect())
        }

        async fn variants_by_ids(
            &self,
            ids: &[VariantId],
        ) -> Result<Vec<Variant>, CatalogError> {
            Ok(self
                .variants
                .iter()
                .filter(|v| ids.contains(&v.id))
                .cloned()
                .collect())
        }
    }

    #[derive(Default)]
    struct FakeCustomers {
        blocked: Option<Phone>,
    }

    #[async_trait]
    impl CustomerRepository for FakeCustomers {
        async fn find_by_phone(
            &self,
            phone: &Phone,
        ) -> Result<Option<Customer>, CustomerStoreError> {
            Ok(self.blocked.as_ref().filter(|p| *p == phone).map(|p| {
                let mut c = Customer::bare(p.clone());
                c.is_blocked = true;
                c
            }))
        }

        async fn upsert(
            &self,
            _phone: &Phone,
            _patch: CustomerPatch,
        ) -> Result<(), CustomerStoreError> {
            Ok(())
        }

        async fn list(&self) -> Result<Vec<Customer>, CustomerStoreError> {
            Ok(vec![])
        }
    }

    #[derive(Default)]
    struct FakeCoupons {
        coupon: Mutex<Option<Coupon>>,
    }

    #[async_trait]
    impl CouponRepository for FakeCoupons {
        async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, CouponStoreError> {
            let guard = self.coupon.lock().unwrap();
            Ok(guard.as_ref().filter(|c| c.code == code).cloned())
        }

        async fn increment_usage(&self, _code: &str) -> Result<bool, CouponStoreError> {
            Ok(true)
        }
    }

    #[derive(Default)]
    struct FakeOrders {
        orders: Mutex<Vec<Order>>,
        items_inserted: Mutex<Vec<OrderId>>,
        fail_items: bool,
        collide_first: Mutex<u32>,
    }

    #[async_trait]
    impl OrderRepository for FakeOrders {
        async fn insert_order(&self, order: &Order) -> Result<(), OrderStoreError> {
            let mut collisions = self.collide_first.lock().unwrap();
            if *collisions > 0 {
                *collisions -= 1;
                return Err(OrderStoreError::DuplicateTrackingCode {
                    code: order.tracking_code().to_string(),
                });
            }
            self.orders.lock().unwrap().push(order.clone());
            Ok(())
        }

        async fn insert_items(
            &self,
            order_id: &OrderId,
            _items: &[OrderItem],
        ) -> Result<(), OrderStoreError> {
            if self.fail_items {
                return Err(OrderStoreError::QueryFailed {
                    message: "disk full".to_string(),
                });
            }
            self.items_inserted.lock().unwrap().push(order_id.clone());
            Ok(())
        }

        async fn delete(&self, id: &OrderId) -> Result<(), OrderStoreError> {
            self.orders.lock().unwrap().retain(|o| o.id() != id);
            Ok(())
        }

        async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderStoreError> {
            Ok(self
                .orders
                .lock()
                .unwrap()
                .iter()
                .find(|o| o.id() == id)
                .cloned())
        }

        async fn find_by_tracking_and_phone(
            &self,
            _code: &TrackingCode,
            _phone: &Phone,
        ) -> Result<Option<Order>, OrderStoreError> {
            Ok(None)
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
            _assessment: &crate::domain::fraud::FraudAssessment,
        ) -> Result<(), OrderStoreError> {
            Ok(())
        }

        async fn list_recent(&self, _limit: usize) -> Result<Vec<Order>, OrderStoreError> {
            Ok(self.orders.lock().unwrap().clone())
        }

        async fn update(
            &self,
            _id: &OrderId,
            _patch: OrderPatch,
        ) -> Result<bool, OrderStoreError> {
            Ok(false)
        }
    }

    fn catalog() -> FakeCatalog {
        FakeCatalog {
            products: vec![Product {
                id: ProductId::new("prod-1"),
                title_bn: "শাড়ি".to_string(),
                price: Money::bdt(500),
                is_active: true,
            }],
            variants: vec![Variant {
                id: VariantId::new("var-1"),
                product_id: ProductId::new("prod-1"),
                color_bn: Some("লাল".to_string()),
                size_bn: None,
                price_override: None,
                stock_qty: 3,
                is_active: true,
            }],
        }
    }

    fn request(items: Vec<OrderItemRequestDto>) -> CreateOrderRequestDto {
        CreateOrderRequestDto {
            customer_name: "Rahim".to_string(),
            customer_phone: "01712345678".to_string(),
            delivery_address_bn: "ঢাকা".to_string(),
            notes_bn: None,
            coupon_code: None,
            items,
            delivery_fee: Decimal::from(60),
        }
    }

    fn line(qty: u32) -> OrderItemRequestDto {
        OrderItemRequestDto {
            product_id: "prod-1".to_string(),
            variant_id: None,
            qty,
        }
    }

    fn use_case(
        orders: Arc<FakeOrders>,
        customers: FakeCustomers,
        coupons: FakeCoupons,
    ) -> PlaceOrderUseCase<FakeCatalog, FakeCustomers, FakeCoupons, FakeOrders, NoOpFraudDispatcher>
    {
        PlaceOrderUseCase::new(
            Arc::new(catalog()),
            Arc::new(customers),
            Arc::new(coupons),
            orders,
            Arc::new(NoOpFraudDispatcher),
        )
    }

    #[tokio::test]
    async fn happy_path_creates_order_and_items() {
        let orders = Arc::new(FakeOrders::default());
        let uc = use_case(Arc::clone(&orders), FakeCustomers::default(), FakeCoupons::default());

        let response = uc.execute(request(vec![line(2)])).await.unwrap();

        assert!(response.ok);
        assert!(response.order.tracking_code.starts_with("HJ-"));
        assert_eq!(response.order.total_bdt, Decimal::from(1060));
        assert_eq!(orders.orders.lock().unwrap().len(), 1);
        assert_eq!(orders.items_inserted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blocked_phone_is_refused_before_catalog_work() {
        let orders = Arc::new(FakeOrders::default());
        let customers = FakeCustomers {
            blocked: Some(Phone::new("01712345678")),
        };
        let uc = use_case(Arc::clone(&orders), customers, FakeCoupons::default());

        let err = uc.execute(request(vec![line(1)])).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::CustomerBlocked);
        assert!(orders.orders.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn quantity_beyond_stock_fails_whole_order() {
        let orders = Arc::new(FakeOrders::default());
        let uc = use_case(Arc::clone(&orders), FakeCustomers::default(), FakeCoupons::default());

        let mut item = line(5);
        item.variant_id = Some("var-1".to_string());
        let err = uc.execute(request(vec![item])).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidItem);
        assert!(err.message().contains("stock"));
        assert!(orders.orders.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_product_fails_whole_order() {
        let orders = Arc::new(FakeOrders::default());
        let uc = use_case(Arc::clone(&orders), FakeCustomers::default(), FakeCoupons::default());

        let mut bad = line(1);
        bad.product_id = "prod-404".to_string();
        let err = uc
            .execute(request(vec![line(1), bad]))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidItem);
        assert!(orders.orders.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejected_coupon_fails_whole_order() {
        let orders = Arc::new(FakeOrders::default());
        let uc = use_case(Arc::clone(&orders), FakeCustomers::default(), FakeCoupons::default());

        let mut req = request(vec![line(1)]);
        req.coupon_code = Some("NOPE".to_string());
        let err = uc.execute(req).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::CouponRejected);
        assert!(orders.orders.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn coupon_discount_lands_in_total() {
        let orders = Arc::new(FakeOrders::default());
        let coupons = FakeCoupons {
            coupon: Mutex::new(Some(Coupon {
                code: "SAVE50".to_string(),
                discount_flat: Money::bdt(50),
                min_order: Money::ZERO,
                start_at: None,
                end_at: None,
                usage_limit: None,
                used_count: 0,
                is_active: true,
            })),
        };
        let uc = use_case(Arc::clone(&orders), FakeCustomers::default(), coupons);

        let mut req = request(vec![line(2)]);
        req.coupon_code = Some("SAVE50".to_string());
        let response = uc.execute(req).await.unwrap();

        // 2 * 500 + 60 - 50
        assert_eq!(response.order.total_bdt, Decimal::from(1010));
    }

    #[tokio::test]
    async fn tracking_collision_retries_then_succeeds() {
        let orders = Arc::new(FakeOrders {
            collide_first: Mutex::new(2),
            ..FakeOrders::default()
        });
        let uc = use_case(Arc::clone(&orders), FakeCustomers::default(), FakeCoupons::default());

        let response = uc.execute(request(vec![line(1)])).await.unwrap();

        assert!(response.ok);
        assert_eq!(orders.orders.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn tracking_collisions_exhaust_after_five_attempts() {
        let orders = Arc::new(FakeOrders {
            collide_first: Mutex::new(99),
            ..FakeOrders::default()
        });
        let uc = use_case(Arc::clone(&orders), FakeCustomers::default(), FakeCoupons::default());

        let err = uc.execute(request(vec![line(1)])).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(*orders.collide_first.lock().unwrap(), 99 - TRACKING_CODE_ATTEMPTS);
    }

    #[tokio::test]
    async fn item_insert_failure_deletes_order_row() {
        let orders = Arc::new(FakeOrders {
            fail_items: true,
            ..FakeOrders::default()
        });
        let uc = use_case(Arc::clone(&orders), FakeCustomers::default(), FakeCoupons::default());

        let err = uc.execute(request(vec![line(1)])).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::InternalError);
        assert!(orders.orders.lock().unwrap().is_empty());
    }

    #[test]
    fn validation_bounds() {
        let mut req = request(vec![line(1)]);
        req.customer_name = " ".to_string();
        assert!(validate(req).is_err());

        let mut req = request(vec![line(1)]);
        req.delivery_fee = Decimal::from(1001);
        assert!(validate(req).is_err());

        let mut req = request(vec![line(1)]);
        req.delivery_fee = Decimal::from(-1);
        assert!(validate(req).is_err());

        let req = request(vec![]);
        assert!(validate(req).is_err());

        let req = request(vec![line(21)]);
        assert!(validate(req).is_err());

        let req = request(vec![line(0)]);
        assert!(validate(req).is_err());
    }

    #[test]
    fn validation_clamps_notes_and_coupon() {
        let mut req = request(vec![line(1)]);
        req.notes_bn = Some("x".repeat(600));
        req.coupon_code = Some("C".repeat(80));
        let input = validate(req).unwrap();

        assert_eq!(input.notes_bn.unwrap().chars().count(), MAX_NOTES_CHARS);
        assert_eq!(input.coupon_code.unwrap().chars().count(), MAX_COUPON_CHARS);
    }

    #[test]
    fn validation_drops_empty_optionals() {
        let mut req = request(vec![line(1)]);
        req.notes_bn = Some("   ".to_string());
        req.coupon_code = Some(String::new());
        let input = validate(req).unwrap();

        assert!(input.notes_bn.is_none());
        assert!(input.coupon_code.is_none());
    }
}
