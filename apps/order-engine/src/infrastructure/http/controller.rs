//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to application use cases. The public
//! storefront endpoints are unauthenticated; the fraud check accepts any
//! configured token and the admin surface requires an admin token.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::application::dto::{
    AdminCustomersQuery, AdminOrdersQuery, CouponPreviewRequestDto, CouponPreviewResponseDto,
    CreateOrderRequestDto, CreateOrderResponseDto, CustomerPatchDto, DeleteOrderRequestDto,
    FraudCheckRequestDto, OrderPatchDto, TrackOrderRequestDto, TrackOrderResponseDto,
};
use crate::application::ports::{
    AuthError, DeliveryHistoryPort, FraudDispatchPort, Identity, IdentityPort, RiskFlagPort,
};
use crate::application::use_cases::{
    AdminCustomersUseCase, AdminOrdersUseCase, CheckFraudUseCase, PlaceOrderUseCase,
    PreviewCouponUseCase, TrackOrderUseCase,
};
use crate::domain::catalog::CatalogRepository;
use crate::domain::customers::CustomerRepository;
use crate::domain::ordering::repository::OrderRepository;
use crate::domain::pricing::CouponRepository;
use crate::error::{ApiError, ErrorCode};

use super::response::{
    AdminCustomerDetailResponse, AdminCustomerResponse, AdminCustomersResponse,
    AdminOrderResponse, AdminOrdersResponse, DeletedResponse, HealthResponse,
};

/// Application state shared across handlers.
pub struct AppState<Cat, Cus, Cpn, O, H, R, I, D>
where
    Cat: CatalogRepository,
    Cus: CustomerRepository,
    Cpn: CouponRepository,
    O: OrderRepository,
    H: DeliveryHistoryPort,
    R: RiskFlagPort,
    I: IdentityPort,
    D: FraudDispatchPort,
{
    /// Use case for checkout.
    pub place_order: Arc<PlaceOrderUseCase<Cat, Cus, Cpn, O, D>>,
    /// Use case for coupon preview.
    pub preview_coupon: Arc<PreviewCouponUseCase<Cpn>>,
    /// Use case for customer order tracking.
    pub track_order: Arc<TrackOrderUseCase<O>>,
    /// Use case for fraud scoring.
    pub check_fraud: Arc<CheckFraudUseCase<O, Cus, H, R>>,
    /// Use case for the admin order surface.
    pub admin_orders: Arc<AdminOrdersUseCase<O>>,
    /// Use case for the admin customer surface.
    pub admin_customers: Arc<AdminCustomersUseCase<Cus, O>>,
    /// Token verification.
    pub identity: Arc<I>,
    /// Application version.
    pub version: String,
}

impl<Cat, Cus, Cpn, O, H, R, I, D> Clone for AppState<Cat, Cus, Cpn, O, H, R, I, D>
where
    Cat: CatalogRepository,
    Cus: CustomerRepository,
    Cpn: CouponRepository,
    O: OrderRepository,
    H: DeliveryHistoryPort,
    R: RiskFlagPort,
    I: IdentityPort,
    D: FraudDispatchPort,
{
    fn clone(&self) -> Self {
        Self {
            place_order: Arc::clone(&self.place_order),
            preview_coupon: Arc::clone(&self.preview_coupon),
            track_order: Arc::clone(&self.track_order),
            check_fraud: Arc::clone(&self.check_fraud),
            admin_orders: Arc::clone(&self.admin_orders),
            admin_customers: Arc::clone(&self.admin_customers),
            identity: Arc::clone(&self.identity),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<Cat, Cus, Cpn, O, H, R, I, D>(
    state: AppState<Cat, Cus, Cpn, O, H, R, I, D>,
) -> Router
where
    Cat: CatalogRepository + 'static,
    Cus: CustomerRepository + 'static,
    Cpn: CouponRepository + 'static,
    O: OrderRepository + 'static,
    H: DeliveryHistoryPort + 'static,
    R: RiskFlagPort + 'static,
    I: IdentityPort + 'static,
    D: FraudDispatchPort + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/create-order", post(create_order))
        .route("/api/v1/coupon-preview", post(coupon_preview))
        .route("/api/v1/track-order", post(track_order))
        .route("/api/v1/fraud-check", post(fraud_check))
        .route(
            "/api/v1/admin/orders",
            get(list_orders).patch(patch_order).delete(delete_order),
        )
        .route(
            "/api/v1/admin/customers",
            get(list_customers).patch(patch_customer),
        )
        .with_state(state)
}

/// Pull the bearer token out of the Authorization header, if any.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn auth_error(error: AuthError) -> ApiError {
    match error {
        AuthError::Unauthenticated => ApiError::new(
            ErrorCode::Unauthenticated,
            "Missing or invalid bearer token",
        ),
        AuthError::Forbidden => ApiError::new(ErrorCode::Forbidden, "Admin access required"),
    }
}

async fn authenticate<I: IdentityPort>(
    identity: &I,
    headers: &HeaderMap,
) -> Result<Identity, ApiError> {
    identity
        .verify(bearer_token(headers))
        .await
        .map_err(auth_error)
}

async fn require_admin<I: IdentityPort>(
    identity: &I,
    headers: &HeaderMap,
) -> Result<Identity, ApiError> {
    authenticate(identity, headers)
        .await
        .and_then(|id| id.require_admin().map_err(auth_error))
}

/// Health check endpoint.
async fn health_check<Cat, Cus, Cpn, O, H, R, I, D>(
    State(state): State<AppState<Cat, Cus, Cpn, O, H, R, I, D>>,
) -> impl IntoResponse
where
    Cat: CatalogRepository,
    Cus: CustomerRepository,
    Cpn: CouponRepository,
    O: OrderRepository,
    H: DeliveryHistoryPort,
    R: RiskFlagPort,
    I: IdentityPort,
    D: FraudDispatchPort,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Checkout endpoint.
async fn create_order<Cat, Cus, Cpn, O, H, R, I, D>(
    State(state): State<AppState<Cat, Cus, Cpn, O, H, R, I, D>>,
    Json(request): Json<CreateOrderRequestDto>,
) -> Result<Json<CreateOrderResponseDto>, ApiError>
where
    Cat: CatalogRepository,
    Cus: CustomerRepository,
    Cpn: CouponRepository,
    O: OrderRepository,
    H: DeliveryHistoryPort,
    R: RiskFlagPort,
    I: IdentityPort,
    D: FraudDispatchPort,
{
    state.place_order.execute(request).await.map(Json)
}

/// Coupon preview endpoint.
async fn coupon_preview<Cat, Cus, Cpn, O, H, R, I, D>(
    State(state): State<AppState<Cat, Cus, Cpn, O, H, R, I, D>>,
    Json(request): Json<CouponPreviewRequestDto>,
) -> Result<Json<CouponPreviewResponseDto>, ApiError>
where
    Cat: CatalogRepository,
    Cus: CustomerRepository,
    Cpn: CouponRepository,
    O: OrderRepository,
    H: DeliveryHistoryPort,
    R: RiskFlagPort,
    I: IdentityPort,
    D: FraudDispatchPort,
{
    state.preview_coupon.execute(request).await.map(Json)
}

/// Customer order tracking endpoint.
async fn track_order<Cat, Cus, Cpn, O, H, R, I, D>(
    State(state): State<AppState<Cat, Cus, Cpn, O, H, R, I, D>>,
    Json(request): Json<TrackOrderRequestDto>,
) -> Result<Json<TrackOrderResponseDto>, ApiError>
where
    Cat: CatalogRepository,
    Cus: CustomerRepository,
    Cpn: CouponRepository,
    O: OrderRepository,
    H: DeliveryHistoryPort,
    R: RiskFlagPort,
    I: IdentityPort,
    D: FraudDispatchPort,
{
    state.track_order.execute(request).await.map(Json)
}

/// Fraud check endpoint.
///
/// Accepts either role: the storefront's service token (post-checkout
/// re-checks) or an admin token (back-office screens). With
/// `action: "check-connection"` it probes the courier API instead of scoring.
async fn fraud_check<Cat, Cus, Cpn, O, H, R, I, D>(
    State(state): State<AppState<Cat, Cus, Cpn, O, H, R, I, D>>,
    headers: HeaderMap,
    Json(request): Json<FraudCheckRequestDto>,
) -> Result<Response, ApiError>
where
    Cat: CatalogRepository,
    Cus: CustomerRepository,
    Cpn: CouponRepository,
    O: OrderRepository,
    H: DeliveryHistoryPort,
    R: RiskFlagPort,
    I: IdentityPort,
    D: FraudDispatchPort,
{
    authenticate(state.identity.as_ref(), &headers).await?;

    if request.action.as_deref() == Some("check-connection") {
        let probe = state.check_fraud.probe().await;
        return Ok(Json(probe).into_response());
    }

    let phone = request
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::invalid_request("Phone number is required"))?;

    let response = state
        .check_fraud
        .check(phone, request.order_id.as_deref())
        .await?;
    Ok(Json(response).into_response())
}

/// Admin order listing endpoint.
async fn list_orders<Cat, Cus, Cpn, O, H, R, I, D>(
    State(state): State<AppState<Cat, Cus, Cpn, O, H, R, I, D>>,
    headers: HeaderMap,
    Query(query): Query<AdminOrdersQuery>,
) -> Result<Json<AdminOrdersResponse>, ApiError>
where
    Cat: CatalogRepository,
    Cus: CustomerRepository,
    Cpn: CouponRepository,
    O: OrderRepository,
    H: DeliveryHistoryPort,
    R: RiskFlagPort,
    I: IdentityPort,
    D: FraudDispatchPort,
{
    require_admin(state.identity.as_ref(), &headers).await?;
    let orders = state.admin_orders.list(query).await?;
    Ok(Json(AdminOrdersResponse { ok: true, orders }))
}

/// Admin order patch endpoint.
async fn patch_order<Cat, Cus, Cpn, O, H, R, I, D>(
    State(state): State<AppState<Cat, Cus, Cpn, O, H, R, I, D>>,
    headers: HeaderMap,
    Json(request): Json<OrderPatchDto>,
) -> Result<Json<AdminOrderResponse>, ApiError>
where
    Cat: CatalogRepository,
    Cus: CustomerRepository,
    Cpn: CouponRepository,
    O: OrderRepository,
    H: DeliveryHistoryPort,
    R: RiskFlagPort,
    I: IdentityPort,
    D: FraudDispatchPort,
{
    require_admin(state.identity.as_ref(), &headers).await?;
    let order = state.admin_orders.patch(request).await?;
    Ok(Json(AdminOrderResponse { ok: true, order }))
}

/// Admin order delete endpoint.
async fn delete_order<Cat, Cus, Cpn, O, H, R, I, D>(
    State(state): State<AppState<Cat, Cus, Cpn, O, H, R, I, D>>,
    headers: HeaderMap,
    Json(request): Json<DeleteOrderRequestDto>,
) -> Result<Json<DeletedResponse>, ApiError>
where
    Cat: CatalogRepository,
    Cus: CustomerRepository,
    Cpn: CouponRepository,
    O: OrderRepository,
    H: DeliveryHistoryPort,
    R: RiskFlagPort,
    I: IdentityPort,
    D: FraudDispatchPort,
{
    require_admin(state.identity.as_ref(), &headers).await?;
    state.admin_orders.delete(&request.id).await?;
    Ok(Json(DeletedResponse { ok: true }))
}

/// Admin customer listing endpoint. With `?phone=` it returns a single
/// profile with its order summaries instead.
async fn list_customers<Cat, Cus, Cpn, O, H, R, I, D>(
    State(state): State<AppState<Cat, Cus, Cpn, O, H, R, I, D>>,
    headers: HeaderMap,
    Query(query): Query<AdminCustomersQuery>,
) -> Result<Response, ApiError>
where
    Cat: CatalogRepository,
    Cus: CustomerRepository,
    Cpn: CouponRepository,
    O: OrderRepository,
    H: DeliveryHistoryPort,
    R: RiskFlagPort,
    I: IdentityPort,
    D: FraudDispatchPort,
{
    require_admin(state.identity.as_ref(), &headers).await?;

    if let Some(phone) = query.phone.as_deref() {
        let (customer, orders) = state.admin_customers.detail(phone).await?;
        return Ok(Json(AdminCustomerDetailResponse {
            ok: true,
            customer,
            orders,
        })
        .into_response());
    }

    let customers = state.admin_customers.list().await?;
    Ok(Json(AdminCustomersResponse {
        ok: true,
        customers,
    })
    .into_response())
}

/// Admin customer patch endpoint.
async fn patch_customer<Cat, Cus, Cpn, O, H, R, I, D>(
    State(state): State<AppState<Cat, Cus, Cpn, O, H, R, I, D>>,
    headers: HeaderMap,
    Json(request): Json<CustomerPatchDto>,
) -> Result<Json<AdminCustomerResponse>, ApiError>
where
    Cat: CatalogRepository,
    Cus: CustomerRepository,
    Cpn: CouponRepository,
    O: OrderRepository,
    H: DeliveryHistoryPort,
    R: RiskFlagPort,
    I: IdentityPort,
    D: FraudDispatchPort,
{
    require_admin(state.identity.as_ref(), &headers).await?;
    let customer = state.admin_customers.patch(request).await?;
    Ok(Json(AdminCustomerResponse { ok: true, customer }))
}
