// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements,
        clippy::or_fun_call
    )
)]

//! Order Engine - Rust Core Library
//!
//! Order-processing core for the storefront: checkout, coupon redemption,
//! COD fraud scoring, customer order tracking and the admin back office.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, scoring)
//!   - `catalog`: Products and variants, effective pricing, stock checks
//!   - `pricing`: Coupon evaluation and redemption
//!   - `ordering`: Order aggregate, status lifecycle, tracking codes
//!   - `customers`: Customer profiles and the blacklist
//!   - `fraud`: Risk scoring over internal and courier signals
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`DeliveryHistoryPort`,
//!     `RiskFlagPort`, `IdentityPort`, `FraudDispatchPort`)
//!   - `use_cases`: `PlaceOrder`, `PreviewCoupon`, `TrackOrder`, `CheckFraud`,
//!     `AdminOrders`, `AdminCustomers`
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `courier`: BD Courier and Steadfast HTTP adapters
//!   - `persistence`: In-memory repositories
//!   - `auth`: Static-token identity adapter
//!   - `tasks`: Background fraud dispatch
//!   - `http`: Axum REST controller

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// API error model shared by every endpoint.
pub mod error;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::fraud::{FraudAssessment, FraudSignals, RiskLevel};
pub use domain::ordering::{Order, OrderStatus, TrackingCode};
pub use domain::shared::{Money, OrderId, Phone, ProductId, Timestamp, VariantId};

// Application re-exports
pub use application::dto::{CreateOrderRequestDto, CreateOrderResponseDto, TrackOrderRequestDto};
pub use application::ports::{
    AuthError, CourierError, DeliveryHistoryPort, FraudDispatchPort, Identity, IdentityPort,
    NoOpFraudDispatcher, RiskFlagPort, Role,
};
pub use application::use_cases::{
    AdminCustomersUseCase, AdminOrdersUseCase, CheckFraudUseCase, PlaceOrderUseCase,
    PreviewCouponUseCase, TrackOrderUseCase,
};

// Infrastructure re-exports
pub use error::{ApiError, ErrorCode};
pub use infrastructure::auth::StaticTokenIdentity;
pub use infrastructure::courier::{
    BdCourierAdapter, BdCourierConfig, SteadfastAdapter, SteadfastConfig,
};
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::{
    InMemoryCatalog, InMemoryCoupons, InMemoryCustomers, InMemoryOrders,
};
pub use infrastructure::tasks::TokioFraudDispatcher;
