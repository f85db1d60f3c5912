//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod admin_customers;
mod admin_orders;
mod check_fraud;
mod place_order;
mod preview_coupon;
mod track_order;

pub use admin_customers::AdminCustomersUseCase;
pub use admin_orders::AdminOrdersUseCase;
pub use check_fraud::CheckFraudUseCase;
pub use place_order::PlaceOrderUseCase;
pub use preview_coupon::PreviewCouponUseCase;
pub use track_order::TrackOrderUseCase;
