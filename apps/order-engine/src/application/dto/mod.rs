//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for API boundaries and use case inputs/outputs. Public
//! storefront bodies are camelCase; the admin surface speaks snake_case.

mod admin_dto;
mod coupon_dto;
mod fraud_dto;
mod order_dto;

pub use admin_dto::{
    AdminCustomerDto, AdminCustomersQuery, AdminOrderDto, AdminOrderItemDto, AdminOrdersQuery,
    CustomerPatchDto, DeleteOrderRequestDto, OrderPatchDto,
};
pub use coupon_dto::{CouponPreviewRequestDto, CouponPreviewResponseDto};
pub use fraud_dto::{
    CourierSignalDto, FraudCheckRequestDto, FraudCheckResponseDto, FraudSignalsDto,
    ProbeResponseDto,
};
pub use order_dto::{
    CreateOrderRequestDto, CreateOrderResponseDto, CreatedOrderDto, OrderItemRequestDto,
    TrackOrderRequestDto, TrackOrderResponseDto, TrackedItemDto, TrackedOrderDto,
};
