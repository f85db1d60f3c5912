//! Pricing context: coupons and discount redemption.

pub mod coupon;
pub mod repository;
pub mod service;

pub use coupon::{Coupon, CouponRejection};
pub use repository::{CouponRepository, CouponStoreError};
pub use service::{CouponError, DiscountOutcome};
