//! Coupon preview DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Coupon preview request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponPreviewRequestDto {
    /// Coupon code to evaluate.
    pub code: String,
    /// Current cart subtotal.
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal_bdt: Decimal,
}

/// Coupon preview response. Read-only: calling this never consumes usage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponPreviewResponseDto {
    /// Always `true` on this path.
    pub ok: bool,
    /// The evaluated code, echoed back.
    pub code: String,
    /// Discount the coupon would grant against this subtotal.
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_bdt: Decimal,
    /// Human-readable confirmation.
    pub message: String,
}
