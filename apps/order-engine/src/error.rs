//! Rich error handling for the order engine.
//!
//! This module provides the structured error type every HTTP handler returns.
//! Errors carry a stable code, a human-readable message and optional context
//! for debugging.
//!
//! # HTTP Status Codes
//!
//! | Status | Usage |
//! |--------|-------|
//! | `400 Bad Request` | Malformed or out-of-bounds request |
//! | `401 Unauthorized` | Missing or unknown bearer token |
//! | `403 Forbidden` | Blocked customer, non-admin token |
//! | `404 Not Found` | Order/tracking lookup miss |
//! | `409 Conflict` | Coupon rejected, terminal status change |
//! | `500 Internal Server Error` | Store or upstream failure |

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for the order engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation errors (400)
    /// Invalid request format, missing fields or out-of-bounds values.
    InvalidRequest,
    /// Product or variant unknown, inactive or out of stock.
    InvalidItem,

    // Auth errors (401/403)
    /// Missing or unknown bearer token.
    Unauthenticated,
    /// Token valid but not allowed to perform the operation.
    Forbidden,
    /// The customer's phone is blocked.
    CustomerBlocked,

    // Business conflicts (409)
    /// Coupon exists but cannot be applied.
    CouponRejected,
    /// Status change attempted on a delivered or cancelled order.
    OrderFinalized,

    // Not found errors (404)
    /// Order not found (or tracking code/phone pair did not match).
    OrderNotFound,
    /// Coupon code unknown.
    CouponNotFound,

    // Internal errors (500)
    /// Internal server error.
    InternalError,
    /// Persistence layer failure.
    StoreError,
}

impl ErrorCode {
    /// Get the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest | Self::InvalidItem => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden | Self::CustomerBlocked => StatusCode::FORBIDDEN,
            Self::CouponRejected | Self::OrderFinalized => StatusCode::CONFLICT,
            Self::OrderNotFound | Self::CouponNotFound => StatusCode::NOT_FOUND,
            Self::InternalError | Self::StoreError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the stable reason string sent to clients.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::InvalidItem => "INVALID_ITEM",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Forbidden => "FORBIDDEN",
            Self::CustomerBlocked => "CUSTOMER_BLOCKED",
            Self::CouponRejected => "COUPON_REJECTED",
            Self::OrderFinalized => "ORDER_FINALIZED",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::CouponNotFound => "COUPON_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::StoreError => "STORE_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A structured error returned by any API operation.
#[derive(Debug, Error)]
pub struct ApiError {
    /// Error code.
    code: ErrorCode,
    /// Human-readable message.
    message: String,
    /// Additional context (key-value pairs), logged but not sent to clients.
    context: Vec<(String, String)>,
}

impl ApiError {
    /// Create a new API error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Add context to the error.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context.
    #[must_use]
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.reason(), self.message)
    }
}

/// Error body sent to clients. All API errors share this envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `false`.
    pub ok: bool,
    /// Stable error code string.
    pub code: String,
    /// Human-readable message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status();
        if status.is_server_error() {
            tracing::error!(code = %self.code, context = ?self.context, "{}", self.message);
        }
        let body = ErrorBody {
            ok: false,
            code: self.code.reason().to_string(),
            error: self.message,
        };
        (status, Json(body)).into_response()
    }
}

/// Convenience constructors for common errors.
impl ApiError {
    /// Invalid request format.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Product/variant rejection naming the offending item.
    #[must_use]
    pub fn invalid_item(message: impl Into<String>, product_id: &str) -> Self {
        Self::new(ErrorCode::InvalidItem, message).with_context("product_id", product_id)
    }

    /// Order not found (also used for tracking misses so the body never
    /// reveals whether the code exists).
    #[must_use]
    pub fn order_not_found() -> Self {
        Self::new(
            ErrorCode::OrderNotFound,
            "No order found for the given tracking code and phone number",
        )
    }

    /// Internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}
