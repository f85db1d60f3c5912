//! HTTP response envelopes.
//!
//! Bodies that are pure envelopes around application DTOs live here; DTOs
//! with their own construction logic stay in `application::dto`.

use serde::{Deserialize, Serialize};

use crate::application::dto::{AdminCustomerDto, AdminOrderDto};

/// Response from the health check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Admin order listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOrdersResponse {
    /// Whether the request succeeded.
    pub ok: bool,
    /// Matching orders, newest first.
    pub orders: Vec<AdminOrderDto>,
}

/// A single admin order, after a patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOrderResponse {
    /// Whether the request succeeded.
    pub ok: bool,
    /// The updated order with its items.
    pub order: AdminOrderDto,
}

/// Acknowledgement for a delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    /// Whether the request succeeded.
    pub ok: bool,
}

/// Admin customer listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCustomersResponse {
    /// Whether the request succeeded.
    pub ok: bool,
    /// Customers with order aggregates, biggest spenders first.
    pub customers: Vec<AdminCustomerDto>,
}

/// Single customer profile with their order summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCustomerDetailResponse {
    /// Whether the request succeeded.
    pub ok: bool,
    /// The resolved profile with aggregates.
    pub customer: AdminCustomerDto,
    /// The customer's orders, newest first, without line items.
    pub orders: Vec<AdminOrderDto>,
}

/// A single admin customer, after a patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCustomerResponse {
    /// Whether the request succeeded.
    pub ok: bool,
    /// The updated customer profile.
    pub customer: AdminCustomerDto,
}
