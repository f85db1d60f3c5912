//! Wire types for the courier APIs.

use serde::{Deserialize, Serialize};

/// Request body both courier APIs accept.
#[derive(Debug, Clone, Serialize)]
pub struct PhoneLookupRequest {
    /// Digits-only phone number.
    pub phone: String,
}

/// BD Courier delivery-history response.
///
/// Fields beyond `success` are absent when the aggregator has no record.
#[derive(Debug, Clone, Deserialize)]
pub struct BdCourierResponse {
    /// Whether the lookup found data.
    pub success: bool,
    /// Percentage of parcels delivered, 0-100.
    #[serde(default)]
    pub order_ratio: Option<f64>,
    /// Parcels seen across couriers.
    #[serde(default)]
    pub total_order: Option<u32>,
}

/// Steadfast fraud-flag response.
#[derive(Debug, Clone, Deserialize)]
pub struct SteadfastResponse {
    /// Explicit risky flag.
    #[serde(default)]
    pub risky: Option<bool>,
    /// Textual verdict; `"risky"` marks a flagged phone.
    #[serde(default)]
    pub fraud_status: Option<String>,
}
