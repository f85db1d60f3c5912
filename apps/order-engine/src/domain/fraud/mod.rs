//! Fraud context.
//!
//! Risk scoring is a pure fold over whatever signals could be gathered:
//! internal order history, external courier statistics and the manual block
//! flag. Signal gathering (and its failure modes) lives in the application
//! layer; this module only turns signals into an assessment.

pub mod scoring;

pub use scoring::{FraudSignals, score};

use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, Timestamp};
use crate::domain::ordering::PaymentMethod;

/// Risk classification derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Score of 30 or below.
    Low,
    /// Score above 30, up to 60.
    Medium,
    /// Score above 60.
    High,
}

impl RiskLevel {
    /// Classify a score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score > scoring::HIGH_THRESHOLD {
            Self::High
        } else if score > scoring::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// The outcome of a fraud check, persisted onto the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudAssessment {
    /// Accumulated score, capped at 100.
    pub score: u8,
    /// Classification of the score.
    pub level: RiskLevel,
    /// Human-readable reasons, in rule evaluation order.
    pub reasons: Vec<String>,
    /// When the check ran.
    pub checked_at: Timestamp,
}

/// Aggregated statistics over a phone's prior orders in this store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InternalHistory {
    /// Customer is manually blacklisted.
    pub is_blocked: bool,
    /// Prior orders in delivered status.
    pub delivered_count: u32,
    /// Prior orders in cancelled status.
    pub cancelled_count: u32,
    /// All prior orders, regardless of status.
    pub total_orders: u32,
}

/// Delivery statistics reported by the courier aggregator for a phone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourierStats {
    /// Percentage of parcels delivered, 0-100.
    pub delivery_ratio: f64,
    /// Parcels the aggregator has seen for this phone.
    pub total_orders: u32,
}

/// Financials of the order under assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderFinancials {
    /// How the order is paid.
    pub payment_method: PaymentMethod,
    /// Payable total.
    pub total: Money,
}
