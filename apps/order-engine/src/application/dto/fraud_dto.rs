//! Fraud check DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::fraud::{FraudAssessment, FraudSignals, RiskLevel};

/// Fraud check request body.
///
/// Either a phone to score, or `action: "check-connection"` to probe the
/// courier integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudCheckRequestDto {
    /// Phone to score.
    #[serde(default)]
    pub phone: Option<String>,
    /// Order to attach the assessment to, when the check follows a checkout.
    #[serde(default)]
    pub order_id: Option<String>,
    /// Alternative action; only `check-connection` is recognized.
    #[serde(default)]
    pub action: Option<String>,
}

/// External courier signal, when it could be gathered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourierSignalDto {
    /// Percentage of parcels delivered.
    pub delivery_ratio: f64,
    /// Parcels the aggregator has seen for this phone.
    pub total_orders: u32,
}

/// Every signal the scoring fold saw, echoed for the admin screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudSignalsDto {
    /// Customer is manually blacklisted.
    pub is_blocked: bool,
    /// Delivered orders in this store.
    pub delivered_count: u32,
    /// Cancelled orders in this store.
    pub cancelled_count: u32,
    /// All prior orders in this store.
    pub total_orders: u32,
    /// Courier delivery statistics, `null` when unreachable or unknown.
    pub courier: Option<CourierSignalDto>,
    /// Risky flag from the courier network, `null` when unreachable.
    pub risky: Option<bool>,
}

impl FraudSignalsDto {
    /// Build from the gathered signals.
    #[must_use]
    pub fn from_signals(signals: &FraudSignals) -> Self {
        Self {
            is_blocked: signals.history.is_blocked,
            delivered_count: signals.history.delivered_count,
            cancelled_count: signals.history.cancelled_count,
            total_orders: signals.history.total_orders,
            courier: signals.courier.map(|c| CourierSignalDto {
                delivery_ratio: c.delivery_ratio,
                total_orders: c.total_orders,
            }),
            risky: signals.risky_flag,
        }
    }
}

/// Fraud check response: the assessment plus the raw signals behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudCheckResponseDto {
    /// Always `true` on this path.
    pub ok: bool,
    /// The scored phone.
    pub phone: String,
    /// Accumulated score, capped at 100.
    pub score: u8,
    /// Risk classification.
    pub status: RiskLevel,
    /// Reasons in rule evaluation order.
    pub reasons: Vec<String>,
    /// When the check ran, RFC 3339.
    pub checked_at: String,
    /// Signals the score was computed from.
    pub signals: FraudSignalsDto,
}

impl FraudCheckResponseDto {
    /// Build the response from an assessment and its signals.
    #[must_use]
    pub fn from_assessment(
        phone: impl Into<String>,
        assessment: &FraudAssessment,
        signals: &FraudSignals,
    ) -> Self {
        Self {
            ok: true,
            phone: phone.into(),
            score: assessment.score,
            status: assessment.level,
            reasons: assessment.reasons.clone(),
            checked_at: assessment.checked_at.to_rfc3339(),
            signals: FraudSignalsDto::from_signals(signals),
        }
    }
}

/// Response to `action: "check-connection"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeResponseDto {
    /// Whether the probe succeeded.
    pub ok: bool,
    /// `connected` or the failure message.
    pub courier_api: String,
}
