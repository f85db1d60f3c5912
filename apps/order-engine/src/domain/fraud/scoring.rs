//! Additive risk scoring.
//!
//! Each rule contributes a fixed weight when its condition holds; weights sum
//! and cap at [`MAX_SCORE`]. Rules fire independently except where an
//! `else if` makes the stronger variant suppress the weaker one. Absent
//! signals simply contribute nothing.

use super::{
    CourierStats, FraudAssessment, InternalHistory, OrderFinancials, RiskLevel,
};
use crate::domain::ordering::PaymentMethod;
use crate::domain::shared::{Money, Timestamp};

/// Customer is manually blacklisted.
pub const BLACKLIST_POINTS: u8 = 30;
/// Every prior order was cancelled, none delivered.
pub const ALL_CANCELLED_POINTS: u8 = 20;
/// More cancellations than deliveries across several orders.
pub const CANCEL_HEAVY_POINTS: u8 = 15;
/// Courier delivery ratio below [`LOW_RATIO_PERCENT`].
pub const LOW_RATIO_POINTS: u8 = 25;
/// Courier delivery ratio below [`MODERATE_RATIO_PERCENT`].
pub const MODERATE_RATIO_POINTS: u8 = 10;
/// Courier network flags the phone as risky.
pub const RISKY_FLAG_POINTS: u8 = 15;
/// Cash-on-delivery order above [`HIGH_VALUE_COD_LIMIT_BDT`].
pub const HIGH_VALUE_COD_POINTS: u8 = 10;

/// Scores never exceed this.
pub const MAX_SCORE: u8 = 100;
/// Scores strictly above this are high risk.
pub const HIGH_THRESHOLD: u8 = 60;
/// Scores strictly above this (and not high) are medium risk.
pub const MEDIUM_THRESHOLD: u8 = 30;

/// Ratio below which the courier history is considered poor.
pub const LOW_RATIO_PERCENT: f64 = 50.0;
/// Ratio below which the courier history is considered shaky.
pub const MODERATE_RATIO_PERCENT: f64 = 80.0;
/// The low-ratio rule needs more than this many courier parcels to fire.
pub const LOW_RATIO_MIN_PARCELS: u32 = 2;
/// COD orders above this amount (BDT) add points.
pub const HIGH_VALUE_COD_LIMIT_BDT: i64 = 5000;

/// Everything the scoring fold looks at. Optional fields are signals that
/// could not be gathered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FraudSignals {
    /// Internal history for the phone.
    pub history: InternalHistory,
    /// Courier aggregator statistics, if reachable.
    pub courier: Option<CourierStats>,
    /// Risky flag from the courier network, if reachable.
    pub risky_flag: Option<bool>,
    /// The order under assessment, when the check targets a specific order.
    pub order: Option<OrderFinancials>,
}

/// Fold the signals into an assessment.
#[must_use]
pub fn score(signals: &FraudSignals, checked_at: Timestamp) -> FraudAssessment {
    let mut points: u32 = 0;
    let mut reasons = Vec::new();

    let history = &signals.history;
    if history.is_blocked {
        points += u32::from(BLACKLIST_POINTS);
        reasons.push("Customer is manually blacklisted".to_string());
    }

    if history.cancelled_count > 0 && history.delivered_count == 0 {
        points += u32::from(ALL_CANCELLED_POINTS);
        reasons.push("All previous orders were cancelled".to_string());
    } else if history.cancelled_count > history.delivered_count && history.total_orders > 1 {
        points += u32::from(CANCEL_HEAVY_POINTS);
        reasons.push("More cancellations than deliveries".to_string());
    }

    if let Some(courier) = &signals.courier {
        if courier.delivery_ratio < LOW_RATIO_PERCENT
            && courier.total_orders > LOW_RATIO_MIN_PARCELS
        {
            points += u32::from(LOW_RATIO_POINTS);
            reasons.push(format!(
                "Courier delivery ratio is low ({:.0}%)",
                courier.delivery_ratio
            ));
        } else if courier.delivery_ratio < MODERATE_RATIO_PERCENT {
            points += u32::from(MODERATE_RATIO_POINTS);
            reasons.push(format!(
                "Courier delivery ratio is moderate ({:.0}%)",
                courier.delivery_ratio
            ));
        }
    }

    if signals.risky_flag == Some(true) {
        points += u32::from(RISKY_FLAG_POINTS);
        reasons.push("Flagged as risky by courier network".to_string());
    }

    if let Some(order) = &signals.order
        && order.payment_method == PaymentMethod::Cod
        && order.total > Money::bdt(HIGH_VALUE_COD_LIMIT_BDT)
    {
        points += u32::from(HIGH_VALUE_COD_POINTS);
        reasons.push(format!(
            "High-value cash-on-delivery order (above \u{9f3}{HIGH_VALUE_COD_LIMIT_BDT})"
        ));
    }

    #[allow(clippy::cast_possible_truncation)]
    let score = points.min(u32::from(MAX_SCORE)) as u8;

    FraudAssessment {
        score,
        level: RiskLevel::from_score(score),
        reasons,
        checked_at,
    }
}
