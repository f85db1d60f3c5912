//! Coupon entity and validation rules.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::{Money, Timestamp};

/// A flat-amount discount code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// The code customers type in. Matched case-sensitively.
    pub code: String,
    /// Flat discount amount.
    pub discount_flat: Money,
    /// Minimum order subtotal required to qualify.
    pub min_order: Money,
    /// Activation window start; absent means unbounded.
    pub start_at: Option<Timestamp>,
    /// Activation window end; absent means unbounded.
    pub end_at: Option<Timestamp>,
    /// Maximum number of redemptions; absent means unlimited.
    pub usage_limit: Option<u32>,
    /// Redemptions so far. Monotonically increasing.
    pub used_count: u32,
    /// Whether the coupon is enabled at all.
    pub is_active: bool,
}

impl Coupon {
    /// Validate this coupon against a cart subtotal at a point in time.
    ///
    /// Checks run in a fixed order and the first failure wins: active flag,
    /// activation window, minimum order, usage limit. On success, returns the
    /// discount clamped to the subtotal so a total can never go negative.
    ///
    /// This is a pure read; the usage-limit check here is advisory only and
    /// redemption must re-check it atomically at the store.
    ///
    /// # Errors
    ///
    /// Returns the first failed validation rule.
    pub fn evaluate(&self, subtotal: Money, now: Timestamp) -> Result<Money, CouponRejection> {
        if !self.is_active {
            return Err(CouponRejection::Inactive);
        }
        if let Some(start) = self.start_at
            && now < start
        {
            return Err(CouponRejection::NotStarted);
        }
        if let Some(end) = self.end_at
            && now > end
        {
            return Err(CouponRejection::Expired);
        }
        if subtotal < self.min_order {
            return Err(CouponRejection::BelowMinimum {
                min_order: self.min_order,
            });
        }
        if let Some(limit) = self.usage_limit
            && self.used_count >= limit
        {
            return Err(CouponRejection::Exhausted);
        }
        Ok(self.discount_flat.min(subtotal))
    }
}

/// Why a coupon could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CouponRejection {
    /// No coupon exists for the given code.
    UnknownCode,
    /// The coupon is disabled.
    Inactive,
    /// The activation window has not opened yet.
    NotStarted,
    /// The activation window has closed.
    Expired,
    /// The cart subtotal is below the coupon's minimum.
    BelowMinimum {
        /// Required minimum subtotal.
        min_order: Money,
    },
    /// All allowed redemptions are used up.
    Exhausted,
}

impl fmt::Display for CouponRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCode => write!(f, "Coupon code not found"),
            Self::Inactive => write!(f, "Coupon is not active"),
            Self::NotStarted => write!(f, "Coupon is not valid yet"),
            Self::Expired => write!(f, "Coupon has expired"),
            Self::BelowMinimum { min_order } => {
                write!(f, "Order subtotal must be at least {min_order}")
            }
            Self::Exhausted => write!(f, "Coupon usage limit reached"),
        }
    }
}

impl std::error::Error for CouponRejection {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn coupon() -> Coupon {
        Coupon {
            code: "SAVE50".to_string(),
            discount_flat: Money::bdt(50),
            min_order: Money::ZERO,
            start_at: None,
            end_at: None,
            usage_limit: Some(2),
            used_count: 0,
            is_active: true,
        }
    }

    #[test]
    fn evaluate_success_returns_flat_discount() {
        let discount = coupon().evaluate(Money::bdt(1000), Timestamp::now()).unwrap();
        assert_eq!(discount, Money::bdt(50));
    }

    #[test]
    fn evaluate_clamps_discount_to_subtotal() {
        let mut c = coupon();
        c.discount_flat = Money::bdt(200);
        let discount = c.evaluate(Money::bdt(120), Timestamp::now()).unwrap();
        assert_eq!(discount, Money::bdt(120));
    }

    #[test]
    fn evaluate_rejects_inactive() {
        let mut c = coupon();
        c.is_active = false;
        assert_eq!(
            c.evaluate(Money::bdt(1000), Timestamp::now()),
            Err(CouponRejection::Inactive)
        );
    }

    #[test]
    fn evaluate_rejects_before_window() {
        let mut c = coupon();
        c.start_at = Some(Timestamp::new(Utc::now() + Duration::days(1)));
        assert_eq!(
            c.evaluate(Money::bdt(1000), Timestamp::now()),
            Err(CouponRejection::NotStarted)
        );
    }

    #[test]
    fn evaluate_rejects_after_window() {
        let mut c = coupon();
        c.end_at = Some(Timestamp::new(Utc::now() - Duration::days(1)));
        assert_eq!(
            c.evaluate(Money::bdt(1000), Timestamp::now()),
            Err(CouponRejection::Expired)
        );
    }

    #[test]
    fn evaluate_rejects_below_minimum() {
        let mut c = coupon();
        c.min_order = Money::bdt(500);
        assert_eq!(
            c.evaluate(Money::bdt(499), Timestamp::now()),
            Err(CouponRejection::BelowMinimum {
                min_order: Money::bdt(500)
            })
        );
    }

    #[test]
    fn evaluate_rejects_exhausted() {
        let mut c = coupon();
        c.used_count = 2;
        assert_eq!(
            c.evaluate(Money::bdt(1000), Timestamp::now()),
            Err(CouponRejection::Exhausted)
        );
    }

    #[test]
    fn evaluate_unbounded_window_and_limit() {
        let mut c = coupon();
        c.usage_limit = None;
        c.used_count = 10_000;
        assert!(c.evaluate(Money::bdt(1000), Timestamp::now()).is_ok());
    }

    #[test]
    fn inactive_wins_over_minimum() {
        // First failing check wins: active flag is checked before min order.
        let mut c = coupon();
        c.is_active = false;
        c.min_order = Money::bdt(5000);
        assert_eq!(
            c.evaluate(Money::bdt(10), Timestamp::now()),
            Err(CouponRejection::Inactive)
        );
    }
}
