//! Discount preview and redemption flows.
//!
//! `preview` is a pure read; `redeem` is the mutating counterpart used only
//! during final order commit. Both share the same validation order via
//! [`Coupon::evaluate`].

use thiserror::Error;

use super::coupon::{Coupon, CouponRejection};
use super::repository::{CouponRepository, CouponStoreError};
use crate::domain::shared::{Money, Timestamp};

/// A successfully applied (or previewed) discount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountOutcome {
    /// Canonical coupon code as stored.
    pub code: String,
    /// Discount amount, already clamped to the subtotal.
    pub discount: Money,
}

/// Failure to preview or redeem a coupon.
#[derive(Debug, Clone, Error)]
pub enum CouponError {
    /// Business-rule rejection with a human-readable reason.
    #[error("{0}")]
    Rejected(CouponRejection),
    /// Store failure.
    #[error(transparent)]
    Store(#[from] CouponStoreError),
}

/// Report what a code would yield without mutating usage count.
///
/// # Errors
///
/// Returns `CouponError::Rejected` for business rejections and
/// `CouponError::Store` on store failures.
pub async fn preview<R>(
    coupons: &R,
    code: &str,
    subtotal: Money,
    now: Timestamp,
) -> Result<DiscountOutcome, CouponError>
where
    R: CouponRepository + ?Sized,
{
    let coupon = load(coupons, code).await?;
    let discount = coupon.evaluate(subtotal, now).map_err(CouponError::Rejected)?;
    Ok(DiscountOutcome {
        code: coupon.code,
        discount,
    })
}

/// Validate and atomically redeem a code against a subtotal.
///
/// The usage increment re-checks the limit at the store with a conditional
/// update, so a race between two checkouts resolves to exactly one success.
///
/// # Errors
///
/// Returns `CouponError::Rejected` for business rejections (including losing
/// the usage-limit race) and `CouponError::Store` on store failures.
pub async fn redeem<R>(
    coupons: &R,
    code: &str,
    subtotal: Money,
    now: Timestamp,
) -> Result<DiscountOutcome, CouponError>
where
    R: CouponRepository + ?Sized,
{
    let coupon = load(coupons, code).await?;
    let discount = coupon.evaluate(subtotal, now).map_err(CouponError::Rejected)?;

    if !coupons.increment_usage(&coupon.code).await? {
        return Err(CouponError::Rejected(CouponRejection::Exhausted));
    }

    Ok(DiscountOutcome {
        code: coupon.code,
        discount,
    })
}

async fn load<R>(coupons: &R, code: &str) -> Result<Coupon, CouponError>
where
    R: CouponRepository + ?Sized,
{
    coupons
        .find_by_code(code)
        .await?
        .ok_or(CouponError::Rejected(CouponRejection::UnknownCode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeCoupons {
        coupon: Mutex<Option<Coupon>>,
    }

    impl FakeCoupons {
        fn with(coupon: Coupon) -> Self {
            Self {
                coupon: Mutex::new(Some(coupon)),
            }
        }

        fn used_count(&self) -> u32 {
            self.coupon.lock().unwrap().as_ref().unwrap().used_count
        }
    }

    #[async_trait]
    impl CouponRepository for FakeCoupons {
        async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, CouponStoreError> {
            let guard = self.coupon.lock().unwrap();
            Ok(guard.as_ref().filter(|c| c.code == code).cloned())
        }

        async fn increment_usage(&self, code: &str) -> Result<bool, CouponStoreError> {
            let mut guard = self.coupon.lock().unwrap();
            let coupon = guard
                .as_mut()
                .filter(|c| c.code == code)
                .ok_or(CouponStoreError::QueryFailed {
                    message: "no such coupon".to_string(),
                })?;
            if let Some(limit) = coupon.usage_limit
                && coupon.used_count >= limit
            {
                return Ok(false);
            }
            coupon.used_count += 1;
            Ok(true)
        }
    }

    fn save50() -> Coupon {
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

    #[tokio::test]
    async fn preview_does_not_mutate_usage() {
        let repo = FakeCoupons::with(save50());

        let outcome = preview(&repo, "SAVE50", Money::bdt(1000), Timestamp::now())
            .await
            .unwrap();

        assert_eq!(outcome.discount, Money::bdt(50));
        assert_eq!(repo.used_count(), 0);
    }

    #[tokio::test]
    async fn redeem_increments_usage() {
        let repo = FakeCoupons::with(save50());

        let outcome = redeem(&repo, "SAVE50", Money::bdt(1000), Timestamp::now())
            .await
            .unwrap();

        assert_eq!(outcome.code, "SAVE50");
        assert_eq!(outcome.discount, Money::bdt(50));
        assert_eq!(repo.used_count(), 1);
    }

    #[tokio::test]
    async fn redeem_unknown_code() {
        let repo = FakeCoupons::with(save50());

        let err = redeem(&repo, "NOPE", Money::bdt(1000), Timestamp::now())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CouponError::Rejected(CouponRejection::UnknownCode)
        ));
        assert_eq!(repo.used_count(), 0);
    }

    #[tokio::test]
    async fn redeem_is_case_sensitive() {
        let repo = FakeCoupons::with(save50());

        let err = redeem(&repo, "save50", Money::bdt(1000), Timestamp::now())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CouponError::Rejected(CouponRejection::UnknownCode)
        ));
    }

    #[tokio::test]
    async fn redeem_reports_exhausted_when_guard_fails() {
        let mut coupon = save50();
        coupon.usage_limit = Some(1);
        let repo = FakeCoupons::with(coupon);

        redeem(&repo, "SAVE50", Money::bdt(1000), Timestamp::now())
            .await
            .unwrap();
        let err = redeem(&repo, "SAVE50", Money::bdt(1000), Timestamp::now())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CouponError::Rejected(CouponRejection::Exhausted)
        ));
        assert_eq!(repo.used_count(), 1);
    }
}
