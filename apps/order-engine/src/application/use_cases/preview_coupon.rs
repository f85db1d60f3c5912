//! Preview Coupon Use Case

use std::sync::Arc;

use crate::application::dto::{CouponPreviewRequestDto, CouponPreviewResponseDto};
use crate::domain::pricing::repository::CouponRepository;
use crate::domain::pricing::service::{self as pricing, CouponError};
use crate::domain::shared::{Money, Timestamp};
use crate::error::{ApiError, ErrorCode};

const MAX_CODE_CHARS: usize = 50;

/// Use case for previewing a coupon against a cart subtotal.
///
/// Read-only: the storefront calls this on every cart change, so it must
/// never consume usage.
pub struct PreviewCouponUseCase<Cpn>
where
    Cpn: CouponRepository,
{
    coupons: Arc<Cpn>,
}

impl<Cpn> PreviewCouponUseCase<Cpn>
where
    Cpn: CouponRepository,
{
    /// Create a new PreviewCouponUseCase.
    pub fn new(coupons: Arc<Cpn>) -> Self {
        Self { coupons }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns `CouponNotFound` for unknown codes, `CouponRejected` for
    /// business rejections and `StoreError` on store failures.
    pub async fn execute(
        &self,
        request: CouponPreviewRequestDto,
    ) -> Result<CouponPreviewResponseDto, ApiError> {
        let code: String = request.code.trim().chars().take(MAX_CODE_CHARS).collect();
        if code.is_empty() {
            return Err(ApiError::invalid_request("Coupon code is required"));
        }
        let subtotal = Money::new(request.subtotal_bdt);
        if subtotal.is_negative() {
            return Err(ApiError::invalid_request("Subtotal must not be negative"));
        }

        let outcome = pricing::preview(self.coupons.as_ref(), &code, subtotal, Timestamp::now())
            .await
            .map_err(|e| match e {
                CouponError::Rejected(rejection) => {
                    use crate::domain::pricing::coupon::CouponRejection;
                    let code = if matches!(rejection, CouponRejection::UnknownCode) {
                        ErrorCode::CouponNotFound
                    } else {
                        ErrorCode::CouponRejected
                    };
                    ApiError::new(code, rejection.to_string())
                }
                CouponError::Store(store) => ApiError::new(ErrorCode::StoreError, store.to_string()),
            })?;

        Ok(CouponPreviewResponseDto {
            ok: true,
            message: format!("Coupon applied: {} off", outcome.discount),
            code: outcome.code,
            discount_bdt: outcome.discount.amount(),
        })
    }
}
