//! Get Coupon Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use flames_app::domain::coupons::records::{CouponRecord, CouponType};

use crate::{coupons::errors::into_status_error, extensions::*};

/// Coupon discount rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CouponTypeBody {
    /// `value` is percentage points
    Percent,

    /// `value` is an amount in paise
    Flat,
}

impl From<CouponType> for CouponTypeBody {
    fn from(kind: CouponType) -> Self {
        match kind {
            CouponType::Percent => Self::Percent,
            CouponType::Flat => Self::Flat,
        }
    }
}

impl From<CouponTypeBody> for CouponType {
    fn from(kind: CouponTypeBody) -> Self {
        match kind {
            CouponTypeBody::Percent => Self::Percent,
            CouponTypeBody::Flat => Self::Flat,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CouponResponse {
    /// Canonical (upper-case) code
    pub code: String,

    #[serde(rename = "type")]
    pub kind: CouponTypeBody,

    /// Percentage points or paise, depending on `type`
    pub value: f64,

    /// Minimum subtotal in paise
    pub min_order: u64,

    pub active: bool,
    pub expires_at: Option<String>,
}

impl From<CouponRecord> for CouponResponse {
    fn from(coupon: CouponRecord) -> Self {
        CouponResponse {
            code: coupon.code,
            kind: coupon.kind.into(),
            value: coupon.value.to_f64().unwrap_or_default(),
            min_order: coupon.min_order,
            active: coupon.active,
            expires_at: coupon.expires_at.map(|expires_at| expires_at.to_string()),
        }
    }
}

/// Get Coupon Handler
///
/// Looks up a redeemable coupon by code, ignoring case.
#[endpoint(
    tags("checkout"),
    summary = "Get Coupon",
    responses(
        (status_code = StatusCode::OK, description = "Coupon found"),
        (status_code = StatusCode::NOT_FOUND, description = "Invalid coupon"),
    ),
)]
pub(crate) async fn handler(
    code: PathParam<String>,
    at: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<CouponResponse>, StatusError> {
    let app = depot.app()?;
    let point_in_time = at.into_point_in_time()?;

    let coupon = app
        .coupons
        .get_coupon(&code.into_inner(), point_in_time)
        .await
        .map_err(into_status_error)?;

    Ok(Json(coupon.into()))
}
