//! Create Coupon Handler

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use flames_app::domain::coupons::{data::NewCoupon, records::CouponUuid};

use crate::{
    coupons::{
        errors::into_status_error,
        handlers::get::{CouponResponse, CouponTypeBody},
    },
    extensions::*,
};

const fn active_by_default() -> bool {
    true
}

/// Create Coupon Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCouponRequest {
    /// Stored upper-cased
    pub code: String,

    #[serde(rename = "type")]
    pub kind: CouponTypeBody,

    /// Percentage points (fractions allowed) or whole paise, depending on `type`
    pub value: f64,

    /// Minimum subtotal in paise
    #[serde(default)]
    pub min_order: u64,

    #[serde(default = "active_by_default")]
    pub active: bool,

    /// RFC 3339 timestamp after which the coupon no longer applies
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// Create Coupon Handler
#[endpoint(
    tags("admin"),
    summary = "Create Coupon",
    security(("admin_key" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Coupon created"),
        (status_code = StatusCode::CONFLICT, description = "Coupon already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCouponRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CouponResponse>, StatusError> {
    let app = depot.app()?;
    let request = json.into_inner();

    let expires_at = request
        .expires_at
        .map(|value| value.parse::<Timestamp>())
        .transpose()
        .or_400("could not parse \"expires_at\"")?;

    let value = Decimal::try_from(request.value)
        .or_400("could not parse \"value\"")?
        .normalize();

    let coupon = app
        .coupons
        .create_coupon(NewCoupon {
            uuid: CouponUuid::new(),
            code: request.code,
            kind: request.kind.into(),
            value,
            min_order: request.min_order,
            active: request.active,
            expires_at,
        })
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(coupon.into()))
}
