//! Coupon Data

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::coupons::records::{CouponType, CouponUuid};

/// New Coupon Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCoupon {
    pub uuid: CouponUuid,

    /// Code as entered; stored in canonical upper-case form.
    pub code: String,

    pub kind: CouponType,
    pub value: Decimal,
    pub min_order: u64,
    pub active: bool,
    pub expires_at: Option<Timestamp>,
}
