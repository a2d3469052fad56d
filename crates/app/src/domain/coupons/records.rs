//! Coupon Records

use std::{fmt, num::TryFromIntError, str::FromStr};

use flames::prelude::{Coupon, CouponKind};
use jiff::Timestamp;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Coupon UUID
pub type CouponUuid = TypedUuid<CouponRecord>;

/// How a coupon's value is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponType {
    /// `value` is percentage points and may be fractional.
    Percent,

    /// `value` is a whole amount in minor units.
    Flat,
}

impl CouponType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Percent => "percent",
            Self::Flat => "flat",
        }
    }

    /// Whether `value` is a valid value for this kind of coupon.
    #[must_use]
    pub fn accepts(self, value: Decimal) -> bool {
        value >= Decimal::ZERO && (self == Self::Percent || value.fract().is_zero())
    }
}

impl fmt::Display for CouponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown coupon type: {0}")]
pub struct UnknownCouponType(pub String);

impl FromStr for CouponType {
    type Err = UnknownCouponType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "percent" => Ok(Self::Percent),
            "flat" => Ok(Self::Flat),
            other => Err(UnknownCouponType(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CouponConversionError {
    #[error("coupon amount out of range")]
    OutOfRange(#[from] TryFromIntError),

    #[error("flat coupon value is not a whole amount: {0}")]
    FractionalAmount(Decimal),
}

/// Coupon Record
#[derive(Debug, Clone, PartialEq)]
pub struct CouponRecord {
    pub uuid: CouponUuid,

    /// Canonical upper-case code.
    pub code: String,

    pub kind: CouponType,
    pub value: Decimal,

    /// Minimum order subtotal in minor units.
    pub min_order: u64,

    pub active: bool,
    pub expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl CouponRecord {
    /// Whether the coupon is active and unexpired at `point_in_time`.
    #[must_use]
    pub fn is_redeemable(&self, point_in_time: Timestamp) -> bool {
        self.active
            && self
                .expires_at
                .is_none_or(|expires_at| expires_at > point_in_time)
    }

    /// Checkout view of the coupon. Expired coupons come back inactive.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value does not fit the checkout representation.
    pub fn to_coupon<'a>(
        &self,
        currency: &'a Currency,
        point_in_time: Timestamp,
    ) -> Result<Coupon<'a>, CouponConversionError> {
        let kind = match self.kind {
            CouponType::Percent => CouponKind::Percent(self.value),
            CouponType::Flat => {
                let minor = self
                    .value
                    .fract()
                    .is_zero()
                    .then(|| self.value.to_i64())
                    .flatten()
                    .ok_or(CouponConversionError::FractionalAmount(self.value))?;

                CouponKind::Flat(Money::from_minor(minor, currency))
            }
        };

        Ok(Coupon {
            code: self.code.clone(),
            kind,
            min_order: Money::from_minor(i64::try_from(self.min_order)?, currency),
            active: self.is_redeemable(point_in_time),
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::ToSpan;
    use rusty_money::iso::INR;
    use testresult::TestResult;

    use super::*;

    fn record(kind: CouponType, value: Decimal) -> CouponRecord {
        CouponRecord {
            uuid: CouponUuid::new(),
            code: "SAVE10".to_string(),
            kind,
            value,
            min_order: 100_000,
            active: true,
            expires_at: None,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn coupon_type_round_trips_through_storage_name() -> TestResult {
        assert_eq!("percent".parse::<CouponType>()?, CouponType::Percent);
        assert_eq!(CouponType::Flat.to_string(), "flat");
        assert!("bogo".parse::<CouponType>().is_err());

        Ok(())
    }

    #[test]
    fn to_coupon_converts_percent_and_threshold() -> TestResult {
        let coupon = record(CouponType::Percent, Decimal::TEN).to_coupon(INR, Timestamp::now())?;

        assert_eq!(coupon.kind, CouponKind::Percent(Decimal::TEN));
        assert_eq!(coupon.min_order, Money::from_minor(100_000, INR));
        assert!(coupon.active);

        Ok(())
    }

    #[test]
    fn expired_coupon_converts_inactive() -> TestResult {
        let now = Timestamp::now();
        let mut expired = record(CouponType::Flat, Decimal::from(20_000));
        expired.expires_at = Some(now.checked_sub(1.hour())?);

        let coupon = expired.to_coupon(INR, now)?;

        assert_eq!(coupon.kind, CouponKind::Flat(Money::from_minor(20_000, INR)));
        assert!(!coupon.active);

        Ok(())
    }

    #[test]
    fn fractional_percent_converts_unchanged() -> TestResult {
        let coupon =
            record(CouponType::Percent, Decimal::new(750, 2)).to_coupon(INR, Timestamp::now())?;

        assert_eq!(coupon.kind, CouponKind::Percent(Decimal::new(75, 1)));

        Ok(())
    }

    #[test]
    fn fractional_flat_amount_fails_conversion() {
        let result = record(CouponType::Flat, Decimal::new(105, 1)).to_coupon(INR, Timestamp::now());

        assert_eq!(
            result,
            Err(CouponConversionError::FractionalAmount(Decimal::new(105, 1)))
        );
    }

    #[test]
    fn coupon_type_accepts_values() {
        assert!(CouponType::Percent.accepts(Decimal::new(75, 1)));
        assert!(CouponType::Flat.accepts(Decimal::from(20_000)));
        assert!(!CouponType::Flat.accepts(Decimal::new(205, 1)));
        assert!(!CouponType::Percent.accepts(Decimal::NEGATIVE_ONE));
    }
}
