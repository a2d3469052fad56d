//! Coupons
//!
//! A coupon takes either a percentage or a fixed amount off an order subtotal once the
//! subtotal reaches the coupon's minimum order value. Codes are matched case-insensitively
//! by comparing their upper-cased canonical form.

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, iso::Currency};

use crate::checkout::CheckoutError;

/// Discount rule carried by a coupon.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CouponKind<'a> {
    /// Take percentage points off the subtotal (e.g. "10% off", "7.5% off")
    Percent(Decimal),

    /// Take a fixed amount off the subtotal (e.g. "₹200 off")
    Flat(Money<'a, Currency>),
}

impl CouponKind<'_> {
    /// Storage name of the rule.
    #[must_use]
    pub const fn to_str(&self) -> &'static str {
        match self {
            Self::Percent(_) => "percent",
            Self::Flat(_) => "flat",
        }
    }
}

/// Coupon
#[derive(Debug, Clone, PartialEq)]
pub struct Coupon<'a> {
    /// Canonical (upper-case) coupon code
    pub code: String,

    /// Discount rule
    pub kind: CouponKind<'a>,

    /// Minimum subtotal, inclusive, before the coupon applies
    pub min_order: Money<'a, Currency>,

    /// Inactive coupons never apply
    pub active: bool,
}

impl<'a> Coupon<'a> {
    /// Whether the coupon applies to an order with the given subtotal.
    ///
    /// A threshold quoted in a different currency never matches.
    pub fn applies_to(&self, subtotal: &Money<'a, Currency>) -> bool {
        self.active
            && self.min_order.currency() == subtotal.currency()
            && subtotal.to_minor_units() >= self.min_order.to_minor_units()
    }

    /// Apply the discount to a subtotal, clamping the result at zero.
    ///
    /// Percentage discounts are rounded half-up to the nearest minor unit.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::PercentConversion`]: the discounted amount could not be represented.
    /// - [`CheckoutError::Money`]: a flat discount is quoted in a different currency.
    pub fn apply(
        &self,
        subtotal: Money<'a, Currency>,
    ) -> Result<Money<'a, Currency>, CheckoutError> {
        let discounted = match self.kind {
            CouponKind::Percent(points) if points >= Decimal::ONE_HUNDRED => {
                Money::from_minor(0, subtotal.currency())
            }
            CouponKind::Percent(points) => {
                let remaining = Percentage::from(Decimal::ONE - points / Decimal::ONE_HUNDRED);

                Money::from_minor(
                    percent_of_minor(&remaining, subtotal.to_minor_units())?,
                    subtotal.currency(),
                )
            }
            CouponKind::Flat(amount) => subtotal.sub(amount)?,
        };

        if discounted.to_minor_units() < 0 {
            return Ok(Money::from_minor(0, subtotal.currency()));
        }

        Ok(discounted)
    }
}

/// Canonical form of a coupon code, used for storage and lookup.
pub fn canonical_code(code: &str) -> String {
    code.to_uppercase()
}

/// Apply a percentage to a minor unit amount, rounding half-up to a whole minor unit.
fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, CheckoutError> {
    let minor = Decimal::from_i64(minor).ok_or(CheckoutError::PercentConversion)?;

    ((*percent) * Decimal::ONE)
        .checked_mul(minor)
        .ok_or(CheckoutError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(CheckoutError::PercentConversion)
}
