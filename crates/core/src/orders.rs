//! Orders

use std::num::NonZeroU32;

use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;

use crate::{checkout::CheckoutError, products::ProductSnapshot};

/// Priced line items, in the order they were requested.
pub type PricedLineItems<'a, R> = SmallVec<[PricedLineItem<'a, R>; 8]>;

/// A requested line item resolved against its product at checkout time.
///
/// The title, price and image are copies, so later catalog edits do not change the order.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLineItem<'a, R> {
    /// Product reference
    pub product: R,

    /// Product title at checkout
    pub title: String,

    /// Price charged per unit
    pub unit_price: Money<'a, Currency>,

    /// Quantity purchased
    pub quantity: NonZeroU32,

    /// Primary image URL at checkout
    pub image: Option<String>,
}

impl<'a, R> PricedLineItem<'a, R> {
    /// Snapshot a product for the requested quantity.
    pub fn from_snapshot(
        product: R,
        snapshot: ProductSnapshot<'a, R>,
        quantity: NonZeroU32,
    ) -> Self {
        Self {
            product,
            unit_price: snapshot.unit_price(),
            title: snapshot.title,
            quantity,
            image: snapshot.image,
        }
    }

    /// Unit price multiplied by quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::AmountOverflow`] if the line total does not fit in minor units.
    pub fn line_total(&self) -> Result<Money<'a, Currency>, CheckoutError> {
        self.unit_price
            .to_minor_units()
            .checked_mul(i64::from(self.quantity.get()))
            .map(|minor| Money::from_minor(minor, self.unit_price.currency()))
            .ok_or(CheckoutError::AmountOverflow)
    }
}

/// Final amount of an order after any coupon.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTotal<'a> {
    subtotal: Money<'a, Currency>,
    amount: Money<'a, Currency>,
    coupon: Option<String>,
}

impl<'a> OrderTotal<'a> {
    /// Create a new order total.
    pub fn new(
        subtotal: Money<'a, Currency>,
        amount: Money<'a, Currency>,
        coupon: Option<String>,
    ) -> Self {
        Self {
            subtotal,
            amount,
            coupon,
        }
    }

    /// Sum of line totals before any coupon
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Amount payable
    pub fn amount(&self) -> Money<'a, Currency> {
        self.amount
    }

    /// Currency of the order
    pub fn currency(&self) -> &'a Currency {
        self.amount.currency()
    }

    /// Canonical code of the applied coupon, if one applied
    pub fn coupon(&self) -> Option<&str> {
        self.coupon.as_deref()
    }

    /// Amount taken off the subtotal by the coupon.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.subtotal.sub(self.amount)
    }
}
