//! Checkout

use std::fmt::Display;

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{
    coupons::canonical_code,
    items::LineItemRequest,
    lookups::{CouponLookup, ProductLookup},
    orders::{OrderTotal, PricedLineItem, PricedLineItems},
};

/// Errors that abort a checkout computation.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// A requested product could not be resolved.
    #[error("product {0} not found")]
    ProductNotFound(String),

    /// A line total does not fit in minor units.
    #[error("line total overflowed")]
    AmountOverflow,

    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Price the requested items and apply at most one coupon.
///
/// Every item must resolve through `products`; the first one that does not aborts the whole
/// computation. A coupon that is unknown, inactive or below its minimum order value is ignored
/// without error. The returned items are in request order.
///
/// # Errors
///
/// - [`CheckoutError::ProductNotFound`]: a requested product does not exist.
/// - [`CheckoutError::AmountOverflow`]: a line total does not fit in minor units.
/// - [`CheckoutError::PercentConversion`]: a percentage discount could not be represented.
/// - [`CheckoutError::Money`]: a price or discount is quoted in a different currency.
pub fn compute_order<'a, R, P, C>(
    items: &[LineItemRequest<R>],
    coupon_code: Option<&str>,
    products: &P,
    coupons: &C,
    currency: &'a Currency,
) -> Result<(OrderTotal<'a>, PricedLineItems<'a, R>), CheckoutError>
where
    R: Clone + Display,
    P: ProductLookup<'a, R> + ?Sized,
    C: CouponLookup<'a> + ?Sized,
{
    let mut subtotal = Money::from_minor(0, currency);
    let mut priced = PricedLineItems::with_capacity(items.len());

    for item in items {
        let reference = item.product();

        let snapshot = products
            .product(reference)
            .ok_or_else(|| CheckoutError::ProductNotFound(reference.to_string()))?;

        let line = PricedLineItem::from_snapshot(reference.clone(), snapshot, item.quantity());

        subtotal = subtotal.add(line.line_total()?)?;

        priced.push(line);
    }

    let coupon = coupon_code
        .map(canonical_code)
        .and_then(|code| coupons.coupon(&code))
        .filter(|coupon| coupon.applies_to(&subtotal));

    let total = match coupon {
        Some(coupon) => OrderTotal::new(
            subtotal,
            coupon.apply(subtotal)?,
            Some(canonical_code(&coupon.code)),
        ),
        None => OrderTotal::new(subtotal, subtotal, None),
    };

    Ok((total, priced))
}
