//! Lookups
//!
//! Capabilities the checkout calculator uses to read catalog and coupon data. Any
//! `Fn(&R) -> Option<ProductSnapshot>` closure is a [`ProductLookup`] and any
//! `Fn(&str) -> Option<Coupon>` closure is a [`CouponLookup`].

use crate::{coupons::Coupon, products::ProductSnapshot};

/// Resolves a product reference to its current catalog data.
pub trait ProductLookup<'a, R> {
    /// Returns the product, or `None` when no product has this reference.
    fn product(&self, reference: &R) -> Option<ProductSnapshot<'a, R>>;
}

impl<'a, R, F> ProductLookup<'a, R> for F
where
    F: Fn(&R) -> Option<ProductSnapshot<'a, R>>,
{
    fn product(&self, reference: &R) -> Option<ProductSnapshot<'a, R>> {
        self(reference)
    }
}

/// Resolves a canonical coupon code to a coupon.
pub trait CouponLookup<'a> {
    /// Returns the coupon, or `None` when no coupon has this code.
    fn coupon(&self, code: &str) -> Option<Coupon<'a>>;
}

impl<'a, F> CouponLookup<'a> for F
where
    F: Fn(&str) -> Option<Coupon<'a>>,
{
    fn coupon(&self, code: &str) -> Option<Coupon<'a>> {
        self(code)
    }
}
