//! Flames prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    STORE_CURRENCY,
    checkout::{CheckoutError, compute_order},
    coupons::{Coupon, CouponKind, canonical_code},
    items::{LineItemRequest, MAX_LINE_QUANTITY},
    lookups::{CouponLookup, ProductLookup},
    orders::{OrderTotal, PricedLineItem, PricedLineItems},
    products::ProductSnapshot,
};
