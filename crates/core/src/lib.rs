//! Flames
//!
//! Checkout pricing for the Flames storefront. Requested line items are resolved against a
//! catalog snapshot, at most one coupon is applied, and the result is a non-negative order
//! total alongside the priced items that produced it.
//!
//! Nothing in this crate performs I/O: product and coupon data arrive through the
//! [`lookups`] traits, so the same rules run against a database, a cache or a test fixture.

pub mod checkout;
pub mod coupons;
pub mod items;
pub mod lookups;
pub mod orders;
pub mod prelude;
pub mod products;

/// Currency every storefront price is quoted in.
pub const STORE_CURRENCY: &rusty_money::iso::Currency = rusty_money::iso::INR;
