//! Coupons

mod errors;
pub(crate) mod handlers;
