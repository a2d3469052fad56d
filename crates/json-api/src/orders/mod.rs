//! Orders
//!
//! Checkout, mock payment confirmation and order history.

mod errors;
pub(crate) mod handlers;
mod responses;
