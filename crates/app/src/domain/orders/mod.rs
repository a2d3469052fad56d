//! Orders
//!
//! Checkout prices the requested items with the `flames` calculator against live catalog and
//! coupon data, then stores the order with a snapshot of every line.

mod checkout;
pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::OrdersServiceError;
pub use service::*;
