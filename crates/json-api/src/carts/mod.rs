//! Carts

mod errors;
pub(crate) mod handlers;
