//! Wishlists

mod errors;
pub(crate) mod handlers;
