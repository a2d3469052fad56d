//! Banners

mod errors;
pub(crate) mod handlers;
