//! Categories

mod errors;
pub(crate) mod handlers;
