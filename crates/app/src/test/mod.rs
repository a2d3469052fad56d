//! Service test support.

pub mod context;
pub mod helpers;

pub use context::TestContext;
