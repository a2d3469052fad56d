//! Seed
//!
//! Demo catalog loaded into an empty store.

pub mod data;
pub mod errors;
pub mod service;

pub use errors::SeedServiceError;
pub use service::*;
