//! Storefront domain services and persistence for Flames.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

mod columns;
mod uuids;

pub use uuids::TypedUuid;
