//! Accounts
//!
//! Email/password and phone/OTP sign-in. A session token is the user's UUID.

pub mod data;
pub mod errors;
mod otp;
mod password;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::AccountsServiceError;
pub use service::*;
