//! Accounts
//!
//! Email/password and phone passcode sign-in. Every successful sign-in returns a
//! [`SessionResponse`](responses::SessionResponse).

mod errors;
pub(crate) mod handlers;
mod responses;
