//! Order Handlers

pub(crate) mod checkout;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod track;
pub(crate) mod verify_payment;
