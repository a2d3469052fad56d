//! Cart Records

use jiff::Timestamp;

use crate::domain::{accounts::records::UserUuid, products::records::ProductUuid};

/// Cart Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartRecord {
    pub user: UserUuid,
    pub items: Vec<CartItemRecord>,
}

/// Cart Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemRecord {
    pub product: ProductUuid,
    pub quantity: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
