//! Order Data

use flames::prelude::LineItemRequest;

use crate::domain::{
    accounts::records::UserUuid,
    orders::records::{Address, OrderUuid},
    products::records::ProductUuid,
};

/// Checkout request.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    /// Absent for guest checkouts.
    pub user: Option<UserUuid>,

    pub items: Vec<LineItemRequest<ProductUuid>>,
    pub address: Address,

    /// Coupon code as entered; unknown or ineligible codes are ignored.
    pub coupon: Option<String>,
}

/// Payment confirmation reported by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfirmation {
    pub order: OrderUuid,
    pub payment_id: String,

    /// Provider signature. Accepted but not verified.
    pub signature: Option<String>,
}
