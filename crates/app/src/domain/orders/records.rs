//! Order Records

use std::{fmt, str::FromStr};

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::{accounts::records::UserUuid, products::records::ProductUuid},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Payment provider recorded against new orders.
pub const PAYMENT_PROVIDER: &str = "razorpay";

/// Order lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(UnknownOrderStatus(other.to_string())),
        }
    }
}

/// Delivery address, stored with the order as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// "Home", "Work", etc.
    pub label: String,

    pub line1: String,

    #[serde(default)]
    pub line2: Option<String>,

    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub is_default: bool,
}

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,

    /// Absent for guest checkouts.
    pub user: Option<UserUuid>,

    pub items: Vec<OrderItemRecord>,

    /// Sum of line totals before any coupon, in minor units.
    pub subtotal: u64,

    /// Amount payable in minor units.
    pub amount: u64,

    pub currency: String,
    pub address: Address,
    pub status: OrderStatus,
    pub payment_provider: String,
    pub payment_order_id: String,
    pub payment_id: Option<String>,

    /// Canonical code of the coupon that applied.
    pub coupon: Option<String>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Line of an order, as priced at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItemRecord {
    pub product: ProductUuid,
    pub title: String,

    /// Price charged per unit, in minor units.
    pub unit_price: u64,

    pub quantity: u32,
    pub image: Option<String>,
}

/// Delivery status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTracking {
    pub status: OrderStatus,
    pub estimated_delivery: Date,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn order_status_round_trips_through_storage_name() -> TestResult {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>()?, status);
        }

        assert!("refunded".parse::<OrderStatus>().is_err());

        Ok(())
    }

    #[test]
    fn address_optional_fields_default() -> TestResult {
        let address: Address = serde_json::from_str(
            r#"{"label":"Home","line1":"12 MG Road","city":"Pune","state":"MH","country":"IN","postal_code":"411001"}"#,
        )?;

        assert_eq!(address.line2, None);
        assert_eq!(address.phone, None);
        assert!(!address.is_default);

        Ok(())
    }
}
