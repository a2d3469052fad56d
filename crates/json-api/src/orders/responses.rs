//! Order Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use flames_app::domain::orders::records::{Address, OrderItemRecord, OrderRecord};

/// Shipping address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddressBody {
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

impl From<AddressBody> for Address {
    fn from(address: AddressBody) -> Self {
        Address {
            label: address.label,
            line1: address.line1,
            line2: address.line2,
            city: address.city,
            state: address.state,
            country: address.country,
            postal_code: address.postal_code,
            phone: address.phone,
            is_default: address.is_default,
        }
    }
}

impl From<Address> for AddressBody {
    fn from(address: Address) -> Self {
        AddressBody {
            label: address.label,
            line1: address.line1,
            line2: address.line2,
            city: address.city,
            state: address.state,
            country: address.country,
            postal_code: address.postal_code,
            phone: address.phone,
            is_default: address.is_default,
        }
    }
}

/// Line as priced at checkout
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    pub product_id: Uuid,
    pub title: String,

    /// Unit price in paise
    pub unit_price: u64,

    pub quantity: u32,
    pub image: Option<String>,
}

impl From<OrderItemRecord> for OrderItemResponse {
    fn from(item: OrderItemRecord) -> Self {
        OrderItemResponse {
            product_id: item.product.into(),
            title: item.title,
            unit_price: item.unit_price,
            quantity: item.quantity,
            image: item.image,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,
    pub user_id: Option<Uuid>,
    pub items: Vec<OrderItemResponse>,

    /// Sum of line totals in paise
    pub subtotal: u64,

    /// Amount payable in paise
    pub amount: u64,

    pub currency: String,
    pub address: AddressBody,
    pub status: String,
    pub payment_provider: String,
    pub payment_order_id: String,
    pub payment_id: Option<String>,

    /// Applied coupon code
    pub coupon: Option<String>,

    pub created_at: String,
    pub updated_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            uuid: order.uuid.into(),
            user_id: order.user.map(Into::into),
            items: order.items.into_iter().map(Into::into).collect(),
            subtotal: order.subtotal,
            amount: order.amount,
            currency: order.currency,
            address: order.address.into(),
            status: order.status.to_string(),
            payment_provider: order.payment_provider,
            payment_order_id: order.payment_order_id,
            payment_id: order.payment_id,
            coupon: order.coupon,
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}
