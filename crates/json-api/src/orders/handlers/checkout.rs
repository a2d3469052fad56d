//! Checkout Handler

use jiff::Timestamp;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use flames::prelude::{LineItemRequest, MAX_LINE_QUANTITY};
use flames_app::domain::{
    orders::{data::NewOrder, records::OrderRecord},
    products::records::ProductUuid,
};

use crate::{
    extensions::*,
    observability::{CheckoutOutcome, record_checkout},
    orders::{errors::into_status_error, responses::AddressBody},
};

/// Requested line
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutItemBody {
    pub product_id: Uuid,

    /// Between 1 and 10000
    pub quantity: u32,
}

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    /// Absent for guest checkout
    #[serde(default)]
    pub user_id: Option<Uuid>,

    pub items: Vec<CheckoutItemBody>,
    pub address: AddressBody,

    /// Coupon code, any case
    #[serde(default)]
    pub coupon: Option<String>,
}

impl CheckoutRequest {
    fn into_new_order(self) -> Result<NewOrder, StatusError> {
        let items = self
            .items
            .into_iter()
            .map(|item| {
                LineItemRequest::try_new(ProductUuid::from(item.product_id), item.quantity)
                    .ok_or_else(|| {
                        StatusError::bad_request()
                            .brief(format!("quantity must be between 1 and {MAX_LINE_QUANTITY}"))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NewOrder {
            user: self.user_id.map(Into::into),
            items,
            address: self.address.into(),
            coupon: self.coupon.filter(|code| !code.trim().is_empty()),
        })
    }
}

/// Pending order awaiting payment
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    pub order_id: Uuid,

    /// Identifier to hand to the payment provider
    pub payment_order_id: String,

    /// Sum of line totals in paise
    pub subtotal: u64,

    /// Amount payable in paise
    pub amount: u64,

    pub currency: String,

    /// Applied coupon code, absent when no coupon applied
    pub coupon: Option<String>,
}

impl From<OrderRecord> for CheckoutResponse {
    fn from(order: OrderRecord) -> Self {
        CheckoutResponse {
            order_id: order.uuid.into(),
            payment_order_id: order.payment_order_id,
            subtotal: order.subtotal,
            amount: order.amount,
            currency: order.currency,
            coupon: order.coupon,
        }
    }
}

/// Checkout Handler
///
/// Prices the cart, applies the coupon when it qualifies and stores a pending order.
/// A coupon that is unknown, inactive or below its minimum is ignored.
#[endpoint(
    tags("checkout"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Product not found or invalid request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let app = depot.app()?;
    let order = json
        .into_inner()
        .into_new_order()
        .inspect_err(|_| record_checkout(CheckoutOutcome::Rejected))?;

    let order = match app.orders.create_order(order, Timestamp::now()).await {
        Ok(order) => {
            record_checkout(CheckoutOutcome::Created {
                coupon_applied: order.coupon.is_some(),
            });

            order
        }
        Err(error) => {
            let error = into_status_error(error);
            record_checkout(CheckoutOutcome::from_status(error.code));

            return Err(error);
        }
    };

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
