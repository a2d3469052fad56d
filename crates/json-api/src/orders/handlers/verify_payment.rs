//! Verify Payment Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use flames_app::domain::orders::data::PaymentConfirmation;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, responses::OrderResponse},
};

/// Payment confirmation from the storefront after the provider's checkout completes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VerifyPaymentRequest {
    pub order_id: Uuid,
    pub payment_id: String,

    /// Provider signature, recorded but not checked
    #[serde(default)]
    pub signature: Option<String>,
}

impl From<VerifyPaymentRequest> for PaymentConfirmation {
    fn from(request: VerifyPaymentRequest) -> Self {
        PaymentConfirmation {
            order: request.order_id.into(),
            payment_id: request.payment_id,
            signature: request.signature,
        }
    }
}

/// Verify Payment Handler
///
/// Marks the order paid.
#[endpoint(
    tags("checkout"),
    summary = "Verify Payment",
    responses(
        (status_code = StatusCode::OK, description = "Order paid"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<VerifyPaymentRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let app = depot.app()?;

    let order = app
        .orders
        .verify_payment(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
