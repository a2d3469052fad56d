//! Add Cart Item Handler

use std::num::NonZeroU32;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use flames::prelude::MAX_LINE_QUANTITY;
use flames_app::domain::carts::data::NewCartItem;

use crate::{
    carts::{errors::into_status_error, handlers::get::CartItemResponse},
    extensions::*,
};

const fn one() -> u32 {
    1
}

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    pub product_id: Uuid,

    /// Added to any quantity already in the cart; the merged quantity may not exceed 10000
    #[serde(default = "one")]
    pub quantity: u32,
}

/// Add Cart Item Handler
#[endpoint(
    tags("cart"),
    summary = "Add To Cart",
    responses(
        (status_code = StatusCode::OK, description = "Item quantity after adding"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    user_id: QueryParam<Uuid, true>,
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartItemResponse>, StatusError> {
    let app = depot.app()?;
    let request = json.into_inner();

    let quantity = NonZeroU32::new(request.quantity)
        .filter(|quantity| quantity.get() <= MAX_LINE_QUANTITY)
        .ok_or_else(|| {
            StatusError::bad_request()
                .brief(format!("quantity must be between 1 and {MAX_LINE_QUANTITY}"))
        })?;

    let item = app
        .carts
        .add_item(
            user_id.into_inner().into(),
            NewCartItem {
                product: request.product_id.into(),
                quantity,
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(item.into()))
}
