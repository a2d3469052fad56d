//! Toggle Wishlist Item Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, wishlists::errors::into_status_error};

/// Toggle Wishlist Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ToggleWishlistRequest {
    pub product_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ToggleWishlistResponse {
    /// Whether the product is in the wishlist after the toggle
    pub wishlisted: bool,
}

/// Toggle Wishlist Item Handler
///
/// Adds the product when absent and removes it when present.
#[endpoint(
    tags("wishlist"),
    summary = "Toggle Wishlist Item",
    responses(
        (status_code = StatusCode::OK, description = "Wishlist updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    user_id: QueryParam<Uuid, true>,
    json: JsonBody<ToggleWishlistRequest>,
    depot: &mut Depot,
) -> Result<Json<ToggleWishlistResponse>, StatusError> {
    let app = depot.app()?;

    let wishlisted = app
        .wishlists
        .toggle_item(
            user_id.into_inner().into(),
            json.into_inner().product_id.into(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(ToggleWishlistResponse { wishlisted }))
}
