//! Get Wishlist Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use flames_app::domain::wishlists::records::WishlistRecord;

use crate::{extensions::*, wishlists::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WishlistResponse {
    pub user_id: Uuid,

    /// Wishlisted products, oldest first
    pub products: Vec<Uuid>,
}

impl From<WishlistRecord> for WishlistResponse {
    fn from(wishlist: WishlistRecord) -> Self {
        WishlistResponse {
            user_id: wishlist.user.into(),
            products: wishlist.products.into_iter().map(Into::into).collect(),
        }
    }
}

/// Get Wishlist Handler
#[endpoint(
    tags("wishlist"),
    summary = "Get Wishlist",
    responses(
        (status_code = StatusCode::OK, description = "Wishlist"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    user_id: QueryParam<Uuid, true>,
    depot: &mut Depot,
) -> Result<Json<WishlistResponse>, StatusError> {
    let app = depot.app()?;

    let wishlist = app
        .wishlists
        .get_wishlist(user_id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(wishlist.into()))
}
