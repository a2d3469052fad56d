//! Wishlist Errors

use salvo::http::StatusError;
use tracing::error;

use flames_app::domain::wishlists::WishlistsServiceError;

pub(crate) fn into_status_error(error: WishlistsServiceError) -> StatusError {
    match error {
        WishlistsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown user or product")
        }
        WishlistsServiceError::AlreadyExists
        | WishlistsServiceError::MissingRequiredData
        | WishlistsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid wishlist item")
        }
        WishlistsServiceError::NotFound => StatusError::not_found().brief("Wishlist not found"),
        WishlistsServiceError::Sql(source) => {
            error!("wishlist storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
