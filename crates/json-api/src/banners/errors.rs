//! Banner Errors

use salvo::http::StatusError;
use tracing::error;

use flames_app::domain::banners::BannersServiceError;

pub(crate) fn into_status_error(error: BannersServiceError) -> StatusError {
    match error {
        BannersServiceError::AlreadyExists => StatusError::conflict().brief("Banner already exists"),
        BannersServiceError::InvalidReference
        | BannersServiceError::MissingRequiredData
        | BannersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid banner payload")
        }
        BannersServiceError::Sql(source) => {
            error!("banner storage error: {source}");

            StatusError::internal_server_error()
        }
        BannersServiceError::NotFound => StatusError::not_found().brief("Banner not found"),
    }
}
