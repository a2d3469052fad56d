//! Coupon Errors

use salvo::http::StatusError;
use tracing::error;

use flames_app::domain::coupons::CouponsServiceError;

pub(crate) fn into_status_error(error: CouponsServiceError) -> StatusError {
    match error {
        CouponsServiceError::AlreadyExists => StatusError::conflict().brief("Coupon already exists"),
        CouponsServiceError::InvalidReference
        | CouponsServiceError::MissingRequiredData
        | CouponsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid coupon payload")
        }
        CouponsServiceError::Sql(source) => {
            error!("coupon storage error: {source}");

            StatusError::internal_server_error()
        }
        CouponsServiceError::NotFound => StatusError::not_found().brief("Invalid coupon"),
    }
}
