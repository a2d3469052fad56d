//! Account Errors

use salvo::http::StatusError;
use tracing::error;

use flames_app::domain::accounts::AccountsServiceError;

pub(crate) fn into_status_error(error: AccountsServiceError) -> StatusError {
    match error {
        AccountsServiceError::AlreadyExists => {
            StatusError::bad_request().brief("Email already registered")
        }
        AccountsServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid credentials")
        }
        AccountsServiceError::InvalidOtp => {
            StatusError::bad_request().brief("Invalid or expired OTP")
        }
        AccountsServiceError::InvalidReference
        | AccountsServiceError::MissingRequiredData
        | AccountsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid account details")
        }
        AccountsServiceError::NotFound => StatusError::not_found().brief("User not found"),
        AccountsServiceError::Sql(source) => {
            error!("account storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
