//! Verify OTP Handler

use jiff::Timestamp;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use flames_app::domain::accounts::data::OtpVerification;

use crate::{
    accounts::{errors::into_status_error, responses::SessionResponse},
    extensions::*,
};

/// Verify OTP Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VerifyOtpRequest {
    pub phone: String,
    pub code: String,

    /// Used when the phone has no account yet
    #[serde(default)]
    pub name: Option<String>,

    /// Used when the phone has no account yet
    #[serde(default)]
    pub email: Option<String>,
}

impl From<VerifyOtpRequest> for OtpVerification {
    fn from(request: VerifyOtpRequest) -> Self {
        OtpVerification {
            phone: request.phone,
            code: request.code,
            name: request.name,
            email: request.email,
        }
    }
}

/// Verify OTP Handler
///
/// Consumes a passcode and signs in, creating the account on first use of the phone.
#[endpoint(
    tags("auth"),
    summary = "Verify OTP",
    responses(
        (status_code = StatusCode::OK, description = "Signed in"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid or expired OTP"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<VerifyOtpRequest>,
    depot: &mut Depot,
) -> Result<Json<SessionResponse>, StatusError> {
    let app = depot.app()?;

    let session = app
        .accounts
        .verify_otp(json.into_inner().into(), Timestamp::now())
        .await
        .map_err(into_status_error)?;

    Ok(Json(session.into()))
}
