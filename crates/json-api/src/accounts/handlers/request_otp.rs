//! Request OTP Handler

use jiff::Timestamp;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{accounts::errors::into_status_error, extensions::*};

/// Request OTP Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RequestOtpRequest {
    pub phone: String,
}

/// Passcode issued in demo mode. No SMS is sent, so the code is returned directly.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OtpIssuedResponse {
    pub message: String,
    pub code: String,
    pub expires_at: String,
}

/// Request OTP Handler
#[endpoint(
    tags("auth"),
    summary = "Request OTP",
    responses(
        (status_code = StatusCode::OK, description = "Passcode issued"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RequestOtpRequest>,
    depot: &mut Depot,
) -> Result<Json<OtpIssuedResponse>, StatusError> {
    let app = depot.app()?;

    let otp = app
        .accounts
        .request_otp(&json.into_inner().phone, Timestamp::now())
        .await
        .map_err(into_status_error)?;

    Ok(Json(OtpIssuedResponse {
        message: "OTP sent (demo)".to_string(),
        code: otp.code,
        expires_at: otp.expires_at.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::ToSpan;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use flames_app::domain::accounts::{AccountsServiceError, records::OtpRecord};

    use crate::test_helpers::TestServices;

    use super::*;

    fn make_service(services: TestServices) -> Service {
        services.service(Router::with_path("auth/request-otp").post(handler))
    }

    #[tokio::test]
    async fn test_request_otp_returns_code() -> TestResult {
        let expires_at = Timestamp::now().checked_add(5.minutes())?;

        let mut services = TestServices::default();

        services
            .accounts
            .expect_request_otp()
            .once()
            .withf(|phone, _| phone.to_string() == "+919876543210")
            .return_once(move |phone, _| {
                Ok(OtpRecord {
                    phone: phone.to_string(),
                    code: "123456".to_string(),
                    expires_at,
                })
            });

        let mut res = TestClient::post("http://example.com/auth/request-otp")
            .json(&json!({ "phone": "+919876543210" }))
            .send(&make_service(services))
            .await;

        let body: OtpIssuedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.code, "123456");
        assert_eq!(body.expires_at, expires_at.to_string());

        Ok(())
    }

    #[tokio::test]
    async fn test_request_otp_blank_phone_returns_400() {
        let mut services = TestServices::default();

        services
            .accounts
            .expect_request_otp()
            .once()
            .return_once(|_, _| Err(AccountsServiceError::MissingRequiredData));

        let res = TestClient::post("http://example.com/auth/request-otp")
            .json(&json!({ "phone": " " }))
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
