//! Login Handler

use std::fmt;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use flames_app::domain::accounts::data::Credentials;

use crate::{
    accounts::{errors::into_status_error, responses::SessionResponse},
    extensions::*,
};

/// Login Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl From<LoginRequest> for Credentials {
    fn from(request: LoginRequest) -> Self {
        Credentials {
            email: request.email,
            password: Zeroizing::new(request.password),
        }
    }
}

/// Login Handler
#[endpoint(
    tags("auth"),
    summary = "Login",
    responses(
        (status_code = StatusCode::OK, description = "Signed in"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid credentials"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<SessionResponse>, StatusError> {
    let app = depot.app()?;

    let session = app
        .accounts
        .login(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(session.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use flames_app::domain::accounts::{
        AccountsServiceError,
        records::{Session, UserUuid},
    };

    use crate::test_helpers::TestServices;

    use super::*;

    fn make_service(services: TestServices) -> Service {
        services.service(Router::with_path("auth/login").post(handler))
    }

    #[tokio::test]
    async fn test_login_returns_session() -> TestResult {
        let user = UserUuid::new();

        let mut services = TestServices::default();

        services
            .accounts
            .expect_login()
            .once()
            .withf(|credentials| credentials.email == "asha@example.com")
            .return_once(move |_| {
                Ok(Session {
                    token: user.to_string(),
                    user,
                    name: "Asha".to_string(),
                })
            });

        let mut res = TestClient::post("http://example.com/auth/login")
            .json(&json!({ "email": "asha@example.com", "password": "secret" }))
            .send(&make_service(services))
            .await;

        let body: SessionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.user_id, user.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_login_wrong_password_returns_401() -> TestResult {
        let mut services = TestServices::default();

        services
            .accounts
            .expect_login()
            .once()
            .return_once(|_| Err(AccountsServiceError::InvalidCredentials));

        let mut res = TestClient::post("http://example.com/auth/login")
            .json(&json!({ "email": "asha@example.com", "password": "wrong" }))
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert!(
            res.take_string().await?.contains("Invalid credentials"),
            "expected invalid credentials message"
        );

        Ok(())
    }
}
