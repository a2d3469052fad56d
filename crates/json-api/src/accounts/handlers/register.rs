//! Register Handler

use std::fmt;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use flames_app::domain::accounts::data::NewRegistration;

use crate::{
    accounts::{errors::into_status_error, responses::SessionResponse},
    extensions::*,
};

/// Register Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,

    #[serde(default)]
    pub phone: Option<String>,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .finish_non_exhaustive()
    }
}

impl From<RegisterRequest> for NewRegistration {
    fn from(request: RegisterRequest) -> Self {
        NewRegistration {
            name: request.name,
            email: request.email,
            password: Zeroizing::new(request.password),
            phone: request.phone,
        }
    }
}

/// Register Handler
///
/// Creates an email/password account and signs it in.
#[endpoint(
    tags("auth"),
    summary = "Register",
    responses(
        (status_code = StatusCode::CREATED, description = "Account created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Email already registered or invalid details"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SessionResponse>, StatusError> {
    let app = depot.app()?;

    let session = app
        .accounts
        .register(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

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
        services.service(Router::with_path("auth/register").post(handler))
    }

    #[tokio::test]
    async fn test_register_returns_session() -> TestResult {
        let user = UserUuid::new();

        let mut services = TestServices::default();

        services
            .accounts
            .expect_register()
            .once()
            .withf(|registration| {
                registration.email == "asha@example.com" && registration.password.as_str() == "secret"
            })
            .return_once(move |registration| {
                Ok(Session {
                    token: user.to_string(),
                    user,
                    name: registration.name,
                })
            });

        let mut res = TestClient::post("http://example.com/auth/register")
            .json(&json!({
                "name": "Asha",
                "email": "asha@example.com",
                "password": "secret",
            }))
            .send(&make_service(services))
            .await;

        let body: SessionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.user_id, user.into_uuid());
        assert_eq!(body.token, user.to_string());
        assert_eq!(body.name, "Asha");

        Ok(())
    }

    #[tokio::test]
    async fn test_register_duplicate_email_returns_400() -> TestResult {
        let mut services = TestServices::default();

        services
            .accounts
            .expect_register()
            .once()
            .return_once(|_| Err(AccountsServiceError::AlreadyExists));

        let mut res = TestClient::post("http://example.com/auth/register")
            .json(&json!({
                "name": "Asha",
                "email": "asha@example.com",
                "password": "secret",
            }))
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            res.take_string().await?.contains("Email already registered"),
            "expected duplicate email message"
        );

        Ok(())
    }

    #[test]
    fn debug_output_omits_password() {
        let request = RegisterRequest {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            password: "hunter2".to_string(),
            phone: None,
        };

        assert!(
            !format!("{request:?}").contains("hunter2"),
            "password leaked into debug output"
        );
    }
}
