//! Admin key middleware.

use std::sync::Arc;

use salvo::prelude::*;

use crate::state::State;

/// Header carrying the admin key.
pub(crate) const ADMIN_KEY_HEADER: &str = "x-admin-key";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    if extract_admin_key(req) != Some(state.admin_key.as_str()) {
        res.render(StatusError::unauthorized().brief("Unauthorized"));

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

fn extract_admin_key(req: &Request) -> Option<&str> {
    let value = req.headers().get(ADMIN_KEY_HEADER)?.to_str().ok()?.trim();

    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{TEST_ADMIN_KEY, TestServices};

    use super::*;

    #[salvo::handler]
    async fn secret(res: &mut Response) {
        res.render("admin only");
    }

    fn make_service() -> Service {
        TestServices::default().service(Router::new().hoop(handler).push(Router::new().get(secret)))
    }

    #[tokio::test]
    async fn test_missing_admin_key_returns_401() {
        let res = TestClient::get("http://example.com/")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_wrong_admin_key_returns_401() {
        let res = TestClient::get("http://example.com/")
            .add_header(ADMIN_KEY_HEADER, "guess", true)
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_matching_admin_key_passes_through() -> TestResult {
        let mut res = TestClient::get("http://example.com/")
            .add_header(ADMIN_KEY_HEADER, TEST_ADMIN_KEY, true)
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "admin only");

        Ok(())
    }
}
