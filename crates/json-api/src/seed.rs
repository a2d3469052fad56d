//! Seed Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::error;

use flames_app::domain::seed::{SeedServiceError, data::SeedSummary};

use crate::extensions::*;

/// Rows inserted per collection. Collections that already held data report zero.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SeedResponse {
    pub categories: usize,
    pub products: usize,
    pub banners: usize,
}

impl From<SeedSummary> for SeedResponse {
    fn from(summary: SeedSummary) -> Self {
        SeedResponse {
            categories: summary.categories,
            products: summary.products,
            banners: summary.banners,
        }
    }
}

fn into_status_error(error: SeedServiceError) -> StatusError {
    match error {
        SeedServiceError::AlreadyExists => {
            StatusError::conflict().brief("Seed data conflicts with existing rows")
        }
        SeedServiceError::InvalidData => StatusError::internal_server_error(),
        SeedServiceError::Sql(source) => {
            error!("seed storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}

/// Seed Handler
///
/// Inserts the demo catalog into each empty collection.
#[endpoint(
    tags("admin"),
    summary = "Seed Demo Data",
    security(("admin_key" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Seed summary"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SeedResponse>, StatusError> {
    let app = depot.app()?;

    let summary = app.seed.seed().await.map_err(into_status_error)?;

    Ok(Json(summary.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::TestServices;

    use super::*;

    #[tokio::test]
    async fn test_seed_returns_summary() -> TestResult {
        let mut services = TestServices::default();

        services.seed.expect_seed().once().return_once(|| {
            Ok(SeedSummary {
                categories: 3,
                products: 12,
                banners: 2,
            })
        });

        let mut res = TestClient::post("http://example.com/admin/seed")
            .send(&services.service(Router::with_path("admin/seed").post(handler)))
            .await;

        let body: SeedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.products, 12);
        assert_eq!(body.categories, 3);
        assert_eq!(body.banners, 2);

        Ok(())
    }
}
