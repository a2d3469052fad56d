//! Create Banner Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use flames_app::domain::banners::{data::NewBanner, records::BannerUuid};

use crate::{
    banners::{errors::into_status_error, handlers::index::BannerResponse},
    extensions::*,
};

const fn active_by_default() -> bool {
    true
}

/// Create Banner Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateBannerRequest {
    pub title: String,

    #[serde(default)]
    pub subtitle: Option<String>,

    pub image_url: String,

    #[serde(default)]
    pub link: Option<String>,

    /// Inactive banners are stored but not listed
    #[serde(default = "active_by_default")]
    pub active: bool,
}

impl From<CreateBannerRequest> for NewBanner {
    fn from(request: CreateBannerRequest) -> Self {
        NewBanner {
            uuid: BannerUuid::new(),
            title: request.title,
            subtitle: request.subtitle,
            image_url: request.image_url,
            link: request.link,
            active: request.active,
        }
    }
}

/// Create Banner Handler
#[endpoint(
    tags("admin"),
    summary = "Create Banner",
    security(("admin_key" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Banner created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateBannerRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BannerResponse>, StatusError> {
    let app = depot.app()?;

    let banner = app
        .banners
        .create_banner(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(banner.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use flames_app::domain::banners::records::BannerRecord;

    use crate::test_helpers::TestServices;

    use super::*;

    #[tokio::test]
    async fn test_create_banner_defaults_to_active() -> TestResult {
        let mut services = TestServices::default();

        services
            .banners
            .expect_create_banner()
            .once()
            .withf(|new| new.active && new.title == "New Arrivals")
            .return_once(|new| {
                Ok(BannerRecord {
                    uuid: new.uuid,
                    title: new.title,
                    subtitle: new.subtitle,
                    image_url: new.image_url,
                    link: new.link,
                    active: new.active,
                    created_at: Timestamp::UNIX_EPOCH,
                })
            });

        let mut res = TestClient::post("http://example.com/admin/banners")
            .json(&json!({
                "title": "New Arrivals",
                "image_url": "https://img.example.com/banner2.png",
            }))
            .send(&services.service(Router::with_path("admin/banners").post(handler)))
            .await;

        let body: BannerResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.title, "New Arrivals");

        Ok(())
    }
}
