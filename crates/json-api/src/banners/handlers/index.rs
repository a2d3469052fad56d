//! Banner Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use flames_app::domain::banners::records::BannerRecord;

use crate::{banners::errors::into_status_error, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BannerResponse {
    pub uuid: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,

    /// Storefront path the banner links to
    pub link: Option<String>,
}

impl From<BannerRecord> for BannerResponse {
    fn from(banner: BannerRecord) -> Self {
        BannerResponse {
            uuid: banner.uuid.into(),
            title: banner.title,
            subtitle: banner.subtitle,
            image_url: banner.image_url,
            link: banner.link,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BannersResponse {
    pub banners: Vec<BannerResponse>,
}

/// Banner Index Handler
///
/// Returns active banners.
#[endpoint(
    tags("catalog"),
    summary = "List Banners",
    responses(
        (status_code = StatusCode::OK, description = "Active banners"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<BannersResponse>, StatusError> {
    let app = depot.app()?;

    let banners = app
        .banners
        .list_active_banners()
        .await
        .map_err(into_status_error)?;

    Ok(Json(BannersResponse {
        banners: banners.into_iter().map(Into::into).collect(),
    }))
}
