//! Banner Data

use crate::domain::banners::records::BannerUuid;

/// New Banner Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBanner {
    pub uuid: BannerUuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link: Option<String>,
    pub active: bool,
}
