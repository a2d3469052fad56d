//! Banner Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Banner UUID
pub type BannerUuid = TypedUuid<BannerRecord>;

/// Banner Record
#[derive(Debug, Clone, PartialEq)]
pub struct BannerRecord {
    pub uuid: BannerUuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
}
