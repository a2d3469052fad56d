//! Banners service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::banners::{
        data::NewBanner, errors::BannersServiceError, records::BannerRecord,
        repository::PgBannersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgBannersService {
    db: Db,
    repository: PgBannersRepository,
}

impl PgBannersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBannersRepository::new(),
        }
    }
}

#[async_trait]
impl BannersService for PgBannersService {
    async fn list_active_banners(&self) -> Result<Vec<BannerRecord>, BannersServiceError> {
        let mut tx = self.db.begin().await?;

        let banners = self.repository.list_active_banners(&mut tx).await?;

        tx.commit().await?;

        Ok(banners)
    }

    #[tracing::instrument(
        name = "banners.service.create_banner",
        skip(self, banner),
        fields(banner_uuid = %banner.uuid),
        err
    )]
    async fn create_banner(&self, banner: NewBanner) -> Result<BannerRecord, BannersServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_banner(&mut tx, &banner).await?;

        tx.commit().await?;

        info!(banner_uuid = %created.uuid, "created banner");

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait BannersService: Send + Sync {
    /// Retrieves active banners in creation order.
    async fn list_active_banners(&self) -> Result<Vec<BannerRecord>, BannersServiceError>;

    /// Creates a new banner.
    async fn create_banner(&self, banner: NewBanner) -> Result<BannerRecord, BannersServiceError>;
}
