//! Banners Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::banners::{
    data::NewBanner,
    records::{BannerRecord, BannerUuid},
};

const LIST_ACTIVE_BANNERS_SQL: &str = include_str!("sql/list_active_banners.sql");
const CREATE_BANNER_SQL: &str = include_str!("sql/create_banner.sql");
const COUNT_BANNERS_SQL: &str = include_str!("sql/count_banners.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBannersRepository;

impl PgBannersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_active_banners(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<BannerRecord>, sqlx::Error> {
        query_as::<Postgres, BannerRecord>(LIST_ACTIVE_BANNERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_banner(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        banner: &NewBanner,
    ) -> Result<BannerRecord, sqlx::Error> {
        query_as::<Postgres, BannerRecord>(CREATE_BANNER_SQL)
            .bind(banner.uuid.into_uuid())
            .bind(&banner.title)
            .bind(banner.subtitle.as_deref())
            .bind(&banner.image_url)
            .bind(banner.link.as_deref())
            .bind(banner.active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_banners(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(COUNT_BANNERS_SQL).fetch_one(&mut **tx).await
    }
}

impl<'r> FromRow<'r, PgRow> for BannerRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: BannerUuid::from_uuid(row.try_get("uuid")?),
            title: row.try_get("title")?,
            subtitle: row.try_get("subtitle")?,
            image_url: row.try_get("image_url")?,
            link: row.try_get("link")?,
            active: row.try_get("active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
