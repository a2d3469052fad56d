//! Coupons service.

use async_trait::async_trait;
use flames::prelude::canonical_code;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::coupons::{
        data::NewCoupon, errors::CouponsServiceError, records::CouponRecord,
        repository::PgCouponsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCouponsService {
    db: Db,
    repository: PgCouponsRepository,
}

impl PgCouponsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCouponsRepository::new(),
        }
    }
}

#[async_trait]
impl CouponsService for PgCouponsService {
    #[tracing::instrument(
        name = "coupons.service.create_coupon",
        skip(self, coupon),
        fields(coupon_uuid = %coupon.uuid, kind = %coupon.kind),
        err
    )]
    async fn create_coupon(&self, coupon: NewCoupon) -> Result<CouponRecord, CouponsServiceError> {
        let code = canonical_code(coupon.code.trim());

        if code.is_empty() {
            return Err(CouponsServiceError::MissingRequiredData);
        }

        if !coupon.kind.accepts(coupon.value) {
            return Err(CouponsServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_coupon(&mut tx, &coupon, &code).await?;

        tx.commit().await?;

        info!(coupon_uuid = %created.uuid, code = %created.code, "created coupon");

        Ok(created)
    }

    async fn get_coupon(
        &self,
        code: &str,
        point_in_time: Timestamp,
    ) -> Result<CouponRecord, CouponsServiceError> {
        let mut tx = self.db.begin().await?;

        let coupon = self
            .repository
            .find_coupon(&mut tx, &canonical_code(code))
            .await?;

        tx.commit().await?;

        coupon
            .filter(|coupon| coupon.is_redeemable(point_in_time))
            .ok_or(CouponsServiceError::NotFound)
    }

    async fn list_coupons(&self) -> Result<Vec<CouponRecord>, CouponsServiceError> {
        let mut tx = self.db.begin().await?;

        let coupons = self.repository.list_coupons(&mut tx).await?;

        tx.commit().await?;

        Ok(coupons)
    }
}

#[automock]
#[async_trait]
pub trait CouponsService: Send + Sync {
    /// Creates a coupon, storing its code upper-cased.
    async fn create_coupon(&self, coupon: NewCoupon) -> Result<CouponRecord, CouponsServiceError>;

    /// Retrieve a coupon by code, ignoring case. Inactive and expired coupons are not found.
    async fn get_coupon(
        &self,
        code: &str,
        point_in_time: Timestamp,
    ) -> Result<CouponRecord, CouponsServiceError>;

    /// Retrieves every coupon, ordered by code.
    async fn list_coupons(&self) -> Result<Vec<CouponRecord>, CouponsServiceError>;
}
