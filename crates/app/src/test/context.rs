//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{
        accounts::PgAccountsService, banners::PgBannersService, carts::PgCartsService,
        categories::PgCategoriesService, coupons::PgCouponsService, orders::PgOrdersService,
        products::PgProductsService, seed::PgSeedService, wishlists::PgWishlistsService,
    },
};

use super::db::TestDb;

/// Every service, backed by one freshly migrated database.
pub struct TestContext {
    /// Keeps the database alive; dropping the context drops it.
    _db: TestDb,
    pub accounts: PgAccountsService,
    pub banners: PgBannersService,
    pub carts: PgCartsService,
    pub categories: PgCategoriesService,
    pub coupons: PgCouponsService,
    pub orders: PgOrdersService,
    pub products: PgProductsService,
    pub seed: PgSeedService,
    pub wishlists: PgWishlistsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            accounts: PgAccountsService::new(db.clone()),
            banners: PgBannersService::new(db.clone()),
            carts: PgCartsService::new(db.clone()),
            categories: PgCategoriesService::new(db.clone()),
            coupons: PgCouponsService::new(db.clone()),
            orders: PgOrdersService::new(db.clone()),
            products: PgProductsService::new(db.clone()),
            seed: PgSeedService::new(db.clone()),
            wishlists: PgWishlistsService::new(db),
            _db: test_db,
        }
    }
}
