//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        accounts::{AccountsService, PgAccountsService},
        banners::{BannersService, PgBannersService},
        carts::{CartsService, PgCartsService},
        categories::{CategoriesService, PgCategoriesService},
        coupons::{CouponsService, PgCouponsService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        seed::{PgSeedService, SeedService},
        wishlists::{PgWishlistsService, WishlistsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub accounts: Arc<dyn AccountsService>,
    pub banners: Arc<dyn BannersService>,
    pub carts: Arc<dyn CartsService>,
    pub categories: Arc<dyn CategoriesService>,
    pub coupons: Arc<dyn CouponsService>,
    pub orders: Arc<dyn OrdersService>,
    pub products: Arc<dyn ProductsService>,
    pub seed: Arc<dyn SeedService>,
    pub wishlists: Arc<dyn WishlistsService>,
}

impl AppContext {
    /// Build application context from a database URL, applying pending migrations first
    /// when `run_migrations` is set.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(url: &str, run_migrations: bool) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrate)?;
        }

        Ok(Self::from_db(&Db::new(pool)))
    }

    /// Build application context over an existing pool.
    #[must_use]
    pub fn from_db(db: &Db) -> Self {
        Self {
            accounts: Arc::new(PgAccountsService::new(db.clone())),
            banners: Arc::new(PgBannersService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            categories: Arc::new(PgCategoriesService::new(db.clone())),
            coupons: Arc::new(PgCouponsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            seed: Arc::new(PgSeedService::new(db.clone())),
            wishlists: Arc::new(PgWishlistsService::new(db.clone())),
        }
    }
}
