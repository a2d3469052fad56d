//! Seed service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        banners::repository::PgBannersRepository,
        categories::repository::PgCategoriesRepository,
        products::repository::PgProductsRepository,
        seed::{
            data::{SeedSummary, banners, categories, products},
            errors::SeedServiceError,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgSeedService {
    db: Db,
    categories: PgCategoriesRepository,
    products: PgProductsRepository,
    banners: PgBannersRepository,
}

impl PgSeedService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            categories: PgCategoriesRepository::new(),
            products: PgProductsRepository::new(),
            banners: PgBannersRepository::new(),
        }
    }
}

#[async_trait]
impl SeedService for PgSeedService {
    #[tracing::instrument(name = "seed.service.seed", skip(self), err)]
    async fn seed(&self) -> Result<SeedSummary, SeedServiceError> {
        let mut tx = self.db.begin().await?;
        let mut summary = SeedSummary::default();

        if self.categories.count_categories(&mut tx).await? == 0 {
            for category in categories() {
                self.categories.create_category(&mut tx, &category).await?;
                summary.categories += 1;
            }
        }

        if self.products.count_products(&mut tx).await? == 0 {
            for product in products() {
                self.products.create_product(&mut tx, &product).await?;
                summary.products += 1;
            }
        }

        if self.banners.count_banners(&mut tx).await? == 0 {
            for banner in banners() {
                self.banners.create_banner(&mut tx, &banner).await?;
                summary.banners += 1;
            }
        }

        tx.commit().await?;

        info!(
            categories = summary.categories,
            products = summary.products,
            banners = summary.banners,
            "seeded catalog"
        );

        Ok(summary)
    }
}

#[automock]
#[async_trait]
pub trait SeedService: Send + Sync {
    /// Insert the demo catalog into every empty collection.
    async fn seed(&self) -> Result<SeedSummary, SeedServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            banners::BannersService,
            categories::CategoriesService,
            products::{
                ProductsService,
                data::{ProductFilter, ProductKey},
            },
        },
        test::{TestContext, helpers::create_product},
    };

    use super::*;

    #[tokio::test]
    async fn seed_populates_empty_store() -> TestResult {
        let ctx = TestContext::new().await;

        let summary = ctx.seed.seed().await?;

        assert_eq!(
            summary,
            SeedSummary {
                categories: 3,
                products: 12,
                banners: 2,
            }
        );

        let categories = ctx.categories.list_categories().await?;
        let names: Vec<&str> = categories.iter().map(|category| category.name.as_str()).collect();

        assert_eq!(names, vec!["Electronics", "Fashion", "Home"]);

        let featured = ctx
            .products
            .list_products(ProductFilter {
                featured: Some(true),
                ..ProductFilter::default()
            })
            .await?;

        assert_eq!(featured.len(), 8);

        let gadget = ctx
            .products
            .get_product(ProductKey::Slug("premium-gadget-3".to_string()))
            .await?;

        assert_eq!(gadget.title, "Premium Gadget 3");
        assert_eq!(gadget.price, 529_900);
        assert_eq!(gadget.sale_price, Some(473_900));
        assert_eq!(gadget.specs.get("Material").map(String::as_str), Some("Aluminum"));

        assert_eq!(ctx.banners.list_active_banners().await?.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn seed_twice_inserts_nothing() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.seed.seed().await?;

        let second = ctx.seed.seed().await?;

        assert!(second.is_empty(), "expected empty summary, got {second:?}");

        Ok(())
    }

    #[tokio::test]
    async fn seed_skips_collections_with_data() -> TestResult {
        let ctx = TestContext::new().await;

        create_product(&ctx, "existing", 1_000, None).await?;

        let summary = ctx.seed.seed().await?;

        assert_eq!(summary.products, 0);
        assert_eq!(summary.categories, 3);
        assert_eq!(summary.banners, 2);

        Ok(())
    }
}
