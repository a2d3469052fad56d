//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductDetails, ProductFilter, ProductKey},
        errors::ProductsServiceError,
        records::{ProductRecord, ProductUuid},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, key: ProductKey) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, &key).await?;

        tx.commit().await?;

        Ok(product)
    }

    #[tracing::instrument(
        name = "products.service.create_product",
        skip(self, product),
        fields(product_uuid = %product.uuid, slug = %product.details.slug),
        err
    )]
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, &product).await?;

        tx.commit().await?;

        info!(product_uuid = %created.uuid, "created product");

        Ok(created)
    }

    #[tracing::instrument(
        name = "products.service.update_product",
        skip(self, details),
        fields(product_uuid = %product),
        err
    )]
    async fn update_product(
        &self,
        product: ProductUuid,
        details: ProductDetails,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, &details)
            .await?;

        tx.commit().await?;

        info!(product_uuid = %updated.uuid, "updated product");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "products.service.delete_product",
        skip(self),
        fields(product_uuid = %product),
        err
    )]
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        info!(product_uuid = %product, "deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves live products matching the filter, oldest first.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single live product by UUID or slug.
    async fn get_product(&self, key: ProductKey) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces every editable field of a product.
    async fn update_product(
        &self,
        product: ProductUuid,
        details: ProductDetails,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Soft-deletes a product; it disappears from listings and lookups.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::product_details};

    use super::*;

    #[tokio::test]
    async fn create_product_returns_record() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let product = ctx
            .products
            .create_product(NewProduct {
                uuid,
                details: product_details("phone", 499_900, Some(449_900)),
            })
            .await?;

        assert_eq!(product.uuid, uuid);
        assert_eq!(product.slug, "phone");
        assert_eq!(product.price, 499_900);
        assert_eq!(product.sale_price, Some(449_900));
        assert_eq!(product.currency, "INR");
        assert_eq!(product.primary_image(), Some("https://img.example.com/phone.png"));
        assert!(product.deleted_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn get_product_by_uuid_or_slug() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        ctx.products
            .create_product(NewProduct {
                uuid,
                details: product_details("laptop", 999_900, None),
            })
            .await?;

        let by_uuid = ctx.products.get_product(ProductKey::Uuid(uuid)).await?;
        let by_slug = ctx
            .products
            .get_product(ProductKey::Slug("laptop".to_string()))
            .await?;

        assert_eq!(by_uuid.uuid, uuid);
        assert_eq!(by_slug.uuid, uuid);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .get_product(ProductKey::Slug("missing".to_string()))
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_applies_filters() -> TestResult {
        let ctx = TestContext::new().await;

        let mut phone = product_details("smart-phone", 2_000_000, None);
        phone.title = "Smart Phone".to_string();
        phone.featured = true;

        let mut shirt = product_details("shirt", 150_000, None);
        shirt.title = "Cotton Shirt".to_string();
        shirt.category = "fashion".to_string();

        for details in [phone, shirt] {
            ctx.products
                .create_product(NewProduct {
                    uuid: ProductUuid::new(),
                    details,
                })
                .await?;
        }

        let slugs = |products: Vec<ProductRecord>| -> Vec<String> {
            products.into_iter().map(|product| product.slug).collect()
        };

        let by_query = ctx
            .products
            .list_products(ProductFilter {
                query: Some("PHONE".to_string()),
                ..ProductFilter::default()
            })
            .await?;

        let by_category = ctx
            .products
            .list_products(ProductFilter {
                category: Some("fashion".to_string()),
                ..ProductFilter::default()
            })
            .await?;

        let by_price = ctx
            .products
            .list_products(ProductFilter {
                min_price: Some(100_000),
                max_price: Some(150_000),
                ..ProductFilter::default()
            })
            .await?;

        let featured = ctx
            .products
            .list_products(ProductFilter {
                featured: Some(true),
                ..ProductFilter::default()
            })
            .await?;

        let limited = ctx
            .products
            .list_products(ProductFilter {
                limit: 1,
                ..ProductFilter::default()
            })
            .await?;

        assert_eq!(slugs(by_query), vec!["smart-phone"]);
        assert_eq!(slugs(by_category), vec!["shirt"]);
        assert_eq!(slugs(by_price), vec!["shirt"]);
        assert_eq!(slugs(featured), vec!["smart-phone"]);
        assert_eq!(slugs(limited), vec!["smart-phone"]);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_replaces_details() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        ctx.products
            .create_product(NewProduct {
                uuid,
                details: product_details("camera", 3_000_000, Some(2_750_000)),
            })
            .await?;

        let mut details = product_details("camera-pro", 3_500_000, None);
        details.tags = vec!["pro".to_string()];

        let updated = ctx.products.update_product(uuid, details).await?;

        assert_eq!(updated.uuid, uuid);
        assert_eq!(updated.slug, "camera-pro");
        assert_eq!(updated.price, 3_500_000);
        assert_eq!(updated.sale_price, None, "sale price should be cleared");
        assert_eq!(updated.tags, vec!["pro"]);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .update_product(ProductUuid::new(), product_details("ghost", 100, None))
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_product_hides_it_and_frees_the_slug() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        ctx.products
            .create_product(NewProduct {
                uuid,
                details: product_details("watch", 500_000, None),
            })
            .await?;

        ctx.products.delete_product(uuid).await?;

        let result = ctx.products.get_product(ProductKey::Uuid(uuid)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        ctx.products
            .create_product(NewProduct {
                uuid: ProductUuid::new(),
                details: product_details("watch", 550_000, None),
            })
            .await?;

        let second_delete = ctx.products.delete_product(uuid).await;

        assert!(
            matches!(second_delete, Err(ProductsServiceError::NotFound)),
            "expected NotFound on repeat deletion, got {second_delete:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_product_duplicate_slug_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products
            .create_product(NewProduct {
                uuid: ProductUuid::new(),
                details: product_details("tablet", 100, None),
            })
            .await?;

        let result = ctx
            .products
            .create_product(NewProduct {
                uuid: ProductUuid::new(),
                details: product_details("tablet", 200, None),
            })
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }
}
