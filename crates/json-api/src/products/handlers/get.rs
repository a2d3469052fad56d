//! Get Product Handler

use std::collections::BTreeMap;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use flames_app::domain::products::{data::ProductKey, records::ProductRecord};

use crate::{
    extensions::*,
    products::{errors::into_status_error, requests::ProductImageBody},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    pub title: String,
    pub slug: String,
    pub description: Option<String>,

    /// List price in paise
    pub price: u64,

    /// Sale price in paise, charged instead of the list price when present
    pub sale_price: Option<u64>,

    pub currency: String,

    /// Category slug
    pub category: String,

    pub brand: Option<String>,
    pub rating: f64,
    pub rating_count: u32,
    pub stock: u32,
    pub images: Vec<ProductImageBody>,
    pub specs: BTreeMap<String, String>,
    pub featured: bool,
    pub tags: Vec<String>,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            title: product.title,
            slug: product.slug,
            description: product.description,
            price: product.price,
            sale_price: product.sale_price,
            currency: product.currency,
            category: product.category,
            brand: product.brand,
            rating: product.rating,
            rating_count: product.rating_count,
            stock: product.stock,
            images: product.images.into_iter().map(Into::into).collect(),
            specs: product.specs,
            featured: product.featured,
            tags: product.tags,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Get Product Handler
///
/// Returns a product by UUID or slug.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let app = depot.app()?;

    let key = product
        .into_inner()
        .parse::<ProductKey>()
        .or_400("invalid product key")?;

    let product = app
        .products
        .get_product(key)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use flames_app::domain::products::{ProductsServiceError, records::ProductUuid};

    use crate::test_helpers::{TestServices, make_product};

    use super::*;

    fn make_service(services: TestServices) -> Service {
        services.service(Router::with_path("products/{product}").get(handler))
    }

    #[tokio::test]
    async fn test_get_by_uuid_returns_200() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid, "phone");

        let mut services = TestServices::default();

        services
            .products
            .expect_get_product()
            .once()
            .withf(move |key| *key == ProductKey::Uuid(uuid))
            .return_once(move |_| Ok(product));

        let mut res = TestClient::get(format!("http://example.com/products/{uuid}"))
            .send(&make_service(services))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.slug, "phone");
        assert_eq!(body.currency, "INR");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_by_slug_returns_200() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid, "premium-gadget-1");

        let mut services = TestServices::default();

        services
            .products
            .expect_get_product()
            .once()
            .withf(|key| *key == ProductKey::Slug("premium-gadget-1".to_string()))
            .return_once(move |_| Ok(product));

        let body: ProductResponse = TestClient::get("http://example.com/products/premium-gadget-1")
            .send(&make_service(services))
            .await
            .take_json()
            .await?;

        assert_eq!(body.uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_returns_404() {
        let mut services = TestServices::default();

        services
            .products
            .expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let res = TestClient::get("http://example.com/products/missing")
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
