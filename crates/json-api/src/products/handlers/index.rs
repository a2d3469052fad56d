//! Product Index Handler

use salvo::{
    oapi::{ToParameters, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use flames_app::domain::products::data::{DEFAULT_PRODUCT_LIMIT, ProductFilter};

use crate::{
    extensions::*,
    products::{errors::into_status_error, handlers::get::ProductResponse},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

/// Product listing query
#[derive(Debug, Default, Deserialize, ToParameters)]
#[salvo(parameters(default_parameter_in = Query))]
pub(crate) struct ProductQuery {
    /// Case-insensitive substring of the title
    pub q: Option<String>,

    /// Category slug
    pub category: Option<String>,

    pub brand: Option<String>,

    /// Lowest list price in paise, inclusive
    pub min_price: Option<u64>,

    /// Highest list price in paise, inclusive
    pub max_price: Option<u64>,

    pub featured: Option<bool>,

    /// Maximum number of products, 50 when absent
    pub limit: Option<u32>,
}

impl From<ProductQuery> for ProductFilter {
    fn from(query: ProductQuery) -> Self {
        ProductFilter {
            query: query.q.filter(|q| !q.is_empty()),
            category: query.category,
            brand: query.brand,
            min_price: query.min_price,
            max_price: query.max_price,
            featured: query.featured,
            limit: query.limit.unwrap_or(DEFAULT_PRODUCT_LIMIT),
        }
    }
}

/// Product Index Handler
///
/// Returns live products, optionally filtered.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    query: ProductQuery,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let app = depot.app()?;

    let products = app
        .products
        .list_products(query.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use flames_app::domain::products::records::ProductUuid;

    use crate::test_helpers::{TestServices, make_product};

    use super::*;

    fn make_service(services: TestServices) -> Service {
        services.service(Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_without_filters_uses_defaults() -> TestResult {
        let mut services = TestServices::default();

        services
            .products
            .expect_list_products()
            .once()
            .withf(|filter| *filter == ProductFilter::default())
            .return_once(|_| {
                Ok(vec![
                    make_product(ProductUuid::new(), "phone"),
                    make_product(ProductUuid::new(), "laptop"),
                ])
            });

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(services))
            .await;

        let body: ProductsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.products.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_passes_filters() -> TestResult {
        let mut services = TestServices::default();

        services
            .products
            .expect_list_products()
            .once()
            .withf(|filter| {
                *filter
                    == ProductFilter {
                        query: Some("gad".to_string()),
                        category: Some("electronics".to_string()),
                        brand: Some("Flames".to_string()),
                        min_price: Some(1_000),
                        max_price: Some(9_000),
                        featured: Some(true),
                        limit: 5,
                    }
            })
            .return_once(|_| Ok(Vec::new()));

        let mut res = TestClient::get(
            "http://example.com/products?q=gad&category=electronics&brand=Flames\
             &min_price=1000&max_price=9000&featured=true&limit=5",
        )
        .send(&make_service(services))
        .await;

        let body: ProductsResponse = res.take_json().await?;

        assert!(body.products.is_empty(), "expected no products");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_invalid_price_returns_400() {
        let mut services = TestServices::default();

        services.products.expect_list_products().never();

        let res = TestClient::get("http://example.com/products?min_price=cheap")
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
