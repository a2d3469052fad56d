//! Home Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use flames_app::domain::products::data::ProductFilter;

use crate::{
    banners::handlers::index::BannerResponse,
    categories::handlers::index::CategoryResponse,
    extensions::*,
    products::handlers::get::ProductResponse,
};

/// Featured products shown on the home page.
const HOME_FEATURED_LIMIT: u32 = 8;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HomeResponse {
    pub featured: Vec<ProductResponse>,
    pub categories: Vec<CategoryResponse>,
    pub banners: Vec<BannerResponse>,
}

/// Home Handler
///
/// Featured products, categories and active banners in one response.
#[endpoint(
    tags("catalog"),
    summary = "Home Page",
    responses(
        (status_code = StatusCode::OK, description = "Home page content"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HomeResponse>, StatusError> {
    let app = depot.app()?;

    let featured = app
        .products
        .list_products(ProductFilter {
            featured: Some(true),
            limit: HOME_FEATURED_LIMIT,
            ..ProductFilter::default()
        })
        .await
        .or_500("failed to fetch featured products")?;

    let categories = app
        .categories
        .list_categories()
        .await
        .or_500("failed to fetch categories")?;

    let banners = app
        .banners
        .list_active_banners()
        .await
        .or_500("failed to fetch banners")?;

    Ok(Json(HomeResponse {
        featured: featured.into_iter().map(Into::into).collect(),
        categories: categories.into_iter().map(Into::into).collect(),
        banners: banners.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use flames_app::domain::{
        banners::BannersServiceError,
        products::records::ProductUuid,
    };

    use crate::test_helpers::{TestServices, make_product};

    use super::*;

    fn make_service(services: TestServices) -> Service {
        services.service(Router::with_path("home").get(handler))
    }

    #[tokio::test]
    async fn test_home_collects_featured_products() -> TestResult {
        let mut services = TestServices::default();

        services
            .products
            .expect_list_products()
            .once()
            .withf(|filter| filter.featured == Some(true) && filter.limit == 8)
            .return_once(|_| {
                let mut product = make_product(ProductUuid::new(), "phone");
                product.featured = true;

                Ok(vec![product])
            });

        services
            .categories
            .expect_list_categories()
            .once()
            .return_once(|| Ok(Vec::new()));

        services
            .banners
            .expect_list_active_banners()
            .once()
            .return_once(|| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/home")
            .send(&make_service(services))
            .await;

        let body: HomeResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.featured.len(), 1);
        assert!(body.categories.is_empty(), "no categories expected");
        assert!(body.banners.is_empty(), "no banners expected");

        Ok(())
    }

    #[tokio::test]
    async fn test_home_storage_error_returns_500() {
        let mut services = TestServices::default();

        services
            .products
            .expect_list_products()
            .once()
            .return_once(|_| Ok(Vec::new()));

        services
            .categories
            .expect_list_categories()
            .once()
            .return_once(|| Ok(Vec::new()));

        services
            .banners
            .expect_list_active_banners()
            .once()
            .return_once(|| Err(BannersServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/home")
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
