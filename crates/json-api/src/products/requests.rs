//! Product Requests

use std::collections::BTreeMap;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use flames_app::domain::products::{data::ProductDetails, records::ProductImage};

/// Product Image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductImageBody {
    pub url: String,

    #[serde(default)]
    pub alt: Option<String>,
}

impl From<ProductImage> for ProductImageBody {
    fn from(image: ProductImage) -> Self {
        Self {
            url: image.url,
            alt: image.alt,
        }
    }
}

impl From<ProductImageBody> for ProductImage {
    fn from(image: ProductImageBody) -> Self {
        Self {
            url: image.url,
            alt: image.alt,
        }
    }
}

/// Create or Replace Product Request
///
/// Prices are in paise.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    pub title: String,
    pub slug: String,

    #[serde(default)]
    pub description: Option<String>,

    pub price: u64,

    #[serde(default)]
    pub sale_price: Option<u64>,

    /// Category slug
    pub category: String,

    #[serde(default)]
    pub brand: Option<String>,

    /// Average rating, 0 to 5
    #[serde(default)]
    pub rating: f64,

    #[serde(default)]
    pub rating_count: u32,

    #[serde(default)]
    pub stock: u32,

    #[serde(default)]
    pub images: Vec<ProductImageBody>,

    #[serde(default)]
    pub specs: BTreeMap<String, String>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<ProductRequest> for ProductDetails {
    fn from(request: ProductRequest) -> Self {
        ProductDetails {
            title: request.title,
            slug: request.slug,
            description: request.description,
            price: request.price,
            sale_price: request.sale_price,
            category: request.category,
            brand: request.brand,
            rating: request.rating,
            rating_count: request.rating_count,
            stock: request.stock,
            images: request.images.into_iter().map(Into::into).collect(),
            specs: request.specs,
            featured: request.featured,
            tags: request.tags,
        }
    }
}
