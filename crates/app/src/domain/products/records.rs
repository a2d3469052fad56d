//! Product Records

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,

    /// List price in minor units.
    pub price: u64,

    /// Sale price in minor units, charged instead of `price` when set.
    pub sale_price: Option<u64>,

    /// ISO 4217 code the prices are quoted in.
    pub currency: String,

    /// Slug of the category the product is listed under.
    pub category: String,

    pub brand: Option<String>,
    pub rating: f64,
    pub rating_count: u32,
    pub stock: u32,
    pub images: Vec<ProductImage>,
    pub specs: BTreeMap<String, String>,
    pub featured: bool,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl ProductRecord {
    /// URL of the first image, used as the product's thumbnail.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(|image| image.url.as_str())
    }
}

/// Product image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}
