//! Products Data

use std::{collections::BTreeMap, convert::Infallible, str::FromStr};

use uuid::Uuid;

use crate::domain::products::records::{ProductImage, ProductUuid};

/// Default page size when listing products.
pub const DEFAULT_PRODUCT_LIMIT: u32 = 50;

/// Editable product fields. Updates replace all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: u64,
    pub sale_price: Option<u64>,
    pub category: String,
    pub brand: Option<String>,
    pub rating: f64,
    pub rating_count: u32,
    pub stock: u32,
    pub images: Vec<ProductImage>,
    pub specs: BTreeMap<String, String>,
    pub featured: bool,
    pub tags: Vec<String>,
}

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub details: ProductDetails,
}

/// Identifies a product by UUID or by slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKey {
    Uuid(ProductUuid),
    Slug(String),
}

impl FromStr for ProductKey {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Uuid::parse_str(value).map_or_else(
            |_| Self::Slug(value.to_string()),
            |uuid| Self::Uuid(ProductUuid::from_uuid(uuid)),
        ))
    }
}

/// Product listing filters. Absent filters match every product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring of the title.
    pub query: Option<String>,

    /// Category slug.
    pub category: Option<String>,

    pub brand: Option<String>,

    /// Inclusive lower bound on the list price, in minor units.
    pub min_price: Option<u64>,

    /// Inclusive upper bound on the list price, in minor units.
    pub max_price: Option<u64>,

    pub featured: Option<bool>,
    pub limit: u32,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            query: None,
            category: None,
            brand: None,
            min_price: None,
            max_price: None,
            featured: None,
            limit: DEFAULT_PRODUCT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn product_key_parses_uuid() -> TestResult {
        let uuid = Uuid::now_v7();
        let key: ProductKey = uuid.to_string().parse()?;

        assert_eq!(key, ProductKey::Uuid(ProductUuid::from_uuid(uuid)));

        Ok(())
    }

    #[test]
    fn product_key_falls_back_to_slug() -> TestResult {
        let key: ProductKey = "premium-gadget-1".parse()?;

        assert_eq!(key, ProductKey::Slug("premium-gadget-1".to_string()));

        Ok(())
    }

    #[test]
    fn default_filter_limits_to_fifty() {
        assert_eq!(ProductFilter::default().limit, 50);
    }
}
