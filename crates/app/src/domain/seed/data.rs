//! Seed Data

use std::collections::BTreeMap;

use crate::domain::{
    banners::{data::NewBanner, records::BannerUuid},
    categories::{data::NewCategory, records::CategoryUuid},
    products::{
        data::{NewProduct, ProductDetails},
        records::{ProductImage, ProductUuid},
    },
};

/// Number of demo products in the seeded catalog.
pub const SEED_PRODUCT_COUNT: u32 = 12;

/// Demo products numbered up to this one are featured.
const FEATURED_UP_TO: u32 = 8;

/// Rows inserted by a seed run. Collections that already held data are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub products: usize,
    pub banners: usize,
}

impl SeedSummary {
    /// Whether the run inserted nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories == 0 && self.products == 0 && self.banners == 0
    }
}

pub(crate) fn categories() -> Vec<NewCategory> {
    [
        ("Electronics", "electronics", "cpu"),
        ("Fashion", "fashion", "shirt"),
        ("Home", "home", "home"),
    ]
    .into_iter()
    .map(|(name, slug, icon)| NewCategory {
        uuid: CategoryUuid::new(),
        name: name.to_string(),
        slug: slug.to_string(),
        icon: Some(icon.to_string()),
    })
    .collect()
}

pub(crate) fn products() -> Vec<NewProduct> {
    (1..=SEED_PRODUCT_COUNT).map(gadget).collect()
}

fn gadget(number: u32) -> NewProduct {
    let number_wide = u64::from(number);

    let specs = BTreeMap::from([
        ("Color".to_string(), "Black".to_string()),
        ("Material".to_string(), "Aluminum".to_string()),
    ]);

    NewProduct {
        uuid: ProductUuid::new(),
        details: ProductDetails {
            title: format!("Premium Gadget {number}"),
            slug: format!("premium-gadget-{number}"),
            description: Some("A modern, minimalist gadget with premium build.".to_string()),
            price: (4_999 + 100 * number_wide) * 100,
            sale_price: Some((4_499 + 80 * number_wide) * 100),
            category: "electronics".to_string(),
            brand: Some("Flames".to_string()),
            rating: 4.5,
            rating_count: 120 + number,
            stock: 50,
            images: vec![ProductImage {
                url: format!("https://picsum.photos/seed/gadget{number}/600/400"),
                alt: Some("Product image".to_string()),
            }],
            specs,
            featured: number <= FEATURED_UP_TO,
            tags: vec!["new".to_string(), "trending".to_string()],
        },
    }
}

pub(crate) fn banners() -> Vec<NewBanner> {
    [
        ("Festive Sale", "Up to 50% off", "banner1"),
        ("New Arrivals", "Latest tech", "banner2"),
    ]
    .into_iter()
    .map(|(title, subtitle, seed)| NewBanner {
        uuid: BannerUuid::new(),
        title: title.to_string(),
        subtitle: Some(subtitle.to_string()),
        image_url: format!("https://picsum.photos/seed/{seed}/1200/400"),
        link: Some("/".to_string()),
        active: true,
    })
    .collect()
}
