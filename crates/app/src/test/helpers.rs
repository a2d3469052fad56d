//! Test Helpers

use std::collections::BTreeMap;

use zeroize::Zeroizing;

use crate::{
    domain::{
        accounts::{
            AccountsService, AccountsServiceError, data::NewRegistration, records::UserUuid,
        },
        orders::records::Address,
        products::{
            ProductsService, ProductsServiceError,
            data::{NewProduct, ProductDetails},
            records::{ProductImage, ProductRecord, ProductUuid},
        },
    },
    test::TestContext,
};

/// Electronics listing titled after its slug.
pub(crate) fn product_details(slug: &str, price: u64, sale_price: Option<u64>) -> ProductDetails {
    ProductDetails {
        title: slug.replace('-', " "),
        slug: slug.to_string(),
        description: None,
        price,
        sale_price,
        category: "electronics".to_string(),
        brand: None,
        rating: 0.0,
        rating_count: 0,
        stock: 10,
        images: vec![ProductImage {
            url: format!("https://img.example.com/{slug}.png"),
            alt: None,
        }],
        specs: BTreeMap::new(),
        featured: false,
        tags: Vec::new(),
    }
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    slug: &str,
    price: u64,
    sale_price: Option<u64>,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            details: product_details(slug, price, sale_price),
        })
        .await
}

pub(crate) async fn create_user(
    ctx: &TestContext,
    email: &str,
) -> Result<UserUuid, AccountsServiceError> {
    let session = ctx
        .accounts
        .register(NewRegistration {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: Zeroizing::new("secret".to_string()),
            phone: None,
        })
        .await?;

    Ok(session.user)
}

pub(crate) fn address() -> Address {
    Address {
        label: "Home".to_string(),
        line1: "12 MG Road".to_string(),
        line2: None,
        city: "Bengaluru".to_string(),
        state: "Karnataka".to_string(),
        country: "India".to_string(),
        postal_code: "560001".to_string(),
        phone: None,
        is_default: true,
    }
}
