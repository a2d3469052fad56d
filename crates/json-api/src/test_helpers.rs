//! Test helpers.

use std::{collections::BTreeMap, sync::Arc};

use flames_app::{
    context::AppContext,
    domain::{
        accounts::MockAccountsService,
        banners::MockBannersService,
        carts::MockCartsService,
        categories::MockCategoriesService,
        coupons::MockCouponsService,
        orders::{
            MockOrdersService,
            records::{
                Address, OrderItemRecord, OrderRecord, OrderStatus, OrderUuid, PAYMENT_PROVIDER,
            },
        },
        products::{
            MockProductsService,
            records::{ProductImage, ProductRecord, ProductUuid},
        },
        seed::MockSeedService,
        wishlists::MockWishlistsService,
    },
};
use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use crate::state::State;

pub(crate) const TEST_ADMIN_KEY: &str = "test-admin-key";

/// Mock services for one handler test. Unconfigured mocks fail on any call.
#[derive(Default)]
pub(crate) struct TestServices {
    pub(crate) accounts: MockAccountsService,
    pub(crate) banners: MockBannersService,
    pub(crate) carts: MockCartsService,
    pub(crate) categories: MockCategoriesService,
    pub(crate) coupons: MockCouponsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) products: MockProductsService,
    pub(crate) seed: MockSeedService,
    pub(crate) wishlists: MockWishlistsService,
}

impl TestServices {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(
            AppContext {
                accounts: Arc::new(self.accounts),
                banners: Arc::new(self.banners),
                carts: Arc::new(self.carts),
                categories: Arc::new(self.categories),
                coupons: Arc::new(self.coupons),
                orders: Arc::new(self.orders),
                products: Arc::new(self.products),
                seed: Arc::new(self.seed),
                wishlists: Arc::new(self.wishlists),
            },
            TEST_ADMIN_KEY.to_string(),
        )
    }

    pub(crate) fn service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }
}

pub(crate) fn make_product(uuid: ProductUuid, slug: &str) -> ProductRecord {
    ProductRecord {
        uuid,
        title: slug.replace('-', " "),
        slug: slug.to_string(),
        description: None,
        price: 5_000,
        sale_price: None,
        currency: "INR".to_string(),
        category: "electronics".to_string(),
        brand: Some("Flames".to_string()),
        rating: 4.5,
        rating_count: 12,
        stock: 3,
        images: vec![ProductImage {
            url: format!("https://img.example.com/{slug}.png"),
            alt: None,
        }],
        specs: BTreeMap::new(),
        featured: false,
        tags: Vec::new(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_address() -> Address {
    Address {
        label: "Home".to_string(),
        line1: "12 MG Road".to_string(),
        line2: None,
        city: "Bengaluru".to_string(),
        state: "Karnataka".to_string(),
        country: "India".to_string(),
        postal_code: "560001".to_string(),
        phone: None,
        is_default: false,
    }
}

pub(crate) fn make_order(uuid: OrderUuid, product: ProductUuid) -> OrderRecord {
    OrderRecord {
        uuid,
        user: None,
        items: vec![OrderItemRecord {
            product,
            title: "phone".to_string(),
            unit_price: 5_000,
            quantity: 2,
            image: None,
        }],
        subtotal: 10_000,
        amount: 9_000,
        currency: "INR".to_string(),
        address: make_address(),
        status: OrderStatus::Pending,
        payment_provider: PAYMENT_PROVIDER.to_string(),
        payment_order_id: "order_abcdefghijkl".to_string(),
        payment_id: None,
        coupon: Some("SAVE10".to_string()),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
