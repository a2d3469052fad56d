//! App Router

use salvo::Router;

use crate::{
    accounts, admin, banners, carts, categories, coupons, home, orders, products, seed, wishlists,
};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(storefront_router())
        .push(Router::with_path("admin").push(admin_router()))
}

fn storefront_router() -> Router {
    Router::new()
        .push(
            Router::with_path("auth")
                .push(Router::with_path("register").post(accounts::handlers::register::handler))
                .push(Router::with_path("login").post(accounts::handlers::login::handler))
                .push(
                    Router::with_path("request-otp")
                        .post(accounts::handlers::request_otp::handler),
                )
                .push(
                    Router::with_path("verify-otp").post(accounts::handlers::verify_otp::handler),
                ),
        )
        .push(Router::with_path("home").get(home::handler))
        .push(Router::with_path("categories").get(categories::handlers::index::handler))
        .push(Router::with_path("banners").get(banners::handlers::index::handler))
        .push(
            Router::with_path("products")
                .get(products::handlers::index::handler)
                .push(Router::with_path("{product}").get(products::handlers::get::handler)),
        )
        .push(Router::with_path("coupons/{code}").get(coupons::handlers::get::handler))
        .push(
            Router::with_path("cart")
                .get(carts::handlers::get::handler)
                .push(Router::with_path("add").post(carts::handlers::add::handler))
                .push(Router::with_path("remove").post(carts::handlers::remove::handler)),
        )
        .push(
            Router::with_path("wishlist")
                .get(wishlists::handlers::get::handler)
                .push(Router::with_path("toggle").post(wishlists::handlers::toggle::handler)),
        )
        .push(
            Router::with_path("checkout/create-order").post(orders::handlers::checkout::handler),
        )
        .push(Router::with_path("payment/verify").post(orders::handlers::verify_payment::handler))
        .push(
            Router::with_path("orders")
                .get(orders::handlers::index::handler)
                .push(Router::with_path("track/{order}").get(orders::handlers::track::handler))
                .push(Router::with_path("{order}").get(orders::handlers::get::handler)),
        )
}

fn admin_router() -> Router {
    Router::new()
        .hoop(admin::middleware::handler)
        .push(
            Router::with_path("products")
                .post(products::handlers::create::handler)
                .push(
                    Router::with_path("{product}")
                        .put(products::handlers::update::handler)
                        .delete(products::handlers::delete::handler),
                ),
        )
        .push(Router::with_path("categories").post(categories::handlers::create::handler))
        .push(Router::with_path("banners").post(banners::handlers::create::handler))
        .push(Router::with_path("coupons").post(coupons::handlers::create::handler))
        .push(Router::with_path("seed").post(seed::handler))
}
