//! Flames Domain Concerns

pub mod accounts;
pub mod banners;
pub mod carts;
pub mod categories;
pub mod coupons;
pub mod orders;
pub mod products;
pub mod seed;
pub mod wishlists;
