//! Wishlist Records

use crate::domain::{accounts::records::UserUuid, products::records::ProductUuid};

/// Wishlist Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistRecord {
    pub user: UserUuid,

    /// Products in the order they were added.
    pub products: Vec<ProductUuid>,
}
