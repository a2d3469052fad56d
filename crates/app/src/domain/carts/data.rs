//! Cart Data

use std::num::NonZeroU32;

use crate::domain::products::records::ProductUuid;

/// Quantity of a product to add to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCartItem {
    pub product: ProductUuid,
    pub quantity: NonZeroU32,
}
