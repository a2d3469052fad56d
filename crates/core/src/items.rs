//! Items

use std::num::NonZeroU32;

/// Largest quantity a single line item may request.
pub const MAX_LINE_QUANTITY: u32 = 10_000;

/// A product reference and the quantity requested for purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemRequest<R> {
    product: R,
    quantity: NonZeroU32,
}

impl<R> LineItemRequest<R> {
    /// Creates a new line item request.
    pub fn new(product: R, quantity: NonZeroU32) -> Self {
        Self { product, quantity }
    }

    /// Creates a new line item request, returning `None` for a zero quantity or one above
    /// [`MAX_LINE_QUANTITY`].
    pub fn try_new(product: R, quantity: u32) -> Option<Self> {
        NonZeroU32::new(quantity)
            .filter(|quantity| quantity.get() <= MAX_LINE_QUANTITY)
            .map(|quantity| Self::new(product, quantity))
    }

    /// Returns the requested product reference
    pub fn product(&self) -> &R {
        &self.product
    }

    /// Returns the requested quantity
    pub fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_zero_quantity() {
        assert!(LineItemRequest::try_new("phone", 0).is_none());
    }

    #[test]
    fn try_new_rejects_quantity_above_limit() {
        assert!(LineItemRequest::try_new("phone", MAX_LINE_QUANTITY).is_some());
        assert!(LineItemRequest::try_new("phone", MAX_LINE_QUANTITY + 1).is_none());
        assert!(LineItemRequest::try_new("phone", 3_000_000_000).is_none());
    }

    #[test]
    fn try_new_keeps_product_and_quantity() {
        let item = LineItemRequest::try_new("phone", 3);

        assert_eq!(item.as_ref().map(LineItemRequest::product), Some(&"phone"));
        assert_eq!(
            item.map(|item| item.quantity().get()),
            Some(3),
            "quantity should be preserved"
        );
    }
}
