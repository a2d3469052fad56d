//! Products

use rusty_money::{Money, iso::Currency};

/// Catalog data for one product, as read at checkout time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSnapshot<'a, R> {
    /// Product reference
    pub reference: R,

    /// Product title
    pub title: String,

    /// List price
    pub price: Money<'a, Currency>,

    /// Sale price, charged instead of the list price when set
    pub sale_price: Option<Money<'a, Currency>>,

    /// Primary image URL
    pub image: Option<String>,
}

impl<'a, R> ProductSnapshot<'a, R> {
    /// Price charged per unit.
    pub fn unit_price(&self) -> Money<'a, Currency> {
        self.sale_price.unwrap_or(self.price)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::INR;

    use super::*;

    fn snapshot(sale_price: Option<i64>) -> ProductSnapshot<'static, &'static str> {
        ProductSnapshot {
            reference: "gadget",
            title: "Gadget".to_string(),
            price: Money::from_minor(5_000, INR),
            sale_price: sale_price.map(|minor| Money::from_minor(minor, INR)),
            image: None,
        }
    }

    #[test]
    fn unit_price_prefers_sale_price() {
        assert_eq!(
            snapshot(Some(4_500)).unit_price(),
            Money::from_minor(4_500, INR)
        );
    }

    #[test]
    fn unit_price_falls_back_to_list_price() {
        assert_eq!(snapshot(None).unit_price(), Money::from_minor(5_000, INR));
    }
}
