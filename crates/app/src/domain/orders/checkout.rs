//! Checkout adapter between stored records and the pricing calculator.

use flames::prelude::{ProductSnapshot, PricedLineItem};
use rand::{Rng, distributions::Alphanumeric};
use rusty_money::{Money, iso};

use crate::domain::{
    orders::{errors::OrdersServiceError, records::OrderItemRecord},
    products::records::{ProductRecord, ProductUuid},
};

const PAYMENT_ORDER_ID_PREFIX: &str = "order_";
const PAYMENT_ORDER_ID_LEN: usize = 12;

/// Catalog view of a product for pricing.
pub(super) fn snapshot(
    record: &ProductRecord,
) -> Result<ProductSnapshot<'static, ProductUuid>, OrdersServiceError> {
    let currency = iso::find(&record.currency).ok_or(OrdersServiceError::InvalidData)?;

    let price = i64::try_from(record.price).map_err(|_| OrdersServiceError::InvalidData)?;

    let sale_price = record
        .sale_price
        .map(i64::try_from)
        .transpose()
        .map_err(|_| OrdersServiceError::InvalidData)?;

    Ok(ProductSnapshot {
        reference: record.uuid,
        title: record.title.clone(),
        price: Money::from_minor(price, currency),
        sale_price: sale_price.map(|minor| Money::from_minor(minor, currency)),
        image: record.primary_image().map(str::to_string),
    })
}

/// Storage form of a priced line.
pub(super) fn order_item(
    line: &PricedLineItem<'_, ProductUuid>,
) -> Result<OrderItemRecord, OrdersServiceError> {
    Ok(OrderItemRecord {
        product: line.product,
        title: line.title.clone(),
        unit_price: u64::try_from(line.unit_price.to_minor_units())
            .map_err(|_| OrdersServiceError::InvalidData)?,
        quantity: line.quantity.get(),
        image: line.image.clone(),
    })
}

/// Provider-side order reference, e.g. `order_x8Kq2LmZp0aB`.
pub(super) fn payment_order_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(PAYMENT_ORDER_ID_LEN)
        .map(char::from)
        .collect();

    format!("{PAYMENT_ORDER_ID_PREFIX}{suffix}")
}
