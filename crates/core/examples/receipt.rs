//! Checkout Receipt Example
//!
//! Prices a small basket with a percentage coupon and prints the receipt.

use std::collections::HashMap;

use flames::prelude::*;
use rust_decimal::Decimal;
use rusty_money::Money;
use testresult::TestResult;

/// Checkout Receipt Example
#[expect(clippy::print_stdout, reason = "Example program output to user")]
pub fn main() -> TestResult {
    let catalog: HashMap<&'static str, ProductSnapshot<'static, &'static str>> = [
        ("earbuds", "Wireless Earbuds", 499_900, Some(449_900)),
        ("speaker", "Smart Speaker", 799_900, None),
    ]
    .into_iter()
    .map(|(reference, title, price, sale)| {
        (
            reference,
            ProductSnapshot {
                reference,
                title: title.to_string(),
                price: Money::from_minor(price, STORE_CURRENCY),
                sale_price: sale.map(|sale| Money::from_minor(sale, STORE_CURRENCY)),
                image: None,
            },
        )
    })
    .collect();

    let festive = Coupon {
        code: "FESTIVE15".to_string(),
        kind: CouponKind::Percent(Decimal::from(15)),
        min_order: Money::from_minor(500_000, STORE_CURRENCY),
        active: true,
    };

    let items = [
        LineItemRequest::try_new("earbuds", 2).ok_or("zero quantity")?,
        LineItemRequest::try_new("speaker", 1).ok_or("zero quantity")?,
    ];

    let (total, priced) = compute_order(
        &items,
        Some("festive15"),
        &|reference: &&'static str| catalog.get(reference).cloned(),
        &|code: &str| (code == festive.code).then(|| festive.clone()),
        STORE_CURRENCY,
    )?;

    for item in &priced {
        println!(
            "{:<20} {:>3} x {:>12} = {:>12}",
            item.title,
            item.quantity,
            item.unit_price,
            item.line_total()?
        );
    }

    println!("{:<20} {:>33}", "Subtotal", total.subtotal());
    println!(
        "{:<20} {:>33}",
        format!("Coupon {}", total.coupon().unwrap_or("-")),
        total.savings()?
    );
    println!("{:<20} {:>33}", "Total", total.amount());

    Ok(())
}
