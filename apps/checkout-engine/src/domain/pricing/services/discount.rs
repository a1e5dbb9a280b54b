//! Discount engine.
//!
//! Two discounts are applied in sequence: a per-category quantity discount,
//! then a cart-wide value discount on the already-discounted sum. The result
//! stays at full decimal precision; rounding belongs to the cost calculator.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::domain::cart::Cart;
use crate::domain::catalog::ProductCategory;
use crate::domain::pricing::DiscountSchedule;
use crate::domain::shared::Money;

/// Compute the discounted subtotal for a cart.
///
/// Lines are grouped by product category; each category's total quantity
/// selects a bulk rate applied to that category's raw subtotal. The summed
/// result then takes the cart-value discount.
#[must_use]
pub fn discounted_subtotal(schedule: &DiscountSchedule, cart: &Cart) -> Money {
    let mut per_category: BTreeMap<ProductCategory, (Money, u32)> = BTreeMap::new();

    for line in cart.lines() {
        let entry = per_category
            .entry(line.product.category)
            .or_insert((Money::ZERO, 0));
        entry.0 += line.raw_total();
        entry.1 += line.quantity;
    }

    let category_discounted: Money = per_category
        .into_values()
        .map(|(subtotal, quantity)| {
            subtotal * (Decimal::ONE - bulk_rate(schedule, quantity))
        })
        .sum();

    apply_value_discount(schedule, category_discounted)
}

/// Bulk discount rate for a category's total quantity.
///
/// Thresholds are inclusive and the highest one wins.
#[must_use]
pub fn bulk_rate(schedule: &DiscountSchedule, quantity: u32) -> Decimal {
    if quantity >= schedule.bulk_large_qty {
        schedule.bulk_large_rate
    } else if quantity >= schedule.bulk_medium_qty {
        schedule.bulk_medium_rate
    } else if quantity >= schedule.bulk_small_qty {
        schedule.bulk_small_rate
    } else {
        Decimal::ZERO
    }
}

/// Apply the cart-value discount to a category-discounted subtotal.
///
/// Thresholds are strict greater-than: exactly 500.00 or 1000.00 earns the
/// lower tier.
#[must_use]
pub fn apply_value_discount(schedule: &DiscountSchedule, subtotal: Money) -> Money {
    if subtotal > schedule.value_high_threshold {
        subtotal * (Decimal::ONE - schedule.value_high_rate)
    } else if subtotal > schedule.value_mid_threshold {
        subtotal * (Decimal::ONE - schedule.value_mid_rate)
    } else {
        subtotal
    }
}
