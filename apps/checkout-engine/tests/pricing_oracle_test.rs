//! Oracle tests for the cost calculation.
//!
//! Literal end-to-end totals plus property tests for the pricing invariants:
//! determinism, monotone bulk rates, the gold waiver, and the silver halving.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_case::test_case;

use checkout_engine::domain::pricing::services::{discount, shipping};
use checkout_engine::{
    Cart, CartLine, CostCalculator, Dimensions, LoyaltyTier, Money, PricingError, Product,
    ProductCategory, ProductId, Region, Weight,
};

fn product(
    price: Decimal,
    physical_kg: Decimal,
    fragile: Option<bool>,
    category: ProductCategory,
) -> Product {
    Product::new(
        ProductId::generate(),
        "fixture",
        Money::new(price),
        category,
        Weight::new(physical_kg),
        // 1 cm³ keeps volumetric weight negligible unless a test says otherwise
        Dimensions::new(dec!(1), dec!(1), dec!(1)).unwrap(),
        fragile,
    )
    .unwrap()
}

fn single_line_cart(
    price: Decimal,
    physical_kg: Decimal,
    fragile: Option<bool>,
    quantity: u32,
) -> Cart {
    let p = product(price, physical_kg, fragile, ProductCategory::Electronics);
    Cart::new(vec![CartLine::new(p, quantity).unwrap()])
}

fn total(cart: &Cart, region: Region, tier: LoyaltyTier) -> Money {
    CostCalculator::with_default_config()
        .compute_total(cart, region, tier)
        .unwrap()
}

// =============================================================================
// Literal oracle scenarios
// =============================================================================

#[test]
fn scenario_base_region_base_tier() {
    // 50.00 + (6 × 2.00 + 12.00) = 74.00
    let cart = single_line_cart(dec!(50.00), dec!(6.0), None, 1);
    assert_eq!(
        total(&cart, Region::Southeast, LoyaltyTier::Bronze),
        Money::new(dec!(74.00))
    );
}

#[test]
fn scenario_fragile_regional_silver() {
    // Shipping ((6 × 2 + 12) + 5) × 1.10 × 0.5 = 15.95; 120.00 + 15.95
    let cart = single_line_cart(dec!(120.00), dec!(6.0), Some(true), 1);
    assert_eq!(
        total(&cart, Region::Northeast, LoyaltyTier::Silver),
        Money::new(dec!(135.95))
    );
}

#[test]
fn scenario_stacked_discounts_gold() {
    // 8 × 200 = 1600 × 0.85 × 0.80 = 1088.00; gold ships free.
    let cart = single_line_cart(dec!(200.00), dec!(6.0), None, 8);
    assert_eq!(
        total(&cart, Region::Southeast, LoyaltyTier::Gold),
        Money::new(dec!(1088.00))
    );
}

#[test]
fn scenario_six_units_fragile_south() {
    // Subtotal 600 × 0.90 × 0.90 = 486.00
    // Shipping ((18 × 4 + 12) + 30) × 1.05 = 119.70
    let cart = single_line_cart(dec!(100.00), dec!(3.0), Some(true), 6);
    assert_eq!(
        total(&cart, Region::South, LoyaltyTier::Bronze),
        Money::new(dec!(605.70))
    );
}

#[test]
fn scenario_value_discount_boundary() {
    // 500.01 crosses the strict threshold: × 0.9 = 450.009 → 450.01
    let cart = single_line_cart(dec!(500.01), dec!(0.1), None, 1);
    assert_eq!(
        total(&cart, Region::Southeast, LoyaltyTier::Bronze),
        Money::new(dec!(450.01))
    );
}

#[test_case(dec!(5.00), dec!(10.00); "five kg exactly ships free")]
#[test_case(dec!(5.01), dec!(32.02); "just over five kg pays the light band plus minimum")]
fn scenario_weight_band_boundary(weight: Decimal, expected: Decimal) {
    let cart = single_line_cart(dec!(10.00), weight, None, 1);
    assert_eq!(
        total(&cart, Region::Southeast, LoyaltyTier::Bronze),
        Money::new(expected)
    );
}

#[test]
fn empty_cart_is_invalid() {
    let result = CostCalculator::with_default_config().compute_total(
        &Cart::default(),
        Region::Southeast,
        LoyaltyTier::Bronze,
    );
    assert_eq!(result, Err(PricingError::InvalidCart));
}

// =============================================================================
// Property tests
// =============================================================================

fn money_amount() -> impl Strategy<Value = Decimal> {
    // Up to 2000.00 in whole cents
    (0i64..=200_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn weight_kg() -> impl Strategy<Value = Decimal> {
    // Up to 80.00 kg in 10 g steps
    (0i64..=8_000).prop_map(|centi| Decimal::new(centi, 2))
}

fn any_region() -> impl Strategy<Value = Region> {
    prop_oneof![
        Just(Region::Southeast),
        Just(Region::South),
        Just(Region::Northeast),
        Just(Region::CentralWest),
        Just(Region::North),
    ]
}

proptest! {
    #[test]
    fn compute_total_is_deterministic(
        price in money_amount(),
        kg in weight_kg(),
        quantity in 1u32..=12,
        region in any_region(),
    ) {
        let cart = single_line_cart(price, kg, Some(true), quantity);
        let calc = CostCalculator::with_default_config();
        let first = calc.compute_total(&cart, region, LoyaltyTier::Bronze).unwrap();
        let second = calc.compute_total(&cart, region, LoyaltyTier::Bronze).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn bulk_rate_is_non_decreasing(q in 0u32..=50) {
        let config = checkout_engine::PricingConfig::default();
        let rate_here = discount::bulk_rate(&config.discounts, q);
        let rate_next = discount::bulk_rate(&config.discounts, q + 1);
        prop_assert!(rate_next >= rate_here);
    }

    #[test]
    fn gold_always_ships_free(
        kg in weight_kg(),
        quantity in 1u32..=12,
        region in any_region(),
        fragile in proptest::option::of(proptest::bool::ANY),
    ) {
        let config = checkout_engine::PricingConfig::default();
        let cart = single_line_cart(dec!(10), kg, fragile, quantity);
        let fee = shipping::shipping_fee(&config.shipping, &cart, region, LoyaltyTier::Gold);
        prop_assert_eq!(fee, Money::ZERO);
    }

    #[test]
    fn silver_pays_exactly_half_of_bronze(
        kg in weight_kg(),
        quantity in 1u32..=12,
        region in any_region(),
    ) {
        let config = checkout_engine::PricingConfig::default();
        let cart = single_line_cart(dec!(10), kg, Some(true), quantity);
        let bronze = shipping::shipping_fee(&config.shipping, &cart, region, LoyaltyTier::Bronze);
        let silver = shipping::shipping_fee(&config.shipping, &cart, region, LoyaltyTier::Silver);
        prop_assert_eq!(silver, bronze * dec!(0.5));
    }

    #[test]
    fn unset_fragility_equals_explicit_false(
        price in money_amount(),
        kg in weight_kg(),
        quantity in 1u32..=12,
        region in any_region(),
    ) {
        let unset = single_line_cart(price, kg, None, quantity);
        let explicit = single_line_cart(price, kg, Some(false), quantity);
        let calc = CostCalculator::with_default_config();
        prop_assert_eq!(
            calc.compute_total(&unset, region, LoyaltyTier::Bronze).unwrap(),
            calc.compute_total(&explicit, region, LoyaltyTier::Bronze).unwrap()
        );
    }
}
