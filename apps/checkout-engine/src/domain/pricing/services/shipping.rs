//! Shipping engine.
//!
//! Fee composition, in order: billable weight accumulation, tariff band
//! selection, additive minimum fee, fragility surcharge, regional multiplier,
//! and the loyalty override last. Volumetric weight is the first of the two
//! contract rounding points; everything after it stays unrounded.

use crate::domain::cart::Cart;
use crate::domain::catalog::Product;
use crate::domain::pricing::{LoyaltyTier, Region, ShippingTariff};
use crate::domain::shared::{Money, Weight};
use rust_decimal_macros::dec;

/// A weight tariff band: per-kg rate plus whether the flat minimum applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TariffBand {
    /// Rate charged per kilogram of total billable weight.
    pub rate_per_kg: Money,
    /// Whether the flat minimum fee is added on top.
    pub applies_minimum: bool,
}

/// Select the tariff band for a total billable weight.
///
/// Upper bounds are inclusive: exactly at the exempt limit ships free, one
/// gram over enters the light band with the minimum fee.
#[must_use]
pub fn band_for(tariff: &ShippingTariff, total_weight: Weight) -> TariffBand {
    if total_weight <= tariff.exempt_limit {
        TariffBand {
            rate_per_kg: Money::ZERO,
            applies_minimum: false,
        }
    } else if total_weight <= tariff.light_limit {
        TariffBand {
            rate_per_kg: tariff.light_rate_per_kg,
            applies_minimum: true,
        }
    } else if total_weight <= tariff.heavy_limit {
        TariffBand {
            rate_per_kg: tariff.heavy_rate_per_kg,
            applies_minimum: true,
        }
    } else {
        TariffBand {
            rate_per_kg: tariff.oversize_rate_per_kg,
            applies_minimum: true,
        }
    }
}

/// Per-unit billable weight: the greater of physical and volumetric weight.
///
/// Volumetric weight is volume over the divisor, rounded half-up to 2 dp
/// before the comparison.
#[must_use]
pub fn billable_weight(tariff: &ShippingTariff, product: &Product) -> Weight {
    let volumetric =
        Weight::new(product.dimensions.volume() / tariff.volumetric_divisor).round_half_up();
    product.physical_weight.max(volumetric)
}

/// Compute the shipping fee for a cart.
///
/// The loyalty override is evaluated last, after the regional multiplier:
/// gold waives everything computed so far, silver halves it.
#[must_use]
pub fn shipping_fee(
    tariff: &ShippingTariff,
    cart: &Cart,
    region: Region,
    tier: LoyaltyTier,
) -> Money {
    let mut total_weight = Weight::ZERO;
    let mut fragile_surcharge = Money::ZERO;

    for line in cart.lines() {
        total_weight += billable_weight(tariff, &line.product) * line.quantity;

        if line.product.is_fragile() {
            fragile_surcharge += tariff.fragile_surcharge_per_unit * line.quantity;
        }
    }

    let band = band_for(tariff, total_weight);

    let mut base = band.rate_per_kg * total_weight.kilograms();
    if band.applies_minimum {
        base += tariff.minimum_fee;
    }

    let regional = (base + fragile_surcharge) * region.multiplier();

    match tier {
        LoyaltyTier::Gold => Money::ZERO,
        LoyaltyTier::Silver => regional * dec!(0.5),
        LoyaltyTier::Bronze => regional,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::CartLine;
    use crate::domain::catalog::{Dimensions, ProductCategory};
    use crate::domain::shared::ProductId;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    fn tariff() -> ShippingTariff {
        ShippingTariff::default()
    }

    fn product(
        physical_kg: Decimal,
        dims: (Decimal, Decimal, Decimal),
        fragile: Option<bool>,
    ) -> Product {
        Product::new(
            ProductId::generate(),
            "item",
            Money::new(dec!(10)),
            ProductCategory::Home,
            Weight::new(physical_kg),
            Dimensions::new(dims.0, dims.1, dims.2).unwrap(),
            fragile,
        )
        .unwrap()
    }

    fn cart_of(physical_kg: Decimal, quantity: u32, fragile: Option<bool>) -> Cart {
        let p = product(physical_kg, (dec!(1), dec!(1), dec!(1)), fragile);
        Cart::new(vec![CartLine::new(p, quantity).unwrap()])
    }

    #[test]
    fn volumetric_weight_rounds_half_up() {
        // 35 × 30 × 25 = 26250 / 6000 = 4.375 → 4.38 (half-up)
        let p = product(dec!(0.5), (dec!(35), dec!(30), dec!(25)), None);
        assert_eq!(billable_weight(&tariff(), &p), Weight::new(dec!(4.38)));
    }

    #[test]
    fn billable_weight_takes_the_heavier_of_the_two() {
        // Volumetric 1.00 kg vs physical 6.0 kg
        let heavy = product(dec!(6.0), (dec!(30), dec!(20), dec!(10)), None);
        assert_eq!(billable_weight(&tariff(), &heavy), Weight::new(dec!(6.0)));

        // Volumetric 10.00 kg vs physical 2.0 kg
        let bulky = product(dec!(2.0), (dec!(60), dec!(50), dec!(20)), None);
        assert_eq!(billable_weight(&tariff(), &bulky), Weight::new(dec!(10.00)));
    }

    #[test_case(dec!(5.00), Money::ZERO, false; "exactly five kg is exempt")]
    #[test_case(dec!(5.01), Money::new(dec!(2.00)), true; "just over five enters light band")]
    #[test_case(dec!(10.00), Money::new(dec!(2.00)), true; "exactly ten stays light")]
    #[test_case(dec!(10.01), Money::new(dec!(4.00)), true; "just over ten enters heavy band")]
    #[test_case(dec!(50.00), Money::new(dec!(4.00)), true; "exactly fifty stays heavy")]
    #[test_case(dec!(50.01), Money::new(dec!(7.00)), true; "just over fifty is oversize")]
    fn band_boundaries(weight: Decimal, rate: Money, minimum: bool) {
        let band = band_for(&tariff(), Weight::new(weight));
        assert_eq!(band.rate_per_kg, rate);
        assert_eq!(band.applies_minimum, minimum);
    }

    #[test]
    fn minimum_fee_is_additive_not_a_floor() {
        // 40 kg × 4.00 = 160.00 already exceeds the minimum, which is still
        // added on top: 172.00.
        let cart = cart_of(dec!(40), 1, None);
        let fee = shipping_fee(&tariff(), &cart, Region::Southeast, LoyaltyTier::Bronze);
        assert_eq!(fee, Money::new(dec!(172.00)));
    }

    #[test]
    fn exempt_band_charges_nothing() {
        let cart = cart_of(dec!(5.00), 1, None);
        let fee = shipping_fee(&tariff(), &cart, Region::North, LoyaltyTier::Bronze);
        assert_eq!(fee, Money::ZERO);
    }

    #[test]
    fn fragile_surcharge_counts_each_unit() {
        // 3 × 1 kg = 3 kg, exempt band, but 3 × 5.00 surcharge remains.
        let cart = cart_of(dec!(1.0), 3, Some(true));
        let fee = shipping_fee(&tariff(), &cart, Region::Southeast, LoyaltyTier::Bronze);
        assert_eq!(fee, Money::new(dec!(15.00)));
    }

    #[test]
    fn unset_fragility_behaves_like_false() {
        let unset = cart_of(dec!(6.0), 1, None);
        let explicit_false = cart_of(dec!(6.0), 1, Some(false));
        let fee_unset =
            shipping_fee(&tariff(), &unset, Region::Southeast, LoyaltyTier::Bronze);
        let fee_false = shipping_fee(
            &tariff(),
            &explicit_false,
            Region::Southeast,
            LoyaltyTier::Bronze,
        );
        assert_eq!(fee_unset, fee_false);
        assert_eq!(fee_unset, Money::new(dec!(24.00)));
    }

    #[test]
    fn regional_multiplier_applies_before_loyalty() {
        // ((6 × 2.00 + 12.00) + 5.00) × 1.10 = 31.90, halved for silver.
        let cart = cart_of(dec!(6.0), 1, Some(true));
        let fee = shipping_fee(&tariff(), &cart, Region::Northeast, LoyaltyTier::Silver);
        assert_eq!(fee, Money::new(dec!(15.95)));
    }

    #[test]
    fn gold_tier_always_ships_free() {
        let cart = cart_of(dec!(80), 4, Some(true));
        let fee = shipping_fee(&tariff(), &cart, Region::North, LoyaltyTier::Gold);
        assert_eq!(fee, Money::ZERO);
    }

    #[test]
    fn silver_is_exactly_half_of_bronze() {
        let cart = cart_of(dec!(13.7), 2, Some(true));
        for region in [Region::Southeast, Region::CentralWest, Region::North] {
            let bronze = shipping_fee(&tariff(), &cart, region, LoyaltyTier::Bronze);
            let silver = shipping_fee(&tariff(), &cart, region, LoyaltyTier::Silver);
            assert_eq!(silver, bronze * dec!(0.5));
        }
    }

    #[test]
    fn weights_accumulate_across_lines() {
        // 3 kg + 2.5 kg = 5.5 kg total: the band is chosen on the cart total,
        // not per line.
        let cart = Cart::new(vec![
            CartLine::new(product(dec!(3.0), (dec!(1), dec!(1), dec!(1)), None), 1).unwrap(),
            CartLine::new(product(dec!(2.5), (dec!(1), dec!(1), dec!(1)), None), 1).unwrap(),
        ]);
        let fee = shipping_fee(&tariff(), &cart, Region::Southeast, LoyaltyTier::Bronze);
        // 5.5 × 2.00 + 12.00 = 23.00
        assert_eq!(fee, Money::new(dec!(23.00)));
    }
}
