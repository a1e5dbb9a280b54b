//! Pricing configuration.
//!
//! All tariff and discount constants live here so the engines stay pure
//! functions over a config. The `Default` impls encode the production rates.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, Weight};

/// Quantity and cart-value discount schedule.
///
/// Quantity thresholds are inclusive (highest wins); cart-value thresholds are
/// strict greater-than, so a subtotal of exactly 500.00 earns no discount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountSchedule {
    /// Inclusive quantity threshold for the small bulk rate.
    pub bulk_small_qty: u32,
    /// Rate at the small threshold.
    pub bulk_small_rate: Decimal,
    /// Inclusive quantity threshold for the medium bulk rate.
    pub bulk_medium_qty: u32,
    /// Rate at the medium threshold.
    pub bulk_medium_rate: Decimal,
    /// Inclusive quantity threshold for the large bulk rate.
    pub bulk_large_qty: u32,
    /// Rate at the large threshold.
    pub bulk_large_rate: Decimal,
    /// Exclusive subtotal threshold for the mid value discount.
    pub value_mid_threshold: Money,
    /// Rate above the mid threshold.
    pub value_mid_rate: Decimal,
    /// Exclusive subtotal threshold for the high value discount.
    pub value_high_threshold: Money,
    /// Rate above the high threshold.
    pub value_high_rate: Decimal,
}

impl Default for DiscountSchedule {
    fn default() -> Self {
        Self {
            bulk_small_qty: 3,
            bulk_small_rate: dec!(0.05),
            bulk_medium_qty: 5,
            bulk_medium_rate: dec!(0.10),
            bulk_large_qty: 8,
            bulk_large_rate: dec!(0.15),
            value_mid_threshold: Money::new(dec!(500)),
            value_mid_rate: dec!(0.10),
            value_high_threshold: Money::new(dec!(1000)),
            value_high_rate: dec!(0.20),
        }
    }
}

/// Shipping tariff: weight bands, surcharges, volumetric divisor.
///
/// Band upper bounds are inclusive (≤ 5 kg is exempt; 5.01 kg enters the
/// light band). The minimum fee is additive on every non-exempt band, not a
/// floor on the proportional fee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingTariff {
    /// Divisor for volumetric weight (cm³ per kg).
    pub volumetric_divisor: Decimal,
    /// Per-unit surcharge for products explicitly flagged fragile.
    pub fragile_surcharge_per_unit: Money,
    /// Flat minimum fee added once per order on non-exempt bands.
    pub minimum_fee: Money,
    /// Inclusive upper bound of the exempt band.
    pub exempt_limit: Weight,
    /// Inclusive upper bound of the light band.
    pub light_limit: Weight,
    /// Inclusive upper bound of the heavy band.
    pub heavy_limit: Weight,
    /// Per-kg rate in the light band.
    pub light_rate_per_kg: Money,
    /// Per-kg rate in the heavy band.
    pub heavy_rate_per_kg: Money,
    /// Per-kg rate above the heavy band.
    pub oversize_rate_per_kg: Money,
}

impl Default for ShippingTariff {
    fn default() -> Self {
        Self {
            volumetric_divisor: dec!(6000),
            fragile_surcharge_per_unit: Money::new(dec!(5.00)),
            minimum_fee: Money::new(dec!(12.00)),
            exempt_limit: Weight::new(dec!(5)),
            light_limit: Weight::new(dec!(10)),
            heavy_limit: Weight::new(dec!(50)),
            light_rate_per_kg: Money::new(dec!(2.00)),
            heavy_rate_per_kg: Money::new(dec!(4.00)),
            oversize_rate_per_kg: Money::new(dec!(7.00)),
        }
    }
}

/// Complete pricing configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Discount schedule.
    pub discounts: DiscountSchedule,
    /// Shipping tariff.
    pub shipping: ShippingTariff,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_matches_production_rates() {
        let schedule = DiscountSchedule::default();
        assert_eq!(schedule.bulk_large_qty, 8);
        assert_eq!(schedule.bulk_large_rate, dec!(0.15));
        assert_eq!(schedule.value_high_threshold, Money::new(dec!(1000)));
    }

    #[test]
    fn default_tariff_matches_production_rates() {
        let tariff = ShippingTariff::default();
        assert_eq!(tariff.volumetric_divisor, dec!(6000));
        assert_eq!(tariff.minimum_fee, Money::new(dec!(12.00)));
        assert_eq!(tariff.oversize_rate_per_kg, Money::new(dec!(7.00)));
    }

    #[test]
    fn config_serde_roundtrip() {
        let config = PricingConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: PricingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.shipping.minimum_fee, config.shipping.minimum_fee);
        assert_eq!(parsed.discounts.bulk_small_qty, config.discounts.bulk_small_qty);
    }
}
