//! Cost calculator - validates inputs and composes the two engines.

use crate::domain::cart::Cart;
use crate::domain::pricing::services::{discount, shipping};
use crate::domain::pricing::{LoyaltyTier, PricingConfig, PricingError, Region};
use crate::domain::shared::Money;

/// Cost calculator - the single entry point for order totals.
///
/// `total = discounted_subtotal + shipping_fee`, rounded half-up to 2 dp.
/// That final rounding and the volumetric-weight rounding inside the shipping
/// engine are the only two rounding points in the computation.
pub struct CostCalculator {
    config: PricingConfig,
}

impl CostCalculator {
    /// Create a cost calculator with the given configuration.
    #[must_use]
    pub const fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Create with the default (production) configuration.
    #[must_use]
    pub fn with_default_config() -> Self {
        Self::new(PricingConfig::default())
    }

    /// The active pricing configuration.
    #[must_use]
    pub const fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Compute the final total a customer owes.
    ///
    /// Fails fast on an empty cart with no partial computation. Region and
    /// tier are owned enums here; their absence is rejected at the DTO
    /// boundary with `InvalidRegion` / `InvalidTier`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidCart`] if the cart has no lines.
    pub fn compute_total(
        &self,
        cart: &Cart,
        region: Region,
        tier: LoyaltyTier,
    ) -> Result<Money, PricingError> {
        if cart.is_empty() {
            return Err(PricingError::InvalidCart);
        }

        let subtotal = discount::discounted_subtotal(&self.config.discounts, cart);
        let shipping = shipping::shipping_fee(&self.config.shipping, cart, region, tier);

        Ok((subtotal + shipping).round_half_up())
    }
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::with_default_config()
    }
}
