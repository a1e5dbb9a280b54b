//! Pricing Context
//!
//! The order cost calculation engine: quantity and cart-value discounts,
//! multi-factor shipping (billable weight bands, fragility surcharge,
//! regional multiplier, loyalty override), and the cost calculator that
//! composes them into a final rounded total.
//!
//! Everything here is a pure function of its inputs. The only two rounding
//! points in the whole computation are volumetric weight (2 dp, half-up) and
//! the final total (2 dp, half-up); all other arithmetic carries full decimal
//! precision.

pub mod config;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use config::{DiscountSchedule, PricingConfig, ShippingTariff};
pub use errors::PricingError;
pub use services::CostCalculator;
pub use value_objects::{LoyaltyTier, Region};
