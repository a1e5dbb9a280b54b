//! Pricing value objects.

pub mod loyalty_tier;
pub mod region;

pub use loyalty_tier::LoyaltyTier;
pub use region::Region;
