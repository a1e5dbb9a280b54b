//! Customer loyalty tier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::pricing::PricingError;

/// Customer loyalty tier, controlling the shipping override.
///
/// The override is the last step of the shipping computation, applied after
/// the regional multiplier: gold waives the fee entirely, silver halves it,
/// bronze leaves it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoyaltyTier {
    /// Top tier: shipping fully waived.
    Gold,
    /// Mid tier: shipping halved.
    Silver,
    /// Base tier: shipping unchanged.
    Bronze,
}

impl fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gold => write!(f, "GOLD"),
            Self::Silver => write!(f, "SILVER"),
            Self::Bronze => write!(f, "BRONZE"),
        }
    }
}

impl FromStr for LoyaltyTier {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GOLD" => Ok(Self::Gold),
            "SILVER" => Ok(Self::Silver),
            "BRONZE" => Ok(Self::Bronze),
            other => Err(PricingError::InvalidTier {
                code: Some(other.to_string()),
            }),
        }
    }
}
