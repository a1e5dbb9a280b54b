//! Delivery region and its shipping multiplier.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::pricing::PricingError;

/// Delivery region.
///
/// A closed set; each region carries a fixed multiplier applied to the
/// shipping fee before the loyalty override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    /// Base region, multiplier 1.00.
    Southeast,
    /// Multiplier 1.05.
    South,
    /// Multiplier 1.10.
    Northeast,
    /// Multiplier 1.20.
    CentralWest,
    /// Multiplier 1.30.
    North,
}

impl Region {
    /// The shipping fee multiplier for this region.
    #[must_use]
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::Southeast => dec!(1.00),
            Self::South => dec!(1.05),
            Self::Northeast => dec!(1.10),
            Self::CentralWest => dec!(1.20),
            Self::North => dec!(1.30),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Southeast => write!(f, "SOUTHEAST"),
            Self::South => write!(f, "SOUTH"),
            Self::Northeast => write!(f, "NORTHEAST"),
            Self::CentralWest => write!(f, "CENTRAL_WEST"),
            Self::North => write!(f, "NORTH"),
        }
    }
}

impl FromStr for Region {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SOUTHEAST" => Ok(Self::Southeast),
            "SOUTH" => Ok(Self::South),
            "NORTHEAST" => Ok(Self::Northeast),
            "CENTRAL_WEST" => Ok(Self::CentralWest),
            "NORTH" => Ok(Self::North),
            other => Err(PricingError::InvalidRegion {
                code: Some(other.to_string()),
            }),
        }
    }
}
