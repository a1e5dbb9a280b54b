//! Weight value object for shipping calculations.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use crate::domain::shared::DomainError;

/// A weight in kilograms.
///
/// Represented as a Decimal so tariff-band boundaries (exactly 5.00 kg is
/// exempt, 5.01 kg is not) compare exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(Decimal);

impl Weight {
    /// Create a new Weight from a Decimal number of kilograms.
    #[must_use]
    pub const fn new(kilograms: Decimal) -> Self {
        Self(kilograms)
    }

    /// Zero weight.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Get the inner Decimal value in kilograms.
    #[must_use]
    pub const fn kilograms(&self) -> Decimal {
        self.0
    }

    /// Returns true if this weight is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// The greater of two weights.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Round to 2 decimal places, half-up.
    ///
    /// Used for volumetric weight, the first of the two contract rounding
    /// points.
    #[must_use]
    pub fn round_half_up(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Validate that this weight can describe a physical product.
    ///
    /// # Errors
    ///
    /// Returns an error if the weight is negative.
    pub fn validate_as_physical(&self) -> Result<(), DomainError> {
        if self.0 < Decimal::ZERO {
            return Err(DomainError::InvalidValue {
                field: "weight".to_string(),
                message: "Physical weight cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kg", self.0)
    }
}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Weight {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Weight {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Weight> for Decimal {
    fn from(value: Weight) -> Self {
        value.0
    }
}
