//! Pricing errors.

use std::fmt;

/// Argument-validation errors for the cost calculation.
///
/// There are no transient or recoverable conditions inside the pure
/// calculation; it either produces a total or rejects its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Cart missing or empty.
    InvalidCart,

    /// Delivery region missing or unrecognized.
    InvalidRegion {
        /// The offending region code, if one was supplied.
        code: Option<String>,
    },

    /// Loyalty tier missing or unrecognized.
    InvalidTier {
        /// The offending tier code, if one was supplied.
        code: Option<String>,
    },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCart => write!(f, "Cart must contain at least one line"),
            Self::InvalidRegion { code: Some(code) } => {
                write!(f, "Unknown delivery region: {code}")
            }
            Self::InvalidRegion { code: None } => write!(f, "Delivery region is required"),
            Self::InvalidTier { code: Some(code) } => {
                write!(f, "Unknown loyalty tier: {code}")
            }
            Self::InvalidTier { code: None } => write!(f, "Loyalty tier is required"),
        }
    }
}

impl std::error::Error for PricingError {}
