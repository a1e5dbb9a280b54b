//! Package dimensions for volumetric weight.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::DomainError;

/// Package dimensions in centimeters.
///
/// Used only to derive volumetric weight (length × width × height / divisor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Package length in centimeters.
    pub length_cm: Decimal,
    /// Package width in centimeters.
    pub width_cm: Decimal,
    /// Package height in centimeters.
    pub height_cm: Decimal,
}

impl Dimensions {
    /// Create dimensions, validating that no side is negative.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is negative.
    pub fn new(
        length_cm: Decimal,
        width_cm: Decimal,
        height_cm: Decimal,
    ) -> Result<Self, DomainError> {
        for (field, value) in [
            ("length_cm", length_cm),
            ("width_cm", width_cm),
            ("height_cm", height_cm),
        ] {
            if value < Decimal::ZERO {
                return Err(DomainError::InvalidValue {
                    field: field.to_string(),
                    message: "Dimension cannot be negative".to_string(),
                });
            }
        }
        Ok(Self {
            length_cm,
            width_cm,
            height_cm,
        })
    }

    /// The raw volume in cubic centimeters.
    #[must_use]
    pub fn volume(&self) -> Decimal {
        self.length_cm * self.width_cm * self.height_cm
    }
}
