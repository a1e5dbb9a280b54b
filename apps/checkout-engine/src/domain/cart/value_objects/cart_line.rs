//! A single cart line.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Product;
use crate::domain::shared::{DomainError, Money};

/// One product and the quantity being purchased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product being purchased.
    pub product: Product,
    /// Units of the product; always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Create a cart line with a positive quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is zero.
    pub fn new(product: Product, quantity: u32) -> Result<Self, DomainError> {
        if quantity == 0 {
            return Err(DomainError::InvalidValue {
                field: "quantity".to_string(),
                message: "Cart line quantity must be positive".to_string(),
            });
        }
        Ok(Self { product, quantity })
    }

    /// Undiscounted line total: unit price × quantity.
    #[must_use]
    pub fn raw_total(&self) -> Money {
        self.product.price * self.quantity
    }
}
