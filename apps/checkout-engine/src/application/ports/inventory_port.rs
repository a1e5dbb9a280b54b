//! Inventory Port (Driven Port)
//!
//! Interface for the external stock service: availability checks before
//! pricing, and the stock debit after payment is authorized.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::cart::Cart;
use crate::domain::shared::ProductId;

/// A product id and the quantity requested of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineQuantity {
    /// Product identifier.
    pub product_id: ProductId,
    /// Units requested.
    pub quantity: u32,
}

impl LineQuantity {
    /// Project a cart onto the (id, quantity) pairs the stock service speaks.
    #[must_use]
    pub fn from_cart(cart: &Cart) -> Vec<Self> {
        cart.lines()
            .iter()
            .map(|line| Self {
                product_id: line.product.id.clone(),
                quantity: line.quantity,
            })
            .collect()
    }
}

/// Result of an availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Whether every requested line can be fulfilled.
    pub available: bool,
    /// Products that could not be fulfilled at the requested quantity.
    pub unavailable: Vec<ProductId>,
}

impl Availability {
    /// All requested lines can be fulfilled.
    #[must_use]
    pub const fn all_available() -> Self {
        Self {
            available: true,
            unavailable: Vec::new(),
        }
    }

    /// Some lines cannot be fulfilled.
    #[must_use]
    pub fn missing(unavailable: Vec<ProductId>) -> Self {
        Self {
            available: false,
            unavailable,
        }
    }
}

/// Errors from the inventory service itself (not business outcomes).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// The service could not be reached or failed internally.
    #[error("Inventory service unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },
}

/// Port for the external stock service.
#[async_trait]
pub trait InventoryPort: Send + Sync {
    /// Check whether every line can be fulfilled.
    async fn check_availability(
        &self,
        items: &[LineQuantity],
    ) -> Result<Availability, InventoryError>;

    /// Debit stock for the given lines. Returns `false` when the debit could
    /// not be applied (the caller must compensate any prior payment).
    async fn debit_stock(&self, items: &[LineQuantity]) -> Result<bool, InventoryError>;
}
