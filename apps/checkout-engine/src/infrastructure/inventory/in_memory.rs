//! In-memory inventory adapter.
//!
//! Returns simulated stock answers without any external service. Useful for
//! tests and local runs that don't require real inventory connectivity.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::application::ports::{Availability, InventoryError, InventoryPort, LineQuantity};
use crate::domain::shared::ProductId;

/// In-memory inventory adapter backed by a stock map.
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    stock: RwLock<HashMap<ProductId, u32>>,
}

impl InMemoryInventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inventory pre-loaded with stock levels.
    #[must_use]
    pub fn with_stock(levels: impl IntoIterator<Item = (ProductId, u32)>) -> Self {
        Self {
            stock: RwLock::new(levels.into_iter().collect()),
        }
    }

    /// Set the stock level for a product.
    pub fn set_stock(&self, product_id: ProductId, quantity: u32) {
        self.stock
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(product_id, quantity);
    }

    /// Current stock level for a product.
    #[must_use]
    pub fn stock_of(&self, product_id: &ProductId) -> u32 {
        self.stock
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(product_id)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl InventoryPort for InMemoryInventory {
    async fn check_availability(
        &self,
        items: &[LineQuantity],
    ) -> Result<Availability, InventoryError> {
        let stock = self.stock.read().unwrap_or_else(PoisonError::into_inner);

        let unavailable: Vec<ProductId> = items
            .iter()
            .filter(|item| {
                stock.get(&item.product_id).copied().unwrap_or(0) < item.quantity
            })
            .map(|item| item.product_id.clone())
            .collect();

        if unavailable.is_empty() {
            Ok(Availability::all_available())
        } else {
            Ok(Availability::missing(unavailable))
        }
    }

    async fn debit_stock(&self, items: &[LineQuantity]) -> Result<bool, InventoryError> {
        let mut stock = self.stock.write().unwrap_or_else(PoisonError::into_inner);

        // All-or-nothing: verify every line before mutating any level.
        let sufficient = items
            .iter()
            .all(|item| stock.get(&item.product_id).copied().unwrap_or(0) >= item.quantity);
        if !sufficient {
            return Ok(false);
        }

        for item in items {
            if let Some(level) = stock.get_mut(&item.product_id) {
                *level -= item.quantity;
            }
        }
        Ok(true)
    }
}
