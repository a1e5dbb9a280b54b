//! Product value object.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::value_objects::{Dimensions, ProductCategory};
use crate::domain::shared::{DomainError, Money, ProductId, Weight};

/// A catalog product with the attributes pricing needs.
///
/// The fragility flag is tri-state: `Some(true)` adds the per-unit fragile
/// surcharge, while `Some(false)` and `None` (unknown) both add nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Discount-grouping category.
    pub category: ProductCategory,
    /// Physical weight in kilograms.
    pub physical_weight: Weight,
    /// Package dimensions, used only for volumetric weight.
    pub dimensions: Dimensions,
    /// Fragility flag; `None` means unknown and behaves like `Some(false)`.
    pub fragile: Option<bool>,
}

impl Product {
    /// Create a product, validating price and weight.
    ///
    /// # Errors
    ///
    /// Returns an error if the price or physical weight is negative.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: ProductCategory,
        physical_weight: Weight,
        dimensions: Dimensions,
        fragile: Option<bool>,
    ) -> Result<Self, DomainError> {
        price.validate_as_price()?;
        physical_weight.validate_as_physical()?;
        Ok(Self {
            id,
            name: name.into(),
            price,
            category,
            physical_weight,
            dimensions,
            fragile,
        })
    }

    /// Whether this product is explicitly flagged fragile.
    ///
    /// Only an explicit `true` counts; an unset flag is treated as not
    /// fragile.
    #[must_use]
    pub fn is_fragile(&self) -> bool {
        self.fragile == Some(true)
    }
}
