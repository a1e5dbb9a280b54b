//! Checkout request and receipt DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::cart::Cart;
use crate::domain::pricing::{LoyaltyTier, PricingError, Region};
use crate::domain::shared::{CustomerId, Money, TransactionId};

/// A checkout request as it arrives at the boundary.
///
/// Region and tier come in as optional string codes; a missing or unknown
/// code is rejected with `InvalidRegion` / `InvalidTier` before any pricing
/// runs. This is where the "non-null" contract of the calculation lives in a
/// language without nulls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// The purchasing customer.
    pub customer_id: CustomerId,
    /// The cart to price and fulfill.
    pub cart: Cart,
    /// Delivery region code (e.g. "SOUTHEAST").
    pub region: Option<String>,
    /// Loyalty tier code (e.g. "GOLD").
    pub loyalty_tier: Option<String>,
}

impl CheckoutRequest {
    /// Parse the region code.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidRegion`] when missing or unknown.
    pub fn parse_region(&self) -> Result<Region, PricingError> {
        self.region
            .as_deref()
            .ok_or(PricingError::InvalidRegion { code: None })?
            .parse()
    }

    /// Parse the loyalty tier code.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidTier`] when missing or unknown.
    pub fn parse_tier(&self) -> Result<LoyaltyTier, PricingError> {
        self.loyalty_tier
            .as_deref()
            .ok_or(PricingError::InvalidTier { code: None })?
            .parse()
    }
}

/// Receipt for a successfully finalized purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    /// Payment gateway transaction id.
    pub transaction_id: TransactionId,
    /// Final charged total.
    pub total: Money,
    /// When the purchase completed.
    pub completed_at: DateTime<Utc>,
    /// Human-readable confirmation.
    pub message: String,
}
