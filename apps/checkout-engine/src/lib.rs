// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Checkout Engine - Rust Core Library
//!
//! Deterministic order cost calculation and purchase orchestration for the
//! Mercado storefront.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (value objects, domain services)
//!   - `catalog`: Products, categories, dimensions, fragility
//!   - `cart`: Cart lines and the shopping cart
//!   - `pricing`: Discount engine, shipping engine, cost calculator
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`InventoryPort`, `PaymentPort`)
//!   - `use_cases`: `PlaceOrder` (stock check → pricing → payment → stock debit)
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `inventory`: In-memory stock adapter
//!   - `payment`: In-memory payment gateway adapter
//!
//! The pricing core is a pure, synchronous function of its inputs: no I/O, no
//! shared state, no ordering concerns between calls. All monetary and weight
//! arithmetic is exact decimal; rounding happens at exactly two points
//! (volumetric weight, final total), both half-up.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::cart::{Cart, CartLine};
pub use domain::catalog::{Dimensions, Product, ProductCategory};
pub use domain::pricing::{
    CostCalculator, LoyaltyTier, PricingConfig, PricingError, Region,
};
pub use domain::shared::{CustomerId, Money, ProductId, TransactionId, Weight};

// Application re-exports
pub use application::dto::{CheckoutRequest, PurchaseReceipt};
pub use application::use_cases::{CheckoutError, PlaceOrderUseCase};

// Infrastructure re-exports
pub use infrastructure::{InMemoryInventory, InMemoryPaymentGateway};
