//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure
//! dependencies. This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic
//!
//! # Bounded Contexts
//!
//! - [`catalog`]: Products and their shipping-relevant attributes
//! - [`cart`]: Shopping cart composition
//! - [`pricing`]: Order cost calculation (discounts, shipping, final total)

pub mod cart;
pub mod catalog;
pub mod pricing;
pub mod shared;
