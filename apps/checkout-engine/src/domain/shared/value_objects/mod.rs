//! Shared value objects.

pub mod identifiers;
pub mod money;
pub mod weight;

pub use identifiers::{CustomerId, ProductId, TransactionId};
pub use money::Money;
pub use weight::Weight;
