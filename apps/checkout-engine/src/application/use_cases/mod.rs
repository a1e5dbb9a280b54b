//! Application use cases.

pub mod place_order;

pub use place_order::{CheckoutError, PlaceOrderUseCase};
