//! Data transfer objects for API boundaries.

pub mod checkout_dto;

pub use checkout_dto::{CheckoutRequest, PurchaseReceipt};
