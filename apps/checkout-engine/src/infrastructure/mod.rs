//! Infrastructure Layer
//!
//! Adapters implementing the application ports. Only in-memory adapters live
//! here; wire protocols to real stock and payment services belong to the
//! hosting system.

pub mod inventory;
pub mod payment;

pub use inventory::InMemoryInventory;
pub use payment::InMemoryPaymentGateway;
