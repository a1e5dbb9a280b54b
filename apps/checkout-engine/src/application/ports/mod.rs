//! Application ports (driven side).

pub mod inventory_port;
pub mod payment_port;

pub use inventory_port::{Availability, InventoryError, InventoryPort, LineQuantity};
pub use payment_port::{PaymentAuthorization, PaymentError, PaymentPort};
