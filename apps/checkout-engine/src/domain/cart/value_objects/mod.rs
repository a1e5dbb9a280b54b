//! Cart value objects.

pub mod cart;
pub mod cart_line;

pub use cart::Cart;
pub use cart_line::CartLine;
