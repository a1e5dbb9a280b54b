//! Cart Context
//!
//! The shopping cart: an ordered collection of lines, each pairing a product
//! with a positive quantity.

pub mod value_objects;

pub use value_objects::{Cart, CartLine};
