//! Catalog Context
//!
//! Products and the attributes that drive pricing: unit price, category,
//! physical weight, package dimensions, and the fragility flag.

pub mod value_objects;

pub use value_objects::{Dimensions, Product, ProductCategory};
