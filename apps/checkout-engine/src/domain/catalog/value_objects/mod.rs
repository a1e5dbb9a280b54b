//! Catalog value objects.

pub mod category;
pub mod dimensions;
pub mod product;

pub use category::ProductCategory;
pub use dimensions::Dimensions;
pub use product::Product;
