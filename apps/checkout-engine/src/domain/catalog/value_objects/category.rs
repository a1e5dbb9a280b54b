//! Product category (closed set).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category.
///
/// The quantity discount groups cart lines by this key before applying bulk
/// rates, so two lines of the same category pool their quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    /// Consumer electronics.
    Electronics,
    /// Clothing and accessories.
    Apparel,
    /// Books and printed media.
    Books,
    /// Furniture and home goods.
    Home,
    /// Toys and games.
    Toys,
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Electronics => write!(f, "ELECTRONICS"),
            Self::Apparel => write!(f, "APPAREL"),
            Self::Books => write!(f, "BOOKS"),
            Self::Home => write!(f, "HOME"),
            Self::Toys => write!(f, "TOYS"),
        }
    }
}
