//! Pricing domain services.

pub mod cost_calculator;
pub mod discount;
pub mod shipping;

pub use cost_calculator::CostCalculator;
