//! Pricing module - cost breakdown value objects.

mod breakdown;
mod calculator;
mod item_config;

pub use breakdown::CostBreakdown;
pub use calculator::PriceCalculator;
pub use item_config::ItemConfig;
