//! Pricing adapters - implementations of the PriceCalculator strategy.

mod flat_rate;
mod surface_area;

pub use flat_rate::FlatRatePricing;
pub use surface_area::SurfaceAreaPricing;
