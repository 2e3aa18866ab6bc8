//! Flat-rate pricing - input-independent placeholder figures.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Money};
use crate::domain::pricing::{CostBreakdown, ItemConfig, PriceCalculator};

/// Returns the same breakdown for every configuration.
///
/// Mirrors the legacy estimator's fixed figures (₹15,000 material /
/// ₹5,000 hardware / ₹8,000 labor). Deliberately non-responsive to
/// input; use [`super::SurfaceAreaPricing`] for real quotes. Kept as a
/// deterministic stand-in for tests and offline demos.
#[derive(Debug, Clone, Default)]
pub struct FlatRatePricing;

impl FlatRatePricing {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PriceCalculator for FlatRatePricing {
    async fn calculate(&self, _config: &ItemConfig) -> Result<CostBreakdown, DomainError> {
        Ok(CostBreakdown::new(
            Money::from_rupees(15_000),
            Money::from_rupees(5_000),
            Money::from_rupees(8_000),
        ))
    }
}
