//! Surface-area pricing - the default cost formula.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::config::{LaborFactors, PricingConfig};
use crate::domain::catalog::Catalog;
use crate::domain::foundation::{DomainError, Money};
use crate::domain::pricing::{CostBreakdown, ItemConfig, PriceCalculator};

/// Prices a configuration from its bounding-box surface area.
///
/// - Material: surface area × (primary rate + lamination deltas)
/// - Hardware: Σ quantity × catalog unit price
/// - Labor: surface area × configured per-square-foot rate × a
///   type-dependent factor
///
/// Unknown material or hardware keys price as zero rather than failing;
/// missing price data is a zero, not an error.
pub struct SurfaceAreaPricing {
    catalog: Arc<Catalog>,
    labor_rate_per_sqft: f64,
    labor_factors: LaborFactors,
}

impl SurfaceAreaPricing {
    pub fn new(catalog: Arc<Catalog>, config: &PricingConfig) -> Self {
        Self {
            catalog,
            labor_rate_per_sqft: config.labor_rate_per_sqft,
            labor_factors: config.labor_factors.clone(),
        }
    }

    fn hardware_cost(&self, config: &ItemConfig) -> Money {
        let entries = self.catalog.hardware_for(config.furniture_type);
        config
            .hardware
            .iter()
            .filter_map(|(key, qty)| {
                entries
                    .iter()
                    .find(|e| &e.key == key)
                    .map(|e| e.unit_price.times(*qty))
            })
            .sum()
    }
}

#[async_trait]
impl PriceCalculator for SurfaceAreaPricing {
    async fn calculate(&self, config: &ItemConfig) -> Result<CostBreakdown, DomainError> {
        let area = config.dimensions.surface_area();
        let materials = self.catalog.materials();

        let rate = materials.primary_rate(&config.materials.primary)
            + materials.lamination_delta(config.materials.inner_lamination.as_deref())
            + materials.lamination_delta(config.materials.outer_lamination.as_deref());

        let material_cost = Money::from_f64_rounded(area * rate.as_f64());
        let hardware_cost = self.hardware_cost(config);
        let labor_cost = Money::from_f64_rounded(
            area * self.labor_rate_per_sqft * self.labor_factors.factor_for(config.furniture_type),
        );

        let costs = CostBreakdown::new(material_cost, hardware_cost, labor_cost);
        debug!(
            furniture_type = %config.furniture_type,
            area_sqft = area,
            total = %costs.total(),
            "priced configuration"
        );
        Ok(costs)
    }
}
