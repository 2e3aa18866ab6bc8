//! FurnitureItem - one finalized, priced furniture configuration.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FurnitureType, ItemId};
use crate::domain::pricing::{CostBreakdown, ItemConfig};
use crate::domain::selection::{ComponentSelection, Dimensions, HardwareSelection, MaterialChoice};

/// A finalized furniture configuration with its cost breakdown.
///
/// Created only once all four workflow steps are complete; immutable
/// thereafter except for removal from a quotation. The identifier is
/// assigned at aggregation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    pub furniture_type: FurnitureType,
    pub dimensions: Dimensions,
    pub components: ComponentSelection,
    pub materials: MaterialChoice,
    pub hardware: HardwareSelection,
    pub costs: CostBreakdown,
}

impl FurnitureItem {
    /// Builds an item from a priced configuration. No id yet; the
    /// aggregator assigns one.
    pub fn from_config(config: ItemConfig, costs: CostBreakdown) -> Self {
        Self {
            id: None,
            furniture_type: config.furniture_type,
            dimensions: config.dimensions,
            components: config.components,
            materials: config.materials,
            hardware: config.hardware,
            costs,
        }
    }
}
