//! ItemConfig - the complete configuration handed to a price calculator.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::FurnitureType;
use crate::domain::selection::{
    ComponentSelection, Dimensions, HardwareSelection, MaterialChoice,
};

/// A fully-configured furniture item, ready for pricing.
///
/// Assembled by the workflow once all four steps are satisfied; a partial
/// configuration never reaches a calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub furniture_type: FurnitureType,
    pub dimensions: Dimensions,
    pub components: ComponentSelection,
    pub materials: MaterialChoice,
    pub hardware: HardwareSelection,
}
