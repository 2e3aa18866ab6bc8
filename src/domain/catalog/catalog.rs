//! Catalog - read-only lookup from furniture type to its option tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FurnitureType, Money};

use super::{ComponentEntry, HardwareEntry, Lamination, PrimaryMaterial};

/// The shared material tables. Materials are not type-specific.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialCatalog {
    pub primary: Vec<PrimaryMaterial>,
    pub lamination: Vec<Lamination>,
}

impl MaterialCatalog {
    /// Returns the per-square-foot rate for a primary material key.
    ///
    /// Unknown keys price as zero; missing price data is a zero, not an error.
    pub fn primary_rate(&self, key: &str) -> Money {
        self.primary
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.price_per_sqft)
            .unwrap_or(Money::ZERO)
    }

    /// Returns the per-square-foot delta for a lamination key.
    ///
    /// `None`, `"none"`, and unknown keys all resolve to zero.
    pub fn lamination_delta(&self, key: Option<&str>) -> Money {
        match key {
            None | Some("") | Some("none") => Money::ZERO,
            Some(k) => self
                .lamination
                .iter()
                .find(|l| l.key == k)
                .map(|l| l.price_delta)
                .unwrap_or(Money::ZERO),
        }
    }
}

/// Static, per-furniture-type definitions of selectable components,
/// hardware items, and materials.
///
/// Constructed once at process start and passed by reference; lookups
/// never fail. Types without a dedicated table fall back to the `Other`
/// tables.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    components: HashMap<FurnitureType, Vec<ComponentEntry>>,
    hardware: HashMap<FurnitureType, Vec<HardwareEntry>>,
    materials: MaterialCatalog,
}

impl Catalog {
    /// Creates a catalog from explicit tables.
    pub fn new(
        components: HashMap<FurnitureType, Vec<ComponentEntry>>,
        hardware: HashMap<FurnitureType, Vec<HardwareEntry>>,
        materials: MaterialCatalog,
    ) -> Self {
        Self {
            components,
            hardware,
            materials,
        }
    }

    /// Returns the built-in standard catalog.
    pub fn standard() -> &'static Catalog {
        super::standard::standard_catalog()
    }

    /// Loads an alternate catalog from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Returns the component entries for a furniture type.
    ///
    /// Falls back to the generic `Other` entries when the type has no
    /// dedicated table, defaulting to empty.
    pub fn components_for(&self, furniture_type: FurnitureType) -> &[ComponentEntry] {
        self.components
            .get(&furniture_type)
            .or_else(|| self.components.get(&FurnitureType::Other))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the hardware entries for a furniture type, with the same
    /// fallback policy as [`Catalog::components_for`].
    pub fn hardware_for(&self, furniture_type: FurnitureType) -> &[HardwareEntry] {
        self.hardware
            .get(&furniture_type)
            .or_else(|| self.hardware.get(&FurnitureType::Other))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the shared material tables.
    pub fn materials(&self) -> &MaterialCatalog {
        &self.materials
    }
}
