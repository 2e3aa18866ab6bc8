//! Pricing configuration

use serde::Deserialize;

use crate::domain::foundation::FurnitureType;

use super::error::ConfigValidationError;

/// Pricing knobs for the surface-area calculator and tax computation.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// GST fraction applied to the quotation subtotal.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,

    /// Base labor rate per square foot of surface area, in rupees.
    #[serde(default = "default_labor_rate")]
    pub labor_rate_per_sqft: f64,

    /// Per-furniture-type labor effort multipliers.
    #[serde(default)]
    pub labor_factors: LaborFactors,
}

/// Labor effort multipliers by furniture type.
///
/// Kitchens carry the most fitting work, shoe racks the least.
#[derive(Debug, Clone, Deserialize)]
pub struct LaborFactors {
    #[serde(default = "default_wardrobe_factor")]
    pub wardrobe: f64,
    #[serde(default = "default_kitchen_factor")]
    pub kitchen: f64,
    #[serde(default = "default_tv_unit_factor")]
    pub tv_unit: f64,
    #[serde(default = "default_study_table_factor")]
    pub study_table: f64,
    #[serde(default = "default_shoe_rack_factor")]
    pub shoe_rack: f64,
    #[serde(default = "default_other_factor")]
    pub other: f64,
}

fn default_tax_rate() -> f64 {
    0.18
}

fn default_labor_rate() -> f64 {
    85.0
}

fn default_wardrobe_factor() -> f64 {
    1.2
}

fn default_kitchen_factor() -> f64 {
    1.5
}

fn default_tv_unit_factor() -> f64 {
    1.0
}

fn default_study_table_factor() -> f64 {
    0.9
}

fn default_shoe_rack_factor() -> f64 {
    0.8
}

fn default_other_factor() -> f64 {
    1.0
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            labor_rate_per_sqft: default_labor_rate(),
            labor_factors: LaborFactors::default(),
        }
    }
}

impl Default for LaborFactors {
    fn default() -> Self {
        Self {
            wardrobe: default_wardrobe_factor(),
            kitchen: default_kitchen_factor(),
            tv_unit: default_tv_unit_factor(),
            study_table: default_study_table_factor(),
            shoe_rack: default_shoe_rack_factor(),
            other: default_other_factor(),
        }
    }
}

impl LaborFactors {
    /// Multiplier for the given furniture type.
    pub fn factor_for(&self, furniture_type: FurnitureType) -> f64 {
        match furniture_type {
            FurnitureType::Wardrobe => self.wardrobe,
            FurnitureType::Kitchen => self.kitchen,
            FurnitureType::TvUnit => self.tv_unit,
            FurnitureType::StudyTable => self.study_table,
            FurnitureType::ShoeRack => self.shoe_rack,
            FurnitureType::Other => self.other,
        }
    }

    fn validate(&self) -> Result<(), ConfigValidationError> {
        let named = [
            ("wardrobe", self.wardrobe),
            ("kitchen", self.kitchen),
            ("tv_unit", self.tv_unit),
            ("study_table", self.study_table),
            ("shoe_rack", self.shoe_rack),
            ("other", self.other),
        ];
        for (name, factor) in named {
            if factor <= 0.0 || !factor.is_finite() {
                return Err(ConfigValidationError::InvalidLaborFactor(name));
            }
        }
        Ok(())
    }
}

impl PricingConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&self.tax_rate) || !self.tax_rate.is_finite() {
            return Err(ConfigValidationError::InvalidTaxRate);
        }
        if self.labor_rate_per_sqft <= 0.0 || !self.labor_rate_per_sqft.is_finite() {
            return Err(ConfigValidationError::InvalidLaborRate);
        }
        self.labor_factors.validate()
    }
}
