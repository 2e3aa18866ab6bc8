//! Material selector - primary material plus optional laminations.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::MaterialCatalog;
use crate::domain::foundation::Money;

/// The material choice carried on a finalized furniture item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialChoice {
    pub primary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_lamination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_lamination: Option<String>,
}

/// The three material fields a caller can set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialField {
    Primary,
    InnerLamination,
    OuterLamination,
}

/// Holds the material choices for the item under configuration.
///
/// `set` replaces unconditionally; values are not validated against the
/// catalog beyond pricing, so an unrecognized material is accepted but
/// contributes zero to the rate.
#[derive(Debug, Clone)]
pub struct MaterialSelector {
    materials: MaterialCatalog,
    primary: String,
    inner_lamination: Option<String>,
    outer_lamination: Option<String>,
}

impl MaterialSelector {
    /// Creates an empty selector against the shared material tables.
    pub fn new(materials: MaterialCatalog) -> Self {
        Self {
            materials,
            primary: String::new(),
            inner_lamination: None,
            outer_lamination: None,
        }
    }

    /// Creates a selector seeded from a prior choice.
    pub fn with_initial(materials: MaterialCatalog, prior: &MaterialChoice) -> Self {
        Self {
            materials,
            primary: prior.primary.clone(),
            inner_lamination: prior.inner_lamination.clone(),
            outer_lamination: prior.outer_lamination.clone(),
        }
    }

    /// Replaces one field. Empty lamination values clear the field.
    pub fn set(&mut self, field: MaterialField, value: &str) {
        let lamination = |v: &str| {
            if v.is_empty() {
                None
            } else {
                Some(v.to_string())
            }
        };
        match field {
            MaterialField::Primary => self.primary = value.to_string(),
            MaterialField::InnerLamination => self.inner_lamination = lamination(value),
            MaterialField::OuterLamination => self.outer_lamination = lamination(value),
        }
    }

    /// Returns the primary material key, empty until chosen.
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Completion gate: a primary material has been chosen.
    pub fn is_complete(&self) -> bool {
        !self.primary.is_empty()
    }

    /// Estimated per-square-foot rate: primary price plus lamination
    /// deltas. Unrecognized keys and `"none"` contribute zero.
    pub fn estimated_rate(&self) -> Money {
        self.materials.primary_rate(&self.primary)
            + self
                .materials
                .lamination_delta(self.inner_lamination.as_deref())
            + self
                .materials
                .lamination_delta(self.outer_lamination.as_deref())
    }

    /// Returns the current choice, or `None` before a primary is set.
    pub fn choice(&self) -> Option<MaterialChoice> {
        if self.primary.is_empty() {
            return None;
        }
        Some(MaterialChoice {
            primary: self.primary.clone(),
            inner_lamination: self.inner_lamination.clone(),
            outer_lamination: self.outer_lamination.clone(),
        })
    }
}
