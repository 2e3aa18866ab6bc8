//! Dimension entry and validation.
//!
//! Raw numeric input parses permissively: an unparseable field reads as
//! zero rather than rejecting the whole form. Validation succeeds only
//! when the three main dimensions are strictly positive.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Default skirting height in inches when the field is left blank.
pub const DEFAULT_SKIRTING_HEIGHT: f64 = 4.0;
/// Default door thickness in inches when the field is left blank.
pub const DEFAULT_DOOR_THICKNESS: f64 = 0.75;
/// Default back panel thickness in inches when the field is left blank.
pub const DEFAULT_BACK_THICKNESS: f64 = 0.5;

/// The six dimension fields a caller can fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionField {
    Width,
    Height,
    Depth,
    SkirtingHeight,
    DoorThickness,
    BackThickness,
}

/// Raw dimension input as entered, before validation.
///
/// Main dimensions are in feet, auxiliary values in inches, matching the
/// studio's measurement conventions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DimensionsForm {
    pub x: String,
    pub y: String,
    pub z: String,
    pub skirting_height: Option<String>,
    pub door_thickness: Option<String>,
    pub back_thickness: Option<String>,
}

impl DimensionsForm {
    /// Sets one field from raw input.
    pub fn set(&mut self, field: DimensionField, raw: impl Into<String>) {
        let raw = raw.into();
        match field {
            DimensionField::Width => self.x = raw,
            DimensionField::Height => self.y = raw,
            DimensionField::Depth => self.z = raw,
            DimensionField::SkirtingHeight => self.skirting_height = Some(raw),
            DimensionField::DoorThickness => self.door_thickness = Some(raw),
            DimensionField::BackThickness => self.back_thickness = Some(raw),
        }
    }

    /// Validates the form into an immutable [`Dimensions`] value.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` naming each of `x`, `y`, `z` that is not
    /// strictly positive.
    pub fn validate(&self) -> Result<Dimensions, DomainError> {
        let x = parse_numeric(&self.x);
        let y = parse_numeric(&self.y);
        let z = parse_numeric(&self.z);

        let mut failed = Vec::new();
        if x <= 0.0 {
            failed.push("x");
        }
        if y <= 0.0 {
            failed.push("y");
        }
        if z <= 0.0 {
            failed.push("z");
        }
        if !failed.is_empty() {
            let fields = failed.join(", ");
            return Err(DomainError::new(
                ErrorCode::InvalidDimensions,
                format!("Dimensions must be positive: {}", fields),
            )
            .with_detail("fields", fields));
        }

        Ok(Dimensions {
            x,
            y,
            z,
            skirting_height: parse_auxiliary(&self.skirting_height, DEFAULT_SKIRTING_HEIGHT),
            door_thickness: parse_auxiliary(&self.door_thickness, DEFAULT_DOOR_THICKNESS),
            back_thickness: parse_auxiliary(&self.back_thickness, DEFAULT_BACK_THICKNESS),
        })
    }

    /// Returns true if the form currently validates.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

fn parse_numeric(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Blank auxiliary fields take the default; garbage reads as zero and
/// negatives clamp to zero.
fn parse_auxiliary(raw: &Option<String>, default: f64) -> f64 {
    match raw {
        None => default,
        Some(s) if s.trim().is_empty() => default,
        Some(s) => parse_numeric(s).max(0.0),
    }
}

/// Validated physical dimensions of a furniture item.
///
/// Immutable once the item is finalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in feet.
    pub x: f64,
    /// Height in feet.
    pub y: f64,
    /// Depth in feet.
    pub z: f64,
    /// Skirting height in inches.
    pub skirting_height: f64,
    /// Door thickness in inches.
    pub door_thickness: f64,
    /// Back panel thickness in inches.
    pub back_thickness: f64,
}

impl Dimensions {
    /// Surface area of the bounding box in square feet.
    pub fn surface_area(&self) -> f64 {
        2.0 * (self.x * self.y + self.y * self.z + self.x * self.z)
    }
}
