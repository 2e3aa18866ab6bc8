//! Selection module - stateful holders of one category of user choice.
//!
//! Each selector validates against the catalog tables for the active
//! furniture type. Selectors gate workflow step completion.

mod components;
mod dimensions;
mod hardware;
mod materials;

pub use components::{ComponentSelection, ComponentSelector};
pub use dimensions::{
    DimensionField, Dimensions, DimensionsForm, DEFAULT_BACK_THICKNESS, DEFAULT_DOOR_THICKNESS,
    DEFAULT_SKIRTING_HEIGHT,
};
pub use hardware::{HardwareSelection, HardwareSelector};
pub use materials::{MaterialChoice, MaterialField, MaterialSelector};
