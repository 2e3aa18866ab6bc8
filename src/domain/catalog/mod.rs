//! Catalog module - static option tables per furniture type.
//!
//! The catalog is a pure, read-only lookup from furniture type to its
//! component list, hardware list, and the shared material list. It is an
//! injected value rather than ambient global state, so tests can run
//! against alternate catalogs.

mod catalog;
mod entry;
mod standard;

pub use catalog::{Catalog, MaterialCatalog};
pub use entry::{ComponentEntry, ComponentKind, HardwareEntry, Lamination, PrimaryMaterial};
