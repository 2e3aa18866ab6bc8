//! The built-in standard catalog.
//!
//! Keys, labels, prices, maxima and defaults follow the studio's standard
//! rate card. Constructed once and shared by reference.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::foundation::FurnitureType;

use super::{Catalog, ComponentEntry, HardwareEntry, Lamination, MaterialCatalog, PrimaryMaterial};

static STANDARD: Lazy<Catalog> = Lazy::new(build);

pub(super) fn standard_catalog() -> &'static Catalog {
    &STANDARD
}

fn build() -> Catalog {
    let mut components = HashMap::new();

    components.insert(
        FurnitureType::Wardrobe,
        vec![
            ComponentEntry::counter("doors", "Doors", 6, 2),
            ComponentEntry::counter("shelves", "Shelves", 20, 4),
            ComponentEntry::counter("drawers", "Drawers", 10, 2),
            ComponentEntry::toggle("hanging_rod", "Hanging Rod", true),
            ComponentEntry::toggle("mirror_door", "Mirror Door", false),
            ComponentEntry::toggle("soft_close", "Soft Close Hinges", false),
        ],
    );
    components.insert(
        FurnitureType::Kitchen,
        vec![
            ComponentEntry::counter("base_cabinets", "Base Cabinets", 10, 3),
            ComponentEntry::counter("wall_cabinets", "Wall Cabinets", 8, 2),
            ComponentEntry::counter("drawers", "Drawers", 12, 4),
            ComponentEntry::counter("shelves", "Shelves", 15, 6),
            ComponentEntry::toggle("counter_top", "Counter Top", true),
            ComponentEntry::toggle("backsplash", "Backsplash", false),
        ],
    );
    components.insert(
        FurnitureType::TvUnit,
        vec![
            ComponentEntry::counter("open_shelves", "Open Shelves", 8, 2),
            ComponentEntry::counter("closed_cabinets", "Closed Cabinets", 6, 2),
            ComponentEntry::counter("drawers", "Drawers", 6, 1),
            ComponentEntry::toggle("cable_management", "Cable Management", true),
            ComponentEntry::toggle("led_strip", "LED Strip Lighting", false),
        ],
    );
    components.insert(
        FurnitureType::StudyTable,
        vec![
            ComponentEntry::counter("drawers", "Drawers", 6, 2),
            ComponentEntry::counter("shelves", "Shelves", 8, 2),
            ComponentEntry::toggle("keyboard_tray", "Keyboard Tray", false),
            ComponentEntry::toggle("cable_management", "Cable Management", true),
        ],
    );
    components.insert(
        FurnitureType::ShoeRack,
        vec![
            ComponentEntry::counter("open_shelves", "Open Shelves", 12, 4),
            ComponentEntry::counter("closed_compartments", "Closed Compartments", 8, 2),
            ComponentEntry::toggle("sitting_bench", "Sitting Bench", false),
            ComponentEntry::toggle("mirror_door", "Mirror Door", false),
        ],
    );
    components.insert(
        FurnitureType::Other,
        vec![
            ComponentEntry::counter("shelves", "Shelves", 15, 3),
            ComponentEntry::counter("drawers", "Drawers", 8, 1),
            ComponentEntry::counter("doors", "Doors", 6, 2),
        ],
    );

    let mut hardware = HashMap::new();

    hardware.insert(
        FurnitureType::Wardrobe,
        vec![
            HardwareEntry::new("hinges", "Hinges", 150, "pair", 12),
            HardwareEntry::new("handles", "Door Handles", 200, "piece", 8),
            HardwareEntry::new("drawer_slides", "Drawer Slides", 300, "pair", 10),
            HardwareEntry::new("soft_close_hinges", "Soft Close Hinges", 450, "pair", 8),
            HardwareEntry::new("mirror_fittings", "Mirror Fittings", 250, "set", 4),
            HardwareEntry::new("hanging_rod", "Hanging Rod", 180, "piece", 3),
            HardwareEntry::new("shelf_pins", "Shelf Pins", 50, "set", 10),
        ],
    );
    hardware.insert(
        FurnitureType::Kitchen,
        vec![
            HardwareEntry::new("hinges", "Cabinet Hinges", 180, "pair", 16),
            HardwareEntry::new("handles", "Cabinet Handles", 220, "piece", 12),
            HardwareEntry::new("drawer_slides", "Drawer Slides", 350, "pair", 15),
            HardwareEntry::new("basket_slides", "Basket Slides", 800, "pair", 6),
            HardwareEntry::new("soft_close_hinges", "Soft Close Hinges", 500, "pair", 12),
            HardwareEntry::new("cabinet_locks", "Cabinet Locks", 300, "piece", 8),
            HardwareEntry::new("shelf_brackets", "Shelf Brackets", 120, "pair", 12),
        ],
    );
    hardware.insert(
        FurnitureType::TvUnit,
        vec![
            HardwareEntry::new("hinges", "Cabinet Hinges", 150, "pair", 8),
            HardwareEntry::new("handles", "Cabinet Handles", 200, "piece", 6),
            HardwareEntry::new("drawer_slides", "Drawer Slides", 300, "pair", 6),
            HardwareEntry::new("cable_grommets", "Cable Grommets", 100, "piece", 8),
            HardwareEntry::new("glass_hinges", "Glass Door Hinges", 400, "pair", 4),
            HardwareEntry::new("led_strips", "LED Strip Lights", 600, "meter", 5),
        ],
    );
    hardware.insert(
        FurnitureType::StudyTable,
        vec![
            HardwareEntry::new("drawer_slides", "Drawer Slides", 250, "pair", 6),
            HardwareEntry::new("handles", "Drawer Handles", 180, "piece", 6),
            HardwareEntry::new("keyboard_tray_slide", "Keyboard Tray Slide", 800, "piece", 1),
            HardwareEntry::new("cable_grommets", "Cable Grommets", 100, "piece", 4),
            HardwareEntry::new("table_legs", "Table Legs", 400, "piece", 6),
        ],
    );
    hardware.insert(
        FurnitureType::ShoeRack,
        vec![
            HardwareEntry::new("hinges", "Door Hinges", 120, "pair", 6),
            HardwareEntry::new("handles", "Door Handles", 150, "piece", 4),
            HardwareEntry::new("shelf_pins", "Adjustable Shelf Pins", 40, "set", 8),
            HardwareEntry::new("mesh_baskets", "Wire Mesh Baskets", 300, "piece", 6),
            HardwareEntry::new("mirror_fittings", "Mirror Fittings", 200, "set", 2),
        ],
    );
    hardware.insert(
        FurnitureType::Other,
        vec![
            HardwareEntry::new("hinges", "Hinges", 150, "pair", 8),
            HardwareEntry::new("handles", "Handles", 180, "piece", 8),
            HardwareEntry::new("drawer_slides", "Drawer Slides", 300, "pair", 6),
            HardwareEntry::new("shelf_pins", "Shelf Pins", 50, "set", 6),
        ],
    );

    let materials = MaterialCatalog {
        primary: vec![
            PrimaryMaterial::new("mdf", "MDF", "Medium Density Fibreboard", 120),
            PrimaryMaterial::new("plywood", "Plywood", "Marine Grade Plywood", 180),
            PrimaryMaterial::new("particle_board", "Particle Board", "Engineered Wood", 80),
            PrimaryMaterial::new("solid_wood", "Solid Wood", "Teak/Oak Wood", 350),
        ],
        lamination: vec![
            Lamination::new("none", "No Lamination", 0),
            Lamination::new("pvc", "PVC Lamination", 45),
            Lamination::new("hpl", "HPL Lamination", 65),
            Lamination::new("acrylic", "Acrylic Finish", 85),
            Lamination::new("veneer", "Wood Veneer", 120),
        ],
    };

    Catalog::new(components, hardware, materials)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_type_has_components_and_hardware() {
        let catalog = Catalog::standard();
        for ty in FurnitureType::all() {
            assert!(
                !catalog.components_for(*ty).is_empty(),
                "no components for {:?}",
                ty
            );
            assert!(
                !catalog.hardware_for(*ty).is_empty(),
                "no hardware for {:?}",
                ty
            );
        }
    }

    #[test]
    fn component_keys_are_unique_within_each_type() {
        let catalog = Catalog::standard();
        for ty in FurnitureType::all() {
            let mut seen = HashSet::new();
            for entry in catalog.components_for(*ty) {
                assert!(seen.insert(&entry.key), "duplicate key {:?}", entry.key);
            }
        }
    }

    #[test]
    fn hardware_keys_are_unique_within_each_type() {
        let catalog = Catalog::standard();
        for ty in FurnitureType::all() {
            let mut seen = HashSet::new();
            for entry in catalog.hardware_for(*ty) {
                assert!(seen.insert(&entry.key), "duplicate key {:?}", entry.key);
            }
        }
    }

    #[test]
    fn max_is_at_least_default_for_every_component() {
        let catalog = Catalog::standard();
        for ty in FurnitureType::all() {
            for entry in catalog.components_for(*ty) {
                assert!(
                    entry.max() >= entry.default_quantity(),
                    "{:?}/{} has default above max",
                    ty,
                    entry.key
                );
            }
        }
    }

    #[test]
    fn lamination_none_entry_has_zero_delta() {
        let materials = Catalog::standard().materials();
        let none = materials
            .lamination
            .iter()
            .find(|l| l.key == "none")
            .expect("none entry present");
        assert_eq!(none.price_delta.rupees(), 0);
    }

    #[test]
    fn wardrobe_tables_match_the_rate_card() {
        let catalog = Catalog::standard();
        let doors = catalog
            .components_for(FurnitureType::Wardrobe)
            .iter()
            .find(|c| c.key == "doors")
            .unwrap();
        assert_eq!(doors.max(), 6);
        assert_eq!(doors.default_quantity(), 2);

        let hinges = catalog
            .hardware_for(FurnitureType::Wardrobe)
            .iter()
            .find(|h| h.key == "hinges")
            .unwrap();
        assert_eq!(hinges.unit_price.rupees(), 150);
        assert_eq!(hinges.max, 12);
    }
}
