//! Seeded in-memory demo data. Nothing here persists across restarts.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;

use crate::item::Item;
use crate::vehicle::Vehicle;

/// One row of the demo listing feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub item_name: String,
}

impl Listing {
    fn named(item_name: &str) -> Self {
        Self {
            item_name: item_name.to_string(),
        }
    }
}

/// The paginated listing feed: Foo, Bar, Spam.
pub fn demo_listings() -> Vec<Listing> {
    vec![
        Listing::named("Foo"),
        Listing::named("Bar"),
        Listing::named("Spam"),
    ]
}

/// Keyed item catalog, the only store mutated at runtime (via PATCH).
pub fn demo_catalog() -> BTreeMap<String, Item> {
    let mut catalog = BTreeMap::new();
    catalog.insert(
        "foo".to_string(),
        Item {
            name: "Foo".to_string(),
            description: None,
            price: 50200,
            tax: None,
            tags: BTreeSet::new(),
            images: None,
        },
    );
    catalog.insert(
        "bar".to_string(),
        Item {
            name: "Bar".to_string(),
            description: Some("The bartenders".to_string()),
            price: 6200,
            tax: Some(20.2),
            tags: BTreeSet::new(),
            images: None,
        },
    );
    catalog.insert(
        "baz".to_string(),
        Item {
            name: "Baz".to_string(),
            description: None,
            price: 5020,
            tax: Some(10.5),
            tags: BTreeSet::new(),
            images: None,
        },
    );
    catalog
}

/// The demo garage, keyed `vehicle1`, `vehicle2`.
pub fn demo_garage() -> HashMap<String, Vehicle> {
    let mut garage = HashMap::new();
    garage.insert(
        "vehicle1".to_string(),
        Vehicle::Car {
            description: "All my friends drive a low rider".to_string(),
        },
    );
    garage.insert(
        "vehicle2".to_string(),
        Vehicle::Plane {
            description: "Music is my aeroplane, it's my aeroplane".to_string(),
            size: 5,
        },
    );
    garage
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listings_are_ordered() {
        let names: Vec<_> = demo_listings().into_iter().map(|l| l.item_name).collect();
        assert_eq!(names, ["Foo", "Bar", "Spam"]);
    }

    #[test]
    fn seeded_catalog_items_are_valid() {
        for (key, item) in demo_catalog() {
            assert!(item.validate().is_ok(), "seed item {key} must be valid");
        }
    }

    #[test]
    fn garage_has_one_car_and_one_plane() {
        let garage = demo_garage();
        assert!(matches!(garage["vehicle1"], Vehicle::Car { .. }));
        assert!(matches!(garage["vehicle2"], Vehicle::Plane { size: 5, .. }));
    }
}
