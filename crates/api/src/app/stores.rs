use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use bazaar_catalog::{Item, Listing, Vehicle, demo_catalog, demo_garage, demo_listings};

/// App-wide stores, injected into handlers via `Extension<Arc<AppStores>>`.
///
/// Only the item catalog is ever written to (PATCH); the rest is read-only
/// demo data. A process-local lock is all the isolation this needs.
#[derive(Debug)]
pub struct AppStores {
    pub listings: Vec<Listing>,
    pub catalog: RwLock<BTreeMap<String, Item>>,
    pub garage: HashMap<String, Vehicle>,
}

/// Seed the demo stores (fresh state per process).
pub fn build_stores() -> AppStores {
    AppStores {
        listings: demo_listings(),
        catalog: RwLock::new(demo_catalog()),
        garage: demo_garage(),
    }
}
