//! `bazaar-catalog` — the schema/validation layer and in-memory demo stores.
//!
//! Every type here is a flat, serde-backed record constructed per request;
//! validation walks the record and reports all offending fields at once.

pub mod item;
pub mod model;
pub mod offer;
pub mod query;
pub mod store;
pub mod user;
pub mod vehicle;

pub use item::{Image, Item, ItemOptions, ItemPatch};
pub use model::ModelName;
pub use offer::Offer;
pub use store::{Listing, demo_catalog, demo_garage, demo_listings};
pub use user::{NewUser, StoredUser, UserProfile, persist_user};
pub use vehicle::Vehicle;
