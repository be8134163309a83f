//! Inventory domain module.
//!
//! This crate contains the record model, sort keys, the in-process store,
//! and the search functions, implemented purely as deterministic domain
//! logic (no IO, no HTTP, no markup).

pub mod record;
pub mod search;
pub mod store;

pub use record::{InventoryRecord, SortKey, UnknownSortKey};
pub use search::{find_by_id, fuzzy_search_name, search_by_category, search_by_name};
pub use store::InventoryStore;
