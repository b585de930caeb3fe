//! Persistence for NearbySpace
//!
//! Owners, spaces, enquiries and the signed-in owner are stored as whole
//! JSON blobs under four fixed keys in a [`KeyValueStore`]. The
//! [`InventoryStore`] is the only component that reads or writes them.

mod inventory;
mod memory;
mod migrations;
pub mod ownership;
mod sqlite;
mod traits;

use std::fmt;

pub use inventory::{InventoryStore, Recovery, StoreOptions};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::KeyValueStore;

/// The fixed collection keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Owners,
    Enquiries,
    Spaces,
    CurrentUser,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::Owners,
        StorageKey::Enquiries,
        StorageKey::Spaces,
        StorageKey::CurrentUser,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Owners => "nearby_owners",
            StorageKey::Enquiries => "nearby_enquiries",
            StorageKey::Spaces => "nearby_spaces",
            StorageKey::CurrentUser => "nearby_current_user",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
