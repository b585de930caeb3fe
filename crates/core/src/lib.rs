//! NearbySpace Core Library
//!
//! Listing models, the seed inventory, persistence, and the discovery
//! engine (filtering, search and distance ranking) for the NearbySpace
//! space-rental marketplace.

pub mod analytics;
pub mod discovery;
pub mod draft;
pub mod error;
pub mod invariants;
pub mod models;
pub mod seed;
pub mod storage;

pub use analytics::{DashboardStats, Selection};
pub use discovery::{discover, format_distance, haversine_km, recent, Query};
pub use draft::{OwnerDraft, SpaceDraft};
pub use error::{Error, Result};
pub use models::*;
pub use storage::{
    InventoryStore, KeyValueStore, MemoryStore, Recovery, SqliteStore, StorageKey, StoreOptions,
};
