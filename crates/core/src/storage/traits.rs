//! Storage medium trait
//!
//! The inventory only needs whole-blob get/set/remove under string keys,
//! so any backend offering that (SQLite, memory, a browser bridge) can
//! stand behind it.

use crate::error::Result;

/// Per-installation key-value medium holding JSON collection blobs
pub trait KeyValueStore {
    /// Read the blob stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
