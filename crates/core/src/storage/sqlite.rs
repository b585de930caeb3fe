//! SQLite-backed key-value medium

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, instrument};

use super::migrations;
use super::traits::KeyValueStore;
use crate::error::Result;

/// Main database handle
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open in-memory database (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initialize database schema via migrations
    fn init(&self) -> Result<()> {
        migrations::run_migrations(&self.conn)?;
        Ok(())
    }

    /// Get current schema version
    pub fn schema_version(&self) -> u32 {
        migrations::get_current_version(&self.conn).unwrap_or(0)
    }

    /// All stored keys, sorted
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(keys)
    }
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("path", &self.conn.path())
            .finish()
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        debug!("Stored collection");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing() {
        let db = SqliteStore::open_in_memory().unwrap();
        assert_eq!(db.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_set_replaces() {
        let db = SqliteStore::open_in_memory().unwrap();
        db.set("k", "[1]").unwrap();
        db.set("k", "[1,2]").unwrap();

        assert_eq!(db.get("k").unwrap().as_deref(), Some("[1,2]"));
        assert_eq!(db.keys().unwrap(), vec!["k".to_string()]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let db = SqliteStore::open_in_memory().unwrap();
        db.set("k", "null").unwrap();
        db.remove("k").unwrap();
        db.remove("k").unwrap();
        assert_eq!(db.get("k").unwrap(), None);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nearby.db");

        {
            let db = SqliteStore::open(&path).unwrap();
            db.set("nearby_spaces", "[]").unwrap();
        }

        let db = SqliteStore::open(&path).unwrap();
        assert_eq!(db.get("nearby_spaces").unwrap().as_deref(), Some("[]"));
        assert_eq!(db.schema_version(), 1);
    }
}
