use std::marker::PhantomData;

use anyhow::{Context, Result};
use rusqlite::{named_params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;

/// Process-local key-value store backing the persisted palette state.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn initialize(config: &AppConfig) -> Result<Self> {
        let conn = Connection::open(config.store_path()).with_context(|| {
            format!("Failed to open store at {}", config.store_path().display())
        })?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to configure SQLite WAL mode")?;

        let store = Self { conn };
        store.apply_migrations()?;
        Ok(store)
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = :key",
                named_params![":key": key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (:key, :value)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            named_params![":key": key, ":value": value],
        )?;
        Ok(())
    }

    fn apply_migrations(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
             );",
        )?;
        Ok(())
    }
}

/// Synchronizes one typed value with a store key.
///
/// `load` reads once and treats missing or undecodable content as absent;
/// `save` writes back fire-and-forget, with no transactional guarantee.
pub struct PersistentBinding<T> {
    key: &'static str,
    _value: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> PersistentBinding<T> {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _value: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn load(&self, store: &Store) -> Option<T> {
        let raw = store.get(self.key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    /// Best-effort write; a failed save is dropped, never surfaced.
    pub fn save(&self, store: &Store, value: &T) {
        if let Ok(raw) = serde_json::to_string(value) {
            let _ = store.put(self.key, &raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn temp_store() -> (Store, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let config = AppConfig::from_data_dir(dir.path().to_path_buf()).expect("config");
        let store = Store::initialize(&config).expect("init store");
        (store, dir)
    }

    #[test]
    fn put_then_get_round_trips() {
        let (store, _dir) = temp_store();
        store.put("format", "\"hsl\"").unwrap();
        assert_eq!(store.get("format").unwrap(), Some("\"hsl\"".to_string()));
    }

    #[test]
    fn put_overwrites_existing_keys() {
        let (store, _dir) = temp_store();
        store.put("format", "\"hex\"").unwrap();
        store.put("format", "\"lch\"").unwrap();
        assert_eq!(store.get("format").unwrap(), Some("\"lch\"".to_string()));
    }

    #[test]
    fn missing_key_reads_as_none() {
        let (store, _dir) = temp_store();
        assert_eq!(store.get("colors").unwrap(), None);
    }

    #[test]
    fn binding_round_trips_typed_values() {
        let (store, _dir) = temp_store();
        let binding: PersistentBinding<Vec<String>> = PersistentBinding::new("colors");
        binding.save(&store, &vec!["#ff0000".to_string(), "teal".to_string()]);
        assert_eq!(
            binding.load(&store),
            Some(vec!["#ff0000".to_string(), "teal".to_string()])
        );
    }

    #[test]
    fn binding_treats_garbage_as_absent() {
        let (store, _dir) = temp_store();
        store.put("shades", "not json at all").unwrap();
        let binding: PersistentBinding<Vec<f64>> = PersistentBinding::new("shades");
        assert_eq!(binding.load(&store), None);
    }
}
