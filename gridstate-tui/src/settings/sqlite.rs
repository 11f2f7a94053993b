//! SQLite settings backend with in-memory cache.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use dashmap::DashMap;
use gridstate_lib::error::SettingsError;
use gridstate_lib::settings::SettingsBackend;
use rusqlite::{Connection, OptionalExtension, params};

use super::SqliteError;

/// SQLite-backed settings storage with DashMap cache.
pub struct SqliteBackend {
    conn: Mutex<Connection>,
    cache: DashMap<String, String>,
}

impl SqliteBackend {
    /// Open (or create) the settings database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SqliteError> {
        Self::with_connection(Connection::open(path)?)
    }

    /// Open a database that lives only as long as the backend.
    pub fn open_in_memory() -> Result<Self, SqliteError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, SqliteError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
            cache: DashMap::new(),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, SettingsError> {
        self.conn
            .lock()
            .map_err(|_| SettingsError::backend(SqliteError::Poisoned))
    }
}

fn db_err(e: rusqlite::Error) -> SettingsError {
    SettingsError::backend(SqliteError::Database(e))
}

impl SettingsBackend for SqliteBackend {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        if let Some(value) = self.cache.get(key) {
            return Ok(Some(value.clone()));
        }

        let result = self
            .conn()?
            .query_row("SELECT value FROM settings WHERE key = ?", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
            .map_err(db_err)?;

        if let Some(ref value) = result {
            self.cache.insert(key.to_string(), value.clone());
        }

        Ok(result)
    }

    fn set(&self, key: &str, value: String) -> Result<(), SettingsError> {
        self.conn()?
            .execute(
                "INSERT INTO settings (key, value) VALUES (?, ?)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, &value],
            )
            .map_err(db_err)?;

        self.cache.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SettingsError> {
        self.conn()?
            .execute("DELETE FROM settings WHERE key = ?", [key])
            .map_err(db_err)?;

        self.cache.remove(key);
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError> {
        let pattern = format!("{}%", prefix);
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare("SELECT key FROM settings WHERE key LIKE ?")
            .map_err(db_err)?;
        let rows = stmt
            .query_map([&pattern], |row| row.get(0))
            .map_err(db_err)?;
        rows.collect::<Result<Vec<String>, _>>().map_err(db_err)
    }
}
