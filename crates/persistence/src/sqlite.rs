// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::store::KeyValueStore;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::Mutex;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS settings (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
)";

/// A `SQLite`-backed [`KeyValueStore`].
///
/// Values live in a single `settings` table. The connection is serialized
/// behind a mutex; the access pattern here is a handful of reads on startup
/// and a write per filter change, so contention is not a concern.
#[derive(Debug)]
pub struct SqliteStore {
    connection: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens (or creates) a store at the given file path.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::DatabaseConnectionFailed`] when the file
    /// cannot be opened, or [`PersistenceError::InitializationError`] when
    /// the schema cannot be created.
    pub fn new_with_file(path: &Path) -> Result<Self, PersistenceError> {
        let connection: Connection = Connection::open(path)
            .map_err(|err| PersistenceError::DatabaseConnectionFailed(err.to_string()))?;
        Self::initialize(connection)
    }

    /// Opens an in-memory store that lives for the process.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::DatabaseConnectionFailed`] when the
    /// in-memory database cannot be created.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let connection: Connection = Connection::open_in_memory()
            .map_err(|err| PersistenceError::DatabaseConnectionFailed(err.to_string()))?;
        Self::initialize(connection)
    }

    fn initialize(connection: Connection) -> Result<Self, PersistenceError> {
        connection
            .execute(SCHEMA, [])
            .map_err(|err| PersistenceError::InitializationError(err.to_string()))?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, PersistenceError> {
        self.connection
            .lock()
            .map_err(|err| PersistenceError::QueryFailed(err.to_string()))
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let connection = self.lock()?;
        let value: Option<String> = connection
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let connection = self.lock()?;
        connection.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        let connection = self.lock()?;
        connection.execute("DELETE FROM settings WHERE key = ?1", params![key])?;
        Ok(())
    }
}
