// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;

/// A string key/value store.
///
/// The filter layer only needs get/put/remove over string keys, so the
/// backing store is swappable. [`crate::SqliteStore`] backs the real
/// application; [`crate::MemoryStore`] backs tests.
pub trait KeyValueStore: Send {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be written.
    fn put(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Removes the value stored under `key`. Removing an absent key is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be written.
    fn remove(&self, key: &str) -> Result<(), PersistenceError>;
}
