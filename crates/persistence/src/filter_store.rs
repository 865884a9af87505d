// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::store::KeyValueStore;
use vas_domain::FilterState;

/// Storage key for the persisted Awards search text.
pub const AWARDS_SEARCH_KEY: &str = "awards_search";
/// Storage key for the persisted Awards field filters, as JSON.
pub const AWARDS_FILTERS_KEY: &str = "awards_filters";

/// Persists the Awards list filters across sessions.
///
/// Only the Awards list persists its filters; the other lists start fresh
/// each session. Corrupt stored values degrade to defaults with a warning
/// rather than failing the load, so a bad write can never lock an operator
/// out of the list.
pub struct FilterStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> FilterStore<S> {
    /// Wraps a key/value store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the persisted filter state, or defaults when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error only when the store itself cannot be read. Corrupt
    /// JSON under the filters key logs a warning and yields empty filters.
    pub fn load(&self) -> Result<FilterState, PersistenceError> {
        let mut state: FilterState = FilterState::new();
        if let Some(search) = self.store.get(AWARDS_SEARCH_KEY)? {
            state.set_search(&search);
        }
        if let Some(raw) = self.store.get(AWARDS_FILTERS_KEY)? {
            match serde_json::from_str::<FilterState>(&raw) {
                Ok(stored) => {
                    state.field_filters = stored.field_filters;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "stored filters are corrupt, using defaults");
                }
            }
        }
        Ok(state)
    }

    /// Persists the given filter state.
    ///
    /// Blank search text removes the stored key instead of storing an empty
    /// string.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be written or the filters
    /// cannot be serialized.
    pub fn save(&self, state: &FilterState) -> Result<(), PersistenceError> {
        if state.search_text.trim().is_empty() {
            self.store.remove(AWARDS_SEARCH_KEY)?;
        } else {
            self.store.put(AWARDS_SEARCH_KEY, &state.search_text)?;
        }
        let serialized: String = serde_json::to_string(state)?;
        self.store.put(AWARDS_FILTERS_KEY, &serialized)?;
        Ok(())
    }

    /// Removes everything this store persisted.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be written.
    pub fn clear(&self) -> Result<(), PersistenceError> {
        self.store.remove(AWARDS_SEARCH_KEY)?;
        self.store.remove(AWARDS_FILTERS_KEY)?;
        Ok(())
    }
}
