// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The current search text and field filters for a list view.
///
/// Mutated only by user interaction with the filter controls. For the Awards
/// list this state is persisted through `vas-persistence` and restored on
/// mount; other lists keep it in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterState {
    /// Free-text search input.
    pub search_text: String,
    /// Filter-key to value mapping. Keys with empty values are never stored.
    pub field_filters: BTreeMap<String, String>,
}

impl FilterState {
    /// Creates an empty filter state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            search_text: String::new(),
            field_filters: BTreeMap::new(),
        }
    }

    /// Replaces the search text.
    pub fn set_search(&mut self, text: &str) {
        self.search_text = text.to_owned();
    }

    /// Sets a field filter, removing the key when the value is blank.
    ///
    /// Blank values are dropped rather than stored so the parameter builder
    /// never sends empty-string filters to the backend.
    pub fn set_filter(&mut self, key: &str, value: &str) {
        if value.trim().is_empty() {
            self.field_filters.remove(key);
        } else {
            self.field_filters
                .insert(key.to_owned(), value.to_owned());
        }
    }

    /// Returns the value of a field filter, if set.
    #[must_use]
    pub fn filter(&self, key: &str) -> Option<&str> {
        self.field_filters.get(key).map(String::as_str)
    }

    /// Clears the search text and every field filter.
    pub fn clear(&mut self) {
        self.search_text.clear();
        self.field_filters.clear();
    }

    /// Whether no search text or filters are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_text.trim().is_empty() && self.field_filters.is_empty()
    }
}
