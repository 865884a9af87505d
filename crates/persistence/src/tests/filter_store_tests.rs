// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::filter_store::{AWARDS_FILTERS_KEY, AWARDS_SEARCH_KEY, FilterStore};
use crate::memory::MemoryStore;
use crate::store::KeyValueStore;
use vas_domain::FilterState;

fn populated_state() -> FilterState {
    let mut state: FilterState = FilterState::new();
    state.set_search("smith");
    state.set_filter("assessment_centre", "12");
    state
}

#[test]
fn test_load_without_saved_state_yields_defaults() {
    let store: FilterStore<MemoryStore> = FilterStore::new(MemoryStore::new());
    let state: FilterState = store.load().unwrap();
    assert!(state.is_empty());
}

#[test]
fn test_save_then_load_round_trips() {
    let store: FilterStore<MemoryStore> = FilterStore::new(MemoryStore::new());
    store.save(&populated_state()).unwrap();

    let loaded: FilterState = store.load().unwrap();
    assert_eq!(loaded.search_text, "smith");
    assert_eq!(loaded.filter("assessment_centre"), Some("12"));
}

#[test]
fn test_blank_search_removes_stored_key() {
    let memory: MemoryStore = MemoryStore::new();
    memory.put(AWARDS_SEARCH_KEY, "stale").unwrap();
    let store: FilterStore<MemoryStore> = FilterStore::new(memory);

    let mut state: FilterState = populated_state();
    state.set_search("   ");
    store.save(&state).unwrap();

    let loaded: FilterState = store.load().unwrap();
    assert!(loaded.search_text.is_empty());
}

#[test]
fn test_corrupt_filters_degrade_to_defaults() {
    let memory: MemoryStore = MemoryStore::new();
    memory.put(AWARDS_SEARCH_KEY, "smith").unwrap();
    memory.put(AWARDS_FILTERS_KEY, "{not json").unwrap();
    let store: FilterStore<MemoryStore> = FilterStore::new(memory);

    let loaded: FilterState = store.load().unwrap();
    assert_eq!(loaded.search_text, "smith");
    assert!(loaded.field_filters.is_empty());
}

#[test]
fn test_clear_removes_everything() {
    let store: FilterStore<MemoryStore> = FilterStore::new(MemoryStore::new());
    store.save(&populated_state()).unwrap();
    store.clear().unwrap();

    let loaded: FilterState = store.load().unwrap();
    assert!(loaded.is_empty());
}
