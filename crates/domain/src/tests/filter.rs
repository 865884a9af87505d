// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::FilterState;

#[test]
fn test_new_filter_state_is_empty() {
    let filters: FilterState = FilterState::new();
    assert!(filters.is_empty());
}

#[test]
fn test_set_filter_stores_value() {
    let mut filters: FilterState = FilterState::new();
    filters.set_filter("center", "Kampala East");
    assert_eq!(filters.filter("center"), Some("Kampala East"));
    assert!(!filters.is_empty());
}

#[test]
fn test_blank_filter_value_removes_key() {
    let mut filters: FilterState = FilterState::new();
    filters.set_filter("center", "Kampala East");
    filters.set_filter("center", "   ");
    assert_eq!(filters.filter("center"), None);
    assert!(filters.is_empty());
}

#[test]
fn test_clear_empties_search_and_filters() {
    let mut filters: FilterState = FilterState::new();
    filters.set_search("Kampala");
    filters.set_filter("series", "2026-march");
    filters.clear();
    assert!(filters.is_empty());
    assert!(filters.search_text.is_empty());
}

#[test]
fn test_filter_state_round_trips_through_json() {
    let mut filters: FilterState = FilterState::new();
    filters.set_search("Kampala");
    filters.set_filter("occupation", "welding");

    let encoded: String = serde_json::to_string(&filters).unwrap();
    let decoded: FilterState = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, filters);
}
