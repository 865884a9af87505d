// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::params::{EXPORT_PAGE_SIZE, ParamSet, QueryParamBuilder};
use vas_domain::FilterState;

fn builder_with_filters() -> QueryParamBuilder {
    let mut filters: FilterState = FilterState::new();
    filters.set_search("smith");
    filters.set_filter("fee_status", "pending");
    filters.set_filter("assessment_centre", "12");
    QueryParamBuilder::new(25, filters)
}

#[test]
fn test_build_includes_pagination_and_filters() {
    let builder: QueryParamBuilder = builder_with_filters();
    let params: ParamSet = builder.build(3, None, None);

    assert_eq!(params.get("page").map(String::as_str), Some("3"));
    assert_eq!(params.get("page_size").map(String::as_str), Some("25"));
    assert_eq!(params.get("search").map(String::as_str), Some("smith"));
    assert_eq!(params.get("fee_status").map(String::as_str), Some("pending"));
    assert_eq!(
        params.get("assessment_centre").map(String::as_str),
        Some("12")
    );
}

#[test]
fn test_build_omits_blank_search_and_filters() {
    let mut filters: FilterState = FilterState::new();
    filters.set_search("   ");
    filters.set_filter("fee_status", "");
    let builder: QueryParamBuilder = QueryParamBuilder::new(25, filters);

    let params: ParamSet = builder.build(1, None, None);

    assert!(!params.contains_key("search"));
    assert!(!params.contains_key("fee_status"));
    assert_eq!(params.len(), 2);
}

#[test]
fn test_build_is_deterministic() {
    let builder: QueryParamBuilder = builder_with_filters();
    assert_eq!(builder.build(1, None, None), builder.build(1, None, None));
}

#[test]
fn test_search_override_replaces_stored_text() {
    let builder: QueryParamBuilder = builder_with_filters();
    let params: ParamSet = builder.build(1, Some("jones"), None);
    assert_eq!(params.get("search").map(String::as_str), Some("jones"));
}

#[test]
fn test_filter_override_replaces_stored_filters() {
    let builder: QueryParamBuilder = builder_with_filters();
    let mut other: FilterState = FilterState::new();
    other.set_filter("print_status", "not_printed");

    let params: ParamSet = builder.build(1, None, Some(&other));

    assert!(!params.contains_key("fee_status"));
    assert_eq!(
        params.get("print_status").map(String::as_str),
        Some("not_printed")
    );
}

#[test]
fn test_export_params_match_list_filters() {
    let builder: QueryParamBuilder = builder_with_filters();
    let list: ParamSet = builder.build(4, None, None);
    let export: ParamSet = builder.build_export(None, None);

    assert!(!export.contains_key("page"));
    assert_eq!(
        export.get("page_size").map(String::as_str),
        Some(EXPORT_PAGE_SIZE.to_string().as_str())
    );
    for key in ["search", "fee_status", "assessment_centre"] {
        assert_eq!(list.get(key), export.get(key));
    }
}
