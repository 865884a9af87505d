// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;
use vas_domain::FilterState;

/// The `page_size` the backend interprets as "return everything".
pub const EXPORT_PAGE_SIZE: u32 = 0;

/// An ordered, deterministic request-parameter set.
pub type ParamSet = BTreeMap<String, String>;

/// Serializes the current view (search text, field filters, pagination) into
/// a request-parameter set.
///
/// The same builder feeds both the list-fetch call and any export or bulk
/// call issued against "current view", so what the operator sees on screen is
/// provably what gets exported. Building is pure: identical inputs always
/// produce identical parameter sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParamBuilder {
    page_size: u32,
    filters: FilterState,
}

impl QueryParamBuilder {
    /// Creates a builder over the given filters with the on-screen page size.
    #[must_use]
    pub const fn new(page_size: u32, filters: FilterState) -> Self {
        Self { page_size, filters }
    }

    /// The filters this builder serializes.
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Replaces the filters (e.g. after a filter control changed).
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
    }

    /// Builds the parameter set for an on-screen list fetch.
    ///
    /// Empty or blank values are omitted entirely; an empty-string filter
    /// would over-constrain the backend query, not relax it.
    ///
    /// # Arguments
    ///
    /// * `page` - The 1-based page to fetch
    /// * `search_override` - Replaces the stored search text when set
    /// * `filter_override` - Replaces the stored field filters when set
    #[must_use]
    pub fn build(
        &self,
        page: u32,
        search_override: Option<&str>,
        filter_override: Option<&FilterState>,
    ) -> ParamSet {
        let mut params: ParamSet = self.common(search_override, filter_override);
        params.insert(String::from("page"), page.to_string());
        params.insert(String::from("page_size"), self.page_size.to_string());
        params
    }

    /// Builds the parameter set for an unpaginated export fetch.
    ///
    /// This is the one deliberate divergence from [`Self::build`]: the
    /// filter serialization is identical, but `page_size` is
    /// [`EXPORT_PAGE_SIZE`] and no `page` key is sent, so the export covers
    /// the full filtered set rather than one screen of it.
    #[must_use]
    pub fn build_export(
        &self,
        search_override: Option<&str>,
        filter_override: Option<&FilterState>,
    ) -> ParamSet {
        let mut params: ParamSet = self.common(search_override, filter_override);
        params.insert(String::from("page_size"), EXPORT_PAGE_SIZE.to_string());
        params
    }

    fn common(
        &self,
        search_override: Option<&str>,
        filter_override: Option<&FilterState>,
    ) -> ParamSet {
        let filters: &FilterState = filter_override.unwrap_or(&self.filters);
        let search: &str = search_override.unwrap_or(&self.filters.search_text);

        let mut params: ParamSet = ParamSet::new();
        if !search.trim().is_empty() {
            params.insert(String::from("search"), search.to_owned());
        }
        for (key, value) in &filters.field_filters {
            if !value.trim().is_empty() {
                params.insert(key.clone(), value.clone());
            }
        }
        params
    }
}
