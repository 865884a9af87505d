// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{translate_domain_error, ApiError};
use crate::params::ParamSet;
use serde::{Deserialize, Serialize};
use vas_bulk::BatchDirective;
use vas_domain::{DomainError, RecordId, Selection};

/// The record scope of a bulk action, as sent on the wire.
///
/// Explicit selections ship the id list; select-all selections ship the
/// filters that define the set so the backend resolves membership at
/// execution time. Batch windows are applied before serialization for
/// explicit ids and passed through as `limit`/`offset` for select-all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BulkActionRequest {
    /// A hand-picked set of record ids.
    ExplicitIds {
        /// The ids to act on, in ascending order.
        ids: Vec<RecordId>,
    },
    /// Every record matching the given filters.
    SelectAll {
        /// The filter parameters that define the set.
        filters: ParamSet,
        /// Batch window size, absent for unbatched runs.
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
        /// Batch window start, absent for unbatched runs.
        #[serde(skip_serializing_if = "Option::is_none")]
        offset: Option<u64>,
    },
}

impl BulkActionRequest {
    /// Builds the wire scope for a selection and batch window.
    ///
    /// # Arguments
    ///
    /// * `selection` - The operator's current selection
    /// * `filters` - The serialized view filters, used in select-all mode
    /// * `directive` - The batch window from the planner
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] when the selection is empty.
    pub fn from_selection(
        selection: &Selection,
        filters: ParamSet,
        directive: &BatchDirective,
    ) -> Result<Self, ApiError> {
        if selection.is_empty() {
            return Err(translate_domain_error(&DomainError::EmptySelection));
        }
        match selection.explicit_ids() {
            Some(ids) => {
                let windowed: Vec<RecordId> = Self::window_ids(ids, directive);
                if windowed.is_empty() {
                    return Err(translate_domain_error(&DomainError::EmptySelection));
                }
                Ok(Self::ExplicitIds { ids: windowed })
            }
            None => Ok(Self::SelectAll {
                filters,
                limit: directive.limit,
                offset: directive.offset,
            }),
        }
    }

    fn window_ids(ids: Vec<RecordId>, directive: &BatchDirective) -> Vec<RecordId> {
        let start: usize = usize::try_from(directive.offset.unwrap_or(0)).unwrap_or(usize::MAX);
        let take: usize = directive
            .limit
            .map_or(usize::MAX, |limit| usize::try_from(limit).unwrap_or(usize::MAX));
        ids.into_iter().skip(start).take(take).collect()
    }
}

/// Request body for the print/archive bulk operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintArchiveRequest {
    /// The records to print.
    #[serde(flatten)]
    pub scope: BulkActionRequest,
    /// Whether this run repeats an earlier print.
    pub is_reprint: bool,
    /// The recorded justification, required when `is_reprint` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_id: Option<i64>,
}

/// Request body for marking fees as paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAsPaidRequest {
    /// Ids of the fee records to mark.
    pub fee_ids: Vec<RecordId>,
    /// The payment reference to record against every fee.
    pub payment_reference: String,
}

/// Request body for approving marked fee payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovePaymentRequest {
    /// Ids of the fee records to approve.
    pub fee_ids: Vec<RecordId>,
}

/// A backend acknowledgement carrying a display message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMessage {
    /// The message to surface verbatim to the operator.
    pub message: String,
}

/// One page of a paginated list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPage<T> {
    /// The records on this page.
    pub results: Vec<T>,
    /// Total records matching the query, across all pages.
    pub count: u64,
    /// Total number of pages.
    pub num_pages: u32,
    /// The 1-based index of this page.
    pub current_page: u32,
}

/// The binary payload type a bulk operation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// A single merged PDF document.
    Pdf,
    /// A ZIP archive of per-record documents.
    Zip,
    /// A spreadsheet export.
    Xlsx,
}

impl ResponseKind {
    /// The MIME type the backend labels this payload with.
    #[must_use]
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Zip => "application/zip",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    /// The file extension for saved artifacts of this kind.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Zip => "zip",
            Self::Xlsx => "xlsx",
        }
    }
}
