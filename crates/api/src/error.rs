// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::error::Error;
use std::fmt::{Display, Formatter};
use vas_bulk::CoreError;
use vas_domain::DomainError;

/// Errors surfaced at the request/response boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A request field failed validation before any work was done.
    InvalidInput {
        /// The offending field.
        field: &'static str,
        /// Human-readable description of the problem.
        message: String,
    },
    /// An export was requested over zero rows.
    EmptyExport,
    /// A domain rule rejected the operation.
    DomainRuleViolation {
        /// The rule that fired.
        rule: &'static str,
        /// Human-readable description of the violation.
        message: String,
    },
    /// An internal inconsistency that callers cannot correct.
    Internal {
        /// Description of the inconsistency.
        message: String,
    },
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "invalid {field}: {message}")
            }
            Self::EmptyExport => write!(f, "nothing to export for the current view"),
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "{rule}: {message}")
            }
            Self::Internal { message } => write!(f, "internal error: {message}"),
        }
    }
}

impl Error for ApiError {}

/// Translates a domain error into its request-boundary form.
#[must_use]
pub fn translate_domain_error(error: &DomainError) -> ApiError {
    match error {
        DomainError::EmptySelection => ApiError::InvalidInput {
            field: "selection",
            message: String::from("no records are selected"),
        },
        DomainError::InvalidBatchSize { chosen, max } => ApiError::InvalidInput {
            field: "batch_size",
            message: format!("{chosen} is not between 1 and {max}"),
        },
        DomainError::BatchOffsetOutOfRange { offset, total } => ApiError::InvalidInput {
            field: "offset",
            message: format!("{offset} is outside 0..{total}"),
        },
        DomainError::InvalidStatus(raw) => ApiError::InvalidInput {
            field: "status",
            message: format!("unknown status {raw:?}"),
        },
        DomainError::NothingToProcess { action } => ApiError::DomainRuleViolation {
            rule: "eligible_records",
            message: format!("no records are eligible for {action}"),
        },
    }
}

/// Translates a planner error into its request-boundary form.
#[must_use]
pub fn translate_core_error(error: &CoreError) -> ApiError {
    match error {
        CoreError::DomainViolation(domain) => translate_domain_error(domain),
        CoreError::InvalidEvent { state, event } => ApiError::Internal {
            message: format!("event {event} is not valid in state {state}"),
        },
    }
}
