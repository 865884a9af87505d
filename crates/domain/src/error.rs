// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A bulk action was requested against an empty selection.
    EmptySelection,
    /// The chosen batch size is zero or exceeds the configured cap.
    InvalidBatchSize {
        /// The batch size that was requested.
        chosen: u32,
        /// The maximum permitted batch size.
        max: u32,
    },
    /// The batch offset falls outside the requested record range.
    BatchOffsetOutOfRange {
        /// The offset that was requested.
        offset: u64,
        /// The total number of records in the bulk action.
        total: u64,
    },
    /// A status string from the server could not be parsed.
    InvalidStatus(String),
    /// The selection contains no records the action can operate on.
    NothingToProcess {
        /// The action that was attempted.
        action: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySelection => {
                write!(f, "Nothing is selected")
            }
            Self::InvalidBatchSize { chosen, max } => {
                write!(f, "Invalid batch size {chosen}: must be between 1 and {max}")
            }
            Self::BatchOffsetOutOfRange { offset, total } => {
                write!(
                    f,
                    "Batch offset {offset} is out of range for {total} requested records"
                )
            }
            Self::InvalidStatus(msg) => write!(f, "Invalid status: {msg}"),
            Self::NothingToProcess { action } => {
                write!(f, "No records in the selection are eligible for {action}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
