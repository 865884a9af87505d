// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// An operator or system event driving the batch planner.
///
/// Events are data only; the planner's `apply` function is the only place
/// state changes are decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerEvent {
    /// A bulk action (print, ZIP, export) was requested against the current
    /// selection.
    RequestBulkAction {
        /// The selection's effective count at the time of the request.
        effective_count: u64,
    },
    /// The operator picked a batch size in the batch modal.
    ChooseBatchSize(u32),
    /// The operator entered a manual offset in the batch modal.
    SetOffset(u64),
    /// The operator confirmed the configured batch.
    Confirm,
    /// The in-flight batch request completed successfully.
    BatchSucceeded,
    /// The in-flight batch request failed.
    BatchFailed,
    /// The operator dismissed the modal or abandoned the action.
    Cancel,
}

impl PlannerEvent {
    /// A short name for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RequestBulkAction { .. } => "RequestBulkAction",
            Self::ChooseBatchSize(_) => "ChooseBatchSize",
            Self::SetOffset(_) => "SetOffset",
            Self::Confirm => "Confirm",
            Self::BatchSucceeded => "BatchSucceeded",
            Self::BatchFailed => "BatchFailed",
            Self::Cancel => "Cancel",
        }
    }
}
