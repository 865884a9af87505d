// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::event::PlannerEvent;
use tracing::warn;
use vas_domain::{BatchPlan, DEFAULT_MAX_BATCH_SIZE, DomainError};

/// Planner tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Bulk actions covering more records than this are decomposed into
    /// batches behind an operator-confirmed modal.
    pub max_batch_size: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }
}

/// The offset/limit slice the caller must put on the wire for the next
/// request.
///
/// Both fields unset means a single unbatched request covering the whole
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchDirective {
    /// The offset into the logical record set, when batched.
    pub offset: Option<u64>,
    /// The slice length, when batched.
    pub limit: Option<u32>,
}

/// The batch planner's state.
///
/// No request may be sent except through a directive returned by [`apply`],
/// which is what guarantees that an over-threshold action never fires
/// without explicit operator confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlannerState {
    /// No bulk action in progress.
    #[default]
    Idle,
    /// The batch modal is open; the operator is choosing a size and offset.
    AwaitingConfig(BatchPlan),
    /// A request is in flight. `plan` is `None` for an unbatched action.
    Executing {
        /// The plan being stepped through, when batched.
        plan: Option<BatchPlan>,
    },
}

impl PlannerState {
    /// A short name for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::AwaitingConfig(_) => "AwaitingConfig",
            Self::Executing { .. } => "Executing",
        }
    }
}

/// The result of applying an event to the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerTransition {
    /// The planner state after the event.
    pub new_state: PlannerState,
    /// The slice to execute now, when the event triggers a request.
    pub directive: Option<BatchDirective>,
}

impl PlannerTransition {
    const fn to(new_state: PlannerState) -> Self {
        Self {
            new_state,
            directive: None,
        }
    }

    const fn execute(new_state: PlannerState, directive: BatchDirective) -> Self {
        Self {
            new_state,
            directive: Some(directive),
        }
    }
}

/// Applies an event to the current planner state, producing the new state
/// and, when a request should be sent, the slice to send.
///
/// Transitions are pure: the input state is never mutated, and a failed
/// application leaves no side effects.
///
/// # Arguments
///
/// * `config` - Planner tuning knobs
/// * `state` - The current planner state (immutable)
/// * `event` - The event to apply
///
/// # Errors
///
/// Returns an error if:
/// - A bulk action is requested against an empty selection
/// - A chosen batch size or manual offset violates the plan's invariants
/// - The event is not valid in the current state
pub fn apply(
    config: &PlannerConfig,
    state: &PlannerState,
    event: PlannerEvent,
) -> Result<PlannerTransition, CoreError> {
    match (state, event) {
        (_, PlannerEvent::Cancel) => Ok(PlannerTransition::to(PlannerState::Idle)),

        (PlannerState::Idle, PlannerEvent::RequestBulkAction { effective_count }) => {
            if effective_count == 0 {
                return Err(DomainError::EmptySelection.into());
            }
            if effective_count <= u64::from(config.max_batch_size) {
                // Under the threshold: one unbatched request, no modal.
                return Ok(PlannerTransition::execute(
                    PlannerState::Executing { plan: None },
                    BatchDirective::default(),
                ));
            }
            // Over the threshold: open the modal and wait for the operator.
            let plan: BatchPlan = BatchPlan::with_max(effective_count, config.max_batch_size);
            Ok(PlannerTransition::to(PlannerState::AwaitingConfig(plan)))
        }

        (PlannerState::AwaitingConfig(plan), PlannerEvent::ChooseBatchSize(size)) => {
            let mut plan: BatchPlan = plan.clone();
            plan.choose_batch_size(size)?;
            Ok(PlannerTransition::to(PlannerState::AwaitingConfig(plan)))
        }

        (PlannerState::AwaitingConfig(plan), PlannerEvent::SetOffset(offset)) => {
            let mut new_plan: BatchPlan = plan.clone();
            if offset != plan.current_offset() {
                // A non-contiguous manual offset produces a gap or overlap
                // between consecutive batches; the server keeps no record of
                // already-processed ranges, so this can double-print or skip
                // records.
                warn!(
                    offset,
                    expected = plan.current_offset(),
                    "manual batch offset is not the natural continuation"
                );
            }
            new_plan.set_offset(offset)?;
            Ok(PlannerTransition::to(PlannerState::AwaitingConfig(new_plan)))
        }

        (PlannerState::AwaitingConfig(plan), PlannerEvent::Confirm) => {
            let (offset, limit) = plan.slice();
            Ok(PlannerTransition::execute(
                PlannerState::Executing {
                    plan: Some(plan.clone()),
                },
                BatchDirective {
                    offset: Some(offset),
                    limit: Some(limit),
                },
            ))
        }

        (PlannerState::Executing { plan: None }, PlannerEvent::BatchSucceeded) => {
            Ok(PlannerTransition::to(PlannerState::Idle))
        }

        (PlannerState::Executing { plan: Some(plan) }, PlannerEvent::BatchSucceeded) => {
            let mut plan: BatchPlan = plan.clone();
            plan.advance();
            if plan.is_complete() {
                Ok(PlannerTransition::to(PlannerState::Idle))
            } else {
                // The modal stays open, offset defaulted to the batch's end,
                // so the operator can run the next slice.
                Ok(PlannerTransition::to(PlannerState::AwaitingConfig(plan)))
            }
        }

        (PlannerState::Executing { plan: None }, PlannerEvent::BatchFailed) => {
            Ok(PlannerTransition::to(PlannerState::Idle))
        }

        (PlannerState::Executing { plan: Some(plan) }, PlannerEvent::BatchFailed) => {
            // The offset is neither advanced nor rolled back: the operator
            // chooses whether to retry the same slice or skip it.
            Ok(PlannerTransition::to(PlannerState::AwaitingConfig(
                plan.clone(),
            )))
        }

        (state, event) => Err(CoreError::InvalidEvent {
            state: state.name(),
            event: event.name(),
        }),
    }
}
