// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod event;
mod gate;
mod planner;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use event::PlannerEvent;
pub use gate::{
    DEFAULT_EXTERNAL_REFERENCE, GateDecision, gate_approve_payment, gate_mark_as_paid,
    gate_print_transcripts,
};
pub use planner::{BatchDirective, PlannerConfig, PlannerState, PlannerTransition, apply};
