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

mod batch;
mod error;
mod filter;
mod selection;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use batch::{BATCH_SIZE_MENU, BatchPlan, DEFAULT_MAX_BATCH_SIZE};
pub use error::DomainError;
pub use filter::FilterState;
pub use selection::Selection;
pub use status::{CandidateStatus, FeeStatus, GatewayStatus, PrintStatus};
pub use types::{FeeRecord, RecordId, TranscriptRecord};
