// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::{CandidateStatus, FeeStatus, GatewayStatus, PrintStatus};
use serde::{Deserialize, Serialize};

/// An opaque record identifier.
///
/// Identifiers are assigned by the backend and carry no meaning client-side
/// beyond identity and a stable ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Creates a new `RecordId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate fee as last reported by the server.
///
/// The validation gate inspects these snapshots before permitting a
/// mark-as-paid or approve action. Snapshots go stale the moment a bulk
/// action succeeds, which is why the caller must re-fetch the list after one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRecord {
    /// The fee's identifier.
    pub id: RecordId,
    /// The fee verification lifecycle state.
    pub fee_status: FeeStatus,
    /// The candidate's identity verification state.
    pub candidate_status: CandidateStatus,
    /// The external payment gateway state for this fee.
    pub gateway_status: GatewayStatus,
}

/// An award transcript as last reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    /// The transcript's identifier.
    pub id: RecordId,
    /// Whether this transcript has already been printed.
    pub print_status: PrintStatus,
    /// The candidate's identity verification state.
    pub candidate_status: CandidateStatus,
}
