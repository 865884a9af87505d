// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The fee verification lifecycle state.
///
/// Fees move strictly forward: a pending fee is marked as paid by an
/// operator, and a marked fee is approved by a second operator. Approval is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeeStatus {
    /// Awaiting payment verification.
    #[default]
    Pending,
    /// Marked as paid, awaiting approval.
    Marked,
    /// Payment approved. Terminal.
    Approved,
}

impl FeeStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Marked => "marked",
            Self::Approved => "approved",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Pending → Marked
    /// - Marked → Approved
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Marked) | (Self::Marked, Self::Approved)
        )
    }
}

impl FromStr for FeeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "marked" => Ok(Self::Marked),
            "approved" => Ok(Self::Approved),
            _ => Err(DomainError::InvalidStatus(format!(
                "Unknown fee status: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The candidate identity verification state.
///
/// Only verified candidates may have fees marked as paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    /// Identity checks passed.
    Verified,
    /// Identity checks pending or failed.
    Unverified,
}

impl CandidateStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Unverified => "unverified",
        }
    }
}

impl FromStr for CandidateStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "verified" => Ok(Self::Verified),
            "unverified" => Ok(Self::Unverified),
            _ => Err(DomainError::InvalidStatus(format!(
                "Unknown candidate status: {s}"
            ))),
        }
    }
}

/// Whether a transcript has already been printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PrintStatus {
    /// Never printed.
    #[default]
    NotPrinted,
    /// Printed at least once. Further prints are reprints.
    Printed,
}

impl PrintStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotPrinted => "not_printed",
            Self::Printed => "printed",
        }
    }
}

impl FromStr for PrintStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_printed" => Ok(Self::NotPrinted),
            "printed" => Ok(Self::Printed),
            _ => Err(DomainError::InvalidStatus(format!(
                "Unknown print status: {s}"
            ))),
        }
    }
}

/// The external payment gateway state reported for a fee.
///
/// When every pending fee in a selection is already `Successful`, the
/// mark-as-paid flow skips the reference modal and proceeds with the default
/// external reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GatewayStatus {
    /// No gateway transaction recorded.
    #[default]
    NotAttempted,
    /// A gateway transaction is in flight.
    Pending,
    /// The gateway reported a successful payment.
    Successful,
    /// The gateway reported a failed payment.
    Failed,
}

impl GatewayStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotAttempted => "not_attempted",
            Self::Pending => "pending",
            Self::Successful => "successful",
            Self::Failed => "failed",
        }
    }
}

impl FromStr for GatewayStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_attempted" => Ok(Self::NotAttempted),
            "pending" => Ok(Self::Pending),
            "successful" => Ok(Self::Successful),
            "failed" => Ok(Self::Failed),
            _ => Err(DomainError::InvalidStatus(format!(
                "Unknown gateway status: {s}"
            ))),
        }
    }
}
