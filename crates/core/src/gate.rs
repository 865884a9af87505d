// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use vas_domain::{CandidateStatus, FeeRecord, FeeStatus, GatewayStatus, PrintStatus, TranscriptRecord};

/// The payment reference recorded when the gateway already confirmed every
/// pending fee and the reference modal is skipped.
pub const DEFAULT_EXTERNAL_REFERENCE: &str = "GATEWAY";

/// What the UI must do before a bulk status action may be sent.
///
/// `Blocked` decisions are resolved entirely client-side: zero network
/// requests are issued for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Send the request now, optionally with a pre-filled payment reference.
    Proceed {
        /// The payment reference to send, when one is implied.
        payment_reference: Option<String>,
    },
    /// Open the payment-reference modal; an explicit operator choice is
    /// required.
    RequireReference,
    /// Open the reprint-reason modal; a reason must be chosen before any
    /// request is sent.
    RequireReprintReason,
    /// Show a confirmation dialog; the action is terminal.
    RequireConfirmation,
    /// Refuse the action with an explanatory message.
    Blocked {
        /// Why the action cannot proceed.
        reason: String,
    },
}

/// Gates the mark-as-paid action on a fee selection.
///
/// The action operates on the pending subset only, but an unverified
/// candidate anywhere in that subset blocks the whole action; the unverified
/// records are never silently skipped. When every pending fee already shows a
/// successful gateway payment the reference modal is skipped and the default
/// external reference is used; this shortcut applies in that case and no
/// other.
#[must_use]
pub fn gate_mark_as_paid(records: &[FeeRecord]) -> GateDecision {
    let pending: Vec<&FeeRecord> = records
        .iter()
        .filter(|record| record.fee_status == FeeStatus::Pending)
        .collect();

    if pending.is_empty() {
        return GateDecision::Blocked {
            reason: String::from("No pending fees in the selection"),
        };
    }

    let unverified: usize = pending
        .iter()
        .filter(|record| record.candidate_status == CandidateStatus::Unverified)
        .count();
    if unverified > 0 {
        return GateDecision::Blocked {
            reason: format!(
                "{unverified} of {} pending fees belong to unverified candidates; verify them before marking as paid",
                pending.len()
            ),
        };
    }

    let all_gateway_successful: bool = pending
        .iter()
        .all(|record| record.gateway_status == GatewayStatus::Successful);
    if all_gateway_successful {
        return GateDecision::Proceed {
            payment_reference: Some(String::from(DEFAULT_EXTERNAL_REFERENCE)),
        };
    }

    GateDecision::RequireReference
}

/// Gates the approve-payment action on a fee selection.
///
/// Approval is terminal, so it always requires an explicit confirmation
/// dialog; there is no auto-proceed shortcut.
#[must_use]
pub fn gate_approve_payment(records: &[FeeRecord]) -> GateDecision {
    let marked: Vec<&FeeRecord> = records
        .iter()
        .filter(|record| record.fee_status == FeeStatus::Marked)
        .collect();

    if marked.is_empty() {
        return GateDecision::Blocked {
            reason: String::from("No marked fees in the selection"),
        };
    }

    let unverified: usize = marked
        .iter()
        .filter(|record| record.candidate_status == CandidateStatus::Unverified)
        .count();
    if unverified > 0 {
        return GateDecision::Blocked {
            reason: format!(
                "{unverified} of {} marked fees belong to unverified candidates",
                marked.len()
            ),
        };
    }

    GateDecision::RequireConfirmation
}

/// Gates the print-transcripts action on a transcript selection.
///
/// A fresh print refuses a selection containing any already-printed
/// transcript; the reprint flow instead requires a reason before the request
/// is sent.
#[must_use]
pub fn gate_print_transcripts(records: &[TranscriptRecord], reprint: bool) -> GateDecision {
    if records.is_empty() {
        return GateDecision::Blocked {
            reason: String::from("No transcripts in the selection"),
        };
    }

    if reprint {
        return GateDecision::RequireReprintReason;
    }

    let already_printed: usize = records
        .iter()
        .filter(|record| record.print_status == PrintStatus::Printed)
        .count();
    if already_printed > 0 {
        return GateDecision::Blocked {
            reason: format!(
                "{already_printed} of {} selected transcripts have already been printed; use the reprint flow",
                records.len()
            ),
        };
    }

    GateDecision::Proceed {
        payment_reference: None,
    }
}
