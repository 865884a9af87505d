// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use vas_domain::{
    CandidateStatus, FeeRecord, FeeStatus, GatewayStatus, PrintStatus, RecordId, TranscriptRecord,
};

pub fn fee(id: i64, fee_status: FeeStatus) -> FeeRecord {
    FeeRecord {
        id: RecordId::new(id),
        fee_status,
        candidate_status: CandidateStatus::Verified,
        gateway_status: GatewayStatus::NotAttempted,
    }
}

pub fn fee_with(
    id: i64,
    fee_status: FeeStatus,
    candidate_status: CandidateStatus,
    gateway_status: GatewayStatus,
) -> FeeRecord {
    FeeRecord {
        id: RecordId::new(id),
        fee_status,
        candidate_status,
        gateway_status,
    }
}

pub fn transcript(id: i64, print_status: PrintStatus) -> TranscriptRecord {
    TranscriptRecord {
        id: RecordId::new(id),
        print_status,
        candidate_status: CandidateStatus::Verified,
    }
}
