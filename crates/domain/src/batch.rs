// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Default cap on how many records one bulk request may cover.
///
/// Server-side generation of large PDF/ZIP bundles is slow and
/// failure-prone; capping the batch size bounds the worst-case request
/// duration and limits the cost of a partial failure to one batch. This is
/// an operational tuning constant, not a derived value.
pub const DEFAULT_MAX_BATCH_SIZE: u32 = 300;

/// The fixed batch sizes offered to the operator.
pub const BATCH_SIZE_MENU: [u32; 4] = [50, 100, 200, 300];

/// A bulk action decomposed into fixed-size offset/limit slices.
///
/// Created when a requested action's target count exceeds the batch cap;
/// discarded when the operator dismisses the modal or the action completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPlan {
    total_requested: u64,
    max_batch_size: u32,
    chosen_batch_size: u32,
    current_offset: u64,
}

impl BatchPlan {
    /// Creates a plan over `total_requested` records with the default cap.
    #[must_use]
    pub const fn new(total_requested: u64) -> Self {
        Self::with_max(total_requested, DEFAULT_MAX_BATCH_SIZE)
    }

    /// Creates a plan with a custom batch cap.
    ///
    /// The initial batch size defaults to the largest menu entry that fits
    /// under the cap, or the cap itself when every menu entry exceeds it.
    #[must_use]
    pub const fn with_max(total_requested: u64, max_batch_size: u32) -> Self {
        let mut chosen: u32 = max_batch_size;
        let mut i: usize = BATCH_SIZE_MENU.len();
        while i > 0 {
            i -= 1;
            if BATCH_SIZE_MENU[i] <= max_batch_size {
                chosen = BATCH_SIZE_MENU[i];
                break;
            }
        }
        Self {
            total_requested,
            max_batch_size,
            chosen_batch_size: chosen,
            current_offset: 0,
        }
    }

    /// Sets the batch size for the next slice.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBatchSize` if `size` is zero or exceeds
    /// the configured cap.
    pub const fn choose_batch_size(&mut self, size: u32) -> Result<(), DomainError> {
        if size == 0 || size > self.max_batch_size {
            return Err(DomainError::InvalidBatchSize {
                chosen: size,
                max: self.max_batch_size,
            });
        }
        self.chosen_batch_size = size;
        Ok(())
    }

    /// Moves the plan to an operator-supplied offset.
    ///
    /// Offsets other than the natural continuation produce gaps or overlaps
    /// between consecutive batches; callers are expected to warn when
    /// `offset != current_offset` (there is no server-side tracking of
    /// already-processed ranges).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BatchOffsetOutOfRange` if `offset` is not
    /// within `[0, total_requested)`.
    pub const fn set_offset(&mut self, offset: u64) -> Result<(), DomainError> {
        if offset >= self.total_requested {
            return Err(DomainError::BatchOffsetOutOfRange {
                offset,
                total: self.total_requested,
            });
        }
        self.current_offset = offset;
        Ok(())
    }

    /// The `(offset, limit)` slice the next request must cover.
    ///
    /// The limit is clamped to the records remaining past the offset, so a
    /// final partial batch never requests past `total_requested`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // remaining < chosen fits in u32
    pub const fn slice(&self) -> (u64, u32) {
        let remaining: u64 = self.total_requested - self.current_offset;
        let limit: u32 = if remaining < self.chosen_batch_size as u64 {
            remaining as u32
        } else {
            self.chosen_batch_size
        };
        (self.current_offset, limit)
    }

    /// Advances past the slice just executed.
    ///
    /// The offset never exceeds `total_requested`; reaching it marks the
    /// plan complete. A failed batch must NOT be advanced; the operator
    /// decides whether to retry the same slice or skip it.
    pub const fn advance(&mut self) {
        let (offset, limit) = self.slice();
        self.current_offset = offset + limit as u64;
    }

    /// Whether every slice has been executed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.current_offset >= self.total_requested
    }

    /// The total number of records the bulk action covers.
    #[must_use]
    pub const fn total_requested(&self) -> u64 {
        self.total_requested
    }

    /// The configured batch cap.
    #[must_use]
    pub const fn max_batch_size(&self) -> u32 {
        self.max_batch_size
    }

    /// The batch size the next slice will use.
    #[must_use]
    pub const fn chosen_batch_size(&self) -> u32 {
        self.chosen_batch_size
    }

    /// The offset the next slice starts at.
    #[must_use]
    pub const fn current_offset(&self) -> u64 {
        self.current_offset
    }
}
