// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::RecordId;
use std::collections::BTreeSet;

/// The records an operator has marked across a paginated, filtered list.
///
/// Modeled as a tagged union rather than a boolean flag plus an ID array so
/// the two representations can never disagree. `AllMatchingFilter` is a
/// virtual selection: it refers to every record matching the current filter,
/// which may be far larger than anything rendered on screen, and is never
/// enumerated client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A concrete, bounded set of record identifiers.
    Explicit(BTreeSet<RecordId>),
    /// Every record matching the current filter, independent of what is
    /// rendered.
    AllMatchingFilter {
        /// The server-reported count of matching records, kept for display
        /// only.
        total_count: u64,
        /// The explicit set that was active when select-all-matching was
        /// engaged. An individual toggle collapses back to this set.
        prior: BTreeSet<RecordId>,
    },
}

impl Selection {
    /// Creates an empty explicit selection.
    #[must_use]
    pub const fn new() -> Self {
        Self::Explicit(BTreeSet::new())
    }

    /// Flips membership of `id`.
    ///
    /// An individual toggle is only meaningful relative to a concrete set, so
    /// a virtual all-matching selection collapses to its retained prior set
    /// before the flip.
    pub fn toggle(&mut self, id: RecordId) {
        let mut ids: BTreeSet<RecordId> = match std::mem::replace(self, Self::new()) {
            Self::Explicit(ids) | Self::AllMatchingFilter { prior: ids, .. } => ids,
        };
        if !ids.remove(&id) {
            ids.insert(id);
        }
        *self = Self::Explicit(ids);
    }

    /// Selects exactly the visible rows, or clears if they are already
    /// exactly selected (toggle-all semantics for the current page).
    pub fn select_all_visible(&mut self, visible_ids: &[RecordId]) {
        let visible: BTreeSet<RecordId> = visible_ids.iter().copied().collect();
        match self {
            Self::Explicit(ids) if *ids == visible => self.clear(),
            _ => *self = Self::Explicit(visible),
        }
    }

    /// Switches to the virtual all-matching-filter selection.
    ///
    /// `total_count` is the server-reported match count and is stored for
    /// display purposes only; the true set is unknown until executed.
    pub fn select_all_matching(&mut self, total_count: u64) {
        let prior: BTreeSet<RecordId> = match std::mem::replace(self, Self::new()) {
            Self::Explicit(ids) | Self::AllMatchingFilter { prior: ids, .. } => ids,
        };
        *self = Self::AllMatchingFilter { total_count, prior };
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// The number of records this selection refers to.
    ///
    /// For a virtual selection this is the stored total count, not the size
    /// of any client-side set.
    #[must_use]
    pub fn effective_count(&self) -> u64 {
        match self {
            Self::Explicit(ids) => ids.len() as u64,
            Self::AllMatchingFilter { total_count, .. } => *total_count,
        }
    }

    /// Whether the selection refers to zero records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effective_count() == 0
    }

    /// Whether `id` is an explicitly selected member.
    ///
    /// Always false in all-matching mode: membership there is decided
    /// server-side.
    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        match self {
            Self::Explicit(ids) => ids.contains(&id),
            Self::AllMatchingFilter { .. } => false,
        }
    }

    /// The explicit identifiers, in stable order, when the selection is
    /// concrete.
    #[must_use]
    pub fn explicit_ids(&self) -> Option<Vec<RecordId>> {
        match self {
            Self::Explicit(ids) => Some(ids.iter().copied().collect()),
            Self::AllMatchingFilter { .. } => None,
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}
