// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BATCH_SIZE_MENU, BatchPlan, DEFAULT_MAX_BATCH_SIZE, DomainError};

#[test]
fn test_new_plan_defaults() {
    let plan: BatchPlan = BatchPlan::new(500);
    assert_eq!(plan.total_requested(), 500);
    assert_eq!(plan.max_batch_size(), DEFAULT_MAX_BATCH_SIZE);
    assert_eq!(plan.chosen_batch_size(), 300);
    assert_eq!(plan.current_offset(), 0);
    assert!(!plan.is_complete());
}

#[test]
fn test_with_max_picks_largest_fitting_menu_entry() {
    let plan: BatchPlan = BatchPlan::with_max(500, 150);
    assert_eq!(plan.chosen_batch_size(), 100);
}

#[test]
fn test_with_max_below_menu_uses_cap_itself() {
    let plan: BatchPlan = BatchPlan::with_max(500, 25);
    assert_eq!(plan.chosen_batch_size(), 25);
}

#[test]
fn test_choose_batch_size_accepts_menu_entries() {
    let mut plan: BatchPlan = BatchPlan::new(500);
    for size in BATCH_SIZE_MENU {
        assert!(plan.choose_batch_size(size).is_ok());
        assert_eq!(plan.chosen_batch_size(), size);
    }
}

#[test]
fn test_choose_batch_size_rejects_zero() {
    let mut plan: BatchPlan = BatchPlan::new(500);
    let result: Result<(), DomainError> = plan.choose_batch_size(0);
    assert!(matches!(
        result,
        Err(DomainError::InvalidBatchSize { chosen: 0, max: 300 })
    ));
}

#[test]
fn test_choose_batch_size_rejects_above_cap() {
    let mut plan: BatchPlan = BatchPlan::new(500);
    let result: Result<(), DomainError> = plan.choose_batch_size(301);
    assert!(matches!(result, Err(DomainError::InvalidBatchSize { .. })));
}

#[test]
fn test_set_offset_rejects_out_of_range() {
    let mut plan: BatchPlan = BatchPlan::new(500);
    let result: Result<(), DomainError> = plan.set_offset(500);
    assert!(matches!(
        result,
        Err(DomainError::BatchOffsetOutOfRange { offset: 500, total: 500 })
    ));
}

#[test]
fn test_advance_moves_offset_by_chosen_size() {
    let mut plan: BatchPlan = BatchPlan::new(500);
    plan.choose_batch_size(200).unwrap();
    assert_eq!(plan.slice(), (0, 200));

    plan.advance();
    assert_eq!(plan.current_offset(), 200);
    assert_eq!(plan.slice(), (200, 200));
}

#[test]
fn test_final_slice_is_clamped_to_remainder() {
    let mut plan: BatchPlan = BatchPlan::new(500);
    plan.choose_batch_size(200).unwrap();
    plan.advance();
    plan.advance();
    // 400 of 500 done; the last slice covers only the remaining 100.
    assert_eq!(plan.slice(), (400, 100));

    plan.advance();
    assert_eq!(plan.current_offset(), 500);
    assert!(plan.is_complete());
}

#[test]
fn test_offset_never_exceeds_total() {
    let mut plan: BatchPlan = BatchPlan::new(250);
    plan.choose_batch_size(100).unwrap();
    plan.advance();
    plan.advance();
    plan.advance();
    assert_eq!(plan.current_offset(), 250);
    assert!(plan.is_complete());
}
