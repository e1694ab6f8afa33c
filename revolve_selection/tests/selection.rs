// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `revolve_selection` crate.
//!
//! These exercise `SelectionModel` with a focus on bounds, clamping and how the
//! revision counter reacts to no-op requests.

use revolve_selection::{SelectionChange, SelectionError, SelectionModel, Step};

#[test]
fn empty_model_has_no_selection() {
    let sel = SelectionModel::new(0);
    assert_eq!(sel.selected(), None);
    assert_eq!(sel.raw_selected(), 0);
    assert_eq!(sel.revision(), 0);
    assert!(!sel.can_step(Step::Forward));
    assert!(!sel.can_step(Step::Backward));
}

#[test]
fn select_commits_and_bumps_revision() {
    let mut sel = SelectionModel::new(5);
    assert_eq!(sel.select(3), Ok(SelectionChange { old: 0, new: 3 }));
    assert_eq!(sel.selected(), Some(3));
    assert_eq!(sel.previous(), 0);
    assert_eq!(sel.revision(), 1);

    // Re-selecting the same index is accepted but changes nothing.
    assert_eq!(sel.select(3), Ok(SelectionChange { old: 3, new: 3 }));
    assert_eq!(sel.revision(), 1);
}

#[test]
fn out_of_bounds_select_is_rejected_without_side_effects() {
    let mut sel = SelectionModel::new(5);
    sel.select(2).unwrap();
    let rev = sel.revision();

    assert_eq!(
        sel.select(5),
        Err(SelectionError::OutOfBounds { index: 5, count: 5 })
    );
    assert_eq!(sel.selected(), Some(2));
    assert_eq!(sel.revision(), rev);
}

#[test]
fn select_with_accepts_materialized_slot() {
    let mut sel = SelectionModel::new(3);
    let change = sel.select_with(3, |index| index == 3).unwrap();
    assert_eq!(change.new, 3);
    assert!(sel.select_with(4, |index| index == 3).is_err());
}

#[test]
fn stepping_never_leaves_bounds() {
    let mut sel = SelectionModel::new(3);
    assert_eq!(sel.step(Step::Backward), None);
    assert_eq!(sel.step(Step::Forward), Some(SelectionChange { old: 0, new: 1 }));
    assert_eq!(sel.step(Step::Forward), Some(SelectionChange { old: 1, new: 2 }));
    assert_eq!(sel.step(Step::Forward), None);
    assert_eq!(sel.selected(), Some(2));
    assert_eq!(sel.revision(), 2);
}

#[test]
fn random_walk_stays_in_bounds() {
    let mut sel = SelectionModel::new(4);
    // A fixed pseudo-random pattern of steps.
    let mut seed = 0x2545_f491_u32;
    for _ in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let step = if seed & 1 == 0 { Step::Forward } else { Step::Backward };
        sel.step(step);
        let index = sel.selected().unwrap();
        assert!(index < sel.count(), "index {index} escaped the model");
    }
}

#[test]
fn clamp_to_count_pulls_index_back() {
    let mut sel = SelectionModel::new(10);
    sel.select(8).unwrap();

    assert_eq!(sel.clamp_to_count(20), None);
    assert_eq!(sel.selected(), Some(8));

    assert_eq!(sel.clamp_to_count(4), Some(SelectionChange { old: 8, new: 3 }));
    assert_eq!(sel.selected(), Some(3));
}

#[test]
fn clamp_to_zero_keeps_last_valid_index() {
    let mut sel = SelectionModel::new(10);
    sel.select(6).unwrap();
    let rev = sel.revision();

    assert_eq!(sel.clamp_to_count(0), None);
    assert_eq!(sel.selected(), None);
    assert_eq!(sel.raw_selected(), 6);
    assert_eq!(sel.revision(), rev);

    // Refilling with enough items brings the old index back.
    sel.clamp_to_count(7);
    assert_eq!(sel.selected(), Some(6));
}

#[test]
fn reset_returns_to_first_item() {
    let mut sel = SelectionModel::new(10);
    assert_eq!(sel.reset(3), None);

    sel.select(2).unwrap();
    assert_eq!(sel.reset(5), Some(SelectionChange { old: 2, new: 0 }));
    assert_eq!(sel.selected(), Some(0));
    assert_eq!(sel.previous(), 0);
    assert_eq!(sel.count(), 5);
}

#[test]
fn error_display_is_readable() {
    let err = SelectionError::OutOfBounds { index: 9, count: 3 };
    assert_eq!(err.to_string(), "index 9 is out of bounds for 3 items");
}
