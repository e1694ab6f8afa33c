// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `revolve_paging` crate.
//!
//! These walk a source through repeated load-more triggers and check the
//! sentinel and the pending queue after every step.

use revolve_paging::{BatchResult, LoadMoreController, Slot};

#[test]
fn ten_pending_items_in_batches_of_three() {
    let mut paging = LoadMoreController::new("Load More");
    // Three visible up front, ten queued behind the sentinel.
    paging.configure_source(0..13, 3);
    assert_eq!(paging.pending_len(), 10);
    assert_eq!(paging.sentinel_index(), Some(3));

    for round in 1..=3 {
        let batch = paging.trigger().unwrap();
        assert_eq!(batch.added.len(), 3);
        assert!(batch.sentinel_present);
        assert_eq!(paging.pending_len(), 10 - 3 * round);
        assert_eq!(paging.slot(paging.slot_count() - 1), Some(Slot::LoadMore));
    }

    assert_eq!(paging.pending_len(), 1);
    assert_eq!(
        paging.trigger(),
        Some(BatchResult {
            added: 12..13,
            remaining: 0,
            sentinel_present: false,
        })
    );
    assert_eq!(paging.sentinel_index(), None);
    assert_eq!(paging.slot_count(), 13);
    assert_eq!(paging.slot(12), Some(Slot::Item(&12)));
}

#[test]
fn pending_queue_shrinks_until_triggers_stop() {
    let mut paging = LoadMoreController::default();
    paging.configure_source(0..50, 7);

    let mut last = paging.pending_len();
    while let Some(batch) = paging.trigger() {
        assert!(paging.pending_len() < last, "trigger must consume items");
        assert_eq!(batch.remaining, paging.pending_len());
        last = paging.pending_len();
    }
    assert_eq!(paging.pending_len(), 0);
    assert_eq!(paging.visible().len(), 50);
    for _ in 0..3 {
        assert!(paging.trigger().is_none());
    }
}

#[test]
fn sentinel_is_always_the_last_slot() {
    let mut paging = LoadMoreController::default();
    paging.configure_source("abcdefghij".chars(), 4);
    while paging.has_sentinel() {
        let last = paging.slot_count() - 1;
        assert_eq!(paging.sentinel_index(), Some(last));
        assert!(paging.slot(last).unwrap().is_load_more());
        for index in 0..last {
            assert!(!paging.slot(index).unwrap().is_load_more());
        }
        paging.trigger();
    }
}

#[test]
fn reconfiguring_replaces_both_halves() {
    let mut paging = LoadMoreController::default();
    paging.configure_source(0..20, 5);
    paging.trigger();
    paging.configure_source(100..103, 5);
    assert_eq!(paging.visible(), &[100, 101, 102]);
    assert!(!paging.has_sentinel());

    paging.clear();
    assert_eq!(paging.slot_count(), 0);
}
