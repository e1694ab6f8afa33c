// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Revolve Paging: incremental "load more" for item collections.
//!
//! Some carousels do not show their whole source at once. They show a first
//! batch, followed by a synthetic **load-more sentinel** slot; activating the
//! sentinel reveals the next batch. [`LoadMoreController`] keeps the two halves
//! of such a source:
//!
//! - the **visible** items, which hosts materialize, and
//! - the **pending** queue, which has not been shown yet.
//!
//! Invariants:
//!
//! - The sentinel is present exactly when items are pending, and it is always
//!   the last slot ([`LoadMoreController::sentinel_index`]).
//! - Every [`LoadMoreController::trigger`] that does something strictly shrinks
//!   the pending queue. Once it is empty, triggers are no-ops.
//!
//! ## Minimal example
//!
//! ```rust
//! use revolve_paging::{LoadMoreController, Slot};
//!
//! let mut paging = LoadMoreController::new("Load more");
//! paging.configure_source(0..8, 3);
//!
//! assert_eq!(paging.visible(), &[0, 1, 2]);
//! assert_eq!(paging.slot(3), Some(Slot::LoadMore));
//!
//! let batch = paging.trigger().unwrap();
//! assert_eq!(batch.added, 3..6);
//! assert!(batch.sentinel_present);
//!
//! let batch = paging.trigger().unwrap();
//! assert_eq!(batch.added, 6..8);
//! assert!(!batch.sentinel_present);
//! assert!(paging.trigger().is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

/// Label used for the sentinel when none is configured.
pub const DEFAULT_LABEL: &str = "Load More";

/// One slot of the materialized collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot<T> {
    /// A real source item.
    Item(T),
    /// The load-more sentinel.
    LoadMore,
}

impl<T> Slot<T> {
    /// Returns `true` for [`Slot::LoadMore`].
    #[must_use]
    pub fn is_load_more(&self) -> bool {
        matches!(self, Self::LoadMore)
    }

    /// The item, if this is [`Slot::Item`].
    #[must_use]
    pub fn item(self) -> Option<T> {
        match self {
            Self::Item(item) => Some(item),
            Self::LoadMore => None,
        }
    }
}

/// Outcome of a successful [`LoadMoreController::trigger`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchResult {
    /// Visible indices that were just appended.
    pub added: Range<usize>,
    /// Items still pending afterwards.
    pub remaining: usize,
    /// Whether the sentinel follows the new items.
    pub sentinel_present: bool,
}

/// Splits a source into visible items and a pending queue revealed in batches.
#[derive(Clone, Debug)]
pub struct LoadMoreController<T> {
    visible: Vec<T>,
    pending: VecDeque<T>,
    batch_size: usize,
    label: String,
}

impl<T> Default for LoadMoreController<T> {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL)
    }
}

impl<T> LoadMoreController<T> {
    /// Creates an empty controller whose sentinel shows `label`.
    ///
    /// The label is the localized text hosts render inside the sentinel.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            visible: Vec::new(),
            pending: VecDeque::new(),
            batch_size: 0,
            label: label.into(),
        }
    }

    /// Replaces the whole source.
    ///
    /// With `batch_size > 0` and a source longer than one batch, only the
    /// first batch becomes visible and the rest is queued behind the sentinel.
    /// Otherwise everything is visible and there is no sentinel.
    pub fn configure_source(&mut self, source: impl IntoIterator<Item = T>, batch_size: usize) {
        self.batch_size = batch_size;
        self.visible.clear();
        self.pending.clear();
        let mut source = source.into_iter();
        if batch_size == 0 {
            self.visible.extend(source);
            return;
        }
        self.visible.extend(source.by_ref().take(batch_size));
        self.pending.extend(source);
    }

    /// Changes the batch size for later triggers.
    ///
    /// A batch size of zero turns paging off and reveals everything pending.
    pub fn set_batch_size(&mut self, batch_size: usize) {
        self.batch_size = batch_size;
        if batch_size == 0 {
            self.visible.extend(self.pending.drain(..));
        }
    }

    /// Reveals the next batch.
    ///
    /// Returns `None`, changing nothing, when no items are pending.
    pub fn trigger(&mut self) -> Option<BatchResult> {
        if self.pending.is_empty() {
            return None;
        }
        let take = self.batch_size.max(1).min(self.pending.len());
        let start = self.visible.len();
        self.visible.extend(self.pending.drain(..take));
        Some(BatchResult {
            added: start..self.visible.len(),
            remaining: self.pending.len(),
            sentinel_present: self.has_sentinel(),
        })
    }

    /// Reveals the next batch if `slot` is the sentinel slot.
    ///
    /// Activating any other slot is a no-op.
    pub fn trigger_at(&mut self, slot: usize) -> Option<BatchResult> {
        if self.sentinel_index() == Some(slot) {
            self.trigger()
        } else {
            None
        }
    }

    /// Items that are currently shown.
    #[must_use]
    pub fn visible(&self) -> &[T] {
        &self.visible
    }

    /// Number of items not yet shown.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Total number of source items, shown or pending.
    #[must_use]
    pub fn source_len(&self) -> usize {
        self.visible.len() + self.pending.len()
    }

    /// Iterates the whole source in order, shown items first.
    pub fn source(&self) -> impl Iterator<Item = &T> + '_ {
        self.visible.iter().chain(self.pending.iter())
    }

    /// Configured batch size; zero when paging is off.
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Returns `true` while the sentinel is part of the collection.
    #[must_use]
    pub fn has_sentinel(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Slot index of the sentinel, always the last one.
    #[must_use]
    pub fn sentinel_index(&self) -> Option<usize> {
        self.has_sentinel().then_some(self.visible.len())
    }

    /// Number of slots: visible items plus the sentinel if present.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.visible.len() + usize::from(self.has_sentinel())
    }

    /// The slot at `index`.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<Slot<&T>> {
        match self.visible.get(index) {
            Some(item) => Some(Slot::Item(item)),
            None if self.sentinel_index() == Some(index) => Some(Slot::LoadMore),
            None => None,
        }
    }

    /// Text shown inside the sentinel.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the sentinel text.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Removes the whole source, shown items first, leaving the controller empty.
    ///
    /// Used to re-split a source under a new batch size.
    pub fn take_source(&mut self) -> Vec<T> {
        let mut source = core::mem::take(&mut self.visible);
        source.extend(self.pending.drain(..));
        source
    }

    /// Drops every item, shown or pending.
    pub fn clear(&mut self) {
        self.visible.clear();
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_sources_have_no_sentinel() {
        let mut paging = LoadMoreController::default();
        paging.configure_source([1, 2, 3], 3);
        assert_eq!(paging.visible(), &[1, 2, 3]);
        assert!(!paging.has_sentinel());
        assert_eq!(paging.slot_count(), 3);
        assert_eq!(paging.slot(3), None);
        assert!(paging.trigger().is_none());
    }

    #[test]
    fn zero_batch_shows_everything() {
        let mut paging = LoadMoreController::default();
        paging.configure_source(0..100, 0);
        assert_eq!(paging.visible().len(), 100);
        assert_eq!(paging.pending_len(), 0);
    }

    #[test]
    fn trigger_at_requires_the_sentinel_slot() {
        let mut paging = LoadMoreController::default();
        paging.configure_source(0..5, 2);
        assert_eq!(paging.sentinel_index(), Some(2));
        assert!(paging.trigger_at(1).is_none());
        assert_eq!(paging.pending_len(), 3);
        assert_eq!(paging.trigger_at(2).unwrap().added, 2..4);
        assert_eq!(paging.sentinel_index(), Some(4));
    }

    #[test]
    fn disabling_paging_reveals_pending_items() {
        let mut paging = LoadMoreController::default();
        paging.configure_source(0..6, 2);
        paging.set_batch_size(0);
        assert_eq!(paging.visible(), &[0, 1, 2, 3, 4, 5]);
        assert!(!paging.has_sentinel());
    }

    #[test]
    fn source_preserves_order_across_halves() {
        let mut paging = LoadMoreController::default();
        paging.configure_source(0..7, 3);
        paging.trigger();
        let all: Vec<i32> = paging.source().copied().collect();
        assert_eq!(all, [0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(paging.source_len(), 7);
    }

    #[test]
    fn take_source_empties_both_halves() {
        let mut paging = LoadMoreController::default();
        paging.configure_source(0..5, 2);
        assert_eq!(paging.take_source(), [0, 1, 2, 3, 4]);
        assert_eq!(paging.slot_count(), 0);
        assert!(!paging.has_sentinel());
    }

    #[test]
    fn slot_reports_items_and_sentinel() {
        let mut paging = LoadMoreController::new("More");
        paging.configure_source(["a", "b", "c"], 1);
        assert_eq!(paging.slot(0), Some(Slot::Item(&"a")));
        assert!(paging.slot(1).unwrap().is_load_more());
        assert_eq!(paging.label(), "More");
    }
}
