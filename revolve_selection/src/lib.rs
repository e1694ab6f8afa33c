// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Revolve Selection: single-index selection bookkeeping.
//!
//! A carousel shows exactly one selected item out of an ordered source. This
//! crate keeps the authoritative index for that selection together with the
//! item count it is validated against:
//!
//! - [`SelectionModel::select`] commits an index inside `0..count` and reports
//!   a [`SelectionChange`]; anything else is rejected with a [`SelectionError`]
//!   and the model keeps the index it had.
//! - [`SelectionModel::step`] moves one item forward or backward and is a quiet
//!   no-op at either end.
//! - [`SelectionModel::clamp_to_count`] keeps the index valid when the source
//!   grows or shrinks.
//! - A **revision** counter bumps on every committed change, so observers can
//!   cheaply tell whether anything moved.
//!
//! The model does not know how items are laid out or where they come from.
//!
//! ## Minimal example
//!
//! ```rust
//! use revolve_selection::{SelectionModel, Step};
//!
//! let mut selection = SelectionModel::new(10);
//! assert_eq!(selection.selected(), Some(0));
//!
//! // Moving before the first item does nothing.
//! assert!(selection.step(Step::Backward).is_none());
//!
//! let change = selection.select(3).unwrap();
//! assert_eq!((change.old, change.new), (0, 3));
//!
//! // The source shrinks: the index follows.
//! selection.clamp_to_count(2);
//! assert_eq!(selection.selected(), Some(1));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use core::fmt;

/// Direction for [`SelectionModel::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Toward `count - 1`.
    Forward,
    /// Toward `0`.
    Backward,
}

/// A committed selection change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SelectionChange {
    /// Index before the change.
    pub old: usize,
    /// Index after the change.
    pub new: usize,
}

/// Error returned when an index cannot be selected.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionError {
    /// The index is outside `0..count` and no slot exists there.
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// Item count at the time of the request.
        count: usize,
    },
}

impl fmt::Debug for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, count } => {
                write!(f, "OutOfBounds {{ index: {index}, count: {count} }}")
            }
        }
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, count } => {
                write!(f, "index {index} is out of bounds for {count} items")
            }
        }
    }
}

impl core::error::Error for SelectionError {}

/// Selected index of an ordered source, validated against its item count.
///
/// Invariant: `selected < count` whenever `count > 0`. When `count` drops to
/// zero the last valid index is kept, so a refill restores it as far as possible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionModel {
    selected: usize,
    previous: usize,
    count: usize,
    revision: u64,
}

impl SelectionModel {
    /// Creates a model over `count` items with the first one selected.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            selected: 0,
            previous: 0,
            count,
            revision: 0,
        }
    }

    /// The selected index, or `None` when there are no items.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        (self.count > 0).then_some(self.selected)
    }

    /// The stored index, even when `count` is zero.
    #[must_use]
    pub fn raw_selected(&self) -> usize {
        self.selected
    }

    /// Index before the most recent committed change.
    #[must_use]
    pub fn previous(&self) -> usize {
        self.previous
    }

    /// Item count the selection is validated against.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Monotonically increasing change counter.
    ///
    /// It is bumped only when the selected index actually changes; selecting the
    /// already-selected index leaves it untouched.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if a step in `step` direction would move the selection.
    #[must_use]
    pub fn can_step(&self, step: Step) -> bool {
        match step {
            Step::Forward => self.count > 0 && self.selected + 1 < self.count,
            Step::Backward => self.count > 0 && self.selected > 0,
        }
    }

    /// Selects `index` if it lies inside `0..count`.
    ///
    /// Selecting the current index succeeds with `old == new` and does not bump
    /// the revision. On error nothing changes: the selection stays on the index
    /// it held before the request.
    pub fn select(&mut self, index: usize) -> Result<SelectionChange, SelectionError> {
        self.select_with(index, |_| false)
    }

    /// Like [`SelectionModel::select`], but an index outside `0..count` is still
    /// accepted when `has_slot(index)` reports that something is materialized there.
    ///
    /// Hosts use this while a source is being replaced and the count lags the
    /// slots that are already on screen.
    pub fn select_with(
        &mut self,
        index: usize,
        has_slot: impl FnOnce(usize) -> bool,
    ) -> Result<SelectionChange, SelectionError> {
        if index >= self.count && !has_slot(index) {
            return Err(SelectionError::OutOfBounds {
                index,
                count: self.count,
            });
        }
        Ok(self.commit(index))
    }

    /// Moves one item in `step` direction.
    ///
    /// Returns `None`, leaving everything untouched, at either bound or when
    /// there are no items.
    pub fn step(&mut self, step: Step) -> Option<SelectionChange> {
        if !self.can_step(step) {
            return None;
        }
        let target = match step {
            Step::Forward => self.selected + 1,
            Step::Backward => self.selected - 1,
        };
        Some(self.commit(target))
    }

    /// Updates the item count and pulls the selection back inside it.
    ///
    /// With `count == 0` the index is left at its last valid value and no change
    /// is reported.
    pub fn clamp_to_count(&mut self, count: usize) -> Option<SelectionChange> {
        self.count = count;
        if count == 0 || self.selected < count {
            return None;
        }
        let change = self.commit(count - 1);
        (change.old != change.new).then_some(change)
    }

    /// Forgets the selection history: index `0`, nothing previous.
    ///
    /// Used when the whole source is replaced. Reports a change only if the
    /// visible index moved.
    pub fn reset(&mut self, count: usize) -> Option<SelectionChange> {
        let old = self.selected;
        self.count = count;
        self.previous = 0;
        if old == 0 {
            return None;
        }
        self.selected = 0;
        self.bump_revision();
        Some(SelectionChange { old, new: 0 })
    }

    fn commit(&mut self, index: usize) -> SelectionChange {
        let old = self.selected;
        if old != index {
            self.previous = old;
            self.selected = index;
            self.bump_revision();
        }
        SelectionChange { old, new: index }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
