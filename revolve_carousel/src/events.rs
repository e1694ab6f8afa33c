// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use revolve_gesture::SwipeDirection;

use crate::deferred::LayoutToken;

/// Changes to the set of materialized slots.
///
/// Indices are slot indices. `removed` is applied before `inserted`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectionDelta {
    /// Every previous slot was dropped, for example because the source was
    /// replaced.
    pub reset: bool,
    /// Slots that are no longer materialized.
    pub removed: Vec<usize>,
    /// Slots that were materialized.
    pub inserted: Vec<usize>,
}

impl CollectionDelta {
    /// Returns `true` if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.reset && self.removed.is_empty() && self.inserted.is_empty()
    }
}

/// Notification produced by a [`Carousel`](crate::Carousel).
///
/// Events are queued in the order they happen and handed out by
/// [`Carousel::drain_events`](crate::Carousel::drain_events).
#[derive(Clone, Debug, PartialEq)]
pub enum CarouselEvent<T> {
    /// The selection moved. Emitted at most once per operation.
    SelectionChanged {
        /// Slot selected before the operation.
        old_index: Option<usize>,
        /// Slot selected after the operation.
        new_index: Option<usize>,
        /// Source item selected before the operation.
        old_item: Option<T>,
        /// Source item selected after the operation.
        new_item: Option<T>,
    },
    /// A swipe started.
    SwipeStarted(SwipeDirection),
    /// The started swipe ended.
    SwipeEnded,
    /// Slots were materialized or dropped.
    CollectionChanged(CollectionDelta),
    /// An arrangement pass is waiting for
    /// [`Carousel::run_deferred`](crate::Carousel::run_deferred).
    LayoutRequested(LayoutToken),
}
