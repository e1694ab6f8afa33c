// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index ranges and the deltas between two of them.

use core::ops::{Range, RangeInclusive};

/// A non-empty, inclusive range of item indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowRange {
    /// First materialized index.
    pub start: usize,
    /// Last materialized index.
    pub end: usize,
}

impl WindowRange {
    /// Creates `start..=end`, swapping the bounds if they are reversed.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Range covering every index of a source with `count` items.
    #[must_use]
    pub fn full(count: usize) -> Option<Self> {
        (count > 0).then(|| Self::new(0, count - 1))
    }

    /// Number of indices in the range.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always `false`; present for symmetry with [`WindowRange::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `index` lies inside the range.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Returns `true` if the two ranges share at least one index.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// The same indices as a half-open range.
    #[must_use]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end + 1
    }

    /// Iterates the indices in ascending order.
    pub fn iter(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl IntoIterator for WindowRange {
    type Item = usize;
    type IntoIter = RangeInclusive<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// What changed between two consecutive window computations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WindowDiff {
    /// Nothing to do.
    Unchanged,
    /// Drop everything in `previous` and materialize everything in `current`.
    ///
    /// Produced on the first computation, after a reset, when the window
    /// becomes empty, and when old and new windows do not overlap.
    Rebuild {
        /// The window that was materialized, if any.
        previous: Option<WindowRange>,
        /// The window to materialize, if any.
        current: Option<WindowRange>,
    },
    /// Trim and extend the ends of an overlapping window.
    ///
    /// Each field is a half-open index range; unused ones are empty.
    Incremental {
        /// Indices that left through the front.
        remove_front: Range<usize>,
        /// Indices revealed before the old front.
        insert_front: Range<usize>,
        /// Indices that left through the back.
        remove_back: Range<usize>,
        /// Indices revealed after the old back.
        insert_back: Range<usize>,
    },
}

impl WindowDiff {
    /// Computes the delta from `previous` to `current`.
    #[must_use]
    pub fn between(previous: Option<WindowRange>, current: Option<WindowRange>) -> Self {
        match (previous, current) {
            (None, None) => Self::Unchanged,
            (Some(p), Some(c)) if p == c => Self::Unchanged,
            (Some(p), Some(c)) if p.overlaps(&c) => {
                let (remove_front, insert_front) = if p.start < c.start {
                    (p.start..c.start, c.start..c.start)
                } else {
                    (p.start..p.start, c.start..p.start)
                };
                let (remove_back, insert_back) = if p.end > c.end {
                    (c.end + 1..p.end + 1, p.end + 1..p.end + 1)
                } else {
                    (c.end + 1..c.end + 1, p.end + 1..c.end + 1)
                };
                Self::Incremental {
                    remove_front,
                    insert_front,
                    remove_back,
                    insert_back,
                }
            }
            (previous, current) => Self::Rebuild { previous, current },
        }
    }

    /// Returns `true` for [`WindowDiff::Rebuild`].
    #[must_use]
    pub fn is_rebuild(&self) -> bool {
        matches!(self, Self::Rebuild { .. })
    }

    /// Indices to tear down, front first.
    pub fn removed(&self) -> impl Iterator<Item = usize> {
        let [a, b] = match self {
            Self::Unchanged => [0..0, 0..0],
            Self::Rebuild { previous, .. } => [previous.map_or(0..0, |p| p.as_range()), 0..0],
            Self::Incremental {
                remove_front,
                remove_back,
                ..
            } => [remove_front.clone(), remove_back.clone()],
        };
        a.chain(b)
    }

    /// Indices to materialize, front first.
    pub fn inserted(&self) -> impl Iterator<Item = usize> {
        let [a, b] = match self {
            Self::Unchanged => [0..0, 0..0],
            Self::Rebuild { current, .. } => [current.map_or(0..0, |c| c.as_range()), 0..0],
            Self::Incremental {
                insert_front,
                insert_back,
                ..
            } => [insert_front.clone(), insert_back.clone()],
        };
        a.chain(b)
    }
}
