// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Revolve Window: virtualization windows for carousel-style strips.
//!
//! A carousel over a large source should only materialize the items that can
//! actually appear on screen around the selected one. This crate decides which
//! contiguous slice that is and how it changed since the last pass:
//!
//! - [`WindowMetrics`]: viewport width, item width and the spacing of item
//!   centers around the selection, plus an overscan.
//! - [`VirtualizationWindow`]: recomputes the inclusive [`WindowRange`] for a
//!   selected index and keeps the previous range for one generation.
//! - [`WindowDiff`]: what to tear down and what to build, either as a full
//!   rebuild or as incremental edits at the two ends of the slice.
//!
//! The crate does not own any items. Hosts keep their materialized items keyed
//! by index and apply [`WindowDiff::removed`] and [`WindowDiff::inserted`].
//!
//! ## Minimal example
//!
//! ```rust
//! use revolve_window::{VirtualizationWindow, WindowDiff, WindowMetrics};
//!
//! // A 1000 unit wide viewport showing 200 unit items, 5 apart.
//! let metrics = WindowMetrics::linear(1000.0, 200.0, 5.0);
//! let mut window = VirtualizationWindow::new();
//!
//! let range = window.recompute(5, 10, &metrics).unwrap();
//! assert_eq!((range.start, range.end), (2, 8));
//! assert!(window.diff().is_rebuild());
//!
//! // Moving the selection by one only touches the ends.
//! window.recompute(6, 10, &metrics);
//! let diff = window.diff();
//! assert_eq!(diff.removed().collect::<Vec<_>>(), [2]);
//! assert_eq!(diff.inserted().collect::<Vec<_>>(), [9]);
//! ```
//!
//! All distances are expected to be finite. Non-finite or negative values are
//! treated as zero, and item center spacing never drops below [`MIN_STEP`].
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod range;
mod window;

pub use range::{WindowDiff, WindowRange};
pub use window::{MIN_STEP, VirtualizationWindow, WindowMetrics};
