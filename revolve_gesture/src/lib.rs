// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Revolve Gesture: swipe recognition for carousel-style controls.
//!
//! This crate turns a raw pointer stream (down, move, up) into a small set of
//! intents a horizontally navigated control cares about:
//!
//! - [`GestureSignal::SwipeStarted`]: the pointer moved far enough sideways to
//!   count as a swipe. Reported once per gesture, with its [`SwipeDirection`].
//! - [`GestureSignal::Step`]: move the selection by one item ([`Navigation`]).
//! - [`GestureSignal::SwipeEnded`]: the started swipe is over.
//! - [`GestureSignal::Tap`]: the pointer went up without becoming a swipe.
//!
//! Two modules do the work:
//!
//! - [`drag`]: position bookkeeping (origin, last position, step anchor).
//! - [`swipe`]: the threshold-driven [`GestureTracker`].
//!
//! The tracker knows nothing about item counts. Hosts apply [`Navigation`]
//! steps to their own selection and drop the ones that would leave its bounds.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use revolve_gesture::{GestureSignal, GestureTracker, MovementMode, Navigation};
//!
//! let mut tracker = GestureTracker::new(MovementMode::SingleItem);
//! tracker.on_pointer_down(Point::new(300.0, 200.0));
//!
//! let mut steps = Vec::new();
//! for x in [280.0, 240.0, 180.0, 120.0] {
//!     for signal in tracker.on_pointer_move(Point::new(x, 200.0)).signals {
//!         if let GestureSignal::Step(step) = signal {
//!             steps.push(step);
//!         }
//!     }
//! }
//! assert_eq!(steps, [Navigation::Next]);
//! assert_eq!(tracker.on_pointer_up(), Some(GestureSignal::SwipeEnded));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod drag;
pub mod swipe;

pub use swipe::{
    GestureSignal, GestureThresholds, GestureTracker, MoveOutcome, MovementMode, Navigation,
    SwipeDirection,
};
