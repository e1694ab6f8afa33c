// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Revolve Carousel: a headless carousel control.
//!
//! [`Carousel`] ties the Revolve component crates together:
//!
//! - pointer input goes through a [`GestureTracker`](revolve_gesture::GestureTracker)
//!   and turns into swipes and navigation steps,
//! - navigation moves a [`SelectionModel`](revolve_selection::SelectionModel),
//! - a [`VirtualizationWindow`](revolve_window::VirtualizationWindow) decides
//!   which slots are materialized as [`CarouselItem`]s,
//! - [`arrange`](revolve_arrange::arrange) places them, producing an
//!   [`AnimationPlan`] the host animates toward,
//! - a [`LoadMoreController`](revolve_paging::LoadMoreController) reveals long
//!   sources in batches behind a trailing load-more slot.
//!
//! The carousel renders nothing and owns no views. Hosts report the viewport
//! size and pointer input, read the plan, and drain [`CarouselEvent`]s.
//! After data changes the arrangement is deferred: the carousel emits
//! [`CarouselEvent::LayoutRequested`] and the host answers with
//! [`Carousel::run_deferred`] once its own layout pass is done.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use revolve_carousel::{Carousel, CarouselConfig, CarouselEvent, ContentResolver};
//!
//! let mut carousel: Carousel<&str, ()> =
//!     Carousel::new(CarouselConfig::default(), ContentResolver::display());
//! carousel.set_viewport(Size::new(800.0, 400.0));
//! carousel.set_items_source(Some(vec!["a", "b", "c"]));
//!
//! // The host lays out, then runs the requested arrangement pass.
//! let token = carousel.pending_layout().unwrap();
//! assert!(carousel.run_deferred(token));
//! carousel.drain_events().for_each(drop);
//!
//! assert!(carousel.move_next());
//! assert_eq!(carousel.selected_item(), Some(&"b"));
//! assert_eq!(carousel.plan().selected().map(|item| item.index), Some(1));
//!
//! let events: Vec<CarouselEvent<&str>> = carousel.drain_events().collect();
//! assert_eq!(
//!     events,
//!     [CarouselEvent::SelectionChanged {
//!         old_index: Some(0),
//!         new_index: Some(1),
//!         old_item: Some("a"),
//!         new_item: Some("b"),
//!     }]
//! );
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: replaced configuration values
//! at `warn`, ignored requests at `debug`, window and arrangement passes at
//! `trace`. It never installs a logger.
//!
//! ## Features
//!
//! - `std` (default): builds the component crates and Kurbo with `std`.
//! - `libm`: Kurbo's `libm` backend for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for [`CarouselConfig`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod content;
mod controller;
mod deferred;
mod events;
mod item;

pub use config::CarouselConfig;
pub use content::{Content, ContentResolver};
pub use controller::{Carousel, GesturePhase, NavigationKey};
pub use deferred::{DeferredLayout, LayoutToken};
pub use events::{CarouselEvent, CollectionDelta};
pub use item::CarouselItem;

pub use revolve_arrange::{AnimationPlan, FlowDirection, ItemPlacement, PlannedItem, ViewMode};
pub use revolve_gesture::{GestureThresholds, MovementMode, SwipeDirection};
