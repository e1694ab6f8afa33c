// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Revolve Arrange: item placement for carousel layouts.
//!
//! Given the materialized items of a carousel and the selected index, [`arrange`]
//! computes where every item goes: its center, scale, tilt and paint rank. The
//! result is an [`AnimationPlan`] that hosts feed to their animation primitive.
//!
//! Two layouts are available through [`ViewMode`]:
//!
//! - [`ViewMode::Default`]: the selected item centered at full size, the others
//!   fanned out on both sides, deflated by a scale factor and tilted toward it.
//! - [`ViewMode::Linear`]: a flat strip of items with the selected one centered.
//!
//! Items carry their previous placement ([`ArrangeInput::prior`]). Only items
//! that were already on screen and actually move get an animation duration;
//! everything else snaps into place. [`arrange`] keeps no state between calls.
//!
//! It does **not** render anything or run animations. Callers are expected to:
//! - Keep their own materialized items and pass them in each pass.
//! - Paint in [`AnimationPlan::back_to_front`] order.
//! - Use [`AnimationPlan::hit_test`] to map taps back to items.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use revolve_arrange::{ArrangeInput, ArrangeParams, arrange};
//!
//! let params = ArrangeParams {
//!     viewport: Size::new(800.0, 400.0),
//!     ..ArrangeParams::default()
//! };
//! let items: Vec<ArrangeInput> = (0..5).map(ArrangeInput::fresh).collect();
//! let plan = arrange(&items, 2, &params);
//!
//! let selected = plan.selected().unwrap();
//! assert_eq!(selected.index, 2);
//! assert_eq!(selected.target.center.x, 400.0);
//!
//! // The selected item is painted last.
//! assert_eq!(plan.back_to_front().last().unwrap().index, 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arrange;
mod modes;
mod plan;

pub use arrange::{ArrangeParams, MIN_ITEM_EXTENT, arrange};
pub use modes::{FlowDirection, ViewMode};
pub use plan::{AnimationPlan, ArrangeInput, ItemPlacement, PlannedItem};
