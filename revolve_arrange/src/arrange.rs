// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Point, Size};

use crate::modes::{FlowDirection, ViewMode};
use crate::plan::{AnimationPlan, ArrangeInput, ItemPlacement, PlannedItem};

/// Smallest item width or height used in [`ViewMode::Linear`].
pub const MIN_ITEM_EXTENT: f64 = 5.0;

/// Everything [`arrange`] needs besides the items themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrangeParams {
    /// Size of the visible area.
    pub viewport: Size,
    /// Unscaled size of every item.
    pub item_size: Size,
    /// Gap between neighbours in [`ViewMode::Linear`].
    pub item_spacing: f64,
    /// Distance between item centers beyond the direct neighbours, in
    /// [`ViewMode::Default`].
    pub offset: f64,
    /// Distance from the center to the direct neighbours, in [`ViewMode::Default`].
    pub selected_item_offset: f64,
    /// Tilt of non-selected items, in degrees.
    pub rotation_angle: f64,
    /// Scale of non-selected items.
    pub scale_offset: f64,
    /// Duration of position-to-position transitions.
    pub duration: Duration,
    /// Layout strategy.
    pub view_mode: ViewMode,
    /// Reading direction of the host.
    pub flow_direction: FlowDirection,
}

impl Default for ArrangeParams {
    fn default() -> Self {
        Self {
            viewport: Size::ZERO,
            item_size: Size::new(150.0, 300.0),
            item_spacing: 5.0,
            offset: 60.0,
            selected_item_offset: 120.0,
            rotation_angle: 45.0,
            scale_offset: 0.8,
            duration: Duration::from_millis(600),
            view_mode: ViewMode::Default,
            flow_direction: FlowDirection::LeftToRight,
        }
    }
}

impl ArrangeParams {
    fn item_size(&self) -> Size {
        match self.view_mode {
            ViewMode::Default => Size::new(
                finite_or_zero(self.item_size.width).max(0.0),
                finite_or_zero(self.item_size.height).max(0.0),
            ),
            ViewMode::Linear => Size::new(
                linear_extent(self.item_size.width),
                linear_extent(self.item_size.height),
            ),
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

fn linear_extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        MIN_ITEM_EXTENT
    }
}

/// Computes target placements for `items` around the `selected` index.
///
/// The result depends only on the arguments: calling it twice with the same
/// inputs yields equal plans.
///
/// In [`ViewMode::Default`], for `position = index - selected`:
///
/// - `0` is centered at full scale, untilted and on top.
/// - Negative positions go left: the direct neighbour sits
///   `selected_item_offset` from the center and each further item adds
///   `offset`. They are tilted by `-rotation_angle` (sign flipped for
///   right-to-left flow) and scaled by `scale_offset`.
/// - Positive positions mirror that on the right with the opposite tilt.
///
/// In [`ViewMode::Linear`] items sit side by side, `item_spacing` apart, at
/// full scale and without tilt, the selected one centered.
///
/// Every item is centered vertically. Nearer items are painted over farther
/// ones. An item only gets a non-zero duration when it had a prior placement
/// that differs from its target, so the first pass after loading data snaps.
#[must_use]
pub fn arrange(items: &[ArrangeInput], selected: usize, params: &ArrangeParams) -> AnimationPlan {
    let size = params.item_size();
    let center = Point::new(
        finite_or_zero(params.viewport.width) * 0.5,
        finite_or_zero(params.viewport.height) * 0.5,
    );
    let pitch = size.width + finite_or_zero(params.item_spacing);

    let mut planned: Vec<PlannedItem> = items
        .iter()
        .map(|input| {
            let position = signed_offset(input.index, selected);
            let (x, scale, rotation) = match params.view_mode {
                ViewMode::Default => place_default(position, center.x, params),
                ViewMode::Linear => (center.x + position as f64 * pitch, 1.0, 0.0),
            };
            PlannedItem {
                index: input.index,
                is_selected: position == 0,
                target: ItemPlacement {
                    center: Point::new(x, center.y),
                    size,
                    scale,
                    rotation,
                    z_order: 0,
                },
                duration: Duration::ZERO,
            }
        })
        .collect();

    let draw_order = paint_order(&planned, selected);
    for (rank, &slot) in draw_order.iter().enumerate() {
        planned[slot].target.z_order = rank;
    }

    for (item, input) in planned.iter_mut().zip(items) {
        if input.prior.is_some_and(|prior| prior != item.target) {
            item.duration = params.duration;
        }
    }

    AnimationPlan {
        items: planned,
        draw_order,
    }
}

fn signed_offset(index: usize, selected: usize) -> isize {
    if index >= selected {
        isize::try_from(index - selected).unwrap_or(isize::MAX)
    } else {
        isize::try_from(selected - index).map_or(isize::MIN, |d| -d)
    }
}

fn place_default(position: isize, center_x: f64, params: &ArrangeParams) -> (f64, f64, f64) {
    if position == 0 {
        return (center_x, 1.0, 0.0);
    }
    let offset = finite_or_zero(params.offset);
    let selected_offset = finite_or_zero(params.selected_item_offset);
    let angle = finite_or_zero(params.rotation_angle) * params.flow_direction.sign();
    let scale = if params.scale_offset.is_finite() && params.scale_offset > 0.0 {
        params.scale_offset
    } else {
        1.0
    };
    let beyond = (position.unsigned_abs() - 1) as f64;
    let distance = selected_offset + offset * beyond;
    if position < 0 {
        (center_x - distance, scale, -angle)
    } else {
        (center_x + distance, scale, angle)
    }
}

/// Slots of `planned` from back to front.
///
/// Items left of the selection already run far to near in index order; items
/// on the right are taken in reverse so they do too. The two sides are then
/// merged by distance, left first on ties, and the selected item goes last.
fn paint_order(planned: &[PlannedItem], selected: usize) -> Vec<usize> {
    let mut left: Vec<usize> = Vec::new();
    let mut right: Vec<usize> = Vec::new();
    let mut front: Vec<usize> = Vec::new();
    for (slot, item) in planned.iter().enumerate() {
        match item.index.cmp(&selected) {
            core::cmp::Ordering::Less => left.push(slot),
            core::cmp::Ordering::Greater => right.push(slot),
            core::cmp::Ordering::Equal => front.push(slot),
        }
    }
    left.sort_by_key(|&slot| planned[slot].index);
    right.sort_by_key(|&slot| core::cmp::Reverse(planned[slot].index));

    let distance = |slot: usize| planned[slot].index.abs_diff(selected);
    let mut order = Vec::with_capacity(planned.len());
    let (mut l, mut r) = (0, 0);
    while l < left.len() || r < right.len() {
        let take_left = match (left.get(l), right.get(r)) {
            (Some(&a), Some(&b)) => distance(a) >= distance(b),
            (Some(_), None) => true,
            _ => false,
        };
        if take_left {
            order.push(left[l]);
            l += 1;
        } else {
            order.push(right[r]);
            r += 1;
        }
    }
    order.extend(front);
    order
}
