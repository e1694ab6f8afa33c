// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Where one item sits after a layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemPlacement {
    /// Center of the item in viewport coordinates.
    pub center: Point,
    /// Unscaled item size.
    pub size: Size,
    /// Uniform scale around the center.
    pub scale: f64,
    /// Tilt around the vertical axis, in degrees.
    pub rotation: f64,
    /// Paint rank; higher values are drawn later, on top.
    pub z_order: usize,
}

impl ItemPlacement {
    /// Scaled bounds of the item, ignoring the tilt.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, self.size * self.scale)
    }

    /// Maps item-local coordinates (origin at the top-left corner) into the
    /// viewport, applying scale and position.
    ///
    /// The tilt is a rotation out of the screen plane and is not part of this
    /// 2D transform; hosts apply [`ItemPlacement::rotation`] with their own
    /// perspective.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.center.to_vec2())
            * Affine::scale(self.scale)
            * Affine::translate(-Vec2::new(self.size.width * 0.5, self.size.height * 0.5))
    }
}

/// An item to arrange, with its placement from the previous pass if it was
/// already on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrangeInput {
    /// Logical index in the source.
    pub index: usize,
    /// Placement from the previous pass.
    pub prior: Option<ItemPlacement>,
}

impl ArrangeInput {
    /// An item that has not been placed yet.
    #[must_use]
    pub fn fresh(index: usize) -> Self {
        Self { index, prior: None }
    }
}

/// Target of one item in an [`AnimationPlan`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlannedItem {
    /// Logical index in the source.
    pub index: usize,
    /// Whether this is the selected item.
    pub is_selected: bool,
    /// Where the item should end up.
    pub target: ItemPlacement,
    /// How long the transition to `target` should take. Zero means snap.
    pub duration: Duration,
}

impl PlannedItem {
    /// Returns `true` if the host should animate this item.
    #[must_use]
    pub fn is_animated(&self) -> bool {
        !self.duration.is_zero()
    }
}

/// Per-item targets for one layout pass, plus the paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationPlan {
    pub(crate) items: Vec<PlannedItem>,
    pub(crate) draw_order: Vec<usize>,
}

impl AnimationPlan {
    /// Returns `true` if nothing was arranged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of arranged items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Arranged items, in the order they were given to [`crate::arrange`].
    #[must_use]
    pub fn items(&self) -> &[PlannedItem] {
        &self.items
    }

    /// The plan entry for logical `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PlannedItem> {
        self.items.iter().find(|item| item.index == index)
    }

    /// The selected item, if it was part of the pass.
    #[must_use]
    pub fn selected(&self) -> Option<&PlannedItem> {
        self.items.iter().find(|item| item.is_selected)
    }

    /// Items from back to front; paint in this order.
    pub fn back_to_front(&self) -> impl DoubleEndedIterator<Item = &PlannedItem> + '_ {
        self.draw_order.iter().map(|&slot| &self.items[slot])
    }

    /// Logical index of the topmost item whose scaled bounds contain `point`.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.back_to_front()
            .rev()
            .find(|item| item.target.bounds().contains(point))
            .map(|item| item.index)
    }
}
