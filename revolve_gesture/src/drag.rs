// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag bookkeeping: origin, last position and a movable step anchor.
//!
//! ## Usage
//!
//! 1) Begin tracking with [`DragState::start`] at the pointer-down position.
//! 2) On each move, call [`DragState::update`] to get the delta since the previous move.
//! 3) Query [`DragState::total_offset`] for the offset from the origin, or
//!    [`DragState::anchor_offset`] for the offset from the last step anchor.
//! 4) After a navigation step, call [`DragState::reset_anchor`] so that the next
//!    step is measured from the current position.
//! 5) Finish with [`DragState::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use revolve_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(100.0, 40.0));
//!
//! drag.update(Point::new(160.0, 42.0));
//! assert_eq!(drag.anchor_offset(Point::new(160.0, 42.0)).unwrap().x, 60.0);
//!
//! // A step was taken: the anchor follows the pointer, the origin does not.
//! drag.reset_anchor(Point::new(160.0, 42.0));
//! assert_eq!(drag.anchor_offset(Point::new(250.0, 42.0)).unwrap().x, 90.0);
//! assert_eq!(drag.total_offset(Point::new(250.0, 42.0)).unwrap().x, 150.0);
//! ```

use kurbo::{Point, Vec2};

/// Tracks pointer positions for a single drag.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    /// Position of the pointer-down that started the drag.
    pub origin: Option<Point>,
    /// Reference point for step distances; moves forward after every step.
    pub anchor: Option<Point>,
    /// Last recorded pointer position.
    pub last_pos: Option<Point>,
}

impl DragState {
    /// Start tracking a new drag from `pos`, discarding any previous drag.
    pub fn start(&mut self, pos: Point) {
        self.origin = Some(pos);
        self.anchor = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Record a new position, returning the movement since the last one.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.origin?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Offset of `pos` from the drag origin.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.origin.map(|origin| pos - origin)
    }

    /// Offset of `pos` from the current step anchor.
    #[must_use]
    pub fn anchor_offset(&self, pos: Point) -> Option<Vec2> {
        self.anchor.map(|anchor| pos - anchor)
    }

    /// Move the step anchor to `pos`. Ignored when no drag is active.
    pub fn reset_anchor(&mut self, pos: Point) {
        if self.origin.is_some() {
            self.anchor = Some(pos);
        }
    }

    /// End the drag and forget all positions.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` between [`DragState::start`] and [`DragState::end`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_inactive() {
        let drag = DragState::default();
        assert!(!drag.is_active());
        assert_eq!(drag.total_offset(Point::new(1.0, 1.0)), None);
        assert_eq!(drag.anchor_offset(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn start_places_origin_anchor_and_last_together() {
        let mut drag = DragState::default();
        let p = Point::new(10.0, 20.0);
        drag.start(p);

        assert_eq!(drag.origin, Some(p));
        assert_eq!(drag.anchor, Some(p));
        assert_eq!(drag.last_pos, Some(p));
    }

    #[test]
    fn update_without_start_is_ignored() {
        let mut drag = DragState::default();
        assert_eq!(drag.update(Point::new(5.0, 5.0)), None);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn update_reports_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(Point::ZERO);

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(
            drag.total_offset(Point::new(8.0, 7.0)),
            Some(Vec2::new(8.0, 7.0))
        );
    }

    #[test]
    fn reset_anchor_only_moves_anchor() {
        let mut drag = DragState::default();
        drag.start(Point::new(100.0, 0.0));
        drag.update(Point::new(160.0, 0.0));
        drag.reset_anchor(Point::new(160.0, 0.0));

        let pos = Point::new(130.0, 0.0);
        assert_eq!(drag.anchor_offset(pos), Some(Vec2::new(-30.0, 0.0)));
        assert_eq!(drag.total_offset(pos), Some(Vec2::new(30.0, 0.0)));
    }

    #[test]
    fn reset_anchor_on_inactive_state_is_safe() {
        let mut drag = DragState::default();
        drag.reset_anchor(Point::new(1.0, 2.0));
        assert_eq!(drag, DragState::default());
    }

    #[test]
    fn end_clears_everything() {
        let mut drag = DragState::default();
        drag.start(Point::new(1.0, 1.0));
        drag.update(Point::new(2.0, 2.0));
        drag.end();
        assert_eq!(drag, DragState::default());
    }
}
