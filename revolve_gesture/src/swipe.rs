// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe recognition for horizontally navigated controls.
//!
//! [`GestureTracker`] consumes pointer down/move/up and produces
//! [`GestureSignal`]s. A gesture goes through these thresholds, all measured on
//! the horizontal axis:
//!
//! - [`GestureThresholds::start_distance`]: a swipe starts. Reported once per gesture.
//! - [`GestureThresholds::drag_distance`]: the gesture becomes a drag. In
//!   [`MovementMode::MultipleItems`] this also takes the first step.
//! - [`GestureThresholds::repeat_distance`]: each further step in
//!   [`MovementMode::MultipleItems`], measured from where the previous step happened.
//! - [`GestureThresholds::commit_distance`]: the single step of a
//!   [`MovementMode::SingleItem`] gesture.
//!
//! Vertical movement never picks a direction. When it dominates before a swipe
//! has started, the gesture is restricted and the parent container may take it
//! over (for example to scroll a page that hosts the carousel).
//!
//! ```
//! use kurbo::Point;
//! use revolve_gesture::{GestureSignal, GestureTracker, MovementMode, Navigation, SwipeDirection};
//!
//! let mut tracker = GestureTracker::new(MovementMode::MultipleItems);
//! tracker.on_pointer_down(Point::new(100.0, 50.0));
//!
//! let outcome = tracker.on_pointer_move(Point::new(160.0, 50.0));
//! assert_eq!(
//!     outcome.signals.as_slice(),
//!     &[
//!         GestureSignal::SwipeStarted(SwipeDirection::Right),
//!         GestureSignal::Step(Navigation::Previous),
//!     ]
//! );
//!
//! let outcome = tracker.on_pointer_move(Point::new(250.0, 50.0));
//! assert_eq!(outcome.signals.as_slice(), &[GestureSignal::Step(Navigation::Previous)]);
//!
//! assert_eq!(tracker.on_pointer_up(), Some(GestureSignal::SwipeEnded));
//! ```

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::drag::DragState;

/// Horizontal direction of a swipe, by the sign of the pointer delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeDirection {
    /// The pointer moved toward smaller x.
    Left,
    /// The pointer moved toward larger x.
    Right,
}

impl SwipeDirection {
    /// Direction for a horizontal delta, or `None` for zero.
    #[must_use]
    pub fn from_delta(dx: f64) -> Option<Self> {
        if dx < 0.0 {
            Some(Self::Left)
        } else if dx > 0.0 {
            Some(Self::Right)
        } else {
            None
        }
    }

    /// Returns `true` for [`SwipeDirection::Left`].
    #[must_use]
    pub fn is_left(self) -> bool {
        self == Self::Left
    }

    /// The navigation a swipe in this direction asks for.
    ///
    /// Dragging content to the left reveals the next item.
    #[must_use]
    pub fn navigation(self) -> Navigation {
        match self {
            Self::Left => Navigation::Next,
            Self::Right => Navigation::Previous,
        }
    }
}

/// One step of navigation through an ordered sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Navigation {
    /// Toward higher indices.
    Next,
    /// Toward lower indices.
    Previous,
}

impl Navigation {
    /// The opposite step.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Next => Self::Previous,
            Self::Previous => Self::Next,
        }
    }
}

/// How far one drag gesture may navigate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementMode {
    /// At most one step per gesture.
    #[default]
    SingleItem,
    /// One step per threshold crossing, for as long as the pointer keeps moving.
    MultipleItems,
}

/// Distances, in the pointer's coordinate space, that drive recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureThresholds {
    /// Horizontal distance after which a swipe starts.
    pub start_distance: f64,
    /// Horizontal distance after which the gesture counts as a drag.
    pub drag_distance: f64,
    /// Distance between consecutive steps in [`MovementMode::MultipleItems`].
    pub repeat_distance: f64,
    /// Distance that commits the step of a [`MovementMode::SingleItem`] gesture.
    pub commit_distance: f64,
}

impl GestureThresholds {
    /// Thresholds suited to touch input at typical logical-pixel densities.
    pub const DEFAULT: Self = Self {
        start_distance: 20.0,
        drag_distance: 50.0,
        repeat_distance: 80.0,
        commit_distance: 100.0,
    };

    /// Returns a copy with every distance finite and positive, and ordered so
    /// that `start <= drag <= repeat` and `start <= commit`.
    #[must_use]
    pub fn sanitized(self) -> Self {
        fn positive(value: f64, fallback: f64) -> f64 {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        }
        let start = positive(self.start_distance, Self::DEFAULT.start_distance);
        let drag = positive(self.drag_distance, Self::DEFAULT.drag_distance).max(start);
        let repeat = positive(self.repeat_distance, Self::DEFAULT.repeat_distance).max(drag);
        let commit = positive(self.commit_distance, Self::DEFAULT.commit_distance).max(start);
        Self {
            start_distance: start,
            drag_distance: drag,
            repeat_distance: repeat,
            commit_distance: commit,
        }
    }
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Something a gesture wants the host to know or do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureSignal {
    /// A swipe started; emitted once per gesture.
    SwipeStarted(SwipeDirection),
    /// Navigate one item.
    Step(Navigation),
    /// The started swipe finished.
    SwipeEnded,
    /// The pointer went up without ever crossing the start threshold.
    Tap(Point),
}

/// Result of a pointer move.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoveOutcome {
    /// Signals produced by this move, in order.
    pub signals: SmallVec<[GestureSignal; 2]>,
    /// `true` when vertical movement dominates and the gesture has not become
    /// a swipe, so an enclosing scroll container may claim it.
    pub parent_may_intercept: bool,
}

/// Per-gesture swipe recognizer.
///
/// A gesture runs from [`GestureTracker::on_pointer_down`] to
/// [`GestureTracker::on_pointer_up`] (or [`GestureTracker::on_pointer_cancel`]).
/// Within one gesture at most one [`GestureSignal::SwipeStarted`] and at most
/// one [`GestureSignal::SwipeEnded`] are produced.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    thresholds: GestureThresholds,
    mode: MovementMode,
    drag: DragState,
    last_delta: Vec2,
    is_dragging: bool,
    is_restricted: bool,
    started: Option<SwipeDirection>,
    single_step_taken: bool,
    steps: u32,
}

impl GestureTracker {
    /// Creates a tracker with default thresholds.
    #[must_use]
    pub fn new(mode: MovementMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Creates a tracker with custom thresholds. They are sanitized first.
    #[must_use]
    pub fn with_thresholds(mode: MovementMode, thresholds: GestureThresholds) -> Self {
        Self {
            mode,
            thresholds: thresholds.sanitized(),
            ..Self::default()
        }
    }

    /// Current movement mode.
    #[must_use]
    pub fn movement_mode(&self) -> MovementMode {
        self.mode
    }

    /// Changes the movement mode. Takes effect for the next gesture.
    pub fn set_movement_mode(&mut self, mode: MovementMode) {
        self.mode = mode;
    }

    /// Current thresholds.
    #[must_use]
    pub fn thresholds(&self) -> GestureThresholds {
        self.thresholds
    }

    /// Replaces the thresholds after sanitizing them.
    pub fn set_thresholds(&mut self, thresholds: GestureThresholds) {
        self.thresholds = thresholds.sanitized();
    }

    /// Position of the pointer-down for the active gesture.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.drag.origin
    }

    /// Offset from the origin at the last move.
    #[must_use]
    pub fn last_delta(&self) -> Vec2 {
        self.last_delta
    }

    /// Returns `true` once the drag threshold has been crossed in this gesture.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Returns `true` if swipes are suppressed for the rest of this gesture.
    #[must_use]
    pub fn is_restricted(&self) -> bool {
        self.is_restricted
    }

    /// Direction of the swipe started in this gesture, if any.
    #[must_use]
    pub fn swipe_direction(&self) -> Option<SwipeDirection> {
        self.started
    }

    /// Returns `true` while a pointer is down.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.drag.is_active()
    }

    /// Begins a new gesture at `pos`, discarding anything left from the last one.
    pub fn on_pointer_down(&mut self, pos: Point) {
        self.reset();
        self.drag.start(pos);
    }

    /// Processes a pointer move.
    pub fn on_pointer_move(&mut self, pos: Point) -> MoveOutcome {
        let mut outcome = MoveOutcome::default();
        let Some(total) = self.drag.total_offset(pos) else {
            return outcome;
        };
        self.drag.update(pos);
        self.last_delta = total;

        if self.is_restricted {
            outcome.parent_may_intercept = true;
            return outcome;
        }

        let abs_dx = total.x.abs();
        let abs_dy = total.y.abs();

        if self.started.is_none()
            && !self.is_dragging
            && abs_dy > abs_dx
            && abs_dy >= self.thresholds.start_distance
        {
            self.is_restricted = true;
            outcome.parent_may_intercept = true;
            return outcome;
        }

        if self.started.is_none()
            && abs_dx >= self.thresholds.start_distance
            && let Some(direction) = SwipeDirection::from_delta(total.x)
        {
            self.started = Some(direction);
            outcome.signals.push(GestureSignal::SwipeStarted(direction));
        }

        if !self.is_dragging && abs_dx >= self.thresholds.drag_distance {
            self.is_dragging = true;
        }

        if let Some(step) = self.next_step(pos, total) {
            outcome.signals.push(GestureSignal::Step(step));
        }

        outcome
    }

    /// Finishes the gesture.
    ///
    /// Returns [`GestureSignal::SwipeEnded`] if a swipe started, or
    /// [`GestureSignal::Tap`] at the last position if the pointer barely moved.
    /// A restricted gesture produces nothing.
    pub fn on_pointer_up(&mut self) -> Option<GestureSignal> {
        let signal = if !self.drag.is_active() || self.is_restricted {
            None
        } else if self.started.is_some() {
            Some(GestureSignal::SwipeEnded)
        } else {
            self.drag.last_pos.map(GestureSignal::Tap)
        };
        self.reset();
        signal
    }

    /// Aborts the gesture, for example when the platform cancels the pointer.
    ///
    /// A started swipe is still closed with [`GestureSignal::SwipeEnded`]; taps
    /// are never reported.
    pub fn on_pointer_cancel(&mut self) -> Option<GestureSignal> {
        let signal = (self.drag.is_active() && !self.is_restricted && self.started.is_some())
            .then_some(GestureSignal::SwipeEnded);
        self.reset();
        signal
    }

    /// Suppresses any further swipe in the current gesture.
    ///
    /// Hosts call this when an enclosing container captures the pointer.
    pub fn restrict(&mut self) {
        if self.drag.is_active() {
            self.is_restricted = true;
        }
    }

    fn next_step(&mut self, pos: Point, total: Vec2) -> Option<Navigation> {
        match self.mode {
            MovementMode::SingleItem => {
                // Reversing after the committed step is ignored until pointer-up.
                if self.single_step_taken || total.x.abs() < self.thresholds.commit_distance {
                    return None;
                }
                let direction = SwipeDirection::from_delta(total.x)?;
                self.single_step_taken = true;
                self.steps += 1;
                Some(direction.navigation())
            }
            MovementMode::MultipleItems => {
                if !self.is_dragging {
                    return None;
                }
                let since_anchor = self.drag.anchor_offset(pos)?.x;
                let threshold = if self.steps == 0 {
                    self.thresholds.drag_distance
                } else {
                    self.thresholds.repeat_distance
                };
                if since_anchor.abs() < threshold {
                    return None;
                }
                let direction = SwipeDirection::from_delta(since_anchor)?;
                self.drag.reset_anchor(pos);
                self.steps += 1;
                Some(direction.navigation())
            }
        }
    }

    fn reset(&mut self) {
        self.drag.end();
        self.last_delta = Vec2::ZERO;
        self.is_dragging = false;
        self.is_restricted = false;
        self.started = None;
        self.single_step_taken = false;
        self.steps = 0;
    }
}
