// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration.

use alloc::string::String;
use core::time::Duration;

use kurbo::Size;
use revolve_arrange::{ArrangeParams, FlowDirection, MIN_ITEM_EXTENT, ViewMode};
use revolve_gesture::{GestureThresholds, MovementMode};
use revolve_paging::DEFAULT_LABEL;
use revolve_window::WindowMetrics;

/// Everything a host can configure on a [`Carousel`](crate::Carousel).
///
/// All distances are in the host's logical pixels, angles in degrees.
/// Values are not validated on construction; [`CarouselConfig::sanitized`]
/// replaces unusable ones and is applied whenever a configuration reaches a
/// carousel.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Width of every item.
    pub item_width: f64,
    /// Height of every item.
    pub item_height: f64,
    /// Gap between items in [`ViewMode::Linear`].
    pub item_spacing: f64,
    /// Distance between item centers beyond the selected item's neighbours.
    pub offset: f64,
    /// Tilt of non-selected items.
    pub rotation_angle: f64,
    /// Scale of non-selected items, in `(0, 1]` for the usual deflated look.
    pub scale_offset: f64,
    /// Distance from the center to the selected item's neighbours.
    pub selected_item_offset: f64,
    /// Duration of position-to-position transitions.
    pub duration: Duration,
    /// How far one swipe may navigate.
    pub movement_mode: MovementMode,
    /// Materialize only the items around the selection.
    pub enable_virtualization: bool,
    /// Reveal the source in batches behind a load-more slot.
    pub allow_load_more: bool,
    /// Batch size for load-more paging.
    pub load_more_items_count: usize,
    /// Label of the load-more slot.
    pub load_more_text: String,
    /// Layout strategy.
    pub view_mode: ViewMode,
    /// Reading direction of the host.
    pub flow_direction: FlowDirection,
    /// Swipe recognition distances.
    pub thresholds: GestureThresholds,
    /// Items kept materialized past each viewport edge.
    pub overscan: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_width: 150.0,
            item_height: 300.0,
            item_spacing: 5.0,
            offset: 60.0,
            rotation_angle: 45.0,
            scale_offset: 0.8,
            selected_item_offset: 120.0,
            duration: Duration::from_millis(600),
            movement_mode: MovementMode::SingleItem,
            enable_virtualization: false,
            allow_load_more: false,
            load_more_items_count: 3,
            load_more_text: String::from(DEFAULT_LABEL),
            view_mode: ViewMode::Default,
            flow_direction: FlowDirection::LeftToRight,
            thresholds: GestureThresholds::DEFAULT,
            overscan: 1,
        }
    }
}

impl CarouselConfig {
    /// Returns a copy with the item size.
    #[must_use]
    pub fn with_item_size(mut self, width: f64, height: f64) -> Self {
        self.item_width = width;
        self.item_height = height;
        self
    }

    /// Returns a copy with the linear-mode spacing.
    #[must_use]
    pub fn with_item_spacing(mut self, spacing: f64) -> Self {
        self.item_spacing = spacing;
        self
    }

    /// Returns a copy with the per-item offset.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Returns a copy with the tilt of non-selected items.
    #[must_use]
    pub fn with_rotation_angle(mut self, degrees: f64) -> Self {
        self.rotation_angle = degrees;
        self
    }

    /// Returns a copy with the scale of non-selected items.
    #[must_use]
    pub fn with_scale_offset(mut self, scale: f64) -> Self {
        self.scale_offset = scale;
        self
    }

    /// Returns a copy with the distance of the selected item's neighbours.
    #[must_use]
    pub fn with_selected_item_offset(mut self, offset: f64) -> Self {
        self.selected_item_offset = offset;
        self
    }

    /// Returns a copy with the transition duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Returns a copy with the swipe movement mode.
    #[must_use]
    pub fn with_movement_mode(mut self, mode: MovementMode) -> Self {
        self.movement_mode = mode;
        self
    }

    /// Returns a copy with virtualization switched on or off.
    #[must_use]
    pub fn with_virtualization(mut self, enabled: bool) -> Self {
        self.enable_virtualization = enabled;
        self
    }

    /// Returns a copy that reveals the source `batch` items at a time.
    ///
    /// A batch of zero turns paging off.
    #[must_use]
    pub fn with_load_more(mut self, batch: usize) -> Self {
        self.allow_load_more = batch > 0;
        self.load_more_items_count = batch;
        self
    }

    /// Returns a copy with the load-more label.
    #[must_use]
    pub fn with_load_more_text(mut self, text: impl Into<String>) -> Self {
        self.load_more_text = text.into();
        self
    }

    /// Returns a copy with the view mode.
    #[must_use]
    pub fn with_view_mode(mut self, mode: ViewMode) -> Self {
        self.view_mode = mode;
        self
    }

    /// Returns a copy with the flow direction.
    #[must_use]
    pub fn with_flow_direction(mut self, direction: FlowDirection) -> Self {
        self.flow_direction = direction;
        self
    }

    /// Returns a copy with the gesture thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: GestureThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Returns a copy with the overscan.
    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Returns a copy in which every value is usable.
    ///
    /// Non-finite or negative sizes, spacings and offsets fall back to zero,
    /// a non-finite angle to no tilt, and a non-positive or non-finite scale
    /// to full scale. Load-more paging with a zero batch is turned off.
    /// Each replaced value is logged at `warn` level.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.item_width = non_negative("item_width", self.item_width);
        self.item_height = non_negative("item_height", self.item_height);
        self.item_spacing = non_negative("item_spacing", self.item_spacing);
        self.offset = non_negative("offset", self.offset);
        self.selected_item_offset =
            non_negative("selected_item_offset", self.selected_item_offset);
        if !self.rotation_angle.is_finite() {
            log::warn!("rotation_angle {} replaced by 0", self.rotation_angle);
            self.rotation_angle = 0.0;
        }
        if !(self.scale_offset.is_finite() && self.scale_offset > 0.0) {
            log::warn!("scale_offset {} replaced by 1", self.scale_offset);
            self.scale_offset = 1.0;
        }
        if self.allow_load_more && self.load_more_items_count == 0 {
            log::warn!("load-more paging needs a non-zero batch; paging turned off");
            self.allow_load_more = false;
        }
        self.thresholds = self.thresholds.sanitized();
        self
    }

    /// Batch size handed to the paging controller; zero when paging is off.
    pub(crate) fn batch_size(&self) -> usize {
        if self.allow_load_more {
            self.load_more_items_count
        } else {
            0
        }
    }

    pub(crate) fn window_metrics(&self, viewport_width: f64) -> WindowMetrics {
        let metrics = match self.view_mode {
            ViewMode::Linear => {
                // Arrangement never lays items out narrower than this.
                let item_width = if self.item_width > 0.0 {
                    self.item_width
                } else {
                    MIN_ITEM_EXTENT
                };
                WindowMetrics::linear(viewport_width, item_width, self.item_spacing)
            }
            ViewMode::Default => WindowMetrics::arranged(
                viewport_width,
                self.item_width,
                self.selected_item_offset,
                self.offset,
            ),
        };
        metrics.with_overscan(self.overscan)
    }

    pub(crate) fn arrange_params(&self, viewport: Size) -> ArrangeParams {
        ArrangeParams {
            viewport,
            item_size: Size::new(self.item_width, self.item_height),
            item_spacing: self.item_spacing,
            offset: self.offset,
            selected_item_offset: self.selected_item_offset,
            rotation_angle: self.rotation_angle,
            scale_offset: self.scale_offset,
            duration: self.duration,
            view_mode: self.view_mode,
            flow_direction: self.flow_direction,
        }
    }

    /// Returns `true` if switching from `self` to `other` changes which slots
    /// exist. The load-more label alone does not.
    pub(crate) fn reshapes_collection(&self, other: &Self) -> bool {
        self.batch_size() != other.batch_size()
    }
}

fn non_negative(name: &str, value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        log::warn!("{name} {value} replaced by 0");
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_already_sane() {
        let config = CarouselConfig::default();
        assert_eq!(config.clone().sanitized(), config);
        assert_eq!(config.batch_size(), 0);
    }

    #[test]
    fn sanitized_replaces_unusable_values() {
        let config = CarouselConfig::default()
            .with_item_size(-10.0, f64::NAN)
            .with_offset(f64::INFINITY)
            .with_scale_offset(0.0)
            .with_rotation_angle(f64::NAN)
            .sanitized();
        assert_eq!(config.item_width, 0.0);
        assert_eq!(config.item_height, 0.0);
        assert_eq!(config.offset, 0.0);
        assert_eq!(config.scale_offset, 1.0);
        assert_eq!(config.rotation_angle, 0.0);
    }

    #[test]
    fn zero_batch_turns_paging_off() {
        let mut config = CarouselConfig::default();
        config.allow_load_more = true;
        config.load_more_items_count = 0;
        assert!(!config.sanitized().allow_load_more);

        let config = CarouselConfig::default().with_load_more(4);
        assert!(config.allow_load_more);
        assert_eq!(config.batch_size(), 4);
    }

    #[test]
    fn window_metrics_follow_the_view_mode() {
        let config = CarouselConfig::default()
            .with_item_size(200.0, 100.0)
            .with_item_spacing(5.0)
            .with_view_mode(ViewMode::Linear);
        let metrics = config.window_metrics(1000.0);
        assert_eq!(metrics.selected_offset, 205.0);
        assert_eq!(metrics.step, 205.0);

        let metrics = config.with_view_mode(ViewMode::Default).window_metrics(1000.0);
        assert_eq!(metrics.selected_offset, 120.0);
        assert_eq!(metrics.step, 60.0);
        assert_eq!(metrics.overscan, 1);
    }

    #[test]
    fn linear_metrics_use_the_arranged_item_width() {
        let config = CarouselConfig::default()
            .with_item_size(0.0, 100.0)
            .with_item_spacing(5.0)
            .with_view_mode(ViewMode::Linear);
        let metrics = config.window_metrics(1000.0);
        assert_eq!(metrics.item_width, MIN_ITEM_EXTENT);
        assert_eq!(metrics.step, MIN_ITEM_EXTENT + 5.0);
    }

    #[test]
    fn label_alone_does_not_reshape() {
        let config = CarouselConfig::default().with_load_more(3);
        assert!(!config.reshapes_collection(&config.clone().with_load_more_text("Mehr")));
        assert!(config.reshapes_collection(&config.clone().with_load_more(4)));
        assert!(config.reshapes_collection(&CarouselConfig::default()));
    }
}
