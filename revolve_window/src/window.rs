// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::range::{WindowDiff, WindowRange};

/// Smallest distance between neighbouring item centers used by the walk.
///
/// Keeps the boundary walk finite for zero or negative configured offsets.
pub const MIN_STEP: f64 = 1.0;

/// Geometry the window is computed from.
///
/// All distances share one horizontal coordinate space (typically logical
/// pixels). The selected item is centered in a viewport `viewport_width` wide.
/// Its immediate neighbours sit `selected_offset` away from the center; every
/// item further out adds `step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowMetrics {
    /// Width of the visible area.
    pub viewport_width: f64,
    /// Width of a single item.
    pub item_width: f64,
    /// Distance from the center to the centers of the two direct neighbours.
    pub selected_offset: f64,
    /// Distance between item centers beyond the direct neighbours.
    pub step: f64,
    /// Extra items kept on each side past the first one that leaves the viewport.
    pub overscan: usize,
}

impl WindowMetrics {
    /// Metrics for a plain strip of items `spacing` apart.
    #[must_use]
    pub fn linear(viewport_width: f64, item_width: f64, spacing: f64) -> Self {
        let pitch = item_width + spacing;
        Self {
            viewport_width,
            item_width,
            selected_offset: pitch,
            step: pitch,
            overscan: 1,
        }
    }

    /// Metrics for an arranged carousel where neighbours are `selected_offset`
    /// from the center and further items `offset` apart.
    #[must_use]
    pub fn arranged(viewport_width: f64, item_width: f64, selected_offset: f64, offset: f64) -> Self {
        Self {
            viewport_width,
            item_width,
            selected_offset,
            step: offset,
            overscan: 1,
        }
    }

    /// Returns a copy with a different overscan.
    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    fn step(&self) -> f64 {
        if self.step.is_finite() && self.step > MIN_STEP {
            self.step
        } else {
            MIN_STEP
        }
    }

    fn selected_offset(&self) -> f64 {
        if self.selected_offset.is_finite() {
            self.selected_offset.max(0.0)
        } else {
            0.0
        }
    }

    fn half_item(&self) -> f64 {
        if self.item_width.is_finite() {
            self.item_width.max(0.0) * 0.5
        } else {
            0.0
        }
    }

    fn has_viewport(&self) -> bool {
        self.viewport_width.is_finite() && self.viewport_width > 0.0
    }

    /// Number of items a window can hold when the source is unbounded.
    ///
    /// This counts the selected item, the items up to and including the first
    /// one crossing each viewport edge, and the overscan on both sides.
    #[must_use]
    pub fn capacity(&self) -> usize {
        if !self.has_viewport() {
            return 1 + 2 * self.overscan;
        }
        let room = self.viewport_width * 0.5 - self.selected_offset() - self.half_item();
        let reach = if room >= 0.0 {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "Non-negative and bounded by viewport width over MIN_STEP"
            )]
            let whole_steps = (room / self.step()) as usize;
            whole_steps + 2
        } else {
            1
        };
        1 + 2 * (reach + self.overscan)
    }
}

/// Tracks which contiguous slice of a source must be materialized.
///
/// Call [`VirtualizationWindow::recompute`] whenever the selection, the item
/// count or the viewport changes, then apply [`VirtualizationWindow::diff`] to
/// the materialized items. The window remembers one previous generation so that
/// small selection moves only touch the ends of the slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VirtualizationWindow {
    current: Option<WindowRange>,
    previous: Option<WindowRange>,
}

impl VirtualizationWindow {
    /// Creates an unset window.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            previous: None,
        }
    }

    /// The most recently computed range.
    #[must_use]
    pub fn current(&self) -> Option<WindowRange> {
        self.current
    }

    /// The range before the most recent computation.
    #[must_use]
    pub fn previous(&self) -> Option<WindowRange> {
        self.previous
    }

    /// Forgets both generations; the next diff will be a full rebuild.
    pub fn reset(&mut self) {
        self.current = None;
        self.previous = None;
    }

    /// Computes the window around `selected` for a source of `count` items.
    ///
    /// From the selected item the walk moves outward one neighbour at a time.
    /// The first neighbour whose outer edge falls past the viewport edge ends
    /// the walk on that side; the window then reaches `overscan` items beyond it.
    /// When no neighbour crosses, the window runs to the end of the source.
    ///
    /// Returns `None` for an empty source. An unmeasured viewport yields the
    /// selected item plus overscan.
    pub fn recompute(
        &mut self,
        selected: usize,
        count: usize,
        metrics: &WindowMetrics,
    ) -> Option<WindowRange> {
        self.previous = self.current;
        self.current = if count == 0 {
            None
        } else {
            Some(walk(selected.min(count - 1), count, metrics))
        };
        self.current
    }

    /// Materializes the whole source, for hosts that do not virtualize.
    pub fn cover_all(&mut self, count: usize) -> Option<WindowRange> {
        self.previous = self.current;
        self.current = WindowRange::full(count);
        self.current
    }

    /// Delta between the previous and the current range.
    #[must_use]
    pub fn diff(&self) -> WindowDiff {
        WindowDiff::between(self.previous, self.current)
    }
}

fn walk(selected: usize, count: usize, metrics: &WindowMetrics) -> WindowRange {
    let last = count - 1;
    let overscan = metrics.overscan;
    if !metrics.has_viewport() {
        return WindowRange::new(
            selected.saturating_sub(overscan),
            selected.saturating_add(overscan).min(last),
        );
    }

    let width = metrics.viewport_width;
    let center = width * 0.5;
    let half = metrics.half_item();
    let offset = metrics.selected_offset();
    let step = metrics.step();

    let mut start = 0;
    let mut edge = center - offset - half;
    for index in (0..selected).rev() {
        if edge < 0.0 {
            start = index.saturating_sub(overscan);
            break;
        }
        edge -= step;
    }

    let mut end = last;
    let mut edge = center + offset + half;
    for index in selected + 1..count {
        if edge > width {
            end = index.saturating_add(overscan).min(last);
            break;
        }
        edge += step;
    }

    WindowRange::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_strip_around_middle_item() {
        let mut window = VirtualizationWindow::new();
        let metrics = WindowMetrics::linear(1000.0, 200.0, 5.0);
        let range = window.recompute(5, 10, &metrics).unwrap();
        assert_eq!((range.start, range.end), (2, 8));
        assert_eq!(range.len(), metrics.capacity());
    }

    #[test]
    fn without_overscan_first_crossing_ends_the_walk() {
        let mut window = VirtualizationWindow::new();
        let metrics = WindowMetrics::linear(1000.0, 200.0, 5.0).with_overscan(0);
        let range = window.recompute(5, 10, &metrics).unwrap();
        assert_eq!((range.start, range.end), (3, 7));
    }

    #[test]
    fn window_is_clamped_to_the_source() {
        let mut window = VirtualizationWindow::new();
        let metrics = WindowMetrics::linear(1000.0, 200.0, 5.0);
        assert_eq!(window.recompute(0, 10, &metrics), Some(WindowRange::new(0, 3)));
        assert_eq!(window.recompute(9, 10, &metrics), Some(WindowRange::new(6, 9)));
        assert_eq!(window.recompute(1, 3, &metrics), Some(WindowRange::new(0, 2)));
    }

    #[test]
    fn out_of_range_selection_is_clamped() {
        let mut window = VirtualizationWindow::new();
        let metrics = WindowMetrics::linear(1000.0, 200.0, 5.0);
        let range = window.recompute(50, 10, &metrics).unwrap();
        assert!(range.contains(9));
        assert_eq!(range.end, 9);
    }

    #[test]
    fn arranged_carousel_reaches_further_with_small_offsets() {
        let mut window = VirtualizationWindow::new();
        // Neighbours 120 from center, then 60 per item: 400 of room on each side.
        let metrics = WindowMetrics::arranged(1000.0, 150.0, 120.0, 60.0).with_overscan(0);
        let range = window.recompute(50, 100, &metrics).unwrap();
        // Left edges: 305, 245, ... first negative at distance 7.
        assert_eq!((range.start, range.end), (43, 57));
        assert_eq!(range.len(), metrics.capacity());
    }

    #[test]
    fn empty_source_unsets_the_window() {
        let mut window = VirtualizationWindow::new();
        let metrics = WindowMetrics::linear(1000.0, 200.0, 5.0);
        window.recompute(0, 10, &metrics);
        assert_eq!(window.recompute(0, 0, &metrics), None);
        assert_eq!(window.current(), None);
        assert!(window.diff().is_rebuild());
    }

    #[test]
    fn unmeasured_viewport_keeps_selection_and_overscan() {
        let mut window = VirtualizationWindow::new();
        let metrics = WindowMetrics::linear(0.0, 200.0, 5.0);
        assert_eq!(window.recompute(4, 10, &metrics), Some(WindowRange::new(3, 5)));
        let metrics = WindowMetrics::linear(f64::NAN, 200.0, 5.0);
        assert_eq!(window.recompute(0, 10, &metrics), Some(WindowRange::new(0, 1)));
    }

    #[test]
    fn degenerate_step_still_terminates() {
        let mut window = VirtualizationWindow::new();
        let metrics = WindowMetrics::arranged(300.0, 100.0, 0.0, -40.0).with_overscan(0);
        let range = window.recompute(500, 1000, &metrics).unwrap();
        assert!(range.contains(500));
        assert!(range.len() <= metrics.capacity());
    }

    #[test]
    fn selection_always_inside_window() {
        let mut window = VirtualizationWindow::new();
        for (width, item, spacing) in [(1000.0, 200.0, 5.0), (320.0, 300.0, 0.0), (50.0, 400.0, 10.0)] {
            let metrics = WindowMetrics::linear(width, item, spacing);
            for count in [1_usize, 2, 7, 40] {
                for selected in 0..count {
                    let range = window.recompute(selected, count, &metrics).unwrap();
                    assert!(range.contains(selected), "{selected} not in {range:?}");
                    assert!(range.end < count, "{range:?} exceeds {count}");
                }
            }
        }
    }

    #[test]
    fn small_moves_diff_incrementally() {
        let mut window = VirtualizationWindow::new();
        let metrics = WindowMetrics::linear(1000.0, 200.0, 5.0);
        window.recompute(5, 20, &metrics);
        assert!(window.diff().is_rebuild());

        window.recompute(6, 20, &metrics);
        assert_eq!(window.previous(), Some(WindowRange::new(2, 8)));
        assert_eq!(
            window.diff(),
            WindowDiff::Incremental {
                remove_front: 2..3,
                insert_front: 3..3,
                remove_back: 9..9,
                insert_back: 9..10,
            }
        );

        window.recompute(6, 20, &metrics);
        assert_eq!(window.diff(), WindowDiff::Unchanged);
    }

    #[test]
    fn cover_all_and_reset() {
        let mut window = VirtualizationWindow::new();
        assert_eq!(window.cover_all(4), Some(WindowRange::new(0, 3)));
        window.reset();
        assert_eq!(window.current(), None);
        assert_eq!(window.previous(), None);
        assert_eq!(window.diff(), WindowDiff::Unchanged);
    }
}
