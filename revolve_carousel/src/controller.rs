// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Size};
use revolve_arrange::{AnimationPlan, ArrangeInput, arrange};
use revolve_gesture::{GestureSignal, GestureTracker, Navigation};
use revolve_paging::{LoadMoreController, Slot};
use revolve_selection::{SelectionModel, Step};
use revolve_window::{VirtualizationWindow, WindowRange};

use crate::config::CarouselConfig;
use crate::content::{Content, ContentResolver};
use crate::deferred::{DeferredLayout, LayoutToken};
use crate::events::{CarouselEvent, CollectionDelta};
use crate::item::CarouselItem;

/// Where the current pointer gesture stands.
///
/// A pointer-down always restarts at [`GesturePhase::Idle`]. The two final
/// phases are kept until the next pointer-down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// No swipe in progress.
    #[default]
    Idle,
    /// The pointer crossed a swipe threshold and is still down.
    Dragging,
    /// The gesture ended as a swipe.
    SwipeCommitted,
    /// The gesture ended without a swipe: a tap, or a gesture handed to a
    /// parent container.
    SwipeCancelled,
}

/// Keyboard navigation requests.
///
/// Hosts map their keys onto these, taking their flow direction into account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigationKey {
    /// Select the next slot.
    Next,
    /// Select the previous slot.
    Previous,
    /// Select the first slot.
    First,
    /// Select the last slot.
    Last,
}

/// Selection as seen before an operation, for change notifications.
struct Snapshot<T> {
    index: Option<usize>,
    item: Option<T>,
}

/// Headless carousel.
///
/// Owns the source, the selection, the gesture state, the virtualization
/// window and the materialized items. Hosts feed it pointer, keyboard and
/// layout input, read [`Carousel::plan`] to position their views and drain
/// [`CarouselEvent`]s to react to changes.
///
/// Slots are the source items currently shown plus, while load-more paging
/// has items pending, one trailing load-more slot. Selection indices are slot
/// indices.
///
/// No operation panics or reports an error: out-of-range input is clamped or
/// ignored and logged at `debug` level.
#[derive(Debug)]
pub struct Carousel<T, H> {
    config: CarouselConfig,
    resolver: ContentResolver<T, H>,
    paging: LoadMoreController<T>,
    has_source: bool,
    selection: SelectionModel,
    gesture: GestureTracker,
    phase: GesturePhase,
    window: VirtualizationWindow,
    items: HashMap<usize, CarouselItem<H>>,
    plan: AnimationPlan,
    viewport: Size,
    deferred: DeferredLayout,
    events: Vec<CarouselEvent<T>>,
}

impl<T: Clone, H> Carousel<T, H> {
    /// Creates an empty carousel. The configuration is sanitized first.
    pub fn new(config: CarouselConfig, resolver: ContentResolver<T, H>) -> Self {
        let config = config.sanitized();
        Self {
            gesture: GestureTracker::with_thresholds(config.movement_mode, config.thresholds),
            paging: LoadMoreController::new(config.load_more_text.clone()),
            config,
            resolver,
            has_source: false,
            selection: SelectionModel::new(0),
            phase: GesturePhase::Idle,
            window: VirtualizationWindow::new(),
            items: HashMap::new(),
            plan: AnimationPlan::default(),
            viewport: Size::ZERO,
            deferred: DeferredLayout::new(),
            events: Vec::new(),
        }
    }

    /// Current configuration, as sanitized.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Size of the visible area, zero until the host reports one.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Phase of the current or most recent gesture.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Result of the most recent arrangement pass.
    #[must_use]
    pub fn plan(&self) -> &AnimationPlan {
        &self.plan
    }

    /// Range of materialized slots.
    #[must_use]
    pub fn window(&self) -> Option<WindowRange> {
        self.window.current()
    }

    /// Materialized items in slot order.
    pub fn items(&self) -> impl Iterator<Item = &CarouselItem<H>> + '_ {
        self.window
            .current()
            .into_iter()
            .flatten()
            .filter_map(|index| self.items.get(&index))
    }

    /// The materialized item at slot `index`.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&CarouselItem<H>> {
        self.items.get(&index)
    }

    /// Number of slots, including the load-more slot.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.paging.slot_count()
    }

    /// Slot index of the load-more slot, if present.
    #[must_use]
    pub fn load_more_index(&self) -> Option<usize> {
        self.paging.sentinel_index()
    }

    /// Number of source items still behind the load-more slot.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.paging.pending_len()
    }

    /// The selected slot, or `None` when there are no slots.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected()
    }

    /// The selected source item; `None` when nothing or the load-more slot is
    /// selected.
    #[must_use]
    pub fn selected_item(&self) -> Option<&T> {
        self.selection
            .selected()
            .and_then(|index| self.source_item(index))
    }

    /// The whole source, shown and pending items, or `None` if none was set.
    pub fn items_source(&self) -> Option<impl Iterator<Item = &T> + '_> {
        self.has_source.then(|| self.paging.source())
    }

    /// Replaces the source. `None` clears the carousel.
    ///
    /// The selection returns to the first slot and every item is
    /// re-materialized. Arrangement is deferred until the host calls
    /// [`Carousel::run_deferred`] with the emitted token.
    pub fn set_items_source(&mut self, source: Option<Vec<T>>) {
        let before = self.snapshot();
        self.has_source = source.is_some();
        self.paging
            .configure_source(source.unwrap_or_default(), self.config.batch_size());
        self.selection.reset(self.paging.slot_count());
        self.rebuild();
        self.request_layout();
        self.finish(before, true);
    }

    /// Replaces the configuration after sanitizing it.
    pub fn set_config(&mut self, config: CarouselConfig) {
        let config = config.sanitized();
        if config == self.config {
            return;
        }
        let before = self.snapshot();
        self.gesture.set_movement_mode(config.movement_mode);
        self.gesture.set_thresholds(config.thresholds);
        let reshape = self.config.reshapes_collection(&config);
        let relabel = self.config.load_more_text != config.load_more_text;
        self.config = config;
        if relabel {
            self.paging.set_label(self.config.load_more_text.clone());
        }
        if reshape {
            let source = self.paging.take_source();
            self.paging
                .configure_source(source, self.config.batch_size());
            self.selection.clamp_to_count(self.paging.slot_count());
            self.rebuild();
        } else {
            let mut delta = self.sync_window();
            if relabel
                && let Some(slot) = self.paging.sentinel_index()
                && !delta.inserted.contains(&slot)
                && let Some(item) = self.items.get_mut(&slot)
            {
                // Only the label changed: swap the content, keep the placement.
                item.content = Content::LoadMore(self.paging.label().into());
                delta.removed.push(slot);
                delta.inserted.push(slot);
            }
            self.push_delta(delta);
        }
        self.request_layout();
        self.finish(before, false);
    }

    /// Reports the size of the visible area and re-arranges for it.
    pub fn set_viewport(&mut self, viewport: Size) {
        if viewport == self.viewport {
            return;
        }
        log::trace!("viewport {:?} -> {viewport:?}", self.viewport);
        self.viewport = viewport;
        self.relayout();
    }

    /// Selects the next slot. Returns `false` at the end.
    pub fn move_next(&mut self) -> bool {
        self.step_selection(Step::Forward)
    }

    /// Selects the previous slot. Returns `false` at the start.
    pub fn move_previous(&mut self) -> bool {
        self.step_selection(Step::Backward)
    }

    /// Selects slot `index`. Negative values select the first slot; values
    /// past the end are ignored.
    ///
    /// Returns `true` if the selection moved.
    pub fn set_selected_index(&mut self, index: isize) -> bool {
        let index = usize::try_from(index).unwrap_or_else(|_| {
            log::debug!("negative selection index {index} clamped to 0");
            0
        });
        self.select_slot(index)
    }

    /// Handles a keyboard navigation request. Returns `true` if the selection
    /// moved.
    pub fn handle_key(&mut self, key: NavigationKey) -> bool {
        match key {
            NavigationKey::Next => self.move_next(),
            NavigationKey::Previous => self.move_previous(),
            NavigationKey::First => self.select_slot(0),
            NavigationKey::Last => self
                .paging
                .slot_count()
                .checked_sub(1)
                .is_some_and(|last| self.select_slot(last)),
        }
    }

    /// Reveals the next batch of pending items.
    ///
    /// Returns `false` when nothing is pending. The selection index is kept;
    /// if it was on the load-more slot it now lands on the first new item.
    pub fn load_more(&mut self) -> bool {
        let before = self.snapshot();
        let sentinel = self.paging.sentinel_index();
        let Some(batch) = self.paging.trigger() else {
            log::debug!("load more ignored: nothing pending");
            return false;
        };
        log::debug!(
            "loaded slots {:?}, {} still pending",
            batch.added,
            batch.remaining
        );

        let mut delta = CollectionDelta::default();
        // The old load-more slot now holds a source item.
        if let Some(slot) = sentinel
            && self.items.remove(&slot).is_some()
        {
            delta.removed.push(slot);
        }
        self.selection.clamp_to_count(self.paging.slot_count());
        let synced = self.sync_window();
        delta.removed.extend(synced.removed);
        delta.inserted.extend(synced.inserted);
        self.push_delta(delta);
        self.request_layout();
        self.finish(before, false);
        true
    }

    /// Re-materializes every slot and arranges them from scratch.
    ///
    /// Content is resolved again, and placements start over without
    /// transitions.
    pub fn refresh(&mut self) {
        let before = self.snapshot();
        self.selection.clamp_to_count(self.paging.slot_count());
        self.rebuild();
        self.arrange_items();
        self.finish(before, false);
    }

    /// The newest layout request still waiting for [`Carousel::run_deferred`].
    #[must_use]
    pub fn pending_layout(&self) -> Option<LayoutToken> {
        self.deferred.pending()
    }

    /// Runs a deferred arrangement pass.
    ///
    /// Call this after the host's layout pass with the token from
    /// [`CarouselEvent::LayoutRequested`]. Superseded tokens are ignored and
    /// return `false`.
    pub fn run_deferred(&mut self, token: LayoutToken) -> bool {
        if !self.deferred.take(token) {
            log::debug!("layout token {} superseded", token.generation());
            return false;
        }
        self.relayout();
        true
    }

    /// Takes all queued events, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = CarouselEvent<T>> + '_ {
        self.events.drain(..)
    }

    /// Starts a pointer gesture.
    pub fn on_pointer_down(&mut self, point: Point) {
        self.gesture.on_pointer_down(point);
        self.phase = GesturePhase::Idle;
    }

    /// Continues a pointer gesture.
    ///
    /// Returns `true` when an enclosing scroll container may take over the
    /// gesture because it moves mostly vertically.
    pub fn on_pointer_move(&mut self, point: Point) -> bool {
        let outcome = self.gesture.on_pointer_move(point);
        let before = outcome
            .signals
            .iter()
            .any(|signal| matches!(signal, GestureSignal::Step(_)))
            .then(|| self.snapshot());

        let mut moved = false;
        for signal in &outcome.signals {
            match *signal {
                GestureSignal::SwipeStarted(direction) => {
                    log::trace!("swipe started {direction:?}");
                    self.phase = GesturePhase::Dragging;
                    self.events.push(CarouselEvent::SwipeStarted(direction));
                }
                GestureSignal::Step(navigation) => {
                    moved |= self.selection.step(step_for(navigation)).is_some();
                }
                GestureSignal::SwipeEnded | GestureSignal::Tap(_) => {}
            }
        }
        if self.gesture.is_dragging() {
            self.phase = GesturePhase::Dragging;
        }

        if moved {
            self.relayout();
        }
        if let Some(before) = before {
            self.finish(before, false);
        }
        outcome.parent_may_intercept
    }

    /// Finishes a pointer gesture.
    ///
    /// A swipe re-arranges and emits [`CarouselEvent::SwipeEnded`]. A tap
    /// selects the item under the pointer, or loads more when it hits the
    /// load-more slot.
    pub fn on_pointer_up(&mut self) {
        match self.gesture.on_pointer_up() {
            Some(GestureSignal::SwipeEnded) => self.commit_swipe(),
            Some(GestureSignal::Tap(point)) => {
                self.phase = GesturePhase::SwipeCancelled;
                self.activate_at(point);
            }
            _ => self.phase = GesturePhase::SwipeCancelled,
        }
    }

    /// Aborts a pointer gesture. A started swipe still ends; taps are dropped.
    pub fn on_pointer_cancel(&mut self) {
        match self.gesture.on_pointer_cancel() {
            Some(GestureSignal::SwipeEnded) => self.commit_swipe(),
            _ => self.phase = GesturePhase::SwipeCancelled,
        }
    }

    /// Hands the current gesture to a parent container: no swipe can start
    /// for the rest of it.
    pub fn restrict_gesture(&mut self) {
        self.gesture.restrict();
    }

    fn commit_swipe(&mut self) {
        self.phase = GesturePhase::SwipeCommitted;
        self.relayout();
        self.events.push(CarouselEvent::SwipeEnded);
    }

    fn activate_at(&mut self, point: Point) {
        let Some(index) = self.plan.hit_test(point) else {
            return;
        };
        if self.paging.sentinel_index() == Some(index) {
            self.load_more();
        } else {
            self.select_slot(index);
        }
    }

    fn step_selection(&mut self, step: Step) -> bool {
        let before = self.snapshot();
        if self.selection.step(step).is_none() {
            return false;
        }
        self.relayout();
        self.finish(before, false);
        true
    }

    fn select_slot(&mut self, index: usize) -> bool {
        let before = self.snapshot();
        let items = &self.items;
        match self
            .selection
            .select_with(index, |slot| items.contains_key(&slot))
        {
            Ok(change) if change.old == change.new => false,
            Ok(_) => {
                self.relayout();
                self.finish(before, false);
                true
            }
            Err(err) => {
                log::debug!("selection rejected: {err}");
                false
            }
        }
    }

    fn source_item(&self, index: usize) -> Option<&T> {
        self.paging.slot(index).and_then(Slot::item)
    }

    fn snapshot(&self) -> Snapshot<T> {
        let index = self.selection.selected();
        Snapshot {
            index,
            item: index.and_then(|index| self.source_item(index)).cloned(),
        }
    }

    /// Emits one `SelectionChanged` if the selection moved since `before`.
    ///
    /// A slot that turns from the load-more slot into a source item, or back,
    /// counts as a change even when the index stays. With `replaced` set the
    /// source changed underneath, so any selection on either side counts.
    fn finish(&mut self, before: Snapshot<T>, replaced: bool) {
        let after = self.snapshot();
        let changed = if replaced {
            before.index.is_some() || after.index.is_some()
        } else {
            before.index != after.index || before.item.is_some() != after.item.is_some()
        };
        if changed {
            log::debug!("selection {:?} -> {:?}", before.index, after.index);
            self.events.push(CarouselEvent::SelectionChanged {
                old_index: before.index,
                new_index: after.index,
                old_item: before.item,
                new_item: after.item,
            });
        }
    }

    fn request_layout(&mut self) {
        let token = self.deferred.schedule();
        self.events.push(CarouselEvent::LayoutRequested(token));
    }

    fn push_delta(&mut self, delta: CollectionDelta) {
        if delta.is_empty() {
            return;
        }
        log::trace!(
            "collection changed: -{:?} +{:?}{}",
            delta.removed,
            delta.inserted,
            if delta.reset { " (reset)" } else { "" }
        );
        self.events.push(CarouselEvent::CollectionChanged(delta));
    }

    fn relayout(&mut self) {
        let delta = self.sync_window();
        self.push_delta(delta);
        self.arrange_items();
    }

    /// Drops every materialized item and materializes the window afresh.
    fn rebuild(&mut self) {
        let mut removed: Vec<usize> = self.items.keys().copied().collect();
        removed.sort_unstable();
        self.items.clear();
        self.window.reset();
        self.plan = AnimationPlan::default();
        let mut delta = self.sync_window();
        delta.reset = true;
        delta.removed = removed;
        self.push_delta(delta);
    }

    /// Recomputes the window and brings the materialized items in line with it.
    fn sync_window(&mut self) -> CollectionDelta {
        let count = self.paging.slot_count();
        let range = if self.config.enable_virtualization {
            let metrics = self.config.window_metrics(self.viewport.width);
            self.window
                .recompute(self.selection.raw_selected(), count, &metrics)
        } else {
            self.window.cover_all(count)
        };
        let diff = self.window.diff();
        log::trace!("window {range:?}: {diff:?}");

        let mut delta = CollectionDelta::default();
        for index in diff.removed() {
            if self.items.remove(&index).is_some() {
                delta.removed.push(index);
            }
        }
        for index in diff.inserted() {
            if self.materialize(index) {
                delta.inserted.push(index);
            }
        }

        // Slots replaced in place, such as the old load-more slot, leave gaps.
        if self.items.len() != range.map_or(0, |range| range.len()) {
            let mut stale: Vec<usize> = self
                .items
                .keys()
                .copied()
                .filter(|&index| !range.is_some_and(|range| range.contains(index)))
                .collect();
            stale.sort_unstable();
            for index in stale {
                self.items.remove(&index);
                delta.removed.push(index);
            }
            for index in range.into_iter().flatten() {
                if !self.items.contains_key(&index) && self.materialize(index) {
                    delta.inserted.push(index);
                }
            }
        }

        let selected = self.selection.selected();
        for item in self.items.values_mut() {
            item.is_selected = Some(item.index) == selected;
        }
        delta
    }

    fn materialize(&mut self, index: usize) -> bool {
        let content = match self.paging.slot(index) {
            Some(Slot::Item(item)) => self.resolver.resolve(item, index),
            Some(Slot::LoadMore) => Content::LoadMore(self.paging.label().into()),
            None => return false,
        };
        self.items.insert(index, CarouselItem::new(index, content));
        true
    }

    fn arrange_items(&mut self) {
        let Some(selected) = self.selection.selected() else {
            self.plan = AnimationPlan::default();
            return;
        };
        let mut inputs: Vec<ArrangeInput> = self
            .items
            .values()
            .map(|item| ArrangeInput {
                index: item.index,
                prior: item.placement,
            })
            .collect();
        inputs.sort_unstable_by_key(|input| input.index);

        self.plan = arrange(&inputs, selected, &self.config.arrange_params(self.viewport));
        for planned in self.plan.items() {
            if let Some(item) = self.items.get_mut(&planned.index) {
                item.placement = Some(planned.target);
            }
        }
        log::trace!(
            "arranged {} items around {selected}, {} animated",
            self.plan.len(),
            self.plan
                .items()
                .iter()
                .filter(|item| item.is_animated())
                .count()
        );
    }
}

fn step_for(navigation: Navigation) -> Step {
    match navigation {
        Navigation::Next => Step::Forward,
        Navigation::Previous => Step::Backward,
    }
}
