// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use revolve_arrange::ItemPlacement;

use crate::content::Content;

/// One materialized slot of a carousel.
///
/// Items exist only while their index is inside the virtualization window.
/// Their content is resolved once on entry; the placement is updated by every
/// arrangement pass.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselItem<H> {
    /// Slot index in the collection.
    pub index: usize,
    /// Whether this is the selected slot. At most one item has this set.
    pub is_selected: bool,
    /// What the slot shows.
    pub content: Content<H>,
    /// Placement from the last arrangement pass; `None` until arranged.
    pub placement: Option<ItemPlacement>,
}

impl<H> CarouselItem<H> {
    pub(crate) fn new(index: usize, content: Content<H>) -> Self {
        Self {
            index,
            is_selected: false,
            content,
            placement: None,
        }
    }

    /// Returns `true` for the load-more slot.
    #[must_use]
    pub fn is_load_more(&self) -> bool {
        self.content.is_load_more()
    }
}
