// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning source items into renderable content.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt;

/// What a materialized slot shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content<H> {
    /// A handle produced by a template.
    Rendered(H),
    /// Plain text, used when no template applies.
    Text(String),
    /// The load-more slot, with its label.
    LoadMore(String),
}

impl<H> Content<H> {
    /// The rendered handle, if any.
    #[must_use]
    pub fn handle(&self) -> Option<&H> {
        match self {
            Self::Rendered(handle) => Some(handle),
            Self::Text(_) | Self::LoadMore(_) => None,
        }
    }

    /// Returns `true` for [`Content::LoadMore`].
    #[must_use]
    pub fn is_load_more(&self) -> bool {
        matches!(self, Self::LoadMore(_))
    }
}

type Template<T, H> = Box<dyn Fn(&T) -> H>;
type SelectFn<T, H> = Box<dyn Fn(&T, usize) -> Option<H>>;
type Describe<T> = Box<dyn Fn(&T) -> String>;

/// Produces the content of a slot when it is materialized.
///
/// Content is resolved once, when an item enters the materialized set, and
/// kept until it leaves; arrangement passes never re-resolve it.
pub enum ContentResolver<T, H> {
    /// One template for every item.
    Fixed(Template<T, H>),
    /// Picks per item and index. Items for which it returns `None` fall back
    /// to the `fallback` text.
    Selector {
        /// Chooses and applies a template.
        select: SelectFn<T, H>,
        /// Text for items the selector declines.
        fallback: Describe<T>,
    },
    /// No template: every item is shown as text.
    DefaultFallback(Describe<T>),
}

impl<T, H> ContentResolver<T, H> {
    /// Applies `template` to every item.
    pub fn fixed(template: impl Fn(&T) -> H + 'static) -> Self {
        Self::Fixed(Box::new(template))
    }

    /// Shows every item as the text `describe` returns.
    pub fn text(describe: impl Fn(&T) -> String + 'static) -> Self {
        Self::DefaultFallback(Box::new(describe))
    }

    /// Resolves the content of the source item at `index`.
    pub fn resolve(&self, item: &T, index: usize) -> Content<H> {
        match self {
            Self::Fixed(template) => Content::Rendered(template(item)),
            Self::Selector { select, fallback } => match select(item, index) {
                Some(handle) => Content::Rendered(handle),
                None => Content::Text(fallback(item)),
            },
            Self::DefaultFallback(describe) => Content::Text(describe(item)),
        }
    }
}

impl<T: fmt::Display + 'static, H: 'static> ContentResolver<T, H> {
    /// Picks per item with `select`, showing declined items through their
    /// `Display` text.
    pub fn selector(select: impl Fn(&T, usize) -> Option<H> + 'static) -> Self {
        Self::Selector {
            select: Box::new(select),
            fallback: Box::new(|item: &T| item.to_string()),
        }
    }

    /// Shows every item through its `Display` text.
    pub fn display() -> Self {
        Self::text(|item: &T| item.to_string())
    }
}

impl<T, H> fmt::Debug for ContentResolver<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fixed(_) => "Fixed",
            Self::Selector { .. } => "Selector",
            Self::DefaultFallback(_) => "DefaultFallback",
        };
        f.debug_tuple("ContentResolver").field(&name).finish()
    }
}
