// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout work postponed until after the host's layout pass.

/// Identifies one scheduled layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayoutToken(u64);

impl LayoutToken {
    /// Generation number of the request.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// A single pending layout request; newer requests supersede older ones.
///
/// After a data change the carousel calls [`DeferredLayout::schedule`] and
/// hands the token to the host. Once the host has measured, it passes the
/// token back and [`DeferredLayout::take`] accepts it only if no newer request
/// was made in the meantime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeferredLayout {
    generation: u64,
    pending: Option<u64>,
}

impl DeferredLayout {
    /// Creates a scheduler with nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    /// Requests a layout pass, superseding any pending one.
    pub fn schedule(&mut self) -> LayoutToken {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(self.generation);
        LayoutToken(self.generation)
    }

    /// Consumes the pending request if `token` is the newest one.
    ///
    /// Returns `false` for superseded or already consumed tokens.
    pub fn take(&mut self, token: LayoutToken) -> bool {
        if self.pending == Some(token.0) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// The newest pending request.
    #[must_use]
    pub fn pending(&self) -> Option<LayoutToken> {
        self.pending.map(LayoutToken)
    }

    /// Drops the pending request, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_newest_token_runs() {
        let mut deferred = DeferredLayout::new();
        let first = deferred.schedule();
        let second = deferred.schedule();
        assert!(second > first);
        assert!(!deferred.take(first));
        assert_eq!(deferred.pending(), Some(second));
        assert!(deferred.take(second));
        assert!(!deferred.take(second));
        assert_eq!(deferred.pending(), None);
    }

    #[test]
    fn cancel_drops_the_request() {
        let mut deferred = DeferredLayout::new();
        let token = deferred.schedule();
        deferred.cancel();
        assert!(!deferred.take(token));
        assert_eq!(token.generation(), 1);
    }
}
