// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How items are laid out around the selection.
///
/// Consulted by [`crate::arrange`] and by hosts when choosing window metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewMode {
    /// Pseudo-3D arrangement: the selected item in front at full scale, the
    /// others tilted and deflated on either side.
    #[default]
    Default,
    /// A flat strip of full-size items, the selected one centered.
    Linear,
}

/// Reading direction of the host layout.
///
/// Positions are always produced in left-to-right logical space; hosts mirror
/// them as their layout does. Only the tilt sign depends on this value, so
/// that mirrored items still face the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowDirection {
    /// Left to right.
    #[default]
    LeftToRight,
    /// Right to left.
    RightToLeft,
}

impl FlowDirection {
    /// `1.0` for left-to-right, `-1.0` for right-to-left.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::LeftToRight => 1.0,
            Self::RightToLeft => -1.0,
        }
    }
}
