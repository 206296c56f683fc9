// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop behaviors, outcomes, and setup diagnostics.

use dragndrop_scene::ElementId;

use crate::markers::Markers;

/// What happens to a draggable when it is released.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Behavior {
    /// Stays wherever it was released; anchors are never consulted.
    Plain,
    /// Lands in an available anchor under the release point, else stays where released.
    Sensitive,
    /// Lands in an available anchor under the release point, else snaps back to
    /// `(0, 0)` in its current parent.
    Exclusive,
}

impl Behavior {
    /// Behavior implied by a draggable's markers.
    ///
    /// Sensitivity takes priority: an element marked both sensitive and exclusive
    /// is sensitive (see [`Markers::is_conflicting`]).
    pub fn from_markers(markers: Markers) -> Self {
        if markers.contains(Markers::SENSITIVE) {
            Self::Sensitive
        } else if markers.contains(Markers::EXCLUSIVE) {
            Self::Exclusive
        } else {
            Self::Plain
        }
    }

    /// Whether a release consults the anchor registry.
    pub fn uses_anchors(self) -> bool {
        !matches!(self, Self::Plain)
    }
}

/// Where a released draggable ended up.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DropOutcome {
    /// Reparented into this anchor at `(0, 0)`.
    Placed(ElementId),
    /// Left at its last dragged position.
    Stayed,
    /// Snapped back to `(0, 0)` in its current parent.
    Reset,
    /// The session ended without a pointer release (focus loss, teardown).
    Cancelled,
}

/// Signal emitted after every release of a draggable, placed or not.
///
/// Listeners that only care that "a drop happened" (for example a win check)
/// can ignore the fields.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DropEvent {
    /// The released element.
    pub element: ElementId,
    /// Where it ended up.
    pub outcome: DropOutcome,
}

/// A non-fatal problem noticed while binding behaviors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Diagnostic {
    /// The element is both sensitive and exclusive; it was bound as sensitive.
    SensitiveAndExclusive {
        /// The offending element.
        element: ElementId,
    },
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SensitiveAndExclusive { element } => write!(
                f,
                "draggable {element:?} is both sensitive and exclusive to drop anchors; \
                 sensitiveness has priority over exclusiveness"
            ),
        }
    }
}
