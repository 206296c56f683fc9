// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative class markers read by the binder.
//!
//! | Class | Applies to | Effect |
//! |---|---|---|
//! | `draggable` | any element | can be dragged |
//! | `draggable--drop-anchor-sensitive` | draggable | lands in an anchor when dropped on one, else stays |
//! | `draggable--drop-anchor-exclusive` | draggable | lands in an anchor, else snaps back (ignored when also sensitive) |
//! | `drop-anchor` | any element | registers as a drop target |
//! | `drop-anchor--max-elements-N` | drop anchor | accepts at most `N` occupants (default 1) |

use dragndrop_scene::{ElementId, Scene};

/// Makes an element draggable.
pub const DRAGGABLE: &str = "draggable";
/// Adds the sensitive behavior to a draggable.
pub const ANCHOR_SENSITIVE: &str = "draggable--drop-anchor-sensitive";
/// Adds the exclusive behavior to a draggable.
pub const ANCHOR_EXCLUSIVE: &str = "draggable--drop-anchor-exclusive";
/// Registers an element as a drop anchor.
pub const DROP_ANCHOR: &str = "drop-anchor";
/// Prefix of the capacity marker; the suffix is a decimal integer.
pub const MAX_ELEMENTS_PREFIX: &str = "drop-anchor--max-elements-";
/// Class carried by an element while a pointer is moving it.
pub const DRAGGING: &str = "dragging";

/// Capacity of an anchor without a (valid) capacity marker.
pub const DEFAULT_CAPACITY: usize = 1;

bitflags::bitflags! {
    /// Roles parsed from an element's class list.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Markers: u8 {
        /// `draggable`
        const DRAGGABLE   = 0b0000_0001;
        /// `draggable--drop-anchor-sensitive`
        const SENSITIVE   = 0b0000_0010;
        /// `draggable--drop-anchor-exclusive`
        const EXCLUSIVE   = 0b0000_0100;
        /// `drop-anchor`
        const DROP_ANCHOR = 0b0000_1000;
    }
}

impl Markers {
    /// Parse the role markers out of a class list. Unknown classes are ignored.
    pub fn parse<S: AsRef<str>>(classes: &[S]) -> Self {
        classes
            .iter()
            .fold(Self::empty(), |acc, class| match class.as_ref() {
                DRAGGABLE => acc | Self::DRAGGABLE,
                ANCHOR_SENSITIVE => acc | Self::SENSITIVE,
                ANCHOR_EXCLUSIVE => acc | Self::EXCLUSIVE,
                DROP_ANCHOR => acc | Self::DROP_ANCHOR,
                _ => acc,
            })
    }

    /// Markers of a scene element; empty for stale ids.
    pub fn of(scene: &Scene, id: ElementId) -> Self {
        Self::parse(scene.classes(id))
    }

    /// Both sensitive and exclusive: exclusivity is suppressed.
    pub fn is_conflicting(self) -> bool {
        self.contains(Self::SENSITIVE | Self::EXCLUSIVE)
    }
}

/// Capacity declared by a class list.
///
/// Every `drop-anchor--max-elements-N` class with a decimal `N` counts and the
/// last one wins. Malformed suffixes (empty, signed, non-digit, overflowing) are
/// ignored, falling back to [`DEFAULT_CAPACITY`].
pub fn capacity_of<S: AsRef<str>>(classes: &[S]) -> usize {
    classes
        .iter()
        .rev()
        .find_map(|class| parse_capacity(class.as_ref()))
        .unwrap_or(DEFAULT_CAPACITY)
}

fn parse_capacity(class: &str) -> Option<usize> {
    let digits = class.strip_prefix(MAX_ELEMENTS_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
