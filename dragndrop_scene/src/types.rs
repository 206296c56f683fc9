// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: element identifiers, flags, and local geometry.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Size};

/// Identifier for an element in the scene.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `ElementId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `ElementId`.
///
/// ### Liveness
///
/// Use [`Scene::is_alive`](crate::Scene::is_alive) to check whether an `ElementId` still refers to a live element.
/// Stale `ElementId`s never alias a different live element because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Element flags controlling visibility, picking, and drag state.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element is visible.
        const VISIBLE  = 0b0000_0001;
        /// Element is pickable (participates in hit testing).
        const PICKABLE = 0b0000_0010;
        /// Element is currently being moved by a pointer.
        const DRAGGING = 0b0000_0100;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Local data for an element.
#[derive(Clone, Debug)]
pub struct LocalElement {
    /// Top-left corner relative to the parent's top-left corner (`left`, `top`).
    pub position: Point,
    /// Width and height.
    pub size: Size,
    /// Z-order. Higher is drawn on top.
    pub z_index: i32,
    /// Visibility, picking, and drag flags.
    pub flags: ElementFlags,
    /// Class annotations, in the order they were added.
    pub classes: Vec<String>,
}

impl LocalElement {
    /// Create an element of the given size at the parent's origin.
    pub fn sized(size: Size) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Builder-style helper: place the element at `position`.
    #[must_use]
    pub fn at(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Builder-style helper: append class annotations.
    #[must_use]
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }
}

impl Default for LocalElement {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            size: Size::ZERO,
            z_index: 0,
            flags: ElementFlags::default(),
            classes: Vec::new(),
        }
    }
}
