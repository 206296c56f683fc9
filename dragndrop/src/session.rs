// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag sessions: the state captured on pointer-down and consumed on pointer-up.
//!
//! A [`DragSession`] records where inside the element the pointer grabbed it and
//! where the element's parent sits at grab time. Every subsequent position is a
//! pure function of the current pointer and that captured state, so moves never
//! accumulate drift.
//!
//! ```
//! use dragndrop::session::DragSession;
//! use dragndrop_scene::{LocalElement, Scene};
//! use kurbo::{Point, Size};
//!
//! let mut scene = Scene::new();
//! let area = scene.insert(None, LocalElement::sized(Size::new(400.0, 400.0)).at(Point::new(100.0, 50.0)));
//! let piece = scene.insert(Some(area), LocalElement::sized(Size::new(40.0, 40.0)));
//!
//! // Grab 10px right and 5px below the piece's top-left corner.
//! let session = DragSession::begin(&scene, piece, Point::new(110.0, 55.0)).unwrap();
//! session.apply(&mut scene, Point::new(210.0, 155.0));
//! assert_eq!(scene.position(piece), Some(Point::new(100.0, 100.0)));
//! ```

use dragndrop_scene::{ElementId, Scene};
use kurbo::{Point, Vec2};

/// Per-drag state, from pointer-down to pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    element: ElementId,
    grab_offset: Vec2,
    parent_origin: Point,
}

impl DragSession {
    /// Start a session for `element` grabbed at scene-space `pointer`.
    ///
    /// Returns `None` if `element` is not alive.
    pub fn begin(scene: &Scene, element: ElementId, pointer: Point) -> Option<Self> {
        let rect = scene.bounding_rect(element)?;
        Some(Self {
            element,
            grab_offset: pointer - rect.origin(),
            parent_origin: scene.parent_origin(element),
        })
    }

    /// The element being moved.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Pointer position relative to the element's top-left corner at grab time.
    pub fn grab_offset(&self) -> Vec2 {
        self.grab_offset
    }

    /// Scene-space origin of the element's parent at grab time.
    pub fn parent_origin(&self) -> Point {
        self.parent_origin
    }

    /// Position, relative to the parent, that keeps the grab point under `pointer`.
    pub fn position_at(&self, pointer: Point) -> Point {
        pointer - self.grab_offset - self.parent_origin.to_vec2()
    }

    /// Move the element so the grab point follows `pointer`.
    pub fn apply(&self, scene: &mut Scene, pointer: Point) {
        scene.set_position(self.element, self.position_at(pointer));
    }
}
