// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragndrop Scene: a Kurbo-native element tree.
//!
//! The scene plays the part a document tree plays in a browser: it owns elements,
//! their parent/child order, their class annotations, and their boxes.
//! Drag-and-drop behavior lives in the `dragndrop` crate and only mutates the
//! scene through the operations below.
//!
//! - Each element has a size and a position relative to its parent's top-left corner.
//!   Scene-space boxes are the sum of positions along the root path.
//! - Children are ordered; [`Scene::document_order`] walks the tree pre-order with
//!   roots in insertion order.
//! - [`Scene::reparent`] appends an element to a new parent in one step, with no
//!   intermediate state.
//!
//! ## Not a layout engine
//!
//! This crate does not perform layout.
//! Upstream code computes positions and sizes and writes them into the scene.
//!
//! ## API overview
//!
//! - [`Scene`]: container managing elements.
//! - [`LocalElement`]: per-element data (position, size, z, flags, classes).
//! - [`ElementFlags`]: visibility, picking, and drag state.
//! - [`ElementId`]: generational handle of an element.
//! - [`QueryFilter`]: restricts hit results (visible/pickable).
//!
//! ### Minimal usage
//!
//! ```
//! use dragndrop_scene::{LocalElement, QueryFilter, Scene};
//! use kurbo::{Point, Rect, Size};
//!
//! let mut scene = Scene::new();
//! let board = scene.insert(None, LocalElement::sized(Size::new(200.0, 200.0)));
//! let cell = scene.insert(
//!     Some(board),
//!     LocalElement::sized(Size::new(100.0, 100.0)).at(Point::new(100.0, 0.0)),
//! );
//! let piece = scene.insert(
//!     Some(cell),
//!     LocalElement {
//!         z_index: 1,
//!         ..LocalElement::sized(Size::new(100.0, 100.0))
//!     },
//! );
//!
//! assert_eq!(scene.bounding_rect(piece), Some(Rect::new(100.0, 0.0, 200.0, 100.0)));
//!
//! let filter = QueryFilter { visible_only: true, pickable_only: true };
//! let hit = scene.hit_test_point(Point::new(150.0, 50.0), filter).unwrap();
//! assert_eq!(hit.element, piece);
//! assert_eq!(hit.path, vec![board, cell, piece]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod scene;
mod types;

pub use scene::{Hit, QueryFilter, Scene};
pub use types::{ElementFlags, ElementId, LocalElement};
