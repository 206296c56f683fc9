// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragndrop: a deterministic, `no_std` drag-and-drop engine.
//!
//! ## Overview
//!
//! Elements of a [`dragndrop_scene::Scene`] opt into behaviors through class
//! annotations (see [`markers`]). [`DragDrop::set_up`] reads those classes and
//! binds behaviors; pointer input then drives the elements:
//!
//! - **plain** `draggable`: follows the pointer, stays where released.
//! - **sensitive** `draggable--drop-anchor-sensitive`: lands in a drop anchor when
//!   released over one, otherwise stays where released.
//! - **exclusive** `draggable--drop-anchor-exclusive`: lands in a drop anchor when
//!   released over one, otherwise snaps back to `(0, 0)` in its parent.
//!
//! Drop anchors (`drop-anchor`) accept at most `N` children, one by default or
//! `N` with `drop-anchor--max-elements-N`. A full anchor is never chosen.
//!
//! ## Pieces
//!
//! - [`geometry`]: strict point-in-rectangle test.
//! - [`session`]: [`DragSession`], the per-drag state captured on pointer-down.
//! - [`anchors`]: [`AnchorRegistry`], capacity policy and drop-target selection.
//! - [`behavior`]: [`Behavior`], [`DropEvent`], and setup [`Diagnostic`]s.
//! - [`binder`]: [`DragDrop`], which binds behaviors and runs the drag state machine.
//!
//! ## Example
//!
//! ```
//! use dragndrop::{DragDrop, DropOutcome};
//! use dragndrop_scene::{LocalElement, Scene};
//! use kurbo::{Point, Size};
//!
//! let mut scene = Scene::new();
//! let toolbox = scene.insert(None, LocalElement::sized(Size::new(100.0, 100.0)));
//! let slot = scene.insert(
//!     None,
//!     LocalElement::sized(Size::new(100.0, 100.0))
//!         .at(Point::new(200.0, 0.0))
//!         .with_classes(["drop-anchor"]),
//! );
//! let piece = scene.insert(
//!     Some(toolbox),
//!     LocalElement::sized(Size::new(100.0, 100.0))
//!         .with_classes(["draggable", "draggable--drop-anchor-exclusive"]),
//! );
//!
//! let mut dnd = DragDrop::new();
//! dnd.set_up(&mut scene);
//!
//! // Released over nothing: snaps back.
//! assert_eq!(dnd.pointer_down(&mut scene, Point::new(50.0, 50.0)), Some(piece));
//! dnd.pointer_move(&mut scene, Point::new(50.0, 150.0));
//! let drop = dnd.pointer_up(&mut scene, Point::new(50.0, 150.0)).unwrap();
//! assert_eq!(drop.outcome, DropOutcome::Reset);
//!
//! // Released over the slot: lands in it.
//! dnd.pointer_down(&mut scene, Point::new(50.0, 50.0));
//! dnd.pointer_move(&mut scene, Point::new(250.0, 50.0));
//! let drop = dnd.pointer_up(&mut scene, Point::new(250.0, 50.0)).unwrap();
//! assert_eq!(drop.outcome, DropOutcome::Placed(slot));
//! assert_eq!(scene.parent(piece), Some(slot));
//! assert_eq!(scene.position(piece), Some(Point::ORIGIN));
//! ```
//!
//! Warnings (an element both sensitive and exclusive) are logged through
//! `tracing` and kept in [`DragDrop::diagnostics`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod anchors;
pub mod behavior;
pub mod binder;
pub mod geometry;
pub mod markers;
pub mod session;

pub use anchors::{Anchor, AnchorRegistry};
pub use behavior::{Behavior, Diagnostic, DropEvent, DropOutcome};
pub use binder::{Binding, DragDrop, SetupReport};
pub use geometry::point_in_rect;
pub use markers::{Markers, capacity_of};
pub use session::DragSession;
