// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavior binder and drag controller.
//!
//! ## Overview
//!
//! [`DragDrop`] owns the bindings (element → [`Behavior`]), the
//! [`AnchorRegistry`], and at most one active [`DragSession`].
//! Feed it pointer input; it mutates the [`Scene`] and returns a [`DropEvent`]
//! on every release.
//!
//! ## State machine
//!
//! Per draggable: `idle → dragging → {placed | idle at drop point | idle at origin}`.
//!
//! - [`DragDrop::pointer_down`] / [`DragDrop::begin_drag`]: `idle → dragging`.
//!   The element gets [`ElementFlags::DRAGGING`], the `dragging` class, and z 1000.
//! - [`DragDrop::pointer_move`]: repositions the element from the session.
//! - [`DragDrop::pointer_up`]: ends the session and branches on the behavior.
//! - [`DragDrop::cancel`]: ends the session without placement (lost pointer).
//!
//! A single pointer is modeled: while a session is active, further grabs are ignored.
//!
//! ## Setup
//!
//! [`DragDrop::set_up`] can be called again after the scene changes. It releases
//! bindings whose element died or lost its `draggable` class, binds new
//! draggables once, and rebuilds the anchor registry. No element is ever bound
//! twice.

use alloc::vec::Vec;

use dragndrop_scene::{ElementFlags, ElementId, QueryFilter, Scene};
use kurbo::Point;

use crate::anchors::AnchorRegistry;
use crate::behavior::{Behavior, Diagnostic, DropEvent, DropOutcome};
use crate::markers::{self, Markers};
use crate::session::DragSession;

/// Z-index given to drop anchors on setup.
pub const ANCHOR_Z: i32 = 998;
/// Z-index given to idle draggables on setup and on release.
pub const DRAGGABLE_Z: i32 = 999;
/// Z-index of the element being dragged.
pub const DRAGGING_Z: i32 = 1000;

/// A draggable element and the behavior bound to it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Binding {
    /// Bound element.
    pub element: ElementId,
    /// Behavior applied on release.
    pub behavior: Behavior,
}

/// What a call to [`DragDrop::set_up`] changed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SetupReport {
    /// Draggables bound by this call.
    pub bound: usize,
    /// Bindings released because their element died or stopped being draggable.
    pub released: usize,
    /// Anchors registered after this call.
    pub anchors: usize,
}

#[derive(Copy, Clone, Debug)]
struct ActiveDrag {
    session: DragSession,
    behavior: Behavior,
}

/// Drag-and-drop engine for one scene.
#[derive(Debug, Default)]
pub struct DragDrop {
    bindings: Vec<Binding>,
    anchors: AnchorRegistry,
    active: Option<ActiveDrag>,
    diagnostics: Vec<Diagnostic>,
}

impl DragDrop {
    /// Create an engine with no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind behaviors to every marked element of `scene`.
    ///
    /// Idempotent: elements that are already bound keep their single binding
    /// (their behavior is refreshed from their current classes). A
    /// [`Diagnostic::SensitiveAndExclusive`] is recorded and logged once, when a
    /// conflicting element is first bound.
    pub fn set_up(&mut self, scene: &mut Scene) -> SetupReport {
        let before = self.bindings.len();
        self.bindings
            .retain(|b| Markers::of(scene, b.element).contains(Markers::DRAGGABLE));
        let released = before - self.bindings.len();
        if released > 0 {
            tracing::debug!(released, "released stale draggable bindings");
        }
        if let Some(active) = self.active
            && !self.is_bound(active.session.element())
        {
            tracing::debug!(
                element = ?active.session.element(),
                "dropping session of unbound element"
            );
            self.active = None;
        }

        let mut bound = 0;
        for id in scene.document_order() {
            let markers = Markers::of(scene, id);
            if markers.contains(Markers::DROP_ANCHOR) {
                scene.set_z_index(id, ANCHOR_Z);
            }
            if !markers.contains(Markers::DRAGGABLE) {
                continue;
            }
            let behavior = Behavior::from_markers(markers);
            if markers.is_conflicting() {
                let diagnostic = Diagnostic::SensitiveAndExclusive { element: id };
                if !self.diagnostics.contains(&diagnostic) {
                    tracing::warn!(element = ?id, "{diagnostic}");
                    self.diagnostics.push(diagnostic);
                }
            }
            if let Some(existing) = self.bindings.iter_mut().find(|b| b.element == id) {
                existing.behavior = behavior;
            } else {
                self.bindings.push(Binding {
                    element: id,
                    behavior,
                });
                bound += 1;
            }
            if self.active.is_none_or(|a| a.session.element() != id) {
                scene.set_z_index(id, DRAGGABLE_Z);
            }
        }

        self.anchors.rebuild(scene);
        SetupReport {
            bound,
            released,
            anchors: self.anchors.len(),
        }
    }

    /// Release every binding and anchor, cancelling an active session.
    pub fn tear_down(&mut self, scene: &mut Scene) -> Option<DropEvent> {
        let event = self.cancel(scene);
        self.bindings.clear();
        self.anchors.clear();
        event
    }

    /// Bindings in the order they were made.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Behavior bound to `element`, if any.
    pub fn behavior_of(&self, element: ElementId) -> Option<Behavior> {
        self.bindings
            .iter()
            .find(|b| b.element == element)
            .map(|b| b.behavior)
    }

    /// Returns true if `element` is bound.
    pub fn is_bound(&self, element: ElementId) -> bool {
        self.behavior_of(element).is_some()
    }

    /// Registered drop anchors.
    pub fn anchors(&self) -> &AnchorRegistry {
        &self.anchors
    }

    /// Diagnostics recorded by [`DragDrop::set_up`] so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The active session, if a pointer is dragging something.
    pub fn session(&self) -> Option<&DragSession> {
        self.active.as_ref().map(|a| &a.session)
    }

    /// Returns true while a pointer is dragging an element.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Start dragging the topmost bound draggable under `pointer`.
    ///
    /// Walks up from the topmost pickable element to the nearest bound ancestor.
    /// Returns the grabbed element, or `None` if nothing was grabbed.
    pub fn pointer_down(&mut self, scene: &mut Scene, pointer: Point) -> Option<ElementId> {
        if self.active.is_some() {
            tracing::debug!("ignoring pointer-down during an active drag");
            return None;
        }
        let filter = QueryFilter {
            visible_only: true,
            pickable_only: true,
        };
        let hit = scene.hit_test_point(pointer, filter)?;
        let element = hit
            .path
            .iter()
            .rev()
            .copied()
            .find(|&id| self.is_bound(id))?;
        self.begin_drag(scene, element, pointer).then_some(element)
    }

    /// Start dragging `element`, grabbed at scene-space `pointer`.
    ///
    /// Returns false if the element is not bound, not alive, or if another drag
    /// is in progress (the second grab is ignored).
    pub fn begin_drag(&mut self, scene: &mut Scene, element: ElementId, pointer: Point) -> bool {
        if let Some(active) = self.active {
            tracing::debug!(
                dragging = ?active.session.element(),
                ignored = ?element,
                "ignoring grab during an active drag"
            );
            return false;
        }
        let Some(behavior) = self.behavior_of(element) else {
            return false;
        };
        let Some(session) = DragSession::begin(scene, element, pointer) else {
            return false;
        };
        scene.toggle_flags(element, ElementFlags::DRAGGING, true);
        scene.add_class(element, markers::DRAGGING);
        scene.set_z_index(element, DRAGGING_Z);
        self.active = Some(ActiveDrag { session, behavior });
        true
    }

    /// Move the dragged element so its grab point follows `pointer`.
    ///
    /// Returns false when no drag is in progress or the dragged element is gone;
    /// the scene is left untouched. A session whose element is gone stays open so
    /// the next release or cancel still reports [`DropOutcome::Cancelled`].
    pub fn pointer_move(&mut self, scene: &mut Scene, pointer: Point) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if !scene.is_alive(active.session.element()) {
            tracing::debug!(element = ?active.session.element(), "dragged element disappeared");
            return false;
        }
        active.session.apply(scene, pointer);
        true
    }

    /// End the drag at `pointer` and apply the bound behavior.
    ///
    /// Returns the drop signal, or `None` if no drag was in progress.
    pub fn pointer_up(&mut self, scene: &mut Scene, pointer: Point) -> Option<DropEvent> {
        let active = self.active.take()?;
        let element = active.session.element();
        if !scene.is_alive(element) {
            return Some(DropEvent {
                element,
                outcome: DropOutcome::Cancelled,
            });
        }
        Self::settle(scene, element);
        let placed = if active.behavior.uses_anchors() {
            self.anchors.place_if_match(scene, element, pointer)
        } else {
            None
        };
        let outcome = match (placed, active.behavior) {
            (Some(anchor), _) => DropOutcome::Placed(anchor),
            (None, Behavior::Exclusive) => {
                scene.set_position(element, Point::ORIGIN);
                DropOutcome::Reset
            }
            (None, Behavior::Plain | Behavior::Sensitive) => DropOutcome::Stayed,
        };
        Some(DropEvent { element, outcome })
    }

    /// End the drag without a pointer release (for example on focus loss).
    ///
    /// Nothing is placed. Exclusive elements snap back to `(0, 0)`; others stay.
    /// Returns the drop signal, or `None` if no drag was in progress.
    pub fn cancel(&mut self, scene: &mut Scene) -> Option<DropEvent> {
        let active = self.active.take()?;
        let element = active.session.element();
        tracing::debug!(element = ?element, "drag cancelled");
        if scene.is_alive(element) {
            Self::settle(scene, element);
            if active.behavior == Behavior::Exclusive {
                scene.set_position(element, Point::ORIGIN);
            }
        }
        Some(DropEvent {
            element,
            outcome: DropOutcome::Cancelled,
        })
    }

    fn settle(scene: &mut Scene, element: ElementId) {
        scene.toggle_flags(element, ElementFlags::DRAGGING, false);
        scene.remove_class(element, markers::DRAGGING);
        scene.set_z_index(element, DRAGGABLE_Z);
    }
}
