// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor registry and capacity policy.
//!
//! ## Overview
//!
//! The registry lists drop anchors in document order with the capacity declared
//! by their class list. It is filled by [`AnchorRegistry::rebuild`] (the binder
//! does this on every setup) rather than by scanning the scene on each drop.
//!
//! Occupancy is the anchor's child count in the scene, so reparenting keeps it
//! current without bookkeeping. The element being dragged does not count as an
//! occupant of its current parent: picking a piece up frees its slot.
//!
//! ## Selection
//!
//! [`AnchorRegistry::place_if_match`] takes the first available anchor, in
//! document order, whose box strictly contains the drop point. Overlapping
//! anchors are not ranked by z-order.

use alloc::vec::Vec;

use dragndrop_scene::{ElementId, Scene};
use kurbo::Point;

use crate::geometry::point_in_rect;
use crate::markers::{Markers, capacity_of};

/// A registered drop anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchor {
    /// Anchor element.
    pub element: ElementId,
    /// Maximum simultaneous occupants.
    pub capacity: usize,
}

/// Drop anchors in document order.
#[derive(Clone, Debug, Default)]
pub struct AnchorRegistry {
    anchors: Vec<Anchor>,
}

impl AnchorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registry with every `drop-anchor` element of `scene`, in document order.
    pub fn rebuild(&mut self, scene: &Scene) {
        self.anchors.clear();
        self.anchors.extend(
            scene
                .document_order()
                .into_iter()
                .filter(|&id| Markers::of(scene, id).contains(Markers::DROP_ANCHOR))
                .map(|element| Anchor {
                    element,
                    capacity: capacity_of(scene.classes(element)),
                }),
        );
    }

    /// Remove every anchor.
    pub fn clear(&mut self) {
        self.anchors.clear();
    }

    /// Registered anchors in document order.
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Number of registered anchors.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Returns true if no anchor is registered.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Capacity of a registered anchor.
    pub fn capacity_of(&self, anchor: ElementId) -> Option<usize> {
        self.anchors
            .iter()
            .find(|a| a.element == anchor)
            .map(|a| a.capacity)
    }

    /// Current occupants of `anchor`, not counting `moving`.
    pub fn occupancy(scene: &Scene, anchor: ElementId, moving: Option<ElementId>) -> usize {
        scene
            .children(anchor)
            .iter()
            .filter(|&&child| Some(child) != moving)
            .count()
    }

    /// Live anchors with room for one more occupant, in document order.
    ///
    /// `moving` is the element about to be placed: it is not counted as an
    /// occupant, and anchors inside its own subtree are skipped.
    pub fn available_anchors<'a>(
        &'a self,
        scene: &'a Scene,
        moving: Option<ElementId>,
    ) -> impl Iterator<Item = &'a Anchor> + 'a {
        self.anchors.iter().filter(move |a| {
            scene.is_alive(a.element)
                && moving.is_none_or(|m| !scene.path_to_root(a.element).contains(&m))
                && Self::occupancy(scene, a.element, moving) < a.capacity
        })
    }

    /// First available anchor whose box strictly contains `point`.
    pub fn anchor_at(
        &self,
        scene: &Scene,
        point: Point,
        moving: Option<ElementId>,
    ) -> Option<ElementId> {
        self.available_anchors(scene, moving)
            .find(|a| {
                scene
                    .bounding_rect(a.element)
                    .is_some_and(|rect| point_in_rect(point, rect))
            })
            .map(|a| a.element)
    }

    /// Move `draggable` into the first available anchor containing `drop_point`.
    ///
    /// On a match the draggable becomes the anchor's last child at position
    /// `(0, 0)` and the anchor is returned. Otherwise nothing changes.
    pub fn place_if_match(
        &self,
        scene: &mut Scene,
        draggable: ElementId,
        drop_point: Point,
    ) -> Option<ElementId> {
        let anchor = self.anchor_at(scene, drop_point, Some(draggable))?;
        scene.reparent(draggable, Some(anchor));
        scene.set_position(draggable, Point::ORIGIN);
        Some(anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::{DRAGGABLE, DROP_ANCHOR};
    use alloc::format;
    use alloc::vec;
    use dragndrop_scene::LocalElement;
    use kurbo::Size;

    fn anchor_el(x: f64, capacity: Option<usize>) -> LocalElement {
        let el = LocalElement::sized(Size::new(100.0, 100.0))
            .at(Point::new(x, 0.0))
            .with_classes([DROP_ANCHOR]);
        match capacity {
            Some(n) => el.with_classes([format!("drop-anchor--max-elements-{n}")]),
            None => el,
        }
    }

    fn piece() -> LocalElement {
        LocalElement::sized(Size::new(10.0, 10.0)).with_classes([DRAGGABLE])
    }

    #[test]
    fn rebuild_collects_anchors_in_document_order() {
        let mut scene = Scene::new();
        let root = scene.insert(None, LocalElement::sized(Size::new(500.0, 500.0)));
        let a = scene.insert(Some(root), anchor_el(0.0, None));
        let _plain = scene.insert(Some(root), piece());
        let b = scene.insert(Some(root), anchor_el(100.0, Some(3)));

        let mut reg = AnchorRegistry::new();
        reg.rebuild(&scene);
        assert_eq!(
            reg.anchors(),
            &[
                Anchor {
                    element: a,
                    capacity: 1
                },
                Anchor {
                    element: b,
                    capacity: 3
                },
            ]
        );
        assert_eq!(reg.capacity_of(b), Some(3));
        assert_eq!(reg.capacity_of(root), None);
    }

    #[test]
    fn full_anchor_is_not_available() {
        let mut scene = Scene::new();
        let a = scene.insert(None, anchor_el(0.0, None));
        let b = scene.insert(None, anchor_el(100.0, Some(3)));
        let _occupant_a = scene.insert(Some(a), piece());
        let _occupant_b = scene.insert(Some(b), piece());

        let mut reg = AnchorRegistry::new();
        reg.rebuild(&scene);
        let available: Vec<_> = reg.available_anchors(&scene, None).map(|a| a.element).collect();
        assert_eq!(available, vec![b]);
    }

    #[test]
    fn moving_element_frees_its_own_slot() {
        let mut scene = Scene::new();
        let a = scene.insert(None, anchor_el(0.0, None));
        let p = scene.insert(Some(a), piece());
        let mut reg = AnchorRegistry::new();
        reg.rebuild(&scene);

        assert_eq!(AnchorRegistry::occupancy(&scene, a, None), 1);
        assert_eq!(AnchorRegistry::occupancy(&scene, a, Some(p)), 0);
        assert_eq!(reg.available_anchors(&scene, Some(p)).count(), 1);
    }

    #[test]
    fn place_reparents_and_resets_position() {
        let mut scene = Scene::new();
        let a = scene.insert(None, anchor_el(0.0, None));
        let b = scene.insert(None, anchor_el(200.0, Some(2)));
        let p = scene.insert(None, piece().at(Point::new(240.0, 30.0)));
        let mut reg = AnchorRegistry::new();
        reg.rebuild(&scene);

        assert_eq!(reg.place_if_match(&mut scene, p, Point::new(250.0, 50.0)), Some(b));
        assert_eq!(scene.parent(p), Some(b));
        assert_eq!(scene.position(p), Some(Point::ORIGIN));
        assert_eq!(scene.child_count(a), 0);
    }

    #[test]
    fn miss_leaves_everything_untouched() {
        let mut scene = Scene::new();
        let a = scene.insert(None, anchor_el(0.0, None));
        let p = scene.insert(None, piece().at(Point::new(400.0, 400.0)));
        let mut reg = AnchorRegistry::new();
        reg.rebuild(&scene);

        // Exactly on the right edge: outside.
        assert_eq!(reg.place_if_match(&mut scene, p, Point::new(100.0, 50.0)), None);
        assert_eq!(scene.parent(p), None);
        assert_eq!(scene.position(p), Some(Point::new(400.0, 400.0)));
        assert_eq!(scene.child_count(a), 0);
    }

    #[test]
    fn overlapping_anchors_first_in_document_order_wins() {
        let mut scene = Scene::new();
        let first = scene.insert(None, anchor_el(0.0, None));
        let second = scene.insert(
            None,
            LocalElement {
                z_index: 50,
                ..anchor_el(50.0, None)
            },
        );
        let p = scene.insert(None, piece());
        let mut reg = AnchorRegistry::new();
        reg.rebuild(&scene);

        assert_eq!(
            reg.place_if_match(&mut scene, p, Point::new(75.0, 50.0)),
            Some(first)
        );
        assert_eq!(scene.child_count(second), 0);
    }

    #[test]
    fn zero_capacity_never_accepts() {
        let mut scene = Scene::new();
        let a = scene.insert(None, anchor_el(0.0, Some(0)));
        let p = scene.insert(None, piece());
        let mut reg = AnchorRegistry::new();
        reg.rebuild(&scene);
        assert_eq!(reg.place_if_match(&mut scene, p, Point::new(50.0, 50.0)), None);
        assert_eq!(scene.child_count(a), 0);
    }

    #[test]
    fn removed_anchor_is_skipped() {
        let mut scene = Scene::new();
        let a = scene.insert(None, anchor_el(0.0, None));
        let p = scene.insert(None, piece());
        let mut reg = AnchorRegistry::new();
        reg.rebuild(&scene);
        scene.remove(a);
        assert_eq!(reg.place_if_match(&mut scene, p, Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn anchor_inside_the_draggable_is_skipped() {
        let mut scene = Scene::new();
        let carrier = scene.insert(
            None,
            LocalElement::sized(Size::new(100.0, 100.0)).with_classes([DRAGGABLE]),
        );
        let inner = scene.insert(Some(carrier), anchor_el(0.0, None));
        let mut reg = AnchorRegistry::new();
        reg.rebuild(&scene);
        assert_eq!(reg.anchor_at(&scene, Point::new(50.0, 50.0), None), Some(inner));
        assert_eq!(
            reg.place_if_match(&mut scene, carrier, Point::new(50.0, 50.0)),
            None
        );
    }
}
