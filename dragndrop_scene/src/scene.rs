// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core scene implementation: structure, updates, queries.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect, Size, Vec2};

use crate::types::{ElementFlags, ElementId, LocalElement};

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level element tree.
pub struct Scene {
    elements: Vec<Option<Element>>, // slots
    generations: Vec<u32>,          // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    roots: Vec<ElementId>,
}

impl core::fmt::Debug for Scene {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.elements.len();
        let alive = self.elements.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Scene")
            .field("elements_total", &total)
            .field("elements_alive", &alive)
            .field("free_list", &free)
            .field("roots", &self.roots.len())
            .finish_non_exhaustive()
    }
}

/// Results of a hit test.
#[derive(Clone, Debug)]
pub struct Hit {
    /// The matched element.
    pub element: ElementId,
    /// Path from root to element (inclusive).
    pub path: Vec<ElementId>,
}

/// Filters applied during hit testing.
///
/// Used by [`Scene::hit_test_point`].
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryFilter {
    /// If true, only consider elements marked [`ElementFlags::VISIBLE`].
    pub visible_only: bool,
    /// If true, only consider elements marked [`ElementFlags::PICKABLE`].
    pub pickable_only: bool,
}

#[derive(Clone, Debug)]
struct Element {
    generation: u32,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    local: LocalElement,
}

impl Element {
    fn new(generation: u32, local: LocalElement) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            local,
        }
    }
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Insert a new element as the last child of `parent` (or as the last root if `None`).
    pub fn insert(&mut self, parent: Option<ElementId>, local: LocalElement) -> ElementId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.elements[idx] = Some(Element::new(generation, local));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.elements.push(Some(Element::new(generation, local)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            ((self.elements.len() - 1) as u32, generation)
        };
        let id = ElementId::new(idx, generation);
        let parent = parent.filter(|p| self.is_alive(*p));
        self.link(id, parent);
        id
    }

    /// Remove an element (and its subtree) from the scene.
    pub fn remove(&mut self, id: ElementId) {
        if !self.is_alive(id) {
            return;
        }
        self.unlink(id);
        self.free_subtree(id);
    }

    /// Remove every child (and their subtrees) of `id`, keeping `id` itself.
    pub fn remove_children(&mut self, id: ElementId) {
        if !self.is_alive(id) {
            return;
        }
        let children = core::mem::take(&mut self.element_mut(id).children);
        for child in children {
            self.element_mut(child).parent = None;
            self.free_subtree(child);
        }
    }

    /// Move `id` to the end of `new_parent`'s children (or to the end of the roots if `None`).
    ///
    /// The element's local position is kept; callers that want it flush with the new
    /// parent reset it with [`Scene::set_position`].
    /// Reparenting under one of the element's own descendants is ignored.
    pub fn reparent(&mut self, id: ElementId, new_parent: Option<ElementId>) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(p) = new_parent
            && (!self.is_alive(p) || self.is_ancestor_or_self(id, p))
        {
            return;
        }
        self.unlink(id);
        self.link(id, new_parent);
    }

    /// Update the position relative to the parent.
    pub fn set_position(&mut self, id: ElementId, position: Point) {
        if let Some(n) = self.element_opt_mut(id) {
            n.local.position = position;
        }
    }

    /// Update the size.
    pub fn set_size(&mut self, id: ElementId, size: Size) {
        if let Some(n) = self.element_opt_mut(id) {
            n.local.size = size;
        }
    }

    /// Update z index.
    pub fn set_z_index(&mut self, id: ElementId, z: i32) {
        if let Some(n) = self.element_opt_mut(id) {
            n.local.z_index = z;
        }
    }

    /// Replace element flags.
    pub fn set_flags(&mut self, id: ElementId, flags: ElementFlags) {
        if let Some(n) = self.element_opt_mut(id) {
            n.local.flags = flags;
        }
    }

    /// Set or clear some element flags, leaving the others untouched.
    pub fn toggle_flags(&mut self, id: ElementId, flags: ElementFlags, on: bool) {
        if let Some(n) = self.element_opt_mut(id) {
            n.local.flags.set(flags, on);
        }
    }

    /// Add a class annotation if it is not already present.
    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(n) = self.element_opt_mut(id)
            && !n.local.classes.iter().any(|c| c == class)
        {
            n.local.classes.push(String::from(class));
        }
    }

    /// Remove a class annotation.
    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(n) = self.element_opt_mut(id) {
            n.local.classes.retain(|c| c != class);
        }
    }

    /// Returns true if `id` refers to a live element.
    ///
    /// An `ElementId` is considered live if its slot exists and its generation matches
    /// the current generation stored in that slot.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.elements
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Local data of a live element.
    pub fn local(&self, id: ElementId) -> Option<&LocalElement> {
        self.element_opt(id).map(|n| &n.local)
    }

    /// Parent of a live element; `None` for roots and stale ids.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.element_opt(id).and_then(|n| n.parent)
    }

    /// Children of a live element in document order.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.element_opt(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Number of children of a live element.
    pub fn child_count(&self, id: ElementId) -> usize {
        self.children(id).len()
    }

    /// Position relative to the parent.
    pub fn position(&self, id: ElementId) -> Option<Point> {
        self.element_opt(id).map(|n| n.local.position)
    }

    /// Returns the z-index of an element if the identifier is live.
    pub fn z_index(&self, id: ElementId) -> Option<i32> {
        self.element_opt(id).map(|n| n.local.z_index)
    }

    /// Returns the flags of an element if the identifier is live.
    pub fn flags(&self, id: ElementId) -> Option<ElementFlags> {
        self.element_opt(id).map(|n| n.local.flags)
    }

    /// Class annotations of a live element.
    pub fn classes(&self, id: ElementId) -> &[String] {
        self.element_opt(id).map_or(&[], |n| n.local.classes.as_slice())
    }

    /// Returns true if the element carries exactly this class annotation.
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    /// Scene-space rectangle of an element.
    ///
    /// The origin is the sum of the positions along the path from the root, so
    /// moving an ancestor moves every descendant.
    pub fn bounding_rect(&self, id: ElementId) -> Option<Rect> {
        let node = self.element_opt(id)?;
        let origin = self.origin_of(id);
        Some(Rect::from_origin_size(origin, node.local.size))
    }

    /// Scene-space origin of the parent's box, or the scene origin for roots.
    pub fn parent_origin(&self, id: ElementId) -> Point {
        match self.parent(id) {
            Some(p) => self.origin_of(p),
            None => Point::ORIGIN,
        }
    }

    /// Root elements in insertion order.
    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    /// Every live element in document order (pre-order, roots in insertion order).
    pub fn document_order(&self) -> Vec<ElementId> {
        let mut out = Vec::new();
        for &root in &self.roots {
            self.collect_preorder(root, &mut out);
        }
        out
    }

    /// `id` followed by all of its descendants in document order.
    pub fn subtree(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        if self.is_alive(id) {
            self.collect_preorder(id, &mut out);
        }
        out
    }

    /// Hit test a scene-space point. Returns the topmost element.
    ///
    /// If multiple elements overlap with the same `z_index`, the later one in
    /// document order wins, matching paint order.
    pub fn hit_test_point(&self, pt: Point, filter: QueryFilter) -> Option<Hit> {
        let mut best: Option<(ElementId, i32)> = None;
        for id in self.document_order() {
            let node = self.element(id);
            if filter.visible_only && !node.local.flags.contains(ElementFlags::VISIBLE) {
                continue;
            }
            if filter.pickable_only && !node.local.flags.contains(ElementFlags::PICKABLE) {
                continue;
            }
            let Some(rect) = self.bounding_rect(id) else {
                continue;
            };
            if !rect.contains(pt) {
                continue;
            }
            let z = node.local.z_index;
            match best {
                Some((_, z_best)) if z < z_best => {}
                _ => best = Some((id, z)),
            }
        }
        best.map(|(element, _)| Hit {
            element,
            path: self.path_to_root(element),
        })
    }

    /// Path from the root to `id` (inclusive). Empty for stale ids.
    pub fn path_to_root(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut cur = Some(id).filter(|id| self.is_alive(*id));
        while let Some(id) = cur {
            out.push(id);
            cur = self.element(id).parent;
        }
        out.reverse();
        out
    }

    // --- internals ---

    /// Access an element; panics if `id` is stale.
    fn element(&self, id: ElementId) -> &Element {
        self.elements[id.idx()]
            .as_ref()
            .expect("dangling ElementId")
    }

    /// Access an element mutably; panics if `id` is stale.
    fn element_mut(&mut self, id: ElementId) -> &mut Element {
        self.elements[id.idx()]
            .as_mut()
            .expect("dangling ElementId")
    }

    fn element_opt(&self, id: ElementId) -> Option<&Element> {
        let n = self.elements.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn element_opt_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        let n = self.elements.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn origin_of(&self, id: ElementId) -> Point {
        let mut offset = Vec2::ZERO;
        let mut cur = Some(id);
        while let Some(id) = cur {
            let node = self.element(id);
            offset += node.local.position.to_vec2();
            cur = node.parent;
        }
        offset.to_point()
    }

    fn is_ancestor_or_self(&self, ancestor: ElementId, id: ElementId) -> bool {
        let mut cur = Some(id);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.element(id).parent;
        }
        false
    }

    fn link(&mut self, id: ElementId, parent: Option<ElementId>) {
        match parent {
            Some(p) => {
                self.element_mut(p).children.push(id);
                self.element_mut(id).parent = Some(p);
            }
            None => self.roots.push(id),
        }
    }

    fn unlink(&mut self, id: ElementId) {
        match self.element(id).parent {
            Some(p) => {
                self.element_mut(p).children.retain(|c| *c != id);
                self.element_mut(id).parent = None;
            }
            None => self.roots.retain(|r| *r != id),
        }
    }

    fn free_subtree(&mut self, id: ElementId) {
        let children = core::mem::take(&mut self.element_mut(id).children);
        for child in children {
            self.free_subtree(child);
        }
        self.elements[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    fn collect_preorder(&self, id: ElementId, out: &mut Vec<ElementId>) {
        out.push(id);
        for &child in &self.element(id).children {
            self.collect_preorder(child, out);
        }
    }
}
