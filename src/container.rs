//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
// -----------------------------------------------------------------------------
// Ported to rust from https://github.com/rxi/microui/ and the original license
//
// Copyright (c) 2020 rxi
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.
//
use crate::auto_resizing_container::{drives_horizontal, drives_vertical, AutoResizeState};
use crate::element::{ElementKind, LayerHost};
use crate::scrolling_container::ScrollState;
use crate::window::WindowState;
use crate::{Context, ElementId, LayoutError};

pub(crate) enum ContainerRole {
    Plain,
    Window(WindowState),
    AutoResizing(AutoResizeState),
    Scrolling(ScrollState),
}

/// Children bookkeeping of a container element.
pub(crate) struct ContainerState {
    pub(crate) children: Vec<ElementId>,
    pub(crate) role: ContainerRole,
    /// Set whenever a child is added, removed or moved; consumed by auto-resizing.
    pub(crate) children_changed: bool,
}

impl ContainerState {
    pub(crate) fn new(role: ContainerRole) -> Self {
        Self {
            children: Vec::new(),
            role,
            children_changed: false,
        }
    }
}

impl Context {
    /// Returns the container owning `element`, `None` for windows and detached elements.
    pub fn get_container(&self, element: ElementId) -> Result<Option<ElementId>, LayoutError> { Ok(self.lookup(element)?.container) }

    /// Highest layer height used inside `container`, `-1` when it is empty.
    pub fn current_top_layer(&self, container: ElementId) -> Result<i32, LayoutError> {
        let element = self.lookup(container)?;
        if !element.is_container() {
            return Err(LayoutError::NotAContainer(container));
        }
        Ok(element.layer_thickness - 2)
    }

    /// Adds a detached element to `container`, stacking it above the current content.
    ///
    /// Elements anchored to `element` or to anything inside it are laid out again.
    pub fn add_element(&mut self, container: ElementId, element: ElementId) -> Result<(), LayoutError> {
        self.attach(container, element, None)?;
        let moved = self.subtree(element);
        self.relayout_consumers(&moved)
    }

    pub(crate) fn attach(&mut self, container: ElementId, element: ElementId, layer_height: Option<i32>) -> Result<(), LayoutError> {
        let target = self.lookup(container)?;
        if !target.is_container() {
            return Err(LayoutError::NotAContainer(container));
        }
        let container_layer = target.layer;
        let top = target.layer_thickness - 2;
        if let Some(current) = self.lookup(element)?.container {
            return Err(LayoutError::AlreadyContained { element, container: current });
        }
        if self.windows.contains(element) || self.is_ancestor(element, container) {
            return Err(LayoutError::InvalidParent { element, container });
        }

        let height = layer_height.unwrap_or(top + 1);
        let auto_resizing = {
            let state = self.lookup_mut(container)?.container_state_mut().ok_or(LayoutError::NotAContainer(container))?;
            state.children.push(element);
            state.children_changed = true;
            matches!(state.role, ContainerRole::AutoResizing(_))
        };
        {
            let child = self.lookup_mut(element)?;
            child.container = Some(container);
            child.layer_height = height;
            let anchors = child.transform.anchors();
            if auto_resizing && !(drives_horizontal(anchors) && drives_vertical(anchors)) {
                log::warn!("element {:?} follows the far edges of auto-resizing container {:?}; it will not drive its size on those axes", element, container);
            }
        }
        self.elements.change_layer(element, container_layer + 1 + height);
        self.recalculate_container_layer_thickness(container)?;
        self.update_absolute(element, true)
    }

    /// Removes `element` from `container` without killing it. Returns `false` if it was not a child.
    ///
    /// Elements anchored to the removed subtree fall back to their container edges.
    pub fn remove_element(&mut self, container: ElementId, element: ElementId) -> Result<bool, LayoutError> {
        if !self.detach(container, element)? {
            return Ok(false);
        }
        let removed = self.subtree(element);
        self.relayout_consumers(&removed)?;
        Ok(true)
    }

    fn detach(&mut self, container: ElementId, element: ElementId) -> Result<bool, LayoutError> {
        let removed = {
            let state = self.lookup_mut(container)?.container_state_mut().ok_or(LayoutError::NotAContainer(container))?;
            let before = state.children.len();
            state.children.retain(|c| *c != element);
            state.children_changed |= state.children.len() != before;
            state.children.len() != before
        };
        if !removed {
            return Ok(false);
        }
        if let Some(child) = self.elements.get_mut(element) {
            child.container = None;
        }
        self.recalculate_container_layer_thickness(container)?;
        Ok(true)
    }

    /// Recomputes how many layers `container` spans: `1 + max(height + thickness)` over its
    /// children, so an empty container spans 1, its own layer. A change ripples to the parent
    /// container, or restacks the windows above when `container` is a window.
    pub fn recalculate_container_layer_thickness(&mut self, container: ElementId) -> Result<(), LayoutError> {
        let element = self.lookup(container)?;
        let Some(state) = element.container_state() else {
            return Err(LayoutError::NotAContainer(container));
        };
        let highest = state
            .children
            .iter()
            .filter_map(|c| self.elements.get(*c))
            .map(|c| c.layer_height + c.layer_thickness)
            .max()
            .unwrap_or(0);
        let thickness = 1 + highest;
        if thickness == element.layer_thickness {
            return Ok(());
        }

        let parent = element.container;
        self.lookup_mut(container)?.layer_thickness = thickness;
        match parent {
            Some(parent) => self.recalculate_container_layer_thickness(parent),
            None => {
                if self.windows.contains(container) {
                    log::debug!("window {:?} now spans {} layers", container, thickness);
                    self.windows.restack_above(&mut self.elements, container);
                }
                Ok(())
            }
        }
    }

    /// Reacts to a change of `target`'s rect inside `container`: refreshes the layer thickness and
    /// re-lays out every sibling using `target` as an anchor target, which cascades to their own
    /// consumers.
    pub fn on_contained_elements_changed(&mut self, container: ElementId, target: ElementId) -> Result<(), LayoutError> {
        self.recalculate_container_layer_thickness(container)?;
        let consumers: Vec<ElementId> = {
            let state = self.lookup_mut(container)?.container_state_mut().ok_or(LayoutError::NotAContainer(container))?;
            state.children_changed = true;
            state.children.clone()
        }
        .into_iter()
        .filter(|c| *c != target)
        .filter(|c| self.elements.get(*c).is_some_and(|e| e.transform.get_anchor_targets().contains(&target)))
        .collect();

        for consumer in consumers {
            self.update_absolute(consumer, false)?;
        }
        Ok(())
    }

    /// Re-derives the container's absolute rect from its relative rect and parent, then lays out
    /// every child against it.
    pub fn update_containing_rect_position(&mut self, container: ElementId) -> Result<(), LayoutError> {
        if !self.lookup(container)?.is_container() {
            return Err(LayoutError::NotAContainer(container));
        }
        self.update_absolute(container, false)?;
        let children = self.lookup(container)?.children().to_vec();
        for child in children {
            self.update_absolute(child, false)?;
        }
        Ok(())
    }

    /// Kills `element` and, for containers, everything inside it.
    ///
    /// Elements anchored to a killed element fall back to their container edges.
    pub fn kill(&mut self, element: ElementId) -> Result<(), LayoutError> {
        if element == self.root {
            return Err(LayoutError::RootWindow);
        }
        let parent = self.lookup(element)?.container;
        let removed = self.subtree(element);
        if let Some(parent) = parent {
            self.detach(parent, element)?;
        }
        if self.windows.contains(element) {
            self.windows.remove_window(&mut self.elements, element);
        }
        self.remove_subtree(element);
        self.relayout_consumers(&removed)
    }

    // Lays out again every placed element anchored to one of `targets`.
    pub(crate) fn relayout_consumers(&mut self, targets: &[ElementId]) -> Result<(), LayoutError> {
        let consumers: Vec<ElementId> = self
            .elements
            .iter()
            .filter(|(id, e)| !targets.contains(id) && e.transform.get_anchor_targets().iter().any(|t| targets.contains(t)))
            .map(|(id, _)| id)
            .filter(|id| self.in_tree(*id))
            .collect();
        for consumer in consumers {
            if self.elements.contains_key(consumer) {
                self.update_absolute(consumer, false)?;
            }
        }
        Ok(())
    }

    // `element` followed by its descendants, parents first.
    pub(crate) fn subtree(&self, element: ElementId) -> Vec<ElementId> {
        let mut ids = vec![element];
        let mut next = 0;
        while next < ids.len() {
            if let Some(e) = self.elements.get(ids[next]) {
                ids.extend_from_slice(e.children());
            }
            next += 1;
        }
        ids
    }

    // true when the container chain of `element` ends at a top-level element
    pub(crate) fn in_tree(&self, element: ElementId) -> bool {
        let mut cursor = element;
        loop {
            match self.elements.get(cursor) {
                Some(e) => match e.container {
                    Some(parent) => cursor = parent,
                    None => return self.is_top_level(cursor),
                },
                None => return false,
            }
        }
    }

    pub(crate) fn remove_subtree(&mut self, element: ElementId) {
        if let Some(removed) = self.elements.remove(element) {
            if let ElementKind::Container(state) = removed.kind {
                for child in state.children {
                    self.remove_subtree(child);
                }
            }
        }
    }

    // true when `ancestor` is `element` or contains it, directly or not
    pub(crate) fn is_ancestor(&self, ancestor: ElementId, element: ElementId) -> bool {
        let mut cursor = Some(element);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.elements.get(id).and_then(|e| e.container);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::{dim, rect, rect_tuple, vec2, AnchorRef, Anchors, Context, Edge, ElementDesc, LayoutError, RectEdges};

    fn ctx() -> Context { Context::new(dim(800, 600)) }

    #[test]
    fn children_stack_on_new_layers() {
        let mut ctx = ctx();
        let container = ctx.create_container(ElementDesc::new(rect(0, 0, 100, 100))).unwrap();
        assert_eq!(ctx.element(container).unwrap().layer_thickness(), 1);
        let a = ctx.create_element(ElementDesc::new(rect(0, 0, 10, 10)).container(container)).unwrap();
        let b = ctx.create_element(ElementDesc::new(rect(0, 0, 10, 10)).container(container)).unwrap();
        assert_eq!(ctx.element(a).unwrap().layer_height(), 0);
        assert_eq!(ctx.element(b).unwrap().layer_height(), 1);
        let base = ctx.element(container).unwrap().layer();
        assert_eq!(ctx.element(a).unwrap().layer(), base + 1);
        assert_eq!(ctx.element(b).unwrap().layer(), base + 2);
        assert_eq!(ctx.element(container).unwrap().layer_thickness(), 3);
    }

    #[test]
    fn thickness_never_shrinks_on_add_and_recovers_on_remove() {
        let mut ctx = ctx();
        let container = ctx.create_container(ElementDesc::new(rect(0, 0, 100, 100))).unwrap();
        let low = ctx.create_element(ElementDesc::new(rect(0, 0, 10, 10)).container(container)).unwrap();
        let mut previous = ctx.element(container).unwrap().layer_thickness();
        let high = ctx.create_element(ElementDesc::new(rect(0, 0, 10, 10)).container(container).layer_height(6)).unwrap();
        for _ in 0..3 {
            ctx.create_element(ElementDesc::new(rect(0, 0, 10, 10)).container(container).layer_height(2)).unwrap();
            let thickness = ctx.element(container).unwrap().layer_thickness();
            assert!(thickness >= previous);
            previous = thickness;
        }
        assert_eq!(previous, 8);

        assert!(ctx.remove_element(container, high).unwrap());
        assert_eq!(ctx.element(container).unwrap().layer_thickness(), 4);
        ctx.kill(low).unwrap();
        assert_eq!(ctx.element(container).unwrap().layer_thickness(), 4);
        assert!(!ctx.remove_element(container, high).unwrap());
    }

    #[test]
    fn emptied_container_spans_its_own_layer() {
        let mut ctx = ctx();
        let container = ctx.create_container(ElementDesc::new(rect(0, 0, 100, 100))).unwrap();
        let child = ctx.create_element(ElementDesc::new(rect(0, 0, 10, 10)).container(container).layer_height(3)).unwrap();
        assert_eq!(ctx.element(container).unwrap().layer_thickness(), 5);
        ctx.kill(child).unwrap();
        assert_eq!(ctx.element(container).unwrap().layer_thickness(), 1);
        assert_eq!(ctx.current_top_layer(container).unwrap(), -1);
    }

    #[test]
    fn thickness_ripples_to_parent() {
        let mut ctx = ctx();
        let outer = ctx.create_container(ElementDesc::new(rect(0, 0, 100, 100))).unwrap();
        let inner = ctx.create_container(ElementDesc::new(rect(0, 0, 50, 50)).container(outer)).unwrap();
        assert_eq!(ctx.element(outer).unwrap().layer_thickness(), 2);
        ctx.create_element(ElementDesc::new(rect(0, 0, 10, 10)).container(inner)).unwrap();
        ctx.create_element(ElementDesc::new(rect(0, 0, 10, 10)).container(inner)).unwrap();
        assert_eq!(ctx.element(inner).unwrap().layer_thickness(), 3);
        assert_eq!(ctx.element(outer).unwrap().layer_thickness(), 4);
    }

    #[test]
    fn moving_container_moves_children() {
        let mut ctx = ctx();
        let container = ctx.create_container(ElementDesc::new(rect(100, 100, 200, 200))).unwrap();
        let button = ctx.create_element(ElementDesc::new(rect(50, 50, 50, 50)).container(container)).unwrap();
        assert_eq!(rect_tuple(ctx.get_abs_rect(button).unwrap()), (150, 150, 50, 50));
        ctx.set_position(container, vec2(0, 0)).unwrap();
        assert_eq!(rect_tuple(ctx.get_abs_rect(button).unwrap()), (50, 50, 50, 50));
        assert_eq!(rect_tuple(ctx.get_relative_rect(button).unwrap()), (50, 50, 50, 50));
    }

    #[test]
    fn resizing_container_stretches_children() {
        let mut ctx = ctx();
        let container = ctx.create_container(ElementDesc::new(rect(100, 100, 200, 200))).unwrap();
        let anchors = Anchors::new().left(AnchorRef::SelfEdge).right(AnchorRef::SelfEdge).top(AnchorRef::SelfEdge);
        let bar = ctx.create_element(ElementDesc::new(rect(10, 10, 180, 30)).anchors(anchors).container(container)).unwrap();
        assert_eq!(ctx.element(bar).unwrap().transform().relative_right_margin(), Some(10));
        ctx.set_dimensions(container, dim(300, 200), false).unwrap();
        assert_eq!(ctx.get_relative_rect(bar).unwrap().width, 280);
        assert_eq!(ctx.element(bar).unwrap().transform().relative_right_margin(), Some(10));
        assert_eq!(ctx.get_abs_rect(bar).unwrap().right(), 390);
    }

    #[test]
    fn anchor_target_consumers_follow() {
        let mut ctx = ctx();
        let container = ctx.create_container(ElementDesc::new(rect(0, 0, 400, 100))).unwrap();
        let first = ctx.create_element(ElementDesc::new(rect(10, 10, 50, 20)).container(container)).unwrap();
        let second = ctx
            .create_element(ElementDesc::new(rect(5, 10, 50, 20)).anchors(Anchors::top_left().target(Edge::Left, first)).container(container))
            .unwrap();
        let third = ctx
            .create_element(ElementDesc::new(rect(5, 10, 50, 20)).anchors(Anchors::top_left().target(Edge::Left, second)).container(container))
            .unwrap();
        assert_eq!(ctx.get_abs_rect(second).unwrap().x, 65);
        assert_eq!(ctx.get_abs_rect(third).unwrap().x, 120);
        assert_eq!(ctx.get_anchor_targets(third).unwrap(), vec![second]);

        ctx.set_dimensions(first, dim(100, 20), false).unwrap();
        assert_eq!(ctx.get_abs_rect(second).unwrap().x, 115);
        assert_eq!(ctx.get_abs_rect(third).unwrap().x, 170);

        ctx.set_relative_position(first, vec2(0, 10)).unwrap();
        assert_eq!(ctx.get_abs_rect(third).unwrap().x, 160);
    }

    #[test]
    fn killed_target_falls_back_to_container_edge() {
        let mut ctx = ctx();
        let container = ctx.create_container(ElementDesc::new(rect(20, 0, 400, 100))).unwrap();
        let first = ctx.create_element(ElementDesc::new(rect(10, 10, 50, 20)).container(container)).unwrap();
        let second = ctx
            .create_element(ElementDesc::new(rect(5, 10, 50, 20)).anchors(Anchors::top_left().target(Edge::Left, first)).container(container))
            .unwrap();
        ctx.kill(first).unwrap();
        assert_eq!(ctx.get_abs_rect(first).err(), Some(LayoutError::StaleElement(first)));
        assert_eq!(ctx.get_abs_rect(second).unwrap().x, 25);
    }

    #[test]
    fn killing_a_container_releases_consumers_of_its_children() {
        let mut ctx = ctx();
        let container = ctx.create_container(ElementDesc::new(rect(20, 0, 400, 100))).unwrap();
        let group = ctx.create_container(ElementDesc::new(rect(0, 0, 100, 50)).container(container)).unwrap();
        let inner = ctx.create_element(ElementDesc::new(rect(30, 0, 50, 20)).container(group)).unwrap();
        let follower = ctx
            .create_element(ElementDesc::new(rect(5, 60, 50, 20)).anchors(Anchors::top_left().target(Edge::Left, inner)).container(container))
            .unwrap();
        assert_eq!(ctx.get_abs_rect(follower).unwrap().x, 105);
        ctx.kill(group).unwrap();
        assert_eq!(ctx.get_abs_rect(follower).unwrap().x, 25);
    }

    #[test]
    fn removed_target_releases_and_readded_target_recaptures() {
        let mut ctx = ctx();
        let container = ctx.create_container(ElementDesc::new(rect(20, 0, 400, 100))).unwrap();
        let first = ctx.create_element(ElementDesc::new(rect(10, 10, 50, 20)).container(container)).unwrap();
        let second = ctx
            .create_element(ElementDesc::new(rect(5, 10, 50, 20)).anchors(Anchors::top_left().target(Edge::Left, first)).container(container))
            .unwrap();
        assert_eq!(ctx.get_abs_rect(second).unwrap().x, 85);

        assert!(ctx.remove_element(container, first).unwrap());
        assert_eq!(ctx.get_abs_rect(second).unwrap().x, 25);

        ctx.add_element(ctx.root_container(), first).unwrap();
        assert_eq!(rect_tuple(ctx.get_abs_rect(first).unwrap()), (10, 10, 50, 20));
        assert_eq!(ctx.get_abs_rect(second).unwrap().x, 65);
    }

    #[test]
    fn kill_removes_descendants() {
        let mut ctx = ctx();
        let outer = ctx.create_container(ElementDesc::new(rect(0, 0, 100, 100))).unwrap();
        let inner = ctx.create_container(ElementDesc::new(rect(0, 0, 50, 50)).container(outer)).unwrap();
        let leaf = ctx.create_element(ElementDesc::new(rect(0, 0, 10, 10)).container(inner)).unwrap();
        let root = ctx.root_container();
        let root_children = ctx.element(root).unwrap().children().len();
        ctx.kill(outer).unwrap();
        assert!(ctx.element(inner).is_err());
        assert!(ctx.element(leaf).is_err());
        assert_eq!(ctx.element(root).unwrap().children().len(), root_children - 1);
        assert_eq!(ctx.kill(root).err(), Some(LayoutError::RootWindow));
    }

    #[test]
    fn reparenting_requires_removal() {
        let mut ctx = ctx();
        let a = ctx.create_container(ElementDesc::new(rect(0, 0, 100, 100))).unwrap();
        let b = ctx.create_container(ElementDesc::new(rect(200, 0, 100, 100))).unwrap();
        let child = ctx.create_element(ElementDesc::new(rect(10, 10, 10, 10)).container(a)).unwrap();
        assert_eq!(ctx.add_element(b, child).err(), Some(LayoutError::AlreadyContained { element: child, container: a }));
        assert!(ctx.remove_element(a, child).unwrap());
        assert_eq!(ctx.set_relative_position(child, vec2(0, 0)).err(), Some(LayoutError::Detached(child)));
        ctx.add_element(b, child).unwrap();
        assert_eq!(rect_tuple(ctx.get_abs_rect(child).unwrap()), (210, 10, 10, 10));
        assert_eq!(ctx.add_element(child, a).err(), Some(LayoutError::NotAContainer(child)));
        ctx.remove_element(ctx.root_container(), b).unwrap();
        assert_eq!(ctx.add_element(b, b).err(), Some(LayoutError::InvalidParent { element: b, container: b }));
    }
}
