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
use crate::container::{ContainerRole, ContainerState};
use crate::element::{Element, ElementKind, Elements, LayerHost};
use crate::{
    dim, intersect_rect, rect, rect_contains, rect_tuple, AnchorOffsets, Anchors, Command, Dimensioni, Edge, ElementDesc, ElementId, LayoutError,
    RectEdges, Recti, Resolved, Style, Transform, UiEvent, Vec2i, WindowStack,
};
use slotmap::{SecondaryMap, SlotMap};

/// One entry of the paint list returned by [`Context::draw_list`].
pub struct DrawItem<'a> {
    /// Element being painted.
    pub id: ElementId,
    /// Absolute paint layer.
    pub layer: i32,
    /// Absolute rect; the commands are relative to its top-left corner.
    pub rect: Recti,
    /// Screen area left visible by the element's containers.
    pub clip: Recti,
    /// Commands recorded by the last rebuild.
    pub commands: &'a [Command],
}

/// Owns every element, the window stack and the style.
///
/// Elements are addressed through [`ElementId`] handles. Operations on a killed element return
/// [`LayoutError::StaleElement`]; layout problems never fail and are logged instead.
pub struct Context {
    pub(crate) elements: Elements,
    pub(crate) windows: WindowStack,
    pub(crate) style: Style,
    pub(crate) screen: Dimensioni,
    pub(crate) root: ElementId,
    next_sequence: u64,
}

impl Context {
    /// Creates a context for a screen of the given size, with its root window.
    pub fn new(screen: Dimensioni) -> Self {
        let mut ctx = Self {
            elements: SlotMap::with_key(),
            windows: WindowStack::default(),
            style: Style::default(),
            screen,
            root: ElementId::default(),
            next_sequence: 0,
        };
        ctx.root = ctx.spawn_root();
        ctx
    }

    fn spawn_root(&mut self) -> ElementId {
        let transform = Transform::new(rect(0, 0, self.screen.width, self.screen.height), Anchors::fill());
        let root = self.insert(transform, ElementKind::Container(ContainerState::new(ContainerRole::Plain)), None);
        self.windows.add_new_window(&mut self.elements, root);
        if let Err(e) = self.update_absolute(root, true) {
            log::warn!("root window layout failed: {}", e);
        }
        root
    }

    pub(crate) fn insert(&mut self, transform: Transform, kind: ElementKind, behavior: Option<Box<dyn crate::WidgetBehavior>>) -> ElementId {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        let mut element = Element::new(transform, kind, sequence);
        element.behavior = behavior;
        self.elements.insert(element)
    }

    /// Root window, the container used when a description names none.
    pub fn root_container(&self) -> ElementId { self.root }

    /// Current style.
    pub fn style(&self) -> &Style { &self.style }

    /// Replaces the style and rebuilds every element against it.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
        for element in self.elements.values_mut() {
            element.rebuild(&self.style);
        }
        self.refresh_all_scrolling();
    }

    /// Screen size the root window covers.
    pub fn screen_size(&self) -> Dimensioni { self.screen }

    /// Resizes the screen; the root window and screen-anchored windows follow.
    pub fn set_screen_size(&mut self, screen: Dimensioni) -> Result<(), LayoutError> {
        self.screen = screen;
        let windows = self.windows.windows().to_vec();
        for window in windows {
            self.update_absolute(window, false)?;
        }
        Ok(())
    }

    /// Window stack, bottom to top.
    pub fn windows(&self) -> &WindowStack { &self.windows }

    /// Looks an element up.
    pub fn element(&self, id: ElementId) -> Result<&Element, LayoutError> { self.lookup(id) }

    /// Number of live elements, the root window included.
    pub fn len(&self) -> usize { self.elements.len() }

    /// Whether no element is live. The root window lives as long as the context, so this only
    /// holds while [`Context::clear`] rebuilds it.
    pub fn is_empty(&self) -> bool { self.elements.is_empty() }

    pub(crate) fn lookup(&self, id: ElementId) -> Result<&Element, LayoutError> { self.elements.get(id).ok_or(LayoutError::StaleElement(id)) }

    pub(crate) fn lookup_mut(&mut self, id: ElementId) -> Result<&mut Element, LayoutError> { self.elements.get_mut(id).ok_or(LayoutError::StaleElement(id)) }

    /// Creates a widget element.
    pub fn create_element(&mut self, desc: ElementDesc) -> Result<ElementId, LayoutError> { self.create(desc, ElementKind::Widget) }

    /// Creates an element able to hold children.
    pub fn create_container(&mut self, desc: ElementDesc) -> Result<ElementId, LayoutError> { self.create(desc, ElementKind::Container(ContainerState::new(ContainerRole::Plain))) }

    pub(crate) fn create(&mut self, desc: ElementDesc, kind: ElementKind) -> Result<ElementId, LayoutError> {
        let container = desc.container.unwrap_or(self.root);
        let parent = self.lookup(container)?;
        if !parent.is_container() {
            return Err(LayoutError::NotAContainer(container));
        }
        let visible = desc.visible && parent.visible;
        for target in desc.anchors.targets() {
            if !self.elements.contains_key(target) {
                log::warn!("anchor target {:?} does not exist, the container edge is used instead", target);
            }
        }

        let mut transform = Transform::new(desc.relative_rect, desc.anchors);
        if let Some(min) = desc.minimum_dimensions {
            transform.set_minimum_dimensions(min);
        }
        transform.set_dynamic_size_calculator(desc.dynamic_size);
        let requested = {
            let rel = transform.relative_rect();
            dim(
                if transform.is_dynamic_width() { -1 } else { rel.width },
                if transform.is_dynamic_height() { -1 } else { rel.height },
            )
        };

        let id = self.insert(transform, kind, desc.behavior);
        self.lookup_mut(id)?.visible = visible;
        if let Err(e) = self.attach(container, id, desc.layer_height) {
            self.elements.remove(id);
            return Err(e);
        }
        self.apply_dimensions(id, requested, false)?;
        self.rebuild(id);
        Ok(id)
    }

    /// Absolute (screen) rect.
    pub fn get_abs_rect(&self, id: ElementId) -> Result<Recti, LayoutError> { Ok(self.lookup(id)?.transform.absolute_rect()) }

    /// Rect relative to the container, or to the anchored reference edges.
    pub fn get_relative_rect(&self, id: ElementId) -> Result<Recti, LayoutError> { Ok(self.lookup(id)?.transform.relative_rect()) }

    /// Distinct anchor targets of the element.
    pub fn get_anchor_targets(&self, id: ElementId) -> Result<Vec<ElementId>, LayoutError> { Ok(self.lookup(id)?.transform.get_anchor_targets()) }

    // Windows and the root are laid out against the screen.
    pub(crate) fn is_top_level(&self, id: ElementId) -> bool {
        self.windows.contains(id)
            || self
                .elements
                .get(id)
                .and_then(|e| e.container_state())
                .is_some_and(|s| matches!(s.role, ContainerRole::Window(_)))
    }

    /// Reference edges the element is positioned against: its container's absolute rect, with the
    /// edges named by anchor targets replaced by the targets' adjacent edges.
    pub fn anchor_offsets(&self, id: ElementId) -> Result<AnchorOffsets, LayoutError> {
        let element = self.lookup(id)?;
        let frame = match element.container {
            Some(container) => self.lookup(container)?.transform.absolute_rect(),
            None if self.is_top_level(id) => rect(0, 0, self.screen.width, self.screen.height),
            None => return Err(LayoutError::Detached(id)),
        };

        let anchors = element.transform.anchors();
        let (mut left, mut right, mut top, mut bottom) = (frame.left(), frame.right(), frame.top(), frame.bottom());
        for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
            let Some(target) = anchors.target_for(edge) else { continue };
            let target_rect = match self.elements.get(target) {
                Some(t) if self.in_tree(target) => t.transform.absolute_rect(),
                _ => {
                    log::warn!("anchor target {:?} of {:?} was killed or detached, falling back to the container edge", target, id);
                    continue;
                }
            };
            match edge {
                Edge::Left => left = target_rect.right(),
                Edge::Right => right = target_rect.left(),
                Edge::Top => top = target_rect.bottom(),
                Edge::Bottom => bottom = target_rect.top(),
            }
        }
        Ok(AnchorOffsets::new(left, right, top, bottom))
    }

    /// Re-derives the absolute rect from the relative rect, then lays out whatever depends on it.
    pub fn recompute_absolute_from_relative(&mut self, id: ElementId, recalc_margins: bool) -> Result<(), LayoutError> { self.update_absolute(id, recalc_margins) }

    /// Re-derives the relative rect from the absolute rect.
    pub fn recompute_relative_from_absolute(&mut self, id: ElementId) -> Result<(), LayoutError> {
        let offsets = self.anchor_offsets(id)?;
        match self.lookup_mut(id)?.transform.resolve_relative(&offsets) {
            Resolved::Resized(dims) => self.apply_dimensions(id, dims, false),
            Resolved::Positioned => Ok(()),
        }
    }

    pub(crate) fn update_absolute(&mut self, id: ElementId, recalc_margins: bool) -> Result<(), LayoutError> {
        let offsets = self.anchor_offsets(id)?;
        let element = self.lookup_mut(id)?;
        let before = rect_tuple(element.transform.absolute_rect());
        match element.transform.resolve_absolute(&offsets, recalc_margins) {
            Resolved::Resized(dims) => self.apply_dimensions(id, dims, false),
            Resolved::Positioned => {
                let after = rect_tuple(element.transform.absolute_rect());
                if before == after {
                    return Ok(());
                }
                log::trace!("{:?} moved to {:?}", id, after);
                self.propagate(id)
            }
        }
    }

    pub(crate) fn apply_dimensions(&mut self, id: ElementId, dims: Dimensioni, clamp_to_container: bool) -> Result<(), LayoutError> {
        let container_size = match self.lookup(id)?.container {
            Some(container) if clamp_to_container => Some(self.lookup(container)?.transform.absolute_rect().dims()),
            _ => None,
        };
        let offsets = self.anchor_offsets(id)?;
        let element = self.elements.get_mut(id).ok_or(LayoutError::StaleElement(id))?;
        if !element.transform.set_dimensions(dims, container_size) {
            return Ok(());
        }
        // the size is applied once; a second request from the anchors is not followed
        if let Resolved::Resized(settled) = element.transform.resolve_absolute(&offsets, true) {
            log::debug!("{:?} resized to {}x{}, anchors asked for {}x{}", id, dims.width, dims.height, settled.width, settled.height);
        }
        log::trace!("{:?} resized to {:?}", id, rect_tuple(element.transform.absolute_rect()));
        element.rebuild(&self.style);
        self.propagate(id)
    }

    // Lays out the children against the new rect, then lets the container react.
    fn propagate(&mut self, id: ElementId) -> Result<(), LayoutError> {
        let (children, container, scrolling) = {
            let element = self.lookup(id)?;
            let scrolling = element.container_state().is_some_and(|s| matches!(s.role, ContainerRole::Scrolling(_)));
            (element.children().to_vec(), element.container, scrolling)
        };
        for child in children {
            self.update_absolute(child, false)?;
        }
        if scrolling {
            self.refresh_scrolling(id)?;
        }
        if let Some(container) = container {
            self.on_contained_elements_changed(container, id)?;
        }
        Ok(())
    }

    pub(crate) fn rebuild(&mut self, id: ElementId) {
        if let Some(element) = self.elements.get_mut(id) {
            element.rebuild(&self.style);
        }
    }

    /// Moves the element to a relative position.
    pub fn set_relative_position(&mut self, id: ElementId, pos: Vec2i) -> Result<(), LayoutError> {
        self.anchor_offsets(id)?;
        self.lookup_mut(id)?.transform.set_relative_position(pos);
        self.update_absolute(id, true)
    }

    /// Moves the element to an absolute (screen) position; the relative rect is solved back.
    pub fn set_position(&mut self, id: ElementId, pos: Vec2i) -> Result<(), LayoutError> {
        let offsets = self.anchor_offsets(id)?;
        let element = self.lookup_mut(id)?;
        element.transform.set_absolute_position(pos);
        match element.transform.resolve_relative(&offsets) {
            Resolved::Resized(dims) => self.apply_dimensions(id, dims, false),
            Resolved::Positioned => self.propagate(id),
        }
    }

    /// Resizes the element. Negative components request the content size; with
    /// `clamp_to_container` the size cannot exceed the container's.
    pub fn set_dimensions(&mut self, id: ElementId, dims: Dimensioni, clamp_to_container: bool) -> Result<(), LayoutError> {
        self.anchor_offsets(id)?;
        self.apply_dimensions(id, dims, clamp_to_container)
    }

    /// Sets the minimum size and grows the element if it is now below it.
    pub fn set_minimum_dimensions(&mut self, id: ElementId, dims: Dimensioni) -> Result<(), LayoutError> {
        let transform = &mut self.lookup_mut(id)?.transform;
        transform.set_minimum_dimensions(dims);
        let current = transform.relative_rect().dims();
        let clamped = transform.clamp_to_minimum(current);
        if (clamped.width, clamped.height) != (current.width, current.height) && self.anchor_offsets(id).is_ok() {
            self.apply_dimensions(id, clamped, false)?;
        }
        Ok(())
    }

    /// Replaces the anchors and re-lays out the element with fresh margins.
    ///
    /// Returns [`LayoutError::AnchorCycle`] when a target already depends on the element's rect,
    /// either through its own anchors or because it lives inside the element.
    pub fn set_anchors(&mut self, id: ElementId, anchors: Anchors) -> Result<(), LayoutError> {
        self.lookup(id)?;
        for target in anchors.targets() {
            if self.depends_on(target, id) {
                return Err(LayoutError::AnchorCycle { element: id, target });
            }
        }
        self.lookup_mut(id)?.transform.set_anchors(anchors);
        if self.anchor_offsets(id).is_ok() {
            self.update_absolute(id, true)?;
        }
        Ok(())
    }

    // true when the layout of `start` reads the rect of `id`
    fn depends_on(&self, start: ElementId, id: ElementId) -> bool {
        let mut visited = SecondaryMap::new();
        let mut pending = vec![start];
        while let Some(next) = pending.pop() {
            if next == id {
                return true;
            }
            if visited.insert(next, ()).is_some() {
                continue;
            }
            if let Some(element) = self.elements.get(next) {
                pending.extend(element.transform.get_anchor_targets());
                pending.extend(element.container);
            }
        }
        false
    }

    /// Moves the element to an absolute layer. Inside a container this sets its layer height, so the
    /// layer cannot go below the container's first child layer.
    pub fn change_layer(&mut self, id: ElementId, layer: i32) -> Result<(), LayoutError> {
        match self.lookup(id)?.container {
            Some(container) => {
                let base = self.lookup(container)?.layer + 1;
                if layer < base {
                    log::warn!("layer {} is below container {:?}, using {}", layer, container, base);
                }
                let height = (layer - base).max(0);
                self.lookup_mut(id)?.layer_height = height;
                self.elements.change_layer(id, base + height);
                self.recalculate_container_layer_thickness(container)
            }
            None if self.windows.contains(id) => {
                log::warn!("window {:?} layers follow the window stack; use move_window_to_front", id);
                Ok(())
            }
            None => {
                self.elements.change_layer(id, layer);
                Ok(())
            }
        }
    }

    /// Highest layer used by any window.
    pub fn get_top_layer(&self) -> i32 {
        self.windows
            .windows()
            .last()
            .and_then(|w| self.elements.get(*w))
            .map(|w| w.top_layer())
            .unwrap_or(0)
    }

    fn for_subtree(&mut self, id: ElementId, f: &mut dyn FnMut(&mut Element)) -> Result<(), LayoutError> {
        let element = self.lookup_mut(id)?;
        f(element);
        let children = element.children().to_vec();
        for child in children {
            self.for_subtree(child, f)?;
        }
        Ok(())
    }

    /// Shows the element and its descendants. Scrollbars stay hidden unless the content needs them.
    pub fn show(&mut self, id: ElementId) -> Result<(), LayoutError> { self.set_visible(id, true) }

    /// Hides the element and its descendants.
    pub fn hide(&mut self, id: ElementId) -> Result<(), LayoutError> { self.set_visible(id, false) }

    fn set_visible(&mut self, id: ElementId, visible: bool) -> Result<(), LayoutError> {
        self.for_subtree(id, &mut |e| e.visible = visible)?;
        // scrolling containers own the visibility of their bars
        let scrolling: Vec<ElementId> = self.subtree(id).into_iter().filter(|e| self.scroll_state(*e).is_ok()).collect();
        for root in scrolling {
            self.refresh_scrolling(root)?;
        }
        Ok(())
    }

    /// Lets the element and its descendants receive events.
    pub fn enable(&mut self, id: ElementId) -> Result<(), LayoutError> { self.for_subtree(id, &mut |e| e.enabled = true) }

    /// Stops the element and its descendants from receiving events.
    pub fn disable(&mut self, id: ElementId) -> Result<(), LayoutError> { self.for_subtree(id, &mut |e| e.enabled = false) }

    /// Per-frame tick: resolves auto-resizing containers, refreshes scrolling containers and
    /// advances widget behaviors.
    pub fn update(&mut self, time_delta: f32) {
        self.resolve_auto_resizing();
        self.refresh_all_scrolling();
        for element in self.elements.values_mut() {
            if let Some(behavior) = element.behavior.as_mut() {
                behavior.update(time_delta);
            }
        }
    }

    pub(crate) fn depth(&self, id: ElementId) -> usize {
        let mut depth = 0;
        let mut cursor = self.elements.get(id).and_then(|e| e.container);
        while let Some(parent) = cursor {
            depth += 1;
            cursor = self.elements.get(parent).and_then(|e| e.container);
        }
        depth
    }

    // Screen area left visible by the containers of `id`.
    fn clip_rect(&self, id: ElementId) -> Recti {
        let mut clip = rect(0, 0, self.screen.width, self.screen.height);
        let mut cursor = self.elements.get(id).and_then(|e| e.container);
        while let Some(parent) = cursor.and_then(|p| self.elements.get(p)) {
            clip = intersect_rect(clip, parent.transform.absolute_rect());
            cursor = parent.container;
        }
        clip
    }

    fn is_attached(&self, id: ElementId, element: &Element) -> bool { element.container.is_some() || self.windows.contains(id) }

    /// Visible elements with a non-empty image, in paint order: by layer, then creation order.
    pub fn draw_list(&self) -> Vec<DrawItem<'_>> {
        let mut items: Vec<(u64, DrawItem<'_>)> = self
            .elements
            .iter()
            .filter(|(id, e)| e.visible && !e.image.is_empty() && self.is_attached(*id, e))
            .map(|(id, e)| {
                let item = DrawItem {
                    id,
                    layer: e.layer,
                    rect: e.transform.absolute_rect(),
                    clip: self.clip_rect(id),
                    commands: &e.image,
                };
                (e.sequence, item)
            })
            .collect();
        items.sort_by_key(|(sequence, item)| (item.layer, *sequence));
        items.into_iter().map(|(_, item)| item).collect()
    }

    /// Flattens [`Self::draw_list`] into screen-space commands, emitting a clip whenever it changes.
    pub fn render_commands(&self) -> Vec<Command> {
        let mut commands = Vec::new();
        let mut clip = None;
        for item in self.draw_list() {
            let item_clip = rect_tuple(item.clip);
            if clip != Some(item_clip) {
                commands.push(Command::Clip { rect: item.clip });
                clip = Some(item_clip);
            }
            let offset = Vec2i { x: item.rect.x, y: item.rect.y };
            commands.extend(item.commands.iter().map(|c| c.translated(offset)));
        }
        commands
    }

    // Visible, enabled elements under `pos`, topmost first.
    fn hit_order(&self, pos: Vec2i) -> Vec<ElementId> {
        let mut hits: Vec<(i32, u64, ElementId)> = self
            .elements
            .iter()
            .filter(|(id, e)| e.visible && e.enabled && self.is_attached(*id, e))
            .filter(|(id, e)| rect_contains(intersect_rect(e.transform.absolute_rect(), self.clip_rect(*id)), pos))
            .map(|(id, e)| (e.layer, e.sequence, id))
            .collect();
        hits.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));
        hits.into_iter().map(|(_, _, id)| id).collect()
    }

    /// Topmost visible, enabled element under `pos`.
    pub fn hovered_element(&self, pos: Vec2i) -> Option<ElementId> { self.hit_order(pos).first().copied() }

    /// Routes an event: a mouse press focuses the window under the pointer, then the event goes to
    /// the behaviors under the pointer from top to bottom until one consumes it. Unconsumed wheel
    /// events scroll the innermost scrolling container under the pointer.
    pub fn process_event(&mut self, event: &UiEvent) -> bool {
        if let UiEvent::MouseDown(pos) = event {
            self.focus_window_at(*pos);
        }
        for id in self.hit_order(event.pos()) {
            let Some(element) = self.elements.get_mut(id) else { continue };
            let rect = element.transform.absolute_rect();
            if let Some(behavior) = element.behavior.as_mut() {
                if behavior.process_event(event, rect) {
                    return true;
                }
            }
        }
        match event {
            UiEvent::MouseWheel { pos, delta } => self.scroll_at(*pos, *delta),
            _ => false,
        }
    }

    /// Kills every element and window, then recreates the root window. Old handles become stale.
    pub fn clear(&mut self) {
        self.windows.clear();
        self.elements.clear();
        self.root = self.spawn_root();
    }
}
