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
use crate::container::ContainerRole;
use crate::{vec2, AnchorRef, Anchors, Context, ElementDesc, ElementId, LayoutError, RectEdges, Recti};
use bitflags::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Edges an auto-resizing container may move to wrap its children.
    pub struct ResizeEdges : u32 {
        /// Bottom edge.
        const BOTTOM = 8;
        /// Top edge.
        const TOP = 4;
        /// Right edge.
        const RIGHT = 2;
        /// Left edge.
        const LEFT = 1;
    }
}

/// Settings of a container that grows and shrinks to the bounding box of its children.
///
/// Edge rects are expressed in the container's relative coordinates. The container always covers
/// `min_edges_rect` and never extends past `max_edges_rect`.
#[derive(Copy, Clone, Debug)]
pub struct AutoResizingContainer {
    /// Edges allowed to move.
    pub edges: ResizeEdges,
    /// Area always covered, the initial relative rect when `None`.
    pub min_edges_rect: Option<Recti>,
    /// Limit of the covered area, unbounded when `None`.
    pub max_edges_rect: Option<Recti>,
}

impl Default for AutoResizingContainer {
    fn default() -> Self { Self { edges: ResizeEdges::all(), min_edges_rect: None, max_edges_rect: None } }
}

impl AutoResizingContainer {
    /// Resizes along `edges` only.
    pub fn new(edges: ResizeEdges) -> Self { Self { edges, ..Self::default() } }

    /// Sets the area always covered.
    pub fn min_edges_rect(mut self, r: Recti) -> Self {
        self.min_edges_rect = Some(r);
        self
    }

    /// Sets the limit of the covered area.
    pub fn max_edges_rect(mut self, r: Recti) -> Self {
        self.max_edges_rect = Some(r);
        self
    }
}

pub(crate) struct AutoResizeState {
    edges: ResizeEdges,
    min_edges_rect: Recti,
    max_edges_rect: Option<Recti>,
}

// Children following the container's right (or bottom) edge move with it and cannot size it.
pub(crate) fn drives_horizontal(anchors: &Anchors) -> bool {
    !anchors.center && anchors.centerx.is_none() && anchors.right != Some(AnchorRef::SelfEdge) && anchors.left != Some(AnchorRef::OppositeEdge)
}

pub(crate) fn drives_vertical(anchors: &Anchors) -> bool {
    !anchors.center && anchors.centery.is_none() && anchors.bottom != Some(AnchorRef::SelfEdge) && anchors.top != Some(AnchorRef::OppositeEdge)
}

// Moves the near edge of a span to cover `near`/`far` within the min and max spans.
fn fit(near: i32, far: i32, min: (i32, i32), max: Option<(i32, i32)>, move_near: bool, move_far: bool, current: (i32, i32)) -> (i32, i32) {
    let mut span = current;
    if move_near {
        span.0 = near.min(min.0);
        if let Some(max) = max {
            span.0 = span.0.max(max.0);
        }
    }
    if move_far {
        span.1 = far.max(min.1);
        if let Some(max) = max {
            span.1 = span.1.min(max.1);
        }
    }
    (span.0, span.1.max(span.0))
}

impl Context {
    /// Creates a container that wraps its children on every update tick.
    pub fn create_auto_resizing_container(&mut self, desc: ElementDesc, config: AutoResizingContainer) -> Result<ElementId, LayoutError> {
        let id = self.create_container(desc)?;
        let min_edges_rect = config.min_edges_rect.unwrap_or(self.get_relative_rect(id)?);
        if let Some(state) = self.lookup_mut(id)?.container_state_mut() {
            state.role = ContainerRole::AutoResizing(AutoResizeState { edges: config.edges, min_edges_rect, max_edges_rect: config.max_edges_rect });
        }
        Ok(id)
    }

    fn auto_resize_state_mut(&mut self, id: ElementId) -> Result<&mut AutoResizeState, LayoutError> {
        match self.lookup_mut(id)?.container_state_mut().map(|s| &mut s.role) {
            Some(ContainerRole::AutoResizing(state)) => Ok(state),
            _ => Err(LayoutError::NotAContainer(id)),
        }
    }

    /// Changes the area an auto-resizing container always covers; applied on the next tick.
    pub fn set_min_edges_rect(&mut self, id: ElementId, r: Recti) -> Result<(), LayoutError> {
        self.auto_resize_state_mut(id)?.min_edges_rect = r;
        self.mark_children_changed(id)
    }

    /// Changes the limit of an auto-resizing container; applied on the next tick.
    pub fn set_max_edges_rect(&mut self, id: ElementId, r: Option<Recti>) -> Result<(), LayoutError> {
        self.auto_resize_state_mut(id)?.max_edges_rect = r;
        self.mark_children_changed(id)
    }

    fn mark_children_changed(&mut self, id: ElementId) -> Result<(), LayoutError> {
        if let Some(state) = self.lookup_mut(id)?.container_state_mut() {
            state.children_changed = true;
        }
        Ok(())
    }

    // Innermost containers first so their new size is seen by the outer ones.
    pub(crate) fn resolve_auto_resizing(&mut self) {
        let mut pending: Vec<(usize, ElementId)> = self
            .elements
            .iter()
            .filter(|(_, e)| e.container_state().is_some_and(|s| s.children_changed && matches!(s.role, ContainerRole::AutoResizing(_))))
            .map(|(id, _)| (self.depth(id), id))
            .collect();
        pending.sort_by(|a, b| b.cmp(a));
        for (_, id) in pending {
            if let Err(e) = self.auto_resize(id) {
                log::warn!("auto-resizing container {:?} not resolved: {}", id, e);
            }
        }
    }

    fn auto_resize(&mut self, id: ElementId) -> Result<(), LayoutError> {
        let (edges, min, max) = {
            let state = self.auto_resize_state_mut(id)?;
            (state.edges, state.min_edges_rect, state.max_edges_rect)
        };
        let element = self.lookup(id)?;
        let rel = element.transform().relative_rect();
        let abs = element.transform().absolute_rect();
        let (shift_x, shift_y) = (abs.x - rel.x, abs.y - rel.y);

        // bounding box of the children that do not follow the far edges, in relative coordinates;
        // an empty span lets `fit` settle on the minimum edges
        let mut bounds_x = (i32::MAX, i32::MIN);
        let mut bounds_y = (i32::MAX, i32::MIN);
        let mut drivers = Vec::new();
        for child in element.children() {
            let Some(child_element) = self.elements.get(*child) else { continue };
            let anchors = child_element.transform().anchors();
            let r = child_element.transform().absolute_rect();
            let (h, v) = (drives_horizontal(anchors), drives_vertical(anchors));
            if h {
                bounds_x = (bounds_x.0.min(r.left() - shift_x), bounds_x.1.max(r.right() - shift_x));
            }
            if v {
                bounds_y = (bounds_y.0.min(r.top() - shift_y), bounds_y.1.max(r.bottom() - shift_y));
            }
            drivers.push((*child, h, v, vec2(r.x, r.y)));
        }

        let (left, right) = fit(
            bounds_x.0,
            bounds_x.1,
            (min.left(), min.right()),
            max.map(|m| (m.left(), m.right())),
            edges.contains(ResizeEdges::LEFT),
            edges.contains(ResizeEdges::RIGHT),
            (rel.left(), rel.right()),
        );
        let (top, bottom) = fit(
            bounds_y.0,
            bounds_y.1,
            (min.top(), min.bottom()),
            max.map(|m| (m.top(), m.bottom())),
            edges.contains(ResizeEdges::TOP),
            edges.contains(ResizeEdges::BOTTOM),
            (rel.top(), rel.bottom()),
        );

        if (left, top, right - left, bottom - top) != (rel.x, rel.y, rel.width, rel.height) {
            log::debug!("auto-resizing {:?} to {:?}", id, (left, top, right - left, bottom - top));
            self.set_relative_position(id, vec2(left, top))?;
            self.set_dimensions(id, crate::dim(right - left, bottom - top), false)?;
            // children that size the container stay where they are on screen
            for (child, h, v, old) in drivers {
                let now = self.get_abs_rect(child)?;
                let pos = vec2(if h { old.x } else { now.x }, if v { old.y } else { now.y });
                if (pos.x, pos.y) != (now.x, now.y) {
                    self.set_position(child, pos)?;
                }
            }
        }
        if let Some(state) = self.lookup_mut(id)?.container_state_mut() {
            state.children_changed = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dim, rect, rect_tuple};

    fn setup(config: AutoResizingContainer) -> (Context, ElementId) {
        let mut ctx = Context::new(dim(800, 600));
        let id = ctx.create_auto_resizing_container(ElementDesc::new(rect(10, 10, 100, 100)), config).unwrap();
        (ctx, id)
    }

    #[test]
    fn grows_on_the_next_tick() {
        let (mut ctx, id) = setup(AutoResizingContainer::default());
        let child = ctx.create_element(ElementDesc::new(rect(50, 50, 100, 100)).container(id)).unwrap();
        assert_eq!(rect_tuple(ctx.get_relative_rect(id).unwrap()), (10, 10, 100, 100));
        ctx.update(0.016);
        assert_eq!(rect_tuple(ctx.get_relative_rect(id).unwrap()), (10, 10, 150, 150));
        assert_eq!(rect_tuple(ctx.get_abs_rect(child).unwrap()), (60, 60, 100, 100));
        ctx.update(0.016);
        assert_eq!(rect_tuple(ctx.get_relative_rect(id).unwrap()), (10, 10, 150, 150));
    }

    #[test]
    fn grows_left_without_moving_children() {
        let (mut ctx, id) = setup(AutoResizingContainer::default());
        let child = ctx.create_element(ElementDesc::new(rect(-30, 0, 20, 20)).container(id)).unwrap();
        ctx.update(0.016);
        assert_eq!(rect_tuple(ctx.get_relative_rect(id).unwrap()), (-20, 10, 130, 100));
        assert_eq!(rect_tuple(ctx.get_abs_rect(child).unwrap()), (-20, 10, 20, 20));
        assert_eq!(rect_tuple(ctx.get_relative_rect(child).unwrap()), (0, 0, 20, 20));
    }

    #[test]
    fn shrinks_back_to_the_minimum() {
        let (mut ctx, id) = setup(AutoResizingContainer::default());
        let child = ctx.create_element(ElementDesc::new(rect(50, 50, 100, 100)).container(id)).unwrap();
        ctx.update(0.016);
        ctx.set_dimensions(child, dim(10, 10), false).unwrap();
        ctx.update(0.016);
        assert_eq!(rect_tuple(ctx.get_relative_rect(id).unwrap()), (10, 10, 100, 100));
    }

    #[test]
    fn respects_max_edges_and_edge_mask() {
        let config = AutoResizingContainer::new(ResizeEdges::RIGHT | ResizeEdges::BOTTOM).max_edges_rect(rect(0, 0, 130, 500));
        let (mut ctx, id) = setup(config);
        ctx.create_element(ElementDesc::new(rect(-30, 50, 200, 100)).container(id)).unwrap();
        ctx.update(0.016);
        assert_eq!(rect_tuple(ctx.get_relative_rect(id).unwrap()), (10, 10, 120, 150));
    }

    #[test]
    fn far_edge_children_do_not_drive_the_size() {
        let (mut ctx, id) = setup(AutoResizingContainer::default());
        let anchors = Anchors::new().right(AnchorRef::SelfEdge).top(AnchorRef::SelfEdge);
        let close = ctx.create_element(ElementDesc::new(rect(10, 0, 20, 20)).anchors(anchors).container(id)).unwrap();
        ctx.create_element(ElementDesc::new(rect(0, 0, 150, 20)).container(id)).unwrap();
        ctx.update(0.016);
        assert_eq!(rect_tuple(ctx.get_relative_rect(id).unwrap()), (10, 10, 150, 100));
        assert_eq!(ctx.get_abs_rect(close).unwrap().x, 170);
    }

    #[test]
    fn min_edges_rect_changes_apply_on_tick() {
        let (mut ctx, id) = setup(AutoResizingContainer::default());
        ctx.create_element(ElementDesc::new(rect(0, 0, 20, 20)).container(id)).unwrap();
        ctx.update(0.016);
        ctx.set_min_edges_rect(id, rect(10, 10, 40, 40)).unwrap();
        ctx.update(0.016);
        assert_eq!(rect_tuple(ctx.get_relative_rect(id).unwrap()), (10, 10, 40, 40));
        let plain = ctx.create_container(ElementDesc::new(rect(0, 0, 10, 10))).unwrap();
        assert_eq!(ctx.set_min_edges_rect(plain, rect(0, 0, 1, 1)).err(), Some(LayoutError::NotAContainer(plain)));
    }

    #[test]
    fn emptied_container_returns_to_the_minimum() {
        let (mut ctx, id) = setup(AutoResizingContainer::default());
        let child = ctx.create_element(ElementDesc::new(rect(50, 50, 100, 100)).container(id)).unwrap();
        ctx.update(0.016);
        assert_eq!(rect_tuple(ctx.get_relative_rect(id).unwrap()), (10, 10, 150, 150));
        ctx.kill(child).unwrap();
        ctx.update(0.016);
        assert_eq!(rect_tuple(ctx.get_relative_rect(id).unwrap()), (10, 10, 100, 100));

        ctx.set_min_edges_rect(id, rect(0, 0, 60, 30)).unwrap();
        ctx.update(0.016);
        assert_eq!(rect_tuple(ctx.get_relative_rect(id).unwrap()), (0, 0, 60, 30));
    }

    #[test]
    fn far_edge_children_alone_leave_the_minimum() {
        let (mut ctx, id) = setup(AutoResizingContainer::default());
        let anchors = Anchors::new().right(AnchorRef::SelfEdge).bottom(AnchorRef::SelfEdge);
        ctx.create_element(ElementDesc::new(rect(0, 0, 300, 300)).anchors(anchors).container(id)).unwrap();
        ctx.update(0.016);
        assert_eq!(rect_tuple(ctx.get_relative_rect(id).unwrap()), (10, 10, 100, 100));
    }
}
