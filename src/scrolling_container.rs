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
use crate::scrollbar::{scrollbar_base, scrollbar_max_scroll, ScrollAxis, ScrollMetrics, ScrollbarWidget};
use crate::{
    intersect_rect, rect, rect_contains, vec2, AnchorRef, Anchors, Context, Dimensioni, Edge, ElementDesc, ElementId, LayoutError, RectEdges, Recti, Vec2i,
};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone)]
pub(crate) struct ScrollState {
    parts: ScrollingContainer,
    scroll: Vec2i,
    vertical: Rc<Cell<ScrollMetrics>>,
    horizontal: Rc<Cell<ScrollMetrics>>,
}

/// Handles to the elements making up a scrolling container.
///
/// The root container takes the caller's rect and anchors. Inside it, the view container is the
/// visible part of the content: it fills the root and its right and bottom edges are anchored to
/// the scrollbars when they are shown. The scrollable container sits in the view at the negated
/// scroll offset and holds the children.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScrollingContainer {
    /// Outer container.
    pub root: ElementId,
    /// Viewport, the root minus the visible scrollbars.
    pub view: ElementId,
    /// Container holding the scrolled content.
    pub scrollable: ElementId,
    /// Bar along the right edge.
    pub vert_scroll_bar: ElementId,
    /// Bar along the bottom edge.
    pub horiz_scroll_bar: ElementId,
}

impl ScrollingContainer {
    /// Creates a scrolling container whose scrollable area initially matches its size.
    pub fn create(ctx: &mut Context, desc: ElementDesc) -> Result<Self, LayoutError> {
        let root = ctx.create_container(desc)?;
        let size = ctx.get_relative_rect(root)?.dims();
        let bar = ctx.style().scrollbar_size;

        let view = ctx.create_container(ElementDesc::new(rect(0, 0, size.width, size.height)).anchors(Anchors::fill()).container(root))?;
        let scrollable = ctx.create_container(ElementDesc::new(rect(0, 0, size.width, size.height)).container(view))?;

        let vertical = Rc::new(Cell::new(ScrollMetrics::default()));
        let horizontal = Rc::new(Cell::new(ScrollMetrics::default()));
        let vert_scroll_bar = ctx.create_element(
            ElementDesc::new(rect(-bar, 0, bar, size.height))
                .anchors(Anchors::new().right(AnchorRef::SelfEdge).top(AnchorRef::SelfEdge).bottom(AnchorRef::SelfEdge))
                .container(root)
                .hidden()
                .behavior(Box::new(ScrollbarWidget::new(ScrollAxis::Vertical, vertical.clone()))),
        )?;
        let horiz_scroll_bar = ctx.create_element(
            ElementDesc::new(rect(0, -bar, size.width, bar))
                .anchors(Anchors::new().left(AnchorRef::SelfEdge).right(AnchorRef::SelfEdge).bottom(AnchorRef::SelfEdge))
                .container(root)
                .hidden()
                .behavior(Box::new(ScrollbarWidget::new(ScrollAxis::Horizontal, horizontal.clone()))),
        )?;

        let parts = Self { root, view, scrollable, vert_scroll_bar, horiz_scroll_bar };
        if let Some(state) = ctx.lookup_mut(root)?.container_state_mut() {
            state.role = ContainerRole::Scrolling(ScrollState { parts, scroll: vec2(0, 0), vertical, horizontal });
        }
        ctx.refresh_scrolling(root)?;
        Ok(parts)
    }

    /// Container children should be added to.
    pub fn container(&self) -> ElementId { self.scrollable }

    /// Resizes the scrolled content and updates the scrollbars.
    pub fn set_scrollable_area_dimensions(&self, ctx: &mut Context, dims: Dimensioni) -> Result<(), LayoutError> {
        ctx.set_dimensions(self.scrollable, dims, false)?;
        ctx.refresh_scrolling(self.root)
    }

    /// Size of the scrolled content.
    pub fn scrollable_area_dimensions(&self, ctx: &Context) -> Result<Dimensioni, LayoutError> { Ok(ctx.get_relative_rect(self.scrollable)?.dims()) }

    /// Scroll offset of the content, `(0, 0)` showing its top-left corner.
    pub fn scroll_position(&self, ctx: &Context) -> Result<Vec2i, LayoutError> { Ok(ctx.scroll_state(self.root)?.scroll) }

    /// Scrolls to `pos`, clamped so the view stays inside the content.
    pub fn set_scroll(&self, ctx: &mut Context, pos: Vec2i) -> Result<(), LayoutError> {
        ctx.scroll_state_mut(self.root)?.scroll = pos;
        ctx.refresh_scrolling(self.root)
    }

    /// Scrolls by `delta`, clamped like [`Self::set_scroll`].
    pub fn scroll_by(&self, ctx: &mut Context, delta: Vec2i) -> Result<(), LayoutError> {
        let current = self.scroll_position(ctx)?;
        self.set_scroll(ctx, vec2(current.x + delta.x, current.y + delta.y))
    }

    /// Whether the content is taller than the view.
    pub fn is_vert_scrollbar_visible(&self, ctx: &Context) -> Result<bool, LayoutError> { Ok(ctx.element(self.vert_scroll_bar)?.is_visible()) }

    /// Whether the content is wider than the view.
    pub fn is_horiz_scrollbar_visible(&self, ctx: &Context) -> Result<bool, LayoutError> { Ok(ctx.element(self.horiz_scroll_bar)?.is_visible()) }
}

impl Context {
    pub(crate) fn scroll_state(&self, root: ElementId) -> Result<&ScrollState, LayoutError> {
        match self.lookup(root)?.container_state().map(|s| &s.role) {
            Some(ContainerRole::Scrolling(state)) => Ok(state),
            _ => Err(LayoutError::NotAScrollingContainer(root)),
        }
    }

    fn scroll_state_mut(&mut self, root: ElementId) -> Result<&mut ScrollState, LayoutError> {
        match self.lookup_mut(root)?.container_state_mut().map(|s| &mut s.role) {
            Some(ContainerRole::Scrolling(state)) => Ok(state),
            _ => Err(LayoutError::NotAScrollingContainer(root)),
        }
    }

    /// Decides which scrollbars the content needs, then sizes the bars and the view, clamps the
    /// scroll offset and moves the content.
    pub(crate) fn refresh_scrolling(&mut self, root: ElementId) -> Result<(), LayoutError> {
        let state = self.scroll_state(root)?.clone();
        let parts = state.parts;
        let frame = self.lookup(root)?.transform().absolute_rect();
        let content = self.lookup(parts.scrollable)?.transform().relative_rect();
        let bar = self.style.scrollbar_size;

        // each bar takes room from the other axis, so both are decided twice
        let mut need_vert = content.height > frame.height;
        let mut need_horiz = false;
        for _ in 0..2 {
            need_horiz = content.width > frame.width - if need_vert { bar } else { 0 };
            need_vert = content.height > frame.height - if need_horiz { bar } else { 0 };
        }
        let view = rect(
            0,
            0,
            (frame.width - if need_vert { bar } else { 0 }).max(0),
            (frame.height - if need_horiz { bar } else { 0 }).max(0),
        );

        let mut scroll = state.scroll;
        if let Some(pending) = state.horizontal.get().pending {
            scroll.x = pending;
        }
        if let Some(pending) = state.vertical.get().pending {
            scroll.y = pending;
        }
        scroll.x = scroll.x.clamp(0, scrollbar_max_scroll(content.width, view.width));
        scroll.y = scroll.y.clamp(0, scrollbar_max_scroll(content.height, view.height));
        state.horizontal.set(ScrollMetrics { view_len: view.width, content_len: content.width, scroll: scroll.x, pending: None });
        state.vertical.set(ScrollMetrics { view_len: view.height, content_len: content.height, scroll: scroll.y, pending: None });
        self.scroll_state_mut(root)?.scroll = scroll;

        let shown = self.lookup(root)?.is_visible();
        self.place_scrollbar(parts.vert_scroll_bar, need_vert && shown, scrollbar_base(ScrollAxis::Vertical, view, bar))?;
        self.place_scrollbar(parts.horiz_scroll_bar, need_horiz && shown, scrollbar_base(ScrollAxis::Horizontal, view, bar))?;

        let mut anchors = Anchors::fill();
        if need_vert {
            anchors = anchors.target(Edge::Right, parts.vert_scroll_bar);
        }
        if need_horiz {
            anchors = anchors.target(Edge::Bottom, parts.horiz_scroll_bar);
        }
        let view_transform = &mut self.lookup_mut(parts.view)?.transform;
        let retarget = *view_transform.anchors() != anchors;
        if retarget {
            view_transform.set_anchors(anchors);
        }
        let current = view_transform.relative_rect();
        if retarget || (current.width, current.height) != (view.width, view.height) {
            self.apply_dimensions(parts.view, view.dims(), false)?;
        }

        self.set_relative_position(parts.scrollable, vec2(-scroll.x, -scroll.y))
    }

    fn place_scrollbar(&mut self, bar: ElementId, visible: bool, base: Recti) -> Result<(), LayoutError> {
        let element = self.lookup_mut(bar)?;
        element.visible = visible;
        let current = element.transform.relative_rect();
        if (current.width, current.height) != (base.width, base.height) {
            self.apply_dimensions(bar, base.dims(), false)?;
        }
        self.rebuild(bar);
        Ok(())
    }

    pub(crate) fn refresh_all_scrolling(&mut self) {
        let mut roots: Vec<(usize, ElementId)> = self
            .elements
            .iter()
            .filter(|(_, e)| e.container_state().is_some_and(|s| matches!(s.role, ContainerRole::Scrolling(_))))
            .map(|(id, _)| (self.depth(id), id))
            .collect();
        roots.sort();
        for (_, root) in roots {
            if let Err(e) = self.refresh_scrolling(root) {
                log::warn!("scrolling container {:?} not refreshed: {}", root, e);
            }
        }
    }

    // Scrolls the innermost visible scrolling container whose view is under `pos`.
    pub(crate) fn scroll_at(&mut self, pos: Vec2i, delta: Vec2i) -> bool {
        let target = self
            .elements
            .iter()
            .filter_map(|(_, e)| match e.container_state().map(|s| &s.role) {
                Some(ContainerRole::Scrolling(state)) if e.is_visible() && e.is_enabled() => Some(state.parts),
                _ => None,
            })
            .filter(|parts| {
                self.elements.get(parts.view).is_some_and(|view| {
                    let frame = view.transform.absolute_rect();
                    let clipped = intersect_rect(frame, rect(0, 0, self.screen.width, self.screen.height));
                    rect_contains(clipped, pos)
                })
            })
            .max_by_key(|parts| self.depth(parts.root));
        match target {
            Some(parts) => parts.scroll_by(self, delta).is_ok(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dim, rect_tuple, UiEvent};

    fn setup(content: Dimensioni) -> (Context, ScrollingContainer) {
        let mut ctx = Context::new(dim(800, 600));
        let sc = ScrollingContainer::create(&mut ctx, ElementDesc::new(rect(10, 10, 200, 100))).unwrap();
        sc.set_scrollable_area_dimensions(&mut ctx, content).unwrap();
        (ctx, sc)
    }

    fn xy(v: Vec2i) -> (i32, i32) { (v.x, v.y) }

    fn visibility(ctx: &Context, sc: &ScrollingContainer) -> (bool, bool) {
        (sc.is_vert_scrollbar_visible(ctx).unwrap(), sc.is_horiz_scrollbar_visible(ctx).unwrap())
    }

    #[test]
    fn fitting_content_needs_no_bars() {
        let (ctx, sc) = setup(dim(150, 80));
        assert_eq!(visibility(&ctx, &sc), (false, false));
        assert_eq!(rect_tuple(ctx.get_abs_rect(sc.view).unwrap()), (10, 10, 200, 100));
    }

    #[test]
    fn showing_again_keeps_unneeded_bars_hidden() {
        let (mut ctx, sc) = setup(dim(150, 80));
        ctx.hide(sc.root).unwrap();
        ctx.show(sc.root).unwrap();
        assert_eq!(visibility(&ctx, &sc), (false, false));
        assert!(ctx.draw_list().iter().all(|item| item.id != sc.vert_scroll_bar && item.id != sc.horiz_scroll_bar));
        assert_eq!(rect_tuple(ctx.get_abs_rect(sc.view).unwrap()), (10, 10, 200, 100));

        let (mut ctx, sc) = setup(dim(150, 300));
        ctx.hide(sc.root).unwrap();
        assert_eq!(visibility(&ctx, &sc), (false, false));
        ctx.show(sc.root).unwrap();
        assert_eq!(visibility(&ctx, &sc), (true, false));
        assert_eq!(rect_tuple(ctx.get_abs_rect(sc.view).unwrap()), (10, 10, 188, 100));
    }

    #[test]
    fn tall_content_shows_vertical_bar_only() {
        let (ctx, sc) = setup(dim(150, 300));
        assert_eq!(visibility(&ctx, &sc), (true, false));
        assert_eq!(rect_tuple(ctx.get_abs_rect(sc.view).unwrap()), (10, 10, 188, 100));
        assert_eq!(rect_tuple(ctx.get_abs_rect(sc.vert_scroll_bar).unwrap()), (198, 10, 12, 100));
    }

    #[test]
    fn each_bar_can_trigger_the_other() {
        let (ctx, sc) = setup(dim(195, 300));
        assert_eq!(visibility(&ctx, &sc), (true, true));
        assert_eq!(rect_tuple(ctx.get_abs_rect(sc.view).unwrap()), (10, 10, 188, 88));
        assert_eq!(rect_tuple(ctx.get_abs_rect(sc.vert_scroll_bar).unwrap()), (198, 10, 12, 88));
        assert_eq!(rect_tuple(ctx.get_abs_rect(sc.horiz_scroll_bar).unwrap()), (10, 98, 188, 12));

        let (ctx, sc) = setup(dim(300, 95));
        assert_eq!(visibility(&ctx, &sc), (true, true));
        assert_eq!(ctx.element(sc.view).unwrap().transform().anchors().target_for(Edge::Bottom), Some(sc.horiz_scroll_bar));
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let (mut ctx, sc) = setup(dim(150, 300));
        sc.set_scroll(&mut ctx, vec2(40, 500)).unwrap();
        assert_eq!(xy(sc.scroll_position(&ctx).unwrap()), (0, 200));
        assert_eq!(ctx.get_abs_rect(sc.scrollable).unwrap().y, 10 - 200);
        sc.scroll_by(&mut ctx, vec2(0, -50)).unwrap();
        assert_eq!(xy(sc.scroll_position(&ctx).unwrap()), (0, 150));
        sc.scroll_by(&mut ctx, vec2(0, -500)).unwrap();
        assert_eq!(xy(sc.scroll_position(&ctx).unwrap()), (0, 0));
    }

    #[test]
    fn growing_the_root_drops_unneeded_bars() {
        let (mut ctx, sc) = setup(dim(150, 300));
        sc.set_scroll(&mut ctx, vec2(0, 120)).unwrap();
        ctx.set_dimensions(sc.root, dim(200, 400), false).unwrap();
        assert_eq!(visibility(&ctx, &sc), (false, false));
        assert_eq!(xy(sc.scroll_position(&ctx).unwrap()), (0, 0));
        assert_eq!(rect_tuple(ctx.get_abs_rect(sc.view).unwrap()), (10, 10, 200, 400));
    }

    #[test]
    fn wheel_and_bar_clicks_scroll() {
        let (mut ctx, sc) = setup(dim(150, 300));
        assert!(ctx.process_event(&UiEvent::MouseWheel { pos: vec2(50, 50), delta: vec2(0, 30) }));
        assert_eq!(xy(sc.scroll_position(&ctx).unwrap()), (0, 30));
        assert!(!ctx.process_event(&UiEvent::MouseWheel { pos: vec2(500, 500), delta: vec2(0, 30) }));

        assert!(ctx.process_event(&UiEvent::MouseDown(vec2(204, 109))));
        assert_eq!(xy(sc.scroll_position(&ctx).unwrap()), (0, 30));
        ctx.update(0.016);
        assert_eq!(xy(sc.scroll_position(&ctx).unwrap()), (0, 200));
    }

    #[test]
    fn content_outside_the_view_is_clipped() {
        let (mut ctx, sc) = setup(dim(150, 300));
        let below = ctx.create_element(ElementDesc::new(rect(0, 250, 50, 20)).container(sc.container())).unwrap();
        assert_eq!(ctx.hovered_element(vec2(20, 265)), Some(ctx.root_container()));
        sc.set_scroll(&mut ctx, vec2(0, 200)).unwrap();
        assert_eq!(ctx.get_abs_rect(below).unwrap().y, 60);
        assert_eq!(ctx.hovered_element(vec2(20, 65)), Some(below));
    }

    #[test]
    fn rejects_plain_containers() {
        let mut ctx = Context::new(dim(800, 600));
        let plain = ctx.create_container(ElementDesc::new(rect(0, 0, 10, 10))).unwrap();
        assert_eq!(ctx.scroll_state(plain).err(), Some(LayoutError::NotAScrollingContainer(plain)));
    }
}
