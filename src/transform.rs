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
use crate::{dim, AnchorRef, Anchors, Dimensioni, ElementId, RectEdges, Recti, Vec2i};

/// Absolute reference edges an element is positioned against.
///
/// Each edge defaults to the matching edge of the container's absolute rect. An anchor target
/// replaces it with its own adjacent edge: `left_target` supplies its right edge, `right_target` its
/// left edge, `top_target` its bottom edge and `bottom_target` its top edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AnchorOffsets {
    /// Reference for `left`-valued anchors.
    pub left: i32,
    /// Reference for `right`-valued anchors.
    pub right: i32,
    /// Reference for `top`-valued anchors.
    pub top: i32,
    /// Reference for `bottom`-valued anchors.
    pub bottom: i32,
    /// Horizontal center between `left` and `right`.
    pub centerx: i32,
    /// Vertical center between `top` and `bottom`.
    pub centery: i32,
}

impl AnchorOffsets {
    /// Builds offsets from four reference edges, centers are derived.
    pub fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
            centerx: left + (right - left) / 2,
            centery: top + (bottom - top) / 2,
        }
    }

    /// Offsets of a container with no anchor target involved.
    pub fn from_container(container: Recti) -> Self { Self::new(container.left(), container.right(), container.top(), container.bottom()) }
}

/// Outcome of an anchor resolution pass.
#[derive(Copy, Clone)]
pub enum Resolved {
    /// The size matched the relative size, only the position was written.
    Positioned,
    /// The anchors produced a different size; the owner must apply it through `set_dimensions`.
    Resized(Dimensioni),
}

/// Relative/absolute rectangle pair of an element and the anchor state converting between them.
pub struct Transform {
    relative_rect: Recti,
    absolute_rect: Recti,
    anchors: Anchors,
    minimum_dimensions: Dimensioni,
    dynamic_width: bool,
    dynamic_height: bool,
    relative_right_margin: Option<i32>,
    relative_bottom_margin: Option<i32>,
    dynamic_size_calculator: Option<Box<dyn Fn() -> Dimensioni>>,
}

impl Transform {
    /// Creates a transform from a relative rect; negative dimensions request content-driven sizing.
    pub fn new(relative_rect: Recti, anchors: Anchors) -> Self {
        let dynamic_width = relative_rect.width < 0;
        let dynamic_height = relative_rect.height < 0;
        let mut relative_rect = relative_rect;
        relative_rect.width = relative_rect.width.max(0);
        relative_rect.height = relative_rect.height.max(0);
        Self {
            relative_rect,
            absolute_rect: relative_rect,
            anchors: anchors.validated(),
            minimum_dimensions: dim(-1, -1),
            dynamic_width,
            dynamic_height,
            relative_right_margin: None,
            relative_bottom_margin: None,
            dynamic_size_calculator: None,
        }
    }

    /// Rectangle relative to the container's absolute origin (or to the anchored reference edges).
    pub fn relative_rect(&self) -> Recti { self.relative_rect }

    /// Screen-space rectangle, derived from the relative rect by the last resolution.
    pub fn absolute_rect(&self) -> Recti { self.absolute_rect }

    /// Current anchors.
    pub fn anchors(&self) -> &Anchors { &self.anchors }

    /// Replaces the anchors after validation and invalidates the cached margins.
    pub fn set_anchors(&mut self, anchors: Anchors) {
        self.anchors = anchors.validated();
        self.invalidate_margins();
    }

    /// Minimum size, `(-1, -1)` when unconstrained.
    pub fn minimum_dimensions(&self) -> Dimensioni { self.minimum_dimensions }

    /// Sets the minimum size; does not re-clamp the current size.
    pub fn set_minimum_dimensions(&mut self, dims: Dimensioni) { self.minimum_dimensions = dims; }

    /// Whether the width is computed from content.
    pub fn is_dynamic_width(&self) -> bool { self.dynamic_width }

    /// Whether the height is computed from content.
    pub fn is_dynamic_height(&self) -> bool { self.dynamic_height }

    /// Gap kept between the element's right edge and the right reference edge.
    pub fn relative_right_margin(&self) -> Option<i32> { self.relative_right_margin }

    /// Gap kept between the element's bottom edge and the bottom reference edge.
    pub fn relative_bottom_margin(&self) -> Option<i32> { self.relative_bottom_margin }

    /// Installs the closure measuring the element's natural size.
    pub fn set_dynamic_size_calculator(&mut self, f: Option<Box<dyn Fn() -> Dimensioni>>) { self.dynamic_size_calculator = f; }

    /// Measures the natural size of the content, if a calculator is installed.
    pub fn content_size(&self) -> Option<Dimensioni> { self.dynamic_size_calculator.as_ref().map(|f| f()) }

    /// Forgets both cached margins so the next resolution recomputes them.
    pub fn invalidate_margins(&mut self) {
        self.relative_right_margin = None;
        self.relative_bottom_margin = None;
    }

    /// Distinct elements referenced as anchor targets.
    pub fn get_anchor_targets(&self) -> Vec<ElementId> { self.anchors.targets() }

    pub(crate) fn set_relative_position(&mut self, pos: Vec2i) {
        self.relative_rect.x = pos.x;
        self.relative_rect.y = pos.y;
    }

    pub(crate) fn set_absolute_position(&mut self, pos: Vec2i) {
        self.absolute_rect.x = pos.x;
        self.absolute_rect.y = pos.y;
    }

    /// Component-wise maximum with the minimum dimensions.
    pub fn clamp_to_minimum(&self, dims: Dimensioni) -> Dimensioni {
        dim(dims.width.max(self.minimum_dimensions.width), dims.height.max(self.minimum_dimensions.height))
    }

    /// Applies a size request to both rectangles.
    ///
    /// A negative component switches that axis to dynamic sizing and is replaced by the content
    /// size when a calculator is installed. The size is clamped to the minimum dimensions and, when
    /// `container` is given, to the container's size. Returns `false`, leaving the rects untouched,
    /// when a component is still negative.
    pub fn set_dimensions(&mut self, dims: Dimensioni, container: Option<Dimensioni>) -> bool {
        let mut dims = dims;
        self.dynamic_width = dims.width < 0;
        self.dynamic_height = dims.height < 0;
        if self.dynamic_width || self.dynamic_height {
            match self.content_size() {
                Some(content) => {
                    if self.dynamic_width {
                        dims.width = content.width;
                    }
                    if self.dynamic_height {
                        dims.height = content.height;
                    }
                }
                None => {
                    log::warn!("negative dimensions requested without a content size calculator");
                    return false;
                }
            }
        }

        let mut dims = self.clamp_to_minimum(dims);
        if let Some(container) = container {
            dims.width = dims.width.min(container.width);
            dims.height = dims.height.min(container.height);
        }
        if dims.width < 0 || dims.height < 0 {
            return false;
        }

        self.relative_rect.width = dims.width;
        self.relative_rect.height = dims.height;
        self.absolute_rect.width = dims.width;
        self.absolute_rect.height = dims.height;
        true
    }

    /// Projects the relative rect through the anchors onto `offsets`, writing the absolute position.
    ///
    /// Margins for edges measured from the far reference edge are computed on first use, or every
    /// time when `recalc_margins` is set, and reused otherwise so stretched elements keep their gap.
    /// When `top`/`left` and `bottom`/`right` both claim their own edge, the near edge keeps its
    /// value. A different resulting size is returned as [`Resolved::Resized`] rather than applied.
    pub fn resolve_absolute(&mut self, offsets: &AnchorOffsets, recalc_margins: bool) -> Resolved {
        let rel = self.relative_rect;
        let anchors = self.anchors;

        let (mut new_top, mut new_bottom) = (rel.top() + offsets.top, rel.bottom() + offsets.top);
        let (mut new_left, mut new_right) = (rel.left() + offsets.left, rel.right() + offsets.left);

        if anchors.center || anchors.centery == Some(AnchorRef::SelfEdge) {
            new_top = rel.top() - rel.height / 2 + offsets.centery;
            new_bottom = rel.bottom() - rel.height / 2 + offsets.centery;
        }
        if anchors.center || anchors.centerx == Some(AnchorRef::SelfEdge) {
            new_left = rel.left() - rel.width / 2 + offsets.centerx;
            new_right = rel.right() - rel.width / 2 + offsets.centerx;
        }

        if !anchors.center {
            match anchors.top {
                Some(AnchorRef::SelfEdge) => {
                    new_top = rel.top() + offsets.top;
                    new_bottom = rel.bottom() + offsets.top;
                }
                Some(AnchorRef::OppositeEdge) => {
                    new_top = rel.top() + offsets.bottom;
                    let margin = self.bottom_margin(offsets.bottom - (new_top + rel.height), recalc_margins);
                    new_bottom = offsets.bottom - margin;
                }
                None => (),
            }
            match anchors.bottom {
                Some(AnchorRef::OppositeEdge) => {
                    new_top = rel.top() + offsets.top;
                    new_bottom = rel.bottom() + offsets.top;
                }
                Some(AnchorRef::SelfEdge) => {
                    if anchors.top != Some(AnchorRef::SelfEdge) {
                        new_top = rel.top() + offsets.bottom;
                    }
                    let margin = self.bottom_margin(offsets.bottom - (new_top + rel.height), recalc_margins);
                    new_bottom = offsets.bottom - margin;
                }
                None => (),
            }

            match anchors.left {
                Some(AnchorRef::SelfEdge) => {
                    new_left = rel.left() + offsets.left;
                    new_right = rel.right() + offsets.left;
                }
                Some(AnchorRef::OppositeEdge) => {
                    new_left = rel.left() + offsets.right;
                    let margin = self.right_margin(offsets.right - (new_left + rel.width), recalc_margins);
                    new_right = offsets.right - margin;
                }
                None => (),
            }
            match anchors.right {
                Some(AnchorRef::OppositeEdge) => {
                    new_left = rel.left() + offsets.left;
                    new_right = rel.right() + offsets.left;
                }
                Some(AnchorRef::SelfEdge) => {
                    if anchors.left != Some(AnchorRef::SelfEdge) {
                        new_left = rel.left() + offsets.right;
                    }
                    let margin = self.right_margin(offsets.right - (new_left + rel.width), recalc_margins);
                    new_right = offsets.right - margin;
                }
                None => (),
            }
        }

        let mut new_width = new_right - new_left;
        let mut new_height = new_bottom - new_top;
        if !self.dynamic_width {
            new_width = new_width.max(0);
        }
        if !self.dynamic_height {
            new_height = new_height.max(0);
        }
        let new_size = self.clamp_to_minimum(dim(new_width, new_height));

        self.absolute_rect.x = new_left;
        self.absolute_rect.y = new_top;
        self.finish(new_size)
    }

    /// Solves the relative rect from the current absolute rect, the inverse of [`Self::resolve_absolute`].
    ///
    /// Both cached margins are always recomputed since the absolute rect is the source of truth.
    pub fn resolve_relative(&mut self, offsets: &AnchorOffsets) -> Resolved {
        self.invalidate_margins();
        let abs = self.absolute_rect;
        let anchors = self.anchors;

        let mut new_top = abs.top() - offsets.top;
        let mut new_left = abs.left() - offsets.left;

        if anchors.center || anchors.centery == Some(AnchorRef::SelfEdge) {
            new_top = abs.top() + abs.height / 2 - offsets.centery;
        }
        if anchors.center || anchors.centerx == Some(AnchorRef::SelfEdge) {
            new_left = abs.left() + abs.width / 2 - offsets.centerx;
        }

        if !anchors.center {
            match anchors.top {
                Some(AnchorRef::SelfEdge) => new_top = abs.top() - offsets.top,
                Some(AnchorRef::OppositeEdge) => {
                    new_top = abs.top() - offsets.bottom;
                    self.relative_bottom_margin = Some(offsets.bottom - abs.bottom());
                }
                None => (),
            }
            match anchors.bottom {
                Some(AnchorRef::OppositeEdge) => new_top = abs.top() - offsets.top,
                Some(AnchorRef::SelfEdge) => {
                    if anchors.top != Some(AnchorRef::SelfEdge) {
                        new_top = abs.top() - offsets.bottom;
                    }
                    self.relative_bottom_margin = Some(offsets.bottom - abs.bottom());
                }
                None => (),
            }

            match anchors.left {
                Some(AnchorRef::SelfEdge) => new_left = abs.left() - offsets.left,
                Some(AnchorRef::OppositeEdge) => {
                    new_left = abs.left() - offsets.right;
                    self.relative_right_margin = Some(offsets.right - abs.right());
                }
                None => (),
            }
            match anchors.right {
                Some(AnchorRef::OppositeEdge) => new_left = abs.left() - offsets.left,
                Some(AnchorRef::SelfEdge) => {
                    if anchors.left != Some(AnchorRef::SelfEdge) {
                        new_left = abs.left() - offsets.right;
                    }
                    self.relative_right_margin = Some(offsets.right - abs.right());
                }
                None => (),
            }
        }

        self.relative_rect.x = new_left;
        self.relative_rect.y = new_top;
        let new_size = self.clamp_to_minimum(dim(abs.width, abs.height));
        self.finish(new_size)
    }

    fn finish(&mut self, new_size: Dimensioni) -> Resolved {
        if new_size.width != self.relative_rect.width || new_size.height != self.relative_rect.height {
            return Resolved::Resized(new_size);
        }
        self.absolute_rect.width = new_size.width;
        self.absolute_rect.height = new_size.height;
        Resolved::Positioned
    }

    fn bottom_margin(&mut self, computed: i32, recalc: bool) -> i32 {
        match self.relative_bottom_margin {
            Some(margin) if !recalc => margin,
            _ => {
                self.relative_bottom_margin = Some(computed);
                computed
            }
        }
    }

    fn right_margin(&mut self, computed: i32, recalc: bool) -> i32 {
        match self.relative_right_margin {
            Some(margin) if !recalc => margin,
            _ => {
                self.relative_right_margin = Some(computed);
                computed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rect, rect_tuple};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // applies a resize the way the context does: set the size, then resolve once with fresh margins
    fn settle(t: &mut Transform, offsets: &AnchorOffsets, recalc: bool) {
        if let Resolved::Resized(dims) = t.resolve_absolute(offsets, recalc) {
            assert!(t.set_dimensions(dims, None));
            assert!(matches!(t.resolve_absolute(offsets, true), Resolved::Positioned));
        }
    }

    #[test]
    fn top_left_follows_container_origin() {
        let mut t = Transform::new(rect(50, 50, 50, 50), Anchors::default());
        settle(&mut t, &AnchorOffsets::from_container(rect(100, 100, 200, 200)), false);
        assert_eq!(rect_tuple(t.absolute_rect()), (150, 150, 50, 50));
        settle(&mut t, &AnchorOffsets::from_container(rect(0, 0, 200, 200)), false);
        assert_eq!(rect_tuple(t.absolute_rect()), (50, 50, 50, 50));
    }

    #[test]
    fn resolve_is_idempotent() {
        let container = AnchorOffsets::from_container(rect(10, 20, 300, 200));
        for anchors in [Anchors::default(), Anchors::fill(), Anchors::centered(), Anchors::new().right(AnchorRef::SelfEdge).bottom(AnchorRef::SelfEdge)] {
            let mut t = Transform::new(rect(-40, -30, 35, 25), anchors);
            settle(&mut t, &container, true);
            let first = rect_tuple(t.absolute_rect());
            settle(&mut t, &container, false);
            assert_eq!(first, rect_tuple(t.absolute_rect()));
        }
    }

    #[test]
    fn relative_round_trip() {
        let offsets = AnchorOffsets::from_container(rect(37, 91, 400, 300));
        let mut t = Transform::new(rect(12, -8, 60, 20), Anchors::default());
        settle(&mut t, &offsets, true);
        assert!(matches!(t.resolve_relative(&offsets), Resolved::Positioned));
        assert_eq!(rect_tuple(t.relative_rect()), (12, -8, 60, 20));
    }

    #[test]
    fn stretch_keeps_right_margin() {
        let mut t = Transform::new(rect(10, 10, 180, 30), Anchors::new().left(AnchorRef::SelfEdge).right(AnchorRef::SelfEdge).top(AnchorRef::SelfEdge));
        settle(&mut t, &AnchorOffsets::from_container(rect(100, 100, 200, 200)), false);
        assert_eq!(t.relative_right_margin(), Some(10));
        assert_eq!(rect_tuple(t.absolute_rect()), (110, 110, 180, 30));

        settle(&mut t, &AnchorOffsets::from_container(rect(100, 100, 300, 200)), false);
        assert_eq!(t.relative_rect().width, 280);
        assert_eq!(t.relative_right_margin(), Some(10));
        assert_eq!(rect_tuple(t.absolute_rect()), (110, 110, 280, 30));
    }

    #[test]
    fn stretch_width_tracks_container_delta() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let width = rng.random_range(60..500);
            let delta = rng.random_range(-40..200);
            let mut t = Transform::new(rect(5, 0, width - 20, 10), Anchors::fill());
            settle(&mut t, &AnchorOffsets::from_container(rect(0, 0, width, 100)), false);
            let margin = t.relative_right_margin();
            let before = t.relative_rect().width;
            settle(&mut t, &AnchorOffsets::from_container(rect(0, 0, width + delta, 100)), false);
            assert_eq!(t.relative_rect().width, before + delta);
            assert_eq!(t.relative_right_margin(), margin);
        }
    }

    #[test]
    fn top_anchor_wins_over_bottom_in_stretch() {
        let mut t = Transform::new(rect(0, 15, 20, 50), Anchors::new().left(AnchorRef::SelfEdge).top(AnchorRef::SelfEdge).bottom(AnchorRef::SelfEdge));
        settle(&mut t, &AnchorOffsets::from_container(rect(0, 100, 100, 100)), false);
        assert_eq!(t.absolute_rect().y, 115);
        assert_eq!(t.relative_bottom_margin(), Some(35));
        settle(&mut t, &AnchorOffsets::from_container(rect(0, 100, 100, 150)), false);
        assert_eq!(rect_tuple(t.absolute_rect()), (0, 115, 20, 100));
    }

    #[test]
    fn bottom_right_anchor_measures_from_far_edges() {
        let anchors = Anchors::new().right(AnchorRef::SelfEdge).bottom(AnchorRef::SelfEdge);
        let mut t = Transform::new(rect(-60, -40, 50, 30), anchors);
        settle(&mut t, &AnchorOffsets::from_container(rect(0, 0, 200, 100)), false);
        assert_eq!(rect_tuple(t.absolute_rect()), (140, 60, 50, 30));
        assert_eq!(t.relative_right_margin(), Some(10));
        settle(&mut t, &AnchorOffsets::from_container(rect(0, 0, 400, 300)), false);
        assert_eq!(rect_tuple(t.absolute_rect()), (340, 260, 50, 30));
    }

    #[test]
    fn opposite_edge_anchor_keeps_size() {
        let anchors = Anchors::new().left(AnchorRef::OppositeEdge).top(AnchorRef::OppositeEdge);
        let mut t = Transform::new(rect(-30, -20, 25, 15), anchors);
        settle(&mut t, &AnchorOffsets::from_container(rect(10, 10, 100, 100)), false);
        assert_eq!(rect_tuple(t.absolute_rect()), (80, 90, 25, 15));
        settle(&mut t, &AnchorOffsets::from_container(rect(10, 10, 200, 50)), false);
        assert_eq!(rect_tuple(t.absolute_rect()), (180, 40, 25, 15));
    }

    #[test]
    fn centered_element() {
        let mut t = Transform::new(rect(0, 0, 40, 20), Anchors::centered());
        settle(&mut t, &AnchorOffsets::from_container(rect(0, 0, 200, 100)), false);
        assert_eq!(rect_tuple(t.absolute_rect()), (80, 40, 40, 20));
        assert!(matches!(t.resolve_relative(&AnchorOffsets::from_container(rect(0, 0, 200, 100))), Resolved::Positioned));
        assert_eq!(rect_tuple(t.relative_rect()), (0, 0, 40, 20));
    }

    #[test]
    fn collapsed_stretch_clamps_to_zero() {
        let mut t = Transform::new(rect(10, 0, 80, 10), Anchors::fill());
        settle(&mut t, &AnchorOffsets::from_container(rect(0, 0, 100, 10)), false);
        settle(&mut t, &AnchorOffsets::from_container(rect(0, 0, 5, 10)), false);
        assert_eq!(t.relative_rect().width, 0);
    }

    #[test]
    fn minimum_dimensions_clamp() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let (w, h) = (rng.random_range(0..300), rng.random_range(0..300));
            let (min_w, min_h) = (rng.random_range(-1..300), rng.random_range(-1..300));
            let mut t = Transform::new(rect(0, 0, 10, 10), Anchors::default());
            t.set_minimum_dimensions(dim(min_w, min_h));
            assert!(t.set_dimensions(dim(w, h), None));
            assert_eq!((t.relative_rect().width, t.relative_rect().height), (w.max(min_w), h.max(min_h)));
        }
    }

    #[test]
    fn container_clamp_caps_size() {
        let mut t = Transform::new(rect(0, 0, 10, 10), Anchors::default());
        assert!(t.set_dimensions(dim(500, 20), Some(dim(200, 100))));
        assert_eq!((t.relative_rect().width, t.relative_rect().height), (200, 20));
    }

    #[test]
    fn negative_dimensions_use_content_size() {
        let mut t = Transform::new(rect(0, 0, -1, 12), Anchors::default());
        assert!(t.is_dynamic_width());
        assert!(!t.set_dimensions(dim(-1, 12), None));
        t.set_dynamic_size_calculator(Some(Box::new(|| dim(64, 18))));
        assert!(t.set_dimensions(dim(-1, 12), None));
        assert!(t.is_dynamic_width());
        assert!(!t.is_dynamic_height());
        assert_eq!((t.relative_rect().width, t.relative_rect().height), (64, 12));
        assert!(t.set_dimensions(dim(30, 12), None));
        assert!(!t.is_dynamic_width());
    }

    #[test]
    fn resize_request_is_reported_not_applied() {
        let mut t = Transform::new(rect(0, 0, 50, 50), Anchors::fill());
        settle(&mut t, &AnchorOffsets::from_container(rect(0, 0, 100, 100)), false);
        match t.resolve_absolute(&AnchorOffsets::from_container(rect(0, 0, 120, 100)), false) {
            Resolved::Resized(dims) => assert_eq!((dims.width, dims.height), (70, 50)),
            Resolved::Positioned => panic!("expected a resize"),
        }
        assert_eq!(t.relative_rect().width, 50);
    }
}
