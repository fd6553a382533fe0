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
use crate::ElementId;

/// Describes what an anchored element edge is measured from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnchorRef {
    /// The same edge of the container: `left -> left`, `bottom -> bottom`.
    SelfEdge,
    /// The opposite edge of the container: `left -> right`, `top -> bottom`.
    OppositeEdge,
}

/// Container edges an anchor target can stand in for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Left edge, replaced by the target's right edge.
    Left,
    /// Right edge, replaced by the target's left edge.
    Right,
    /// Top edge, replaced by the target's bottom edge.
    Top,
    /// Bottom edge, replaced by the target's top edge.
    Bottom,
}

/// Per-edge anchoring rules of an element (the anchor spec).
///
/// Horizontal slots are `left`, `right` and `centerx`, vertical ones `top`, `bottom` and `centery`.
/// Only eight combinations per axis are meaningful:
///
/// | left | right | centerx | meaning |
/// |---|---|---|---|
/// | self | opposite | - | fixed size, measured from the container left |
/// | opposite | self | - | fixed size, measured from the container right |
/// | self | self | - | stretch between both container edges |
/// | self | - | - | fixed size, from the left (default) |
/// | - | self | - | fixed size, from the right |
/// | opposite | - | - | fixed size, from the right |
/// | - | opposite | - | fixed size, from the left |
/// | - | - | self | centered on the container center |
///
/// `center` centers on both axes and overrides every other slot. Anchor targets replace the
/// container edge used as reference: an element with a `left_target` measures its left offset from
/// the target's right edge, and so on for the other sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Anchors {
    /// Left slot.
    pub left: Option<AnchorRef>,
    /// Right slot.
    pub right: Option<AnchorRef>,
    /// Horizontal center slot, only [`AnchorRef::SelfEdge`] is meaningful.
    pub centerx: Option<AnchorRef>,
    /// Top slot.
    pub top: Option<AnchorRef>,
    /// Bottom slot.
    pub bottom: Option<AnchorRef>,
    /// Vertical center slot, only [`AnchorRef::SelfEdge`] is meaningful.
    pub centery: Option<AnchorRef>,
    /// Centers on both axes, overriding every other slot.
    pub center: bool,
    /// Element whose right edge replaces the container's left edge.
    pub left_target: Option<ElementId>,
    /// Element whose left edge replaces the container's right edge.
    pub right_target: Option<ElementId>,
    /// Element whose bottom edge replaces the container's top edge.
    pub top_target: Option<ElementId>,
    /// Element whose top edge replaces the container's bottom edge.
    pub bottom_target: Option<ElementId>,
}

impl Default for Anchors {
    fn default() -> Self { Self::top_left() }
}

impl Anchors {
    /// Creates an anchor set with every slot unset.
    pub fn new() -> Self {
        Self {
            left: None,
            right: None,
            centerx: None,
            top: None,
            bottom: None,
            centery: None,
            center: false,
            left_target: None,
            right_target: None,
            top_target: None,
            bottom_target: None,
        }
    }

    /// `left -> left`, `top -> top`: the default placement.
    pub fn top_left() -> Self { Self::new().left(AnchorRef::SelfEdge).top(AnchorRef::SelfEdge) }

    /// Binds all four edges to the matching container edges so the element resizes with it.
    pub fn fill() -> Self {
        Self::new()
            .left(AnchorRef::SelfEdge)
            .right(AnchorRef::SelfEdge)
            .top(AnchorRef::SelfEdge)
            .bottom(AnchorRef::SelfEdge)
    }

    /// `center -> center`.
    pub fn centered() -> Self { Self { center: true, ..Self::new() } }

    /// Sets the left slot.
    pub fn left(mut self, anchor: AnchorRef) -> Self {
        self.left = Some(anchor);
        self
    }

    /// Sets the right slot.
    pub fn right(mut self, anchor: AnchorRef) -> Self {
        self.right = Some(anchor);
        self
    }

    /// Sets the horizontal center slot.
    pub fn centerx(mut self) -> Self {
        self.centerx = Some(AnchorRef::SelfEdge);
        self
    }

    /// Sets the top slot.
    pub fn top(mut self, anchor: AnchorRef) -> Self {
        self.top = Some(anchor);
        self
    }

    /// Sets the bottom slot.
    pub fn bottom(mut self, anchor: AnchorRef) -> Self {
        self.bottom = Some(anchor);
        self
    }

    /// Sets the vertical center slot.
    pub fn centery(mut self) -> Self {
        self.centery = Some(AnchorRef::SelfEdge);
        self
    }

    /// Makes `target` stand in for the container edge `edge`.
    pub fn target(mut self, edge: Edge, target: ElementId) -> Self {
        *self.target_slot_mut(edge) = Some(target);
        self
    }

    /// Returns the anchor target standing in for `edge`, if any.
    pub fn target_for(&self, edge: Edge) -> Option<ElementId> {
        match edge {
            Edge::Left => self.left_target,
            Edge::Right => self.right_target,
            Edge::Top => self.top_target,
            Edge::Bottom => self.bottom_target,
        }
    }

    pub(crate) fn target_slot_mut(&mut self, edge: Edge) -> &mut Option<ElementId> {
        match edge {
            Edge::Left => &mut self.left_target,
            Edge::Right => &mut self.right_target,
            Edge::Top => &mut self.top_target,
            Edge::Bottom => &mut self.bottom_target,
        }
    }

    /// Distinct anchor targets in left, right, top, bottom order.
    pub fn targets(&self) -> Vec<ElementId> {
        let mut res: Vec<ElementId> = Vec::with_capacity(4);
        for target in [self.left_target, self.right_target, self.top_target, self.bottom_target].into_iter().flatten() {
            if !res.contains(&target) {
                res.push(target);
            }
        }
        res
    }

    /// Returns `true` when `left`, `right` and `centerx` form one of the accepted combinations.
    pub fn is_horizontal_valid(&self) -> bool { Self::axis_is_valid(self.left, self.right, self.centerx) }

    /// Returns `true` when `top`, `bottom` and `centery` form one of the accepted combinations.
    pub fn is_vertical_valid(&self) -> bool { Self::axis_is_valid(self.top, self.bottom, self.centery) }

    fn axis_is_valid(near: Option<AnchorRef>, far: Option<AnchorRef>, center: Option<AnchorRef>) -> bool {
        use AnchorRef::*;
        matches!(
            (near, far, center),
            (Some(SelfEdge), Some(OppositeEdge), None)
                | (Some(OppositeEdge), Some(SelfEdge), None)
                | (Some(SelfEdge), Some(SelfEdge), None)
                | (Some(SelfEdge), None, None)
                | (None, Some(SelfEdge), None)
                | (Some(OppositeEdge), None, None)
                | (None, Some(OppositeEdge), None)
                | (None, None, Some(SelfEdge))
        )
    }

    /// `true` when both horizontal edges follow their own container edge.
    pub fn is_horizontal_stretch(&self) -> bool {
        !self.center && self.left == Some(AnchorRef::SelfEdge) && self.right == Some(AnchorRef::SelfEdge)
    }

    /// `true` when both vertical edges follow their own container edge.
    pub fn is_vertical_stretch(&self) -> bool {
        !self.center && self.top == Some(AnchorRef::SelfEdge) && self.bottom == Some(AnchorRef::SelfEdge)
    }

    /// Replaces invalid or missing axis configurations with `left -> left` / `top -> top`.
    ///
    /// An axis with no slot set takes the default silently, an invalid combination is logged.
    pub fn validated(mut self) -> Self {
        if self.center {
            let slots = [self.left, self.right, self.centerx, self.top, self.bottom, self.centery];
            if slots.iter().any(Option::is_some) {
                log::warn!("center anchor overrides the edge anchors set alongside it");
                self.left = None;
                self.right = None;
                self.centerx = None;
                self.top = None;
                self.bottom = None;
                self.centery = None;
            }
            return self;
        }
        if self.left.is_none() && self.right.is_none() && self.centerx.is_none() {
            self.left = Some(AnchorRef::SelfEdge);
        } else if !self.is_horizontal_valid() {
            log::warn!(
                "invalid horizontal anchors (left: {:?}, right: {:?}, centerx: {:?}), falling back to left -> left",
                self.left,
                self.right,
                self.centerx
            );
            self.left = Some(AnchorRef::SelfEdge);
            self.right = None;
            self.centerx = None;
        }
        if self.top.is_none() && self.bottom.is_none() && self.centery.is_none() {
            self.top = Some(AnchorRef::SelfEdge);
        } else if !self.is_vertical_valid() {
            log::warn!(
                "invalid vertical anchors (top: {:?}, bottom: {:?}, centery: {:?}), falling back to top -> top",
                self.top,
                self.bottom,
                self.centery
            );
            self.top = Some(AnchorRef::SelfEdge);
            self.bottom = None;
            self.centery = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn empty_anchors_default_to_top_left() {
        let a = Anchors::new().validated();
        assert_eq!(a, Anchors::top_left());
    }

    #[test]
    fn invalid_horizontal_pair_degrades() {
        let a = Anchors::new()
            .left(AnchorRef::OppositeEdge)
            .right(AnchorRef::OppositeEdge)
            .bottom(AnchorRef::SelfEdge)
            .validated();
        assert_eq!(a.left, Some(AnchorRef::SelfEdge));
        assert_eq!(a.right, None);
        assert_eq!(a.bottom, Some(AnchorRef::SelfEdge));
        assert_eq!(a.top, None);
    }

    #[test]
    fn center_mixed_with_edges_is_invalid() {
        let a = Anchors::new().left(AnchorRef::SelfEdge).centerx();
        assert!(!a.is_horizontal_valid());
        let a = a.validated();
        assert_eq!(a.centerx, None);
    }

    #[test]
    fn center_overrides_slots() {
        let a = Anchors { left: Some(AnchorRef::OppositeEdge), right: Some(AnchorRef::OppositeEdge), ..Anchors::centered() }.validated();
        assert!(a.center);
        assert_eq!(a.left, None);
        assert_eq!(a.right, None);
        assert!(!a.is_horizontal_stretch());
    }

    #[test]
    fn all_eight_axis_combinations_accepted() {
        use AnchorRef::*;
        let combos = [
            (Some(SelfEdge), Some(OppositeEdge), None),
            (Some(OppositeEdge), Some(SelfEdge), None),
            (Some(SelfEdge), Some(SelfEdge), None),
            (Some(SelfEdge), None, None),
            (None, Some(SelfEdge), None),
            (Some(OppositeEdge), None, None),
            (None, Some(OppositeEdge), None),
            (None, None, Some(SelfEdge)),
        ];
        for (left, right, centerx) in combos {
            let a = Anchors { left, right, centerx, ..Anchors::top_left() };
            assert!(a.is_horizontal_valid());
            assert_eq!(a.validated().left, left);
        }
    }

    #[test]
    fn targets_are_distinct() {
        let mut keys: SlotMap<ElementId, ()> = SlotMap::with_key();
        let a = keys.insert(());
        let b = keys.insert(());
        let anchors = Anchors::fill().target(Edge::Left, a).target(Edge::Top, a).target(Edge::Bottom, b);
        assert_eq!(anchors.targets(), vec![a, b]);
        assert_eq!(anchors.target_for(Edge::Top), Some(a));
        assert_eq!(anchors.target_for(Edge::Right), None);
    }
}
