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
#![deny(missing_docs)]
//! `anchorui` is the retained-mode layout core of a widget toolkit.
//!
//! Every element owns a [`Transform`] that projects a rectangle expressed relative to its container
//! into screen space through a set of [`Anchors`]. Anchors bind an element edge to an edge of its
//! container, or to an edge of another element (an anchor target). Containers keep their children
//! laid out when they move or resize, and a [`WindowStack`] hands every top-level window a contiguous
//! range of paint layers so the draw order always matches the stacking order.
//!
//! Drawing, fonts and input decoding stay outside the crate: widgets record [`Command`]s in local
//! coordinates when rebuilt and the embedding renderer composites them in [`Context::draw_list`] order.

mod anchors;
mod auto_resizing_container;
mod container;
mod context;
mod element;
mod error;
mod scrollbar;
mod scrolling_container;
mod transform;
mod widgets;
mod window;

pub use anchors::*;
pub use auto_resizing_container::*;
pub use context::*;
pub use element::*;
pub use error::*;
pub use rs_math3d::{Dimensioni, Recti, Vec2i};
pub use scrolling_container::*;
pub use transform::*;
pub use widgets::*;
pub use window::*;

/// Convenience constructor for [`Vec2i`].
pub fn vec2(x: i32, y: i32) -> Vec2i { Vec2i { x, y } }

/// Convenience constructor for [`Recti`].
pub fn rect(x: i32, y: i32, w: i32, h: i32) -> Recti { Recti { x, y, width: w, height: h } }

/// Convenience constructor for [`Dimensioni`].
pub fn dim(w: i32, h: i32) -> Dimensioni { Dimensioni::new(w, h) }

/// Convenience constructor for [`Color`].
pub fn color(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }

/// Edge accessors on integer rectangles.
pub trait RectEdges {
    /// Left edge (`x`).
    fn left(&self) -> i32;
    /// Right edge (`x + width`).
    fn right(&self) -> i32;
    /// Top edge (`y`).
    fn top(&self) -> i32;
    /// Bottom edge (`y + height`).
    fn bottom(&self) -> i32;
    /// Horizontal center, rounded toward the left edge.
    fn centerx(&self) -> i32;
    /// Vertical center, rounded toward the top edge.
    fn centery(&self) -> i32;
    /// Returns the rectangle's size.
    fn dims(&self) -> Dimensioni;
}

impl RectEdges for Recti {
    fn left(&self) -> i32 { self.x }
    fn right(&self) -> i32 { self.x + self.width }
    fn top(&self) -> i32 { self.y }
    fn bottom(&self) -> i32 { self.y + self.height }
    fn centerx(&self) -> i32 { self.x + self.width / 2 }
    fn centery(&self) -> i32 { self.y + self.height / 2 }
    fn dims(&self) -> Dimensioni { dim(self.width, self.height) }
}

pub(crate) fn rect_contains(r: Recti, p: Vec2i) -> bool { p.x >= r.left() && p.x < r.right() && p.y >= r.top() && p.y < r.bottom() }

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
/// Simple RGBA color stored with 8-bit components.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[repr(u32)]
/// Identifiers for each of the built-in style colors.
pub enum ControlColor {
    /// Number of color entries in [`Style::colors`].
    Max = 9,
    /// Thumb of scrollbars.
    ScrollThumb = 8,
    /// Base frame of scrollbars.
    ScrollBase = 7,
    /// Panel background color.
    PanelBG = 6,
    /// Window title text color.
    TitleText = 5,
    /// Window title background color.
    TitleBG = 4,
    /// Window background color.
    WindowBG = 3,
    /// Outline/border color.
    Border = 2,
    /// Label background, transparent by default.
    LabelBG = 1,
    /// Default text color.
    Text = 0,
}

#[derive(Copy, Clone, Debug)]
/// Collection of visual and layout constants shared by every element of a [`Context`].
pub struct Style {
    /// Inner padding applied around label text.
    pub padding: i32,
    /// Height of window title bars.
    pub title_height: i32,
    /// Thickness of scrollbars in scrolling containers.
    pub scrollbar_size: i32,
    /// Minimum length of scrollbar thumbs.
    pub thumb_size: i32,
    /// Palette of [`ControlColor`] entries.
    pub colors: [Color; ControlColor::Max as usize],
}

impl Style {
    /// Returns the palette entry for `id`.
    pub fn color(&self, id: ControlColor) -> Color { self.colors[id as usize] }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            padding: 5,
            title_height: 24,
            scrollbar_size: 12,
            thumb_size: 8,
            colors: [
                Color { r: 230, g: 230, b: 230, a: 255 },
                Color { r: 0, g: 0, b: 0, a: 0 },
                Color { r: 25, g: 25, b: 25, a: 255 },
                Color { r: 50, g: 50, b: 50, a: 255 },
                Color { r: 25, g: 25, b: 25, a: 255 },
                Color { r: 240, g: 240, b: 240, a: 255 },
                Color { r: 43, g: 43, b: 43, a: 255 },
                Color { r: 43, g: 43, b: 43, a: 255 },
                Color { r: 30, g: 30, b: 30, a: 255 },
            ],
        }
    }
}

pub(crate) fn rect_tuple(r: Recti) -> (i32, i32, i32, i32) { (r.x, r.y, r.width, r.height) }

// overlap of two rects, empty rects keep the position of the overlap's top-left corner
pub(crate) fn intersect_rect(a: Recti, b: Recti) -> Recti {
    let x = a.left().max(b.left());
    let y = a.top().max(b.top());
    let w = (a.right().min(b.right()) - x).max(0);
    let h = (a.bottom().min(b.bottom()) - y).max(0);
    rect(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = rect(10, 20, 30, 41);
        assert_eq!((r.left(), r.right(), r.top(), r.bottom()), (10, 40, 20, 61));
        assert_eq!((r.centerx(), r.centery()), (25, 40));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = rect(0, 0, 10, 10);
        assert!(rect_contains(r, vec2(0, 0)));
        assert!(rect_contains(r, vec2(9, 9)));
        assert!(!rect_contains(r, vec2(10, 5)));
    }
}
