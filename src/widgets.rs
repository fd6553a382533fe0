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
use crate::element::ElementKind;
use crate::{dim, rect, Command, Context, ControlColor, Dimensioni, ElementDesc, ElementId, LayoutError, Style, Vec2i, WidgetBehavior};
use std::cell::RefCell;
use std::rc::Rc;

/// Text measurement used by content-sized widgets.
pub trait Font {
    /// Size of `text` once rendered, lines separated by `\n`.
    fn get_text_size(&self, text: &str) -> Dimensioni;
}

/// Fixed-advance metrics, enough to lay text out without a rasterizer.
#[derive(Copy, Clone, Debug)]
pub struct MonospaceFont {
    /// Horizontal advance of every glyph.
    pub advance: i32,
    /// Height of one line.
    pub line_height: i32,
}

impl Font for MonospaceFont {
    fn get_text_size(&self, text: &str) -> Dimensioni {
        let widest = text.split('\n').map(|line| line.chars().count() as i32).max().unwrap_or(0);
        let lines = text.split('\n').count().max(1) as i32;
        dim(widest * self.advance, lines * self.line_height)
    }
}

struct PanelFrame;

impl WidgetBehavior for PanelFrame {
    fn rebuild(&mut self, size: Dimensioni, style: &Style, image: &mut Vec<Command>) {
        let frame = rect(0, 0, size.width, size.height);
        image.push(Command::Rect { rect: frame, color: style.color(ControlColor::PanelBG) });
        image.push(Command::Box { rect: frame, color: style.color(ControlColor::Border) });
    }
}

struct LabelText {
    text: Rc<RefCell<String>>,
}

impl WidgetBehavior for LabelText {
    fn rebuild(&mut self, size: Dimensioni, style: &Style, image: &mut Vec<Command>) {
        let background = style.color(ControlColor::LabelBG);
        if background.a != 0 {
            image.push(Command::Rect { rect: rect(0, 0, size.width, size.height), color: background });
        }
        image.push(Command::Text {
            pos: Vec2i { x: style.padding, y: style.padding },
            color: style.color(ControlColor::Text),
            text: self.text.borrow().clone(),
        });
    }
}

impl Context {
    /// Creates a container drawn with a background and a border.
    pub fn create_panel(&mut self, desc: ElementDesc) -> Result<ElementId, LayoutError> {
        self.create(desc.behavior(Box::new(PanelFrame)), ElementKind::Container(ContainerState::new(ContainerRole::Plain)))
    }
}

/// Text element. Negative dimensions in its rect make it follow the text size plus padding.
pub struct Label {
    id: ElementId,
    text: Rc<RefCell<String>>,
}

impl Label {
    /// Creates the label element.
    pub fn create(ctx: &mut Context, desc: ElementDesc, text: &str, font: Rc<dyn Font>) -> Result<Self, LayoutError> {
        let text = Rc::new(RefCell::new(text.to_string()));
        let padding = ctx.style().padding;
        let measured = text.clone();
        let desc = desc.behavior(Box::new(LabelText { text: text.clone() })).dynamic_size(move || {
            let size = font.get_text_size(&measured.borrow());
            dim(size.width + 2 * padding, size.height + 2 * padding)
        });
        let id = ctx.create_element(desc)?;
        Ok(Self { id, text })
    }

    /// Element handle.
    pub fn id(&self) -> ElementId { self.id }

    /// Current text.
    pub fn text(&self) -> String { self.text.borrow().clone() }

    /// Replaces the text, resizing dynamic axes and rebuilding the image.
    pub fn set_text(&self, ctx: &mut Context, text: &str) -> Result<(), LayoutError> {
        *self.text.borrow_mut() = text.to_string();
        let transform = ctx.element(self.id)?.transform();
        let rel = transform.relative_rect();
        let dims = dim(
            if transform.is_dynamic_width() { -1 } else { rel.width },
            if transform.is_dynamic_height() { -1 } else { rel.height },
        );
        ctx.set_dimensions(self.id, dims, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rect_tuple, vec2, AnchorRef, Anchors, Edge};

    fn font() -> Rc<dyn Font> { Rc::new(MonospaceFont { advance: 8, line_height: 12 }) }

    fn text_of(ctx: &Context, id: ElementId) -> Option<String> {
        ctx.element(id).unwrap().image().iter().find_map(|c| match c {
            Command::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
    }

    #[test]
    fn monospace_measures_lines() {
        let f = MonospaceFont { advance: 8, line_height: 12 };
        assert_eq!((f.get_text_size("abc").width, f.get_text_size("abc").height), (24, 12));
        assert_eq!((f.get_text_size("a\nabcd").width, f.get_text_size("a\nabcd").height), (32, 24));
        assert_eq!(f.get_text_size("").height, 12);
    }

    #[test]
    fn dynamic_label_follows_text() {
        let mut ctx = Context::new(dim(800, 600));
        let label = Label::create(&mut ctx, ElementDesc::new(rect(10, 10, -1, -1)), "hello", font()).unwrap();
        assert_eq!(rect_tuple(ctx.get_abs_rect(label.id()).unwrap()), (10, 10, 50, 22));
        label.set_text(&mut ctx, "hello world").unwrap();
        assert_eq!(rect_tuple(ctx.get_abs_rect(label.id()).unwrap()), (10, 10, 98, 22));
        assert_eq!(text_of(&ctx, label.id()).as_deref(), Some("hello world"));
        assert_eq!(label.text(), "hello world");
    }

    #[test]
    fn fixed_label_keeps_its_size() {
        let mut ctx = Context::new(dim(800, 600));
        let label = Label::create(&mut ctx, ElementDesc::new(rect(10, 10, 200, -1)), "hi", font()).unwrap();
        label.set_text(&mut ctx, "a much longer text").unwrap();
        assert_eq!(rect_tuple(ctx.get_abs_rect(label.id()).unwrap()), (10, 10, 200, 22));
    }

    #[test]
    fn growing_label_pushes_anchored_neighbour() {
        let mut ctx = Context::new(dim(800, 600));
        let label = Label::create(&mut ctx, ElementDesc::new(rect(10, 10, -1, -1)), "ab", font()).unwrap();
        let next = ctx
            .create_element(ElementDesc::new(rect(4, 10, 30, 22)).anchors(Anchors::top_left().target(Edge::Left, label.id())))
            .unwrap();
        assert_eq!(ctx.get_abs_rect(next).unwrap().x, 10 + 26 + 4);
        label.set_text(&mut ctx, "abcd").unwrap();
        assert_eq!(ctx.get_abs_rect(next).unwrap().x, 10 + 42 + 4);
    }

    #[test]
    fn panel_hosts_children() {
        let mut ctx = Context::new(dim(800, 600));
        let panel = ctx.create_panel(ElementDesc::new(rect(100, 100, 200, 100))).unwrap();
        assert!(ctx.element(panel).unwrap().is_container());
        assert_eq!(ctx.element(panel).unwrap().image().len(), 2);
        let anchors = Anchors::new().right(AnchorRef::SelfEdge).bottom(AnchorRef::SelfEdge);
        let ok = ctx.create_element(ElementDesc::new(rect(-60, -30, 50, 20)).anchors(anchors).container(panel)).unwrap();
        assert_eq!(rect_tuple(ctx.get_abs_rect(ok).unwrap()), (240, 170, 50, 20));
        ctx.set_position(panel, vec2(0, 0)).unwrap();
        assert_eq!(rect_tuple(ctx.get_abs_rect(ok).unwrap()), (140, 70, 50, 20));
    }
}
