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
use crate::container::ContainerState;
use crate::{Anchors, Color, Dimensioni, Recti, Style, Transform, Vec2i};
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Generation-checked handle to an element stored in a [`Context`](crate::Context).
    ///
    /// A handle to a killed element never aliases a newer one; lookups through it simply fail.
    pub struct ElementId;
}

/// Draw commands recorded by a widget when it is rebuilt, in element-local coordinates.
#[derive(Clone)]
pub enum Command {
    /// Restricts the following commands to a screen rectangle. Only emitted by
    /// [`Context::render_commands`](crate::Context::render_commands).
    Clip {
        /// Visible area.
        rect: Recti,
    },
    /// Draws a solid rectangle.
    Rect {
        /// Target rectangle.
        rect: Recti,
        /// Fill color.
        color: Color,
    },
    /// Draws a 1-pixel outline.
    Box {
        /// Outlined rectangle.
        rect: Recti,
        /// Outline color.
        color: Color,
    },
    /// Draws text.
    Text {
        /// Top-left text position.
        pos: Vec2i,
        /// Text color.
        color: Color,
        /// UTF-8 string to render.
        text: String,
    },
}

impl Command {
    /// Returns the command moved by `offset`.
    pub fn translated(&self, offset: Vec2i) -> Command {
        let shift = |r: Recti| Recti { x: r.x + offset.x, y: r.y + offset.y, width: r.width, height: r.height };
        match self {
            Command::Clip { rect } => Command::Clip { rect: shift(*rect) },
            Command::Rect { rect, color } => Command::Rect { rect: shift(*rect), color: *color },
            Command::Box { rect, color } => Command::Box { rect: shift(*rect), color: *color },
            Command::Text { pos, color, text } => Command::Text {
                pos: Vec2i { x: pos.x + offset.x, y: pos.y + offset.y },
                color: *color,
                text: text.clone(),
            },
        }
    }
}

/// Discrete input events forwarded to widgets.
#[derive(Copy, Clone, Debug)]
pub enum UiEvent {
    /// A mouse button went down at the given screen position.
    MouseDown(Vec2i),
    /// A mouse button was released at the given screen position.
    MouseUp(Vec2i),
    /// The wheel moved while the pointer was at `pos`.
    MouseWheel {
        /// Pointer position.
        pos: Vec2i,
        /// Wheel delta, positive `y` scrolls down.
        delta: Vec2i,
    },
}

impl UiEvent {
    /// Pointer position carried by the event.
    pub fn pos(&self) -> Vec2i {
        match self {
            UiEvent::MouseDown(pos) | UiEvent::MouseUp(pos) => *pos,
            UiEvent::MouseWheel { pos, .. } => *pos,
        }
    }
}

/// Per-widget capabilities plugged into an element.
///
/// Layout is owned by the element's [`Transform`]; a behavior only turns the final size into draw
/// commands and reacts to ticks and input.
pub trait WidgetBehavior {
    /// Regenerates the element image for `size`. Called after every size change and style change.
    fn rebuild(&mut self, size: Dimensioni, style: &Style, image: &mut Vec<Command>);

    /// Advances time-based state.
    fn update(&mut self, _time_delta: f32) {}

    /// Handles an event over the element's absolute `rect`; returns `true` when consumed.
    fn process_event(&mut self, _event: &UiEvent, _rect: Recti) -> bool { false }
}

/// Describes an element before it is inserted into a [`Context`](crate::Context).
pub struct ElementDesc {
    pub(crate) relative_rect: Recti,
    pub(crate) anchors: Anchors,
    pub(crate) container: Option<ElementId>,
    pub(crate) layer_height: Option<i32>,
    pub(crate) minimum_dimensions: Option<Dimensioni>,
    pub(crate) visible: bool,
    pub(crate) behavior: Option<Box<dyn WidgetBehavior>>,
    pub(crate) dynamic_size: Option<Box<dyn Fn() -> Dimensioni>>,
}

impl ElementDesc {
    /// Starts a description from a relative rect. Negative dimensions request content-driven sizing.
    pub fn new(relative_rect: Recti) -> Self {
        Self {
            relative_rect,
            anchors: Anchors::default(),
            container: None,
            layer_height: None,
            minimum_dimensions: None,
            visible: true,
            behavior: None,
            dynamic_size: None,
        }
    }

    /// Sets the anchors.
    pub fn anchors(mut self, anchors: Anchors) -> Self {
        self.anchors = anchors;
        self
    }

    /// Places the element in `container` instead of the root window.
    pub fn container(mut self, container: ElementId) -> Self {
        self.container = Some(container);
        self
    }

    /// Overrides the layer height normally assigned on top of the container's current content.
    pub fn layer_height(mut self, height: i32) -> Self {
        self.layer_height = Some(height);
        self
    }

    /// Sets the minimum size.
    pub fn minimum_dimensions(mut self, dims: Dimensioni) -> Self {
        self.minimum_dimensions = Some(dims);
        self
    }

    /// Creates the element hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Attaches the widget behavior.
    pub fn behavior(mut self, behavior: Box<dyn WidgetBehavior>) -> Self {
        self.behavior = Some(behavior);
        self
    }

    /// Installs the natural-size calculator used for negative dimensions.
    pub fn dynamic_size<F: Fn() -> Dimensioni + 'static>(mut self, f: F) -> Self {
        self.dynamic_size = Some(Box::new(f));
        self
    }
}

pub(crate) enum ElementKind {
    Widget,
    Container(ContainerState),
}

/// A node of the layout tree.
pub struct Element {
    pub(crate) transform: Transform,
    pub(crate) container: Option<ElementId>,
    pub(crate) layer: i32,
    pub(crate) layer_height: i32,
    pub(crate) layer_thickness: i32,
    pub(crate) visible: bool,
    pub(crate) enabled: bool,
    pub(crate) kind: ElementKind,
    pub(crate) behavior: Option<Box<dyn WidgetBehavior>>,
    pub(crate) image: Vec<Command>,
    pub(crate) sequence: u64,
}

impl Element {
    pub(crate) fn new(transform: Transform, kind: ElementKind, sequence: u64) -> Self {
        Self {
            transform,
            container: None,
            layer: 0,
            layer_height: 0,
            layer_thickness: 1,
            visible: true,
            enabled: true,
            kind,
            behavior: None,
            image: Vec::new(),
            sequence,
        }
    }

    /// Layout state.
    pub fn transform(&self) -> &Transform { &self.transform }

    /// Owning container, `None` for windows and detached elements.
    pub fn container(&self) -> Option<ElementId> { self.container }

    /// Absolute paint layer.
    pub fn layer(&self) -> i32 { self.layer }

    /// Layer offset inside the owning container, `0` being the first layer above the container itself.
    pub fn layer_height(&self) -> i32 { self.layer_height }

    /// Number of layers spanned by the element and its descendants, at least 1.
    pub fn layer_thickness(&self) -> i32 { self.layer_thickness }

    /// Highest absolute layer occupied by the element or its descendants.
    pub fn top_layer(&self) -> i32 { self.layer + self.layer_thickness - 1 }

    /// Visibility flag.
    pub fn is_visible(&self) -> bool { self.visible }

    /// Enabled flag.
    pub fn is_enabled(&self) -> bool { self.enabled }

    /// Whether the element holds children.
    pub fn is_container(&self) -> bool { matches!(self.kind, ElementKind::Container(_)) }

    /// Children in paint order, empty for widgets.
    pub fn children(&self) -> &[ElementId] {
        match &self.kind {
            ElementKind::Container(state) => &state.children,
            ElementKind::Widget => &[],
        }
    }

    /// Draw commands produced by the last rebuild.
    pub fn image(&self) -> &[Command] { &self.image }

    pub(crate) fn container_state(&self) -> Option<&ContainerState> {
        match &self.kind {
            ElementKind::Container(state) => Some(state),
            ElementKind::Widget => None,
        }
    }

    pub(crate) fn container_state_mut(&mut self) -> Option<&mut ContainerState> {
        match &mut self.kind {
            ElementKind::Container(state) => Some(state),
            ElementKind::Widget => None,
        }
    }

    pub(crate) fn rebuild(&mut self, style: &Style) {
        if let Some(behavior) = self.behavior.as_mut() {
            self.image.clear();
            let size = self.transform.absolute_rect();
            behavior.rebuild(Dimensioni::new(size.width, size.height), style, &mut self.image);
        }
    }
}

pub(crate) type Elements = SlotMap<ElementId, Element>;

/// Layer bookkeeping the window stack needs from the element store.
pub(crate) trait LayerHost {
    fn base_layer(&self, id: ElementId) -> Option<i32>;
    fn thickness(&self, id: ElementId) -> Option<i32>;
    fn change_layer(&mut self, id: ElementId, layer: i32);
}

impl LayerHost for Elements {
    fn base_layer(&self, id: ElementId) -> Option<i32> { self.get(id).map(|e| e.layer) }

    fn thickness(&self, id: ElementId) -> Option<i32> { self.get(id).map(|e| e.layer_thickness) }

    /// Moves the element to `layer`, shifting its descendants along.
    fn change_layer(&mut self, id: ElementId, layer: i32) {
        let children = match self.get_mut(id) {
            Some(element) => {
                element.layer = layer;
                element.children().to_vec()
            }
            None => return,
        };
        for child in children {
            if let Some(height) = self.get(child).map(|c| c.layer_height) {
                self.change_layer(child, layer + 1 + height);
            }
        }
    }
}
