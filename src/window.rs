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
use crate::element::{ElementKind, LayerHost};
use crate::{
    dim, rect, rect_contains, Anchors, Command, Context, ControlColor, Dimensioni, ElementDesc, ElementId, LayoutError, Recti, Style, Transform,
    Vec2i, WidgetBehavior,
};

/// Top-level windows ordered bottom to top.
///
/// Each window spans the layers `[base, base + thickness)` and the next window starts right above,
/// so paint order always equals stacking order.
#[derive(Default)]
pub struct WindowStack {
    stack: Vec<ElementId>,
}

impl WindowStack {
    /// Windows from bottom to top.
    pub fn windows(&self) -> &[ElementId] { &self.stack }

    /// Number of windows, the root window included.
    pub fn len(&self) -> usize { self.stack.len() }

    /// Returns `true` when no window is registered.
    pub fn is_empty(&self) -> bool { self.stack.is_empty() }

    /// Returns `true` when `window` is registered.
    pub fn contains(&self, window: ElementId) -> bool { self.stack.contains(&window) }

    /// Bottommost window.
    pub fn get_root_window(&self) -> Option<ElementId> { self.stack.first().copied() }

    /// Returns `true` when `window` is the topmost window.
    pub fn is_window_at_top(&self, window: ElementId) -> bool { self.stack.last() == Some(&window) }

    /// Places `window` on top, starting right above the current top window (or at layer 0).
    pub(crate) fn add_new_window<H: LayerHost>(&mut self, host: &mut H, window: ElementId) {
        let base = match self.stack.last() {
            Some(&top) => host.base_layer(top).unwrap_or(0) + host.thickness(top).unwrap_or(1),
            None => 0,
        };
        host.change_layer(window, base);
        self.stack.push(window);
    }

    /// Removes `window`, renumbering the windows that were above it. Unknown windows are ignored.
    pub(crate) fn remove_window<H: LayerHost>(&mut self, host: &mut H, window: ElementId) -> bool {
        let Some(popped) = self.pop_until(window) else { return false };
        self.stack.pop();
        for w in popped {
            self.add_new_window(host, w);
        }
        true
    }

    /// Moves `window` to the top; windows below keep their layers, windows above shift down.
    pub(crate) fn move_window_to_front<H: LayerHost>(&mut self, host: &mut H, window: ElementId) -> bool {
        let Some(popped) = self.pop_until(window) else { return false };
        self.stack.pop();
        for w in popped {
            self.add_new_window(host, w);
        }
        self.add_new_window(host, window);
        log::debug!("window {:?} moved to front", window);
        true
    }

    /// Renumbers every window above `window` after its thickness changed.
    pub(crate) fn restack_above<H: LayerHost>(&mut self, host: &mut H, window: ElementId) {
        if let Some(popped) = self.pop_until(window) {
            for w in popped {
                self.add_new_window(host, w);
            }
        }
    }

    /// Empties the stack, returning the windows bottom to top.
    pub(crate) fn clear(&mut self) -> Vec<ElementId> { std::mem::take(&mut self.stack) }

    // Pops windows above `window`, returned in bottom-to-top order; `window` stays on top.
    fn pop_until(&mut self, window: ElementId) -> Option<Vec<ElementId>> {
        if !self.contains(window) {
            return None;
        }
        let mut popped = Vec::new();
        while let Some(&top) = self.stack.last() {
            if top == window {
                break;
            }
            popped.push(top);
            self.stack.pop();
        }
        popped.reverse();
        Some(popped)
    }
}

pub(crate) struct WindowState {
    pub(crate) content: Option<ElementId>,
}

// Background, title bar and border of a window.
struct WindowFrame {
    title: String,
}

impl WidgetBehavior for WindowFrame {
    fn rebuild(&mut self, size: Dimensioni, style: &Style, image: &mut Vec<Command>) {
        let title_height = style.title_height.min(size.height);
        image.push(Command::Rect { rect: rect(0, 0, size.width, size.height), color: style.color(ControlColor::WindowBG) });
        image.push(Command::Rect { rect: rect(0, 0, size.width, title_height), color: style.color(ControlColor::TitleBG) });
        image.push(Command::Text {
            pos: Vec2i { x: style.padding, y: style.padding.min(title_height / 2) },
            color: style.color(ControlColor::TitleText),
            text: self.title.clone(),
        });
        image.push(Command::Box { rect: rect(0, 0, size.width, size.height), color: style.color(ControlColor::Border) });
    }
}

impl Context {
    /// Creates a titled window on top of the stack, positioned relative to the screen.
    ///
    /// Children go into the window's content container (see [`Self::window_content`]), which
    /// fills the window below the title bar.
    pub fn create_window(&mut self, title: &str, frame: Recti) -> Result<ElementId, LayoutError> {
        let title_height = self.style.title_height;
        let mut transform = Transform::new(rect(frame.x, frame.y, frame.width.max(0), frame.height.max(0)), Anchors::top_left());
        transform.set_minimum_dimensions(dim(0, title_height));
        let kind = ElementKind::Container(ContainerState::new(ContainerRole::Window(WindowState { content: None })));
        let window = self.insert(transform, kind, Some(Box::new(WindowFrame { title: title.to_string() })));
        self.windows.add_new_window(&mut self.elements, window);
        self.update_absolute(window, true)?;

        let size = self.lookup(window)?.transform().relative_rect();
        let content_rect = rect(0, title_height, size.width, (size.height - title_height).max(0));
        let content = self.create_container(ElementDesc::new(content_rect).anchors(Anchors::fill()).container(window))?;
        if let Some(ContainerRole::Window(state)) = self.lookup_mut(window)?.container_state_mut().map(|s| &mut s.role) {
            state.content = Some(content);
        }
        self.rebuild(window);
        log::debug!("window {:?} '{}' created at layer {}", window, title, self.lookup(window)?.layer());
        Ok(window)
    }

    /// Container holding the children of a window created with [`Self::create_window`].
    pub fn window_content(&self, window: ElementId) -> Result<ElementId, LayoutError> {
        match self.lookup(window)?.container_state().map(|s| &s.role) {
            Some(ContainerRole::Window(WindowState { content: Some(content) })) => Ok(*content),
            _ => Err(LayoutError::NotAWindow(window)),
        }
    }

    /// Puts a registered window above every other window.
    pub fn move_window_to_front(&mut self, window: ElementId) -> Result<(), LayoutError> {
        self.lookup(window)?;
        if !self.windows.move_window_to_front(&mut self.elements, window) {
            return Err(LayoutError::NotAWindow(window));
        }
        Ok(())
    }

    /// Takes a window out of the stack without killing it. Returns `false` if it was not stacked.
    pub fn remove_window(&mut self, window: ElementId) -> Result<bool, LayoutError> {
        if window == self.root {
            return Err(LayoutError::RootWindow);
        }
        self.lookup(window)?;
        Ok(self.windows.remove_window(&mut self.elements, window))
    }

    /// Stacks a top-level window on top again after [`Self::remove_window`].
    pub fn add_new_window(&mut self, window: ElementId) -> Result<(), LayoutError> {
        if !self.is_top_level(window) {
            return Err(LayoutError::NotAWindow(window));
        }
        if !self.windows.contains(window) {
            self.windows.add_new_window(&mut self.elements, window);
        }
        Ok(())
    }

    /// Brings the topmost visible window under `pos` to the front, ignoring the root window.
    pub fn focus_window_at(&mut self, pos: Vec2i) -> Option<ElementId> {
        let hit = self.windows.windows().iter().rev().copied().filter(|w| *w != self.root).find(|w| {
            self.elements
                .get(*w)
                .is_some_and(|e| e.is_visible() && rect_contains(e.transform().absolute_rect(), pos))
        })?;
        if !self.windows.is_window_at_top(hit) {
            self.windows.move_window_to_front(&mut self.elements, hit);
        }
        Some(hit)
    }
}
