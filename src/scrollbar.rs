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
use crate::{rect, Command, ControlColor, Dimensioni, Recti, Style, UiEvent, Vec2i, WidgetBehavior};
use std::cell::Cell;
use std::rc::Rc;

/// Direction a scrollbar scrolls along.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ScrollAxis {
    /// Bar on the right edge, scrolls content up and down.
    Vertical,
    /// Bar on the bottom edge, scrolls content left and right.
    Horizontal,
}

/// State shared between a scrolling container and one of its bars.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ScrollMetrics {
    pub(crate) view_len: i32,
    pub(crate) content_len: i32,
    pub(crate) scroll: i32,
    /// Scroll requested by a click on the bar, applied on the next update tick.
    pub(crate) pending: Option<i32>,
}

/// Rect of the bar placed beside `body` along `axis`.
pub(crate) fn scrollbar_base(axis: ScrollAxis, body: Recti, scrollbar_size: i32) -> Recti {
    let mut base = body;
    match axis {
        ScrollAxis::Vertical => {
            base.x = body.x + body.width;
            base.width = scrollbar_size;
        }
        ScrollAxis::Horizontal => {
            base.y = body.y + body.height;
            base.height = scrollbar_size;
        }
    }
    base
}

pub(crate) fn scrollbar_max_scroll(content_len: i32, view_len: i32) -> i32 { (content_len - view_len).max(0) }

fn along(axis: ScrollAxis, r: Recti) -> (i32, i32) {
    match axis {
        ScrollAxis::Vertical => (r.y, r.height),
        ScrollAxis::Horizontal => (r.x, r.width),
    }
}

pub(crate) fn scrollbar_thumb(axis: ScrollAxis, base: Recti, view_len: i32, content_len: i32, scroll: i32, thumb_size: i32) -> Recti {
    let mut thumb = base;
    let (_, base_len) = along(axis, base);
    if base_len <= 0 || content_len <= 0 || view_len <= 0 {
        return thumb;
    }

    let thumb_len = (base_len.saturating_mul(view_len) / content_len).max(thumb_size).min(base_len);
    match axis {
        ScrollAxis::Vertical => thumb.height = thumb_len,
        ScrollAxis::Horizontal => thumb.width = thumb_len,
    }

    let max_scroll = scrollbar_max_scroll(content_len, view_len);
    let track_len = base_len - thumb_len;
    if max_scroll > 0 && track_len > 0 {
        let offset = scroll.clamp(0, max_scroll) * track_len / max_scroll;
        match axis {
            ScrollAxis::Vertical => thumb.y += offset,
            ScrollAxis::Horizontal => thumb.x += offset,
        }
    }
    thumb
}

/// Scroll value that centers the thumb on `pos`.
pub(crate) fn scroll_for_pointer(axis: ScrollAxis, base: Recti, thumb: Recti, view_len: i32, content_len: i32, pos: Vec2i) -> i32 {
    let (start, base_len) = along(axis, base);
    let (_, thumb_len) = along(axis, thumb);
    let pointer = match axis {
        ScrollAxis::Vertical => pos.y,
        ScrollAxis::Horizontal => pos.x,
    };
    let track_len = base_len - thumb_len;
    let max_scroll = scrollbar_max_scroll(content_len, view_len);
    if track_len <= 0 || max_scroll == 0 {
        return 0;
    }
    (pointer - start - thumb_len / 2).clamp(0, track_len) * max_scroll / track_len
}

/// Bar of a scrolling container: draws the track and thumb, and turns clicks into scroll requests.
pub(crate) struct ScrollbarWidget {
    axis: ScrollAxis,
    metrics: Rc<Cell<ScrollMetrics>>,
    thumb_size: i32,
}

impl ScrollbarWidget {
    pub(crate) fn new(axis: ScrollAxis, metrics: Rc<Cell<ScrollMetrics>>) -> Self { Self { axis, metrics, thumb_size: 0 } }
}

impl WidgetBehavior for ScrollbarWidget {
    fn rebuild(&mut self, size: Dimensioni, style: &Style, image: &mut Vec<Command>) {
        self.thumb_size = style.thumb_size;
        let base = rect(0, 0, size.width, size.height);
        let m = self.metrics.get();
        let thumb = scrollbar_thumb(self.axis, base, m.view_len, m.content_len, m.scroll, self.thumb_size);
        image.push(Command::Rect { rect: base, color: style.color(ControlColor::ScrollBase) });
        image.push(Command::Rect { rect: thumb, color: style.color(ControlColor::ScrollThumb) });
    }

    fn process_event(&mut self, event: &UiEvent, rect: Recti) -> bool {
        let UiEvent::MouseDown(pos) = event else { return false };
        let m = self.metrics.get();
        let thumb = scrollbar_thumb(self.axis, rect, m.view_len, m.content_len, m.scroll, self.thumb_size);
        let target = scroll_for_pointer(self.axis, rect, thumb, m.view_len, m.content_len, *pos);
        self.metrics.set(ScrollMetrics { pending: Some(target), ..m });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rect_tuple, vec2};

    #[test]
    fn base_sits_beside_the_body() {
        let body = rect(0, 0, 90, 60);
        assert_eq!(rect_tuple(scrollbar_base(ScrollAxis::Vertical, body, 10)), (90, 0, 10, 60));
        assert_eq!(rect_tuple(scrollbar_base(ScrollAxis::Horizontal, body, 10)), (0, 60, 90, 10));
    }

    #[test]
    fn thumb_is_proportional_and_bounded() {
        let base = rect(0, 0, 10, 100);
        assert_eq!(rect_tuple(scrollbar_thumb(ScrollAxis::Vertical, base, 100, 400, 0, 8)), (0, 0, 10, 25));
        assert_eq!(rect_tuple(scrollbar_thumb(ScrollAxis::Vertical, base, 100, 400, 300, 8)), (0, 75, 10, 25));
        assert_eq!(scrollbar_thumb(ScrollAxis::Vertical, base, 10, 10_000, 0, 8).height, 8);
        assert_eq!(scrollbar_thumb(ScrollAxis::Vertical, base, 100, 50, 0, 8).height, 100);
    }

    #[test]
    fn pointer_maps_to_scroll() {
        let base = rect(0, 0, 100, 10);
        let thumb = scrollbar_thumb(ScrollAxis::Horizontal, base, 100, 400, 0, 8);
        assert_eq!(scroll_for_pointer(ScrollAxis::Horizontal, base, thumb, 100, 400, vec2(0, 5)), 0);
        assert_eq!(scroll_for_pointer(ScrollAxis::Horizontal, base, thumb, 100, 400, vec2(99, 5)), 300);
        assert_eq!(scroll_for_pointer(ScrollAxis::Horizontal, base, thumb, 100, 400, vec2(50, 5)), 152);
        assert_eq!(scroll_for_pointer(ScrollAxis::Horizontal, base, thumb, 400, 400, vec2(50, 5)), 0);
    }

    #[test]
    fn click_records_pending_scroll() {
        let metrics = Rc::new(Cell::new(ScrollMetrics { view_len: 100, content_len: 400, scroll: 0, pending: None }));
        let mut bar = ScrollbarWidget::new(ScrollAxis::Vertical, metrics.clone());
        let mut image = Vec::new();
        bar.rebuild(Dimensioni::new(10, 100), &Style::default(), &mut image);
        assert_eq!(image.len(), 2);
        assert!(bar.process_event(&UiEvent::MouseDown(vec2(205, 199)), rect(200, 100, 10, 100)));
        assert_eq!(metrics.get().pending, Some(300));
        assert!(!bar.process_event(&UiEvent::MouseUp(vec2(205, 150)), rect(200, 100, 10, 100)));
    }
}
