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
use thiserror::Error;

/// Errors returned by [`Context`](crate::Context) operations that receive an invalid argument.
///
/// Layout itself never fails: anchor and margin problems degrade to a default placement and are
/// reported through the `log` facade instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The handle refers to an element that was killed.
    #[error("element {0:?} no longer exists")]
    StaleElement(ElementId),
    /// The element cannot hold children.
    #[error("element {0:?} is not a container")]
    NotAContainer(ElementId),
    /// The element was removed from its container and has nothing to lay out against.
    #[error("element {0:?} is not attached to a container")]
    Detached(ElementId),
    /// The element already belongs to a container; remove it first.
    #[error("element {element:?} already belongs to container {container:?}")]
    AlreadyContained {
        /// Element being added.
        element: ElementId,
        /// Container currently holding it.
        container: ElementId,
    },
    /// The container is the element itself or one of its descendants, or the element is a window.
    #[error("element {element:?} cannot be placed in {container:?}")]
    InvalidParent {
        /// Element being added.
        element: ElementId,
        /// Rejected container.
        container: ElementId,
    },
    /// Using `target` as an anchor target would make the layout of `element` depend on itself.
    #[error("anchoring {element:?} to {target:?} creates a dependency cycle")]
    AnchorCycle {
        /// Element whose anchors were being assigned.
        element: ElementId,
        /// Anchor target that closes the cycle.
        target: ElementId,
    },
    /// The element is not registered in the window stack.
    #[error("element {0:?} is not a window")]
    NotAWindow(ElementId),
    /// The element is not the root of a scrolling container.
    #[error("element {0:?} is not a scrolling container")]
    NotAScrollingContainer(ElementId),
    /// The root window cannot be killed or detached.
    #[error("the root window cannot be removed")]
    RootWindow,
}
