// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capabilities a rating needs from whatever embeds it.

use kurbo::Size;

/// The embedding surface of a [`Rating`](crate::Rating).
///
/// The host owns layout and the render loop. The control only asks for a
/// repaint after each observable change and reads the laid-out size when it
/// maps a touch to an item. Attachment to a parent is reported the other way
/// round, by calling [`Rating::attach`](crate::Rating::attach) and
/// [`Rating::detach`](crate::Rating::detach).
pub trait RenderHost {
    /// Asks for the surface to be redrawn.
    ///
    /// Fire-and-forget; hosts may coalesce several requests into one frame.
    fn request_repaint(&mut self);

    /// Returns the current laid-out size of the surface.
    ///
    /// A zero width means layout has not happened yet.
    fn surface_size(&self) -> Size;
}

impl<H: RenderHost + ?Sized> RenderHost for &mut H {
    fn request_repaint(&mut self) {
        (**self).request_repaint();
    }

    fn surface_size(&self) -> Size {
        (**self).surface_size()
    }
}
