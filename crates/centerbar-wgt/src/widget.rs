//! Host capability interface.

use centerbar_unit::{PxConstraints2d, PxSize};

use crate::{event::PointerEvent, render::Surface};

bitflags::bitflags! {
    /// Requests a widget raises for the host.
    ///
    /// Flags accumulate until the host drains them with [`SeekWidget::take_updates`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UpdateFlags: u8 {
        /// Widget must be rendered again.
        const RENDER = 0b01;
        /// Ancestor containers must not intercept the current pointer gesture.
        ///
        /// Hosts with scrollable parents use this to stop them from stealing the drag.
        const CLAIM_DRAG = 0b10;
    }
}

/// A seek bar embedded in a host view tree.
///
/// The host supplies layout constraints, pointer events and a drawing surface, the widget
/// answers with its size, if the event was consumed and draw calls.
pub trait SeekWidget {
    /// Compute the widget size for the `constraints`.
    fn measure(&mut self, constraints: PxConstraints2d) -> PxSize;

    /// Set the final widget size.
    fn layout(&mut self, size: PxSize);

    /// Handle a pointer event, returns `true` if the event was consumed.
    ///
    /// Not consumed events should receive the host default handling, like scrolling a parent.
    fn pointer_event(&mut self, ev: &PointerEvent) -> bool;

    /// Draw the widget on the `surface`.
    fn render(&self, surface: &mut dyn Surface);

    /// Take the requests raised since the last call.
    fn take_updates(&mut self) -> UpdateFlags;

    /// Enable or disable the widget.
    ///
    /// Disabled widgets ignore all pointer events.
    fn set_enabled(&mut self, enabled: bool);

    /// Gets if the widget is enabled.
    fn is_enabled(&self) -> bool;
}
