//! Canvas transformations - wheel pan and zoom.

use crate::app::CanvasApp;
use crate::input::events::WheelEvent;
use tracing::trace;

impl CanvasApp {
    /// Wheel over the canvas. With the zoom modifier (ctrl, or cmd on macOS)
    /// the vertical delta zooms; otherwise both deltas pan, content moving
    /// against the wheel. Returns true when the view changed.
    pub fn on_wheel(&mut self, event: WheelEvent) -> bool {
        if event.modifiers.zoom() {
            let changed = self.viewport.zoom_by_wheel(event.delta_y);
            trace!(zoom = self.viewport.zoom(), "Zoom");
            changed
        } else {
            self.viewport.pan(-event.delta_x, -event.delta_y);
            trace!(x = self.viewport.pan_offset.x, y = self.viewport.pan_offset.y, "Pan");
            event.delta_x != 0.0 || event.delta_y != 0.0
        }
    }
}
