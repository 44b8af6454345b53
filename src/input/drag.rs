//! Pointer move handling - draw preview, rectangle select, move, resize.
//!
//! Moves and resizes are applied live and always computed from the
//! positions captured at pointer-down, never accumulated per event, so
//! dropped or coalesced move events cannot cause drift.

use crate::app::CanvasApp;
use crate::input::events::PointerEvent;
use crate::input::state::GestureState;
use crate::profile_scope;
use tracing::trace;

impl CanvasApp {
    /// Route a pointer-move. Returns true when anything visible changed.
    pub fn on_pointer_move(&mut self, event: PointerEvent) -> bool {
        profile_scope!("on_pointer_move");

        let screen = event.position;
        let world = self.viewport.screen_to_world(screen);

        match &self.canvas.gesture {
            GestureState::Idle => {
                // Hover only drives resize handle display
                let hovered = if self.routes_pointer() {
                    self.canvas.board.hit_test(world)
                } else {
                    None
                };
                let changed = hovered != self.canvas.hovered;
                self.canvas.hovered = hovered;
                changed
            }

            GestureState::DrawingBox { .. } | GestureState::DrawingSelectionRect { .. } => {
                self.canvas.gesture.set_current(world);
                true
            }

            GestureState::MovingSelection { down, captured } => {
                profile_scope!("move_selection");
                let (dx, dy) = screen.delta_from(*down);
                let (wdx, wdy) = self.viewport.delta_to_world(dx, dy);
                for entry in captured {
                    let (x, y) = entry.position;
                    self.canvas.board.move_to(entry.id, x + wdx, y + wdy);
                }
                trace!(count = captured.len(), wdx, wdy, "Selection moved");
                true
            }

            GestureState::ResizingBox {
                item_id,
                down,
                start_size,
                ..
            } => {
                let (dx, dy) = screen.delta_from(*down);
                let (wdx, wdy) = self.viewport.delta_to_world(dx, dy);
                let (w, h) = *start_size;
                self.canvas.board.resize(*item_id, w + wdx, h + wdy)
            }
        }
    }
}
