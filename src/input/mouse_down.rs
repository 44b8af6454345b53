//! Pointer down handling - resize handle, drawing, moving, rectangle select.
//!
//! ## Performance Notes
//!
//! Pointer down is a hot path during interaction. Hit testing goes through
//! the R-tree spatial index, so it stays O(log n) in the object count.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::CanvasApp;
use crate::input::capture::InputCapture;
use crate::input::events::PointerEvent;
use crate::input::state::{CapturedPosition, GestureState};
use crate::profile_scope;
use crate::types::{ObjectId, Point, ToolType};
use tracing::debug;

impl CanvasApp {
    /// Route a pointer-down. Returns true when a gesture started or the
    /// selection changed.
    pub fn on_pointer_down(&mut self, event: PointerEvent) -> bool {
        profile_scope!("on_pointer_down");

        if !self.routes_pointer() {
            return false;
        }
        if self.canvas.gesture.is_active() {
            debug!(gesture = ?self.canvas.gesture.kind(), "Pointer down ignored during gesture");
            return false;
        }

        let screen = event.position;
        let world = self.viewport.screen_to_world(screen);

        // Resize handle beats every tool
        let handle_px = self.config.resize_handle_size;
        let zoom = self.viewport.zoom();
        let handle_hit = self.canvas.board.resize_handle_at(world, handle_px, zoom, |id| {
            self.shows_resize_handle(id)
        });
        let handle_hit = handle_hit.and_then(|id| {
            self.canvas.board.get(id).map(|object| (id, object.size, object.position))
        });
        if let Some((item_id, start_size, start_position)) = handle_hit {
            let state = GestureState::ResizingBox {
                item_id,
                down: screen,
                start_size,
                start_position,
            };
            self.start_gesture(state);
            return true;
        }

        match self.tools.selected {
            ToolType::Text => {
                self.start_gesture(GestureState::DrawingBox {
                    anchor: world,
                    current: world,
                });
                true
            }
            ToolType::Select => {
                profile_scope!("hit_test_items");
                match self.canvas.board.hit_test(world) {
                    Some(id) if self.canvas.selection.contains(id) => {
                        self.start_move(screen);
                        true
                    }
                    Some(id) if event.modifiers.shift => {
                        self.canvas.selection.toggle(id);
                        true
                    }
                    Some(id) => {
                        self.canvas.selection.select_only(id);
                        self.start_move(screen);
                        true
                    }
                    None => {
                        if !event.modifiers.shift {
                            self.canvas.selection.clear();
                        }
                        self.start_gesture(GestureState::DrawingSelectionRect {
                            start: world,
                            current: world,
                            additive: event.modifiers.shift,
                        });
                        true
                    }
                }
            }
            // Eraser acts on click; move and rectangle have no pointer behavior
            ToolType::Move | ToolType::Eraser | ToolType::Rectangle => false,
        }
    }

    /// Begin moving every selected object from `screen`.
    fn start_move(&mut self, screen: Point) {
        let captured: Vec<CapturedPosition> = self
            .canvas
            .selection
            .sorted()
            .into_iter()
            .filter_map(|id: ObjectId| {
                self.canvas.board.get(id).map(|object| CapturedPosition {
                    id,
                    position: object.position,
                })
            })
            .collect();
        self.start_gesture(GestureState::MovingSelection {
            down: screen,
            captured,
        });
    }

    pub(crate) fn start_gesture(&mut self, state: GestureState) {
        let Some(kind) = state.kind() else { return };
        debug!(?kind, "Gesture started");
        self.canvas.gesture = state;
        self.canvas.capture = Some(InputCapture::acquire(kind));
    }
}
