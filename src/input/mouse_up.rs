//! Pointer up handling - commit the active gesture, clicks, focus loss.

use crate::app::CanvasApp;
use crate::input::events::PointerEvent;
use crate::input::state::GestureState;
use crate::profile_scope;
use crate::types::{ObjectId, Point, Rect, ToolType};
use tracing::debug;

impl CanvasApp {
    /// Commit the active gesture and return to Idle. Accepted wherever the
    /// pointer is, since the capture routes window-level events here.
    /// Returns the id of a newly created box, if any.
    pub fn on_pointer_up(&mut self, event: PointerEvent) -> Option<ObjectId> {
        profile_scope!("on_pointer_up");

        let gesture = std::mem::take(&mut self.canvas.gesture);
        let kind = gesture.kind()?;
        let world = self.viewport.screen_to_world(event.position);

        let created = match gesture {
            GestureState::DrawingBox { anchor, .. } => self.commit_box(anchor, world),
            GestureState::DrawingSelectionRect { start, additive, .. } => {
                let rect = Rect::from_corners(start, world);
                let hits = self.canvas.board.rect_intersect(&rect);
                debug!(count = hits.len(), "Rectangle selection");
                if additive {
                    for id in hits {
                        if !self.canvas.selection.contains(id) {
                            self.canvas.selection.toggle(id);
                        }
                    }
                } else {
                    self.canvas.selection.set_from_rect(hits);
                }
                None
            }
            // Moves and resizes were applied live and the index kept in step
            GestureState::MovingSelection { .. } | GestureState::ResizingBox { .. } => None,
            GestureState::Idle => None,
        };

        debug!(?kind, "Gesture finished");
        self.canvas.capture = None;
        created
    }

    /// Finish a text-tool drag. A click on an existing object with no real
    /// travel is left to [`CanvasApp::on_click`], which opens it for editing.
    fn commit_box(&mut self, anchor: Point, current: Point) -> Option<ObjectId> {
        let travel = anchor.distance(current) * self.viewport.zoom();
        if travel <= self.config.click_slop && self.canvas.board.hit_test(anchor).is_some() {
            return None;
        }
        let id = self.canvas.board.create(anchor, current).id;
        self.canvas.selection.select_only(id);
        self.begin_editing(id);
        Some(id)
    }

    /// A down+up with no net movement, as delivered by the host.
    pub fn on_click(&mut self, event: PointerEvent) {
        let world = self.viewport.screen_to_world(event.position);
        let Some(id) = self.canvas.board.hit_test(world) else {
            // Empty canvas
            self.end_all_editing();
            return;
        };
        if !self.routes_pointer() {
            return;
        }
        match self.tools.selected {
            // Shift-click already toggled on pointer-down
            ToolType::Select if !event.modifiers.shift => self.canvas.selection.select_only(id),
            ToolType::Eraser => {
                self.delete_objects(&[id]);
            }
            ToolType::Text => {
                self.begin_editing(id);
            }
            _ => {}
        }
    }

    /// Double-click opens an object for editing with the select tool.
    pub fn on_double_click(&mut self, event: PointerEvent) -> bool {
        if !self.routes_pointer() || self.tools.selected != ToolType::Select {
            return false;
        }
        let world = self.viewport.screen_to_world(event.position);
        match self.canvas.board.hit_test(world) {
            Some(id) => self.begin_editing(id),
            None => false,
        }
    }

    /// The window lost focus mid-gesture. Live moves and resizes stay where
    /// they are; an unfinished draw or rectangle select is dropped.
    pub fn on_blur(&mut self) {
        if self.canvas.gesture.is_active() {
            debug!(gesture = ?self.canvas.gesture.kind(), "Gesture cancelled by focus loss");
        }
        self.cancel_gesture();
        self.canvas.hovered = None;
    }

    /// Abandon the active gesture without committing it.
    pub fn cancel_gesture(&mut self) {
        self.canvas.gesture.reset();
        self.canvas.capture = None;
    }
}
