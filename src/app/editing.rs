//! Object-level edits that bypass the gesture machine: deletion, the
//! Delete key, and the text editing session.

use super::CanvasApp;
use crate::input::Key;
use crate::types::{ObjectId, ToolType};
use tracing::debug;

impl CanvasApp {
    /// Delete objects and drop them from the selection, the edit session
    /// and hover tracking in one step. Returns the ids actually removed.
    pub fn delete_objects(&mut self, ids: &[ObjectId]) -> Vec<ObjectId> {
        let removed = self.canvas.board.delete(ids);
        self.canvas.selection.remove_many(&removed);
        self.text_edit.forget(&removed);
        for id in &removed {
            self.in_flight.remove(id);
        }
        if self.canvas.hovered.is_some_and(|id| removed.contains(&id)) {
            self.canvas.hovered = None;
        }
        removed
    }

    /// Delete everything selected.
    pub fn delete_selected(&mut self) -> Vec<ObjectId> {
        let ids = self.canvas.selection.sorted();
        self.delete_objects(&ids)
    }

    /// Keyboard input on the canvas element. Returns true when handled.
    ///
    /// Delete only acts with the select tool, and never while text is being
    /// typed into a box.
    pub fn on_key_down(&mut self, key: Key) -> bool {
        match key {
            Key::Delete => {
                if self.tools.selected != ToolType::Select
                    || self.canvas.selection.is_empty()
                    || self.text_edit.active().is_some()
                {
                    return false;
                }
                let removed = self.delete_selected();
                debug!(count = removed.len(), "Delete key");
                !removed.is_empty()
            }
            Key::Escape => {
                if self.canvas.gesture.is_active() {
                    self.cancel_gesture();
                    true
                } else {
                    false
                }
            }
            Key::Backspace | Key::Other => false,
        }
    }

    /// Put `id` into editing mode, ending any other edit.
    pub fn begin_editing(&mut self, id: ObjectId) -> bool {
        self.text_edit.begin(&mut self.canvas.board, id)
    }

    /// The edited text lost focus.
    pub fn end_editing(&mut self) {
        self.text_edit.end(
            &mut self.canvas.board,
            &mut self.canvas.selection,
            self.tools.selected,
        );
    }

    /// End editing everywhere.
    pub fn end_all_editing(&mut self) {
        self.text_edit.end_all(&mut self.canvas.board);
    }

    /// Replace the text of a text box as the user types.
    pub fn set_text(&mut self, id: ObjectId, text: impl Into<String>) -> bool {
        self.text_edit.set_text(&mut self.canvas.board, id, text)
    }
}
