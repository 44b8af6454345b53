//! Free-text editing session.
//!
//! At most one object is in editing mode at a time: entering edit on one
//! object first clears the flag everywhere else.

use crate::board::Board;
use crate::selection::SelectionManager;
use crate::types::{ObjectContent, ObjectId, ToolType};
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextEditSession {
    active: Option<ObjectId>,
}

impl TextEditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The object currently being edited.
    pub fn active(&self) -> Option<ObjectId> {
        self.active
    }

    pub fn is_editing(&self, id: ObjectId) -> bool {
        self.active == Some(id)
    }

    /// Start editing `id`, ending any other edit first.
    pub fn begin(&mut self, board: &mut Board, id: ObjectId) -> bool {
        if !board.contains(id) {
            return false;
        }
        board.clear_editing_except(Some(id));
        board.set_editing(id, true);
        if self.active != Some(id) {
            debug!(%id, "Editing started");
        }
        self.active = Some(id);
        true
    }

    /// End the current edit (focus left the text). Outside the select tool
    /// the selection is cleared too, so text mode leaves no stale highlight.
    pub fn end(&mut self, board: &mut Board, selection: &mut SelectionManager, tool: ToolType) {
        if let Some(id) = self.active.take() {
            board.set_editing(id, false);
            debug!(%id, "Editing ended");
        }
        if tool != ToolType::Select {
            selection.clear();
        }
    }

    /// End editing on every object (click on empty canvas).
    pub fn end_all(&mut self, board: &mut Board) {
        self.active = None;
        board.clear_editing_except(None);
    }

    /// Replace the text of a text box. Image boxes are left alone.
    pub fn set_text(&self, board: &mut Board, id: ObjectId, text: impl Into<String>) -> bool {
        match board.get(id).map(|o| o.content.is_image()) {
            Some(false) => board.set_content(id, ObjectContent::Text(text.into())),
            _ => false,
        }
    }

    /// Forget the session if its object was deleted.
    pub fn forget(&mut self, removed: &[ObjectId]) {
        if self.active.is_some_and(|id| removed.contains(&id)) {
            self.active = None;
        }
    }
}
