//! Mode and tool switching.

use super::CanvasApp;
use crate::types::{CanvasMode, ToolType};
use tracing::debug;

impl CanvasApp {
    /// Switch the editor mode. Entering Art mode picks the select tool.
    pub fn set_mode(&mut self, mode: CanvasMode) {
        if self.tools.mode == mode {
            return;
        }
        self.cancel_gesture();
        self.tools.mode = mode;
        if mode == CanvasMode::Art {
            self.tools.selected = ToolType::Select;
        }
        debug!(?mode, tool = ?self.tools.selected, "Mode changed");
    }

    /// Pick a tool from the art-mode panel.
    pub fn set_tool(&mut self, tool: ToolType) {
        if self.tools.selected == tool {
            return;
        }
        self.cancel_gesture();
        self.tools.selected = tool;
        debug!(?tool, "Tool changed");
    }

    /// Floating button caption for the current mode and tool.
    pub fn active_tool_label(&self) -> &'static str {
        match self.tools.mode {
            CanvasMode::Text => ToolType::Text.label(),
            CanvasMode::Art => self.tools.selected.label(),
        }
    }

    pub(crate) fn routes_pointer(&self) -> bool {
        self.tools.mode == CanvasMode::Art
    }
}
