//! Application state - the CanvasApp struct definition and sub-structs.

use crate::board::Board;
use crate::config::CanvasConfig;
use crate::input::{GestureState, InputCapture};
use crate::selection::SelectionManager;
use crate::text_edit::TextEditSession;
use crate::types::{CanvasMode, ObjectId, Rect, ToolType};
use crate::viewport::{Viewport, ViewportBounds};
use std::collections::HashMap;
use uuid::Uuid;

/// Canvas interaction state - objects, selection, active gesture
#[derive(Debug, Default)]
pub struct CanvasState {
    /// Every placed box plus its spatial index
    pub board: Board,
    /// Currently selected ids
    pub selection: SelectionManager,
    /// Gesture state machine
    pub gesture: GestureState,
    /// Held while a gesture is active
    pub capture: Option<InputCapture>,
    /// Object under an idle pointer, for resize handle display
    pub hovered: Option<ObjectId>,
}

/// Tool panel state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToolState {
    pub mode: CanvasMode,
    pub selected: ToolType,
}

/// The whole interaction engine. One instance per canvas; the host owns it
/// and drives it with `on_*` event handlers.
#[derive(Debug)]
pub struct CanvasApp {
    pub(crate) config: CanvasConfig,
    pub(crate) viewport: Viewport,
    pub(crate) canvas: CanvasState,
    pub(crate) tools: ToolState,
    pub(crate) text_edit: TextEditSession,
    /// Newest outstanding content request per object
    pub(crate) in_flight: HashMap<ObjectId, Uuid>,
}

impl Default for CanvasApp {
    fn default() -> Self {
        Self::new(CanvasConfig::default(), ViewportBounds::default())
    }
}

impl CanvasApp {
    pub fn new(config: CanvasConfig, bounds: ViewportBounds) -> Self {
        let viewport = Viewport::new(bounds).with_zoom_limits(
            config.min_zoom,
            config.max_zoom,
            config.zoom_sensitivity,
        );
        let (min_w, min_h) = config.min_box_size;
        let canvas = CanvasState {
            board: Board::with_min_size(min_w, min_h),
            ..Default::default()
        };
        Self {
            config,
            viewport,
            canvas,
            tools: ToolState::default(),
            text_edit: TextEditSession::new(),
            in_flight: HashMap::new(),
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Update the canvas element's screen rectangle after a layout change.
    pub fn set_viewport_bounds(&mut self, bounds: ViewportBounds) {
        self.viewport.set_bounds(bounds);
    }

    /// Direct pan/zoom control, e.g. for a zoom slider or "reset view".
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn board(&self) -> &Board {
        &self.canvas.board
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.canvas.selection
    }

    /// Select exactly `id`, e.g. from a layer list. Unknown ids are ignored.
    pub fn select_only(&mut self, id: ObjectId) -> bool {
        if !self.canvas.board.contains(id) {
            return false;
        }
        self.canvas.selection.select_only(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.canvas.selection.clear();
    }

    pub fn gesture(&self) -> &GestureState {
        &self.canvas.gesture
    }

    /// True while a gesture holds the pointer. Hosts attach window-level
    /// move/up listeners for exactly this span.
    pub fn is_capturing(&self) -> bool {
        self.canvas.capture.is_some()
    }

    pub fn hovered(&self) -> Option<ObjectId> {
        self.canvas.hovered
    }

    pub fn mode(&self) -> CanvasMode {
        self.tools.mode
    }

    pub fn tool(&self) -> ToolType {
        self.tools.selected
    }

    /// The object currently being edited.
    pub fn editing(&self) -> Option<ObjectId> {
        self.text_edit.active()
    }

    /// Live selection rectangle in world coordinates, for rendering.
    pub fn selection_rect(&self) -> Option<Rect> {
        self.canvas.gesture.selection_rect()
    }

    /// Whether `id` currently shows a resize handle.
    pub fn shows_resize_handle(&self, id: ObjectId) -> bool {
        self.canvas.selection.contains(id) || self.canvas.hovered == Some(id)
    }
}
