//! Gesture state machine - the single source of truth for what the pointer
//! is currently doing.
//!
//! One enum instead of scattered flags makes the mutual exclusion of
//! gestures structural: there is no way to be moving and resizing at once.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DrawingBox            (down with text tool)
//! Idle -> DrawingSelectionRect  (down on empty canvas with select tool)
//! Idle -> MovingSelection       (down on an object with select tool)
//! Idle -> ResizingBox           (down on a visible resize handle, any tool)
//!
//! Any -> Idle                   (up commits; focus loss cancels)
//! ```
//!
//! A down event while not Idle is ignored.

use crate::types::{ObjectId, Point, Rect};

/// Which gesture is active, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    DrawingBox,
    DrawingSelectionRect,
    MovingSelection,
    ResizingBox,
}

/// Position snapshot of one object taken when a move starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapturedPosition {
    pub id: ObjectId,
    pub position: (f32, f32),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    /// No active pointer gesture
    #[default]
    Idle,

    /// Drawing a new text box
    DrawingBox {
        /// Fixed corner in world coordinates
        anchor: Point,
        /// Current pointer position in world coordinates
        current: Point,
    },

    /// Dragging a selection rectangle
    DrawingSelectionRect {
        /// Start corner in world coordinates
        start: Point,
        /// Current pointer position in world coordinates
        current: Point,
        /// Shift was held at pointer down: hits join the existing selection
        additive: bool,
    },

    /// Moving every selected object
    MovingSelection {
        /// Screen position of the pointer-down
        down: Point,
        /// Positions at gesture start; moves are relative to these
        captured: Vec<CapturedPosition>,
    },

    /// Resizing one object from its bottom-right handle
    ResizingBox {
        item_id: ObjectId,
        /// Screen position of the pointer-down
        down: Point,
        /// Size at gesture start
        start_size: (f32, f32),
        /// Position at gesture start; never changes during resize
        start_position: (f32, f32),
    },
}

impl GestureState {
    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            Self::Idle => None,
            Self::DrawingBox { .. } => Some(GestureKind::DrawingBox),
            Self::DrawingSelectionRect { .. } => Some(GestureKind::DrawingSelectionRect),
            Self::MovingSelection { .. } => Some(GestureKind::MovingSelection),
            Self::ResizingBox { .. } => Some(GestureKind::ResizingBox),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// True while any gesture owns the pointer.
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::DrawingBox { .. })
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self, Self::DrawingSelectionRect { .. })
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, Self::MovingSelection { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::ResizingBox { .. })
    }

    /// Reset to Idle
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Normalized selection rectangle in world coordinates, while selecting.
    pub fn selection_rect(&self) -> Option<Rect> {
        match self {
            Self::DrawingSelectionRect { start, current, .. } => Some(Rect::from_corners(*start, *current)),
            _ => None,
        }
    }

    /// Raw drag rectangle of the box being drawn, for a preview outline.
    pub fn drawing_preview(&self) -> Option<Rect> {
        match self {
            Self::DrawingBox { anchor, current } => Some(Rect::from_corners(*anchor, *current)),
            _ => None,
        }
    }

    /// Ids captured by an in-progress move.
    pub fn moving_ids(&self) -> Vec<ObjectId> {
        match self {
            Self::MovingSelection { captured, .. } => captured.iter().map(|c| c.id).collect(),
            _ => Vec::new(),
        }
    }

    /// The object being resized, if any.
    pub fn resizing_item(&self) -> Option<ObjectId> {
        match self {
            Self::ResizingBox { item_id, .. } => Some(*item_id),
            _ => None,
        }
    }

    /// Update the moving end of a drawing or selection drag.
    pub fn set_current(&mut self, world: Point) {
        match self {
            Self::DrawingBox { current, .. } | Self::DrawingSelectionRect { current, .. } => {
                *current = world;
            }
            _ => {}
        }
    }
}
