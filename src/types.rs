//! Core types for the canvas engine.
//!
//! Geometry primitives, canvas objects and their content, and the tool/mode
//! identifiers that gate pointer routing.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Geometry
// ============================================================================

/// A 2D point. Used for both screen and world coordinates; which one is
/// meant is always clear from the function it flows through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Component-wise difference `self - other`.
    #[inline]
    pub fn delta_from(self, other: Point) -> (f32, f32) {
        (self.x - other.x, self.y - other.y)
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        let (dx, dy) = self.delta_from(other);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner.
///
/// Width and height are never negative once built through
/// [`Rect::from_corners`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Normalize two arbitrary corners into a rectangle, so the drag
    /// direction does not matter.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Inclusive point containment (edges count as inside).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Inclusive AABB overlap: rectangles sharing only a boundary intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() < other.left()
            || self.left() > other.right()
            || self.bottom() < other.top()
            || self.top() > other.bottom())
    }
}

// ============================================================================
// Canvas Objects
// ============================================================================

/// Stable identifier of a canvas object. Assigned from a monotonic counter
/// and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A generated image, ready to display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// `data:image/png;base64,...` URI
    pub uri: String,
    /// Decoded pixel width
    pub width: u32,
    /// Decoded pixel height
    pub height: u32,
}

/// What a box displays. An object holds exactly one variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectContent {
    /// Free text, possibly being composed
    Text(String),
    /// A generated image
    Image(ImageRef),
}

impl ObjectContent {
    /// The text of a `Text` box, `None` for images.
    pub fn text(&self) -> Option<&str> {
        match self {
            ObjectContent::Text(text) => Some(text),
            ObjectContent::Image(_) => None,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, ObjectContent::Image(_))
    }

    pub fn type_label(&self) -> &'static str {
        match self {
            ObjectContent::Text(_) => "TEXT",
            ObjectContent::Image(_) => "IMAGE",
        }
    }
}

impl Default for ObjectContent {
    fn default() -> Self {
        ObjectContent::Text(String::new())
    }
}

/// A box placed on the infinite canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasObject {
    /// Unique identifier for this object
    pub id: ObjectId,
    /// Top-left corner in world coordinates (x, y)
    pub position: (f32, f32),
    /// Size in world units (width, height)
    pub size: (f32, f32),
    /// The content this object displays
    pub content: ObjectContent,
    /// Whether the text is being interactively composed
    pub editing: bool,
    /// Transient note left by a failed content request
    pub error: Option<String>,
}

impl CanvasObject {
    /// World-space bounding box.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.0, self.position.1, self.size.0, self.size.1)
    }

    /// Text content, empty for images.
    pub fn text(&self) -> &str {
        self.content.text().unwrap_or_default()
    }
}

// ============================================================================
// Tools & Modes
// ============================================================================

/// Tools in the art-mode tool panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolType {
    #[default]
    Select,
    Move,
    Eraser,
    Text,
    /// Selectable, but draws nothing yet
    Rectangle,
}

impl ToolType {
    pub fn label(&self) -> &'static str {
        match self {
            ToolType::Select => "Select Tool",
            ToolType::Move => "Move Tool",
            ToolType::Eraser => "Eraser Tool",
            ToolType::Text => "Text Tool",
            ToolType::Rectangle => "Rectangle Tool",
        }
    }

    pub fn all() -> &'static [ToolType] {
        &[
            ToolType::Select,
            ToolType::Move,
            ToolType::Eraser,
            ToolType::Text,
            ToolType::Rectangle,
        ]
    }
}

/// Top-level editor mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasMode {
    /// Direct manipulation of boxes on the canvas
    Art,
    /// Prompt bar; the canvas ignores pointer gestures
    #[default]
    Text,
}

/// Keyboard modifiers that influence routing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    /// Command on macOS
    pub platform: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
        platform: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        control: false,
        platform: false,
    };

    pub const CONTROL: Modifiers = Modifiers {
        shift: false,
        control: true,
        platform: false,
    };

    /// Zoom modifier for wheel events (ctrl, or cmd on macOS).
    #[inline]
    pub fn zoom(&self) -> bool {
        self.control || self.platform
    }
}
