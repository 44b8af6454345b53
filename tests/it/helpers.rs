//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestCanvasBuilder` - Builder for a `CanvasApp` in art mode with boxes
//! - `drag` / `click_at` - Pointer sequences in screen coordinates
//! - `FakeContentService` - In-memory `ContentService` with canned replies

#![allow(dead_code)]

use async_trait::async_trait;
use embodi_canvas::config::CanvasConfig;
use embodi_canvas::error::{ServiceError, ServiceResult};
use embodi_canvas::services::ContentService;
use embodi_canvas::types::{CanvasMode, ImageRef, Modifiers, ObjectId, Point, ToolType};
use embodi_canvas::viewport::ViewportBounds;
use embodi_canvas::{CanvasApp, PointerEvent};
use std::sync::Mutex;

/// 800×600 canvas at the window origin; world (0, 0) is screen (400, 300).
pub const BOUNDS: ViewportBounds = ViewportBounds::new(0.0, 0.0, 800.0, 600.0);

// ============================================================================
// TestCanvasBuilder
// ============================================================================

/// Builder for an art-mode canvas with boxes already placed.
///
/// # Example
/// ```ignore
/// let (app, ids) = TestCanvasBuilder::new()
///     .with_box(0.0, 0.0, 120.0, 80.0)
///     .with_box(200.0, 200.0, 120.0, 80.0)
///     .with_zoom(2.0)
///     .build();
/// ```
pub struct TestCanvasBuilder {
    config: CanvasConfig,
    boxes: Vec<(f32, f32, f32, f32)>,
    zoom: f32,
    pan: (f32, f32),
    tool: ToolType,
}

impl Default for TestCanvasBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCanvasBuilder {
    pub fn new() -> Self {
        Self {
            config: CanvasConfig::default(),
            boxes: Vec::new(),
            zoom: 1.0,
            pan: (0.0, 0.0),
            tool: ToolType::Select,
        }
    }

    pub fn with_config(mut self, config: CanvasConfig) -> Self {
        self.config = config;
        self
    }

    /// Place a box at world `(x, y)` with size `(w, h)`.
    pub fn with_box(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.boxes.push((x, y, w, h));
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_pan(mut self, x: f32, y: f32) -> Self {
        self.pan = (x, y);
        self
    }

    pub fn with_tool(mut self, tool: ToolType) -> Self {
        self.tool = tool;
        self
    }

    /// Build the app. Boxes are drawn with the text tool at zoom 1, then
    /// editing and selection are cleared and the view is applied.
    pub fn build(self) -> (CanvasApp, Vec<ObjectId>) {
        let mut app = CanvasApp::new(self.config, BOUNDS);
        app.set_mode(CanvasMode::Art);
        app.set_tool(ToolType::Text);

        let mut ids = Vec::new();
        for (x, y, w, h) in self.boxes {
            let from = world_to_screen(&app, x, y);
            let to = world_to_screen(&app, x + w, y + h);
            let id = drag(&mut app, from, to, Modifiers::NONE).expect("box drawn");
            ids.push(id);
        }
        app.end_all_editing();
        app.clear_selection();

        app.set_tool(self.tool);
        app.viewport_mut().set_zoom(self.zoom);
        app.viewport_mut().pan_offset = Point::new(self.pan.0, self.pan.1);
        (app, ids)
    }
}

/// Empty art-mode canvas with the select tool.
pub fn empty_canvas() -> CanvasApp {
    TestCanvasBuilder::new().build().0
}

// ============================================================================
// Pointer shorthands
// ============================================================================

pub fn world_to_screen(app: &CanvasApp, x: f32, y: f32) -> (f32, f32) {
    let p = app.viewport().world_to_screen(Point::new(x, y));
    (p.x, p.y)
}

pub fn event(at: (f32, f32), modifiers: Modifiers) -> PointerEvent {
    PointerEvent::new(at.0, at.1).with_modifiers(modifiers)
}

/// Down at `from`, one move to `to`, up at `to` (screen coordinates).
/// Returns the id of a box created by the gesture, if any.
pub fn drag(app: &mut CanvasApp, from: (f32, f32), to: (f32, f32), modifiers: Modifiers) -> Option<ObjectId> {
    app.on_pointer_down(event(from, modifiers));
    app.on_pointer_move(event(to, modifiers));
    app.on_pointer_up(event(to, modifiers))
}

/// Down, up and click at the same screen point.
pub fn click_at(app: &mut CanvasApp, at: (f32, f32), modifiers: Modifiers) {
    app.on_pointer_down(event(at, modifiers));
    app.on_pointer_up(event(at, modifiers));
    app.on_click(event(at, modifiers));
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

// ============================================================================
// FakeContentService
// ============================================================================

/// Canned-reply content service that records every prompt it sees.
pub struct FakeContentService {
    enhanced: Option<String>,
    image: Option<ImageRef>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeContentService {
    pub fn enhancing(text: &str) -> Self {
        Self {
            enhanced: Some(text.to_string()),
            image: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn generating(image: ImageRef) -> Self {
        Self {
            enhanced: None,
            image: Some(image),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with a 503.
    pub fn failing() -> Self {
        Self {
            enhanced: None,
            image: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, prompt: &str) {
        self.prompts.lock().unwrap().push(prompt.to_string());
    }
}

fn unavailable() -> ServiceError {
    ServiceError::Status {
        status: 503,
        body: "unavailable".to_string(),
    }
}

#[async_trait]
impl ContentService for FakeContentService {
    async fn enhance_prompt(&self, prompt: &str) -> ServiceResult<String> {
        self.record(prompt);
        self.enhanced.clone().ok_or_else(unavailable)
    }

    async fn generate_image(&self, prompt: &str) -> ServiceResult<ImageRef> {
        self.record(prompt);
        self.image.clone().ok_or_else(unavailable)
    }
}

pub fn sample_image() -> ImageRef {
    ImageRef {
        uri: "data:image/png;base64,AAAA".to_string(),
        width: 64,
        height: 64,
    }
}
