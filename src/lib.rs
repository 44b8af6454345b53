//! Headless interaction engine for an infinite canvas of text and image
//! boxes.
//!
//! The host feeds pointer, wheel, key and focus events into a
//! [`CanvasApp`] and renders whatever state it reads back. Nothing here
//! draws or blocks.
//!
//! ```ignore
//! let mut app = CanvasApp::new(config::load_or_default(None)?, bounds);
//! app.set_mode(CanvasMode::Art);
//! app.on_pointer_down(PointerEvent::new(120.0, 80.0));
//! app.on_pointer_move(PointerEvent::new(300.0, 200.0));
//! app.on_pointer_up(PointerEvent::new(300.0, 200.0));
//! ```

pub mod app;
pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod logging;
pub mod mesh_preview;
pub mod perf;
pub mod selection;
pub mod services;
pub mod spatial_index;
pub mod text_edit;
pub mod types;
pub mod viewport;

pub use app::{CanvasApp, PendingRequest, RequestKind, RequestOutcome};
pub use config::CanvasConfig;
pub use error::{ConfigError, MeshError, ServiceError, ServiceResult};
pub use input::{GestureKind, GestureState, Key, PointerEvent, WheelEvent};
pub use types::{CanvasMode, CanvasObject, ImageRef, Modifiers, ObjectContent, ObjectId, Point, Rect, ToolType};
pub use viewport::{Viewport, ViewportBounds};
