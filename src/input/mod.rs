//! Pointer and wheel input handling for the canvas.
//!
//! This module implements all pointer interaction logic: drawing new boxes,
//! rectangle selection, moving the selection, and resizing a box from its
//! handle.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`GestureState`) to track
//! the current interaction. Exactly one gesture can be active; while it is,
//! an [`InputCapture`] is held so the host keeps routing window-level
//! move/up events to the canvas.
//!
//! ## Modules
//!
//! - `coords` - Screen/world coordinate conversion
//! - `state` - Gesture state machine enum and helper methods
//! - `capture` - Capture guard held for the duration of a gesture
//! - `events` - Host-agnostic pointer, wheel and key events
//! - `mouse_down` - Pointer down routing (handle, draw, move, marquee)
//! - `drag` - Pointer move handling (preview, move, resize, hover)
//! - `mouse_up` - Pointer up commit, clicks, focus loss
//! - `transform` - Wheel pan and zoom

mod capture;
pub mod coords;
mod drag;
mod events;
mod mouse_down;
mod mouse_up;
mod state;
mod transform;

pub use capture::InputCapture;
pub use events::{Key, PointerEvent, WheelEvent};
pub use state::{CapturedPosition, GestureKind, GestureState};
