//! Application module - the CanvasApp state and its operations.
//!
//! - `state` - The CanvasApp struct definition and sub-structs
//! - `tools` - Mode and tool switching
//! - `editing` - Deletion, keyboard, text editing entry points
//! - `content` - Remote content requests (begin/complete)
//!
//! Pointer and wheel handlers live in [`crate::input`] as further
//! `impl CanvasApp` blocks.

mod content;
mod editing;
mod state;
mod tools;

pub use content::{PendingRequest, RequestKind, RequestOutcome};
pub use state::{CanvasApp, CanvasState, ToolState};
