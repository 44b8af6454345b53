//! Pointer capture held for the lifetime of one gesture.
//!
//! While a gesture is active the host must route move/up events from the
//! whole window, not just the canvas element, so a release outside the
//! canvas still ends the gesture. The host polls
//! [`crate::app::CanvasApp::is_capturing`] to attach or detach those
//! window-level listeners. The capture is dropped on pointer-up, on focus
//! loss, and when the app itself is dropped.

use crate::input::state::GestureKind;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug)]
pub struct InputCapture {
    gesture: GestureKind,
    acquired_at: Instant,
}

impl InputCapture {
    pub(crate) fn acquire(gesture: GestureKind) -> Self {
        debug!(?gesture, "Input capture acquired");
        Self {
            gesture,
            acquired_at: Instant::now(),
        }
    }

    /// The gesture this capture was taken for.
    pub fn gesture(&self) -> GestureKind {
        self.gesture
    }

    pub fn held_for(&self) -> Duration {
        self.acquired_at.elapsed()
    }
}

impl Drop for InputCapture {
    fn drop(&mut self) {
        debug!(
            gesture = ?self.gesture,
            held_ms = self.held_for().as_millis() as u64,
            "Input capture released"
        );
    }
}
