//! Pan/zoom state of the single canvas viewport.
//!
//! World origin sits at the screen center of the viewport element. The
//! element's bounds are supplied by the host and may change on every
//! window resize, so conversions always read the latest bounds.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_SENSITIVITY};
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Screen rectangle of the canvas element, as a bounding client rect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportBounds {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Screen-space center of the element.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Pan offset and zoom scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Pan offset in screen pixels
    pub pan_offset: Point,
    /// Zoom scale, always within `[min_zoom, max_zoom]`
    zoom: f32,
    /// Last known element bounds
    pub bounds: ViewportBounds,
    min_zoom: f32,
    max_zoom: f32,
    sensitivity: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewportBounds::default())
    }
}

impl Viewport {
    pub fn new(bounds: ViewportBounds) -> Self {
        Self {
            pan_offset: Point::default(),
            zoom: DEFAULT_ZOOM,
            bounds,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            sensitivity: ZOOM_SENSITIVITY,
        }
    }

    /// Override zoom limits and wheel sensitivity (from config).
    pub fn with_zoom_limits(mut self, min_zoom: f32, max_zoom: f32, sensitivity: f32) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.sensitivity = sensitivity;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
        self
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the zoom directly, clamped to the allowed range.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Update the element bounds after a layout change.
    pub fn set_bounds(&mut self, bounds: ViewportBounds) {
        self.bounds = bounds;
    }

    /// Add raw pixel deltas to the pan offset. Independent of zoom.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.pan_offset = self.pan_offset.offset(dx, dy);
    }

    /// Apply a wheel delta as zoom. Anchored at the viewport center, not
    /// at the cursor. Returns true when the scale changed.
    pub fn zoom_by_wheel(&mut self, delta_y: f32) -> bool {
        let old = self.zoom;
        self.set_zoom(old - delta_y * self.sensitivity);
        (self.zoom - old).abs() > f32::EPSILON
    }

    #[inline]
    pub fn context(&self) -> CoordinateContext<'_> {
        CoordinateContext::new(&self.pan_offset, self.zoom, &self.bounds)
    }

    pub fn screen_to_world(&self, client: Point) -> Point {
        CoordinateConverter::screen_to_world(client, &self.context())
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        CoordinateConverter::world_to_screen(world, &self.context())
    }

    /// Convert a screen-pixel drag delta to world units.
    pub fn delta_to_world(&self, dx: f32, dy: f32) -> (f32, f32) {
        CoordinateConverter::delta_screen_to_world((dx, dy), self.zoom)
    }
}
