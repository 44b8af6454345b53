//! Coordinate conversion between screen and world space.
//!
//! Every gesture handler goes through these functions so the transform
//! formula exists in exactly one place.

use crate::types::Point;
use crate::viewport::ViewportBounds;

/// Context needed for coordinate conversions
pub struct CoordinateContext<'a> {
    pub pan_offset: &'a Point,
    pub zoom: f32,
    pub bounds: &'a ViewportBounds,
}

impl<'a> CoordinateContext<'a> {
    #[inline]
    pub fn new(pan_offset: &'a Point, zoom: f32, bounds: &'a ViewportBounds) -> Self {
        Self {
            pan_offset,
            zoom,
            bounds,
        }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a client position to world coordinates.
    ///
    /// `world = (client - center - pan) / zoom`
    #[inline]
    pub fn screen_to_world(client: Point, ctx: &CoordinateContext<'_>) -> Point {
        let center = ctx.bounds.center();
        Point::new(
            (client.x - center.x - ctx.pan_offset.x) / ctx.zoom,
            (client.y - center.y - ctx.pan_offset.y) / ctx.zoom,
        )
    }

    /// Convert a world position back to client coordinates.
    #[inline]
    pub fn world_to_screen(world: Point, ctx: &CoordinateContext<'_>) -> Point {
        let center = ctx.bounds.center();
        Point::new(
            world.x * ctx.zoom + center.x + ctx.pan_offset.x,
            world.y * ctx.zoom + center.y + ctx.pan_offset.y,
        )
    }

    /// Convert a delta from screen to world (for drag operations)
    #[inline]
    pub fn delta_screen_to_world(delta: (f32, f32), zoom: f32) -> (f32, f32) {
        (delta.0 / zoom, delta.1 / zoom)
    }

    /// Convert a delta from world to screen
    #[inline]
    pub fn delta_world_to_screen(delta: (f32, f32), zoom: f32) -> (f32, f32) {
        (delta.0 * zoom, delta.1 * zoom)
    }
}
