//! Engine-wide constants.
//!
//! Centralizes magic numbers so the gesture code and the tests agree on
//! the same values. Most of these are the defaults for [`crate::config::CanvasConfig`].

// ============================================================================
// Box Geometry
// ============================================================================

/// Minimum width of any box in world units
pub const MIN_BOX_WIDTH: f32 = 100.0;

/// Minimum height of any box in world units
pub const MIN_BOX_HEIGHT: f32 = 60.0;

/// Side of the square resize handle at a box's bottom-right corner, in screen pixels
pub const RESIZE_HANDLE_SIZE: f32 = 16.0;

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 10.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Scale change per pixel of wheel delta while the zoom modifier is held
pub const ZOOM_SENSITIVITY: f32 = 0.002;

// ============================================================================
// Input Handling
// ============================================================================

/// Maximum pointer travel (screen pixels) for a down/up pair to count as a click
pub const CLICK_SLOP: f32 = 3.0;

// ============================================================================
// Remote Services
// ============================================================================

/// Base URL of the content orchestrator
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";

/// Total request timeout for a content service call
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Connect timeout for a content service call
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Prefix turning a base64 PNG payload into a displayable image reference
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

// ============================================================================
// 3D Preview
// ============================================================================

/// Extent the longest mesh dimension is scaled to when framing a preview
pub const PREVIEW_FIT_EXTENT: f32 = 2.0;
