//! Single test binary entry point.
//!
//! All integration tests link into one binary to keep link time down.
//!
//! Structure:
//! - helpers: `TestCanvasBuilder` and pointer/drag shorthands
//! - unit: Single-component tests through the public API
//! - integration: Multi-component gesture and content workflows

mod helpers;
mod unit;
