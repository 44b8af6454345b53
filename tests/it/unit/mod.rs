//! Unit tests for the canvas engine.

mod board_tests;
mod config_tests;
mod mesh_preview_tests;
mod services_tests;
