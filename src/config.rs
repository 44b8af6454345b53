//! Engine configuration.
//!
//! Defaults come from [`crate::constants`]. A JSON file can override any
//! subset of fields, and a couple of environment variables override the
//! service endpoint for local development:
//!
//! - `EMBODI_SERVICE_URL`: base URL of the content orchestrator
//! - `EMBODI_REQUEST_TIMEOUT_SECS`: total request timeout

use crate::constants::*;
use crate::error::ConfigError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_SERVICE_URL: &str = "EMBODI_SERVICE_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "EMBODI_REQUEST_TIMEOUT_SECS";

/// Tunables for geometry, zoom and the remote services.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Minimum box size (width, height) in world units
    pub min_box_size: (f32, f32),
    /// Resize handle side in screen pixels
    pub resize_handle_size: f32,
    /// Lowest zoom level
    pub min_zoom: f32,
    /// Highest zoom level
    pub max_zoom: f32,
    /// Scale change per pixel of wheel delta
    pub zoom_sensitivity: f32,
    /// Pointer travel below which a down/up pair is a click
    pub click_slop: f32,
    /// Content service settings
    pub service: ServiceConfig,
}

/// Where and how to reach the content orchestrator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            min_box_size: (MIN_BOX_WIDTH, MIN_BOX_HEIGHT),
            resize_handle_size: RESIZE_HANDLE_SIZE,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_sensitivity: ZOOM_SENSITIVITY,
            click_slop: CLICK_SLOP,
            service: ServiceConfig::default(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl CanvasConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CanvasConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Apply environment overrides on top of the current values.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`, keyed by the `ENV_*` names.
    /// An unparsable timeout is ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_SERVICE_URL) {
            self.service.base_url = url;
        }
        if let Some(secs) = lookup(ENV_REQUEST_TIMEOUT_SECS).and_then(|v| v.trim().parse::<u64>().ok()) {
            self.service.request_timeout_secs = secs;
        }
        self.service.base_url = self.service.base_url.trim_end_matches('/').to_string();
        self
    }

    /// Reject values that would break the engine's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = self.min_box_size;
        if w <= 0.0 || h <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_box_size must be positive, got ({w}, {h})"
            )));
        }
        if self.min_zoom <= 0.0 || self.min_zoom > self.max_zoom {
            return Err(ConfigError::Invalid(format!(
                "zoom bounds must satisfy 0 < min <= max, got [{}, {}]",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.zoom_sensitivity <= 0.0 {
            return Err(ConfigError::Invalid(
                "zoom_sensitivity must be positive".to_string(),
            ));
        }
        if self.resize_handle_size <= 0.0 {
            return Err(ConfigError::Invalid(
                "resize_handle_size must be positive".to_string(),
            ));
        }
        if self.click_slop < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "click_slop must not be negative, got {}",
                self.click_slop
            )));
        }
        if self.service.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "service.base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Default location of the config file (`<config dir>/embodi/canvas.json`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("embodi").join("canvas.json"))
}

/// Load the config from `path` (or the default location), falling back to
/// defaults when no file exists, then apply environment overrides and
/// validate the result.
pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<CanvasConfig> {
    let path = path.map(Path::to_path_buf).or_else(default_config_path);
    let config = match path {
        Some(path) if path.exists() => CanvasConfig::from_file(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        _ => {
            tracing::debug!("No config file found, using defaults");
            CanvasConfig::default()
        }
    };
    let config = config.with_env_overrides();
    config
        .validate()
        .context("invalid config after environment overrides")?;
    Ok(config)
}
