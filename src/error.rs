//! Error types for the engine's fallible edges.
//!
//! Gesture handling itself never fails: degenerate geometry is clamped to the
//! minimum box size. Errors only come from the remote content services and
//! from loading configuration.

use thiserror::Error;

/// Failures talking to the prompt-enhancement or image-generation service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The request could not be sent or the connection failed
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status
    #[error("service returned status {status}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON shape
    #[error("malformed response: {0}")]
    Decode(String),

    /// The response parsed but carried no usable payload
    #[error("response contained no {field}")]
    EmptyResponse { field: &'static str },

    /// The generated image could not be decoded
    #[error("invalid image payload: {0}")]
    InvalidImage(String),

    /// The HTTP client could not be constructed
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

impl ServiceError {
    /// Whether retrying the same request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Request(_) | Self::Status { status: 429 | 500..=599, .. }
        )
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ServiceError::Decode(e.to_string())
        } else {
            ServiceError::Request(e.to_string())
        }
    }
}

/// Errors loading or validating [`crate::config::CanvasConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of its permitted range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Problems parsing a textual mesh for the 3D preview. The preview falls
/// back to its placeholder on any of these.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MeshError {
    /// No vertex or face lines at all
    #[error("mesh has no geometry")]
    NoGeometry,

    #[error("line {line}: malformed vertex")]
    InvalidVertex { line: usize },

    #[error("line {line}: malformed face")]
    InvalidFace { line: usize },

    #[error("line {line}: vertex index {index} out of range")]
    IndexOutOfRange { line: usize, index: i64 },
}

/// Result type alias for service calls
pub type ServiceResult<T> = Result<T, ServiceError>;
