//! HTTP client for the content orchestrator.
//!
//! Thin wrapper over `POST /enhance-prompt` and `POST /generate-image`.
//! Response parsing is split into pure functions for testability.

use super::{ContentService, EnhancePromptResponse, GenerateImageResponse, PromptRequest, decode_png};
use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::types::ImageRef;
use std::time::Duration;
use tracing::{debug, error};

const ENHANCE_PATH: &str = "/enhance-prompt";
const GENERATE_PATH: &str = "/generate-image";

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpContentService {
    http: reqwest::Client,
    base_url: String,
}

impl HttpContentService {
    /// # Errors
    ///
    /// Returns [`ServiceError::ClientBuild`] if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &ServiceConfig) -> ServiceResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| {
                error!(error = %e, "Failed to build HTTP client");
                ServiceError::ClientBuild(e.to_string())
            })?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_prompt(&self, path: &str, prompt: &str) -> ServiceResult<String> {
        let url = self.endpoint(path);
        debug!(%url, "Posting prompt");

        let response = self
            .http
            .post(&url)
            .json(&PromptRequest { prompt })
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        if !(200..300).contains(&status) {
            return Err(ServiceError::Status { status, body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl ContentService for HttpContentService {
    async fn enhance_prompt(&self, prompt: &str) -> ServiceResult<String> {
        let body = self.post_prompt(ENHANCE_PATH, prompt).await?;
        parse_enhance_response(&body)
    }

    async fn generate_image(&self, prompt: &str) -> ServiceResult<ImageRef> {
        let body = self.post_prompt(GENERATE_PATH, prompt).await?;
        parse_generate_response(&body)
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract the enhanced prompt. A missing or blank value is an error so
/// the caller leaves the original text alone.
pub fn parse_enhance_response(json: &str) -> ServiceResult<String> {
    let parsed: EnhancePromptResponse =
        serde_json::from_str(json).map_err(|e| ServiceError::Decode(e.to_string()))?;
    parsed
        .enhanced_prompt
        .filter(|text| !text.trim().is_empty())
        .ok_or(ServiceError::EmptyResponse { field: "enhanced_prompt" })
}

/// Extract and validate the generated image.
pub fn parse_generate_response(json: &str) -> ServiceResult<ImageRef> {
    let parsed: GenerateImageResponse =
        serde_json::from_str(json).map_err(|e| ServiceError::Decode(e.to_string()))?;
    let encoded = parsed
        .image_base64
        .filter(|data| !data.trim().is_empty())
        .ok_or(ServiceError::EmptyResponse { field: "image_base64" })?;
    decode_png(&encoded)
}
