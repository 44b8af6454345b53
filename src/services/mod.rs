//! Remote content services: prompt enhancement and image generation.
//!
//! The canvas never awaits anything itself. A host asks the app for a
//! [`crate::app::PendingRequest`], runs it through a [`ContentService`] with
//! [`dispatch`], and hands the result back to the app to apply.

mod http;
mod payload;

pub use http::{HttpContentService, parse_enhance_response, parse_generate_response};
pub use payload::decode_png;

use crate::app::{PendingRequest, RequestKind};
use crate::error::ServiceResult;
use crate::types::ImageRef;
use serde::{Deserialize, Serialize};

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Body shared by both endpoints.
#[derive(Debug, Serialize)]
pub struct PromptRequest<'a> {
    pub prompt: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct EnhancePromptResponse {
    #[serde(default)]
    pub enhanced_prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateImageResponse {
    #[serde(default)]
    pub image_base64: Option<String>,
}

// =============================================================================
// TRAIT
// =============================================================================

/// A source of generated content.
#[async_trait::async_trait]
pub trait ContentService: Send + Sync {
    /// Rewrite a prompt into a more detailed one.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::ServiceError`] if the request fails or the
    /// response carries no text.
    async fn enhance_prompt(&self, prompt: &str) -> ServiceResult<String>;

    /// Generate a PNG for the prompt.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::ServiceError`] if the request fails or the
    /// payload is not a decodable PNG.
    async fn generate_image(&self, prompt: &str) -> ServiceResult<ImageRef>;
}

/// What a completed request produced.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentReply {
    Text(String),
    Image(ImageRef),
}

/// Run a pending request against `service`.
pub async fn dispatch<S>(service: &S, request: &PendingRequest) -> ServiceResult<ContentReply>
where
    S: ContentService + ?Sized,
{
    match request.kind {
        RequestKind::EnhancePrompt => service.enhance_prompt(&request.prompt).await.map(ContentReply::Text),
        RequestKind::GenerateImage => service.generate_image(&request.prompt).await.map(ContentReply::Image),
    }
}
