//! Prompt enhancement and image generation, split into begin/complete so
//! nothing is borrowed across the await.
//!
//! Only the newest request per object counts. A response for an object
//! that was deleted, or that a later request superseded, is dropped.

use super::CanvasApp;
use crate::error::ServiceResult;
use crate::services::ContentReply;
use crate::types::{ObjectContent, ObjectId};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    EnhancePrompt,
    GenerateImage,
}

/// A request the host should run against a content service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    pub request_id: Uuid,
    pub target: ObjectId,
    pub prompt: String,
    pub kind: RequestKind,
}

/// What completing a request did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The reply replaced the object's content
    Applied,
    /// The service failed; the object keeps its content and an error note
    Failed(String),
    /// Target gone or superseded; nothing changed
    Dropped,
}

impl CanvasApp {
    /// Start enhancing the prompt in the first selected text box.
    /// `None` when nothing usable is selected.
    pub fn request_prompt_enhancement(&mut self) -> Option<PendingRequest> {
        self.begin_request(RequestKind::EnhancePrompt)
    }

    /// Start generating an image from the first selected text box.
    /// `None` when nothing usable is selected.
    pub fn request_image_generation(&mut self) -> Option<PendingRequest> {
        self.begin_request(RequestKind::GenerateImage)
    }

    /// Whether a request is outstanding for `id`.
    pub fn is_pending(&self, id: ObjectId) -> bool {
        self.in_flight.contains_key(&id)
    }

    fn begin_request(&mut self, kind: RequestKind) -> Option<PendingRequest> {
        let (target, prompt) = self.request_source()?;
        let request_id = Uuid::new_v4();
        self.in_flight.insert(target, request_id);
        info!(%target, %request_id, ?kind, "Content request started");
        Some(PendingRequest {
            request_id,
            target,
            prompt,
            kind,
        })
    }

    /// First selected object in creation order, if it holds non-blank text.
    fn request_source(&self) -> Option<(ObjectId, String)> {
        let target = self.canvas.selection.sorted().into_iter().next()?;
        let text = self.canvas.board.get(target)?.content.text()?;
        if text.trim().is_empty() {
            return None;
        }
        Some((target, text.to_string()))
    }

    /// Apply the result of a request started with `request_*`.
    pub fn complete_request(
        &mut self,
        request: PendingRequest,
        result: ServiceResult<ContentReply>,
    ) -> RequestOutcome {
        let target = request.target;
        if self.in_flight.get(&target) != Some(&request.request_id) {
            warn!(%target, request_id = %request.request_id, "Dropping superseded response");
            return RequestOutcome::Dropped;
        }
        self.in_flight.remove(&target);
        if !self.canvas.board.contains(target) {
            warn!(%target, request_id = %request.request_id, "Dropping response for deleted object");
            return RequestOutcome::Dropped;
        }

        match (request.kind, result) {
            (RequestKind::EnhancePrompt, Ok(ContentReply::Text(text))) => {
                if self.set_text(target, text) {
                    info!(%target, "Prompt enhanced");
                    RequestOutcome::Applied
                } else {
                    warn!(%target, "Object no longer holds text; enhancement dropped");
                    RequestOutcome::Dropped
                }
            }
            (RequestKind::GenerateImage, Ok(ContentReply::Image(image))) => {
                self.canvas.board.set_content(target, ObjectContent::Image(image));
                info!(%target, "Image generated");
                RequestOutcome::Applied
            }
            (kind, Ok(_)) => self.fail_request(target, format!("unexpected reply for {kind:?}")),
            (_, Err(e)) => self.fail_request(target, e.to_string()),
        }
    }

    fn fail_request(&mut self, target: ObjectId, message: String) -> RequestOutcome {
        warn!(%target, error = %message, "Content request failed");
        self.canvas.board.set_error(target, message.clone());
        RequestOutcome::Failed(message)
    }
}
