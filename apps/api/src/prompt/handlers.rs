//! Axum route handlers for prompt compilation.

use axum::Json;
use serde::Serialize;

use crate::prompt::assemble::PromptConfig;
use crate::prompt::builder::PromptRequest;

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub preview: String,
}

/// POST /api/v1/prompt/build
///
/// Compiles the request into the final prompt paragraph, the negative
/// prompt, and the per-layer breakdown. Pure computation — no AI calls.
pub async fn handle_build(Json(request): Json<PromptRequest>) -> Json<PromptConfig> {
    Json(request.build())
}

/// POST /api/v1/prompt/preview
///
/// Human-readable dump of each enabled layer and the final prompt.
pub async fn handle_preview(Json(request): Json<PromptRequest>) -> Json<PreviewResponse> {
    Json(PreviewResponse {
        preview: request.preview(),
    })
}
