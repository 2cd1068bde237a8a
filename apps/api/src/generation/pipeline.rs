//! Generation pipeline — orchestrates one batch of product shots.
//!
//! Flow: resolve side-channel conflicts → compile prompt → call the image
//! model once per requested shot → stamp results with the scene.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::gemini::ImageGenerator;
use crate::models::generation::{GenerationResult, ImageRequest};
use crate::prompt::builder::PromptRequest;

/// Request for a batch generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    #[serde(flatten)]
    pub prompt: PromptRequest,
    /// Product photos and any fusion/consistency reference shots.
    #[serde(default)]
    pub reference_images: Vec<String>,
    /// True when the active fusion mode already stages a model — the plain
    /// model channel is dropped to avoid contradictory instructions.
    #[serde(default)]
    pub fusion_includes_model: bool,
    /// Caller-edited prompt override: used verbatim instead of compiling.
    #[serde(default)]
    pub edited_prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub task_id: Uuid,
    pub final_prompt: String,
    pub negative_prompt: String,
    pub results: Vec<GenerationResult>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

/// Applies the model/fusion conflict rule, returning the effective prompt
/// request for compilation.
pub fn resolve_side_channels(mut prompt: PromptRequest, fusion_includes_model: bool) -> PromptRequest {
    if fusion_includes_model && !prompt.fusion_prompt.is_empty() && !prompt.model_prompt.is_empty() {
        info!("Fusion stages a model; dropping the plain model channel");
        prompt.model_prompt.clear();
    }
    prompt
}

/// Runs the batch. Individual shot failures are logged and skipped; the
/// batch errors only when every shot failed.
pub async fn generate_batch(
    generator: &dyn ImageGenerator,
    request: GenerateRequest,
) -> Result<GenerateResponse, AppError> {
    let started_at = Utc::now();
    let task_id = Uuid::new_v4();

    let prompt_request = resolve_side_channels(request.prompt, request.fusion_includes_model);
    let config = prompt_request.build();

    let final_prompt = request
        .edited_prompt
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| config.final_prompt.clone());

    let settings = prompt_request.settings.clone().unwrap_or_default();
    let quantity = settings.quantity.max(1);

    info!(
        "Task {task_id}: generating {quantity} shot(s) for scene '{}'",
        prompt_request.scene
    );

    let image_request = ImageRequest {
        prompt: final_prompt.clone(),
        negative_prompt: config.negative_prompt.clone(),
        reference_images: request.reference_images,
        settings,
    };

    let mut results: Vec<GenerationResult> = Vec::new();
    let mut last_error: Option<String> = None;

    for shot in 0..quantity {
        match generator.generate(&image_request).await {
            Ok(mut generated) => {
                for result in &mut generated {
                    result.scene = prompt_request.scene.clone();
                }
                results.extend(generated);
            }
            Err(e) => {
                warn!("Task {task_id}: shot {}/{} failed: {e}", shot + 1, quantity);
                last_error = Some(e.to_string());
            }
        }
    }

    if results.is_empty() {
        return Err(AppError::Upstream(format!(
            "Image generation produced no images: {}",
            last_error.unwrap_or_else(|| "no shots attempted".to_string())
        )));
    }

    info!("Task {task_id}: {} image(s) generated", results.len());

    Ok(GenerateResponse {
        task_id,
        final_prompt,
        negative_prompt: config.negative_prompt,
        results,
        started_at,
        completed_at: Utc::now(),
    })
}
