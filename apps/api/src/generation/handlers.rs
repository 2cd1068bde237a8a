//! Axum route handler for the generation pipeline.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::pipeline::{generate_batch, GenerateRequest, GenerateResponse};
use crate::state::AppState;

/// POST /api/v1/generate
///
/// Compiles the prompt and generates the requested number of shots.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.reference_images.is_empty() {
        return Err(AppError::Validation(
            "At least one product reference image is required".to_string(),
        ));
    }

    let response = generate_batch(state.generator.as_ref(), request).await?;
    Ok(Json(response))
}
