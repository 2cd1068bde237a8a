//! Axum route handler for product analysis.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::insight::engine::{self, ProductInsight};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Base64 data URL (or raw base64) of the product photo.
    pub image: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Full analysis runs only for the first uploaded image; later uploads
    /// skip the call to keep analysis cost proportional to products, not
    /// photos.
    #[serde(default = "default_first_image")]
    pub first_image: bool,
}

fn default_first_image() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analyzed: bool,
    pub insight: Option<ProductInsight>,
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.image.trim().is_empty() {
        return Err(AppError::Validation("image cannot be empty".to_string()));
    }

    if !request.first_image {
        info!("Skipping analysis for non-first image");
        return Ok(Json(AnalyzeResponse {
            analyzed: false,
            insight: None,
        }));
    }

    let insight = engine::analyze_product(
        state.generator.as_ref(),
        &request.image,
        request.name.as_deref(),
        request.description.as_deref(),
    )
    .await?;

    info!(
        "Product analyzed: category={}, {} features",
        insight.mapped_category,
        insight.features.len()
    );

    Ok(Json(AnalyzeResponse {
        analyzed: true,
        insight: Some(insight),
    }))
}
