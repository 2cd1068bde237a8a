//! Axum route handlers for scene recommendation.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::models::product::ProductInfo;
use crate::recommend::scene_recommender::{self, SceneRecommendation, DEFAULT_LIMIT};
use crate::recommend::semantic::{self, SceneMatchReport};

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub product: ProductInfo,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<SceneRecommendation>,
    pub best_scene: String,
}

#[derive(Debug, Deserialize)]
pub struct SceneMatchRequest {
    pub product: ProductInfo,
    pub scene_id: String,
}

#[derive(Debug, Serialize)]
pub struct SceneMatchResponse {
    pub report: SceneMatchReport,
    pub suitable: bool,
    pub warning: Option<String>,
}

/// POST /api/v1/scenes/recommend
///
/// Ranks scenes for the product; the first entry is the top pick.
pub async fn handle_recommend(Json(request): Json<RecommendRequest>) -> Json<RecommendResponse> {
    let limit = request.limit.unwrap_or(DEFAULT_LIMIT);
    let recommendations = scene_recommender::recommendations(&request.product, limit);
    let best_scene = scene_recommender::best_scene(&request.product);
    Json(RecommendResponse {
        recommendations,
        best_scene,
    })
}

/// POST /api/v1/scenes/match
///
/// Semantic product↔scene affinity check for one chosen scene, with the
/// recommender's suitability verdict and advisory attached.
pub async fn handle_scene_match(
    Json(request): Json<SceneMatchRequest>,
) -> Json<SceneMatchResponse> {
    let report = semantic::match_product_to_scene(&request.product, &request.scene_id);
    let suitable = scene_recommender::is_scene_suitable(&request.product, &request.scene_id);
    let warning = scene_recommender::scene_warning(&request.product, &request.scene_id);
    Json(SceneMatchResponse {
        report,
        suitable,
        warning,
    })
}
