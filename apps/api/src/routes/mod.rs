pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog_handlers;
use crate::generation::handlers as generation_handlers;
use crate::insight::handlers as insight_handlers;
use crate::prompt::handlers as prompt_handlers;
use crate::recommend::handlers as recommend_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/scenes", get(catalog_handlers::handle_list_scenes))
        .route("/api/v1/scenes/:id", get(catalog_handlers::handle_get_scene))
        .route(
            "/api/v1/categories",
            get(catalog_handlers::handle_list_categories),
        )
        // Recommendation
        .route(
            "/api/v1/scenes/recommend",
            post(recommend_handlers::handle_recommend),
        )
        .route(
            "/api/v1/scenes/match",
            post(recommend_handlers::handle_scene_match),
        )
        // Prompt compilation
        .route("/api/v1/prompt/build", post(prompt_handlers::handle_build))
        .route(
            "/api/v1/prompt/preview",
            post(prompt_handlers::handle_preview),
        )
        // Analysis + generation
        .route("/api/v1/analyze", post(insight_handlers::handle_analyze))
        .route(
            "/api/v1/generate",
            post(generation_handlers::handle_generate),
        )
        .with_state(state)
}
