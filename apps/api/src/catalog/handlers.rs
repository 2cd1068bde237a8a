//! Axum route handlers for the catalog (scenes and categories).

use axum::{
    extract::Path,
    Json,
};
use serde::Serialize;

use crate::catalog::categories::{self, ProductCategory};
use crate::catalog::scenes::{self, Scene};
use crate::errors::AppError;

#[derive(Debug, Serialize)]
pub struct SceneListResponse {
    pub scenes: &'static [Scene],
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: &'static [ProductCategory],
}

/// GET /api/v1/scenes
pub async fn handle_list_scenes() -> Json<SceneListResponse> {
    Json(SceneListResponse {
        scenes: scenes::scene_list(),
    })
}

/// GET /api/v1/scenes/:id
pub async fn handle_get_scene(Path(id): Path<String>) -> Result<Json<&'static Scene>, AppError> {
    scenes::scene_by_id(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Scene '{id}' not found")))
}

/// GET /api/v1/categories
pub async fn handle_list_categories() -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        categories: categories::CATEGORIES,
    })
}
