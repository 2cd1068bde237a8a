//! Generated-image result types shared by the gemini client and the
//! generation pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::settings::GenerationSettings;

/// One generated image. `image_url` is a data URL carrying the inline
/// payload returned by the image model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub id: Uuid,
    pub image_url: String,
    pub prompt: String,
    /// Scene id the image was generated for. Filled by the pipeline.
    pub scene: String,
    pub model: String,
    pub created_at: DateTime<Utc>,
}

/// Request handed to the image-generation collaborator: one coherent
/// natural-language instruction plus a comma-joined exclusion list and the
/// reference images the model should transfer appearance from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRequest {
    pub prompt: String,
    #[serde(default)]
    pub negative_prompt: String,
    /// Base64 data URLs (or raw base64) of the product / reference shots.
    #[serde(default)]
    pub reference_images: Vec<String>,
    #[serde(default)]
    pub settings: GenerationSettings,
}
