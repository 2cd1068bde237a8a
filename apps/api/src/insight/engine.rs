#![allow(dead_code)]

//! Insight engine — runs the vision-analysis call and normalizes its
//! output before it touches product state.
//!
//! The model's JSON is treated as untrusted: category keys are validated
//! against the registry, and missing scene descriptions / size information
//! are filled with sensible defaults instead of failing the upload flow.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{categories, scenes};
use crate::errors::AppError;
use crate::gemini::ImageGenerator;
use crate::insight::prompts::{context_line, ANALYZE_PROMPT_TEMPLATE};
use crate::models::product::{ProductInfo, SizeCategory};

/// Category key used when the model maps to something we do not know.
/// Electronics is the most generic profile in the registry.
const FALLBACK_CATEGORY: &str = "electronics";

/// Structured analysis of one product photo. Field names follow the
/// analysis collaborator's camelCase JSON contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInsight {
    pub category_name: String,
    pub mapped_category: String,
    pub primary_material: String,
    pub surface_texture: String,
    pub reflectiveness: String,
    pub color_palette: Vec<String>,
    pub features: Vec<String>,
    pub target_audience: String,
    pub predicted_style: String,
    pub suggested_scenes: Vec<String>,
    pub generated_prompts: Vec<String>,
    pub scene_descriptions: HashMap<String, String>,
    pub size_category: Option<SizeCategory>,
    pub size_reference: String,
}

impl ProductInsight {
    /// Merges the analysis into caller-owned product state. User-typed
    /// name/description are never overwritten; analysis-derived fields are.
    pub fn apply_to(&self, product: &mut ProductInfo) {
        product.category = self.mapped_category.clone();
        if product.target_audience.is_empty() {
            product.target_audience = self.target_audience.clone();
        }
        if product.style.is_empty() {
            product.style = self.predicted_style.clone();
        }
        if product.features.is_empty() {
            product.features = self.features.clone();
        }
        product.color_palette = self.color_palette.clone();
        product.material_prompts = self.generated_prompts.clone();
        product.scene_descriptions = self.scene_descriptions.clone();
        product.size_category = self.size_category;
        product.size_reference = self.size_reference.clone();
    }
}

/// Size class a category most commonly implies, used when the model omits
/// or invents one.
fn size_for_category(category_id: &str) -> SizeCategory {
    match category_id {
        "electronics" => SizeCategory::Handheld,
        "fashion" => SizeCategory::Tabletop,
        "beauty" => SizeCategory::Palm,
        "home" => SizeCategory::Tabletop,
        "food" => SizeCategory::Handheld,
        "sports" => SizeCategory::Handheld,
        "jewelry" => SizeCategory::Pocket,
        "baby" => SizeCategory::Handheld,
        "office" => SizeCategory::Handheld,
        _ => SizeCategory::Handheld,
    }
}

/// Validates and repairs a raw insight so downstream code never sees an
/// unknown category or holes in the per-scene description map.
pub fn normalize(mut insight: ProductInsight) -> ProductInsight {
    if categories::category_by_id(&insight.mapped_category).is_none() {
        warn!(
            "Analysis returned unknown category '{}', defaulting to '{}'",
            insight.mapped_category, FALLBACK_CATEGORY
        );
        insight.mapped_category = FALLBACK_CATEGORY.to_string();
    }

    let generic = insight
        .generated_prompts
        .first()
        .cloned()
        .unwrap_or_else(|| "professional product".to_string());
    for scene in scenes::scene_list() {
        insight
            .scene_descriptions
            .entry(scene.id.to_string())
            .or_insert_with(|| generic.clone());
    }

    if insight.size_category.is_none() {
        insight.size_category = Some(size_for_category(&insight.mapped_category));
    }
    if insight.size_reference.trim().is_empty() {
        insight.size_reference = insight
            .size_category
            .map(|size| size.default_reference().to_string())
            .unwrap_or_default();
    }

    insight
}

/// Runs the vision analysis for one product photo and returns a normalized
/// insight.
pub async fn analyze_product(
    generator: &dyn ImageGenerator,
    image: &str,
    name: Option<&str>,
    description: Option<&str>,
) -> Result<ProductInsight, AppError> {
    let prompt =
        ANALYZE_PROMPT_TEMPLATE.replace("{context}", &context_line(name, description));
    let images = vec![image.to_string()];

    let value = generator
        .analyze_json(&prompt, &images)
        .await
        .map_err(|e| AppError::Upstream(format!("Product analysis failed: {e}")))?;

    let insight: ProductInsight = serde_json::from_value(value)
        .map_err(|e| AppError::Upstream(format!("Product analysis returned unusable JSON: {e}")))?;

    Ok(normalize(insight))
}
