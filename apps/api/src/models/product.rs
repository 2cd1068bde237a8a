#![allow(dead_code)]

//! Product state — the mutable aggregate describing the photographed subject.
//!
//! Populated incrementally: text fields come from the user, the analysis
//! fields (category mapping, material prompts, per-scene descriptions, size)
//! arrive from the vision-analysis collaborator as images are uploaded.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Physical size class of the product, used for scale control in
/// environmental scenes. Derived from image analysis, never user-typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Pocket,
    Palm,
    Handheld,
    Tabletop,
    Desktop,
    Furniture,
    Large,
}

impl SizeCategory {
    /// Fallback wording when the analysis did not supply a size reference.
    pub fn default_reference(self) -> &'static str {
        match self {
            SizeCategory::Pocket => "a compact pocket-sized item",
            SizeCategory::Palm => "fits comfortably in one palm",
            SizeCategory::Handheld => "a handheld product easy to carry",
            SizeCategory::Tabletop => "a tabletop item of moderate size",
            SizeCategory::Desktop => "a desktop-sized product",
            SizeCategory::Furniture => "a furniture-scale item",
            SizeCategory::Large => "a large product",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInfo {
    pub name: String,
    /// Internal category id (see the category registry). Empty until the
    /// user picks one or analysis maps one.
    pub category: String,
    pub description: String,
    pub features: Vec<String>,
    pub target_audience: String,
    pub brand: String,
    pub style: String,
    /// Dominant colors extracted from the reference images (hex strings).
    pub color_palette: Vec<String>,
    /// Ready-to-use prompt fragments produced by image analysis.
    pub material_prompts: Vec<String>,
    /// Scene-specific product descriptions keyed by scene id.
    pub scene_descriptions: HashMap<String, String>,
    pub size_category: Option<SizeCategory>,
    pub size_reference: String,
}

impl ProductInfo {
    /// One lowercased search blob over name + description + features, the
    /// input to every keyword heuristic in the recommender and the
    /// semantic engine.
    pub fn search_text(&self) -> String {
        let mut text = format!("{} {}", self.name, self.description);
        for feature in &self.features {
            text.push(' ');
            text.push_str(feature);
        }
        text.to_lowercase()
    }

    /// Drops every field that was derived from product images. Called when
    /// the last image is removed — analysis output must not outlive its
    /// source.
    pub fn clear_image_derived(&mut self) {
        self.category.clear();
        self.material_prompts.clear();
        self.scene_descriptions.clear();
        self.size_category = None;
        self.size_reference.clear();
    }
}
