//! Scene recommender — scores every scene 0–100 for a product.
//!
//! Score = 50 base + category priority contribution + text-rule bonuses,
//! clamped to 0..=100. Category reasons outrank text-rule reasons; a scene
//! nobody voted for falls back to its own description.

use serde::{Deserialize, Serialize};

use crate::catalog::{categories, scenes};
use crate::models::product::ProductInfo;

/// Default number of recommendations returned.
pub const DEFAULT_LIMIT: usize = 3;

/// Score at or above which a scene counts as suitable for the product.
const SUITABLE_SCORE: u32 = 60;
/// Score below which a selected scene earns a warning.
const WARNING_SCORE: u32 = 40;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneRecommendation {
    pub scene_id: String,
    /// 0..=100.
    pub score: u32,
    pub reason: String,
    pub is_top_pick: bool,
    pub category_match: bool,
}

/// One keyword-group heuristic: if any keyword appears in the product's
/// search text, the target scene gains `bonus` points.
struct TextRule {
    scene_id: &'static str,
    bonus: i32,
    reason: &'static str,
    keywords: &'static [&'static str],
}

static TEXT_RULES: &[TextRule] = &[
    TextRule {
        scene_id: "luxury",
        bonus: 20,
        reason: "产品定位高端，推荐奢华场景",
        keywords: &["luxury", "premium", "high-end", "高端", "奢华", "精品"],
    },
    TextRule {
        scene_id: "outdoor",
        bonus: 25,
        reason: "产品适合户外使用",
        keywords: &["outdoor", "sport", "adventure", "户外", "运动", "探险", "waterproof", "防水"],
    },
    TextRule {
        scene_id: "lifestyle",
        bonus: 20,
        reason: "产品适合生活场景展示",
        keywords: &["home", "cozy", "comfort", "家居", "舒适", "居家", "daily", "日常"],
    },
    TextRule {
        scene_id: "seasonal",
        bonus: 25,
        reason: "产品适合作为礼品展示",
        keywords: &["gift", "holiday", "celebration", "礼品", "节日", "送礼", "christmas", "圣诞"],
    },
    TextRule {
        scene_id: "minimalist",
        bonus: 20,
        reason: "产品设计简约现代",
        keywords: &["minimal", "simple", "modern", "极简", "简约", "设计感", "elegant", "优雅"],
    },
    TextRule {
        scene_id: "studio-white",
        bonus: 15,
        reason: "适合标准电商主图展示",
        keywords: &["商品", "产品", "电商", "product", "e-commerce", "main image"],
    },
];

/// Scores every known scene for the product and returns the top `limit`,
/// sorted descending by score. Exactly one returned entry is the top pick.
pub fn recommendations(product: &ProductInfo, limit: usize) -> Vec<SceneRecommendation> {
    let blob = product.search_text();
    let category_recs = if product.category.is_empty() {
        Vec::new()
    } else {
        categories::scene_recommendations(&product.category)
    };

    let mut results: Vec<SceneRecommendation> = scenes::scene_list()
        .iter()
        .map(|scene| {
            let mut score: i32 = 50;
            let mut reasons: Vec<&str> = Vec::new();

            // Category contribution: priority 1..=5 maps to +10..+50.
            let category_rec = category_recs.iter().find(|rec| rec.scene_id == scene.id);
            if let Some(rec) = category_rec {
                score += rec.priority as i32 * 10;
                reasons.push(rec.reason);
            }

            // Independent text rules; a scene may match several.
            for rule in TEXT_RULES.iter().filter(|r| r.scene_id == scene.id) {
                if rule.keywords.iter().any(|kw| blob.contains(&kw.to_lowercase())) {
                    score += rule.bonus;
                    reasons.push(rule.reason);
                }
            }

            SceneRecommendation {
                scene_id: scene.id.to_string(),
                score: score.clamp(0, 100) as u32,
                reason: reasons.first().unwrap_or(&scene.description).to_string(),
                is_top_pick: false,
                category_match: category_rec.is_some(),
            }
        })
        .collect();

    // Stable sort keeps registry order among ties.
    results.sort_by(|a, b| b.score.cmp(&a.score));

    if let Some(first) = results.first_mut() {
        first.is_top_pick = true;
    }

    results.truncate(limit);
    results
}

/// Best-fit scene id for the product.
pub fn best_scene(product: &ProductInfo) -> String {
    recommendations(product, 1)
        .into_iter()
        .next()
        .map(|rec| rec.scene_id)
        .unwrap_or_else(|| scenes::DEFAULT_SCENE_ID.to_string())
}

/// True iff the scene scores at least 60 among the top six.
pub fn is_scene_suitable(product: &ProductInfo, scene_id: &str) -> bool {
    recommendations(product, 6)
        .iter()
        .find(|rec| rec.scene_id == scene_id)
        .map(|rec| rec.score >= SUITABLE_SCORE)
        .unwrap_or(false)
}

/// Advisory when a chosen scene fits the product's category poorly.
/// `None` when the category is unknown or the scene scores acceptably.
pub fn scene_warning(product: &ProductInfo, scene_id: &str) -> Option<String> {
    if product.category.is_empty() {
        return None;
    }
    let category = categories::category_by_id(&product.category)?;
    let scene = scenes::scene_by_id(scene_id)?;

    let recs = recommendations(product, 6);
    let rec = recs.iter().find(|r| r.scene_id == scene_id)?;
    if rec.score >= WARNING_SCORE {
        return None;
    }

    let preferred: Vec<&str> = category
        .suggested_scenes
        .iter()
        .filter_map(|id| scenes::scene_by_id(id))
        .map(|s| s.name)
        .collect();
    Some(format!(
        "{}可能不是{}类产品的最佳选择，推荐尝试{}场景",
        scene.name,
        category.name,
        preferred.join("、")
    ))
}
