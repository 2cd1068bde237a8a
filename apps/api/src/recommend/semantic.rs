#![allow(dead_code)]

//! Semantic engine — a fixed keyword→visual-cue dictionary.
//!
//! Keywords are authored in the product's primary language; related terms
//! and visual cues are the English wording the image model understands.
//! Used to score product↔scene affinity, synthesize extra descriptive
//! phrases, and recommend a scene from free text alone.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{categories, scenes};
use crate::models::product::ProductInfo;

struct SemanticMapping {
    keyword: &'static str,
    category: &'static str,
    related_terms: &'static [&'static str],
    visual_cues: &'static [&'static str],
    scene_hints: &'static [&'static str],
}

static MAPPINGS: &[SemanticMapping] = &[
    // Materials
    SemanticMapping {
        keyword: "金属",
        category: "material",
        related_terms: &["metallic", "steel", "aluminum", "chrome"],
        visual_cues: &["reflective surface", "metallic sheen", "polished finish"],
        scene_hints: &["minimalist", "studio-white"],
    },
    SemanticMapping {
        keyword: "皮革",
        category: "material",
        related_terms: &["leather", "genuine leather", "faux leather"],
        visual_cues: &["leather texture", "premium material", "natural grain"],
        scene_hints: &["luxury", "lifestyle"],
    },
    SemanticMapping {
        keyword: "木质",
        category: "material",
        related_terms: &["wooden", "timber", "oak", "walnut"],
        visual_cues: &["wood grain", "natural wood", "warm wood tones"],
        scene_hints: &["lifestyle", "minimalist"],
    },
    SemanticMapping {
        keyword: "玻璃",
        category: "material",
        related_terms: &["glass", "crystal", "transparent"],
        visual_cues: &["transparent material", "glass reflection", "crystal clear"],
        scene_hints: &["minimalist", "luxury"],
    },
    SemanticMapping {
        keyword: "陶瓷",
        category: "material",
        related_terms: &["ceramic", "porcelain", "pottery"],
        visual_cues: &["ceramic finish", "smooth glaze", "handcrafted feel"],
        scene_hints: &["lifestyle", "studio-white"],
    },
    SemanticMapping {
        keyword: "布料",
        category: "material",
        related_terms: &["fabric", "textile", "cloth", "cotton"],
        visual_cues: &["soft fabric texture", "textile detail", "natural draping"],
        scene_hints: &["lifestyle", "studio-white"],
    },
    // Styles
    SemanticMapping {
        keyword: "现代",
        category: "style",
        related_terms: &["modern", "contemporary", "sleek"],
        visual_cues: &["modern design", "clean lines", "contemporary aesthetic"],
        scene_hints: &["minimalist", "studio-white"],
    },
    SemanticMapping {
        keyword: "复古",
        category: "style",
        related_terms: &["vintage", "retro", "classic", "antique"],
        visual_cues: &["vintage style", "retro aesthetic", "classic elegance"],
        scene_hints: &["lifestyle", "luxury"],
    },
    SemanticMapping {
        keyword: "简约",
        category: "style",
        related_terms: &["minimal", "simple", "clean"],
        visual_cues: &["minimalist design", "simple elegance", "uncluttered"],
        scene_hints: &["minimalist", "studio-white"],
    },
    SemanticMapping {
        keyword: "奢华",
        category: "style",
        related_terms: &["luxury", "premium", "high-end", "exclusive"],
        visual_cues: &["luxury aesthetic", "premium quality", "opulent feel"],
        scene_hints: &["luxury"],
    },
    // Colors
    SemanticMapping {
        keyword: "黑色",
        category: "color",
        related_terms: &["black", "dark", "ebony"],
        visual_cues: &["deep black", "dark tone", "noir aesthetic"],
        scene_hints: &["luxury", "minimalist"],
    },
    SemanticMapping {
        keyword: "白色",
        category: "color",
        related_terms: &["white", "pure", "ivory"],
        visual_cues: &["pure white", "clean white", "bright and clean"],
        scene_hints: &["studio-white", "minimalist"],
    },
    SemanticMapping {
        keyword: "金色",
        category: "color",
        related_terms: &["gold", "golden", "champagne"],
        visual_cues: &["golden tone", "luxurious gold", "warm gold shimmer"],
        scene_hints: &["luxury", "seasonal"],
    },
    // Usage
    SemanticMapping {
        keyword: "户外",
        category: "usage",
        related_terms: &["outdoor", "adventure", "camping", "hiking"],
        visual_cues: &["outdoor setting", "adventure lifestyle", "nature backdrop"],
        scene_hints: &["outdoor"],
    },
    SemanticMapping {
        keyword: "办公",
        category: "usage",
        related_terms: &["office", "work", "professional", "business"],
        visual_cues: &["office environment", "professional setting", "workspace"],
        scene_hints: &["minimalist", "lifestyle"],
    },
    SemanticMapping {
        keyword: "家居",
        category: "usage",
        related_terms: &["home", "living", "interior", "domestic"],
        visual_cues: &["home setting", "living space", "cozy interior"],
        scene_hints: &["lifestyle"],
    },
    SemanticMapping {
        keyword: "运动",
        category: "usage",
        related_terms: &["sports", "athletic", "fitness", "active"],
        visual_cues: &["athletic style", "dynamic energy", "active lifestyle"],
        scene_hints: &["outdoor", "lifestyle"],
    },
];

/// A keyword hit in the product text, with the confidence of the match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticMatch {
    pub keyword: String,
    pub category: String,
    pub suggestions: Vec<String>,
    pub confidence: f64,
}

/// Product↔scene affinity report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneMatchReport {
    /// 0.0..=1.0.
    pub match_score: f64,
    pub suggestions: Vec<String>,
    pub warnings: Vec<String>,
}

/// Confidence of a keyword hit: occurrence density plus a 0.3 floor,
/// capped at 1.0.
fn confidence(text: &str, keyword: &str) -> f64 {
    let occurrences = text.matches(keyword).count() as f64;
    let word_count = text.split_whitespace().count().max(1) as f64;
    (occurrences * 10.0 / word_count + 0.3).min(1.0)
}

/// Scans the product's text for dictionary keywords. Only keywords that
/// actually occur are returned, sorted descending by confidence (stable).
pub fn analyze_product(product: &ProductInfo) -> Vec<SemanticMatch> {
    let text = product.search_text();
    let mut matches: Vec<SemanticMatch> = MAPPINGS
        .iter()
        .filter(|mapping| text.contains(mapping.keyword))
        .map(|mapping| SemanticMatch {
            keyword: mapping.keyword.to_string(),
            category: mapping.category.to_string(),
            suggestions: mapping.visual_cues.iter().map(|c| c.to_string()).collect(),
            confidence: confidence(&text, mapping.keyword),
        })
        .collect();
    matches.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches
}

/// Recommends the scene whose hints accumulate the most confidence, with a
/// flat +0.5 bonus for the category's suggested scenes. Ties keep the
/// registry iteration order; with no signal at all the studio default wins.
pub fn recommend_scene(product: &ProductInfo) -> String {
    let matches = analyze_product(product);

    // Seeded in registry order so ties resolve first-seen.
    let mut scores: Vec<(&'static str, f64)> = scenes::scene_list()
        .iter()
        .map(|scene| (scene.id, 0.0))
        .collect();

    for semantic_match in &matches {
        let Some(mapping) = MAPPINGS.iter().find(|m| m.keyword == semantic_match.keyword) else {
            continue;
        };
        for hint in mapping.scene_hints {
            if let Some(entry) = scores.iter_mut().find(|(id, _)| id == hint) {
                entry.1 += semantic_match.confidence;
            }
        }
    }

    if let Some(category) = categories::category_by_keyword(&product.category) {
        for suggested in category.suggested_scenes {
            if let Some(entry) = scores.iter_mut().find(|(id, _)| id == suggested) {
                entry.1 += 0.5;
            }
        }
    }

    let mut best = scenes::DEFAULT_SCENE_ID;
    let mut max_score = 0.0;
    for (scene_id, score) in scores {
        if score > max_score {
            max_score = score;
            best = scene_id;
        }
    }
    best.to_string()
}

/// Descriptive phrases synthesized from the top keyword matches plus the
/// category's stock enhancements. Deduplicated, first occurrence wins.
pub fn semantic_enhancements(product: &ProductInfo) -> Vec<String> {
    let matches = analyze_product(product);
    let mut enhancements: Vec<String> = Vec::new();

    for semantic_match in matches.iter().take(5) {
        enhancements.extend(semantic_match.suggestions.iter().cloned());
    }

    if let Some(category) = categories::category_by_keyword(&product.category) {
        enhancements.extend(
            category
                .prompt_enhancements
                .iter()
                .take(3)
                .map(|e| e.to_string()),
        );
    }

    let mut seen = Vec::new();
    enhancements.retain(|e| {
        if seen.contains(e) {
            false
        } else {
            seen.push(e.clone());
            true
        }
    });
    enhancements
}

/// Scores how well the product's wording fits a specific scene.
pub fn match_product_to_scene(product: &ProductInfo, scene_id: &str) -> SceneMatchReport {
    let scene_name = scenes::scene_by_id(scene_id)
        .map(|s| s.name)
        .unwrap_or(scene_id);
    let matches = analyze_product(product);

    let mut match_score: f64 = 0.5;
    let mut suggestions = Vec::new();
    let mut warnings = Vec::new();

    for semantic_match in &matches {
        let Some(mapping) = MAPPINGS.iter().find(|m| m.keyword == semantic_match.keyword) else {
            continue;
        };
        if mapping.scene_hints.iter().any(|hint| *hint == scene_id) {
            match_score += 0.1;
            suggestions.push(format!(
                "产品的{}特性与{}场景很搭配",
                semantic_match.keyword, scene_name
            ));
        }
    }

    if let Some(category) = categories::category_by_keyword(&product.category) {
        if category.suggested_scenes.iter().any(|s| *s == scene_id) {
            match_score += 0.2;
        } else {
            let preferred: Vec<&str> = category
                .suggested_scenes
                .iter()
                .filter_map(|id| scenes::scene_by_id(id))
                .map(|s| s.name)
                .collect();
            warnings.push(format!(
                "{}类产品通常更适合{}场景",
                category.name,
                preferred.join("、")
            ));
        }
    }

    SceneMatchReport {
        match_score: match_score.min(1.0),
        suggestions,
        warnings,
    }
}

/// Related English terms for a dictionary keyword.
pub fn related_terms(keyword: &str) -> &'static [&'static str] {
    MAPPINGS
        .iter()
        .find(|m| m.keyword == keyword)
        .map(|m| m.related_terms)
        .unwrap_or(&[])
}

/// Direct dictionary lookups for already-extracted keywords; every hit
/// comes back at full confidence.
pub fn analyze_keywords(keywords: &[String]) -> HashMap<String, SemanticMatch> {
    let mut results = HashMap::new();
    for keyword in keywords {
        if let Some(mapping) = MAPPINGS.iter().find(|m| m.keyword == keyword.as_str()) {
            results.insert(
                keyword.clone(),
                SemanticMatch {
                    keyword: keyword.clone(),
                    category: mapping.category.to_string(),
                    suggestions: mapping.visual_cues.iter().map(|c| c.to_string()).collect(),
                    confidence: 1.0,
                },
            );
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_text(name: &str, description: &str, features: &[&str]) -> ProductInfo {
        ProductInfo {
            name: name.to_string(),
            description: description.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_analyze_only_returns_present_keywords() {
        let product = product_with_text("金属水杯", "现代简约设计", &[]);
        let matches = analyze_product(&product);
        let keywords: Vec<&str> = matches.iter().map(|m| m.keyword.as_str()).collect();
        assert!(keywords.contains(&"金属"));
        assert!(keywords.contains(&"现代"));
        assert!(keywords.contains(&"简约"));
        assert!(!keywords.contains(&"皮革"));
    }

    #[test]
    fn test_confidence_formula() {
        // "金属 杯子 金属" → 2 occurrences, 3 words: 2*10/3 + 0.3 capped at 1.0
        assert_eq!(confidence("金属 杯子 金属", "金属"), 1.0);
        // 1 occurrence, 40 words: 10/40 + 0.3 = 0.55
        let text = format!("金属 {}", vec!["词"; 39].join(" "));
        let c = confidence(&text, "金属");
        assert!((c - 0.55).abs() < 1e-9, "got {c}");
    }

    #[test]
    fn test_analyze_sorted_descending_by_confidence() {
        let text = format!("金属 金属 金属 皮革 {}", vec!["词"; 60].join(" "));
        let product = product_with_text(&text, "", &[]);
        let matches = analyze_product(&product);
        assert_eq!(matches[0].keyword, "金属");
        for pair in matches.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn test_recommend_scene_from_keywords() {
        let product = product_with_text("户外运动水壶", "", &[]);
        assert_eq!(recommend_scene(&product), "outdoor");
    }

    #[test]
    fn test_recommend_scene_defaults_to_studio_white() {
        let product = product_with_text("unbranded widget", "", &[]);
        assert_eq!(recommend_scene(&product), "studio-white");
    }

    #[test]
    fn test_recommend_scene_category_bonus() {
        let mut product = product_with_text("ring", "", &[]);
        product.category = "jewelry".to_string();
        // No keyword hits: jewelry's three suggested scenes tie at +0.5,
        // and the first of them in registry iteration order wins.
        assert_eq!(recommend_scene(&product), "studio-white");
    }

    #[test]
    fn test_enhancements_dedup_preserves_first_occurrence() {
        let mut product = product_with_text("奢华皮革手袋", "", &[]);
        product.category = "fashion".to_string();
        let enhancements = semantic_enhancements(&product);
        assert!(enhancements.contains(&"luxury aesthetic".to_string()));
        assert!(enhancements.contains(&"leather texture".to_string()));
        assert!(enhancements.contains(&"fabric texture detail".to_string()));
        let unique: std::collections::HashSet<&String> = enhancements.iter().collect();
        assert_eq!(unique.len(), enhancements.len(), "no duplicates");
    }

    #[test]
    fn test_match_product_to_scene_scores_and_warnings() {
        let mut product = product_with_text("奢华金色项链", "", &[]);
        product.category = "jewelry".to_string();

        let luxury = match_product_to_scene(&product, "luxury");
        // base 0.5 + 0.1 (奢华) + 0.1 (金色) + 0.2 category
        assert!((luxury.match_score - 0.9).abs() < 1e-9, "got {}", luxury.match_score);
        assert!(luxury.warnings.is_empty());
        assert!(!luxury.suggestions.is_empty());

        let outdoor = match_product_to_scene(&product, "outdoor");
        assert!((outdoor.match_score - 0.5).abs() < 1e-9);
        assert_eq!(outdoor.warnings.len(), 1);
        assert!(outdoor.warnings[0].contains("珠宝首饰"));
    }

    #[test]
    fn test_match_score_clamped_to_one() {
        let mut product = product_with_text(
            "奢华 金色 黑色 皮革 玻璃 复古 luxury",
            "奢华复古黑色金色皮革玻璃",
            &[],
        );
        product.category = "beauty".to_string();
        let report = match_product_to_scene(&product, "luxury");
        assert!(report.match_score <= 1.0);
    }

    #[test]
    fn test_related_terms_lookup() {
        assert!(related_terms("金属").contains(&"aluminum"));
        assert!(related_terms("飞船").is_empty());
    }

    #[test]
    fn test_analyze_keywords_batch() {
        let keywords = vec!["金属".to_string(), "飞船".to_string()];
        let results = analyze_keywords(&keywords);
        assert_eq!(results.len(), 1);
        assert_eq!(results["金属"].confidence, 1.0);
    }
}
