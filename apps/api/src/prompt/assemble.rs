//! Final assembly: groups enabled layers into five semantic buckets and
//! renders each bucket as one English clause.
//!
//! Bucket rendering order and join rules are part of the output contract:
//! downstream consumers (and users who hand-edit the compiled prompt)
//! depend on the exact paragraph shape.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::prompt::builder::{compose_layers, PromptRequest};
use crate::prompt::layers::{Bucket, LayerKind, PromptLayer};

/// Output of a build: the layers that made it in, the compiled instruction
/// paragraph, and the comma-joined negative prompt.
#[derive(Debug, Clone, Serialize)]
pub struct PromptConfig {
    pub layers: Vec<PromptLayer>,
    pub final_prompt: String,
    pub negative_prompt: String,
    pub metadata: PromptMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptMetadata {
    pub scene: String,
    pub product: String,
    pub generated_at: DateTime<Utc>,
}

/// Rendering order inside each bucket. Weight is carried on the layer
/// record as a legacy emphasis signal; the clause order itself is fixed.
const SUBJECT_ORDER: &[LayerKind] = &[LayerKind::Model, LayerKind::Fusion, LayerKind::Consistency];
const ENVIRONMENT_ORDER: &[LayerKind] = &[
    LayerKind::SceneContext,
    LayerKind::Lighting,
    LayerKind::Composition,
    LayerKind::Scale,
];
const TECHNICAL_ORDER: &[LayerKind] = &[
    LayerKind::DeepVision,
    LayerKind::Quality,
    LayerKind::ColorFidelity,
];
const ENHANCEMENT_ORDER: &[LayerKind] = &[
    LayerKind::Style,
    LayerKind::Semantic,
    LayerKind::Marketing,
    LayerKind::Aida,
    LayerKind::Detail,
];

impl PromptRequest {
    /// Compiles the request. Pure: identical inputs produce byte-identical
    /// prompt strings, and the request itself is never mutated.
    pub fn build(&self) -> PromptConfig {
        let layers = compose_layers(self);
        let final_prompt = combine(&layers, &self.extra_prompts);
        let negative_prompt = layers
            .iter()
            .find(|l| l.name == LayerKind::Negative)
            .map(|l| l.content.clone())
            .unwrap_or_default();

        PromptConfig {
            final_prompt,
            negative_prompt,
            metadata: PromptMetadata {
                scene: self.scene.clone(),
                product: self
                    .product
                    .as_ref()
                    .map(|p| p.name.clone())
                    .unwrap_or_default(),
                generated_at: Utc::now(),
            },
            layers,
        }
    }

    /// Convenience: just the compiled instruction string.
    pub fn build_prompt(&self) -> String {
        self.build().final_prompt
    }

    /// Debug dump of every enabled layer plus the final prompt. For human
    /// inspection, not production flow.
    pub fn preview(&self) -> String {
        let layers = compose_layers(self);
        let mut lines = vec!["=== Prompt Preview ===".to_string(), String::new()];

        for layer in &layers {
            if layer.enabled && !layer.content.is_empty() {
                lines.push(format!("[{}] (weight: {})", layer.name.as_str(), layer.weight));
                lines.push(layer.content.clone());
                lines.push(String::new());
            }
        }

        lines.push("=== Final Prompt ===".to_string());
        lines.push(combine(&layers, &self.extra_prompts));
        lines.join("\n")
    }
}

/// Renders enabled non-negative layers into one paragraph:
/// 1. partition into instruction / subject / environment / technical /
///    enhancement buckets,
/// 2. render each bucket as one period-terminated clause,
/// 3. append free-form extras as one more clause,
/// 4. join with spaces, collapsing runs of whitespace and periods.
pub fn combine(layers: &[PromptLayer], extras: &[String]) -> String {
    let enabled: Vec<&PromptLayer> = layers
        .iter()
        .filter(|l| l.enabled && l.name != LayerKind::Negative && !l.content.trim().is_empty())
        .collect();

    let mut clauses: Vec<String> = Vec::new();

    // Instruction: the single core-subject entry becomes the imperative
    // opening sentence.
    if let Some(layer) = enabled.iter().find(|l| l.name.bucket() == Some(Bucket::Instruction)) {
        let core = layer.content.trim().trim_end_matches('.').trim_end();
        let clause = if core.to_lowercase().starts_with("create") {
            format!("{core}.")
        } else {
            format!("Create a {core}.")
        };
        clauses.push(clause);
    }

    if let Some(clause) = render_clause(&entries_for(&enabled, SUBJECT_ORDER), ". ", None) {
        clauses.push(clause);
    }
    if let Some(clause) = render_clause(&entries_for(&enabled, ENVIRONMENT_ORDER), ", ", Some("Use "))
    {
        clauses.push(clause);
    }
    if let Some(clause) = render_clause(&entries_for(&enabled, TECHNICAL_ORDER), ". ", None) {
        clauses.push(clause);
    }
    if let Some(clause) = render_clause(&entries_for(&enabled, ENHANCEMENT_ORDER), ", ", None) {
        clauses.push(clause);
    }

    let extra_entries: Vec<&str> = extras
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .collect();
    if let Some(clause) = render_clause(&extra_entries, ". ", None) {
        clauses.push(clause);
    }

    normalize(&clauses.join(" "))
}

/// Picks the enabled layers of one bucket in its fixed rendering order.
fn entries_for<'a>(enabled: &[&'a PromptLayer], order: &[LayerKind]) -> Vec<&'a str> {
    order
        .iter()
        .filter_map(|&kind| {
            enabled
                .iter()
                .find(|l| l.name == kind)
                .map(|l| l.content.trim())
        })
        .collect()
}

/// Joins bucket entries into one clause, trailing periods stripped from
/// each entry, terminated with a single period.
fn render_clause(entries: &[&str], separator: &str, prefix: Option<&str>) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    let body = entries
        .iter()
        .map(|e| e.trim_end_matches('.').trim_end())
        .collect::<Vec<_>>()
        .join(separator);
    Some(format!("{}{}.", prefix.unwrap_or(""), body))
}

/// Collapses repeated whitespace and repeated periods.
fn normalize(text: &str) -> String {
    let mut out = text.split_whitespace().collect::<Vec<_>>().join(" ");
    while out.contains("..") {
        out = out.replace("..", ".");
    }
    while out.contains(". .") {
        out = out.replace(". .", ".");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::{ProductInfo, SizeCategory};
    use crate::models::settings::{AspectRatio, GenerationSettings, LightingPreset};

    fn smartwatch_request() -> PromptRequest {
        let product = ProductInfo {
            name: "SmartWatch X".to_string(),
            category: "electronics".to_string(),
            features: vec!["waterproof".to_string(), "solar charging".to_string()],
            ..Default::default()
        };
        let settings = GenerationSettings {
            lighting: LightingPreset::Natural,
            aspect_ratio: AspectRatio::Wide,
            ..Default::default()
        };
        PromptRequest::new()
            .with_product(product)
            .with_scene("outdoor")
            .with_settings(settings)
    }

    #[test]
    fn test_build_is_idempotent() {
        let request = smartwatch_request();
        let first = request.build();
        let second = request.build();
        assert_eq!(first.final_prompt, second.final_prompt);
        assert_eq!(first.negative_prompt, second.negative_prompt);
    }

    #[test]
    fn test_end_to_end_smartwatch_outdoor() {
        let config = smartwatch_request().build();

        assert!(
            config
                .final_prompt
                .starts_with("Create a professional product photograph of SmartWatch X"),
            "got: {}",
            config.final_prompt
        );
        // scene_context fusion pulled in both interaction groups
        assert!(config.final_prompt.contains("water droplets beading on the product surface"));
        assert!(config.final_prompt.contains("bright natural sunlight casting crisp shadows"));
        assert!(config.final_prompt.contains("wide cinematic format"));
        assert!(config.negative_prompt.contains("blurry"));
    }

    #[test]
    fn test_empty_product_still_builds_instruction() {
        let request = PromptRequest::new().with_product(ProductInfo::default());
        let config = request.build();
        assert!(
            config
                .final_prompt
                .starts_with("Create a professional product photograph of the product"),
            "got: {}",
            config.final_prompt
        );
        assert!(!config.final_prompt.is_empty());
        assert!(!config.negative_prompt.is_empty());
    }

    #[test]
    fn test_layer_gating_without_side_channels() {
        let config = smartwatch_request().build();
        // No model/fusion/consistency/marketing/aida content leaks in…
        for kind in [
            LayerKind::Model,
            LayerKind::Fusion,
            LayerKind::Consistency,
            LayerKind::Marketing,
            LayerKind::Aida,
        ] {
            assert!(!config.layers.iter().any(|l| l.name == kind));
        }
        // …yet the paragraph still opens with the instruction, states the
        // environment, and carries a technical clause.
        assert!(config.final_prompt.starts_with("Create a"));
        assert!(config.final_prompt.contains("Use a dynamic natural outdoor environment"));
        assert!(config.final_prompt.contains("8K quality"));
    }

    #[test]
    fn test_side_channels_render_in_subject_clause() {
        let request = smartwatch_request()
            .with_model_prompt("a trail runner wearing the watch mid-stride")
            .with_consistency_prompt("keep the dial identical across all shots");
        let prompt = request.build_prompt();
        assert!(prompt.contains("a trail runner wearing the watch mid-stride"));
        assert!(prompt.contains("keep the dial identical across all shots"));
        let model_pos = prompt.find("trail runner").unwrap();
        let consistency_pos = prompt.find("keep the dial").unwrap();
        assert!(model_pos < consistency_pos, "subject order: model before consistency");
    }

    #[test]
    fn test_environment_clause_prefixed_with_use() {
        let prompt = smartwatch_request().build_prompt();
        assert!(prompt.contains("Use a dynamic natural outdoor environment"), "got: {prompt}");
    }

    #[test]
    fn test_scale_phrase_reaches_environment_clause() {
        let mut request = smartwatch_request().with_scene("lifestyle");
        if let Some(product) = request.product.as_mut() {
            product.size_category = Some(SizeCategory::Pocket);
        }
        let prompt = request.build_prompt();
        assert!(prompt.contains("easily fits in a pocket"), "got: {prompt}");
    }

    #[test]
    fn test_extra_prompts_appended_as_final_clause() {
        let request = smartwatch_request()
            .add_prompt("include a subtle brand banner in the corner")
            .add_prompt("shot during light drizzle.");
        let prompt = request.build_prompt();
        assert!(prompt.contains("include a subtle brand banner in the corner. shot during light drizzle."));
        assert!(prompt.ends_with("shot during light drizzle."));
    }

    #[test]
    fn test_instruction_not_double_prefixed() {
        let request = PromptRequest::new().set_layer(
            LayerKind::CoreSubject,
            "Create a moody hero shot of the product.",
        );
        let prompt = request.build_prompt();
        assert!(prompt.starts_with("Create a moody hero shot of the product."));
        assert!(!prompt.contains("Create a Create"));
    }

    #[test]
    fn test_no_double_periods_or_runs_of_spaces() {
        let request = smartwatch_request()
            .set_layer(LayerKind::Detail, "hand-finished..  polished twice.")
            .add_prompt("  extra   spacing   here.. ");
        let prompt = request.build_prompt();
        assert!(!prompt.contains(".."), "got: {prompt}");
        assert!(!prompt.contains("  "), "got: {prompt}");
    }

    #[test]
    fn test_negative_layer_excluded_from_final_prompt() {
        let config = smartwatch_request().build();
        assert!(!config.final_prompt.contains("blurry"));
        assert!(config.negative_prompt.contains("bad anatomy"));
    }

    #[test]
    fn test_metadata_reflects_request() {
        let config = smartwatch_request().build();
        assert_eq!(config.metadata.scene, "outdoor");
        assert_eq!(config.metadata.product, "SmartWatch X");
    }

    #[test]
    fn test_preview_lists_layers_and_final_prompt() {
        let preview = smartwatch_request().preview();
        assert!(preview.starts_with("=== Prompt Preview ==="));
        assert!(preview.contains("[core_subject] (weight: 1.5)"));
        assert!(preview.contains("[scene_context]"));
        assert!(preview.contains("=== Final Prompt ==="));
    }
}
