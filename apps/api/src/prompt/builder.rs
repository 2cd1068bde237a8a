#![allow(dead_code)]

//! Prompt build configuration and per-layer content generators.
//!
//! `PromptRequest` is plain data: callers fill it (directly or via the
//! fluent helpers), and `build()` in `assemble` compiles it without
//! touching the inputs — building twice from the same request yields the
//! same strings.

use std::collections::HashMap;

use serde::Deserialize;

use crate::catalog::scenes::{self, Scene, DEFAULT_SCENE_ID};
use crate::catalog::categories;
use crate::models::dna::{ArtDirectionDna, ProductIntrinsicDna};
use crate::models::product::ProductInfo;
use crate::models::settings::GenerationSettings;
use crate::prompt::layers::{LayerKind, PromptLayer, ALL_LAYERS};
use crate::prompt::phrases;
use crate::recommend::semantic;

/// Everything a build needs. Side-channel prompts (model, fusion,
/// consistency, marketing, AIDA) are built by external collaborators and
/// passed through verbatim; their layers are enabled only while non-empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PromptRequest {
    pub product: Option<ProductInfo>,
    pub scene: String,
    pub settings: Option<GenerationSettings>,
    pub intrinsic_dna: Option<ProductIntrinsicDna>,
    pub art_direction: Option<ArtDirectionDna>,
    pub model_prompt: String,
    pub fusion_prompt: String,
    pub consistency_prompt: String,
    pub marketing_prompt: String,
    pub aida_prompt: String,
    /// Manual per-layer overrides, replacing the generated content.
    pub layer_overrides: HashMap<LayerKind, String>,
    /// Free-form extra prompts appended after all buckets.
    pub extra_prompts: Vec<String>,
}

impl Default for PromptRequest {
    fn default() -> Self {
        Self {
            product: None,
            scene: DEFAULT_SCENE_ID.to_string(),
            settings: None,
            intrinsic_dna: None,
            art_direction: None,
            model_prompt: String::new(),
            fusion_prompt: String::new(),
            consistency_prompt: String::new(),
            marketing_prompt: String::new(),
            aida_prompt: String::new(),
            layer_overrides: HashMap::new(),
            extra_prompts: Vec::new(),
        }
    }
}

impl PromptRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, product: ProductInfo) -> Self {
        self.product = Some(product);
        self
    }

    pub fn with_scene(mut self, scene: impl Into<String>) -> Self {
        self.scene = scene.into();
        self
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_deep_vision(
        mut self,
        intrinsic: ProductIntrinsicDna,
        art_direction: ArtDirectionDna,
    ) -> Self {
        self.intrinsic_dna = Some(intrinsic);
        self.art_direction = Some(art_direction);
        self
    }

    pub fn with_model_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.model_prompt = prompt.into();
        self
    }

    pub fn with_fusion_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.fusion_prompt = prompt.into();
        self
    }

    pub fn with_consistency_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.consistency_prompt = prompt.into();
        self
    }

    pub fn with_marketing_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.marketing_prompt = prompt.into();
        self
    }

    pub fn with_aida_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.aida_prompt = prompt.into();
        self
    }

    /// Manual override for one layer's content.
    pub fn set_layer(mut self, layer: LayerKind, content: impl Into<String>) -> Self {
        self.layer_overrides.insert(layer, content.into());
        self
    }

    pub fn add_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.extra_prompts.push(prompt.into());
        self
    }

    /// Back to a blank request for reuse.
    pub fn reset(self) -> Self {
        Self::default()
    }
}

/// Computes content for every layer, applying manual overrides, and drops
/// layers whose content is blank. Never fails: unknown scene or category
/// ids and absent product fields degrade to empty contributions.
pub fn compose_layers(request: &PromptRequest) -> Vec<PromptLayer> {
    let scene = scenes::scene_by_id(&request.scene);
    let settings = request.settings.clone().unwrap_or_default();

    let mut layers: Vec<PromptLayer> = ALL_LAYERS
        .iter()
        .map(|&kind| {
            let generated = generate_content(kind, request, scene, &settings);
            let content = request
                .layer_overrides
                .get(&kind)
                .cloned()
                .unwrap_or(generated);
            PromptLayer {
                name: kind,
                content,
                weight: kind.weight(),
                enabled: layer_enabled(kind, request),
            }
        })
        .collect();

    layers.retain(|layer| !layer.content.trim().is_empty());
    layers
}

/// Side-channel layers are gated on their source string; everything else
/// is always on (blank content drops it later).
fn layer_enabled(kind: LayerKind, request: &PromptRequest) -> bool {
    match kind {
        LayerKind::Model => !request.model_prompt.is_empty(),
        LayerKind::Fusion => !request.fusion_prompt.is_empty(),
        LayerKind::Consistency => !request.consistency_prompt.is_empty(),
        LayerKind::Marketing => !request.marketing_prompt.is_empty(),
        LayerKind::Aida => !request.aida_prompt.is_empty(),
        _ => true,
    }
}

fn generate_content(
    kind: LayerKind,
    request: &PromptRequest,
    scene: Option<&'static Scene>,
    settings: &GenerationSettings,
) -> String {
    match kind {
        LayerKind::CoreSubject => core_subject_layer(request),
        LayerKind::Model => request.model_prompt.clone(),
        LayerKind::Fusion => request.fusion_prompt.clone(),
        LayerKind::Consistency => request.consistency_prompt.clone(),
        LayerKind::SceneContext => scene_context_layer(request, scene),
        LayerKind::DeepVision => deep_vision_layer(request, scene),
        LayerKind::Scale => scale_layer(request, scene),
        LayerKind::Lighting => lighting_layer(scene, settings),
        LayerKind::Composition => composition_layer(scene, settings),
        LayerKind::Style => phrases::style_phrase(settings.style).to_string(),
        LayerKind::Quality => quality_layer(settings),
        LayerKind::Semantic => semantic_layer(request),
        LayerKind::Marketing => request.marketing_prompt.clone(),
        LayerKind::Aida => request.aida_prompt.clone(),
        LayerKind::Detail => detail_layer(request),
        LayerKind::ColorFidelity => color_fidelity_layer(settings),
        LayerKind::Negative => negative_layer(request),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layer generators
// ────────────────────────────────────────────────────────────────────────────

/// Subject clause: noun phrase by priority (name → category noun → "the
/// product"), brand attribution, then the scene-tailored description or
/// the first 80 characters of the generic one.
fn core_subject_layer(request: &PromptRequest) -> String {
    let Some(product) = &request.product else {
        return "professional product photography".to_string();
    };

    let noun = if !product.name.trim().is_empty() {
        product.name.trim().to_string()
    } else if let Some(generic) = phrases::subject_noun(&product.category) {
        generic.to_string()
    } else {
        "the product".to_string()
    };

    let mut out = format!("professional product photograph of {noun}");

    if !product.brand.trim().is_empty() {
        out.push_str(&format!(" by {}", product.brand.trim()));
    }

    let scene_description = product
        .scene_descriptions
        .get(&request.scene)
        .map(|d| strip_leading_article(d.trim()))
        .filter(|d| !d.is_empty());

    if let Some(description) = scene_description {
        out.push_str(&format!(", featuring {description}"));
    } else if !product.description.trim().is_empty() {
        let short: String = product.description.trim().chars().take(80).collect();
        out.push_str(&format!(", featuring {short}"));
    }

    out
}

fn strip_leading_article(text: &str) -> &str {
    text.strip_prefix("a ")
        .or_else(|| text.strip_prefix("A "))
        .unwrap_or(text)
}

/// Scene hints plus the one place cross-cutting feature × scene fusion
/// happens: waterproof products in watery scenes get water-interaction
/// phrases, solar/outdoor products under the sun get sunlight phrases.
fn scene_context_layer(request: &PromptRequest, scene: Option<&'static Scene>) -> String {
    let Some(scene) = scene else {
        return String::new();
    };

    let mut parts: Vec<&str> = scene.prompt_hints.iter().take(4).copied().collect();

    if let Some(product) = &request.product {
        let features = product.features.join(" ").to_lowercase();

        let watery_scene = phrases::WATER_SCENE_TERMS.iter().any(|t| scene.id.contains(t));
        if watery_scene
            && phrases::WATER_FEATURE_TERMS.iter().any(|t| features.contains(t))
        {
            parts.extend_from_slice(phrases::WATER_INTERACTION_PHRASES);
        }

        let sunny_scene = phrases::SUN_SCENE_TERMS.iter().any(|t| scene.id.contains(t));
        if sunny_scene
            && phrases::SOLAR_FEATURE_TERMS.iter().any(|t| features.contains(t))
        {
            parts.extend_from_slice(phrases::SUNLIGHT_PHRASES);
        }
    }

    parts.join(", ")
}

/// One declarative sentence per available DNA sub-field. The lighting
/// sentence yields to the scene: when the scene's own hints dictate
/// lighting, art-direction atmosphere could contradict the scene's mood,
/// so the sentence is dropped entirely.
fn deep_vision_layer(request: &PromptRequest, scene: Option<&'static Scene>) -> String {
    let mut sentences: Vec<String> = Vec::new();

    if let Some(intrinsic) = &request.intrinsic_dna {
        let texture = intrinsic.material_analysis.surface_texture.trim();
        let reflectivity = intrinsic.material_analysis.reflectivity.trim();
        match (texture.is_empty(), reflectivity.is_empty()) {
            (false, false) => {
                sentences.push(format!("The product surface is {texture} with {reflectivity}"))
            }
            (false, true) => sentences.push(format!("The product surface is {texture}")),
            (true, false) => sentences.push(format!("The product surface shows {reflectivity}")),
            (true, true) => {}
        }

        if !intrinsic.form_factor.shape_keywords.is_empty() {
            sentences.push(format!(
                "Its form is defined by {}",
                intrinsic.form_factor.shape_keywords.join(", ")
            ));
        }
    }

    if let Some(art) = &request.art_direction {
        let scene_owns_lighting = scene.map_or(false, |s| s.has_detailed_lighting);
        if let Some(light) = art.lighting_scenario.as_ref().filter(|_| !scene_owns_lighting) {
            let style = light.style.trim();
            let direction = light.direction.trim();
            let mut sentence = match (style.is_empty(), direction.is_empty()) {
                (false, false) => format!("Light the product with {style} from {direction}"),
                (false, true) => format!("Light the product with {style}"),
                (true, false) => format!("Light the product from {direction}"),
                (true, true) => String::new(),
            };
            let atmosphere = light.atmosphere.trim();
            if !atmosphere.is_empty() {
                if sentence.is_empty() {
                    sentence = format!("The lighting atmosphere is {atmosphere}");
                } else {
                    sentence.push_str(&format!(", with {atmosphere} atmosphere"));
                }
            }
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
        }

        if let Some(photo) = &art.photography_settings {
            let shot = photo.shot_scale.trim();
            let dof = photo.depth_of_field.trim();
            match (shot.is_empty(), dof.is_empty()) {
                (false, false) => sentences.push(format!("Frame the shot as {shot} with {dof}")),
                (false, true) => sentences.push(format!("Frame the shot as {shot}")),
                (true, false) => sentences.push(format!("Frame the shot with {dof}")),
                (true, true) => {}
            }
        }

        if let Some(grading) = &art.color_grading {
            let tone = grading.tone.trim();
            if !tone.is_empty() {
                sentences.push(format!("Grade the colors toward {tone}"));
            }
        }

        if let Some(optics) = &art.optical_mechanics {
            let lens = optics.lens_type.trim();
            let aperture = optics.aperture.trim();
            let mut sentence = match (lens.is_empty(), aperture.is_empty()) {
                (false, false) => format!("Shoot on a {lens} at {aperture}"),
                (false, true) => format!("Shoot on a {lens}"),
                (true, false) => format!("Use an aperture of {aperture}"),
                (true, true) => String::new(),
            };
            if let Some(shutter) = optics.shutter_speed.as_deref().map(str::trim) {
                if !shutter.is_empty() {
                    if sentence.is_empty() {
                        sentence = format!("Use a {shutter} shutter speed");
                    } else {
                        sentence.push_str(&format!(", {shutter} shutter"));
                    }
                }
            }
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
        }

        if let Some(composition) = &art.composition_guide {
            let keyword = composition.keyword.trim();
            if !keyword.is_empty() {
                sentences.push(format!("Compose the frame as {keyword}"));
            }
        }
    }

    sentences.join(". ")
}

/// Active only in environmental scenes, where a disproportionate product
/// is visually jarring. Studio-style scenes let the product fill the frame.
fn scale_layer(request: &PromptRequest, scene: Option<&'static Scene>) -> String {
    let Some(scene) = scene else {
        return String::new();
    };
    if !scene.environmental {
        return String::new();
    }

    let mut parts: Vec<String> = Vec::new();
    if let Some(product) = &request.product {
        if !product.size_reference.trim().is_empty() {
            parts.push(product.size_reference.trim().to_string());
        }
        if let Some(size) = product.size_category {
            parts.push(phrases::scale_phrase(size).to_string());
        }
    }
    parts.push(phrases::REALISTIC_SCALE_CLAUSE.to_string());
    parts.join(", ")
}

/// Suppressed when the scene's hints already encode detailed lighting —
/// the scene's authored wording wins over the generic preset phrase.
fn lighting_layer(scene: Option<&'static Scene>, settings: &GenerationSettings) -> String {
    if scene.map_or(false, |s| s.has_detailed_lighting) {
        return String::new();
    }
    phrases::lighting_phrase(settings.lighting).to_string()
}

/// The generic framing phrase yields to scene-authored composition; the
/// aspect-ratio phrase is always stated.
fn composition_layer(scene: Option<&'static Scene>, settings: &GenerationSettings) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if !scene.map_or(false, |s| s.has_detailed_composition) {
        parts.push(phrases::GENERIC_COMPOSITION_PHRASE);
    }
    parts.push(phrases::aspect_ratio_phrase(settings.aspect_ratio));
    parts.join(", ")
}

fn quality_layer(settings: &GenerationSettings) -> String {
    let mut parts = vec![phrases::quality_phrase(settings.quality)];
    if settings.enhance_details {
        parts.push(phrases::ENHANCE_DETAILS_PHRASE);
    }
    if settings.add_shadow {
        parts.push(phrases::ADD_SHADOW_PHRASE);
    }
    parts.join(", ")
}

fn semantic_layer(request: &PromptRequest) -> String {
    let Some(product) = &request.product else {
        return String::new();
    };
    let mut enhancements = semantic::semantic_enhancements(product);
    enhancements.truncate(5);
    enhancements.join(", ")
}

/// Feature highlights, styling and audience notes, and the category's
/// scene-specific modifiers (falling back to its generic enhancements).
fn detail_layer(request: &PromptRequest) -> String {
    let Some(product) = &request.product else {
        return String::new();
    };

    let mut parts: Vec<String> = Vec::new();

    let features: Vec<&str> = product
        .features
        .iter()
        .map(|f| f.as_str())
        .filter(|f| !f.trim().is_empty())
        .take(3)
        .collect();
    match features.len() {
        0 => {}
        1 => parts.push(format!("features {}", features[0])),
        2 => parts.push(format!("features {} and {}", features[0], features[1])),
        _ => parts.push(format!(
            "features {}, {}, and {}",
            features[0], features[1], features[2]
        )),
    }

    if !product.style.trim().is_empty() {
        parts.push(format!("rendered in a {} style", product.style.trim()));
    }
    if !product.target_audience.trim().is_empty() {
        parts.push(format!("appealing to {}", product.target_audience.trim()));
    }

    if let Some(category) = categories::category_by_id(&product.category) {
        let scene_specific = categories::scene_modifiers(&product.category, &request.scene);
        let modifiers: Vec<&str> = if !scene_specific.is_empty() {
            scene_specific.to_vec()
        } else {
            category.prompt_enhancements.iter().take(2).copied().collect()
        };
        if !modifiers.is_empty() {
            parts.push(format!("accented by {}", modifiers.join(" and ")));
        }
    }

    parts.join(", ")
}

fn color_fidelity_layer(settings: &GenerationSettings) -> String {
    if settings.color_correction {
        phrases::COLOR_FIDELITY_INSTRUCTION.to_string()
    } else {
        String::new()
    }
}

/// Stock negatives plus the art direction's forbidden elements.
fn negative_layer(request: &PromptRequest) -> String {
    let mut parts: Vec<&str> = phrases::DEFAULT_NEGATIVE_PROMPTS.to_vec();
    if let Some(forbidden) = request
        .art_direction
        .as_ref()
        .and_then(|art| art.negative_constraints.as_ref())
    {
        parts.extend(forbidden.forbidden_elements.iter().map(|e| e.as_str()));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dna::{
        LightingScenario, MaterialAnalysis, NegativeConstraints, OpticalMechanics,
    };
    use crate::models::product::SizeCategory;
    use crate::models::settings::LightingPreset;

    fn layer_content(layers: &[PromptLayer], kind: LayerKind) -> Option<&str> {
        layers
            .iter()
            .find(|l| l.name == kind)
            .map(|l| l.content.as_str())
    }

    fn smartwatch() -> ProductInfo {
        ProductInfo {
            name: "SmartWatch X".to_string(),
            category: "electronics".to_string(),
            features: vec!["waterproof".to_string(), "solar charging".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_core_subject_uses_name_and_brand() {
        let mut product = smartwatch();
        product.brand = "Acme".to_string();
        product.description = "A rugged companion watch built for long expeditions and daily wear alike, with more text beyond eighty characters".to_string();
        let request = PromptRequest::new().with_product(product);
        let layers = compose_layers(&request);
        let content = layer_content(&layers, LayerKind::CoreSubject).unwrap();
        assert!(content.starts_with("professional product photograph of SmartWatch X by Acme"));
        assert!(content.contains(", featuring A rugged companion watch"));
        // 80-char truncation of the generic description
        assert!(!content.contains("eighty characters"));
    }

    #[test]
    fn test_core_subject_prefers_scene_description() {
        let mut product = smartwatch();
        product.description = "generic description".to_string();
        product.scene_descriptions.insert(
            "outdoor".to_string(),
            "a rugged watch built for trail running".to_string(),
        );
        let request = PromptRequest::new().with_product(product).with_scene("outdoor");
        let layers = compose_layers(&request);
        let content = layer_content(&layers, LayerKind::CoreSubject).unwrap();
        assert!(
            content.contains("featuring rugged watch built for trail running"),
            "leading article stripped, scene description wins: {content}"
        );
        assert!(!content.contains("generic description"));
    }

    #[test]
    fn test_core_subject_category_noun_fallback() {
        let product = ProductInfo {
            category: "electronics".to_string(),
            ..Default::default()
        };
        let request = PromptRequest::new().with_product(product);
        let layers = compose_layers(&request);
        assert_eq!(
            layer_content(&layers, LayerKind::CoreSubject).unwrap(),
            "professional product photograph of an electronic device"
        );
    }

    #[test]
    fn test_core_subject_generic_fallback() {
        let request = PromptRequest::new().with_product(ProductInfo::default());
        let layers = compose_layers(&request);
        assert_eq!(
            layer_content(&layers, LayerKind::CoreSubject).unwrap(),
            "professional product photograph of the product"
        );
    }

    #[test]
    fn test_scene_context_fuses_water_and_sun_for_outdoor() {
        let request = PromptRequest::new().with_product(smartwatch()).with_scene("outdoor");
        let layers = compose_layers(&request);
        let content = layer_content(&layers, LayerKind::SceneContext).unwrap();
        assert!(content.contains("water droplets beading on the product surface"));
        assert!(content.contains("bright natural sunlight casting crisp shadows"));
        // At most 4 scene hints precede the fused phrases
        assert!(!content.contains("product displayed at true-to-life scale"));
    }

    #[test]
    fn test_scene_context_no_fusion_in_studio() {
        let request = PromptRequest::new().with_product(smartwatch()).with_scene("studio-white");
        let layers = compose_layers(&request);
        let content = layer_content(&layers, LayerKind::SceneContext).unwrap();
        assert!(!content.contains("water droplets"));
        assert!(!content.contains("sunlight casting"));
    }

    #[test]
    fn test_scene_context_unknown_scene_is_dropped() {
        let request = PromptRequest::new().with_product(smartwatch()).with_scene("underwater");
        let layers = compose_layers(&request);
        assert!(layer_content(&layers, LayerKind::SceneContext).is_none());
    }

    #[test]
    fn test_scale_layer_empty_for_studio_scene() {
        let mut product = smartwatch();
        product.size_category = Some(SizeCategory::Pocket);
        let request = PromptRequest::new().with_product(product).with_scene("studio-white");
        let layers = compose_layers(&request);
        assert!(
            layer_content(&layers, LayerKind::Scale).is_none(),
            "scale layer contributes nothing outside environmental scenes"
        );
    }

    #[test]
    fn test_scale_layer_pocket_in_lifestyle() {
        let mut product = smartwatch();
        product.size_category = Some(SizeCategory::Pocket);
        product.size_reference = "wristwatch-sized".to_string();
        let request = PromptRequest::new().with_product(product).with_scene("lifestyle");
        let layers = compose_layers(&request);
        let content = layer_content(&layers, LayerKind::Scale).unwrap();
        assert!(content.contains("wristwatch-sized"));
        assert!(content.contains("easily fits in a pocket"));
        assert!(content.contains(phrases::REALISTIC_SCALE_CLAUSE));
    }

    #[test]
    fn test_lighting_suppressed_by_scene_flag() {
        let settings = GenerationSettings {
            lighting: LightingPreset::Studio,
            ..Default::default()
        };
        let request = PromptRequest::new().with_scene("studio-white").with_settings(settings);
        let layers = compose_layers(&request);
        assert!(
            layer_content(&layers, LayerKind::Lighting).is_none(),
            "scene-authored lighting wins"
        );
    }

    #[test]
    fn test_lighting_emitted_for_unknown_scene() {
        let settings = GenerationSettings {
            lighting: LightingPreset::Dramatic,
            ..Default::default()
        };
        let request = PromptRequest::new().with_scene("nowhere").with_settings(settings);
        let layers = compose_layers(&request);
        assert_eq!(
            layer_content(&layers, LayerKind::Lighting).unwrap(),
            "dramatic rim lighting, high contrast, moody atmosphere"
        );
    }

    #[test]
    fn test_composition_generic_phrase_gated() {
        let request = PromptRequest::new().with_scene("studio-white");
        let layers = compose_layers(&request);
        let content = layer_content(&layers, LayerKind::Composition).unwrap();
        assert_eq!(content, "square format", "only the ratio phrase for authored scenes");

        let request = PromptRequest::new().with_scene("nowhere");
        let layers = compose_layers(&request);
        let content = layer_content(&layers, LayerKind::Composition).unwrap();
        assert!(content.contains("centered composition at a slightly elevated angle"));
        assert!(content.contains("square format"));
    }

    #[test]
    fn test_deep_vision_sentences_and_lighting_conflict() {
        let intrinsic = ProductIntrinsicDna {
            material_analysis: MaterialAnalysis {
                surface_texture: "matte aluminum".to_string(),
                reflectivity: "low diffuse reflectivity".to_string(),
            },
            ..Default::default()
        };
        let art = ArtDirectionDna {
            lighting_scenario: Some(LightingScenario {
                style: "warm organic light".to_string(),
                direction: "side window".to_string(),
                atmosphere: "cozy".to_string(),
            }),
            optical_mechanics: Some(OpticalMechanics {
                lens_type: "85mm prime".to_string(),
                aperture: "f/1.2".to_string(),
                shutter_speed: Some("1/2000s".to_string()),
            }),
            ..Default::default()
        };

        // studio-white owns its lighting: the DNA lighting sentence is gone.
        let request = PromptRequest::new()
            .with_scene("studio-white")
            .with_deep_vision(intrinsic.clone(), art.clone());
        let layers = compose_layers(&request);
        let content = layer_content(&layers, LayerKind::DeepVision).unwrap();
        assert!(content.contains("The product surface is matte aluminum with low diffuse reflectivity"));
        assert!(content.contains("Shoot on a 85mm prime at f/1.2, 1/2000s shutter"));
        assert!(!content.contains("warm organic light"), "scene lighting wins: {content}");

        // An unknown scene has no authored lighting, so the sentence stays.
        let request = PromptRequest::new()
            .with_scene("nowhere")
            .with_deep_vision(intrinsic, art);
        let layers = compose_layers(&request);
        let content = layer_content(&layers, LayerKind::DeepVision).unwrap();
        assert!(content.contains("Light the product with warm organic light from side window, with cozy atmosphere"));
    }

    #[test]
    fn test_detail_layer_grammatical_feature_join() {
        let one = ProductInfo {
            features: vec!["waterproof".to_string()],
            ..Default::default()
        };
        let request = PromptRequest::new().with_product(one);
        let layers = compose_layers(&request);
        assert_eq!(
            layer_content(&layers, LayerKind::Detail).unwrap(),
            "features waterproof"
        );

        let three = ProductInfo {
            features: vec![
                "waterproof".to_string(),
                "solar".to_string(),
                "gps".to_string(),
                "ignored fourth".to_string(),
            ],
            ..Default::default()
        };
        let request = PromptRequest::new().with_product(three);
        let layers = compose_layers(&request);
        let content = layer_content(&layers, LayerKind::Detail).unwrap();
        assert!(content.contains("features waterproof, solar, and gps"));
        assert!(!content.contains("ignored fourth"));
    }

    #[test]
    fn test_detail_layer_prefers_scene_modifiers() {
        let mut product = smartwatch();
        product.style = "sporty".to_string();
        product.target_audience = "athletes".to_string();
        let request = PromptRequest::new().with_product(product.clone()).with_scene("lifestyle");
        let layers = compose_layers(&request);
        let content = layer_content(&layers, LayerKind::Detail).unwrap();
        assert!(content.contains("rendered in a sporty style"));
        assert!(content.contains("appealing to athletes"));
        assert!(
            content.contains("accented by desk setup and modern workspace"),
            "electronics has lifestyle-specific modifiers: {content}"
        );

        // outdoor has no electronics recommendation: generic enhancements.
        let request = PromptRequest::new().with_product(product).with_scene("outdoor");
        let layers = compose_layers(&request);
        let content = layer_content(&layers, LayerKind::Detail).unwrap();
        assert!(content.contains("accented by sleek metallic surface and reflective screen"));
    }

    #[test]
    fn test_color_fidelity_gated_on_setting() {
        let request = PromptRequest::new();
        let layers = compose_layers(&request);
        assert!(layer_content(&layers, LayerKind::ColorFidelity).is_none());

        let settings = GenerationSettings {
            color_correction: true,
            ..Default::default()
        };
        let request = PromptRequest::new().with_settings(settings);
        let layers = compose_layers(&request);
        assert_eq!(
            layer_content(&layers, LayerKind::ColorFidelity).unwrap(),
            phrases::COLOR_FIDELITY_INSTRUCTION
        );
    }

    #[test]
    fn test_negative_layer_includes_forbidden_elements() {
        let art = ArtDirectionDna {
            negative_constraints: Some(NegativeConstraints {
                forbidden_elements: vec!["vintage filters".to_string()],
            }),
            ..Default::default()
        };
        let request = PromptRequest::new().with_deep_vision(ProductIntrinsicDna::default(), art);
        let layers = compose_layers(&request);
        let content = layer_content(&layers, LayerKind::Negative).unwrap();
        assert!(content.contains("blurry"));
        assert!(content.contains("vintage filters"));
    }

    #[test]
    fn test_side_channels_disabled_when_empty() {
        let request = PromptRequest::new();
        let layers = compose_layers(&request);
        for kind in [
            LayerKind::Model,
            LayerKind::Fusion,
            LayerKind::Consistency,
            LayerKind::Marketing,
            LayerKind::Aida,
        ] {
            assert!(layer_content(&layers, kind).is_none(), "{kind:?} must be absent");
        }
    }

    #[test]
    fn test_side_channel_pass_through_verbatim() {
        let request = PromptRequest::new()
            .with_model_prompt("a young professional holding the product")
            .with_fusion_prompt("blend with the reference scene image");
        let layers = compose_layers(&request);
        assert_eq!(
            layer_content(&layers, LayerKind::Model).unwrap(),
            "a young professional holding the product"
        );
        let fusion = layers.iter().find(|l| l.name == LayerKind::Fusion).unwrap();
        assert!(fusion.enabled);
    }

    #[test]
    fn test_layer_override_replaces_generated_content() {
        let request = PromptRequest::new()
            .with_product(smartwatch())
            .set_layer(LayerKind::SceneContext, "a hand-built museum diorama");
        let layers = compose_layers(&request);
        assert_eq!(
            layer_content(&layers, LayerKind::SceneContext).unwrap(),
            "a hand-built museum diorama"
        );
    }

    #[test]
    fn test_reset_returns_blank_request() {
        let request = PromptRequest::new()
            .with_product(smartwatch())
            .with_scene("outdoor")
            .with_model_prompt("someone")
            .reset();
        assert!(request.product.is_none());
        assert_eq!(request.scene, DEFAULT_SCENE_ID);
        assert!(request.model_prompt.is_empty());
    }
}
