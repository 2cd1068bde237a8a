//! Central phrase tables — every enum→phrase lookup the layer generators
//! use lives here, keyed by the setting value, so no generator carries its
//! own drifting copy.

use crate::models::product::SizeCategory;
use crate::models::settings::{AspectRatio, LightingPreset, Quality, StylePreset};

pub fn lighting_phrase(lighting: LightingPreset) -> &'static str {
    match lighting {
        LightingPreset::Natural => "natural daylight, soft ambient lighting",
        LightingPreset::Studio => "professional studio lighting, three-point lighting setup",
        LightingPreset::Dramatic => "dramatic rim lighting, high contrast, moody atmosphere",
        LightingPreset::Soft => "soft diffused lighting, gentle shadows, even illumination",
    }
}

pub fn style_phrase(style: StylePreset) -> &'static str {
    match style {
        StylePreset::Realistic => "photorealistic, true to life, authentic look",
        StylePreset::Artistic => "artistic interpretation, creative styling, aesthetic appeal",
        StylePreset::Commercial => "commercial photography style, e-commerce ready, professional",
    }
}

pub fn quality_phrase(quality: Quality) -> &'static str {
    match quality {
        Quality::Standard => "high quality, sharp details, good resolution",
        Quality::High => "8K quality, ultra sharp, professional grade, pristine details",
        Quality::Ultra => {
            "16K resolution, masterpiece quality, exceptional clarity, flawless execution"
        }
    }
}

pub fn aspect_ratio_phrase(ratio: AspectRatio) -> &'static str {
    match ratio {
        AspectRatio::Square => "square format",
        AspectRatio::Landscape => "landscape orientation",
        AspectRatio::Portrait => "portrait orientation",
        AspectRatio::Wide => "wide cinematic format",
        AspectRatio::Vertical => "vertical mobile format",
    }
}

/// Relative-scale wording per size class, used only in environmental scenes.
pub fn scale_phrase(size: SizeCategory) -> &'static str {
    match size {
        SizeCategory::Pocket => "a small item that easily fits in a pocket",
        SizeCategory::Palm => "compact enough to rest in an open palm",
        SizeCategory::Handheld => "sized to be held comfortably in one hand",
        SizeCategory::Tabletop => "a tabletop object of moderate size",
        SizeCategory::Desktop => "a desktop-scale product",
        SizeCategory::Furniture => "a furniture-scale piece",
        SizeCategory::Large => "a large product that anchors its surroundings",
    }
}

/// Generic subject noun when the product has a category but no name.
pub fn subject_noun(category_id: &str) -> Option<&'static str> {
    match category_id {
        "electronics" => Some("an electronic device"),
        "fashion" => Some("a fashion item"),
        "beauty" => Some("a beauty product"),
        "home" => Some("a home furnishing piece"),
        "food" => Some("a food product"),
        "sports" => Some("a piece of sports equipment"),
        "jewelry" => Some("a jewelry piece"),
        "baby" => Some("a baby care product"),
        "office" => Some("an office supply item"),
        _ => None,
    }
}

/// Always appended when the scale layer is active.
pub const REALISTIC_SCALE_CLAUSE: &str =
    "maintaining realistic scale relative to surrounding environment and furniture";

pub const ENHANCE_DETAILS_PHRASE: &str = "enhanced micro details";
pub const ADD_SHADOW_PHRASE: &str = "natural product shadows";

/// Color fidelity instruction. Deliberately names no colors: color is
/// transferred visually from the reference image, and textual color names
/// have been observed to fight that transfer.
pub const COLOR_FIDELITY_INSTRUCTION: &str =
    "Match the product's colors, materials, and finish exactly as they appear in the \
     reference image, without reinterpreting or restyling them";

/// Stock negative prompts: rendering artifacts, anatomy failures, and
/// scale errors.
pub const DEFAULT_NEGATIVE_PROMPTS: &[&str] = &[
    "blurry",
    "low quality",
    "distorted",
    "watermark",
    "text overlay",
    "cropped",
    "out of frame",
    "duplicate",
    "ugly",
    "deformed",
    "bad anatomy",
    "extra limbs",
    "poorly drawn",
    "unrealistic proportions",
    "oversized product",
    "wrong scale",
    "disproportionate",
    "giant product",
    "tiny hands",
];

// Feature × scene fusion vocabulary for the scene-context layer.

pub const WATER_FEATURE_TERMS: &[&str] =
    &["waterproof", "water-resistant", "water resistant", "防水", "swim", "diving"];
pub const WATER_SCENE_TERMS: &[&str] = &["pool", "beach", "rain", "water", "outdoor"];
pub const WATER_INTERACTION_PHRASES: &[&str] = &[
    "water droplets beading on the product surface",
    "natural water interaction with gentle splashes",
];

pub const SOLAR_FEATURE_TERMS: &[&str] = &["solar", "outdoor", "sun", "太阳能", "户外"];
pub const SUN_SCENE_TERMS: &[&str] = &["sun", "outdoor", "beach", "garden"];
pub const SUNLIGHT_PHRASES: &[&str] = &[
    "bright natural sunlight casting crisp shadows",
    "subtle sun flare accentuating the open-air setting",
];

/// Generic framing phrase, used only when the scene's own hints do not
/// already dictate composition.
pub const GENERIC_COMPOSITION_PHRASE: &str = "centered composition at a slightly elevated angle";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_ratio_is_cinematic() {
        assert_eq!(aspect_ratio_phrase(AspectRatio::Wide), "wide cinematic format");
    }

    #[test]
    fn test_pocket_scale_phrase_names_the_pocket() {
        assert!(scale_phrase(SizeCategory::Pocket).contains("easily fits in a pocket"));
    }

    #[test]
    fn test_subject_noun_known_and_unknown() {
        assert_eq!(subject_noun("electronics"), Some("an electronic device"));
        assert!(subject_noun("vehicles").is_none());
        assert!(subject_noun("").is_none());
    }

    #[test]
    fn test_default_negatives_cover_blur_and_scale() {
        assert!(DEFAULT_NEGATIVE_PROMPTS.contains(&"blurry"));
        assert!(DEFAULT_NEGATIVE_PROMPTS.contains(&"wrong scale"));
    }

    #[test]
    fn test_color_fidelity_instruction_names_no_color() {
        for color in ["red", "blue", "green", "black", "white", "yellow"] {
            assert!(
                !COLOR_FIDELITY_INSTRUCTION.to_lowercase().contains(color),
                "instruction must not name {color}"
            );
        }
    }
}
