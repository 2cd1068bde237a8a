//! Generation settings — the knobs a caller sets before each build/generate.

use serde::{Deserialize, Serialize};

/// Output aspect ratio. Wire values match the UI options ("1:1", "16:9", ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:3")]
    Landscape,
    #[serde(rename = "3:4")]
    Portrait,
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "9:16")]
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Standard,
    #[default]
    High,
    Ultra,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    Realistic,
    Artistic,
    #[default]
    Commercial,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightingPreset {
    Natural,
    #[default]
    Studio,
    Dramatic,
    Soft,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundPreset {
    #[default]
    White,
    Gradient,
    Contextual,
    Transparent,
}

/// Full generation settings. Defaults mirror the studio's stock configuration:
/// one square commercial shot under studio light on white, with detail
/// enhancement and shadows on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub quantity: u32,
    pub aspect_ratio: AspectRatio,
    pub quality: Quality,
    pub style: StylePreset,
    pub lighting: LightingPreset,
    pub background: BackgroundPreset,
    pub enhance_details: bool,
    pub remove_background: bool,
    pub add_shadow: bool,
    pub color_correction: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            quantity: 1,
            aspect_ratio: AspectRatio::Square,
            quality: Quality::High,
            style: StylePreset::Commercial,
            lighting: LightingPreset::Studio,
            background: BackgroundPreset::White,
            enhance_details: true,
            remove_background: false,
            add_shadow: true,
            color_correction: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_configuration() {
        let s = GenerationSettings::default();
        assert_eq!(s.quantity, 1);
        assert_eq!(s.aspect_ratio, AspectRatio::Square);
        assert_eq!(s.quality, Quality::High);
        assert_eq!(s.style, StylePreset::Commercial);
        assert_eq!(s.lighting, LightingPreset::Studio);
        assert!(s.enhance_details);
        assert!(s.add_shadow);
        assert!(!s.color_correction);
    }

    #[test]
    fn test_aspect_ratio_wire_values() {
        assert_eq!(
            serde_json::to_string(&AspectRatio::Wide).unwrap(),
            "\"16:9\""
        );
        let parsed: AspectRatio = serde_json::from_str("\"9:16\"").unwrap();
        assert_eq!(parsed, AspectRatio::Vertical);
    }

    #[test]
    fn test_settings_deserialize_with_missing_fields() {
        let s: GenerationSettings = serde_json::from_str(r#"{"lighting":"natural"}"#).unwrap();
        assert_eq!(s.lighting, LightingPreset::Natural);
        assert_eq!(s.quality, Quality::High, "missing fields fall back to defaults");
    }
}
