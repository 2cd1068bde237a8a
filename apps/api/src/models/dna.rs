//! Deep Vision DNA — structured descriptors produced by the marketing
//! analysis collaborator.
//!
//! Intrinsic DNA captures facts about the product that must not change
//! between art-direction variants. Art Direction DNA captures one stylistic
//! variant and may be swapped freely. Field names follow the collaborator's
//! JSON contract verbatim.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialAnalysis {
    /// e.g. "Matte aluminum, coarse grain"
    pub surface_texture: String,
    /// e.g. "Low reflectivity, diffuse"
    pub reflectivity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFactor {
    pub shape_keywords: Vec<String>,
}

/// Immutable product facts — the consistency anchor across variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductIntrinsicDna {
    pub material_analysis: MaterialAnalysis,
    pub form_factor: FormFactor,
    pub brand_color_palette: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingScenario {
    pub style: String,
    pub direction: String,
    pub atmosphere: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotographySettings {
    pub shot_scale: String,
    pub depth_of_field: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionGuide {
    pub keyword: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorGrading {
    pub tone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpticalMechanics {
    /// e.g. "100mm Macro Lens"
    pub lens_type: String,
    /// e.g. "f/2.8 with circular bokeh"
    pub aperture: String,
    /// e.g. "1/2000s frozen"
    pub shutter_speed: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NegativeConstraints {
    pub forbidden_elements: Vec<String>,
}

/// One stylistic variant. Every sub-field is optional — the builder guards
/// each sentence individually and omits what is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtDirectionDna {
    pub lighting_scenario: Option<LightingScenario>,
    pub photography_settings: Option<PhotographySettings>,
    pub composition_guide: Option<CompositionGuide>,
    pub color_grading: Option<ColorGrading>,
    pub optical_mechanics: Option<OpticalMechanics>,
    pub negative_constraints: Option<NegativeConstraints>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_art_direction_deserializes_from_partial_json() {
        let json = r#"{
            "lighting_scenario": {
                "style": "Soft commercial lighting",
                "direction": "Top-left softbox",
                "atmosphere": "Clean and professional"
            },
            "negative_constraints": {
                "forbidden_elements": ["vintage filters", "plastic textures"]
            }
        }"#;
        let dna: ArtDirectionDna = serde_json::from_str(json).unwrap();
        assert_eq!(
            dna.lighting_scenario.as_ref().unwrap().style,
            "Soft commercial lighting"
        );
        assert!(dna.photography_settings.is_none());
        assert_eq!(
            dna.negative_constraints.unwrap().forbidden_elements.len(),
            2
        );
    }

    #[test]
    fn test_intrinsic_dna_round_trips() {
        let dna = ProductIntrinsicDna {
            material_analysis: MaterialAnalysis {
                surface_texture: "brushed steel".to_string(),
                reflectivity: "high gloss".to_string(),
            },
            form_factor: FormFactor {
                shape_keywords: vec!["cylindrical".to_string(), "chamfered edges".to_string()],
            },
            brand_color_palette: vec!["#0A84FF".to_string()],
        };
        let json = serde_json::to_string(&dna).unwrap();
        let back: ProductIntrinsicDna = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dna);
    }
}
