//! Layer definitions: kinds, weights, and bucket membership.

use serde::{Deserialize, Serialize};

/// One semantic facet of the compiled prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    CoreSubject,
    Model,
    Fusion,
    Consistency,
    SceneContext,
    DeepVision,
    Scale,
    Lighting,
    Composition,
    Style,
    Quality,
    Semantic,
    Marketing,
    Aida,
    Detail,
    ColorFidelity,
    Negative,
}

/// All layers in declaration order — the order content is generated in.
pub const ALL_LAYERS: &[LayerKind] = &[
    LayerKind::CoreSubject,
    LayerKind::Model,
    LayerKind::Fusion,
    LayerKind::Consistency,
    LayerKind::SceneContext,
    LayerKind::DeepVision,
    LayerKind::Scale,
    LayerKind::Lighting,
    LayerKind::Composition,
    LayerKind::Style,
    LayerKind::Quality,
    LayerKind::Semantic,
    LayerKind::Marketing,
    LayerKind::Aida,
    LayerKind::Detail,
    LayerKind::ColorFidelity,
    LayerKind::Negative,
];

/// Semantic bucket a layer lands in during final assembly. The negative
/// layer belongs to none — it is surfaced separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Instruction,
    Subject,
    Environment,
    Technical,
    Enhancement,
}

impl LayerKind {
    /// Legacy relative emphasis. Retained as a signal on the layer record;
    /// bucket rendering order is fixed per bucket, not weight-driven.
    pub fn weight(self) -> f32 {
        match self {
            LayerKind::CoreSubject => 1.5,
            LayerKind::Model => 1.4,
            LayerKind::Fusion => 1.4,
            LayerKind::Consistency => 1.3,
            LayerKind::SceneContext => 1.2,
            LayerKind::DeepVision => 1.35,
            LayerKind::Scale => 1.4,
            LayerKind::Lighting => 1.0,
            LayerKind::Composition => 1.0,
            LayerKind::Style => 1.1,
            LayerKind::Quality => 1.3,
            LayerKind::Semantic => 0.9,
            LayerKind::Marketing => 1.25,
            LayerKind::Aida => 1.15,
            LayerKind::Detail => 0.8,
            LayerKind::ColorFidelity => 1.45,
            LayerKind::Negative => 1.0,
        }
    }

    pub fn bucket(self) -> Option<Bucket> {
        match self {
            LayerKind::CoreSubject => Some(Bucket::Instruction),
            LayerKind::Model | LayerKind::Fusion | LayerKind::Consistency => Some(Bucket::Subject),
            LayerKind::SceneContext
            | LayerKind::Lighting
            | LayerKind::Composition
            | LayerKind::Scale => Some(Bucket::Environment),
            LayerKind::DeepVision | LayerKind::Quality | LayerKind::ColorFidelity => {
                Some(Bucket::Technical)
            }
            LayerKind::Style
            | LayerKind::Semantic
            | LayerKind::Marketing
            | LayerKind::Aida
            | LayerKind::Detail => Some(Bucket::Enhancement),
            LayerKind::Negative => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayerKind::CoreSubject => "core_subject",
            LayerKind::Model => "model",
            LayerKind::Fusion => "fusion",
            LayerKind::Consistency => "consistency",
            LayerKind::SceneContext => "scene_context",
            LayerKind::DeepVision => "deep_vision",
            LayerKind::Scale => "scale",
            LayerKind::Lighting => "lighting",
            LayerKind::Composition => "composition",
            LayerKind::Style => "style",
            LayerKind::Quality => "quality",
            LayerKind::Semantic => "semantic",
            LayerKind::Marketing => "marketing",
            LayerKind::Aida => "aida",
            LayerKind::Detail => "detail",
            LayerKind::ColorFidelity => "color_fidelity",
            LayerKind::Negative => "negative",
        }
    }
}

/// One computed layer. Transient — recomputed on every build, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptLayer {
    pub name: LayerKind,
    pub content: String,
    pub weight: f32,
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_layer_has_a_weight_and_serde_name() {
        for &kind in ALL_LAYERS {
            assert!(kind.weight() > 0.0);
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_negative_layer_has_no_bucket() {
        assert!(LayerKind::Negative.bucket().is_none());
        for &kind in ALL_LAYERS {
            if kind != LayerKind::Negative {
                assert!(kind.bucket().is_some(), "{:?} must land in a bucket", kind);
            }
        }
    }

    #[test]
    fn test_layer_kind_deserializes_from_snake_case() {
        let kind: LayerKind = serde_json::from_str("\"color_fidelity\"").unwrap();
        assert_eq!(kind, LayerKind::ColorFidelity);
    }
}
