#![allow(dead_code)]

//! Scene registry — the six shooting contexts the studio offers.
//!
//! Each scene carries its authored English prompt hints plus structured
//! flags telling the builder which facets the hints already cover:
//! `has_detailed_lighting` / `has_detailed_composition` make the
//! scene-authored wording win over generic layer phrases, and
//! `environmental` marks scenes with a real surrounding environment where
//! the scale layer must speak up.

use serde::Serialize;

use crate::models::settings::{BackgroundPreset, LightingPreset, Quality, StylePreset};

/// Partial generation settings a scene applies when selected.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SceneDefaults {
    pub background: Option<BackgroundPreset>,
    pub lighting: Option<LightingPreset>,
    pub style: Option<StylePreset>,
    pub quality: Option<Quality>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scene {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub default_settings: SceneDefaults,
    pub prompt_hints: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub has_detailed_lighting: bool,
    pub has_detailed_composition: bool,
    /// True for scenes set in a real environment, where product scale
    /// relative to the surroundings matters.
    pub environmental: bool,
}

pub static SCENES: &[Scene] = &[
    Scene {
        id: "studio-white",
        name: "纯白棚拍",
        description: "专业电商白底图，干净简洁，适合主图展示",
        icon: "📷",
        default_settings: SceneDefaults {
            background: Some(BackgroundPreset::White),
            lighting: Some(LightingPreset::Studio),
            style: Some(StylePreset::Commercial),
            quality: None,
        },
        prompt_hints: &[
            "a pure white seamless background creating clean e-commerce presentation",
            "professional three-point studio lighting that creates soft diffused highlights",
            "centered composition at a slightly elevated angle showcasing product clearly",
        ],
        tags: &["电商主图", "白底图", "产品展示"],
        has_detailed_lighting: true,
        has_detailed_composition: true,
        environmental: false,
    },
    Scene {
        id: "lifestyle",
        name: "生活场景",
        description: "真实生活环境展示，增强产品代入感",
        icon: "🏠",
        default_settings: SceneDefaults {
            background: Some(BackgroundPreset::Contextual),
            lighting: Some(LightingPreset::Natural),
            style: Some(StylePreset::Realistic),
            quality: None,
        },
        prompt_hints: &[
            "a warm and inviting natural home environment with authentic lifestyle context",
            "soft natural daylight streaming through windows creating gentle ambient lighting",
            "lifestyle composition showing the product in realistic everyday use",
            "cozy interior setting with complementary decor elements and natural textures",
            "product shown at realistic scale proportional to surrounding furniture and environment",
        ],
        tags: &["场景图", "生活方式", "氛围感"],
        has_detailed_lighting: true,
        has_detailed_composition: true,
        environmental: true,
    },
    Scene {
        id: "outdoor",
        name: "户外场景",
        description: "户外自然环境，适合运动、户外用品",
        icon: "🌲",
        default_settings: SceneDefaults {
            background: Some(BackgroundPreset::Contextual),
            lighting: Some(LightingPreset::Natural),
            style: Some(StylePreset::Realistic),
            quality: None,
        },
        prompt_hints: &[
            "a dynamic natural outdoor environment with scenic nature backdrop",
            "golden hour lighting with warm natural sunlight creating dramatic atmosphere",
            "adventure lifestyle composition emphasizing product in action context",
            "sharp focus on product with natural depth of field and environmental storytelling",
            "product displayed at true-to-life scale within the natural outdoor setting",
        ],
        tags: &["户外", "运动", "自然"],
        has_detailed_lighting: true,
        has_detailed_composition: true,
        environmental: true,
    },
    Scene {
        id: "seasonal",
        name: "节日主题",
        description: "节日氛围图，适合促销活动",
        icon: "🎄",
        default_settings: SceneDefaults {
            background: Some(BackgroundPreset::Contextual),
            lighting: Some(LightingPreset::Dramatic),
            style: Some(StylePreset::Artistic),
            quality: None,
        },
        prompt_hints: &[
            "a festive atmosphere with seasonal decorations and celebration elements",
            "warm holiday lighting creating magical ambiance and special occasion mood",
            "gift-giving context with elegant seasonal styling and holiday themes",
            "dramatic composition emphasizing the joy and spirit of the celebration",
            "product presented at appropriate scale relative to holiday decorations and setting",
        ],
        tags: &["节日", "促销", "活动"],
        has_detailed_lighting: true,
        has_detailed_composition: true,
        environmental: true,
    },
    Scene {
        id: "luxury",
        name: "高端奢华",
        description: "奢华质感，适合高端品牌展示",
        icon: "💎",
        default_settings: SceneDefaults {
            background: Some(BackgroundPreset::Gradient),
            lighting: Some(LightingPreset::Dramatic),
            style: Some(StylePreset::Artistic),
            quality: Some(Quality::Ultra),
        },
        prompt_hints: &[
            "an elegant dark gradient background with subtle reflections emphasizing luxury",
            "dramatic rim lighting highlighting premium materials and craftsmanship textures",
            "sophisticated composition conveying exclusivity and refined aesthetic",
            "opulent atmosphere capturing every luxurious detail",
        ],
        tags: &["高端", "奢侈品", "品质感"],
        has_detailed_lighting: true,
        has_detailed_composition: true,
        environmental: false,
    },
    Scene {
        id: "minimalist",
        name: "极简风格",
        description: "简约设计感，突出产品本身",
        icon: "⬜",
        default_settings: SceneDefaults {
            background: Some(BackgroundPreset::Gradient),
            lighting: Some(LightingPreset::Soft),
            style: Some(StylePreset::Commercial),
            quality: None,
        },
        prompt_hints: &[
            "a minimalist design with clean aesthetic and generous negative space",
            "simple composition with geometric simplicity emphasizing modern elegance",
            "soft diffused lighting creating subtle shadows without distraction",
            "modern and sleek presentation focusing entirely on product form and function",
        ],
        tags: &["极简", "现代", "简约"],
        has_detailed_lighting: true,
        has_detailed_composition: true,
        environmental: false,
    },
];

/// Scene the builder starts on and every fallback path lands on.
pub const DEFAULT_SCENE_ID: &str = "studio-white";

/// Looks up a scene by id. Unknown ids are not an error.
pub fn scene_by_id(id: &str) -> Option<&'static Scene> {
    SCENES.iter().find(|scene| scene.id == id)
}

/// All scenes in definition order.
pub fn scene_list() -> &'static [Scene] {
    SCENES
}

/// Scenes carrying the given tag (exact membership).
pub fn scenes_by_tag(tag: &str) -> Vec<&'static Scene> {
    SCENES
        .iter()
        .filter(|scene| scene.tags.iter().any(|t| *t == tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_by_id_known() {
        let scene = scene_by_id("luxury").expect("luxury scene exists");
        assert_eq!(scene.name, "高端奢华");
        assert_eq!(scene.default_settings.quality, Some(Quality::Ultra));
    }

    #[test]
    fn test_scene_by_id_unknown_is_none() {
        assert!(scene_by_id("underwater").is_none());
    }

    #[test]
    fn test_scene_list_order_is_definition_order() {
        let ids: Vec<&str> = scene_list().iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec!["studio-white", "lifestyle", "outdoor", "seasonal", "luxury", "minimalist"]
        );
    }

    #[test]
    fn test_scenes_by_tag_filters_membership() {
        let outdoor = scenes_by_tag("户外");
        assert_eq!(outdoor.len(), 1);
        assert_eq!(outdoor[0].id, "outdoor");
        assert!(scenes_by_tag("水下").is_empty());
    }

    #[test]
    fn test_environmental_flag_marks_contextual_scenes() {
        let environmental: Vec<&str> = SCENES
            .iter()
            .filter(|s| s.environmental)
            .map(|s| s.id)
            .collect();
        assert_eq!(environmental, vec!["lifestyle", "outdoor", "seasonal"]);
    }

    #[test]
    fn test_all_scenes_declare_detailed_lighting_and_composition() {
        // Every shipped hint list describes both facets; the builder relies
        // on these flags instead of re-scanning hint text.
        for scene in SCENES {
            assert!(scene.has_detailed_lighting, "{} lighting flag", scene.id);
            assert!(scene.has_detailed_composition, "{} composition flag", scene.id);
        }
    }

    #[test]
    fn test_default_scene_exists() {
        assert!(scene_by_id(DEFAULT_SCENE_ID).is_some());
    }
}
