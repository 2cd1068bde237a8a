#![allow(dead_code)]

//! Category registry — product taxonomy driving scene suggestions and
//! vocabulary.
//!
//! Keyword resolution order is significant: id exact match, then name
//! substring, then bidirectional keyword substring. First match wins.

use serde::Serialize;

use crate::models::settings::LightingPreset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CameraAngle {
    Front,
    Elevated,
    Side,
    TopDown,
    Dynamic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthOfField {
    Shallow,
    Medium,
    Deep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackdropStyle {
    White,
    Gradient,
    Contextual,
    Reflective,
}

/// Photography profile a category prefers by default.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PhotographyProfile {
    pub preferred_lighting: LightingPreset,
    pub preferred_angle: CameraAngle,
    pub depth_of_field: DepthOfField,
    pub background_style: BackdropStyle,
}

/// One prioritized scene recommendation with its scene-specific modifiers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SceneAffinity {
    pub scene_id: &'static str,
    /// 1..=5, 5 highest.
    pub priority: u8,
    pub reason: &'static str,
    pub modifiers: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProductCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub keywords: &'static [&'static str],
    pub suggested_scenes: &'static [&'static str],
    pub prompt_enhancements: &'static [&'static str],
    pub photography: PhotographyProfile,
    pub scene_recommendations: &'static [SceneAffinity],
    pub material_keywords: &'static [&'static str],
    pub avoid_keywords: &'static [&'static str],
}

pub static CATEGORIES: &[ProductCategory] = &[
    ProductCategory {
        id: "electronics",
        name: "数码电子",
        icon: "📱",
        keywords: &["手机", "电脑", "耳机", "相机", "平板", "智能手表", "充电器"],
        suggested_scenes: &["studio-white", "minimalist", "lifestyle"],
        prompt_enhancements: &[
            "sleek metallic surface",
            "reflective screen",
            "modern technology aesthetic",
            "precise edge lighting",
            "clean digital product shot",
        ],
        photography: PhotographyProfile {
            preferred_lighting: LightingPreset::Studio,
            preferred_angle: CameraAngle::Elevated,
            depth_of_field: DepthOfField::Medium,
            background_style: BackdropStyle::Gradient,
        },
        scene_recommendations: &[
            SceneAffinity {
                scene_id: "studio-white",
                priority: 5,
                reason: "展示产品细节和工艺",
                modifiers: &["product focus", "tech aesthetic"],
            },
            SceneAffinity {
                scene_id: "minimalist",
                priority: 4,
                reason: "突出现代设计感",
                modifiers: &["clean lines", "geometric"],
            },
            SceneAffinity {
                scene_id: "lifestyle",
                priority: 3,
                reason: "展示使用场景",
                modifiers: &["desk setup", "modern workspace"],
            },
        ],
        material_keywords: &["aluminum", "glass", "plastic", "metal", "matte", "glossy"],
        avoid_keywords: &["vintage", "rustic", "organic", "handmade"],
    },
    ProductCategory {
        id: "fashion",
        name: "服装服饰",
        icon: "👔",
        keywords: &["衣服", "裤子", "裙子", "外套", "T恤", "帽子", "围巾"],
        suggested_scenes: &["lifestyle", "studio-white", "minimalist"],
        prompt_enhancements: &[
            "fabric texture detail",
            "natural draping",
            "fashion photography style",
            "soft flattering light",
            "stylish presentation",
        ],
        photography: PhotographyProfile {
            preferred_lighting: LightingPreset::Soft,
            preferred_angle: CameraAngle::Front,
            depth_of_field: DepthOfField::Shallow,
            background_style: BackdropStyle::Contextual,
        },
        scene_recommendations: &[
            SceneAffinity {
                scene_id: "lifestyle",
                priority: 5,
                reason: "展示穿搭效果",
                modifiers: &["fashion model", "styled outfit"],
            },
            SceneAffinity {
                scene_id: "studio-white",
                priority: 4,
                reason: "清晰展示款式",
                modifiers: &["flat lay", "hanging display"],
            },
            SceneAffinity {
                scene_id: "minimalist",
                priority: 3,
                reason: "突出设计细节",
                modifiers: &["fabric focus", "textile detail"],
            },
        ],
        material_keywords: &["cotton", "silk", "wool", "linen", "leather", "denim", "polyester"],
        avoid_keywords: &["tech", "digital", "electronic", "mechanical"],
    },
    ProductCategory {
        id: "beauty",
        name: "美妆护肤",
        icon: "💄",
        keywords: &["口红", "护肤品", "化妆品", "香水", "面膜", "精华"],
        suggested_scenes: &["luxury", "minimalist", "studio-white"],
        prompt_enhancements: &[
            "glossy product surface",
            "elegant bottle design",
            "beauty product lighting",
            "luxurious texture",
            "premium cosmetic photography",
        ],
        photography: PhotographyProfile {
            preferred_lighting: LightingPreset::Soft,
            preferred_angle: CameraAngle::Elevated,
            depth_of_field: DepthOfField::Shallow,
            background_style: BackdropStyle::Gradient,
        },
        scene_recommendations: &[
            SceneAffinity {
                scene_id: "luxury",
                priority: 5,
                reason: "突出高端品质",
                modifiers: &["premium packaging", "elegant"],
            },
            SceneAffinity {
                scene_id: "minimalist",
                priority: 4,
                reason: "简约高级感",
                modifiers: &["clean beauty", "skincare"],
            },
            SceneAffinity {
                scene_id: "studio-white",
                priority: 3,
                reason: "产品细节展示",
                modifiers: &["bottle detail", "texture"],
            },
        ],
        material_keywords: &["glass", "ceramic", "metal cap", "frosted", "transparent", "rose gold"],
        avoid_keywords: &["industrial", "rugged", "outdoor", "sporty"],
    },
    ProductCategory {
        id: "home",
        name: "家居家装",
        icon: "🏡",
        keywords: &["家具", "灯具", "装饰", "收纳", "床品", "厨具"],
        suggested_scenes: &["lifestyle", "minimalist", "studio-white"],
        prompt_enhancements: &[
            "cozy home atmosphere",
            "interior design context",
            "warm ambient lighting",
            "comfortable living space",
            "home lifestyle photography",
        ],
        photography: PhotographyProfile {
            preferred_lighting: LightingPreset::Natural,
            preferred_angle: CameraAngle::Elevated,
            depth_of_field: DepthOfField::Medium,
            background_style: BackdropStyle::Contextual,
        },
        scene_recommendations: &[
            SceneAffinity {
                scene_id: "lifestyle",
                priority: 5,
                reason: "展示家居场景",
                modifiers: &["interior design", "room setting"],
            },
            SceneAffinity {
                scene_id: "minimalist",
                priority: 4,
                reason: "突出产品设计",
                modifiers: &["Scandinavian", "modern home"],
            },
            SceneAffinity {
                scene_id: "studio-white",
                priority: 3,
                reason: "产品独立展示",
                modifiers: &["product focus", "clean"],
            },
        ],
        material_keywords: &["wood", "fabric", "ceramic", "glass", "metal", "rattan", "marble"],
        avoid_keywords: &["industrial", "tech", "digital", "sporty"],
    },
    ProductCategory {
        id: "food",
        name: "食品饮料",
        icon: "🍔",
        keywords: &["零食", "饮料", "茶叶", "咖啡", "保健品", "调味品"],
        suggested_scenes: &["lifestyle", "studio-white", "seasonal"],
        prompt_enhancements: &[
            "appetizing presentation",
            "food photography lighting",
            "fresh and delicious look",
            "culinary styling",
            "gourmet aesthetic",
        ],
        photography: PhotographyProfile {
            preferred_lighting: LightingPreset::Natural,
            preferred_angle: CameraAngle::TopDown,
            depth_of_field: DepthOfField::Shallow,
            background_style: BackdropStyle::Contextual,
        },
        scene_recommendations: &[
            SceneAffinity {
                scene_id: "lifestyle",
                priority: 5,
                reason: "展示美食场景",
                modifiers: &["food styling", "appetizing"],
            },
            SceneAffinity {
                scene_id: "studio-white",
                priority: 4,
                reason: "包装展示",
                modifiers: &["product packaging", "clean"],
            },
            SceneAffinity {
                scene_id: "seasonal",
                priority: 3,
                reason: "节日礼品展示",
                modifiers: &["gift set", "festive"],
            },
        ],
        material_keywords: &["packaging", "glass bottle", "tin", "paper box", "fresh", "organic"],
        avoid_keywords: &["tech", "digital", "industrial", "mechanical"],
    },
    ProductCategory {
        id: "sports",
        name: "运动户外",
        icon: "⚽",
        keywords: &["运动鞋", "运动服", "健身器材", "户外装备", "球类"],
        suggested_scenes: &["outdoor", "lifestyle", "studio-white"],
        prompt_enhancements: &[
            "dynamic action feel",
            "athletic lifestyle",
            "outdoor adventure context",
            "energetic composition",
            "sports photography style",
        ],
        photography: PhotographyProfile {
            preferred_lighting: LightingPreset::Natural,
            preferred_angle: CameraAngle::Dynamic,
            depth_of_field: DepthOfField::Medium,
            background_style: BackdropStyle::Contextual,
        },
        scene_recommendations: &[
            SceneAffinity {
                scene_id: "outdoor",
                priority: 5,
                reason: "展示户外使用",
                modifiers: &["action shot", "adventure"],
            },
            SceneAffinity {
                scene_id: "lifestyle",
                priority: 4,
                reason: "运动生活方式",
                modifiers: &["athletic", "gym setting"],
            },
            SceneAffinity {
                scene_id: "studio-white",
                priority: 3,
                reason: "产品细节展示",
                modifiers: &["product focus", "technical detail"],
            },
        ],
        material_keywords: &["mesh", "rubber", "synthetic", "breathable", "durable", "waterproof"],
        avoid_keywords: &["formal", "elegant", "luxury", "delicate"],
    },
    ProductCategory {
        id: "jewelry",
        name: "珠宝首饰",
        icon: "💍",
        keywords: &["戒指", "项链", "手链", "耳环", "手表", "眼镜"],
        suggested_scenes: &["luxury", "minimalist", "studio-white"],
        prompt_enhancements: &[
            "sparkling gemstone",
            "precious metal reflection",
            "jewelry macro photography",
            "elegant luxury lighting",
            "high-end accessory shot",
        ],
        photography: PhotographyProfile {
            preferred_lighting: LightingPreset::Dramatic,
            preferred_angle: CameraAngle::Elevated,
            depth_of_field: DepthOfField::Shallow,
            background_style: BackdropStyle::Reflective,
        },
        scene_recommendations: &[
            SceneAffinity {
                scene_id: "luxury",
                priority: 5,
                reason: "突出奢华品质",
                modifiers: &["sparkle", "precious"],
            },
            SceneAffinity {
                scene_id: "minimalist",
                priority: 4,
                reason: "优雅简约展示",
                modifiers: &["elegant display", "refined"],
            },
            SceneAffinity {
                scene_id: "studio-white",
                priority: 3,
                reason: "清晰细节展示",
                modifiers: &["macro detail", "craftsmanship"],
            },
        ],
        material_keywords: &["gold", "silver", "platinum", "diamond", "gemstone", "pearl", "crystal"],
        avoid_keywords: &["casual", "sporty", "outdoor", "rugged"],
    },
    ProductCategory {
        id: "baby",
        name: "母婴用品",
        icon: "👶",
        keywords: &["婴儿用品", "玩具", "童装", "奶瓶", "纸尿裤"],
        suggested_scenes: &["lifestyle", "studio-white", "minimalist"],
        prompt_enhancements: &[
            "soft pastel colors",
            "gentle nurturing atmosphere",
            "safe and comforting",
            "family-friendly styling",
            "warm parenting context",
        ],
        photography: PhotographyProfile {
            preferred_lighting: LightingPreset::Soft,
            preferred_angle: CameraAngle::Elevated,
            depth_of_field: DepthOfField::Medium,
            background_style: BackdropStyle::Contextual,
        },
        scene_recommendations: &[
            SceneAffinity {
                scene_id: "lifestyle",
                priority: 5,
                reason: "温馨家庭场景",
                modifiers: &["nursery", "family"],
            },
            SceneAffinity {
                scene_id: "studio-white",
                priority: 4,
                reason: "产品安全展示",
                modifiers: &["safe", "clean"],
            },
            SceneAffinity {
                scene_id: "minimalist",
                priority: 3,
                reason: "简约温柔风格",
                modifiers: &["pastel", "gentle"],
            },
        ],
        material_keywords: &["soft", "cotton", "safe plastic", "silicone", "organic", "hypoallergenic"],
        avoid_keywords: &["sharp", "industrial", "dark", "dramatic", "luxury"],
    },
    ProductCategory {
        id: "office",
        name: "办公文具",
        icon: "📎",
        keywords: &["文具", "办公用品", "笔记本", "打印机", "收纳盒"],
        suggested_scenes: &["minimalist", "studio-white", "lifestyle"],
        prompt_enhancements: &[
            "organized workspace",
            "professional office setting",
            "clean desk aesthetic",
            "productive atmosphere",
            "modern office photography",
        ],
        photography: PhotographyProfile {
            preferred_lighting: LightingPreset::Natural,
            preferred_angle: CameraAngle::Elevated,
            depth_of_field: DepthOfField::Medium,
            background_style: BackdropStyle::Contextual,
        },
        scene_recommendations: &[
            SceneAffinity {
                scene_id: "minimalist",
                priority: 5,
                reason: "专业简约风格",
                modifiers: &["desk setup", "organized"],
            },
            SceneAffinity {
                scene_id: "studio-white",
                priority: 4,
                reason: "产品清晰展示",
                modifiers: &["product focus", "clean"],
            },
            SceneAffinity {
                scene_id: "lifestyle",
                priority: 3,
                reason: "办公场景展示",
                modifiers: &["workspace", "productivity"],
            },
        ],
        material_keywords: &["paper", "metal", "plastic", "leather", "wood", "cork"],
        avoid_keywords: &["outdoor", "sporty", "casual", "party"],
    },
];

/// Looks up a category by exact id.
pub fn category_by_id(id: &str) -> Option<&'static ProductCategory> {
    CATEGORIES.iter().find(|cat| cat.id == id)
}

/// Resolves free text to a category. Resolution order is significant:
/// 1. exact case-insensitive id match (supports analysis-mapped ids),
/// 2. substring match against the category name,
/// 3. bidirectional substring match against any keyword.
pub fn category_by_keyword(keyword: &str) -> Option<&'static ProductCategory> {
    if keyword.is_empty() {
        return None;
    }
    let lower = keyword.to_lowercase();

    if let Some(by_id) = CATEGORIES.iter().find(|cat| cat.id.to_lowercase() == lower) {
        return Some(by_id);
    }

    if let Some(by_name) = CATEGORIES
        .iter()
        .find(|cat| cat.name.to_lowercase().contains(&lower))
    {
        return Some(by_name);
    }

    CATEGORIES.iter().find(|cat| {
        cat.keywords.iter().any(|k| {
            let k_lower = k.to_lowercase();
            k_lower.contains(&lower) || lower.contains(&k_lower)
        })
    })
}

/// Every keyword across all categories, in registry order.
pub fn all_keywords() -> Vec<&'static str> {
    CATEGORIES.iter().flat_map(|cat| cat.keywords.iter().copied()).collect()
}

/// Scene recommendations for a category, sorted descending by priority.
/// The sort is stable: equal priorities keep registry order.
pub fn scene_recommendations(category_id: &str) -> Vec<&'static SceneAffinity> {
    let Some(category) = category_by_id(category_id) else {
        return Vec::new();
    };
    let mut recs: Vec<&'static SceneAffinity> = category.scene_recommendations.iter().collect();
    recs.sort_by(|a, b| b.priority.cmp(&a.priority));
    recs
}

/// Scene-specific modifiers for a category, empty when no recommendation
/// entry exists for that scene.
pub fn scene_modifiers(category_id: &str, scene_id: &str) -> &'static [&'static str] {
    category_by_id(category_id)
        .and_then(|cat| {
            cat.scene_recommendations
                .iter()
                .find(|rec| rec.scene_id == scene_id)
        })
        .map(|rec| rec.modifiers)
        .unwrap_or(&[])
}

/// True if the keyword hits the category's avoid list (case-insensitive
/// substring containment).
pub fn should_avoid_keyword(category_id: &str, keyword: &str) -> bool {
    let Some(category) = category_by_id(category_id) else {
        return false;
    };
    let lower = keyword.to_lowercase();
    category
        .avoid_keywords
        .iter()
        .any(|avoid| lower.contains(&avoid.to_lowercase()))
}

pub fn material_keywords(category_id: &str) -> &'static [&'static str] {
    category_by_id(category_id)
        .map(|cat| cat.material_keywords)
        .unwrap_or(&[])
}
