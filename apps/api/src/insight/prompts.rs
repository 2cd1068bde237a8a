//! Prompt constants for the product-analysis call.

/// Analysis prompt template. Replace `{context}` with the user-provided
/// product context line before sending.
pub const ANALYZE_PROMPT_TEMPLATE: &str = r##"You are an expert e-commerce product analyst. Study the attached product photo together with the user context.

{context}

Respond with valid JSON only. Do NOT include any text outside the JSON object. Do NOT use markdown code fences.

Return a JSON object with this EXACT schema:
{
  "categoryName": "short English category label",
  "mappedCategory": "the closest internal category key — exactly one of: electronics / fashion / beauty / home / food / sports / jewelry / baby / office",
  "primaryMaterial": "dominant material",
  "surfaceTexture": "surface texture description in English",
  "reflectiveness": "high / medium / low / none",
  "colorPalette": ["#hex1", "#hex2"],
  "features": ["selling point 1", "selling point 2", "selling point 3"],
  "targetAudience": "inferred audience",
  "predictedStyle": "design style",
  "suggestedScenes": ["scene keys from: studio-white / lifestyle / outdoor / seasonal / luxury / minimalist"],
  "generatedPrompts": ["reusable English prompt fragment"],
  "sceneDescriptions": {
    "studio-white": "description emphasizing material, craft and detail",
    "lifestyle": "description emphasizing everyday use and warmth",
    "outdoor": "description emphasizing durability and action",
    "seasonal": "description emphasizing gifting and festive mood",
    "luxury": "description emphasizing quality and craftsmanship",
    "minimalist": "description emphasizing form and restraint"
  },
  "sizeCategory": "exactly one of: pocket / palm / handheld / tabletop / desktop / furniture / large",
  "sizeReference": "natural English phrase describing relative size, e.g. 'fits in one palm'"
}

Rules:
- Write every sceneDescription as ONE concise sentence tailored to that scene's mood.
- sizeCategory and sizeReference matter for realistic scale: judge them from the photo, not the category.
- Keep features concrete and visual — things a shopper could verify in a photo."##;

/// Builds the user-context line injected into the template.
pub fn context_line(name: Option<&str>, description: Option<&str>) -> String {
    match (name.unwrap_or("").trim(), description.unwrap_or("").trim()) {
        ("", "") => "No additional product text was provided.".to_string(),
        (name, description) => format!(
            "User-provided product context: name=\"{name}\", description=\"{description}\". Combine it with what the photo shows."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_line_empty() {
        assert_eq!(context_line(None, None), "No additional product text was provided.");
    }

    #[test]
    fn test_context_line_with_values() {
        let line = context_line(Some("SmartWatch X"), Some("rugged watch"));
        assert!(line.contains("SmartWatch X"));
        assert!(line.contains("rugged watch"));
    }

    #[test]
    fn test_template_has_context_slot() {
        assert!(ANALYZE_PROMPT_TEMPLATE.contains("{context}"));
    }
}
