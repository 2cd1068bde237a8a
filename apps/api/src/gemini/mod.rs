//! Gemini client — the single point of entry for all upstream AI calls.
//!
//! ARCHITECTURAL RULE: no other module may call the image/vision API
//! directly. Generation and analysis both go through this module, which
//! owns retries, payload shaping, and response parsing.

use async_trait::async_trait;
use base64::Engine;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::generation::{GenerationResult, ImageRequest};

const GEMINI_VERSION_PATH: &str = "v1beta";
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Model returned no content")]
    EmptyContent,

    #[error("Model returned no images")]
    NoImages,
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (Google generateContent shape)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseModalities", skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<&'static str>>,
    temperature: f32,
    #[serde(rename = "topP")]
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
    #[serde(rename = "inlineData")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Generator trait
// ────────────────────────────────────────────────────────────────────────────

/// The upstream AI seam. Carried in `AppState` as `Arc<dyn ImageGenerator>`
/// so handlers and tests never depend on the concrete client.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// One generation call; may return several images.
    async fn generate(&self, request: &ImageRequest) -> Result<Vec<GenerationResult>, GeminiError>;

    /// Vision-analysis call that must return JSON.
    async fn analyze_json(
        &self,
        prompt: &str,
        images: &[String],
    ) -> Result<serde_json::Value, GeminiError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    analysis_model: String,
    generation_model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        base_url: String,
        analysis_model: String,
        generation_model: String,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url,
            analysis_model,
            generation_model,
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            GEMINI_VERSION_PATH,
            model,
            self.api_key
        )
    }

    /// Posts a generateContent request, retrying 429s and 5xx with
    /// exponential backoff.
    async fn call(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let mut last_error: Option<GeminiError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Gemini call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self.client.post(self.endpoint(model)).json(body).send().await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(GeminiError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Gemini API returned {}: {}", status, body);
                last_error = Some(GeminiError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(GeminiError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: GenerateContentResponse = response.json().await?;
            debug!("Gemini call succeeded ({} candidates)", parsed.candidates.len());
            return Ok(parsed);
        }

        Err(last_error.unwrap_or(GeminiError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    async fn generate(&self, request: &ImageRequest) -> Result<Vec<GenerationResult>, GeminiError> {
        let mut parts: Vec<Part> = request
            .reference_images
            .iter()
            .map(|image| Part {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: "image/jpeg".to_string(),
                    data: strip_data_url(image).to_string(),
                }),
            })
            .collect();

        let mut instruction = request.prompt.clone();
        if !request.negative_prompt.is_empty() {
            instruction.push_str(&format!("\n\nAvoid: {}", request.negative_prompt));
        }
        parts.push(Part {
            text: Some(instruction),
            inline_data: None,
        });

        let body = GenerateContentRequest {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_modalities: Some(vec!["TEXT", "IMAGE"]),
                temperature: 1.0,
                top_p: 0.95,
            },
        };

        let response = self.call(&self.generation_model, &body).await?;
        let results = collect_images(&response, &request.prompt, &self.generation_model);
        if results.is_empty() {
            return Err(GeminiError::NoImages);
        }
        Ok(results)
    }

    async fn analyze_json(
        &self,
        prompt: &str,
        images: &[String],
    ) -> Result<serde_json::Value, GeminiError> {
        let mut parts: Vec<Part> = images
            .iter()
            .map(|image| Part {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: "image/jpeg".to_string(),
                    data: strip_data_url(image).to_string(),
                }),
            })
            .collect();
        parts.push(Part {
            text: Some(prompt.to_string()),
            inline_data: None,
        });

        let body = GenerateContentRequest {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_modalities: None,
                temperature: 0.2,
                top_p: 0.95,
            },
        };

        let response = self.call(&self.analysis_model, &body).await?;
        let text = first_text(&response).ok_or(GeminiError::EmptyContent)?;
        let json = strip_json_fences(text);
        serde_json::from_str(json).map_err(GeminiError::Parse)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response helpers
// ────────────────────────────────────────────────────────────────────────────

/// Turns every inline-image part into a `GenerationResult` carrying a data
/// URL. Validates the payload decodes as base64 before accepting it.
fn collect_images(
    response: &GenerateContentResponse,
    prompt: &str,
    model: &str,
) -> Vec<GenerationResult> {
    let mut results = Vec::new();
    for candidate in &response.candidates {
        let Some(content) = &candidate.content else {
            continue;
        };
        for part in &content.parts {
            let Some(inline) = &part.inline_data else {
                continue;
            };
            if base64::engine::general_purpose::STANDARD
                .decode(inline.data.as_bytes())
                .is_err()
            {
                warn!("Discarding inline image with invalid base64 payload");
                continue;
            }
            results.push(GenerationResult {
                id: Uuid::new_v4(),
                image_url: format!("data:{};base64,{}", inline.mime_type, inline.data),
                prompt: prompt.to_string(),
                scene: String::new(),
                model: model.to_string(),
                created_at: Utc::now(),
            });
        }
    }
    results
}

fn first_text(response: &GenerateContentResponse) -> Option<&str> {
    response
        .candidates
        .iter()
        .filter_map(|c| c.content.as_ref())
        .flat_map(|c| c.parts.iter())
        .find_map(|p| p.text.as_deref())
}

/// Strips a `data:image/...;base64,` prefix, leaving raw base64 untouched.
fn strip_data_url(image: &str) -> &str {
    if image.starts_with("data:") {
        image.split_once("base64,").map(|(_, data)| data).unwrap_or(image)
    } else {
        image
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
