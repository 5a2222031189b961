//! LLM Client — the single point of entry for all Gemini API calls.
//!
//! ARCHITECTURAL RULE: no other module may call the Gemini API directly.
//! All LLM interactions MUST go through this module, and the rest of the
//! application only sees the [`LetterGenerator`] trait.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::generation::prompts::{build_prompt, SYSTEM_INSTRUCTION};
use crate::generation::{CoverLetterRequest, LetterGenerator};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Low randomness: factual accuracy over creativity.
const TEMPERATURE: f32 = 0.5;

/// Returned verbatim when the service responds without any text content.
pub const EMPTY_CONTENT_FALLBACK: &str = "No content generated.";

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("API key is missing")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types for the generateContent endpoint
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: RequestContent<'a>,
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
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
}

impl GeminiResponse {
    /// Concatenated text of the first candidate, if any was produced.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("");
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Wraps the Gemini `generateContent` endpoint.
///
/// Deliberately makes a single attempt per call — a failed generation is
/// surfaced to the user immediately rather than retried behind a spinner.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes one call to the Gemini API and returns the produced text, or
    /// [`EMPTY_CONTENT_FALLBACK`] if the service returned no content.
    ///
    /// A missing credential fails here, before any network traffic.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingCredential)?;

        let request_body = GenerateContentRequest {
            system_instruction: RequestContent {
                parts: vec![RequestPart { text: system }],
            },
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        };

        let url = format!("{GEMINI_API_BASE}/{}:generateContent", self.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let gemini_response: GeminiResponse = response.json().await?;

        match gemini_response.text() {
            Some(text) => {
                debug!("Gemini call succeeded ({} chars)", text.chars().count());
                Ok(text)
            }
            None => Ok(EMPTY_CONTENT_FALLBACK.to_string()),
        }
    }
}

#[async_trait]
impl LetterGenerator for GeminiClient {
    async fn generate(&self, request: &CoverLetterRequest) -> Result<String, AppError> {
        let prompt = build_prompt(request);
        match self.call(&prompt, SYSTEM_INSTRUCTION).await {
            Ok(text) => Ok(text),
            Err(LlmError::MissingCredential) => Err(AppError::MissingCredential),
            Err(e) => Err(AppError::Generation(e.to_string())),
        }
    }
}
