use anyhow::{Context, Result};

/// Default Gemini model. Overridable via `GEMINI_MODEL` — the prompt contract
/// is identical across models, so the identifier is configuration, not behavior.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Application configuration loaded from environment variables.
///
/// The Gemini API key is resolved here and nowhere else — it must never
/// appear as a literal in source. A missing key does not abort startup
/// (the form surfaces stay usable); generation reports it as a
/// `MissingCredential` failure before any network call.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        Ok(Config {
            gemini_api_key,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
