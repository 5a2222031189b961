// Cover letter generation.
// All LLM calls go through llm_client — no direct Gemini SDK calls here.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;

use crate::errors::AppError;

/// Inputs for one generation attempt. Built fresh per attempt from the form
/// snapshot; immutable once sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverLetterRequest {
    pub job_description: String,
    pub resume_text: String,
    /// May be empty — the prompt substitutes a "no special instructions" note.
    pub instructions: String,
    /// May be empty — the prompt then instructs the service to derive the
    /// name from the resume text.
    pub candidate_name: String,
}

/// The generation backend trait. Implement this to swap backends without
/// touching the endpoint, handler, or caller code.
///
/// Carried in `AppState` as `Arc<dyn LetterGenerator>`.
#[async_trait]
pub trait LetterGenerator: Send + Sync {
    /// Single attempt, no internal retry. Length preconditions are enforced
    /// by the caller; this does not re-validate.
    async fn generate(&self, request: &CoverLetterRequest) -> Result<String, AppError>;
}
