//! Axum route handlers for letter generation.

use anyhow::anyhow;
use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::{AppError, GENERATION_FAILED_MESSAGE};
use crate::generation::CoverLetterRequest;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub letter: String,
}

/// POST /api/v1/generate
///
/// Snapshots the form into an immutable `CoverLetterRequest`, calls the
/// generation backend once, and stores exactly one of letter / error back on
/// the form. The backend call runs in its own task so the form settles even
/// if this request future is dropped mid-flight (client disconnect); the
/// form lock is never held across the call.
pub async fn handle_generate(
    State(state): State<AppState>,
) -> Result<Json<GenerateResponse>, AppError> {
    let (request, seq) = {
        let mut form = state.form.lock().await;
        if form.is_generating {
            return Err(AppError::Conflict(
                "A generation request is already in flight.".to_string(),
            ));
        }
        if !form.can_generate() {
            return Err(AppError::Validation(
                "Please provide both a Job Description and Resume content to proceed.".to_string(),
            ));
        }
        let seq = form.begin_generation();
        let request = CoverLetterRequest {
            job_description: form.job_description.current_text.clone(),
            resume_text: form.resume.current_text.clone(),
            instructions: form.instructions.current_text.clone(),
            candidate_name: form.candidate_name.clone(),
        };
        (request, seq)
    };

    let generator = state.generator.clone();
    let form = state.form.clone();
    let attempt = tokio::spawn(async move {
        let result = generator.generate(&request).await;
        // Only the user-safe summary is recorded on the form; the detailed
        // cause is logged when the error is rendered.
        let outcome = match &result {
            Ok(letter) => Ok(letter.clone()),
            Err(err @ AppError::MissingCredential) => Err(err.to_string()),
            Err(_) => Err(GENERATION_FAILED_MESSAGE.to_string()),
        };
        form.lock().await.finish_generation(seq, outcome);
        result
    });

    match attempt.await {
        Ok(Ok(letter)) => {
            info!("Cover letter generated ({} chars)", letter.chars().count());
            Ok(Json(GenerateResponse { letter }))
        }
        Ok(Err(err)) => Err(err),
        Err(join_error) => {
            // The attempt task panicked before settling; release the busy
            // flag so the next attempt is not blocked.
            state
                .form
                .lock()
                .await
                .finish_generation(seq, Err(GENERATION_FAILED_MESSAGE.to_string()));
            Err(AppError::Internal(anyhow!(
                "generation task failed: {join_error}"
            )))
        }
    }
}
