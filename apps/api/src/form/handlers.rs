//! Axum route handlers for the form API.
//!
//! Handlers are thin: they translate HTTP into `FormState` transitions. The
//! form lock is never held across the extraction await — the upload handler
//! issues a sequence number, releases the lock, extracts, then re-locks and
//! settles, so a superseded upload can never clobber a newer one.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::extraction;
use crate::form::surface::{ExtractionOutcome, SurfaceView};
use crate::form::{FormView, SurfaceId};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetTextRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SetNameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct VisibilityRequest {
    pub visible: bool,
}

#[derive(Debug, Deserialize)]
pub struct ClearRequest {
    #[serde(default)]
    pub confirm: bool,
}

/// GET /api/v1/form
pub async fn handle_get_form(State(state): State<AppState>) -> Json<FormView> {
    let form = state.form.lock().await;
    Json(form.view())
}

/// POST /api/v1/form/:surface/text
///
/// Direct typing/pasting into a surface. A resume change is an acquisition
/// event, so name inference fires here (only while the name is empty).
pub async fn handle_set_text(
    State(state): State<AppState>,
    Path(surface): Path<SurfaceId>,
    Json(request): Json<SetTextRequest>,
) -> Json<SurfaceView> {
    let mut form = state.form.lock().await;
    form.surface_mut(surface).set_text(request.text);
    if surface == SurfaceId::Resume {
        form.maybe_infer_name();
    }
    Json(form.surface(surface).view())
}

/// POST /api/v1/form/:surface/mode
pub async fn handle_toggle_mode(
    State(state): State<AppState>,
    Path(surface): Path<SurfaceId>,
) -> Json<SurfaceView> {
    let mut form = state.form.lock().await;
    form.surface_mut(surface).toggle_mode();
    Json(form.surface(surface).view())
}

/// POST /api/v1/form/:surface/upload
///
/// Multipart file upload routed through the extraction pipeline. Extraction
/// failures never propagate as HTTP errors — they are settled into the
/// surface (error message shown, file name cleared) and the surface view is
/// returned with status 200, so the client stays interactive.
pub async fn handle_upload(
    State(state): State<AppState>,
    Path(surface): Path<SurfaceId>,
    mut multipart: Multipart,
) -> Result<Json<SurfaceView>, AppError> {
    if surface == SurfaceId::Instructions {
        return Err(AppError::Validation(
            "File upload is not available for the instructions field.".to_string(),
        ));
    }

    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
        .ok_or_else(|| AppError::Validation("Expected a file field.".to_string()))?;
    let file_name = field.file_name().unwrap_or("upload").to_string();
    let declared_mime = field.content_type().map(str::to_string);
    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

    let seq = {
        let mut form = state.form.lock().await;
        form.surface_mut(surface).begin_extraction()
    };

    let outcome = match extraction::extract_document(&file_name, declared_mime.as_deref(), &data)
        .await
    {
        Ok(text) => ExtractionOutcome::Success {
            file_name: file_name.clone(),
            text,
        },
        Err(e) => {
            warn!("Extraction failed for '{file_name}': {e}");
            ExtractionOutcome::Failure {
                message: e.to_string(),
            }
        }
    };
    let succeeded = matches!(outcome, ExtractionOutcome::Success { .. });

    let mut form = state.form.lock().await;
    let applied = form.surface_mut(surface).settle_extraction(seq, outcome);
    if applied && succeeded && surface == SurfaceId::Resume {
        form.maybe_infer_name();
    }
    Ok(Json(form.surface(surface).view()))
}

/// POST /api/v1/form/candidate-name
///
/// Manual name entry. Always overwrites, including with an empty string —
/// clearing the field re-arms inference for the next resume change.
pub async fn handle_set_name(
    State(state): State<AppState>,
    Json(request): Json<SetNameRequest>,
) -> Json<FormView> {
    let mut form = state.form.lock().await;
    form.candidate_name = request.name;
    Json(form.view())
}

/// POST /api/v1/form/instructions/visibility
///
/// Hiding the optional instructions section also clears its text, reverting
/// to the collapsed "add optional section" control.
pub async fn handle_instructions_visibility(
    State(state): State<AppState>,
    Json(request): Json<VisibilityRequest>,
) -> Json<FormView> {
    let mut form = state.form.lock().await;
    form.show_instructions = request.visible;
    if !request.visible {
        form.instructions.clear();
    }
    Json(form.view())
}

/// POST /api/v1/form/letter
///
/// The displayed letter is an editable draft: edits overwrite the stored
/// letter, and deleting every character removes it.
pub async fn handle_edit_letter(
    State(state): State<AppState>,
    Json(request): Json<SetTextRequest>,
) -> Json<FormView> {
    let mut form = state.form.lock().await;
    form.edit_letter(request.text);
    Json(form.view())
}

/// POST /api/v1/clear
///
/// Destructive reset of every field. The request must carry `confirm: true`
/// — the client's yes/no prompt result.
pub async fn handle_clear(
    State(state): State<AppState>,
    Json(request): Json<ClearRequest>,
) -> Result<Json<FormView>, AppError> {
    if !request.confirm {
        return Err(AppError::Validation(
            "Clearing all content requires confirmation.".to_string(),
        ));
    }
    let mut form = state.form.lock().await;
    form.clear_all();
    Ok(Json(form.view()))
}
