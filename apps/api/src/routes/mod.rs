pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::form::handlers as form_handlers;
use crate::generation::handlers as generation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form API
        .route("/api/v1/form", get(form_handlers::handle_get_form))
        .route(
            "/api/v1/form/:surface/text",
            post(form_handlers::handle_set_text),
        )
        .route(
            "/api/v1/form/:surface/mode",
            post(form_handlers::handle_toggle_mode),
        )
        .route(
            "/api/v1/form/:surface/upload",
            post(form_handlers::handle_upload),
        )
        .route(
            "/api/v1/form/candidate-name",
            post(form_handlers::handle_set_name),
        )
        .route(
            "/api/v1/form/instructions/visibility",
            post(form_handlers::handle_instructions_visibility),
        )
        .route("/api/v1/form/letter", post(form_handlers::handle_edit_letter))
        // Generation API
        .route("/api/v1/generate", post(generation_handlers::handle_generate))
        .route("/api/v1/clear", post(form_handlers::handle_clear))
        .with_state(state)
}
