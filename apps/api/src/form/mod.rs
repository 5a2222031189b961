//! Form orchestration.
//!
//! `FormState` composes the three acquisition surfaces (job description,
//! resume, optional instructions) with the candidate-name field and the
//! single generated-letter slot. It owns every gating and reset rule; the
//! HTTP handlers in [`handlers`] are thin wrappers over it.

pub mod handlers;
pub mod name;
pub mod surface;

use serde::{Deserialize, Serialize};

use surface::{AcquisitionState, InputMode, SurfaceView};

/// Both the job description and the resume must exceed this many trimmed
/// characters before generation is allowed.
pub const MIN_CONTENT_LEN: usize = 50;

/// Identifies one of the three acquisition surfaces in route paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceId {
    JobDescription,
    Resume,
    Instructions,
}

#[derive(Debug)]
pub struct FormState {
    pub job_description: AcquisitionState,
    pub resume: AcquisitionState,
    pub instructions: AcquisitionState,
    pub candidate_name: String,
    pub show_instructions: bool,
    /// Exactly one of `generated_letter` / `error` is populated after an
    /// attempt; both are cleared when a new attempt starts.
    pub generated_letter: Option<String>,
    pub error: Option<String>,
    pub is_generating: bool,
    /// Sequence number of the most recently issued generation attempt. A
    /// completion must present it to settle; clear-all bumps it so an
    /// in-flight attempt cannot repopulate a freshly cleared form.
    generation_seq: u64,
}

/// Full JSON snapshot of the form.
#[derive(Debug, Serialize)]
pub struct FormView {
    pub job_description: SurfaceView,
    pub resume: SurfaceView,
    pub instructions: SurfaceView,
    pub candidate_name: String,
    pub show_instructions: bool,
    pub generated_letter: Option<String>,
    pub error: Option<String>,
    pub is_generating: bool,
    pub can_generate: bool,
    pub has_content: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            // The two document surfaces open in upload mode, the optional
            // instructions surface is text-only.
            job_description: AcquisitionState::new(InputMode::File),
            resume: AcquisitionState::new(InputMode::File),
            instructions: AcquisitionState::new(InputMode::FreeText),
            candidate_name: String::new(),
            show_instructions: false,
            generated_letter: None,
            error: None,
            is_generating: false,
            generation_seq: 0,
        }
    }
}

impl FormState {
    pub fn surface(&self, id: SurfaceId) -> &AcquisitionState {
        match id {
            SurfaceId::JobDescription => &self.job_description,
            SurfaceId::Resume => &self.resume,
            SurfaceId::Instructions => &self.instructions,
        }
    }

    pub fn surface_mut(&mut self, id: SurfaceId) -> &mut AcquisitionState {
        match id {
            SurfaceId::JobDescription => &mut self.job_description,
            SurfaceId::Resume => &mut self.resume,
            SurfaceId::Instructions => &mut self.instructions,
        }
    }

    /// Gate for the generate action.
    pub fn can_generate(&self) -> bool {
        self.job_description.trimmed_len() > MIN_CONTENT_LEN
            && self.resume.trimmed_len() > MIN_CONTENT_LEN
    }

    pub fn has_content(&self) -> bool {
        !self.job_description.current_text.is_empty()
            || !self.resume.current_text.is_empty()
            || !self.instructions.current_text.is_empty()
            || self.generated_letter.is_some()
    }

    /// Fires name inference after a resume acquisition event (a set-text
    /// call or a successful upload). Never overwrites a non-empty name.
    pub fn maybe_infer_name(&mut self) {
        if !self.candidate_name.is_empty() {
            return;
        }
        if let Some(inferred) = name::infer_candidate_name(&self.resume.current_text) {
            self.candidate_name = inferred.to_string();
        }
    }

    /// Marks an attempt in flight and clears the previous outcome. Returns
    /// the sequence number the eventual completion must present.
    pub fn begin_generation(&mut self) -> u64 {
        self.generation_seq += 1;
        self.is_generating = true;
        self.generated_letter = None;
        self.error = None;
        self.generation_seq
    }

    /// Stores exactly one of letter / error. A completion carrying a stale
    /// sequence number (the form was cleared while the attempt was in
    /// flight) is discarded; returns whether the outcome was applied.
    pub fn finish_generation(&mut self, seq: u64, outcome: Result<String, String>) -> bool {
        if seq != self.generation_seq {
            return false;
        }
        self.is_generating = false;
        match outcome {
            Ok(letter) => {
                self.generated_letter = Some(letter);
                self.error = None;
            }
            Err(message) => {
                self.generated_letter = None;
                self.error = Some(message);
            }
        }
        true
    }

    /// User edits to the displayed letter overwrite the stored one; deleting
    /// every character removes it entirely.
    pub fn edit_letter(&mut self, text: String) {
        self.generated_letter = if text.is_empty() { None } else { Some(text) };
        self.error = None;
    }

    /// The destructive clear-all reset. Confirmation happens at the handler
    /// boundary; this resets every tracked field to its default. Bumping the
    /// generation sequence orphans any attempt still in flight.
    pub fn clear_all(&mut self) {
        self.generation_seq += 1;
        self.job_description.clear();
        self.resume.clear();
        self.instructions.clear();
        self.candidate_name.clear();
        self.show_instructions = false;
        self.generated_letter = None;
        self.error = None;
        self.is_generating = false;
    }

    pub fn view(&self) -> FormView {
        FormView {
            job_description: self.job_description.view(),
            resume: self.resume.view(),
            instructions: self.instructions.view(),
            candidate_name: self.candidate_name.clone(),
            show_instructions: self.show_instructions,
            generated_letter: self.generated_letter.clone(),
            error: self.error.clone(),
            is_generating: self.is_generating,
            can_generate: self.can_generate(),
            has_content: self.has_content(),
        }
    }
}
