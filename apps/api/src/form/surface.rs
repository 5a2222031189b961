//! Acquisition surface state machine.
//!
//! One `AcquisitionState` backs each logical text field that can be filled
//! either by typing/pasting or by file upload. All transitions are plain
//! state mutations with no I/O, so the whole machine is testable without an
//! HTTP layer or a rendering layer.
//!
//! Rapid re-uploads on the same surface race: each extraction is issued a
//! monotonically increasing sequence number, and a completion is applied
//! only if it is the latest issued. A stale completion is discarded whole —
//! it never touches state written by a newer attempt.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    FreeText,
    File,
}

/// Outcome of one extraction attempt as applied to the surface.
#[derive(Debug, Clone)]
pub enum ExtractionOutcome {
    Success { file_name: String, text: String },
    Failure { message: String },
}

#[derive(Debug, Clone)]
pub struct AcquisitionState {
    pub mode: InputMode,
    pub current_text: String,
    /// Name of the last successfully extracted file. Cleared on failure.
    pub display_file_name: Option<String>,
    pub is_processing: bool,
    pub last_error: Option<String>,
    pub drag_active: bool,
    /// Sequence number of the most recently issued extraction.
    issued_seq: u64,
}

/// JSON view of a surface returned by every surface-mutating endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SurfaceView {
    pub mode: InputMode,
    pub text: String,
    /// Character count, reported upward for display (0 = "no content").
    pub text_length: usize,
    pub display_file_name: Option<String>,
    pub is_processing: bool,
    pub last_error: Option<String>,
    pub drag_active: bool,
}

impl AcquisitionState {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            current_text: String::new(),
            display_file_name: None,
            is_processing: false,
            last_error: None,
            drag_active: false,
            issued_seq: 0,
        }
    }

    /// Explicit user toggle between free-text entry and file upload.
    /// Clears any extraction error but keeps already-acquired text.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            InputMode::FreeText => InputMode::File,
            InputMode::File => InputMode::FreeText,
        };
        self.last_error = None;
        self.drag_active = false;
    }

    /// Direct typing/pasting. No validation.
    pub fn set_text(&mut self, text: String) {
        self.current_text = text;
    }

    /// Drag-over entered the drop zone. Driven by the client UI; kept here so
    /// the full surface machine lives in one place.
    #[allow(dead_code)]
    pub fn drag_entered(&mut self) {
        self.drag_active = true;
    }

    /// Drag-over left the drop zone without a drop.
    #[allow(dead_code)]
    pub fn drag_left(&mut self) {
        self.drag_active = false;
    }

    /// Starts a new extraction, superseding any pending one. Returns the
    /// sequence number the completion must present to be applied.
    pub fn begin_extraction(&mut self) -> u64 {
        self.issued_seq += 1;
        self.is_processing = true;
        self.last_error = None;
        self.drag_active = false;
        self.issued_seq
    }

    /// Applies an extraction completion, unless it is stale.
    ///
    /// Returns `true` if the completion was applied. On success the display
    /// name is set, the error cleared, and the text emitted exactly once; on
    /// failure the display name is cleared and the error recorded with no
    /// text emission.
    pub fn settle_extraction(&mut self, seq: u64, outcome: ExtractionOutcome) -> bool {
        if seq != self.issued_seq {
            return false;
        }
        self.is_processing = false;
        match outcome {
            ExtractionOutcome::Success { file_name, text } => {
                self.display_file_name = Some(file_name);
                self.last_error = None;
                self.current_text = text;
            }
            ExtractionOutcome::Failure { message } => {
                self.display_file_name = None;
                self.last_error = Some(message);
            }
        }
        true
    }

    /// Full reset to the empty state. The acquisition mode is kept — it is a
    /// UI preference, not content.
    pub fn clear(&mut self) {
        self.current_text.clear();
        self.display_file_name = None;
        self.is_processing = false;
        self.last_error = None;
        self.drag_active = false;
    }

    pub fn trimmed_len(&self) -> usize {
        self.current_text.trim().chars().count()
    }

    pub fn view(&self) -> SurfaceView {
        SurfaceView {
            mode: self.mode,
            text: self.current_text.clone(),
            text_length: self.current_text.chars().count(),
            display_file_name: self.display_file_name.clone(),
            is_processing: self.is_processing,
            last_error: self.last_error.clone(),
            drag_active: self.drag_active,
        }
    }
}
