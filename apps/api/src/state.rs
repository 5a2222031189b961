use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::form::FormState;
use crate::generation::LetterGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generation backend. Default: `GeminiClient`. Tests swap in a mock.
    pub generator: Arc<dyn LetterGenerator>,
    /// Loaded configuration. Handlers currently need nothing from it, but it
    /// rides along so route-level settings have a home.
    #[allow(dead_code)]
    pub config: Config,
    /// The single form this service manages. Handlers take short critical
    /// sections and never hold the lock across extraction or generation.
    pub form: Arc<Mutex<FormState>>,
}

impl AppState {
    pub fn new(generator: Arc<dyn LetterGenerator>, config: Config) -> Self {
        Self {
            generator,
            config,
            form: Arc::new(Mutex::new(FormState::default())),
        }
    }
}
