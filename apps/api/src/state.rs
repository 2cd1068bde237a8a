use std::sync::Arc;

use crate::config::Config;
use crate::gemini::ImageGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Upstream AI seam. Production wires `GeminiClient`; tests swap a stub.
    pub generator: Arc<dyn ImageGenerator>,
    /// Loaded configuration, kept for handlers that need runtime settings.
    #[allow(dead_code)]
    pub config: Config,
}
