use crate::config::Config;
use crate::generation::generator::GenerationOptions;

/// Shared application state injected into all route handlers via Axum extractors.
/// Generation itself is stateless; this only carries read-only settings.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub generation: GenerationOptions,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        AppState {
            generation: config.generation_options(),
        }
    }
}
