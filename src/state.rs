use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::translate::{GenerationBackend, GraniteClient, TranslationOrchestrator};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub orchestrator: Arc<TranslationOrchestrator>,
}

impl AppState {
    /// Build state from configuration. The API credential is resolved once
    /// here; without one every request is served by the mock translator.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let translator_config = &config.translator_config;
        let backend: Option<Arc<dyn GenerationBackend>> = match translator_config.resolve_api_key() {
            Some(api_key) => Some(Arc::new(GraniteClient::new(translator_config, api_key)?)),
            None => {
                info!(
                    "No API key found (set {}), serving mock translations",
                    translator_config.api_key_env
                );
                None
            }
        };

        Ok(Self::with_orchestrator(config, TranslationOrchestrator::new(backend)))
    }

    pub fn with_orchestrator(config: Config, orchestrator: TranslationOrchestrator) -> Self {
        Self {
            config: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
        }
    }
}
