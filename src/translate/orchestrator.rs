use std::sync::Arc;
use tracing::{debug, warn};

use super::client::GenerationBackend;
use super::interface::{TranslationRequest, TranslationResult};
use super::mock::mock_response;
use super::prompt::build_prompt;
use super::sections::Sections;

/// Turns a request into a fully populated result.
///
/// With no backend configured every request is answered by the mock
/// translator. A backend that returns nothing usable also falls back to the
/// mock, so `translate` never fails.
#[derive(Clone)]
pub struct TranslationOrchestrator {
    backend: Option<Arc<dyn GenerationBackend>>,
}

impl TranslationOrchestrator {
    pub fn new(backend: Option<Arc<dyn GenerationBackend>>) -> Self {
        Self { backend }
    }

    pub fn mock_only() -> Self {
        Self { backend: None }
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    pub async fn translate(&self, request: &TranslationRequest) -> TranslationResult {
        let prompt = build_prompt(request);
        let sections = self.sections_for(request, &prompt).await;
        sections.into_result(
            &request.source_language,
            &request.target_language,
            &request.subject,
        )
    }

    async fn sections_for(&self, request: &TranslationRequest, prompt: &str) -> Sections {
        let Some(backend) = &self.backend else {
            debug!("No API credential configured, using mock translation");
            return Sections::from_text(&mock_response(request));
        };

        match backend.generate(prompt).await {
            Some(generation) => {
                if let Some(payload) = generation.sections.filter(|s| !s.is_empty()) {
                    return Sections::from_payload(payload);
                }
                match generation.text.filter(|t| !t.trim().is_empty()) {
                    Some(text) => Sections::from_text(&text),
                    None => {
                        warn!("Generation backend returned empty text, using mock translation");
                        Sections::from_text(&mock_response(request))
                    }
                }
            }
            None => {
                warn!("Generation backend unavailable, using mock translation");
                Sections::from_text(&mock_response(request))
            }
        }
    }
}
