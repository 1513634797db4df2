use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::interface::{Generation, SectionPayload};
use crate::config::TranslatorConfig;

/// A text-generation service the orchestrator can hand a prompt to.
///
/// Implementations report every failure as `None`; callers fall back to the
/// demonstration translator.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Option<Generation>;
}

#[derive(Debug, Error)]
enum ApiError {
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {body}")]
    Status { status: StatusCode, body: String },

    #[error("response carried no generation text")]
    EmptyBody,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

/// Bearer-authenticated client for the Granite generation endpoint.
#[derive(Debug, Clone)]
pub struct GraniteClient {
    client: Client,
    url: String,
    api_key: String,
    max_tokens: u32,
    temperature: f32,
}

impl GraniteClient {
    pub fn new(config: &TranslatorConfig, api_key: String) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        info!(
            "Initialized GraniteClient: url={}, timeout={}s",
            config.api_url, config.timeout_secs
        );
        Ok(Self {
            client,
            url: config.api_url.clone(),
            api_key,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    async fn try_generate(&self, prompt: &str) -> Result<Generation, ApiError> {
        let body = GenerateRequest {
            prompt,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let payload: Value = response.json().await?;
        let generation = parse_generation(&payload);
        if generation.is_empty() {
            return Err(ApiError::EmptyBody);
        }
        Ok(generation)
    }
}

#[async_trait]
impl GenerationBackend for GraniteClient {
    async fn generate(&self, prompt: &str) -> Option<Generation> {
        debug!("Sending prompt of {} chars to {}", prompt.len(), self.url);
        match self.try_generate(prompt).await {
            Ok(generation) => Some(generation),
            Err(e) => {
                warn!("Granite API call failed: {}", e);
                None
            }
        }
    }
}

/// Pull generation output out of the known response shapes:
/// `{"text": ..}`, `{"generated_text": ..}`, `{"results": [{"generated_text": ..}]}`,
/// plus an optional structured `sections` object.
fn parse_generation(payload: &Value) -> Generation {
    let text = ["/text", "/generated_text", "/results/0/generated_text"]
        .iter()
        .find_map(|pointer| payload.pointer(pointer).and_then(Value::as_str))
        .map(str::to_string);

    let sections = payload
        .get("sections")
        .and_then(|v| serde_json::from_value::<SectionPayload>(v.clone()).ok())
        .filter(|s| !s.is_empty());

    Generation { text, sections }
}
