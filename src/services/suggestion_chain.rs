use std::sync::Arc;

use reqwest::Client as HttpClient;
use serde::Serialize;

use crate::{
    config::Config,
    services::{
        prompt::build_fallback_prompt,
        providers::{GeminiProvider, HuggingFaceProvider, TextGenerator},
    },
};

/// Which providers were configured at startup
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct ChainStatus {
    pub primary_configured: bool,
    pub secondary_configured: bool,
}

/// Priority-ordered generative-text providers
///
/// The primary provider receives the full prompt. If it is missing or fails in
/// any way, each secondary provider is tried in order with a reduced prompt.
/// Failures are logged and absorbed; total failure is an empty string.
#[derive(Clone, Default)]
pub struct SuggestionChain {
    primary: Option<Arc<dyn TextGenerator>>,
    secondaries: Vec<Arc<dyn TextGenerator>>,
}

impl SuggestionChain {
    pub fn new(
        primary: Option<Arc<dyn TextGenerator>>,
        secondaries: Vec<Arc<dyn TextGenerator>>,
    ) -> Self {
        Self {
            primary,
            secondaries,
        }
    }

    /// Builds the chain from config, skipping providers without a usable key
    pub fn from_config(config: &Config, http_client: &HttpClient) -> Self {
        let primary = match Config::usable_key(&config.gemini_api_key) {
            Some(key) => Some(Arc::new(GeminiProvider::new(
                http_client.clone(),
                key.to_string(),
                config.gemini_api_url.clone(),
                config.gemini_model.clone(),
            )) as Arc<dyn TextGenerator>),
            None => {
                tracing::warn!("Gemini API key missing or invalid, primary provider disabled");
                None
            }
        };

        let secondaries = match Config::usable_key(&config.huggingface_api_key) {
            Some(key) => config
                .huggingface_models
                .iter()
                .map(|model| {
                    Arc::new(HuggingFaceProvider::new(
                        http_client.clone(),
                        key.to_string(),
                        config.huggingface_api_url.clone(),
                        model.clone(),
                    )) as Arc<dyn TextGenerator>
                })
                .collect(),
            None => {
                tracing::warn!("Hugging Face API key missing or invalid, fallback models disabled");
                Vec::new()
            }
        };

        Self::new(primary, secondaries)
    }

    pub fn status(&self) -> ChainStatus {
        ChainStatus {
            primary_configured: self.primary.is_some(),
            secondary_configured: !self.secondaries.is_empty(),
        }
    }

    /// Returns raw suggestion text, or an empty string when every provider fails
    pub async fn get_suggestion_text(&self, prompt: &str) -> String {
        if let Some(primary) = &self.primary {
            match primary.generate(prompt).await {
                Ok(text) if !text.trim().is_empty() => {
                    tracing::info!(provider = %primary.name(), "Primary provider answered");
                    return text;
                }
                Ok(_) => {
                    tracing::warn!(provider = %primary.name(), "Primary provider returned empty text");
                }
                Err(e) => {
                    tracing::warn!(provider = %primary.name(), error = %e, "Primary provider failed");
                }
            }
        }

        if self.secondaries.is_empty() {
            tracing::error!("No fallback providers configured");
            return String::new();
        }

        let fallback_prompt = build_fallback_prompt(prompt);

        for provider in &self.secondaries {
            match provider.generate(&fallback_prompt).await {
                Ok(text) if !text.trim().is_empty() => {
                    tracing::info!(provider = %provider.name(), "Fallback provider answered");
                    return text;
                }
                Ok(_) => {
                    tracing::warn!(provider = %provider.name(), "Fallback provider returned empty text");
                }
                Err(e) => {
                    tracing::warn!(provider = %provider.name(), error = %e, "Fallback provider failed");
                }
            }
        }

        tracing::error!(
            attempted = self.secondaries.len() + usize::from(self.primary.is_some()),
            "All text providers failed"
        );
        String::new()
    }
}
