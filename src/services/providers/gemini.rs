/// Google Gemini provider
///
/// Primary text provider. Single `generateContent` call with a capped output
/// budget; the key travels in the `x-goog-api-key` header so it never appears
/// in a request URL.
use crate::{
    error::{ProviderError, ProviderResult},
    models::{GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest, GeminiResponse},
    services::providers::{check_status, TextGenerator},
};
use reqwest::Client as HttpClient;

const API_KEY_HEADER: &str = "x-goog-api-key";
const MAX_OUTPUT_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

#[derive(Clone)]
pub struct GeminiProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(http_client: HttpClient, api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }

    fn request_body(prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate(&self, prompt: &str) -> ProviderResult<String> {
        let response = self
            .http_client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&Self::request_body(prompt))
            .send()
            .await?;

        let response = check_status(response).await?;

        let body: GeminiResponse = response.json().await.map_err(|e| {
            ProviderError::Decode(format!("Failed to parse Gemini response: {}", e.without_url()))
        })?;

        let text = body
            .first_text()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ProviderError::EmptyCompletion)?;

        tracing::debug!(
            model = %self.model,
            chars = text.len(),
            "Gemini completion received"
        );

        Ok(text.to_string())
    }

    fn name(&self) -> String {
        format!("gemini/{}", self.model)
    }
}
