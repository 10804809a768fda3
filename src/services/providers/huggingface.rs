/// Hugging Face Inference API provider
///
/// One instance per model. Used as the fallback tier, so the generation budget
/// is smaller than the primary provider's.
use crate::{
    error::{ProviderError, ProviderResult},
    models::{HfGeneration, HfParameters, HfRequest},
    services::providers::{check_status, TextGenerator},
};
use reqwest::Client as HttpClient;

const MAX_NEW_TOKENS: u32 = 200;
const TEMPERATURE: f32 = 0.7;

#[derive(Clone)]
pub struct HuggingFaceProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl HuggingFaceProvider {
    pub fn new(http_client: HttpClient, api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), self.model)
    }
}

#[async_trait::async_trait]
impl TextGenerator for HuggingFaceProvider {
    async fn generate(&self, prompt: &str) -> ProviderResult<String> {
        let request = HfRequest {
            inputs: prompt,
            parameters: HfParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                return_full_text: false,
            },
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let response = check_status(response).await?;

        // Loading models answer 200 with an error object instead of an array
        let generations: Vec<HfGeneration> = response.json().await.map_err(|e| {
            ProviderError::Decode(format!("Failed to parse Hugging Face response: {}", e.without_url()))
        })?;

        generations
            .into_iter()
            .next()
            .and_then(|g| g.generated_text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ProviderError::EmptyCompletion)
    }

    fn name(&self) -> String {
        format!("huggingface/{}", self.model)
    }
}
