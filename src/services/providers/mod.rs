/// External provider abstraction
///
/// Two seams: generative-text providers that turn a prompt into free text, and
/// the movie metadata provider used for enrichment. Every call returns an
/// explicit `ProviderResult`; deciding what a failure means is left to the
/// caller (the suggestion chain and the metadata fetcher).
use crate::{
    error::{ProviderError, ProviderResult},
    models::{TmdbMovieDetails, TmdbSearchResult},
};

#[cfg(test)]
use mockall::automock;

pub mod gemini;
pub mod huggingface;
pub mod tmdb;

pub use gemini::GeminiProvider;
pub use huggingface::HuggingFaceProvider;
pub use tmdb::TmdbProvider;

/// A provider that completes a prompt with free-form text
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for the prompt
    ///
    /// A successful call with no usable text must return
    /// `ProviderError::EmptyCompletion`, never `Ok("")`.
    async fn generate(&self, prompt: &str) -> ProviderResult<String>;

    /// Provider (and model) name for logging
    fn name(&self) -> String;
}

/// A movie metadata provider supporting title search and detail lookup
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MovieMetadataProvider: Send + Sync {
    /// Search movies by title, best match first
    async fn search_movies(&self, query: &str) -> ProviderResult<Vec<TmdbSearchResult>>;

    /// Fetch extended details including crew credits
    async fn movie_details(&self, id: u64) -> ProviderResult<TmdbMovieDetails>;
}

/// Turns a non-success response into `ProviderError::Status`
pub(crate) async fn check_status(response: reqwest::Response) -> ProviderResult<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ProviderError::Status { status, body })
}

/// Builds the HTTP client shared by every provider
pub fn build_http_client(timeout: std::time::Duration) -> ProviderResult<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}
