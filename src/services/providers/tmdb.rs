/// TMDB (The Movie Database) provider
///
/// API Flow:
/// 1. Title Search: /search/movie?query= → ranked results with TMDB IDs
/// 2. Details: /movie/{id}?append_to_response=credits → details plus crew in one call
use crate::{
    error::{ProviderError, ProviderResult},
    models::{TmdbMovieDetails, TmdbSearchResponse, TmdbSearchResult},
    services::providers::{check_status, MovieMetadataProvider},
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(http_client: HttpClient, api_key: String, api_url: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), path)
    }
}

#[async_trait::async_trait]
impl MovieMetadataProvider for TmdbProvider {
    async fn search_movies(&self, query: &str) -> ProviderResult<Vec<TmdbSearchResult>> {
        let response = self
            .http_client
            .get(self.url("search/movie"))
            .bearer_auth(&self.api_key)
            .query(&[("query", query)])
            .send()
            .await?;

        let response = check_status(response).await?;

        let search: TmdbSearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(format!("Failed to parse TMDB search: {}", e.without_url())))?;

        tracing::debug!(
            query = %query,
            results = search.results.len(),
            provider = "tmdb",
            "Title search completed"
        );

        Ok(search.results)
    }

    async fn movie_details(&self, id: u64) -> ProviderResult<TmdbMovieDetails> {
        let response = self
            .http_client
            .get(self.url(&format!("movie/{}", id)))
            .bearer_auth(&self.api_key)
            .query(&[("append_to_response", "credits")])
            .send()
            .await?;

        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(format!("Failed to parse TMDB details: {}", e.without_url())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let provider = TmdbProvider::new(
            HttpClient::new(),
            "token".to_string(),
            "https://api.themoviedb.org/3/".to_string(),
        );
        assert_eq!(provider.url("search/movie"), "https://api.themoviedb.org/3/search/movie");
        assert_eq!(provider.url("movie/27205"), "https://api.themoviedb.org/3/movie/27205");
    }

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 27205, "title": "Inception", "release_date": "2010-07-15"},
                {"id": 613092, "title": "Inception: The Cobol Job"}
            ],
            "total_results": 2
        }"#;

        let search: TmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(search.results.len(), 2);
        assert_eq!(search.results[0].id, 27205);
        assert_eq!(search.results[0].title.as_deref(), Some("Inception"));
    }
}
