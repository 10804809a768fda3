use futures::future::join_all;

use crate::{
    error::{AppError, AppResult},
    models::{Recommendation, Suggestion, Traits},
    services::{
        extractor::extract_suggestions, metadata::MetadataFetcher, prompt::build_prompt,
        suggestion_chain::SuggestionChain,
    },
};

/// Generates movie recommendations for a trait set
///
/// Pipeline: prompt → text providers → suggestion extraction → metadata
/// enrichment. Only a total failure to extract suggestions is an error.
#[derive(Clone, Default)]
pub struct Recommender {
    chain: SuggestionChain,
    fetcher: MetadataFetcher,
}

impl Recommender {
    pub fn new(chain: SuggestionChain, fetcher: MetadataFetcher) -> Self {
        Self { chain, fetcher }
    }

    pub fn chain(&self) -> &SuggestionChain {
        &self.chain
    }

    pub async fn recommend(&self, traits: &Traits) -> AppResult<Vec<Recommendation>> {
        let prompt = build_prompt(traits);
        let text = self.chain.get_suggestion_text(&prompt).await;
        let suggestions = extract_suggestions(&text);

        if suggestions.is_empty() {
            tracing::error!(
                mood = %traits.mood,
                hobby = %traits.hobby,
                genre = %traits.genre,
                vibe = %traits.vibe,
                "AI failed to generate recommendations"
            );
            return Err(AppError::NoRecommendations);
        }

        let recommendations = assemble(&self.fetcher, suggestions).await;

        tracing::info!(
            count = recommendations.len(),
            enriched = recommendations.iter().filter(|r| r.details.is_some()).count(),
            "Recommendations assembled"
        );

        Ok(recommendations)
    }
}

/// Enriches each suggestion independently, preserving suggestion order
///
/// Lookups run concurrently; `join_all` yields results in input order.
pub async fn assemble(fetcher: &MetadataFetcher, suggestions: Vec<Suggestion>) -> Vec<Recommendation> {
    let lookups = suggestions.iter().map(|s| fetcher.fetch(&s.title));
    let details = join_all(lookups).await;

    suggestions
        .into_iter()
        .zip(details)
        .map(|(suggestion, details)| Recommendation::new(suggestion, details))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TmdbMovieDetails, TmdbSearchResult};
    use crate::services::providers::{MockMovieMetadataProvider, MockTextGenerator, TextGenerator};
    use std::sync::Arc;
    use std::time::Duration;

    fn traits() -> Traits {
        Traits {
            mood: "excited".to_string(),
            hobby: "gaming".to_string(),
            genre: "Action".to_string(),
            vibe: "wild".to_string(),
        }
    }

    fn chain_answering(answer: &'static str) -> SuggestionChain {
        let mut generator = MockTextGenerator::new();
        generator.expect_name().return_const("primary".to_string());
        generator
            .expect_generate()
            .returning(move |_| Ok(answer.to_string()));
        SuggestionChain::new(Some(Arc::new(generator) as Arc<dyn TextGenerator>), vec![])
    }

    /// Finds every title except "Unknown"
    fn metadata_provider() -> MockMovieMetadataProvider {
        let mut provider = MockMovieMetadataProvider::new();
        provider.expect_search_movies().returning(|query| match query {
            "Unknown" => Ok(vec![]),
            other => Ok(vec![TmdbSearchResult {
                id: 1,
                title: Some(other.to_string()),
            }]),
        });
        provider.expect_movie_details().returning(|id| {
            Ok(TmdbMovieDetails {
                id,
                title: Some(format!("Movie {}", id)),
                release_date: Some("1999-03-31".to_string()),
                ..TmdbMovieDetails::default()
            })
        });
        provider
    }

    #[tokio::test]
    async fn test_recommend_enriches_in_order() {
        let answer = r#"Sure! [
            {"title": "Unknown", "reason": "no metadata"},
            {"title": "The Matrix", "reason": "mind-bending"}
        ]"#;
        let recommender = Recommender::new(
            chain_answering(answer),
            MetadataFetcher::new(Arc::new(metadata_provider()), "http://img"),
        );

        let recommendations = recommender.recommend(&traits()).await.unwrap();

        assert_eq!(recommendations.len(), 2);
        assert_eq!(recommendations[0].title, "Unknown");
        assert!(recommendations[0].details.is_none());
        assert_eq!(recommendations[1].title, "The Matrix");
        assert_eq!(recommendations[1].details.as_ref().unwrap().year, "1999");
    }

    #[tokio::test]
    async fn test_unparsable_text_is_no_recommendations() {
        let recommender = Recommender::new(
            chain_answering("I cannot help with that."),
            MetadataFetcher::disabled(),
        );

        let result = recommender.recommend(&traits()).await;
        assert!(matches!(result, Err(AppError::NoRecommendations)));
    }

    #[tokio::test]
    async fn test_empty_chain_is_no_recommendations() {
        let recommender = Recommender::default();
        let result = recommender.recommend(&traits()).await;
        assert!(matches!(result, Err(AppError::NoRecommendations)));
    }

    struct DelayedProvider;

    #[async_trait::async_trait]
    impl crate::services::providers::MovieMetadataProvider for DelayedProvider {
        async fn search_movies(
            &self,
            query: &str,
        ) -> crate::error::ProviderResult<Vec<TmdbSearchResult>> {
            if query == "Slow" {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            Ok(vec![TmdbSearchResult {
                id: query.len() as u64,
                title: Some(query.to_string()),
            }])
        }

        async fn movie_details(&self, id: u64) -> crate::error::ProviderResult<TmdbMovieDetails> {
            Ok(TmdbMovieDetails {
                id,
                ..TmdbMovieDetails::default()
            })
        }
    }

    #[tokio::test]
    async fn test_assemble_preserves_order_under_uneven_latency() {
        let fetcher = MetadataFetcher::new(Arc::new(DelayedProvider), "http://img");
        let suggestions = vec![
            Suggestion::new("Slow", "first").unwrap(),
            Suggestion::new("Fast", "second").unwrap(),
        ];

        let recommendations = assemble(&fetcher, suggestions).await;

        let titles: Vec<&str> = recommendations.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Slow", "Fast"]);
        assert_eq!(recommendations[0].details.as_ref().unwrap().title, "Slow");
    }
}
