use std::sync::Arc;

use crate::{
    error::ProviderResult,
    models::{MovieDetail, TmdbMovieDetails},
    services::providers::MovieMetadataProvider,
};

/// Looks up one best-matching metadata record per title
///
/// Any failure along the way yields `None`; callers never see a partial record.
#[derive(Clone, Default)]
pub struct MetadataFetcher {
    provider: Option<Arc<dyn MovieMetadataProvider>>,
    image_base_url: String,
}

impl MetadataFetcher {
    pub fn new(provider: Arc<dyn MovieMetadataProvider>, image_base_url: impl Into<String>) -> Self {
        Self {
            provider: Some(provider),
            image_base_url: image_base_url.into(),
        }
    }

    /// Fetcher that never enriches; used when no metadata key is configured
    pub fn disabled() -> Self {
        Self::default()
    }

    pub async fn fetch(&self, title: &str) -> Option<MovieDetail> {
        let provider = self.provider.as_deref()?;

        match self.lookup(provider, title).await {
            Ok(detail) => {
                if detail.is_none() {
                    tracing::info!(title = %title, "No metadata match");
                }
                detail
            }
            Err(e) => {
                tracing::warn!(title = %title, error = %e, "Metadata lookup failed");
                None
            }
        }
    }

    async fn lookup(
        &self,
        provider: &dyn MovieMetadataProvider,
        title: &str,
    ) -> ProviderResult<Option<MovieDetail>> {
        let results = provider.search_movies(title).await?;

        // First result is the canonical match
        let Some(first) = results.first() else {
            return Ok(None);
        };

        let details = provider.movie_details(first.id).await?;
        let fallback_title = first.title.as_deref().unwrap_or(title);

        Ok(Some(self.normalize(details, fallback_title)))
    }

    fn normalize(&self, details: TmdbMovieDetails, fallback_title: &str) -> MovieDetail {
        let director = details
            .credits
            .iter()
            .flat_map(|credits| credits.crew.iter())
            .find(|member| member.job.as_deref() == Some("Director"))
            .and_then(|member| member.name.clone())
            .unwrap_or_default();

        let year: String = details
            .release_date
            .as_deref()
            .map(|date| date.chars().take(4).collect())
            .unwrap_or_default();

        let poster_url = details
            .poster_path
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", self.image_base_url, path));

        MovieDetail {
            title: details.title.unwrap_or_else(|| fallback_title.to_string()),
            year,
            plot: details.overview.unwrap_or_default(),
            poster_url,
            director,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::models::{TmdbCredits, TmdbCrewMember, TmdbSearchResult};
    use crate::services::providers::MockMovieMetadataProvider;

    const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

    fn crew(job: &str, name: &str) -> TmdbCrewMember {
        TmdbCrewMember {
            job: Some(job.to_string()),
            name: Some(name.to_string()),
        }
    }

    fn arrival() -> TmdbMovieDetails {
        TmdbMovieDetails {
            id: 329865,
            title: Some("Arrival".to_string()),
            release_date: Some("2016-11-10".to_string()),
            overview: Some("A linguist works with the military.".to_string()),
            poster_path: Some("/arrival.jpg".to_string()),
            credits: Some(TmdbCredits {
                crew: vec![
                    crew("Producer", "Shawn Levy"),
                    crew("Director", "Denis Villeneuve"),
                    crew("Director", "Somebody Else"),
                ],
            }),
        }
    }

    fn provider_with(details: TmdbMovieDetails) -> MockMovieMetadataProvider {
        let mut provider = MockMovieMetadataProvider::new();
        provider.expect_search_movies().times(1).returning(|_| {
            Ok(vec![
                TmdbSearchResult {
                    id: 329865,
                    title: Some("Arrival".to_string()),
                },
                TmdbSearchResult {
                    id: 1,
                    title: Some("Arrival II".to_string()),
                },
            ])
        });
        provider
            .expect_movie_details()
            .withf(|id| *id == 329865)
            .times(1)
            .returning(move |_| Ok(details.clone()));
        provider
    }

    #[tokio::test]
    async fn test_full_record() {
        let fetcher = MetadataFetcher::new(Arc::new(provider_with(arrival())), IMAGE_BASE);
        let detail = fetcher.fetch("Arrival").await.unwrap();

        assert_eq!(detail.title, "Arrival");
        assert_eq!(detail.year, "2016");
        assert_eq!(detail.director, "Denis Villeneuve");
        assert_eq!(
            detail.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/arrival.jpg")
        );
    }

    #[tokio::test]
    async fn test_no_search_results_is_none() {
        let mut provider = MockMovieMetadataProvider::new();
        provider.expect_search_movies().returning(|_| Ok(vec![]));
        provider.expect_movie_details().never();

        let fetcher = MetadataFetcher::new(Arc::new(provider), IMAGE_BASE);
        assert_eq!(fetcher.fetch("Nonexistent Film").await, None);
    }

    #[tokio::test]
    async fn test_missing_poster_and_director() {
        let details = TmdbMovieDetails {
            poster_path: None,
            release_date: None,
            credits: None,
            ..arrival()
        };
        let fetcher = MetadataFetcher::new(Arc::new(provider_with(details)), IMAGE_BASE);
        let detail = fetcher.fetch("Arrival").await.unwrap();

        assert_eq!(detail.poster_url, None);
        assert_eq!(detail.director, "");
        assert_eq!(detail.year, "");
    }

    #[tokio::test]
    async fn test_detail_failure_is_none() {
        let mut provider = MockMovieMetadataProvider::new();
        provider.expect_search_movies().returning(|_| {
            Ok(vec![TmdbSearchResult {
                id: 7,
                title: None,
            }])
        });
        provider.expect_movie_details().returning(|_| {
            Err(ProviderError::Status {
                status: reqwest::StatusCode::UNAUTHORIZED,
                body: "invalid token".to_string(),
            })
        });

        let fetcher = MetadataFetcher::new(Arc::new(provider), IMAGE_BASE);
        assert_eq!(fetcher.fetch("Anything").await, None);
    }

    #[tokio::test]
    async fn test_search_failure_is_none() {
        let mut provider = MockMovieMetadataProvider::new();
        provider
            .expect_search_movies()
            .returning(|_| Err(ProviderError::Decode("bad json".to_string())));

        let fetcher = MetadataFetcher::new(Arc::new(provider), IMAGE_BASE);
        assert_eq!(fetcher.fetch("Anything").await, None);
    }

    #[tokio::test]
    async fn test_disabled_fetcher_is_none() {
        assert_eq!(MetadataFetcher::disabled().fetch("Arrival").await, None);
    }
}
