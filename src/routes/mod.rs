use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::{
        providers::{build_http_client, TmdbProvider},
        MetadataFetcher, Recommender, SuggestionChain,
    },
};

pub mod diagnostics;
pub mod random;
pub mod recommend;

/// Which provider credentials were supplied, and which passed the sanity check
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct KeyStatus {
    pub gemini_key_present: bool,
    pub gemini_key_valid: bool,
    pub hf_key_present: bool,
    pub hf_key_valid: bool,
}

impl KeyStatus {
    pub fn from_config(config: &Config) -> Self {
        let present = |key: &Option<String>| key.as_deref().is_some_and(|k| !k.is_empty());
        Self {
            gemini_key_present: present(&config.gemini_api_key),
            gemini_key_valid: Config::usable_key(&config.gemini_api_key).is_some(),
            hf_key_present: present(&config.huggingface_api_key),
            hf_key_valid: Config::usable_key(&config.huggingface_api_key).is_some(),
        }
    }
}

/// Shared application state
///
/// Built once at startup and read-only afterwards.
pub struct AppState {
    pub recommender: Recommender,
    pub keys: KeyStatus,
}

impl AppState {
    /// State around an already-wired recommender; key status mirrors its chain
    pub fn new(recommender: Recommender) -> Self {
        let status = recommender.chain().status();
        Self {
            keys: KeyStatus {
                gemini_key_present: status.primary_configured,
                gemini_key_valid: status.primary_configured,
                hf_key_present: status.secondary_configured,
                hf_key_valid: status.secondary_configured,
            },
            recommender,
        }
    }

    /// Wires providers from config; providers without a usable key are skipped
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http_client = build_http_client(config.request_timeout())?;

        let chain = SuggestionChain::from_config(config, &http_client);

        let fetcher = match Config::usable_key(&config.tmdb_api_key) {
            Some(key) => MetadataFetcher::new(
                Arc::new(TmdbProvider::new(
                    http_client.clone(),
                    key.to_string(),
                    config.tmdb_api_url.clone(),
                )),
                config.tmdb_image_base_url.clone(),
            ),
            None => {
                tracing::warn!("TMDB API key missing or invalid, metadata enrichment disabled");
                MetadataFetcher::disabled()
            }
        };

        Ok(Self {
            recommender: Recommender::new(chain, fetcher),
            keys: KeyStatus::from_config(config),
        })
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/recommend", post(recommend::recommend))
        .route("/random-recommend", get(random::random_recommend))
        .route("/test-ai", get(diagnostics::test_ai))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "message": "Backend is running" })),
    )
}
