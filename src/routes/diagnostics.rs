use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    models::Traits,
    routes::{AppState, KeyStatus},
    services::prompt::build_prompt,
};

#[derive(Debug, Serialize)]
pub struct TestAiResponse {
    pub ai_response: String,
    pub has_response: bool,
    #[serde(flatten)]
    pub keys: KeyStatus,
}

/// Runs the text-provider chain once on a fixed personality
///
/// Reports raw provider output and credential status; never echoes key material.
pub async fn test_ai(State(state): State<Arc<AppState>>) -> Json<TestAiResponse> {
    let traits = Traits {
        mood: "happy".to_string(),
        hobby: "reading".to_string(),
        genre: "comedy".to_string(),
        vibe: "uplifting".to_string(),
    };

    let ai_response = state
        .recommender
        .chain()
        .get_suggestion_text(&build_prompt(&traits))
        .await;

    Json(TestAiResponse {
        has_response: !ai_response.is_empty(),
        ai_response,
        keys: state.keys,
    })
}
