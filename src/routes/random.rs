use axum::{extract::State, Extension, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{Recommendation, Traits},
    routes::AppState,
};

#[derive(Debug, Serialize)]
pub struct RandomRecommendResponse {
    pub recommendations: Vec<Recommendation>,
    pub personality: Traits,
}

/// Handler for recommendations from a randomly drawn personality
pub async fn random_recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<RandomRecommendResponse>> {
    let traits = Traits::random(&mut rand::thread_rng());

    tracing::info!(
        request_id = %request_id,
        mood = %traits.mood,
        hobby = %traits.hobby,
        genre = %traits.genre,
        vibe = %traits.vibe,
        "Generated random personality"
    );

    let recommendations = state.recommender.recommend(&traits).await?;

    Ok(Json(RandomRecommendResponse {
        recommendations,
        personality: traits,
    }))
}
