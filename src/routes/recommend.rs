use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{Recommendation, Traits, TraitsRequest},
    routes::AppState,
};

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
}

/// Handler for recommendations from user-supplied traits
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<TraitsRequest>, JsonRejection>,
) -> AppResult<Json<RecommendResponse>> {
    let Json(request) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let traits = Traits::try_from(request).map_err(AppError::InvalidInput)?;

    tracing::info!(
        request_id = %request_id,
        mood = %traits.mood,
        genre = %traits.genre,
        "Processing recommendation request"
    );

    let recommendations = state.recommender.recommend(&traits).await?;

    tracing::info!(
        request_id = %request_id,
        count = recommendations.len(),
        "Recommendation completed"
    );

    Ok(Json(RecommendResponse { recommendations }))
}
