use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::Recommendation;
use crate::services::recommendations;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub title: String,
}

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Returns all catalog titles in row order, for the selection control
pub async fn get_movies(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.titles())
}

/// Returns up to five recommendations for the selected title
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let title = params.title.trim();
    if title.is_empty() {
        return Err(AppError::InvalidInput(
            "Query parameter 'title' must not be empty".to_string(),
        ));
    }

    let results = recommendations::recommend(
        &state.catalog,
        &state.similarity,
        state.posters.as_ref(),
        title,
    )
    .await?;

    Ok(Json(results))
}
