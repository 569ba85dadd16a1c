use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{FilterCriteria, MovieRecord};
use crate::services;

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub title: String,
    #[serde(default = "default_k")]
    pub k: usize,
}

fn default_k() -> usize {
    5
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct MovieQuery {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    pub genres: Vec<String>,
    pub directors: Vec<String>,
    pub cast: Vec<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Returns the movies most similar to the requested title
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Json<Vec<MovieRecord>>> {
    let recommendations = state.recommender.recommend(&request.title, request.k)?;
    Ok(Json(recommendations))
}

/// Returns the movies matching the given filter criteria
pub async fn filter_movies(
    State(state): State<AppState>,
    Json(criteria): Json<FilterCriteria>,
) -> AppResult<Json<Vec<MovieRecord>>> {
    let movies = services::filter_movies(&state.catalog, &criteria)?;
    Ok(Json(movies))
}

/// Returns the movies whose titles contain the query string
pub async fn search_titles(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<MovieRecord>> {
    let movies = services::search_titles(&state.catalog, &params.q);
    Json(movies)
}

/// Returns the full record for a single movie
pub async fn get_movie(
    State(state): State<AppState>,
    Query(params): Query<MovieQuery>,
) -> AppResult<Json<MovieRecord>> {
    let movie = state
        .catalog
        .movie(&params.title)
        .cloned()
        .ok_or_else(|| AppError::TitleNotFound(params.title.clone()))?;
    Ok(Json(movie))
}

/// Returns the distinct facet values available for filtering
pub async fn get_facets(State(state): State<AppState>) -> Json<FacetsResponse> {
    Json(FacetsResponse {
        genres: state.catalog.genres(),
        directors: state.catalog.directors(),
        cast: state.catalog.cast_members(),
    })
}
