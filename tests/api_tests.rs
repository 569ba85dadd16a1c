use std::sync::Arc;

use axum_test::TestServer;
use chrono::NaiveDate;
use serde_json::json;

use cinematch_api::api::{create_router, AppState};
use cinematch_api::models::MovieRecord;
use cinematch_api::services::Recommender;
use cinematch_api::store::{Catalog, SimilarityMatrix};

fn movie(
    title: &str,
    year: Option<i32>,
    genres: &[&str],
    director: &str,
    cast: &[&str],
    runtime: u32,
) -> MovieRecord {
    MovieRecord {
        title: title.to_string(),
        release_date: year.and_then(|y| NaiveDate::from_ymd_opt(y, 6, 1)),
        vote_average: 7.0,
        vote_count: 1000,
        genres: genres.iter().map(|g| g.to_string()).collect(),
        cast: cast.iter().map(|c| c.to_string()).collect(),
        director: director.to_string(),
        overview: format!("Overview of {}", title),
        poster_url: format!("http://example.com/{}.jpg", title),
        runtime,
    }
}

/// Four movies with a similarity matrix where, seen from Heat (row 0),
/// Collateral (0.9) beats The Insider (0.7) beats Miami Vice (0.4).
fn create_test_server() -> TestServer {
    let catalog = Arc::new(Catalog::new(vec![
        movie(
            "Heat",
            Some(1995),
            &["Crime", "Drama"],
            "Michael Mann",
            &["Al Pacino", "Robert De Niro"],
            170,
        ),
        movie(
            "Collateral",
            Some(2004),
            &["Crime", "Thriller"],
            "Michael Mann",
            &["Tom Cruise", "Jamie Foxx"],
            120,
        ),
        movie(
            "The Insider",
            Some(1999),
            &["Drama"],
            "Michael Mann",
            &["Al Pacino", "Russell Crowe"],
            157,
        ),
        movie(
            "Miami Vice",
            None,
            &["Action", "Crime"],
            "Michael Mann",
            &["Colin Farrell", "Jamie Foxx"],
            132,
        ),
    ]));

    let similarity = SimilarityMatrix::new(vec![
        vec![1.0, 0.9, 0.7, 0.4],
        vec![0.9, 1.0, 0.5, 0.6],
        vec![0.7, 0.5, 1.0, 0.2],
        vec![0.4, 0.6, 0.2, 1.0],
    ])
    .unwrap();

    let recommender = Recommender::new(Arc::clone(&catalog), similarity).unwrap();
    let state = AppState::new(catalog, recommender);
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_recommendations_ranked_and_exclude_queried_title() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "title": "Heat", "k": 3 }))
        .await;

    response.assert_status_ok();
    let movies: Vec<serde_json::Value> = response.json();
    let titles: Vec<&str> = movies.iter().map(|m| m["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Collateral", "The Insider", "Miami Vice"]);
}

#[tokio::test]
async fn test_recommendations_default_k() {
    let server = create_test_server();

    // No k in the body: the default of 5 applies, capped by catalog size.
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "title": "Heat" }))
        .await;

    response.assert_status_ok();
    let movies: Vec<serde_json::Value> = response.json();
    assert_eq!(movies.len(), 3);
}

#[tokio::test]
async fn test_recommendations_unknown_title_is_404() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "title": "No Such Movie" }))
        .await;

    response.assert_status(axum::http::StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("No Such Movie"));
}

#[tokio::test]
async fn test_filter_empty_criteria_returns_all() {
    let server = create_test_server();

    let response = server.post("/api/v1/movies/filter").json(&json!({})).await;

    response.assert_status_ok();
    let movies: Vec<serde_json::Value> = response.json();
    assert_eq!(movies.len(), 4);
}

#[tokio::test]
async fn test_filter_combines_facets() {
    let server = create_test_server();

    // Crime genre AND runtime >= 130 leaves Heat and Miami Vice.
    let response = server
        .post("/api/v1/movies/filter")
        .json(&json!({
            "genres": ["Crime"],
            "min_runtime": 130
        }))
        .await;

    response.assert_status_ok();
    let movies: Vec<serde_json::Value> = response.json();
    let titles: Vec<&str> = movies.iter().map(|m| m["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Heat", "Miami Vice"]);
}

#[tokio::test]
async fn test_filter_year_range_excludes_undated() {
    let server = create_test_server();

    // Miami Vice has no release date, so any year bound rules it out.
    let response = server
        .post("/api/v1/movies/filter")
        .json(&json!({ "year_min": 1990 }))
        .await;

    response.assert_status_ok();
    let movies: Vec<serde_json::Value> = response.json();
    let titles: Vec<&str> = movies.iter().map(|m| m["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Heat", "Collateral", "The Insider"]);
}

#[tokio::test]
async fn test_filter_cast_substring_is_case_insensitive() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/movies/filter")
        .json(&json!({ "cast": "pacino" }))
        .await;

    response.assert_status_ok();
    let movies: Vec<serde_json::Value> = response.json();
    let titles: Vec<&str> = movies.iter().map(|m| m["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Heat", "The Insider"]);
}

#[tokio::test]
async fn test_filter_inverted_year_range_is_400() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/movies/filter")
        .json(&json!({ "year_min": 2010, "year_max": 1990 }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("inverted"));
}

#[tokio::test]
async fn test_title_search_matches_substring() {
    let server = create_test_server();

    let response = server.get("/api/v1/titles/search?q=insider").await;

    response.assert_status_ok();
    let movies: Vec<serde_json::Value> = response.json();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "The Insider");
}

#[tokio::test]
async fn test_title_search_blank_query_is_empty() {
    let server = create_test_server();

    let response = server.get("/api/v1/titles/search?q=%20%20").await;

    response.assert_status_ok();
    let movies: Vec<serde_json::Value> = response.json();
    assert!(movies.is_empty());
}

#[tokio::test]
async fn test_get_movie_by_title() {
    let server = create_test_server();

    let response = server.get("/api/v1/movies?title=Heat").await;

    response.assert_status_ok();
    let movie: serde_json::Value = response.json();
    assert_eq!(movie["title"], "Heat");
    assert_eq!(movie["director"], "Michael Mann");
    assert_eq!(movie["runtime"], 170);
    assert_eq!(movie["release_date"], "1995-06-01");
}

#[tokio::test]
async fn test_get_movie_unknown_title_is_404() {
    let server = create_test_server();

    let response = server.get("/api/v1/movies?title=Nope").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_facets_are_sorted_and_distinct() {
    let server = create_test_server();

    let response = server.get("/api/v1/catalog/facets").await;

    response.assert_status_ok();
    let facets: serde_json::Value = response.json();
    assert_eq!(
        facets["genres"],
        json!(["Action", "Crime", "Drama", "Thriller"])
    );
    assert_eq!(facets["directors"], json!(["Michael Mann"]));
    assert_eq!(facets["cast"].as_array().unwrap().len(), 6);
    assert_eq!(facets["cast"][0], "Al Pacino");
}

#[tokio::test]
async fn test_request_id_header_is_echoed() {
    let server = create_test_server();

    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}
