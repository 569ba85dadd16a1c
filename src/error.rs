use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Title not found: {0}")]
    TitleNotFound(String),

    #[error("Invalid filter criteria: {0}")]
    InvalidCriteria(String),

    #[error("Similarity matrix has {matrix} rows but the catalog has {catalog} movies")]
    DimensionMismatch { matrix: usize, catalog: usize },

    #[error("Malformed similarity matrix: {0}")]
    MalformedMatrix(String),

    #[error("Failed to read artifact {path}: {source}")]
    ArtifactIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse artifact {path}: {source}")]
    ArtifactParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::TitleNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCriteria(_) => StatusCode::BAD_REQUEST,
            // The artifact and dimension errors are fatal at startup and
            // never reach a handler; the mapping keeps the type total.
            AppError::DimensionMismatch { .. }
            | AppError::MalformedMatrix(_)
            | AppError::ArtifactIo { .. }
            | AppError::ArtifactParse { .. }
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
