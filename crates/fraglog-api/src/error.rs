//! Error types for the query API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can
//! be converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//! `GameDoesNotExist` from the store maps to a 404 with the wire shape
//! `{"message": "Game not found"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fraglog_store::StoreError;

/// Errors that can occur in the query API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested game was not found.
    #[error("game not found")]
    GameNotFound,

    /// A serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::GameDoesNotExist => Self::GameNotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::GameNotFound => (StatusCode::NOT_FOUND, String::from("Game not found")),
            Self::Serialization(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("JSON error: {e}"))
            }
        };

        let body = serde_json::json!({
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
