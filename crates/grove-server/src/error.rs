use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use grove_openai::OpenAiError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The upstream model provider failed or answered unusably.
    Upstream(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Upstream(msg) => {
                tracing::error!("upstream error: {msg}");
                (StatusCode::BAD_GATEWAY, "upstream service error".to_string())
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<OpenAiError> for ApiError {
    fn from(e: OpenAiError) -> Self {
        match e {
            OpenAiError::Request(_) | OpenAiError::Api(_) | OpenAiError::EmptyResponse => {
                ApiError::Upstream(e.to_string())
            }
            OpenAiError::MissingApiKey => ApiError::Internal(e.to_string()),
        }
    }
}
