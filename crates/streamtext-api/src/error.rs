use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use streamtext_stream::StreamError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Soft refusal: answered with 200 and an `error` body rather than a failure status.
    #[error("Streaming must be enabled")]
    StreamingDisabled,

    #[error("Stream setup error: {0}")]
    Stream(#[from] StreamError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::StreamingDisabled => (StatusCode::OK, self.to_string()),
            ApiError::Stream(ref e) => {
                tracing::error!("Stream setup error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Stream setup error".to_string())
            }
            ApiError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Configuration error".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
