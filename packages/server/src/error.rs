//! Request-level errors and their JSON envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use warc_extraction::{ExtractionError, SummarizeError};

/// Failures surfaced to the client.
///
/// Everything below the upload layer is absorbed by the pipeline; what
/// escapes here is either a bad request or a request-level failure.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request did not include exactly one `file` field
    #[error("file not found in the request")]
    NoFile,

    /// The multipart stream itself could not be read
    #[error("invalid upload: {0}")]
    Upload(String),

    /// The archive stream was not a valid container
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// The summarization collaborator failed or replied with non-JSON
    #[error(transparent)]
    Summarize(#[from] SummarizeError),

    /// Spooling or task plumbing failed
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NoFile | ApiError::Upload(_) => StatusCode::BAD_REQUEST,
            ApiError::Extraction(_) | ApiError::Summarize(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_4xx() {
        assert_eq!(ApiError::NoFile.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Upload("boundary missing".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn pipeline_errors_are_5xx() {
        let err = ApiError::from(SummarizeError::Unavailable("down".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
