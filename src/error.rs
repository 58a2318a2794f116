// Error types for the Expression Mapper service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Main error type for the Expression Mapper service
#[derive(Debug, Error)]
pub enum ExpressionMapperError {
    #[error("no image provided")]
    MissingImage,

    #[error("invalid multipart payload: {0}")]
    Multipart(String),

    #[error("inference service returned HTTP {status}: {body}")]
    InferenceService {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("inference request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Expression Mapper operations
pub type Result<T> = std::result::Result<T, ExpressionMapperError>;

// Conversion from multipart extraction errors
impl From<axum::extract::multipart::MultipartError> for ExpressionMapperError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        ExpressionMapperError::Multipart(err.to_string())
    }
}

impl ExpressionMapperError {
    /// HTTP status this error surfaces as at the service boundary
    pub fn status_code(&self) -> StatusCode {
        match self {
            ExpressionMapperError::MissingImage => StatusCode::BAD_REQUEST,
            ExpressionMapperError::Multipart(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing message; upstream diagnostics stay in the logs
    fn public_message(&self) -> String {
        match self {
            ExpressionMapperError::MissingImage => "No image provided".to_string(),
            ExpressionMapperError::Multipart(detail) => {
                format!("Invalid upload: {detail}")
            }
            ExpressionMapperError::InferenceService { .. }
            | ExpressionMapperError::Http(_) => {
                "Failed to analyze expression".to_string()
            }
            ExpressionMapperError::Io(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ExpressionMapperError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_bad_request() {
        assert_eq!(
            ExpressionMapperError::MissingImage.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ExpressionMapperError::Multipart("truncated".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_upstream_failure_maps_to_internal_error() {
        let err = ExpressionMapperError::InferenceService {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            body: "model loading".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_body_is_not_forwarded() {
        let err = ExpressionMapperError::InferenceService {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            body: "internal diagnostic".to_string(),
        };
        assert!(!err.public_message().contains("internal diagnostic"));
    }
}
