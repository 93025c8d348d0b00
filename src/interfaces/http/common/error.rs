//! Mapping of domain errors onto HTTP responses
//!
//! | error                     | status | body                 |
//! |---------------------------|--------|----------------------|
//! | `DomainError::NotFound`   | 404    | empty                |
//! | `DomainError::Validation` | 400    | `{"error": "..."}`   |
//! | `DomainError::Storage`    | 500    | `{"error": "..."}`   |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::DomainError;

/// Error body for failures other than "not found"
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Handler error wrapper so handlers can use `?` on service calls.
#[derive(Debug)]
pub struct HttpError(pub DomainError);

impl From<DomainError> for HttpError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self.0 {
            e @ DomainError::NotFound { .. } => {
                tracing::debug!("{}", e);
                StatusCode::NOT_FOUND.into_response()
            }
            DomainError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
            }
            DomainError::Storage(msg) => {
                tracing::error!("Storage failure: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("internal storage error")),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn not_found_has_empty_body() {
        let resp = HttpError(DomainError::not_found("Category", 1)).into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn validation_is_bad_request_with_message() {
        let resp = HttpError(DomainError::Validation("bad size".into())).into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "bad size");
    }

    #[test]
    fn storage_is_internal_error() {
        let resp = HttpError(DomainError::Storage("disk full".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
