//! HTTP API Errors
//!
//! Maps domain failures onto JSON error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sparkdeck_core::DomainError;

const GENERIC_FAILURE: &str = "Something went wrong!";

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// `detail` is only sent to the client in development mode
    Internal { detail: String, expose: bool },
}

impl ApiError {
    /// Convert a domain error; `expose` controls whether internal details leak
    pub fn from_domain(err: DomainError, expose: bool) -> Self {
        match err {
            DomainError::NotFound(msg) => ApiError::NotFound(msg),
            DomainError::InvalidInput(msg) => ApiError::BadRequest(msg),
            DomainError::Internal(detail) => ApiError::Internal { detail, expose },
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Internal { detail, .. } => write!(f, "Internal error: {}", detail),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))).into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response(),
            ApiError::Internal { detail, expose } => {
                tracing::error!("request failed: {}", detail);
                let body = if expose {
                    json!({ "error": GENERIC_FAILURE, "message": detail })
                } else {
                    json!({ "error": GENERIC_FAILURE })
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = ApiError::from_domain(DomainError::NotFound("Idea 9".into()), false).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Idea 9");
    }

    #[tokio::test]
    async fn test_invalid_input_is_bad_request() {
        let response = ApiError::from_domain(DomainError::InvalidInput("title is required".into()), false).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "title is required");
    }

    #[tokio::test]
    async fn test_internal_hides_detail_in_production() {
        let response = ApiError::from_domain(DomainError::Internal("disk on fire".into()), false).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], GENERIC_FAILURE);
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn test_internal_exposes_detail_in_development() {
        let response = ApiError::from_domain(DomainError::Internal("disk on fire".into()), true).into_response();
        assert_eq!(body_json(response).await["message"], "disk on fire");
    }
}
