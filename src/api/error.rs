// src/api/error.rs
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::application::error::ApplicationError;
use crate::domain::error::DomainError;
use crate::domain::tagging::TaggingError;

/// API-layer error. Serialized as `{"error": "..."}` with the status code
/// the contract prescribes; store errors collapse to a generic 500 while
/// the specific cause is logged server-side.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Entry not found with ID {0}")]
    NotFound(i32),

    #[error(transparent)]
    Tagging(#[from] TaggingError),

    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Tagging(TaggingError::Unauthorized) => StatusCode::UNAUTHORIZED,
            ApiError::Tagging(TaggingError::QuotaExhausted) => StatusCode::PAYMENT_REQUIRED,
            ApiError::Tagging(TaggingError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
            // Missing credential is a configuration problem, not a client
            // request problem.
            ApiError::Tagging(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            // The underlying store error stays in the log.
            ApiError::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            error!("internal error: {}", detail);
        }

        let body = Json(json!({ "error": self.public_message() }));
        (self.status(), body).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => ApiError::Validation(msg),
            ApplicationError::EntryNotFound(id) => ApiError::NotFound(id),
            ApplicationError::Tagging(e) => ApiError::Tagging(e),
            ApplicationError::Domain(DomainError::InvalidEntry(msg)) => ApiError::Validation(msg),
            ApplicationError::Domain(DomainError::Tagging(e)) => ApiError::Tagging(e),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
