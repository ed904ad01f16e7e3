//! Error taxonomy for post handlers.
//!
//! - [`AppError`] - expected business failure carrying its own HTTP status
//! - [`BusinessError`] - what a [`crate::application::PostBusiness`] call can fail with
//! - [`ApiError`] - classification at the handler boundary, rendered as the response

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::validation::ValidationFailure;

/// Body sent for any failure that is not a validation or application error.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error";

/// A recoverable business error with a status code and a client-facing message.
///
/// Both are surfaced verbatim to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Failure returned by a business operation.
#[derive(Debug, Error)]
pub enum BusinessError {
    /// Expected failure (not found, forbidden, conflict, ...).
    #[error(transparent)]
    Application(#[from] AppError),

    /// Anything else. Details are logged, never sent to the client.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Failure of a single request, classified once at the handler boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationFailure),

    /// The request body could not be buffered (too large, aborted stream).
    #[error("unreadable request body: {0}")]
    Body(#[from] BytesRejection),

    #[error("application error {}: {}", .0.status_code(), .0.message())]
    Application(AppError),

    #[error("unexpected error: {0:#}")]
    Unexpected(anyhow::Error),
}

impl From<BusinessError> for ApiError {
    fn from(err: BusinessError) -> Self {
        match err {
            BusinessError::Application(app) => Self::Application(app),
            BusinessError::Unexpected(other) => Self::Unexpected(other),
        }
    }
}

impl ApiError {
    /// Status code of the response this error renders to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Body(rejection) => rejection.status(),
            Self::Application(app) => app.status_code(),
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Writes the failure to the log.
    ///
    /// Called exactly once per failed request, before the response is built.
    pub fn record(&self, operation: &'static str) {
        let status = self.status_code().as_u16();

        match self {
            Self::Validation(failure) => tracing::warn!(
                operation,
                status,
                issues = ?failure.issues(),
                "Request rejected by validation"
            ),
            Self::Body(rejection) => tracing::warn!(
                operation,
                status,
                reason = %rejection.body_text(),
                "Request body could not be read"
            ),
            Self::Application(app) => tracing::warn!(
                operation,
                status,
                reason = app.message(),
                "Business operation failed"
            ),
            Self::Unexpected(err) => tracing::error!(
                operation,
                status,
                error = ?err,
                "Unexpected error while handling request"
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(failure) => {
                (StatusCode::BAD_REQUEST, Json(failure.into_issues())).into_response()
            }
            Self::Body(rejection) => rejection.into_response(),
            Self::Application(app) => (app.status, app.message).into_response(),
            Self::Unexpected(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR_MESSAGE).into_response()
            }
        }
    }
}
