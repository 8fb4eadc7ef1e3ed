//! Response types and error handling for API endpoints
//!
//! Provides unified error handling and JSON response formatting.

use std::error::Error as _;

use agora_core::{
    DependencyFailure, DependencyValidationFailure, FoundationError, ValidationFailure,
    Violations,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    /// Already logged by the failing service
    #[error(transparent)]
    Foundation(#[from] FoundationError),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Foundation(e) => foundation_status(e),
            Self::InvalidPath(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Foundation(e) => foundation_code(e),
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidBody(_) => "INVALID_REQUEST_BODY",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show a client
    ///
    /// Client errors carry the cause (which fields, which id); server errors
    /// only the outward message.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Foundation(e) if !self.status_code().is_server_error() => e
                .source()
                .map_or_else(|| e.to_string(), ToString::to_string),
            _ => self.to_string(),
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }
}

fn foundation_status(e: &FoundationError) -> StatusCode {
    match e {
        FoundationError::Validation {
            source: ValidationFailure::NotFound { .. },
            ..
        } => StatusCode::NOT_FOUND,
        FoundationError::Validation { .. } => StatusCode::BAD_REQUEST,
        FoundationError::DependencyValidation {
            source: DependencyValidationFailure::AlreadyExists { .. },
            ..
        } => StatusCode::CONFLICT,
        FoundationError::DependencyValidation { .. } => StatusCode::BAD_REQUEST,
        FoundationError::Dependency {
            source: DependencyFailure::Locked { .. },
            ..
        } => StatusCode::LOCKED,
        FoundationError::Dependency { .. } | FoundationError::Service { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn foundation_code(e: &FoundationError) -> &'static str {
    match e {
        FoundationError::Validation {
            source: ValidationFailure::NotFound { .. },
            ..
        } => "NOT_FOUND",
        FoundationError::Validation { .. } => "VALIDATION_ERROR",
        FoundationError::DependencyValidation {
            source: DependencyValidationFailure::AlreadyExists { .. },
            ..
        } => "ALREADY_EXISTS",
        FoundationError::DependencyValidation { .. } => "DEPENDENCY_VALIDATION_ERROR",
        FoundationError::Dependency {
            source: DependencyFailure::Locked { .. },
            ..
        } => "LOCKED",
        FoundationError::Dependency { .. } => "DEPENDENCY_ERROR",
        FoundationError::Service { .. } => "SERVICE_ERROR",
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail for API responses
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    /// Field violations, in the order they were found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Violations>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let Self::Internal(e) = &self {
            error!(error = ?e, "Server error occurred");
        }

        let details = match &self {
            Self::Foundation(e) => e.violations().cloned(),
            _ => None,
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.client_message(),
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
