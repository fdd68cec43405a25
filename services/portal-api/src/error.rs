//! Error types for the portal API service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use navagatha_auth_core::AuthError;
use navagatha_notify::NotifyError;
use navagatha_store::StoreError;

/// API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or invalid session; never says which
    #[error("Authentication required")]
    Unauthenticated,

    /// Valid session, but not the HR account
    #[error("Forbidden")]
    Forbidden,

    /// Login codes are restricted to organizational addresses
    #[error("Access restricted to organizational email addresses")]
    DomainNotAllowed,

    /// Wrong or expired login code; never says which
    #[error("Invalid or expired code")]
    ChallengeInvalid,

    #[error("Not found")]
    NotFound,

    #[error("Auth error")]
    Auth(#[from] AuthError),

    #[error("Storage error")]
    Store(#[from] StoreError),

    #[error("Notifier error")]
    Notify(#[from] NotifyError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated | Self::ChallengeInvalid => StatusCode::UNAUTHORIZED,
            Self::Forbidden | Self::DomainNotAllowed => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Auth(AuthError::InvalidToken | AuthError::TokenExpired) => {
                StatusCode::UNAUTHORIZED
            }
            Self::Auth(_) | Self::Store(_) | Self::Notify(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Forbidden => "FORBIDDEN",
            Self::DomainNotAllowed => "DOMAIN_NOT_ALLOWED",
            Self::ChallengeInvalid => "CHALLENGE_INVALID",
            Self::NotFound => "NOT_FOUND",
            Self::Auth(AuthError::InvalidToken | AuthError::TokenExpired) => "UNAUTHENTICATED",
            Self::Auth(_) | Self::Store(_) | Self::Notify(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        // Internal detail stays in the logs; the response body carries only
        // the variant's display text
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = ?self, "internal API error");
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
