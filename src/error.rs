//! Application error type and its HTTP mapping.
//!
//! Every failure path in the service ends up as one [`AppError`] variant, and
//! every variant renders the same JSON body:
//!
//! ```json
//! { "message": "The shortcode cannot be found in the system" }
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::utils::code_generator::SHORTCODE_PATTERN;
use crate::utils::db_error::is_unique_violation_on_shortcode;

pub const MSG_BAD_REQUEST: &str = "Bad Request";
pub const MSG_URL_MISSING: &str = "url is not present";
pub const MSG_SHORTCODE_IN_USE: &str = "The desired shortcode is already in use";
pub const MSG_SHORTCODE_NOT_FOUND: &str = "The shortcode cannot be found in the system";
pub const MSG_NOT_FOUND: &str = "Not Found";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
pub const MSG_INTERNAL: &str = "Internal Server Error";

/// Message returned when a requested shortcode does not match [`SHORTCODE_PATTERN`].
pub fn invalid_shortcode_message() -> String {
    format!("The shortcode fails to meet the following regexp: {SHORTCODE_PATTERN}")
}

/// Uniform error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed input: unparseable body or missing required field.
    #[error("{message}")]
    Validation { message: String },

    /// The requested shortcode does not match the accepted format.
    #[error("{message}")]
    InvalidShortcode { message: String },

    #[error("{message}")]
    NotFound { message: String },

    /// The path exists but not for the request method.
    #[error("{message}")]
    MethodNotAllowed { message: String },

    /// Uniqueness violation on insert.
    #[error("{message}")]
    Conflict { message: String },

    /// Store or other server-side failure. The message is always generic.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_shortcode() -> Self {
        Self::InvalidShortcode {
            message: invalid_shortcode_message(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self::MethodNotAllowed {
            message: MSG_METHOD_NOT_ALLOWED.to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidShortcode { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::Validation { message }
            | AppError::InvalidShortcode { message }
            | AppError::NotFound { message }
            | AppError::MethodNotAllowed { message }
            | AppError::Conflict { message }
            | AppError::Internal { message } => message,
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

/// Classifies driver errors using the structured database error kind.
///
/// A unique violation on the shortcode constraint becomes [`AppError::Conflict`];
/// anything else is logged and reduced to a generic [`AppError::Internal`].
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_shortcode(&e) {
            return AppError::conflict(MSG_SHORTCODE_IN_USE);
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal(MSG_INTERNAL)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        AppError::bad_request(MSG_BAD_REQUEST)
    }
}

/// A path segment that cannot be decoded, e.g. `/%FF`.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request path");
        AppError::bad_request(MSG_BAD_REQUEST)
    }
}

/// A missing `url` wins over a malformed `shortcode`.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors.field_errors();

        if fields.contains_key("url") {
            AppError::bad_request(MSG_URL_MISSING)
        } else if fields.contains_key("shortcode") {
            AppError::invalid_shortcode()
        } else {
            AppError::bad_request(MSG_BAD_REQUEST)
        }
    }
}
