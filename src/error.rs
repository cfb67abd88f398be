//! Application error type and its HTTP representation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
}

/// Errors produced by the service layer and its collaborators.
///
/// Short code collisions are not represented here: the store reports them as
/// [`crate::domain::repositories::InsertOutcome::CodeTaken`] and the shortening
/// service retries. Unknown codes are `Option::None`, not an error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// User input was rejected before reaching the store.
    #[error("{message}")]
    Validation { code: &'static str, message: String },

    /// Every candidate code within the retry budget was already taken.
    #[error("no free short code found after {attempts} attempts")]
    CodeGenerationExhausted { attempts: usize },

    /// Store or infrastructure failure. The message is logged, never returned.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true for the `invalid_url` validation failure.
    pub fn is_invalid_url(&self) -> bool {
        matches!(self, AppError::Validation { code, .. } if *code == "invalid_url")
    }

    /// Converts the error to the payload exposed to clients.
    ///
    /// Server-side failures collapse to a generic message.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { code, message } => ErrorInfo {
                code,
                message: message.clone(),
            },
            AppError::CodeGenerationExhausted { .. } | AppError::Internal { .. } => ErrorInfo {
                code: "internal_error",
                message: "Internal server error".to_string(),
            },
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::CodeGenerationExhausted { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(format!("Database error: {e}"))
    }
}
