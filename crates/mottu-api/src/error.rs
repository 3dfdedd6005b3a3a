//! Maps domain `AppError` to HTTP responses.
//!
//! | kind | status | body |
//! |---|---|---|
//! | `Validation` | 400 | JSON string with the message |
//! | `NotFound` | 404 | empty |
//! | anything else | 500 | `{"error", "message"}` |

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use mottu_core::error::{AppError, ErrorKind};

/// Body of a 500 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Handler error: an [`AppError`] that knows how to render itself.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        match err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, Json(err.message)).into_response(),
            ErrorKind::NotFound => StatusCode::NOT_FOUND.into_response(),
            kind => {
                tracing::error!(
                    kind = %kind,
                    error = %err.message,
                    source = ?err.source,
                    "Request failed"
                );
                let code = match kind {
                    ErrorKind::Database => "DATABASE_ERROR",
                    ErrorKind::Configuration => "CONFIGURATION_ERROR",
                    ErrorKind::Serialization => "SERIALIZATION_ERROR",
                    _ => "INTERNAL_ERROR",
                };
                let body = ApiErrorResponse {
                    error: code.to_string(),
                    message: err.message,
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

/// Flatten field constraint violations into one validation error.
///
/// Fields are reported in name order; each contributes its declared
/// message, or a generic one when the constraint has none.
pub fn from_validation_errors(errors: &ValidationErrors) -> AppError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("Campo '{field}' inválido."),
            })
        })
        .collect();

    AppError::validation(messages.join(" "))
}
