use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use portfolio_form::ErrorBody;

pub const VALIDATION_MESSAGE: &str = "Name, email, and message are required";
pub const INTERNAL_MESSAGE: &str = "Failed to process your message";

#[derive(Debug)]
pub enum ContactError {
    /// A required field is missing or empty.
    Validation,
    /// Anything unexpected while processing; the cause is logged, never returned.
    Internal(String),
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "validation: {}", VALIDATION_MESSAGE),
            Self::Internal(e) => write!(f, "internal: {}", e),
        }
    }
}

impl std::error::Error for ContactError {}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            Self::Validation => (StatusCode::BAD_REQUEST, VALIDATION_MESSAGE),
            Self::Internal(cause) => {
                tracing::error!(error = %cause, "error processing contact form");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE)
            }
        };
        let body = ErrorBody { error: msg.to_string() };
        (status, Json(body)).into_response()
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(e: serde_json::Error) -> Self {
        Self::Internal(e.to_string())
    }
}

impl From<BytesRejection> for ContactError {
    fn from(e: BytesRejection) -> Self {
        Self::Internal(e.to_string())
    }
}
