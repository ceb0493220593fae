use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use portfolio_dom::Snapshot;
use portfolio_form::{ContactAck, ContactForm, ContactSubmission};
use serde_json::Value;

use crate::config::ServerConfig;
use crate::error::ContactError;
use crate::sink::{SubmissionRecord, SubmissionSink};
use crate::site;

// ── Shared state ────────────────────────────────────────────────────

pub struct AppState {
    pub config: ServerConfig,
    pub sink: Arc<dyn SubmissionSink>,
    page: String,
}

impl AppState {
    pub fn new(config: ServerConfig, sink: Arc<dyn SubmissionSink>) -> Self {
        let page = site::render_portfolio_page(&config.destination);
        Self { config, sink, page }
    }
}

// ── Router ──────────────────────────────────────────────────────────

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(homepage))
        .route("/health", get(health))
        .route("/api/contact", post(contact))
        .route("/api/contact/form", get(contact_form))
        .with_state(state)
}

pub fn ack_message(destination: &str) -> String {
    format!(
        "Your message has been received. In the production version, an email would be sent to {}.",
        destination
    )
}

// ── Handlers: Public ────────────────────────────────────────────────

async fn health() -> &'static str {
    "ok"
}

async fn homepage(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.clone())
}

async fn contact_form() -> Json<Snapshot> {
    Json(portfolio_form::snapshot(&ContactForm::new()))
}

// ── Handlers: Contact ───────────────────────────────────────────────

/// Takes the raw body so that unparsable JSON, and a body the extractor
/// refuses to buffer, map to the 500 contract instead of axum's own
/// plain-text rejection.
async fn contact(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ContactAck>, ContactError> {
    let submission = parse_submission(&body?)?;

    let record = SubmissionRecord::now(
        &submission.name,
        &submission.email,
        &submission.message,
        &state.config.destination,
    );
    if let Err(e) = state.sink.record(&record) {
        tracing::warn!(error = %e, "contact submission was not recorded");
    }

    Ok(Json(ContactAck {
        success: true,
        message: ack_message(&state.config.destination),
    }))
}

/// Validate a request body into a submission.
///
/// Invalid JSON and a `null` body are internal failures; any JSON value
/// without three non-empty string fields is a validation failure.
pub fn parse_submission(body: &[u8]) -> Result<ContactSubmission, ContactError> {
    let value: Value = serde_json::from_slice(body)?;
    if value.is_null() {
        return Err(ContactError::Internal("request body is null".into()));
    }

    let field = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    match (field("name"), field("email"), field("message")) {
        (Some(name), Some(email), Some(message)) => Ok(ContactSubmission { name, email, message }),
        _ => Err(ContactError::Validation),
    }
}
