use chrono::{SecondsFormat, Utc};
use serde::Serialize;

pub const SUBMISSION_TARGET: &str = "contact_submission";

/// What the endpoint records for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    pub to: String,
    pub timestamp: String,
}

impl SubmissionRecord {
    pub fn now(name: &str, email: &str, message: &str, to: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            to: to.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkError(pub String);

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "submission sink: {}", self.0)
    }
}

impl std::error::Error for SinkError {}

/// Where accepted submissions go. Swap in a delivery provider here.
pub trait SubmissionSink: Send + Sync {
    fn record(&self, record: &SubmissionRecord) -> Result<(), SinkError>;
}

/// Writes each submission as a structured `info` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn record(&self, r: &SubmissionRecord) -> Result<(), SinkError> {
        tracing::info!(
            target: SUBMISSION_TARGET,
            name = %r.name,
            email = %r.email,
            body = %r.message,
            to = %r.to,
            timestamp = %r.timestamp,
            "Contact form submission"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_rfc3339_millis_utc() {
        let r = SubmissionRecord::now("Ada", "ada@example.com", "Hi", "inbox@example.org");
        // 2026-10-16T09:30:00.123Z
        assert_eq!(r.timestamp.len(), 24);
        assert!(r.timestamp.ends_with('Z'));
        assert_eq!(&r.timestamp[19..20], ".");
        assert!(chrono::DateTime::parse_from_rfc3339(&r.timestamp).is_ok());
        assert_eq!(r.to, "inbox@example.org");
    }
}
