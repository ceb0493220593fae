use std::time::Duration;

use crate::wire::{ContactAck, ContactSubmission, ErrorBody};

pub const REJECTED_FALLBACK: &str = "Failed to send message";
pub const TRANSPORT_FALLBACK: &str = "Failed to send your message. Please try again later.";

/// Why a submission did not come back as a 2xx acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Non-2xx response; `message` is the server's `error` field when present.
    Rejected { status: u16, message: Option<String> },
    /// Connection failure or an unreadable response body.
    Transport(String),
}

impl SubmitError {
    /// Text shown to the user in the error notification.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected { message: Some(m), .. } if !m.is_empty() => m,
            Self::Rejected { .. } => REJECTED_FALLBACK,
            Self::Transport(_) => TRANSPORT_FALLBACK,
        }
    }
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected { status, .. } => write!(f, "rejected ({}): {}", status, self.user_message()),
            Self::Transport(e) => write!(f, "transport: {}", e),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<reqwest::Error> for SubmitError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

/// One outbound call to the submission endpoint.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, submission: &ContactSubmission) -> Result<ContactAck, SubmitError>;
}

/// POSTs the submission as JSON over HTTP.
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(format!("portfolio-contact/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self::with_client(http, endpoint))
    }

    pub fn with_client(http: reqwest::Client, endpoint: &str) -> Self {
        Self { http, endpoint: endpoint.to_string() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<ContactAck, SubmitError> {
        // .json() also sets Content-Type: application/json
        let resp = self.http.post(&self.endpoint).json(submission).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body).ok().map(|b| b.error);
            return Err(SubmitError::Rejected { status: status.as_u16(), message });
        }

        serde_json::from_slice::<ContactAck>(&body)
            .map_err(|e| SubmitError::Transport(format!("unreadable acknowledgement: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_uses_server_message() {
        let e = SubmitError::Rejected {
            status: 400,
            message: Some("Name, email, and message are required".into()),
        };
        assert_eq!(e.user_message(), "Name, email, and message are required");
    }

    #[test]
    fn rejected_without_message_falls_back() {
        let e = SubmitError::Rejected { status: 502, message: None };
        assert_eq!(e.user_message(), REJECTED_FALLBACK);
        let e = SubmitError::Rejected { status: 500, message: Some(String::new()) };
        assert_eq!(e.user_message(), REJECTED_FALLBACK);
    }

    #[test]
    fn transport_failure_is_generic() {
        let e = SubmitError::Transport("connection refused".into());
        assert_eq!(e.user_message(), TRANSPORT_FALLBACK);
        assert!(e.to_string().contains("connection refused"));
    }
}
