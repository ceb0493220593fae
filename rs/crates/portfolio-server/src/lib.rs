//! portfolio-server — the portfolio page and its contact submission endpoint
//!
//! `POST /api/contact` validates a `{name, email, message}` payload, hands it
//! to a [`SubmissionSink`], and answers with a fixed acknowledgement. No email
//! is sent; the sink is where a delivery provider would plug in.

pub mod config;
pub mod error;
pub mod server;
pub mod sink;
pub mod site;

pub use config::{ConfigError, ServerConfig, DEFAULT_DESTINATION};
pub use error::{ContactError, INTERNAL_MESSAGE, VALIDATION_MESSAGE};
pub use server::{ack_message, parse_submission, router, AppState};
pub use sink::{SinkError, SubmissionRecord, SubmissionSink, TracingSink, SUBMISSION_TARGET};
