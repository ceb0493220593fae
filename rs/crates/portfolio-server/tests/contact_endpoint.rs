use std::sync::{Arc, Mutex};

use portfolio_form::{
    ContactForm, ContactSubmission, Field, HttpTransport, Phase, SubmitError, SubmitFailure,
    Transport,
};
use portfolio_server::{
    router, AppState, ServerConfig, SinkError, SubmissionRecord, SubmissionSink,
};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[derive(Default)]
struct RecordingSink(Mutex<Vec<SubmissionRecord>>);

impl SubmissionSink for RecordingSink {
    fn record(&self, record: &SubmissionRecord) -> Result<(), SinkError> {
        self.0.lock().expect("sink lock").push(record.clone());
        Ok(())
    }
}

struct FailingSink;

impl SubmissionSink for FailingSink {
    fn record(&self, _: &SubmissionRecord) -> Result<(), SinkError> {
        Err(SinkError("disk full".into()))
    }
}

async fn spawn_app(config: ServerConfig, sink: Arc<dyn SubmissionSink>) -> std::net::SocketAddr {
    let app = router(Arc::new(AppState::new(config, sink)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn send_raw(
    method: &str,
    addr: std::net::SocketAddr,
    path: &str,
    body: &[u8],
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    if !body.is_empty() || method == "POST" {
        req.push_str("Content-Type: application/json\r\n");
        req.push_str(&format!("Content-Length: {}\r\n", body.len()));
    }
    req.push_str("\r\n");
    stream.write_all(req.as_bytes()).await.expect("write head");
    stream.write_all(body).await.expect("write body");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

async fn post_contact(addr: std::net::SocketAddr, body: &str) -> (u16, String) {
    let (status, _, body) = send_raw("POST", addr, "/api/contact", body.as_bytes()).await;
    (status, body)
}

#[tokio::test]
async fn example_submission_gets_exact_acknowledgement() {
    let sink = Arc::new(RecordingSink::default());
    let addr = spawn_app(ServerConfig::default(), sink.clone()).await;

    let (status, body) =
        post_contact(addr, r#"{"name":"Ada","email":"ada@example.com","message":"Hi"}"#).await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        r#"{"success":true,"message":"Your message has been received. In the production version, an email would be sent to mugunthan701@gmail.com."}"#
    );

    let records = sink.0.lock().expect("sink lock");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Ada");
    assert_eq!(records[0].to, "mugunthan701@gmail.com");
    assert!(records[0].timestamp.ends_with('Z'));
}

#[tokio::test]
async fn missing_or_empty_fields_return_400() {
    let sink = Arc::new(RecordingSink::default());
    let addr = spawn_app(ServerConfig::default(), sink.clone()).await;

    for body in [
        r#"{"email":"ada@example.com","message":"Hi"}"#,
        r#"{"name":"Ada","message":"Hi"}"#,
        r#"{"name":"Ada","email":"ada@example.com"}"#,
        r#"{"name":"","email":"ada@example.com","message":"Hi"}"#,
        r#"{"name":"Ada","email":"","message":"Hi"}"#,
        r#"{"name":"Ada","email":"ada@example.com","message":""}"#,
    ] {
        let (status, resp) = post_contact(addr, body).await;
        assert_eq!(status, 400, "body {body}");
        assert_eq!(resp, r#"{"error":"Name, email, and message are required"}"#);
    }
    assert!(sink.0.lock().expect("sink lock").is_empty());
}

#[tokio::test]
async fn malformed_body_returns_500() {
    let addr = spawn_app(ServerConfig::default(), Arc::new(RecordingSink::default())).await;

    for body in ["not json", "{\"name\":\"Ada\"", ""] {
        let (status, resp) = post_contact(addr, body).await;
        assert_eq!(status, 500, "body {body:?}");
        assert_eq!(resp, r#"{"error":"Failed to process your message"}"#);
    }
}

#[tokio::test]
async fn sink_failure_does_not_change_response() {
    let addr = spawn_app(ServerConfig::default(), Arc::new(FailingSink)).await;

    let (status, body) =
        post_contact(addr, r#"{"name":"Ada","email":"ada@example.com","message":"Hi"}"#).await;

    assert_eq!(status, 200);
    let parsed: Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(parsed["success"], Value::Bool(true));
}

#[tokio::test]
async fn injected_destination_appears_in_ack() {
    let config = ServerConfig {
        destination: "inbox@example.org".into(),
        ..ServerConfig::default()
    };
    let addr = spawn_app(config, Arc::new(RecordingSink::default())).await;

    let (status, body) =
        post_contact(addr, r#"{"name":"Ada","email":"ada@example.com","message":"Hi"}"#).await;

    assert_eq!(status, 200);
    let parsed: Value = serde_json::from_str(&body).expect("json body");
    let message = parsed["message"].as_str().expect("message string");
    assert!(message.contains("inbox@example.org"));
    assert!(!message.contains("mugunthan701@gmail.com"));
}

#[tokio::test]
async fn homepage_renders_sections_and_form() {
    let addr = spawn_app(ServerConfig::default(), Arc::new(RecordingSink::default())).await;

    let (status, head, body) = send_raw("GET", addr, "/", b"").await;

    assert_eq!(status, 200);
    assert!(head.to_ascii_lowercase().contains("content-type: text/html"));
    for id in ["hero", "about", "projects", "skills", "contact"] {
        assert!(body.contains(&format!("id=\"{id}\"")), "section {id}");
    }
    assert!(body.contains("data-key=\"form\""));
    assert!(body.contains("Send Message"));
}

#[tokio::test]
async fn health_and_form_snapshot() {
    let addr = spawn_app(ServerConfig::default(), Arc::new(RecordingSink::default())).await;

    let (status, _, body) = send_raw("GET", addr, "/health", b"").await;
    assert_eq!((status, body.as_str()), (200, "ok"));

    let (status, _, body) = send_raw("GET", addr, "/api/contact/form", b"").await;
    assert_eq!(status, 200);
    let snap = portfolio_dom::parse_snapshot(&body).expect("snapshot json");
    assert_eq!(snap.root.key.as_deref(), Some("contact-form"));
    assert!(snap.root.find_key("btn").is_some());
}

#[tokio::test]
async fn form_client_round_trip_over_http() {
    let addr = spawn_app(ServerConfig::default(), Arc::new(RecordingSink::default())).await;
    let transport =
        HttpTransport::new(&format!("http://{addr}/api/contact")).expect("http client");

    let mut form = ContactForm::new();
    form.set_field(Field::Name, "Ada");
    form.set_field(Field::Email, "ada@example.com");
    form.set_field(Field::Message, "Hi");

    let ack = form.submit(&transport).await.expect("accepted");
    assert!(ack.message.contains("mugunthan701@gmail.com"));
    assert_eq!(form.phase(), Phase::Submitted);
    assert!(form.fields().name.is_empty());

    form.send_another();
    assert_eq!(form.phase(), Phase::Editing);
}

#[tokio::test]
async fn transport_surfaces_server_error_message() {
    let addr = spawn_app(ServerConfig::default(), Arc::new(RecordingSink::default())).await;
    let transport =
        HttpTransport::new(&format!("http://{addr}/api/contact")).expect("http client");

    let empty = ContactSubmission {
        name: String::new(),
        email: "ada@example.com".into(),
        message: "Hi".into(),
    };
    let err = transport.send(&empty).await.expect_err("rejected");

    assert_eq!(
        err,
        SubmitError::Rejected {
            status: 400,
            message: Some("Name, email, and message are required".into()),
        }
    );
}

#[tokio::test]
async fn form_client_keeps_fields_when_endpoint_unreachable() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let transport =
        HttpTransport::new(&format!("http://{addr}/api/contact")).expect("http client");

    let mut form = ContactForm::new();
    form.set_field(Field::Name, "Ada");
    form.set_field(Field::Email, "ada@example.com");
    form.set_field(Field::Message, "Hi");

    let result = form.submit(&transport).await;

    assert!(matches!(result, Err(SubmitFailure::Failed(SubmitError::Transport(_)))));
    assert_eq!(form.phase(), Phase::Editing);
    assert_eq!(form.fields().name, "Ada");
    assert_eq!(
        form.notification().map(|n| n.description.as_str()),
        Some("Failed to send your message. Please try again later.")
    );
}

#[tokio::test]
async fn oversized_body_still_gets_json_500() {
    let addr = spawn_app(ServerConfig::default(), Arc::new(RecordingSink::default())).await;
    let body = format!(
        r#"{{"name":"Ada","email":"ada@example.com","message":"{}"}}"#,
        "x".repeat(3 * 1024 * 1024)
    );

    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let head = format!(
        "POST /api/contact HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\
         Content-Type: application/json\r\nContent-Length: {}\r\n\r\n",
        body.len()
    );
    // The server answers once its buffer limit is hit and may close before
    // the tail of the body is written.
    let _ = stream.write_all(head.as_bytes()).await;
    let _ = stream.write_all(body.as_bytes()).await;
    let mut raw = Vec::new();
    let _ = stream.read_to_end(&mut raw).await;

    let response = String::from_utf8_lossy(&raw);
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    assert!(head.starts_with("HTTP/1.1 500"), "head {head}");
    assert!(head.to_ascii_lowercase().contains("content-type: application/json"));
    assert_eq!(body, r#"{"error":"Failed to process your message"}"#);
}
