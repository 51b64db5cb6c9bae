//! Integration tests for the HTTP API
//!
//! Requests go through the full router (middleware included) with an
//! in-process summarizer standing in for the remote model.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::{build_router, ServerConfig, ServerState};
use summarize::{CircuitState, SummarizeError, Summarizer, Summary};
use tokio::sync::Semaphore;
use tower::ServiceExt;

/// Scripted summarizer that records what it was asked to summarize.
struct FakeSummarizer {
    outcome: Result<String, SummarizeError>,
    circuit: CircuitState,
    seen: Mutex<Vec<String>>,
}

impl FakeSummarizer {
    fn ok(summary: &str) -> Self {
        Self {
            outcome: Ok(summary.to_string()),
            circuit: CircuitState::Closed,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failing(err: SummarizeError) -> Self {
        Self {
            outcome: Err(err),
            circuit: CircuitState::Closed,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn with_circuit(mut self, circuit: CircuitState) -> Self {
        self.circuit = circuit;
        self
    }
}

#[async_trait]
impl Summarizer for FakeSummarizer {
    async fn summarize(&self, text: &str) -> Result<Summary, SummarizeError> {
        self.seen.lock().unwrap().push(text.to_string());
        self.outcome.clone().map(Summary::new)
    }

    fn provider(&self) -> &str {
        "fake"
    }

    fn circuit_state(&self) -> CircuitState {
        self.circuit
    }
}

fn app_with(summarizer: Arc<FakeSummarizer>) -> Router {
    let state = ServerState::with_summarizer(ServerConfig::default(), summarizer);
    build_router(Arc::new(state))
}

/// Summarizer that parks every call until the test hands out a permit.
struct GatedSummarizer {
    started: AtomicUsize,
    release: Semaphore,
}

impl GatedSummarizer {
    fn new() -> Self {
        Self {
            started: AtomicUsize::new(0),
            release: Semaphore::new(0),
        }
    }

    fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for GatedSummarizer {
    async fn summarize(&self, _text: &str) -> Result<Summary, SummarizeError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        self.release
            .acquire()
            .await
            .map_err(|e| SummarizeError::Transport(e.to_string()))?
            .forget();
        Ok(Summary::new("done"))
    }

    fn provider(&self) -> &str {
        "gated"
    }
}

async fn wait_for_started(summarizer: &GatedSummarizer, expected: usize) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while summarizer.started() < expected {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("summarizer call did not start");
}

fn app_with_config(config: ServerConfig, summarizer: Arc<dyn Summarizer>) -> Router {
    build_router(Arc::new(ServerState::with_summarizer(config, summarizer)))
}

fn app() -> Router {
    app_with(Arc::new(FakeSummarizer::ok("short")))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn clean_strips_symbols_and_collapses_spaces() {
    let (status, body) = send(
        app(),
        post_json("/clean", json!({ "text": "Hello,   World!! @2024 #AI" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original"], "Hello,   World!! @2024 #AI");
    assert_eq!(body["cleaned"], "Hello, World!! 2024 AI");
}

#[tokio::test]
async fn clean_keeps_latin1_accents() {
    let (status, body) = send(
        app(),
        post_json("/api/v1/clean", json!({ "text": "Café – naïve résumé" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cleaned"], "Café naïve résumé");
}

#[tokio::test]
async fn clean_empty_and_symbol_only_input() {
    let (_, body) = send(app(), post_json("/clean", json!({ "text": "" }))).await;
    assert_eq!(body["cleaned"], "");

    let (status, body) = send(app(), post_json("/clean", json!({ "text": "@#$%^&*()" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cleaned"], "");
}

#[tokio::test]
async fn clean_accepts_raw_text_alias() {
    let (status, body) = send(
        app(),
        post_json("/clean", json!({ "rawText": "  a   b  " })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cleaned"], "a b");
}

#[tokio::test]
async fn missing_text_field_is_bad_request() {
    let (status, body) = send(app(), post_json("/clean", json!({ "body": "x" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/summarize")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn summarize_forwards_raw_text() {
    let fake = Arc::new(FakeSummarizer::ok("The tower is 324 metres tall."));
    let text = "The tower is 324 metres (1,063 ft) tall!! @@";

    let (status, body) = send(
        app_with(fake.clone()),
        post_json("/summarize", json!({ "text": text })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "summary": "The tower is 324 metres tall." }));
    assert_eq!(fake.seen.lock().unwrap().as_slice(), [text.to_string()]);
}

#[tokio::test]
async fn summarize_under_api_prefix() {
    let (status, body) = send(
        app(),
        post_json("/api/v1/summarize", json!({ "text": "anything" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "short");
}

#[tokio::test]
async fn gateway_failure_is_bad_gateway() {
    let fake = Arc::new(FakeSummarizer::failing(SummarizeError::Upstream {
        status: 500,
        body: "model crashed".into(),
    }));

    let (status, body) = send(
        app_with(fake),
        post_json("/summarize", json!({ "text": "some text" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["code"], "SUMMARIZATION_FAILED");
}

#[tokio::test]
async fn empty_model_output_is_bad_gateway() {
    let fake = Arc::new(FakeSummarizer::failing(SummarizeError::EmptyResponse));

    let (status, _) = send(
        app_with(fake),
        post_json("/summarize", json!({ "text": "some text" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn open_circuit_is_service_unavailable() {
    let fake = Arc::new(
        FakeSummarizer::failing(SummarizeError::CircuitOpen("bart".into()))
            .with_circuit(CircuitState::Open),
    );

    let (status, body) = send(
        app_with(fake.clone()),
        post_json("/summarize", json!({ "text": "some text" })),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "GATEWAY_UNAVAILABLE");

    let (status, body) = send(app_with(fake), get("/ready")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["components"]["summarizer"]["circuit"], "open");
}

#[tokio::test]
async fn health_and_readiness() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(app(), get("/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["components"]["summarizer"]["provider"], "fake");
}

#[tokio::test]
async fn metadata_reports_decoding_params() {
    let (status, body) = send(app(), get("/api/v1/metadata")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summarizer_provider"], "fake");
    assert_eq!(body["decoding"]["max_length"], 80);
    assert_eq!(body["decoding"]["min_length"], 20);
    assert_eq!(body["decoding"]["do_sample"], false);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, body) = send(app(), get("/does-not-exist")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn request_id_is_echoed_or_generated() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-123");

    let response = app().oneshot(get("/health")).await.unwrap();
    let generated = response.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(generated.len(), 36);
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let config = ServerConfig {
        max_body_size_mb: 1,
        ..Default::default()
    };
    let app = app_with_config(config, Arc::new(FakeSummarizer::ok("short")));
    let text = "a".repeat(2 * 1024 * 1024);

    let (status, body) = send(app, post_json("/clean", json!({ "text": text }))).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn missing_content_type_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/clean")
        .body(Body::from(json!({ "text": "hello" }).to_string()))
        .unwrap();

    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn summaries_share_one_concurrency_limit_across_mounts() {
    let config = ServerConfig {
        max_concurrent_summaries: 1,
        ..Default::default()
    };
    let gated = Arc::new(GatedSummarizer::new());
    let app = app_with_config(config, gated.clone());

    let first = tokio::spawn(
        app.clone()
            .oneshot(post_json("/summarize", json!({ "text": "one" }))),
    );
    wait_for_started(&gated, 1).await;

    let second = tokio::spawn(
        app.clone()
            .oneshot(post_json("/api/v1/summarize", json!({ "text": "two" }))),
    );
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(gated.started(), 1, "second call must wait for the first");

    gated.release.add_permits(1);
    let response = first.await.unwrap().unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    wait_for_started(&gated, 2).await;
    gated.release.add_permits(1);
    let response = second.await.unwrap().unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn cleaning_is_not_held_up_by_busy_summaries() {
    let config = ServerConfig {
        max_concurrent_summaries: 1,
        ..Default::default()
    };
    let gated = Arc::new(GatedSummarizer::new());
    let app = app_with_config(config, gated.clone());

    let pending = tokio::spawn(
        app.clone()
            .oneshot(post_json("/summarize", json!({ "text": "one" }))),
    );
    wait_for_started(&gated, 1).await;

    let (status, body) = send(app, post_json("/clean", json!({ "text": "a  b" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cleaned"], "a b");

    gated.release.add_permits(1);
    assert_eq!(pending.await.unwrap().unwrap().status(), StatusCode::OK);
}
