use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use instafetch_error::{InstafetchResult, UpstreamHttpError, UpstreamTransportError};
use instafetch_provider::MediaFetcher;
use instafetch_server::{create_router, ApiState, Resolver};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// What the stub provider hands back on each fetch.
enum StubOutcome {
    Payload(Value),
    Http(u16),
    Transport,
}

/// Counting stand-in for the upstream provider.
struct StubFetcher {
    outcome: StubOutcome,
    calls: AtomicUsize,
}

impl StubFetcher {
    fn new(outcome: StubOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl MediaFetcher for StubFetcher {
    async fn fetch(&self, _target_url: &str) -> InstafetchResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            StubOutcome::Payload(value) => Ok(value.clone()),
            StubOutcome::Http(status) => Err(UpstreamHttpError::new(*status, "provider said no").into()),
            StubOutcome::Transport => Err(UpstreamTransportError::new("connection reset").into()),
        }
    }
}

fn test_router(outcome: StubOutcome) -> (Router, Arc<StubFetcher>) {
    let fetcher = Arc::new(StubFetcher::new(outcome));
    let seam: Arc<dyn MediaFetcher> = fetcher.clone();
    let router = create_router(ApiState::new(Arc::new(Resolver::new(seam))));
    (router, fetcher)
}

async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

const REEL_QUERY: &str =
    "/api/download?url=https%3A%2F%2Fwww.instagram.com%2Freel%2FCabc123XYZ%2F";

#[tokio::test]
async fn resolves_structured_media_payload() {
    let (router, fetcher) = test_router(StubOutcome::Payload(json!({
        "media": [{ "url": "https://cdn.example/a.mp4" }]
    })));

    let req = Request::builder().uri(REEL_QUERY).body(Body::empty()).unwrap();
    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["type"], "video");
    assert_eq!(json["downloadUrl"], "https://cdn.example/a.mp4");
    assert_eq!(
        json["thumbnail"],
        "https://placehold.co/600x400?text=Media+Found"
    );
    assert_eq!(json["author"], "Instagram User");
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn invalid_url_is_rejected_without_any_outbound_call() {
    let (router, fetcher) = test_router(StubOutcome::Payload(json!({})));

    let req = Request::builder()
        .uri("/api/download?url=not-a-url")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid Instagram URL");
    assert_eq!(json["kind"], "invalid_input");
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn missing_url_parameter_is_invalid_input() {
    let (router, fetcher) = test_router(StubOutcome::Payload(json!({})));

    let req = Request::builder()
        .uri("/api/download")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn provider_rate_limit_maps_to_bad_gateway_without_retry() {
    let (router, fetcher) = test_router(StubOutcome::Http(429));

    let req = Request::builder().uri(REEL_QUERY).body(Body::empty()).unwrap();
    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["kind"], "upstream_http");
    assert!(json["details"].as_str().unwrap().contains("429"));
    assert!(json["tip"].as_str().is_some());
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn transport_failure_maps_to_service_unavailable() {
    let (router, fetcher) = test_router(StubOutcome::Transport);

    let req = Request::builder().uri(REEL_QUERY).body(Body::empty()).unwrap();
    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["kind"], "upstream_transport");
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn uninterpretable_payload_maps_to_not_found() {
    let (router, fetcher) = test_router(StubOutcome::Payload(json!({ "media": [] })));

    let req = Request::builder().uri(REEL_QUERY).body(Body::empty()).unwrap();
    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["kind"], "media_not_found");
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn health_and_root_respond() {
    let (router, _) = test_router(StubOutcome::Payload(json!({})));

    let response = router
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
