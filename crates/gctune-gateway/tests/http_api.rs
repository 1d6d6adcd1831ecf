//! Config API and metrics-page dispatch through the full router.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use gctune_core::tuning::{SettingsMirror, TuningConfig, GC_PERCENT_KEY, MEMORY_LIMIT_KEY};
use gctune_gateway::{app_state::AppState, config::GatewayConfig, router};

#[derive(Default)]
struct MapMirror {
    entries: Mutex<HashMap<String, String>>,
}

impl SettingsMirror for MapMirror {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

fn test_router() -> Router {
    test_router_seeded("", "")
}

fn test_router_seeded(limit: &str, percent: &str) -> Router {
    let mirror = MapMirror::default();
    if !limit.is_empty() {
        mirror.set(MEMORY_LIMIT_KEY, limit);
    }
    if !percent.is_empty() {
        mirror.set(GC_PERCENT_KEY, percent);
    }
    let state = AppState::with_mirror(GatewayConfig::default(), Arc::new(mirror));
    router::build_router(state)
}

async fn body_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, 64 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn get_config_returns_mirror_state() {
    let app = test_router_seeded("30MiB", "100");

    let res = app.oneshot(get("/config")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let cfg: TuningConfig = serde_json::from_str(&body_string(res.into_body()).await).unwrap();
    assert_eq!(cfg.memory_limit, "30MiB");
    assert_eq!(cfg.gc_percent, "100");
}

#[tokio::test]
async fn get_config_on_unset_mirror_returns_empty_strings() {
    let app = test_router();

    let res = app.oneshot(get("/config")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_string(res.into_body()).await;
    assert_eq!(body, r#"{"gomemlimit":"","gogc":""}"#);
}

#[tokio::test]
async fn post_config_echoes_candidate_and_applies() {
    let app = test_router_seeded("100MiB", "off");

    let res = app
        .clone()
        .oneshot(post_json("/config", r#"{"gomemlimit":"30MiB","gogc":"100"}"#))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let echoed: TuningConfig = serde_json::from_str(&body_string(res.into_body()).await).unwrap();
    assert_eq!(echoed.memory_limit, "30MiB");
    assert_eq!(echoed.gc_percent, "100");

    // A fresh read observes the applied state.
    let res = app.oneshot(get("/config")).await.unwrap();
    let cfg: TuningConfig = serde_json::from_str(&body_string(res.into_body()).await).unwrap();
    assert_eq!(cfg.memory_limit, "30MiB");
    assert_eq!(cfg.gc_percent, "100");
}

#[tokio::test]
async fn post_config_partial_apply() {
    let app = test_router_seeded("100MiB", "off");

    let res = app
        .clone()
        .oneshot(post_json("/config", r#"{"gomemlimit":"bad","gogc":"100"}"#))
        .await
        .unwrap();
    // The echo is the raw candidate, even for the skipped field.
    assert_eq!(res.status(), StatusCode::OK);
    let echoed: TuningConfig = serde_json::from_str(&body_string(res.into_body()).await).unwrap();
    assert_eq!(echoed.memory_limit, "bad");

    let res = app.oneshot(get("/config")).await.unwrap();
    let cfg: TuningConfig = serde_json::from_str(&body_string(res.into_body()).await).unwrap();
    assert_eq!(cfg.memory_limit, "100MiB");
    assert_eq!(cfg.gc_percent, "100");
}

#[tokio::test]
async fn post_config_malformed_json_is_400_with_error() {
    let app = test_router();

    let res = app
        .oneshot(post_json("/config", r#"{"gomemlimit": 30"#))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value =
        serde_json::from_str(&body_string(res.into_body()).await).unwrap();
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn post_config_tolerates_unknown_fields() {
    let app = test_router();

    let res = app
        .clone()
        .oneshot(post_json("/config", r#"{"gomemlimit":"1MiB","bogus":"x"}"#))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // The known field is applied as usual.
    let res = app.oneshot(get("/config")).await.unwrap();
    let cfg: TuningConfig = serde_json::from_str(&body_string(res.into_body()).await).unwrap();
    assert_eq!(cfg.memory_limit, "1MiB");
}

#[tokio::test]
async fn metrics_page_served_under_debug_prefix() {
    let app = test_router();

    let res = app.oneshot(get("/debug/statsviz/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_string(res.into_body()).await.contains("gctune statsviz"));
}

#[tokio::test]
async fn metrics_page_served_for_any_non_ws_suffix() {
    let app = test_router();

    let res = app.oneshot(get("/debug/statsviz/whatever")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_string(res.into_body()).await.contains("gctune statsviz"));
}

#[tokio::test]
async fn ws_route_requires_upgrade() {
    let app = test_router();

    // A plain GET (no upgrade headers) must land on the stream endpoint,
    // not the page fallback.
    let res = app.oneshot(get("/debug/statsviz/ws")).await.unwrap();
    assert_ne!(res.status(), StatusCode::OK);
}
