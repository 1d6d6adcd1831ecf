//! gctune gateway binary.
//!
//! Exposes the GC-tuning control surface:
//! - GET/POST /config for the runtime tuning parameters
//! - GET /debug/<prefix>/ live-metrics page, /debug/<prefix>/ws sample stream

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use gctune_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Strict parsing + validate; a missing file falls back to defaults.
    let cfg = config::load_or_default("gctune.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "gctune-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
