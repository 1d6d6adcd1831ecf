//! Metrics sample stream (WebSocket).
//!
//! One JSON sample per tick: current tuning registers plus a jittered
//! synthetic heap-usage figure (decorative workload, not part of the tuning
//! contract). Inbound frames are drained; the loop ends on close.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures_util::{SinkExt, StreamExt};
use rand::Rng;
use serde_json::json;
use tokio::time::Duration;

use crate::app_state::AppState;
use crate::runtime::{ProcessTuner, TRIGGER_DISABLED, TRIGGER_UNSET};

// Synthetic heap baseline when no ceiling has been set yet.
const BASELINE_HEAP_BYTES: u64 = 64 << 20;

pub async fn ws_upgrade(State(app): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_stream(app, socket))
}

async fn run_stream(app: AppState, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    let interval = Duration::from_millis(app.cfg().gateway.sample_interval_ms);
    let mut ticker = tokio::time::interval(interval);
    let mut seq: u64 = 0;

    tracing::debug!(?interval, "metrics stream opened");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                seq += 1;
                let sample = sample_json(app.tuner(), seq);
                if ws_tx.send(Message::Text(sample)).await.is_err() {
                    break;
                }
            }
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => {} // drain pings and stray frames
                }
            }
        }
    }

    tracing::debug!(samples = seq, "metrics stream closed");
}

fn sample_json(tuner: &ProcessTuner, seq: u64) -> String {
    let ceiling = tuner.memory_ceiling();
    let trigger = match tuner.collector_trigger() {
        TRIGGER_DISABLED => "off".to_string(),
        TRIGGER_UNSET => String::new(),
        pct => pct.to_string(),
    };

    // Decorative: fake heap usage hovering below the ceiling (or a fixed
    // baseline when none is set).
    let budget = if ceiling > 0 { ceiling } else { BASELINE_HEAP_BYTES };
    let jitter: f64 = rand::thread_rng().gen_range(0.55..0.95);
    let heap_used = (budget as f64 * jitter) as u64;

    json!({
        "seq": seq,
        "memory_ceiling_bytes": ceiling,
        "collector_trigger": trigger,
        "heap_used_bytes": heap_used,
    })
    .to_string()
}
