//! HTTP handlers for the tuning config endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use gctune_core::error::ClientCode;
use gctune_core::tuning::TuningConfig;

use crate::app_state::AppState;

/// GET /config — current effective tuning configuration.
pub async fn read_config(State(app): State<AppState>) -> Json<TuningConfig> {
    Json(app.reader().read())
}

/// POST /config — apply a candidate configuration.
///
/// Malformed JSON is the only error path (400 with a message). Malformed
/// field values inside a well-formed payload are skipped per field by the
/// updater; the response echoes the submitted candidate either way.
pub async fn update_config(
    State(app): State<AppState>,
    payload: Result<Json<TuningConfig>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(candidate)) => {
            let accepted = app.updater().apply(&candidate);
            Json(accepted).into_response()
        }
        Err(rejection) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "code": ClientCode::BadRequest.as_str(),
                "error": rejection.body_text(),
            })),
        )
            .into_response(),
    }
}
