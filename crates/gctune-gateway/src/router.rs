//! Axum router wiring (config API + mounted metrics page).
//!
//! The metrics collaborator is reached under `/debug/<prefix>`: the exact
//! suffix `/ws` goes to its sample stream, everything else to the page.

use axum::{routing::get, Router};

use crate::{api, app_state::AppState, viz};

pub fn build_router(state: AppState) -> Router {
    let viz_routes = Router::new()
        .route("/ws", get(viz::ws_upgrade))
        .fallback(viz::page);

    Router::new()
        .route("/config", get(api::read_config).post(api::update_config))
        .nest(
            &format!("/debug/{}", state.cfg().gateway.metrics_prefix),
            viz_routes,
        )
        .with_state(state)
}
