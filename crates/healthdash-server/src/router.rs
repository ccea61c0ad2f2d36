//! Axum router wiring.
//!
//! `/health`, `/` and `/metrics`; everything else falls through to a 404.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{app_state::AppState, dashboard, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(ops::health))
        .route("/", get(dashboard::index))
        .route("/metrics", get(ops::metrics))
        .fallback(ops::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
