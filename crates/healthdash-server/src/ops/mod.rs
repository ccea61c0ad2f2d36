//! Operational HTTP endpoints.
//!
//! - `/health`  : liveness
//! - `/metrics` : Prometheus text format
//! - fallback   : 404 for any other path

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use healthdash_core::error::HealthDashError;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::obs::Endpoint;

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    state.counters().increment(Endpoint::Health);
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let uptime = state.uptime().elapsed_secs();
    let body = state
        .counters()
        .render(&[("healthdash_uptime_seconds", uptime)]);

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError(HealthDashError::RouteNotFound(uri.path().to_string()))
}
