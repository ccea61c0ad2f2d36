//! HTML dashboard (`GET /`).

pub mod template;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use minijinja::context;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::obs::Endpoint;

pub use template::Template;

/// Placeholders the dashboard template is expected to carry.
pub const PLACEHOLDERS: [&str; 3] = ["cpu", "memory", "uptime"];

/// Render the dashboard body from already-sampled values.
///
/// CPU is shown with one decimal and memory with exactly two.
pub fn render(
    template: &Template,
    cpu: f64,
    memory_mb: f64,
    uptime: &str,
) -> healthdash_core::Result<String> {
    template.render(context! {
        cpu => format!("{cpu:.1}"),
        memory => format!("{memory_mb:.2}"),
        uptime => uptime,
    })
}

pub async fn index(State(state): State<AppState>) -> Result<Response, ApiError> {
    state.counters().increment(Endpoint::Dashboard);

    let sample = state.sampler().sample().await?;
    let uptime = state.uptime().elapsed();
    tracing::debug!(
        cpu = sample.cpu_percent,
        memory_mb = sample.memory_used_mb,
        %uptime,
        "dashboard sampled"
    );

    let body = render(state.template(), sample.cpu_percent, sample.memory_used_mb, &uptime)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        body,
    )
        .into_response())
}
