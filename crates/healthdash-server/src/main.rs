//! healthdash server
//!
//! - `GET /health`  : liveness probe
//! - `GET /`        : HTML dashboard (CPU, memory, uptime)
//! - `GET /metrics` : request counters in Prometheus text format

use tracing_subscriber::{fmt, EnvFilter};

use healthdash_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "healthdash-server failed");
        std::process::exit(1);
    }
}

async fn run() -> healthdash_core::Result<()> {
    let cfg = config::load_from_env()?;
    let listen = cfg.server.listen_addr()?;

    // Template problems are fatal here, before the listener is bound.
    let state = app_state::AppState::new(&cfg)?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen).await.map_err(|e| {
        healthdash_core::HealthDashError::Internal(format!("bind {listen} failed: {e}"))
    })?;
    tracing::info!(%listen, "healthdash-server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| healthdash_core::HealthDashError::Internal(format!("server failed: {e}")))?;

    tracing::info!("healthdash-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
