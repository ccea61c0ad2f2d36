//! Shared error type across healthdash crates.

use serde::Serialize;
use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub enum ClientCode {
    /// Host CPU/memory statistics could not be read.
    OsMetricsUnavailable,
    /// Dashboard template missing at startup.
    TemplateNotFound,
    /// No route matches the request path.
    RouteNotFound,
    /// Invalid configuration.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::OsMetricsUnavailable => "OS_METRICS_UNAVAILABLE",
            ClientCode::TemplateNotFound => "TEMPLATE_NOT_FOUND",
            ClientCode::RouteNotFound => "ROUTE_NOT_FOUND",
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// HTTP status code this error surfaces as.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::RouteNotFound => 404,
            ClientCode::OsMetricsUnavailable
            | ClientCode::TemplateNotFound
            | ClientCode::BadConfig
            | ClientCode::UnsupportedVersion
            | ClientCode::Internal => 500,
        }
    }
}

impl From<ClientCode> for &'static str {
    fn from(code: ClientCode) -> Self {
        code.as_str()
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, HealthDashError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum HealthDashError {
    #[error("os metrics unavailable: {0}")]
    OsMetricsUnavailable(String),
    #[error("template not found: {0}")]
    TemplateNotFound(String),
    #[error("route not found: {0}")]
    RouteNotFound(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl HealthDashError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            HealthDashError::OsMetricsUnavailable(_) => ClientCode::OsMetricsUnavailable,
            HealthDashError::TemplateNotFound(_) => ClientCode::TemplateNotFound,
            HealthDashError::RouteNotFound(_) => ClientCode::RouteNotFound,
            HealthDashError::BadConfig(_) => ClientCode::BadConfig,
            HealthDashError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            HealthDashError::Internal(_) => ClientCode::Internal,
        }
    }
}
