#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use healthdash_core::error::{ClientCode, HealthDashError};

#[test]
fn sampler_failure_is_server_error() {
    let err = HealthDashError::OsMetricsUnavailable("no cpus".into());
    assert_eq!(err.client_code(), ClientCode::OsMetricsUnavailable);
    assert_eq!(err.client_code().as_str(), "OS_METRICS_UNAVAILABLE");
    assert_eq!(err.client_code().http_status(), 500);
}

#[test]
fn unknown_route_is_not_found() {
    let err = HealthDashError::RouteNotFound("/nonexistent".into());
    assert_eq!(err.client_code().http_status(), 404);
    assert_eq!(err.to_string(), "route not found: /nonexistent");
}

#[test]
fn client_code_serializes_as_string() {
    let v = serde_json::to_value(ClientCode::TemplateNotFound).unwrap();
    assert_eq!(v, serde_json::json!("TEMPLATE_NOT_FOUND"));
}
