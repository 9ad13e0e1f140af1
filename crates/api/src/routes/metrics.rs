//! Prometheus metrics endpoint, mounted only when metrics are enabled.

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::error::ServerError;

const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Installs the global Prometheus recorder and returns a handle for rendering.
///
/// Fails if another recorder is already installed in this process.
pub fn install_recorder() -> Result<PrometheusHandle, ServerError> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics(e.to_string()))
}

/// Router serving `GET /metrics` from `handle`.
pub fn router(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(render)).with_state(handle)
}

/// GET /metrics — returns Prometheus-formatted metrics.
async fn render(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, CONTENT_TYPE)],
        handle.render(),
    )
}
