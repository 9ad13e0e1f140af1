//! Health check endpoint.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Liveness payload. `ok` is always `true`; `ts` is epoch milliseconds at request time.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub ts: i64,
}

impl HealthResponse {
    fn now() -> Self {
        Self {
            ok: true,
            ts: Utc::now().timestamp_millis(),
        }
    }
}

/// GET /health — reports that the process is up.
#[tracing::instrument]
pub async fn check() -> Json<HealthResponse> {
    metrics::counter!("http_requests_total", "route" => "/health").increment(1);
    Json(HealthResponse::now())
}
