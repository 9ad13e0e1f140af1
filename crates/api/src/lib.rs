//! Minimal HTTP service exposing a liveness check and a static greeting.
//!
//! Routes:
//! - `GET /health` — `{"ok": true, "ts": <epoch millis>}`
//! - `GET /hello` — `{"msg": "world"}`
//! - `GET /metrics` — Prometheus text, only when metrics are enabled
//!
//! Everything else falls through to axum's default 404/405 handling.

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use error::{Result, ServerError};

/// Creates the Axum application router.
///
/// `GET /metrics` is mounted only when a Prometheus handle is supplied.
pub fn create_app(metrics_handle: Option<PrometheusHandle>) -> Router {
    let mut app = Router::new()
        .route("/health", get(routes::health::check))
        .route("/hello", get(routes::hello::greet));

    if let Some(handle) = metrics_handle {
        app = app.merge(routes::metrics::router(handle));
    }

    app.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
    .layer(TraceLayer::new_for_http())
}

/// Binds `config.addr()` and serves until `shutdown` resolves.
pub async fn run<F>(config: &Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = if config.metrics_enabled {
        Some(routes::metrics::install_recorder()?)
    } else {
        None
    };

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!(%addr, metrics = config.metrics_enabled, "starting API server");

    serve(listener, create_app(metrics_handle), shutdown).await
}

/// Serves `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("server shut down gracefully");
    Ok(())
}
