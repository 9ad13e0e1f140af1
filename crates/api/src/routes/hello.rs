//! Static greeting endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub msg: &'static str,
}

/// GET /hello — always answers `{"msg":"world"}`.
#[tracing::instrument]
pub async fn greet() -> Json<HelloResponse> {
    metrics::counter!("http_requests_total", "route" => "/hello").increment(1);
    Json(HelloResponse { msg: "world" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_greet_body() {
        let Json(body) = greet().await;
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"msg":"world"}"#);
    }
}
