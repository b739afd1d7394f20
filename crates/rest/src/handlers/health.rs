//! Health check handler.

use axum::Json;
use serde_json::{Value, json};

/// Liveness endpoint.
///
/// # HTTP Request
///
/// `GET /health`
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_is_up() {
        let Json(body) = health_handler().await;
        assert_eq!(body["status"], "UP");
    }
}
