use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub message: String,
}

/// Liveness check. Never touches the word store.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "API is working".to_string(),
    })
}
