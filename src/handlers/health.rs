// src/handlers/health.rs
use axum::Json;

use crate::dtos::health::HealthResponse;

// GET / and GET /health - never touches the store
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
