//! Health API Handlers

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health - 健康检查
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
