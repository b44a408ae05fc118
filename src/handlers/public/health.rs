use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

use crate::database::DatabaseManager;
use crate::state::AppState;

pub const API_NAME: &str = "SEHD Admissions API";

const ENDPOINTS: &[&str] = &[
    "/api/health",
    "/api/health/info",
    "/api/auth/login",
    "/api/auth/profile",
    "/api/departments",
    "/api/programs",
    "/api/terms",
    "/api/enrollmentgoals",
    "/api/admissionsdata",
];

/// GET /api/health - liveness plus a store ping
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = Utc::now();

    match DatabaseManager::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "timestamp": now,
                "message": "SEHD API is running successfully!"
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "message": "Database unavailable"
                })),
            )
        }
    }
}

/// GET /api/health/info
pub async fn info(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "apiName": API_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment.as_str(),
        "timestamp": Utc::now(),
        "endpoints": ENDPOINTS
    }))
}
