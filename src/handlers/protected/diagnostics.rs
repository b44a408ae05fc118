use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::database::{table_counts, DatabaseManager};
use crate::state::AppState;

/// GET /api/health/diagnostics - development only, admin only.
///
/// Unlike every other endpoint this one reports raw store errors.
pub async fn diagnostics(State(state): State<AppState>) -> Json<Value> {
    let database = match DatabaseManager::health_check(&state.pool).await {
        Ok(()) => json!({ "status": "ok" }),
        Err(e) => json!({ "status": "error", "error": e.to_string() }),
    };
    let counts = match table_counts(&state.pool).await {
        Ok(counts) => json!(counts),
        Err(e) => json!({ "error": e.to_string() }),
    };

    Json(json!({
        "environment": state.config.environment.as_str(),
        "databaseUrl": state.config.database.url,
        "database": database,
        "counts": counts
    }))
}
