use axum::extract::{Path, State};

use crate::database::models::EnrollmentGoal;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::CatalogService;
use crate::state::AppState;

/// GET /api/enrollmentgoals/term/:code
pub async fn by_term(State(state): State<AppState>, Path(code): Path<String>) -> ApiResult<Vec<EnrollmentGoal>> {
    let goals = CatalogService::new(state.pool.clone()).enrollment_goals(&code).await?;
    Ok(ApiResponse::success(goals))
}
