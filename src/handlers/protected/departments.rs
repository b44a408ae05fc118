use axum::extract::{rejection::PathRejection, Path, State};

use crate::database::models::Department;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{CatalogService, DepartmentDetail};
use crate::state::AppState;

/// GET /api/departments - active departments by name
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Department>> {
    let departments = CatalogService::new(state.pool.clone()).departments().await?;
    Ok(ApiResponse::success(departments))
}

/// GET /api/departments/:id - one department with all of its programs
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<DepartmentDetail> {
    let Path(id) = id?;
    let department = CatalogService::new(state.pool.clone()).department(id).await?;
    Ok(ApiResponse::success(department))
}
