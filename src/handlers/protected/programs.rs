use axum::extract::{Path, State};

use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{CatalogService, ProgramView};
use crate::state::AppState;

/// GET /api/programs
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<ProgramView>> {
    let programs = CatalogService::new(state.pool.clone()).programs().await?;
    Ok(ApiResponse::success(programs))
}

/// GET /api/programs/department/:code
pub async fn by_department(State(state): State<AppState>, Path(code): Path<String>) -> ApiResult<Vec<ProgramView>> {
    let programs = CatalogService::new(state.pool.clone())
        .programs_by_department(&code)
        .await?;
    Ok(ApiResponse::success(programs))
}

/// GET /api/programs/type/:program_type
pub async fn by_type(State(state): State<AppState>, Path(program_type): Path<String>) -> ApiResult<Vec<ProgramView>> {
    let programs = CatalogService::new(state.pool.clone())
        .programs_by_type(&program_type)
        .await?;
    Ok(ApiResponse::success(programs))
}
