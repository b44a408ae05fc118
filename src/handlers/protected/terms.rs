use axum::extract::{rejection::PathRejection, Path, State};

use crate::database::models::AcademicTerm;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::CatalogService;
use crate::state::AppState;

/// GET /api/terms - newest first
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<AcademicTerm>> {
    let terms = CatalogService::new(state.pool.clone()).terms().await?;
    Ok(ApiResponse::success(terms))
}

/// GET /api/terms/:code
pub async fn get(State(state): State<AppState>, Path(code): Path<String>) -> ApiResult<AcademicTerm> {
    let term = CatalogService::new(state.pool.clone()).term(&code).await?;
    Ok(ApiResponse::success(term))
}

/// GET /api/terms/year/:year
pub async fn by_year(
    State(state): State<AppState>,
    year: Result<Path<i64>, PathRejection>,
) -> ApiResult<Vec<AcademicTerm>> {
    let Path(year) = year?;
    let terms = CatalogService::new(state.pool.clone()).terms_by_year(year).await?;
    Ok(ApiResponse::success(terms))
}
