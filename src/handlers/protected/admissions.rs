// handlers/protected/admissions.rs - /api/admissionsdata
//
// List endpoints scoped to a term, academic year or filter answer 404 when
// nothing matches; the unscoped list answers 200 with an empty array.
use axum::extract::{
    rejection::{PathRejection, QueryRejection},
    Path, Query, State,
};

use crate::database::models::AdmissionRecord;
use crate::error::ApiError;
use crate::filter::AdmissionFilter;
use crate::middleware::{ApiResponse, ApiResult, AuthUser, JsonBody};
use crate::services::{AdmissionService, AdmissionSummary, AdmissionView, CreateAdmissionRequest, UpdateAdmissionRequest};
use crate::state::AppState;

fn service(state: &AppState) -> AdmissionService {
    AdmissionService::new(state.pool.clone())
}

fn non_empty(rows: Vec<AdmissionView>, what: impl FnOnce() -> String) -> ApiResult<Vec<AdmissionView>> {
    if rows.is_empty() {
        Err(ApiError::not_found(what()))
    } else {
        Ok(ApiResponse::success(rows))
    }
}

/// GET /api/admissionsdata
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<AdmissionView>> {
    Ok(ApiResponse::success(service(&state).list_all().await?))
}

/// GET /api/admissionsdata/term/:term
pub async fn by_term(State(state): State<AppState>, Path(term): Path<String>) -> ApiResult<Vec<AdmissionView>> {
    let rows = service(&state).list_by_term(&term).await?;
    non_empty(rows, || format!("No admission data found for term {}", term))
}

/// GET /api/admissionsdata/academic-year/:year
pub async fn by_academic_year(State(state): State<AppState>, Path(year): Path<String>) -> ApiResult<Vec<AdmissionView>> {
    let rows = service(&state).list_by_academic_year(&year).await?;
    non_empty(rows, || format!("No admission data found for academic year {}", year))
}

/// GET /api/admissionsdata/filter?term=&department=&program=&academicCareer=&admitType=
pub async fn filter(
    State(state): State<AppState>,
    query: Result<Query<AdmissionFilter>, QueryRejection>,
) -> ApiResult<Vec<AdmissionView>> {
    let Query(filter) = query?;
    let rows = service(&state).filter(&filter).await?;
    non_empty(rows, || "No admission data matches the filter".to_string())
}

/// GET /api/admissionsdata/summary/:term
pub async fn summary(State(state): State<AppState>, Path(term): Path<String>) -> ApiResult<AdmissionSummary> {
    Ok(ApiResponse::success(service(&state).summary(&term).await?))
}

/// POST /api/admissionsdata
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(request): JsonBody<CreateAdmissionRequest>,
) -> ApiResult<AdmissionRecord> {
    let record = service(&state).create(&request).await?;
    tracing::info!(admission_id = record.admission_id, user_id = ?user.user_id, by = %user.email, "Admission record created via API");
    Ok(ApiResponse::success(record))
}

/// PUT /api/admissionsdata/:id - replace the five counters
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    id: Result<Path<i64>, PathRejection>,
    JsonBody(request): JsonBody<UpdateAdmissionRequest>,
) -> ApiResult<AdmissionRecord> {
    let Path(id) = id?;
    let record = service(&state).update(id, &request).await?;
    tracing::info!(admission_id = id, user_id = ?user.user_id, by = %user.email, "Admission counters updated");
    Ok(ApiResponse::success(record))
}

/// DELETE /api/admissionsdata/:id
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<()> {
    let Path(id) = id?;
    if !service(&state).delete(id).await? {
        return Err(ApiError::not_found(format!("Admission data with ID {} not found", id)));
    }
    tracing::info!(admission_id = id, user_id = ?user.user_id, by = %user.email, "Admission record deleted");
    Ok(ApiResponse::<()>::no_content())
}
