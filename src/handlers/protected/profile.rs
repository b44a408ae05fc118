use axum::extract::State;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::{AuthService, UserProfile};
use crate::state::AppState;

/// GET /api/auth/profile - profile of the token's email claim
pub async fn profile(State(state): State<AppState>, user: AuthUser) -> ApiResult<UserProfile> {
    if user.email.is_empty() {
        return Err(ApiError::unauthorized("Token carries no email claim"));
    }

    let profile = AuthService::new(state.pool.clone())
        .profile(&user.email)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(ApiResponse::success(profile))
}
