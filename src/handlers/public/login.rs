// handlers/public/login.rs - POST /api/auth/login
use std::collections::HashMap;

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::services::{AuthService, LoginUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

impl LoginRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut field_errors = HashMap::new();
        if self.email.trim().is_empty() {
            field_errors.insert("email".to_string(), "Email is required".to_string());
        } else if !is_email_like(&self.email) {
            field_errors.insert("email".to_string(), "Email address is not valid".to_string());
        }
        if self.password.is_empty() {
            field_errors.insert("password".to_string(), "Password is required".to_string());
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation_error("Invalid login request", Some(field_errors)))
        }
    }
}

fn is_email_like(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Check credentials and return a signed token with the caller's profile
pub async fn login(State(state): State<AppState>, JsonBody(request): JsonBody<LoginRequest>) -> ApiResult<LoginResponse> {
    request.validate()?;

    let service = AuthService::new(state.pool.clone());
    let profile = service
        .login(&request.email, &request.password)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    let token = AuthService::issue_token(&state.tokens, &profile)?;
    Ok(ApiResponse::success(LoginResponse {
        token,
        user: LoginUser::from(&profile),
    }))
}
