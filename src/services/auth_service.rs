use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{info, warn};

use super::ServiceError;
use crate::auth::{verify_password, TokenIssuer};
use crate::database::models::User;
use crate::database::repository::users;

/// Public view of a user; never carries the password hash
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub full_name: String,
}

/// The subset of the profile returned alongside a fresh token
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    pub full_name: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        let full_name = user.full_name();
        Self {
            user_id: user.user_id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            is_active: user.is_active,
            last_login: user.last_login,
            full_name,
        }
    }
}

impl From<&UserProfile> for LoginUser {
    fn from(profile: &UserProfile) -> Self {
        Self {
            user_id: profile.user_id,
            email: profile.email.clone(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            role: profile.role.clone(),
            full_name: profile.full_name.clone(),
        }
    }
}

pub struct AuthService {
    pool: SqlitePool,
}

impl AuthService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Check credentials against the active user with this exact email.
    ///
    /// On success the login time is persisted before returning. That write is
    /// best-effort: a failure is logged and the login still succeeds.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<UserProfile>, ServiceError> {
        let Some(user) = users::find_active_by_email(&self.pool, email).await? else {
            info!(email, "Login rejected: unknown or inactive user");
            return Ok(None);
        };
        if !verify_password(password, &user.password_hash) {
            info!(email, "Login rejected: password mismatch");
            return Ok(None);
        }

        let mut profile = UserProfile::from(user);
        let now = Utc::now();
        match users::record_login(&self.pool, profile.user_id, now).await {
            Ok(_) => profile.last_login = Some(now),
            Err(e) => warn!(user_id = profile.user_id, error = %e, "Failed to record last login"),
        }

        info!(user_id = profile.user_id, role = %profile.role, "User logged in");
        Ok(Some(profile))
    }

    /// Active user by email, without side effects
    pub async fn profile(&self, email: &str) -> Result<Option<UserProfile>, ServiceError> {
        let user = users::find_active_by_email(&self.pool, email).await?;
        Ok(user.map(UserProfile::from))
    }

    pub fn issue_token(tokens: &TokenIssuer, profile: &UserProfile) -> Result<String, ServiceError> {
        Ok(tokens.issue(profile.user_id, &profile.email, &profile.full_name, &profile.role)?)
    }
}
