use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// User row. Deliberately not `Serialize`: the password hash never leaves the
/// service layer, responses go through `services::UserProfile`.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: i64,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }
}
