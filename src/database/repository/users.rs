use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::User;

const USER_COLUMNS: &str = "user_id, email, password_hash, first_name, last_name, role, is_active, \
                            last_login, created_date, modified_date";

/// Active user with exactly this email
pub async fn find_active_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, DatabaseError> {
    let sql = format!("SELECT {} FROM users WHERE email = ? AND is_active = 1", USER_COLUMNS);
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Stamp `last_login` and `modified_date`. Returns whether a row was touched.
pub async fn record_login(pool: &SqlitePool, user_id: i64, at: DateTime<Utc>) -> Result<bool, DatabaseError> {
    let result = sqlx::query("UPDATE users SET last_login = ?, modified_date = ? WHERE user_id = ?")
        .bind(at)
        .bind(at)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seeded_pool;

    #[tokio::test]
    async fn finds_seeded_user_by_exact_email() {
        let pool = seeded_pool().await;
        let user = find_active_by_email(&pool, "admin@miami.edu").await.unwrap().unwrap();
        assert_eq!(user.role, "admin");
        assert!(user.last_login.is_none());

        assert!(find_active_by_email(&pool, "ADMIN@miami.edu").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn inactive_users_are_invisible() {
        let pool = seeded_pool().await;
        sqlx::query("UPDATE users SET is_active = 0 WHERE email = 'staff@miami.edu'")
            .execute(&pool)
            .await
            .unwrap();
        assert!(find_active_by_email(&pool, "staff@miami.edu").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn record_login_persists_timestamp() {
        let pool = seeded_pool().await;
        let user = find_active_by_email(&pool, "viewer@miami.edu").await.unwrap().unwrap();
        let now = Utc::now();

        assert!(record_login(&pool, user.user_id, now).await.unwrap());
        let reloaded = find_active_by_email(&pool, "viewer@miami.edu").await.unwrap().unwrap();
        assert_eq!(reloaded.last_login.map(|t| t.timestamp()), Some(now.timestamp()));

        assert!(!record_login(&pool, 9999, now).await.unwrap());
    }
}
