use sqlx::SqlitePool;
use tracing::info;

use super::manager::DatabaseError;

/// Table definitions, parents first. Programs, admissions and goals restrict
/// deletion of the rows they reference.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS departments (
        department_id INTEGER PRIMARY KEY AUTOINCREMENT,
        department_code TEXT NOT NULL UNIQUE CHECK (length(department_code) <= 10),
        department_name TEXT NOT NULL CHECK (length(department_name) <= 100),
        is_active INTEGER NOT NULL DEFAULT 1,
        created_date TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        modified_date TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS academic_programs (
        program_id INTEGER PRIMARY KEY AUTOINCREMENT,
        program_code TEXT NOT NULL UNIQUE CHECK (length(program_code) <= 20),
        program_description TEXT NOT NULL CHECK (length(program_description) <= 200),
        program_type TEXT NOT NULL CHECK (length(program_type) <= 20),
        department_id INTEGER NOT NULL REFERENCES departments (department_id) ON DELETE RESTRICT,
        is_active INTEGER NOT NULL DEFAULT 1,
        created_date TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        modified_date TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_programs_department ON academic_programs (department_id)",
    "CREATE INDEX IF NOT EXISTS idx_programs_type ON academic_programs (program_type)",
    r#"
    CREATE TABLE IF NOT EXISTS academic_terms (
        term_id INTEGER PRIMARY KEY AUTOINCREMENT,
        term_code TEXT NOT NULL UNIQUE CHECK (length(term_code) <= 20),
        term_name TEXT NOT NULL CHECK (length(term_name) <= 50),
        term_year INTEGER NOT NULL,
        term_season TEXT NOT NULL CHECK (length(term_season) <= 10),
        start_date TEXT,
        end_date TEXT,
        created_date TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS admissions_data (
        admission_id INTEGER PRIMARY KEY AUTOINCREMENT,
        term_id INTEGER NOT NULL REFERENCES academic_terms (term_id) ON DELETE RESTRICT,
        program_id INTEGER NOT NULL REFERENCES academic_programs (program_id) ON DELETE RESTRICT,
        academic_career TEXT NOT NULL,
        admit_type TEXT NOT NULL,
        total_applied INTEGER NOT NULL DEFAULT 0 CHECK (total_applied >= 0),
        total_admitted INTEGER NOT NULL DEFAULT 0 CHECK (total_admitted >= 0),
        total_denied INTEGER NOT NULL DEFAULT 0 CHECK (total_denied >= 0),
        total_gross_deposited INTEGER NOT NULL DEFAULT 0 CHECK (total_gross_deposited >= 0),
        total_net_deposited INTEGER NOT NULL DEFAULT 0 CHECK (total_net_deposited >= 0),
        created_date TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        modified_date TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        CONSTRAINT uc_admissions_data UNIQUE (term_id, program_id, admit_type)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_admissions_term ON admissions_data (term_id)",
    "CREATE INDEX IF NOT EXISTS idx_admissions_program ON admissions_data (program_id)",
    r#"
    CREATE TABLE IF NOT EXISTS enrollment_goals (
        goal_id INTEGER PRIMARY KEY AUTOINCREMENT,
        program_id INTEGER NOT NULL REFERENCES academic_programs (program_id) ON DELETE RESTRICT,
        term_id INTEGER NOT NULL REFERENCES academic_terms (term_id) ON DELETE RESTRICT,
        goal_year INTEGER NOT NULL,
        target_enrollment INTEGER,
        actual_enrollment INTEGER,
        notes TEXT CHECK (notes IS NULL OR length(notes) <= 500),
        created_date TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        modified_date TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        user_id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL UNIQUE CHECK (length(email) <= 100),
        password_hash TEXT NOT NULL,
        first_name TEXT CHECK (first_name IS NULL OR length(first_name) <= 50),
        last_name TEXT CHECK (last_name IS NULL OR length(last_name) <= 50),
        role TEXT NOT NULL,
        is_active INTEGER NOT NULL DEFAULT 1,
        last_login TEXT,
        created_date TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        modified_date TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
];

/// Create all tables and indexes. Safe to run on every start.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), DatabaseError> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!(statements = SCHEMA.len(), "Database schema initialized");
    Ok(())
}

/// Row counts per table, used for the start-up log and diagnostics
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCounts {
    pub users: i64,
    pub departments: i64,
    pub programs: i64,
    pub terms: i64,
    pub admission_records: i64,
    pub enrollment_goals: i64,
}

pub async fn table_counts(pool: &SqlitePool) -> Result<TableCounts, DatabaseError> {
    let row: (i64, i64, i64, i64, i64, i64) = sqlx::query_as(
        r#"
        SELECT
            (SELECT COUNT(*) FROM users),
            (SELECT COUNT(*) FROM departments),
            (SELECT COUNT(*) FROM academic_programs),
            (SELECT COUNT(*) FROM academic_terms),
            (SELECT COUNT(*) FROM admissions_data),
            (SELECT COUNT(*) FROM enrollment_goals)
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(TableCounts {
        users: row.0,
        departments: row.1,
        programs: row.2,
        terms: row.3,
        admission_records: row.4,
        enrollment_goals: row.5,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::database::DatabaseManager;

    async fn empty_pool() -> SqlitePool {
        let pool = DatabaseManager::connect(&AppConfig::development().database)
            .await
            .unwrap();
        create_schema(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn schema_creation_is_idempotent() {
        let pool = empty_pool().await;
        create_schema(&pool).await.unwrap();
        let counts = table_counts(&pool).await.unwrap();
        assert_eq!(counts.departments, 0);
        assert_eq!(counts.admission_records, 0);
    }

    #[tokio::test]
    async fn department_with_programs_cannot_be_deleted() {
        let pool = empty_pool().await;
        sqlx::query("INSERT INTO departments (department_code, department_name) VALUES ('KIN', 'Kinesiology')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query(
            "INSERT INTO academic_programs (program_code, program_description, program_type, department_id)
             VALUES ('EXPS_BSEXP', 'Exercise Physiology', 'Bachelor''s', 1)",
        )
        .execute(&pool)
        .await
        .unwrap();

        let err: DatabaseError = sqlx::query("DELETE FROM departments WHERE department_id = 1")
            .execute(&pool)
            .await
            .unwrap_err()
            .into();
        assert!(matches!(err, DatabaseError::ForeignKeyViolation(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn duplicate_department_code_is_a_unique_violation() {
        let pool = empty_pool().await;
        let insert = "INSERT INTO departments (department_code, department_name) VALUES ('EPS', 'Educational & Psychological Studies')";
        sqlx::query(insert).execute(&pool).await.unwrap();
        let err: DatabaseError = sqlx::query(insert).execute(&pool).await.unwrap_err().into();
        assert!(matches!(err, DatabaseError::UniqueViolation(_)), "got {err:?}");
    }
}
