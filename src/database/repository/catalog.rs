use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::database::manager::DatabaseError;
use crate::database::models::{AcademicProgram, AcademicTerm, Department, EnrollmentGoal};

/// Program row joined with its owning department
#[derive(Debug, Clone, FromRow)]
pub struct ProgramListing {
    pub program_id: i64,
    pub program_code: String,
    pub program_description: String,
    pub program_type: String,
    pub is_active: bool,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
    pub department_id: i64,
    pub department_code: String,
    pub department_name: String,
}

const PROGRAM_LISTING: &str = r#"
    SELECT p.program_id, p.program_code, p.program_description, p.program_type,
           p.is_active, p.created_date, p.modified_date,
           d.department_id, d.department_code, d.department_name
    FROM academic_programs p
    JOIN departments d ON d.department_id = p.department_id
"#;

const TERM_COLUMNS: &str = "term_id, term_code, term_name, term_year, term_season, start_date, end_date, created_date";

// Newest first; seasons within a year run Fall, Summer, Spring.
const TERM_ORDER: &str = "ORDER BY term_year DESC, \
    CASE term_season WHEN 'Fall' THEN 3 WHEN 'Summer' THEN 2 WHEN 'Spring' THEN 1 ELSE 0 END DESC";

pub async fn active_departments(pool: &SqlitePool) -> Result<Vec<Department>, DatabaseError> {
    let rows = sqlx::query_as::<_, Department>(
        "SELECT department_id, department_code, department_name, is_active, created_date, modified_date
         FROM departments WHERE is_active = 1 ORDER BY department_name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_department(pool: &SqlitePool, department_id: i64) -> Result<Option<Department>, DatabaseError> {
    let row = sqlx::query_as::<_, Department>(
        "SELECT department_id, department_code, department_name, is_active, created_date, modified_date
         FROM departments WHERE department_id = ?",
    )
    .bind(department_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Every program owned by a department, active or not
pub async fn department_programs(pool: &SqlitePool, department_id: i64) -> Result<Vec<AcademicProgram>, DatabaseError> {
    let rows = sqlx::query_as::<_, AcademicProgram>(
        "SELECT program_id, program_code, program_description, program_type, department_id,
                is_active, created_date, modified_date
         FROM academic_programs WHERE department_id = ? ORDER BY program_description",
    )
    .bind(department_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn active_programs(pool: &SqlitePool) -> Result<Vec<ProgramListing>, DatabaseError> {
    let sql = format!(
        "{} WHERE p.is_active = 1 ORDER BY d.department_name, p.program_description",
        PROGRAM_LISTING
    );
    let rows = sqlx::query_as::<_, ProgramListing>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn programs_by_department_code(
    pool: &SqlitePool,
    department_code: &str,
) -> Result<Vec<ProgramListing>, DatabaseError> {
    let sql = format!(
        "{} WHERE p.is_active = 1 AND d.department_code = ? ORDER BY p.program_description",
        PROGRAM_LISTING
    );
    let rows = sqlx::query_as::<_, ProgramListing>(&sql)
        .bind(department_code)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn programs_by_type(pool: &SqlitePool, program_type: &str) -> Result<Vec<ProgramListing>, DatabaseError> {
    let sql = format!(
        "{} WHERE p.is_active = 1 AND p.program_type = ? ORDER BY d.department_name, p.program_description",
        PROGRAM_LISTING
    );
    let rows = sqlx::query_as::<_, ProgramListing>(&sql)
        .bind(program_type)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn all_terms(pool: &SqlitePool) -> Result<Vec<AcademicTerm>, DatabaseError> {
    let sql = format!("SELECT {} FROM academic_terms {}", TERM_COLUMNS, TERM_ORDER);
    let rows = sqlx::query_as::<_, AcademicTerm>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_term(pool: &SqlitePool, term_code: &str) -> Result<Option<AcademicTerm>, DatabaseError> {
    let sql = format!("SELECT {} FROM academic_terms WHERE term_code = ?", TERM_COLUMNS);
    let row = sqlx::query_as::<_, AcademicTerm>(&sql)
        .bind(term_code)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn terms_by_year(pool: &SqlitePool, year: i64) -> Result<Vec<AcademicTerm>, DatabaseError> {
    let sql = format!("SELECT {} FROM academic_terms WHERE term_year = ? {}", TERM_COLUMNS, TERM_ORDER);
    let rows = sqlx::query_as::<_, AcademicTerm>(&sql)
        .bind(year)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn goals_by_term(pool: &SqlitePool, term_code: &str) -> Result<Vec<EnrollmentGoal>, DatabaseError> {
    let rows = sqlx::query_as::<_, EnrollmentGoal>(
        "SELECT g.goal_id, g.program_id, g.term_id, g.goal_year, g.target_enrollment,
                g.actual_enrollment, g.notes, g.created_date, g.modified_date
         FROM enrollment_goals g
         JOIN academic_terms t ON t.term_id = g.term_id
         WHERE t.term_code = ?
         ORDER BY g.goal_id",
    )
    .bind(term_code)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
