use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::database::manager::DatabaseError;
use crate::database::models::AdmissionRecord;
use crate::filter::{AdmissionFilter, FilterParam};

/// Admission record joined with its term, program and department
#[derive(Debug, Clone, FromRow)]
pub struct AdmissionRow {
    pub admission_id: i64,
    pub academic_career: String,
    pub admit_type: String,
    pub total_applied: i64,
    pub total_admitted: i64,
    pub total_denied: i64,
    pub total_gross_deposited: i64,
    pub total_net_deposited: i64,
    pub program_code: String,
    pub program_description: String,
    pub program_type: String,
    pub department_code: String,
    pub term_code: String,
    pub term_year: i64,
}

/// Counter sums over a set of records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow)]
pub struct AdmissionTotals {
    pub record_count: i64,
    pub total_applied: i64,
    pub total_admitted: i64,
    pub total_denied: i64,
    pub total_gross_deposited: i64,
    pub total_net_deposited: i64,
}

/// The five counters carried by every record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdmissionCounts {
    pub total_applied: i64,
    pub total_admitted: i64,
    pub total_denied: i64,
    pub total_gross_deposited: i64,
    pub total_net_deposited: i64,
}

#[derive(Debug, Clone)]
pub struct NewAdmission {
    pub term_id: i64,
    pub program_id: i64,
    pub academic_career: String,
    pub admit_type: String,
    pub counts: AdmissionCounts,
}

const VIEW_SELECT: &str = r#"
    SELECT a.admission_id, a.academic_career, a.admit_type,
           a.total_applied, a.total_admitted, a.total_denied,
           a.total_gross_deposited, a.total_net_deposited,
           p.program_code, p.program_description, p.program_type,
           d.department_code, t.term_code, t.term_year
    FROM admissions_data a
    JOIN academic_terms t ON t.term_id = a.term_id
    JOIN academic_programs p ON p.program_id = a.program_id
    JOIN departments d ON d.department_id = p.department_id
"#;

const RECORD_COLUMNS: &str = "admission_id, term_id, program_id, academic_career, admit_type, \
    total_applied, total_admitted, total_denied, total_gross_deposited, total_net_deposited, \
    created_date, modified_date";

/// Joined rows matching the filter, in insertion order
pub async fn select_view(pool: &SqlitePool, filter: &AdmissionFilter) -> Result<Vec<AdmissionRow>, DatabaseError> {
    let (where_clause, params) = filter.where_clause();
    let sql = format!("{} WHERE {} ORDER BY a.admission_id", VIEW_SELECT, where_clause);

    let mut query = sqlx::query_as::<_, AdmissionRow>(&sql);
    for param in params {
        query = match param {
            FilterParam::Text(value) => query.bind(value),
            FilterParam::Integer(value) => query.bind(value),
        };
    }
    Ok(query.fetch_all(pool).await?)
}

pub async fn totals_for_term(pool: &SqlitePool, term_code: &str) -> Result<AdmissionTotals, DatabaseError> {
    let totals = sqlx::query_as::<_, AdmissionTotals>(
        r#"
        SELECT COUNT(*) AS record_count,
               COALESCE(SUM(a.total_applied), 0) AS total_applied,
               COALESCE(SUM(a.total_admitted), 0) AS total_admitted,
               COALESCE(SUM(a.total_denied), 0) AS total_denied,
               COALESCE(SUM(a.total_gross_deposited), 0) AS total_gross_deposited,
               COALESCE(SUM(a.total_net_deposited), 0) AS total_net_deposited
        FROM admissions_data a
        JOIN academic_terms t ON t.term_id = a.term_id
        WHERE t.term_code = ?
        "#,
    )
    .bind(term_code)
    .fetch_one(pool)
    .await?;
    Ok(totals)
}

pub async fn find(pool: &SqlitePool, admission_id: i64) -> Result<Option<AdmissionRecord>, DatabaseError> {
    let sql = format!("SELECT {} FROM admissions_data WHERE admission_id = ?", RECORD_COLUMNS);
    let record = sqlx::query_as::<_, AdmissionRecord>(&sql)
        .bind(admission_id)
        .fetch_optional(pool)
        .await?;
    Ok(record)
}

/// Insert a record. Duplicate (term, program, admit type) surfaces as
/// `UniqueViolation`, an unknown term or program as `ForeignKeyViolation`.
pub async fn insert(pool: &SqlitePool, new: &NewAdmission, now: DateTime<Utc>) -> Result<AdmissionRecord, DatabaseError> {
    let sql = format!(
        "INSERT INTO admissions_data (term_id, program_id, academic_career, admit_type,
             total_applied, total_admitted, total_denied, total_gross_deposited, total_net_deposited,
             created_date, modified_date)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING {}",
        RECORD_COLUMNS
    );
    let record = sqlx::query_as::<_, AdmissionRecord>(&sql)
        .bind(new.term_id)
        .bind(new.program_id)
        .bind(&new.academic_career)
        .bind(&new.admit_type)
        .bind(new.counts.total_applied)
        .bind(new.counts.total_admitted)
        .bind(new.counts.total_denied)
        .bind(new.counts.total_gross_deposited)
        .bind(new.counts.total_net_deposited)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;
    Ok(record)
}

/// Overwrite the counters of an existing record; `None` when the id is unknown
pub async fn update_counts(
    pool: &SqlitePool,
    admission_id: i64,
    counts: &AdmissionCounts,
    now: DateTime<Utc>,
) -> Result<Option<AdmissionRecord>, DatabaseError> {
    let sql = format!(
        "UPDATE admissions_data
         SET total_applied = ?, total_admitted = ?, total_denied = ?,
             total_gross_deposited = ?, total_net_deposited = ?, modified_date = ?
         WHERE admission_id = ?
         RETURNING {}",
        RECORD_COLUMNS
    );
    let record = sqlx::query_as::<_, AdmissionRecord>(&sql)
        .bind(counts.total_applied)
        .bind(counts.total_admitted)
        .bind(counts.total_denied)
        .bind(counts.total_gross_deposited)
        .bind(counts.total_net_deposited)
        .bind(now)
        .bind(admission_id)
        .fetch_optional(pool)
        .await?;
    Ok(record)
}

pub async fn delete(pool: &SqlitePool, admission_id: i64) -> Result<bool, DatabaseError> {
    let result = sqlx::query("DELETE FROM admissions_data WHERE admission_id = ?")
        .bind(admission_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
