use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Persisted admission counts for one (term, program, admit type).
///
/// Department and program type are not stored here; they are resolved
/// through the owning program when rows are mapped to views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionRecord {
    #[serde(rename = "admissionID")]
    pub admission_id: i64,
    #[serde(rename = "termID")]
    pub term_id: i64,
    #[serde(rename = "programID")]
    pub program_id: i64,
    pub academic_career: String,
    pub admit_type: String,
    pub total_applied: i64,
    pub total_admitted: i64,
    pub total_denied: i64,
    pub total_gross_deposited: i64,
    pub total_net_deposited: i64,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}
