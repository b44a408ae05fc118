use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Program row. `program_type` is stored as free text (see `types::ProgramType`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AcademicProgram {
    #[serde(rename = "programID")]
    pub program_id: i64,
    pub program_code: String,
    pub program_description: String,
    pub program_type: String,
    #[serde(rename = "departmentID")]
    pub department_id: i64,
    pub is_active: bool,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}
