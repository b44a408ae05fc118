use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentGoal {
    #[serde(rename = "goalID")]
    pub goal_id: i64,
    #[serde(rename = "programID")]
    pub program_id: i64,
    #[serde(rename = "termID")]
    pub term_id: i64,
    pub goal_year: i64,
    pub target_enrollment: Option<i64>,
    pub actual_enrollment: Option<i64>,
    pub notes: Option<String>,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}
