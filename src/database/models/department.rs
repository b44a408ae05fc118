use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(rename = "departmentID")]
    pub department_id: i64,
    pub department_code: String,
    pub department_name: String,
    pub is_active: bool,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}
