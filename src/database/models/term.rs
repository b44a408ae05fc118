use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AcademicTerm {
    #[serde(rename = "termID")]
    pub term_id: i64,
    pub term_code: String,
    pub term_name: String,
    pub term_year: i64,
    pub term_season: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_date: DateTime<Utc>,
}
