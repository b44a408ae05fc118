use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::info;

use super::ServiceError;
use crate::database::models::AdmissionRecord;
use crate::database::repository::admissions::{self, AdmissionCounts, AdmissionRow, NewAdmission};
use crate::database::DatabaseError;
use crate::filter::AdmissionFilter;
use crate::types::{AcademicCareer, AdmitType};

/// Flat, denormalized admission record as served to the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionView {
    pub id: i64,
    pub academic_career_description: String,
    pub academic_plan_code: String,
    pub academic_plan_description: String,
    pub admit_type_description: String,
    /// Department code
    pub department: String,
    /// Program type
    pub program: String,
    pub total_applied: i64,
    pub total_admitted: i64,
    pub total_denied: i64,
    pub total_gross_deposited: i64,
    pub total_net_deposited: i64,
    /// Term code
    pub term: String,
    pub academic_year: String,
}

impl From<AdmissionRow> for AdmissionView {
    fn from(row: AdmissionRow) -> Self {
        Self {
            id: row.admission_id,
            academic_career_description: row.academic_career,
            academic_plan_code: row.program_code,
            academic_plan_description: row.program_description,
            admit_type_description: row.admit_type,
            department: row.department_code,
            program: row.program_type,
            total_applied: row.total_applied,
            total_admitted: row.total_admitted,
            total_denied: row.total_denied,
            total_gross_deposited: row.total_gross_deposited,
            total_net_deposited: row.total_net_deposited,
            term: row.term_code,
            academic_year: academic_year(row.term_year),
        }
    }
}

/// Counter sums and rates for one term. Rates are unrounded percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionSummary {
    pub term: String,
    pub record_count: i64,
    pub total_applied: i64,
    pub total_admitted: i64,
    pub total_denied: i64,
    pub total_gross_deposited: i64,
    pub total_net_deposited: i64,
    pub admission_rate: f64,
    pub denial_rate: f64,
    pub deposit_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdmissionRequest {
    #[serde(rename = "termID")]
    pub term_id: i64,
    #[serde(rename = "programID")]
    pub program_id: i64,
    pub academic_career: AcademicCareer,
    pub admit_type: AdmitType,
    #[serde(default)]
    pub total_applied: i64,
    #[serde(default)]
    pub total_admitted: i64,
    #[serde(default)]
    pub total_denied: i64,
    #[serde(default)]
    pub total_gross_deposited: i64,
    #[serde(default)]
    pub total_net_deposited: i64,
}

/// Replacement counters. Other fields in the body are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdmissionRequest {
    pub total_applied: i64,
    pub total_admitted: i64,
    pub total_denied: i64,
    pub total_gross_deposited: i64,
    pub total_net_deposited: i64,
}

/// `2024` -> `"2023-24"`
fn academic_year(term_year: i64) -> String {
    format!("{}-{:02}", term_year - 1, term_year % 100)
}

/// Term year for an academic year label: `"2023-24"` -> `2024`
pub fn parse_academic_year(label: &str) -> Result<i64, ServiceError> {
    let suffix = label
        .split_once('-')
        .map(|(_, suffix)| suffix)
        .ok_or_else(|| ServiceError::field("academicYear", "Expected the form YYYY-YY"))?;

    if suffix.len() != 2 || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ServiceError::field(
            "academicYear",
            format!("'{}' is not a two-digit year", suffix),
        ));
    }

    let short_year: i64 = suffix
        .parse()
        .map_err(|_| ServiceError::field("academicYear", "Expected the form YYYY-YY"))?;
    Ok(short_year + 2000)
}

fn percentage(part: i64, whole: i64) -> f64 {
    if whole > 0 {
        part as f64 / whole as f64 * 100.0
    } else {
        0.0
    }
}

fn validate_counts(counts: &AdmissionCounts) -> Result<(), ServiceError> {
    let fields = [
        ("totalApplied", counts.total_applied),
        ("totalAdmitted", counts.total_admitted),
        ("totalDenied", counts.total_denied),
        ("totalGrossDeposited", counts.total_gross_deposited),
        ("totalNetDeposited", counts.total_net_deposited),
    ];
    match fields.iter().find(|(_, value)| *value < 0) {
        Some((field, _)) => Err(ServiceError::field(field, "Must not be negative")),
        None => Ok(()),
    }
}

impl From<&UpdateAdmissionRequest> for AdmissionCounts {
    fn from(request: &UpdateAdmissionRequest) -> Self {
        Self {
            total_applied: request.total_applied,
            total_admitted: request.total_admitted,
            total_denied: request.total_denied,
            total_gross_deposited: request.total_gross_deposited,
            total_net_deposited: request.total_net_deposited,
        }
    }
}

impl From<&CreateAdmissionRequest> for NewAdmission {
    fn from(request: &CreateAdmissionRequest) -> Self {
        Self {
            term_id: request.term_id,
            program_id: request.program_id,
            academic_career: request.academic_career.as_str().to_string(),
            admit_type: request.admit_type.as_str().to_string(),
            counts: AdmissionCounts {
                total_applied: request.total_applied,
                total_admitted: request.total_admitted,
                total_denied: request.total_denied,
                total_gross_deposited: request.total_gross_deposited,
                total_net_deposited: request.total_net_deposited,
            },
        }
    }
}

pub struct AdmissionService {
    pool: SqlitePool,
}

impl AdmissionService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn select(&self, filter: &AdmissionFilter) -> Result<Vec<AdmissionView>, ServiceError> {
        let rows = admissions::select_view(&self.pool, filter).await?;
        Ok(rows.into_iter().map(AdmissionView::from).collect())
    }

    pub async fn list_all(&self) -> Result<Vec<AdmissionView>, ServiceError> {
        self.select(&AdmissionFilter::default()).await
    }

    pub async fn list_by_term(&self, term_code: &str) -> Result<Vec<AdmissionView>, ServiceError> {
        self.select(&AdmissionFilter::by_term(term_code)).await
    }

    pub async fn list_by_academic_year(&self, label: &str) -> Result<Vec<AdmissionView>, ServiceError> {
        let year = parse_academic_year(label)?;
        self.select(&AdmissionFilter::by_term_year(year)).await
    }

    pub async fn filter(&self, filter: &AdmissionFilter) -> Result<Vec<AdmissionView>, ServiceError> {
        self.select(filter).await
    }

    pub async fn summary(&self, term_code: &str) -> Result<AdmissionSummary, ServiceError> {
        let totals = admissions::totals_for_term(&self.pool, term_code).await?;
        if totals.record_count == 0 {
            return Err(ServiceError::not_found(format!(
                "No admission data found for term {}",
                term_code
            )));
        }

        Ok(AdmissionSummary {
            term: term_code.to_string(),
            record_count: totals.record_count,
            total_applied: totals.total_applied,
            total_admitted: totals.total_admitted,
            total_denied: totals.total_denied,
            total_gross_deposited: totals.total_gross_deposited,
            total_net_deposited: totals.total_net_deposited,
            admission_rate: percentage(totals.total_admitted, totals.total_applied),
            denial_rate: percentage(totals.total_denied, totals.total_applied),
            deposit_rate: percentage(totals.total_net_deposited, totals.total_admitted),
        })
    }

    pub async fn create(&self, request: &CreateAdmissionRequest) -> Result<AdmissionRecord, ServiceError> {
        let new = NewAdmission::from(request);
        validate_counts(&new.counts)?;

        match admissions::insert(&self.pool, &new, Utc::now()).await {
            Ok(record) => {
                info!(admission_id = record.admission_id, term_id = record.term_id, program_id = record.program_id, "Created admission record");
                Ok(record)
            }
            Err(DatabaseError::UniqueViolation(_)) => Err(ServiceError::Conflict(format!(
                "Admission data already exists for term {}, program {} and admit type '{}'",
                new.term_id, new.program_id, new.admit_type
            ))),
            Err(DatabaseError::ForeignKeyViolation(_)) => Err(ServiceError::validation(format!(
                "Unknown term {} or program {}",
                new.term_id, new.program_id
            ))),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn update(&self, admission_id: i64, request: &UpdateAdmissionRequest) -> Result<AdmissionRecord, ServiceError> {
        let counts = AdmissionCounts::from(request);
        validate_counts(&counts)?;

        admissions::update_counts(&self.pool, admission_id, &counts, Utc::now())
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Admission data with ID {} not found", admission_id)))
    }

    /// `false` when nothing had this id
    pub async fn delete(&self, admission_id: i64) -> Result<bool, ServiceError> {
        let removed = admissions::delete(&self.pool, admission_id).await?;
        if removed {
            info!(admission_id, "Deleted admission record");
        }
        Ok(removed)
    }
}
