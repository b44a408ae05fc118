use serde::Serialize;
use sqlx::SqlitePool;

use super::ServiceError;
use crate::database::models::{AcademicProgram, AcademicTerm, Department, EnrollmentGoal};
use crate::database::repository::catalog::{self, ProgramListing};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    #[serde(rename = "departmentID")]
    pub department_id: i64,
    pub department_code: String,
    pub department_name: String,
}

/// Active program with the department it belongs to
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramView {
    #[serde(rename = "programID")]
    pub program_id: i64,
    pub program_code: String,
    pub program_description: String,
    pub program_type: String,
    pub department: DepartmentSummary,
}

impl From<ProgramListing> for ProgramView {
    fn from(row: ProgramListing) -> Self {
        Self {
            program_id: row.program_id,
            program_code: row.program_code,
            program_description: row.program_description,
            program_type: row.program_type,
            department: DepartmentSummary {
                department_id: row.department_id,
                department_code: row.department_code,
                department_name: row.department_name,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDetail {
    #[serde(flatten)]
    pub department: Department,
    pub academic_programs: Vec<AcademicProgram>,
}

/// Read-only reference data: departments, programs, terms and goals
pub struct CatalogService {
    pool: SqlitePool,
}

impl CatalogService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn departments(&self) -> Result<Vec<Department>, ServiceError> {
        Ok(catalog::active_departments(&self.pool).await?)
    }

    pub async fn department(&self, department_id: i64) -> Result<DepartmentDetail, ServiceError> {
        let department = catalog::find_department(&self.pool, department_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Department {} not found", department_id)))?;
        let academic_programs = catalog::department_programs(&self.pool, department_id).await?;
        Ok(DepartmentDetail {
            department,
            academic_programs,
        })
    }

    pub async fn programs(&self) -> Result<Vec<ProgramView>, ServiceError> {
        let rows = catalog::active_programs(&self.pool).await?;
        Ok(rows.into_iter().map(ProgramView::from).collect())
    }

    pub async fn programs_by_department(&self, department_code: &str) -> Result<Vec<ProgramView>, ServiceError> {
        let rows = catalog::programs_by_department_code(&self.pool, department_code).await?;
        Ok(rows.into_iter().map(ProgramView::from).collect())
    }

    pub async fn programs_by_type(&self, program_type: &str) -> Result<Vec<ProgramView>, ServiceError> {
        let rows = catalog::programs_by_type(&self.pool, program_type).await?;
        Ok(rows.into_iter().map(ProgramView::from).collect())
    }

    pub async fn terms(&self) -> Result<Vec<AcademicTerm>, ServiceError> {
        Ok(catalog::all_terms(&self.pool).await?)
    }

    pub async fn term(&self, term_code: &str) -> Result<AcademicTerm, ServiceError> {
        catalog::find_term(&self.pool, term_code)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Term {} not found", term_code)))
    }

    pub async fn terms_by_year(&self, year: i64) -> Result<Vec<AcademicTerm>, ServiceError> {
        Ok(catalog::terms_by_year(&self.pool, year).await?)
    }

    pub async fn enrollment_goals(&self, term_code: &str) -> Result<Vec<EnrollmentGoal>, ServiceError> {
        Ok(catalog::goals_by_term(&self.pool, term_code).await?)
    }
}
