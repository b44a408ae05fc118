use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use super::manager::DatabaseError;
use crate::auth::{hash_password, Role};
use crate::types::{AcademicCareer, AdmitType, ProgramType, TermSeason};

const DEPARTMENTS: &[(&str, &str)] = &[
    ("KIN", "Kinesiology"),
    ("EPS", "Educational & Psychological Studies"),
    ("TAL", "Teaching and Learning"),
    ("Undeclared", "Undeclared"),
];

const TERMS: &[(TermSeason, i64)] = &[
    (TermSeason::Spring, 2022),
    (TermSeason::Summer, 2022),
    (TermSeason::Fall, 2022),
    (TermSeason::Spring, 2023),
    (TermSeason::Summer, 2023),
    (TermSeason::Fall, 2023),
    (TermSeason::Spring, 2024),
    (TermSeason::Summer, 2024),
    (TermSeason::Fall, 2024),
];

// (code, description, type, department code)
const PROGRAMS: &[(&str, &str, ProgramType, &str)] = &[
    ("EXPS_BSEXP", "Exercise Physiology", ProgramType::Bachelors, "KIN"),
    ("SADM_BSED", "Sport Administration", ProgramType::Bachelors, "KIN"),
    ("CAPS_BSED", "Community&AppliedPsych Studies", ProgramType::Bachelors, "EPS"),
    ("ELEDS_BSED", "Elementary Ed Special Ed", ProgramType::Bachelors, "TAL"),
    ("DASI_BS", "Data Analytics Social Impact", ProgramType::Bachelors, "EPS"),
    ("ED_BSED_UN", "Undeclared Education", ProgramType::Bachelors, "Undeclared"),
];

struct SeedAdmission {
    term: &'static str,
    program: &'static str,
    career: AcademicCareer,
    admit_type: AdmitType,
    counts: [i64; 5],
}

const ADMISSIONS: &[SeedAdmission] = &[
    SeedAdmission {
        term: "Fall24",
        program: "EXPS_BSEXP",
        career: AcademicCareer::Undergraduate,
        admit_type: AdmitType::NewStudent,
        counts: [595, 124, 204, 41, 38],
    },
    SeedAdmission {
        term: "Fall24",
        program: "EXPS_BSEXP",
        career: AcademicCareer::Undergraduate,
        admit_type: AdmitType::TransferStudent,
        counts: [38, 19, 0, 12, 9],
    },
    SeedAdmission {
        term: "Spring24",
        program: "SADM_BSED",
        career: AcademicCareer::Undergraduate,
        admit_type: AdmitType::NewStudent,
        counts: [34, 28, 0, 9, 6],
    },
    SeedAdmission {
        term: "Fall23",
        program: "CAPS_BSED",
        career: AcademicCareer::Undergraduate,
        admit_type: AdmitType::NewStudent,
        counts: [212, 97, 61, 30, 27],
    },
];

// (term, program, goal year, target)
const GOALS: &[(&str, &str, i64, i64)] = &[
    ("Fall24", "EXPS_BSEXP", 2024, 45),
    ("Fall24", "SADM_BSED", 2024, 20),
];

// (email, password, first, last, role)
const USERS: &[(&str, &str, &str, &str, Role)] = &[
    ("admin@miami.edu", "admin123", "Admin", "User", Role::Admin),
    ("staff@miami.edu", "staff123", "Staff", "Member", Role::Staff),
    ("viewer@miami.edu", "viewer123", "Viewer", "Account", Role::Viewer),
];

/// Populate reference data, sample admissions and the default accounts.
///
/// Does nothing when departments already exist, so restarts against a file
/// database keep their data.
pub async fn seed(pool: &SqlitePool) -> Result<bool, DatabaseError> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM departments")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        debug!(existing, "Store already populated, skipping seed");
        return Ok(false);
    }

    let now = Utc::now();
    let mut tx = pool.begin().await?;

    for (code, name) in DEPARTMENTS {
        sqlx::query(
            "INSERT INTO departments (department_code, department_name, is_active, created_date, modified_date)
             VALUES (?, ?, 1, ?, ?)",
        )
        .bind(code)
        .bind(name)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    for (season, year) in TERMS {
        let code = format!("{}{:02}", season.as_str(), year % 100);
        let name = format!("{} {}", season.as_str(), year);
        sqlx::query(
            "INSERT INTO academic_terms (term_code, term_name, term_year, term_season, created_date)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(code)
        .bind(name)
        .bind(year)
        .bind(season.as_str())
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    for (code, description, program_type, department) in PROGRAMS {
        sqlx::query(
            "INSERT INTO academic_programs
                (program_code, program_description, program_type, department_id, is_active, created_date, modified_date)
             SELECT ?, ?, ?, department_id, 1, ?, ? FROM departments WHERE department_code = ?",
        )
        .bind(code)
        .bind(description)
        .bind(program_type.as_str())
        .bind(now)
        .bind(now)
        .bind(department)
        .execute(&mut *tx)
        .await?;
    }

    for admission in ADMISSIONS {
        let [applied, admitted, denied, gross, net] = admission.counts;
        sqlx::query(
            "INSERT INTO admissions_data
                (term_id, program_id, academic_career, admit_type,
                 total_applied, total_admitted, total_denied, total_gross_deposited, total_net_deposited,
                 created_date, modified_date)
             SELECT t.term_id, p.program_id, ?, ?, ?, ?, ?, ?, ?, ?, ?
             FROM academic_terms t, academic_programs p
             WHERE t.term_code = ? AND p.program_code = ?",
        )
        .bind(admission.career.as_str())
        .bind(admission.admit_type.as_str())
        .bind(applied)
        .bind(admitted)
        .bind(denied)
        .bind(gross)
        .bind(net)
        .bind(now)
        .bind(now)
        .bind(admission.term)
        .bind(admission.program)
        .execute(&mut *tx)
        .await?;
    }

    for (term, program, goal_year, target) in GOALS {
        sqlx::query(
            "INSERT INTO enrollment_goals
                (program_id, term_id, goal_year, target_enrollment, created_date, modified_date)
             SELECT p.program_id, t.term_id, ?, ?, ?, ?
             FROM academic_terms t, academic_programs p
             WHERE t.term_code = ? AND p.program_code = ?",
        )
        .bind(goal_year)
        .bind(target)
        .bind(now)
        .bind(now)
        .bind(term)
        .bind(program)
        .execute(&mut *tx)
        .await?;
    }

    for (email, password, first, last, role) in USERS {
        sqlx::query(
            "INSERT OR IGNORE INTO users
                (email, password_hash, first_name, last_name, role, is_active, created_date, modified_date)
             VALUES (?, ?, ?, ?, ?, 1, ?, ?)",
        )
        .bind(email)
        .bind(hash_password(password))
        .bind(first)
        .bind(last)
        .bind(role.as_str())
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    info!(
        departments = DEPARTMENTS.len(),
        terms = TERMS.len(),
        programs = PROGRAMS.len(),
        admissions = ADMISSIONS.len(),
        users = USERS.len(),
        "Seeded admissions store"
    );
    Ok(true)
}
