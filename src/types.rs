//! Shared vocabulary types used across the codebase
//!
//! The store keeps these as free text; the enums are the closed sets the API
//! accepts on writes and the dashboard offers as filter values.

use serde::{Deserialize, Serialize};

/// Filter value meaning "no constraint"
pub const ALL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademicCareer {
    Undergraduate,
    Graduate,
}

impl AcademicCareer {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcademicCareer::Undergraduate => "Undergraduate",
            AcademicCareer::Graduate => "Graduate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdmitType {
    #[serde(rename = "New Student")]
    NewStudent,
    #[serde(rename = "Transfer Student")]
    TransferStudent,
}

impl AdmitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdmitType::NewStudent => "New Student",
            AdmitType::TransferStudent => "Transfer Student",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgramType {
    #[serde(rename = "Bachelor's")]
    Bachelors,
    #[serde(rename = "Master's")]
    Masters,
    Doctoral,
    Certificate,
}

impl ProgramType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramType::Bachelors => "Bachelor's",
            ProgramType::Masters => "Master's",
            ProgramType::Doctoral => "Doctoral",
            ProgramType::Certificate => "Certificate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TermSeason {
    Spring,
    Summer,
    Fall,
}

impl TermSeason {
    pub fn as_str(&self) -> &'static str {
        match self {
            TermSeason::Spring => "Spring",
            TermSeason::Summer => "Summer",
            TermSeason::Fall => "Fall",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_stored_text() {
        assert_eq!(serde_json::to_string(&AdmitType::NewStudent).unwrap(), "\"New Student\"");
        assert_eq!(serde_json::to_string(&ProgramType::Bachelors).unwrap(), "\"Bachelor's\"");
        assert_eq!(
            serde_json::from_str::<AcademicCareer>("\"Graduate\"").unwrap(),
            AcademicCareer::Graduate
        );
        assert!(serde_json::from_str::<AdmitType>("\"Readmit\"").is_err());
    }

    #[test]
    fn seasons_sort_chronologically() {
        assert!(TermSeason::Spring < TermSeason::Summer);
        assert!(TermSeason::Summer < TermSeason::Fall);
    }
}
