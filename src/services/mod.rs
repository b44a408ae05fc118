pub mod admission_service;
pub mod auth_service;
pub mod catalog_service;

use std::collections::HashMap;

use crate::auth::JwtError;
use crate::database::DatabaseError;

pub use admission_service::{
    parse_academic_year, AdmissionService, AdmissionSummary, AdmissionView, CreateAdmissionRequest,
    UpdateAdmissionRequest,
};
pub use auth_service::{AuthService, LoginUser, UserProfile};
pub use catalog_service::{CatalogService, DepartmentDetail, DepartmentSummary, ProgramView};

/// Typed failures raised by services; the HTTP layer maps each to a status
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{message}")]
    Validation {
        message: String,
        field_errors: Option<HashMap<String, String>>,
    },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Token(#[from] JwtError),
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation {
            message: message.into(),
            field_errors: None,
        }
    }

    pub fn field(field: &str, problem: impl Into<String>) -> Self {
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), problem.into());
        ServiceError::Validation {
            message: "Invalid field value".to_string(),
            field_errors: Some(field_errors),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ServiceError::NotFound(message.into())
    }
}
