// handlers/protected/mod.rs - Endpoints that require a verified bearer token
pub mod admissions;
pub mod departments;
pub mod diagnostics;
pub mod enrollment_goals;
pub mod profile;
pub mod programs;
pub mod terms;
