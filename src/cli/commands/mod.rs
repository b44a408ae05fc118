pub mod admissions;
pub mod auth;
pub mod password;
pub mod server;
