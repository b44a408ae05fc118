//! Hand-written queries over the admissions store.
//!
//! Each function takes the pool explicitly and returns rows or
//! `DatabaseError`; services own any mapping to transport types.

pub mod admissions;
pub mod catalog;
pub mod users;
