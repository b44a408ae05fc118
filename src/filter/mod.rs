pub mod admission_filter;

pub use admission_filter::{AdmissionFilter, FilterParam};
