pub mod admission;
pub mod department;
pub mod enrollment_goal;
pub mod program;
pub mod term;
pub mod user;

pub use admission::AdmissionRecord;
pub use department::Department;
pub use enrollment_goal::EnrollmentGoal;
pub use program::AcademicProgram;
pub use term::AcademicTerm;
pub use user::User;
