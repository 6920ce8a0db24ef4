//! Data models for `campus-records`

pub mod enrollment;
pub mod grade;
pub mod student;

pub use enrollment::Enrollment;
pub use grade::Grade;
pub use student::Student;
