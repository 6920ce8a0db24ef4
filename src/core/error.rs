//! Error taxonomy for the student records core

use thiserror::Error;

/// Failures of the persisted store itself
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data file could not be read or written
    #[error("data file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file contents could not be parsed or serialized
    #[error("data file format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Failures of the domain operations
///
/// All variants except `Store` are locally recoverable: the operation aborts
/// cleanly and prior state is unchanged. `Store` means a mutation could not
/// be persisted and must reach the operator.
#[derive(Debug, Error)]
pub enum OpsError {
    /// The referenced student ID does not exist
    #[error("student '{0}' not found")]
    NotFound(String),

    /// The student is already enrolled in the course
    #[error("student '{student_id}' is already enrolled in course '{course_id}'")]
    AlreadyEnrolled {
        /// Student identifier
        student_id: String,
        /// Course identifier
        course_id: String,
    },

    /// The student has no enrollments to grade
    #[error("student '{0}' is not enrolled in any courses")]
    NoEnrollments(String),

    /// A course selection was outside the displayed 1-based range
    #[error("selection {0} is out of range")]
    InvalidSelection(usize),

    /// An update field selector was outside 1-4
    #[error("field selector {0} is out of range (expected 1-4)")]
    InvalidSelector(u8),

    /// A grade value was outside the closed interval [0, 100]
    #[error("grade {0} must be between 0 and 100")]
    InvalidGradeValue(f64),

    /// A search was attempted with an empty term
    #[error("search term must not be empty")]
    EmptySearchTerm,

    /// A mutation could not be persisted to the data file
    #[error("failed to save student data: {0}")]
    Store(#[from] StoreError),
}
