//! Enrollment model

use serde::{Deserialize, Serialize};

/// Represents a student's registration in one course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Course identifier (free-form, e.g., "CS101")
    pub course_id: String,

    /// Enrollment date in `YYYY-MM-DD` format, set at creation time
    pub enrollment_date: String,

    /// Completion flag. Persisted for compatibility; no operation sets it.
    #[serde(default)]
    pub completed: bool,
}

impl Enrollment {
    /// Create a new enrollment dated `enrollment_date`
    ///
    /// # Arguments
    /// * `course_id` - Course identifier
    /// * `enrollment_date` - Date string in `YYYY-MM-DD` format
    #[must_use]
    pub const fn new(course_id: String, enrollment_date: String) -> Self {
        Self {
            course_id,
            enrollment_date,
            completed: false,
        }
    }
}
