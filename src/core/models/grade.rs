//! Grade model

use serde::{Deserialize, Serialize};

/// Represents a recorded numeric result for one (student, course) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// Course identifier, matching one of the student's enrollments
    pub course_id: String,

    /// Numeric grade in the closed interval [0, 100]
    pub grade: f64,

    /// Date the grade was recorded, `YYYY-MM-DD`
    pub date_recorded: String,
}

impl Grade {
    /// Create a new grade record dated `date_recorded`
    ///
    /// # Arguments
    /// * `course_id` - Course the grade belongs to
    /// * `grade` - Numeric grade value
    /// * `date_recorded` - Date string in `YYYY-MM-DD` format
    #[must_use]
    pub const fn new(course_id: String, grade: f64, date_recorded: String) -> Self {
        Self {
            course_id,
            grade,
            date_recorded,
        }
    }
}
