//! Student model

use super::{Enrollment, Grade};
use serde::{Deserialize, Serialize};

/// Represents one student record with embedded enrollments and grades
///
/// The student ID is the key of the repository map and is not written into
/// the persisted value; on load it is restored from the key, which is
/// authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique, system-generated identifier (decimal-digit string)
    #[serde(skip)]
    pub student_id: String,

    /// Given name (display string, accepted as-is)
    pub first_name: String,

    /// Family name (display string, accepted as-is)
    pub last_name: String,

    /// Email address, validated by the caller before creation
    pub email: String,

    /// Date of birth in `YYYY-MM-DD` format
    pub date_of_birth: String,

    /// Course enrollments in insertion order; course IDs are unique
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,

    /// Recorded grades, at most one per course
    #[serde(default)]
    pub grades: Vec<Grade>,
}

impl Student {
    /// Create a new student with no enrollments or grades
    ///
    /// # Arguments
    /// * `student_id` - Generated identifier
    /// * `first_name` - Given name
    /// * `last_name` - Family name
    /// * `email` - Email address
    /// * `date_of_birth` - Date string in `YYYY-MM-DD` format
    #[must_use]
    pub const fn new(
        student_id: String,
        first_name: String,
        last_name: String,
        email: String,
        date_of_birth: String,
    ) -> Self {
        Self {
            student_id,
            first_name,
            last_name,
            email,
            date_of_birth,
            enrollments: Vec::new(),
            grades: Vec::new(),
        }
    }

    /// Full display name ("first last")
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the student is enrolled in the given course
    #[must_use]
    pub fn is_enrolled_in(&self, course_id: &str) -> bool {
        self.enrollments.iter().any(|e| e.course_id == course_id)
    }

    /// Get the recorded grade for a course, if any
    #[must_use]
    pub fn find_grade(&self, course_id: &str) -> Option<&Grade> {
        self.grades.iter().find(|g| g.course_id == course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_student() -> Student {
        Student::new(
            "1000".to_string(),
            "Jane".to_string(),
            "Doe".to_string(),
            "jane@example.com".to_string(),
            "2000-01-01".to_string(),
        )
    }

    #[test]
    fn test_student_creation() {
        let student = sample_student();

        assert_eq!(student.student_id, "1000");
        assert_eq!(student.first_name, "Jane");
        assert_eq!(student.last_name, "Doe");
        assert_eq!(student.email, "jane@example.com");
        assert_eq!(student.date_of_birth, "2000-01-01");
        assert!(student.enrollments.is_empty());
        assert!(student.grades.is_empty());
    }

    #[test]
    fn test_full_name() {
        let student = sample_student();

        assert_eq!(student.full_name(), "Jane Doe");
    }

    #[test]
    fn test_is_enrolled_in() {
        let mut student = sample_student();
        student
            .enrollments
            .push(Enrollment::new("CS101".to_string(), "2024-09-01".to_string()));

        assert!(student.is_enrolled_in("CS101"));
        assert!(!student.is_enrolled_in("CS102"));
    }

    #[test]
    fn test_find_grade() {
        let mut student = sample_student();
        student
            .grades
            .push(Grade::new("CS101".to_string(), 85.0, "2024-12-15".to_string()));

        let found = student.find_grade("CS101");
        assert!(found.is_some());
        assert!((found.unwrap().grade - 85.0).abs() < f64::EPSILON);
        assert!(student.find_grade("CS102").is_none());
    }

    #[test]
    fn test_student_id_not_serialized() {
        let student = sample_student();
        let json = serde_json::to_string(&student).unwrap();

        assert!(!json.contains("student_id"));
        assert!(json.contains("first_name"));
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let json = r#"{
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jane@example.com",
            "date_of_birth": "2000-01-01"
        }"#;
        let student: Student = serde_json::from_str(json).unwrap();

        assert!(student.enrollments.is_empty());
        assert!(student.grades.is_empty());
        assert!(student.student_id.is_empty()); // restored from the map key on load
    }
}
