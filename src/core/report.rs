//! Student report
//!
//! Derived view of one student's enrollments, grades, and overall GPA,
//! assembled by [`crate::core::ops`] and rendered by the CLI.

use crate::core::models::Student;
use std::fmt;

/// Derived status of one enrollment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseStatus {
    /// A grade has been recorded for the course
    Completed,
    /// No grade has been recorded yet
    InProgress,
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "Completed"),
            Self::InProgress => write!(f, "In Progress"),
        }
    }
}

/// One report line per enrollment, with its matched grade (if any)
#[derive(Debug, Clone, PartialEq)]
pub struct CourseReportLine {
    /// Course identifier
    pub course_id: String,
    /// Enrollment date (`YYYY-MM-DD`)
    pub enrollment_date: String,
    /// Recorded grade, if one exists
    pub grade: Option<f64>,
    /// Derived from grade presence, not from the enrollment's inert
    /// `completed` flag
    pub status: CourseStatus,
}

/// Full report for one student
#[derive(Debug, Clone, PartialEq)]
pub struct StudentReport {
    /// Student identifier
    pub student_id: String,
    /// Full display name
    pub full_name: String,
    /// Email address
    pub email: String,
    /// Date of birth (`YYYY-MM-DD`)
    pub date_of_birth: String,
    /// One line per enrollment, in enrollment order
    pub courses: Vec<CourseReportLine>,
    /// Unweighted mean of recorded grades; `None` when no grades exist
    /// (never zero)
    pub gpa: Option<f64>,
}

impl StudentReport {
    /// Build a report from a student record
    #[must_use]
    pub fn from_student(student: &Student) -> Self {
        let courses = student
            .enrollments
            .iter()
            .map(|enrollment| {
                let grade = student
                    .find_grade(&enrollment.course_id)
                    .map(|g| g.grade);
                CourseReportLine {
                    course_id: enrollment.course_id.clone(),
                    enrollment_date: enrollment.enrollment_date.clone(),
                    grade,
                    status: if grade.is_some() {
                        CourseStatus::Completed
                    } else {
                        CourseStatus::InProgress
                    },
                }
            })
            .collect();

        let gpa = if student.grades.is_empty() {
            None
        } else {
            let sum: f64 = student.grades.iter().map(|g| g.grade).sum();
            #[allow(clippy::cast_precision_loss)]
            let count = student.grades.len() as f64;
            Some(sum / count)
        };

        Self {
            student_id: student.student_id.clone(),
            full_name: student.full_name(),
            email: student.email.clone(),
            date_of_birth: student.date_of_birth.clone(),
            courses,
            gpa,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Enrollment, Grade};

    fn student_with_courses() -> Student {
        let mut student = Student::new(
            "1000".to_string(),
            "Jane".to_string(),
            "Doe".to_string(),
            "jane@example.com".to_string(),
            "2000-01-01".to_string(),
        );
        student
            .enrollments
            .push(Enrollment::new("CS101".to_string(), "2024-09-01".to_string()));
        student
            .enrollments
            .push(Enrollment::new("MATH200".to_string(), "2024-09-02".to_string()));
        student
            .grades
            .push(Grade::new("CS101".to_string(), 85.0, "2024-12-15".to_string()));
        student
    }

    #[test]
    fn test_report_statuses() {
        let report = StudentReport::from_student(&student_with_courses());

        assert_eq!(report.courses.len(), 2);
        assert_eq!(report.courses[0].course_id, "CS101");
        assert_eq!(report.courses[0].status, CourseStatus::Completed);
        assert_eq!(report.courses[0].grade, Some(85.0));
        assert_eq!(report.courses[1].status, CourseStatus::InProgress);
        assert_eq!(report.courses[1].grade, None);
    }

    #[test]
    fn test_gpa_is_mean_of_recorded_grades() {
        let mut student = student_with_courses();
        student
            .enrollments
            .push(Enrollment::new("PHYS150".to_string(), "2024-09-03".to_string()));
        student
            .grades
            .push(Grade::new("MATH200".to_string(), 90.0, "2024-12-16".to_string()));
        student
            .grades
            .push(Grade::new("PHYS150".to_string(), 70.0, "2024-12-17".to_string()));
        // Grades [85, 90, 70]; PHYS150 has a grade, so all three count

        let report = StudentReport::from_student(&student);
        let gpa = report.gpa.unwrap();
        assert!((gpa - (85.0 + 90.0 + 70.0) / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gpa_absent_without_grades() {
        let student = Student::new(
            "1001".to_string(),
            "No".to_string(),
            "Grades".to_string(),
            "ng@example.com".to_string(),
            "2001-02-03".to_string(),
        );

        let report = StudentReport::from_student(&student);
        assert!(report.gpa.is_none());
    }

    #[test]
    fn test_ungraded_courses_do_not_count_as_zero() {
        let report = StudentReport::from_student(&student_with_courses());

        // One grade of 85; the ungraded MATH200 must not drag the mean down
        assert!((report.gpa.unwrap() - 85.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(CourseStatus::Completed.to_string(), "Completed");
        assert_eq!(CourseStatus::InProgress.to_string(), "In Progress");
    }
}
