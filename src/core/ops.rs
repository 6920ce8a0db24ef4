//! Domain operations
//!
//! CRUD, enrollment, grading, reporting, and search over the
//! [`Repository`]. Every mutating operation persists the full repository
//! snapshot before returning; a failed save propagates as
//! [`OpsError::Store`] so the operator learns the data was not written.
//!
//! Operations that require operator confirmation (`delete_student`,
//! `record_grade` on overwrite) take a closure so the core owns the
//! distinguishable [`Outcome::Cancelled`] result while input acquisition
//! stays in the presentation layer.

use crate::core::error::OpsError;
use crate::core::models::{Enrollment, Grade, Student};
use crate::core::report::StudentReport;
use crate::core::repository::Repository;
use crate::core::validation::today;
use crate::info;

/// Result of a confirmation-gated operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation ran and was persisted
    Applied,
    /// The operator declined the confirmation; nothing changed
    Cancelled,
}

/// One updatable student field, carrying its new value
///
/// Maps the operator-facing 1-4 field selector onto a typed variant via
/// [`UpdateField::from_selector`]. Email and date values are pre-validated
/// by the caller's prompt loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateField {
    /// Replace the first name
    FirstName(String),
    /// Replace the last name
    LastName(String),
    /// Replace the email address
    Email(String),
    /// Replace the date of birth
    DateOfBirth(String),
}

impl UpdateField {
    /// Build an update from the operator's numeric field selector (1-4)
    ///
    /// # Errors
    /// Returns [`OpsError::InvalidSelector`] for selectors outside 1-4.
    pub fn from_selector(selector: u8, value: String) -> Result<Self, OpsError> {
        match selector {
            1 => Ok(Self::FirstName(value)),
            2 => Ok(Self::LastName(value)),
            3 => Ok(Self::Email(value)),
            4 => Ok(Self::DateOfBirth(value)),
            other => Err(OpsError::InvalidSelector(other)),
        }
    }
}

impl Repository {
    /// Add a new student with a generated ID and empty enrollments/grades
    ///
    /// Email and date of birth are pre-validated by the caller loop; names
    /// are accepted as-is, including empty strings.
    ///
    /// # Returns
    /// The newly assigned student ID.
    ///
    /// # Errors
    /// Returns [`OpsError::Store`] if the repository cannot be persisted.
    pub fn add_student(
        &mut self,
        first_name: String,
        last_name: String,
        email: String,
        date_of_birth: String,
    ) -> Result<String, OpsError> {
        let student_id = self.generate_id();
        let student = Student::new(
            student_id.clone(),
            first_name,
            last_name,
            email,
            date_of_birth,
        );

        self.insert(student);
        self.save()?;

        info!("Added student {student_id}");
        Ok(student_id)
    }

    /// Update exactly one field of an existing student
    ///
    /// # Errors
    /// Returns [`OpsError::NotFound`] if the ID is absent, or
    /// [`OpsError::Store`] if the change cannot be persisted.
    pub fn update_student(&mut self, student_id: &str, field: UpdateField) -> Result<(), OpsError> {
        let student = self
            .get_mut(student_id)
            .ok_or_else(|| OpsError::NotFound(student_id.to_string()))?;

        match field {
            UpdateField::FirstName(value) => student.first_name = value,
            UpdateField::LastName(value) => student.last_name = value,
            UpdateField::Email(value) => student.email = value,
            UpdateField::DateOfBirth(value) => student.date_of_birth = value,
        }

        self.save()?;
        info!("Updated student {student_id}");
        Ok(())
    }

    /// Delete a student after confirmation, cascading its embedded
    /// enrollments and grades
    ///
    /// `confirm` is invoked with the student about to be removed; returning
    /// `false` cancels the deletion with no state change.
    ///
    /// # Errors
    /// Returns [`OpsError::NotFound`] if the ID is absent, or
    /// [`OpsError::Store`] if the removal cannot be persisted.
    pub fn delete_student(
        &mut self,
        student_id: &str,
        confirm: impl FnOnce(&Student) -> bool,
    ) -> Result<Outcome, OpsError> {
        let student = self
            .get(student_id)
            .ok_or_else(|| OpsError::NotFound(student_id.to_string()))?;

        if !confirm(student) {
            return Ok(Outcome::Cancelled);
        }

        self.remove(student_id);
        self.save()?;

        info!("Deleted student {student_id}");
        Ok(Outcome::Applied)
    }

    /// Enroll a student in a course, dated today
    ///
    /// # Errors
    /// Returns [`OpsError::NotFound`] if the ID is absent,
    /// [`OpsError::AlreadyEnrolled`] if an enrollment for `course_id`
    /// already exists, or [`OpsError::Store`] on persistence failure.
    pub fn enroll_course(&mut self, student_id: &str, course_id: &str) -> Result<(), OpsError> {
        let student = self
            .get_mut(student_id)
            .ok_or_else(|| OpsError::NotFound(student_id.to_string()))?;

        if student.is_enrolled_in(course_id) {
            return Err(OpsError::AlreadyEnrolled {
                student_id: student_id.to_string(),
                course_id: course_id.to_string(),
            });
        }

        student
            .enrollments
            .push(Enrollment::new(course_id.to_string(), today()));
        self.save()?;

        info!("Enrolled student {student_id} in course {course_id}");
        Ok(())
    }

    /// Record a grade for the course at the given 1-based selection index
    ///
    /// The selection is 1-based as displayed to the operator and converted
    /// internally. If a grade already exists for the selected course,
    /// `confirm_overwrite` is invoked with the old value; declining cancels
    /// with no state change. A confirmed overwrite fully replaces the prior
    /// grade (never averages), keeping at most one grade per course.
    ///
    /// # Errors
    /// Returns [`OpsError::NotFound`], [`OpsError::NoEnrollments`],
    /// [`OpsError::InvalidSelection`], [`OpsError::InvalidGradeValue`] for
    /// grades outside [0, 100], or [`OpsError::Store`] on persistence
    /// failure.
    pub fn record_grade(
        &mut self,
        student_id: &str,
        selection: usize,
        grade: f64,
        confirm_overwrite: impl FnOnce(f64) -> bool,
    ) -> Result<Outcome, OpsError> {
        let student = self
            .get_mut(student_id)
            .ok_or_else(|| OpsError::NotFound(student_id.to_string()))?;

        if student.enrollments.is_empty() {
            return Err(OpsError::NoEnrollments(student_id.to_string()));
        }

        // Displayed 1-based, stored 0-based
        let index = selection
            .checked_sub(1)
            .filter(|i| *i < student.enrollments.len())
            .ok_or(OpsError::InvalidSelection(selection))?;
        let course_id = student.enrollments[index].course_id.clone();

        if !(0.0..=100.0).contains(&grade) || !grade.is_finite() {
            return Err(OpsError::InvalidGradeValue(grade));
        }

        if let Some(existing) = student.find_grade(&course_id) {
            if !confirm_overwrite(existing.grade) {
                return Ok(Outcome::Cancelled);
            }
        }

        // Replace, never duplicate: drop any prior grade for the course
        student.grades.retain(|g| g.course_id != course_id);
        student
            .grades
            .push(Grade::new(course_id.clone(), grade, today()));
        self.save()?;

        info!("Recorded grade {grade} for student {student_id} in course {course_id}");
        Ok(Outcome::Applied)
    }

    /// Generate the derived report for one student
    ///
    /// # Errors
    /// Returns [`OpsError::NotFound`] if the ID is absent.
    pub fn generate_report(&self, student_id: &str) -> Result<StudentReport, OpsError> {
        self.get(student_id)
            .map(StudentReport::from_student)
            .ok_or_else(|| OpsError::NotFound(student_id.to_string()))
    }

    /// Search students by name, email, or exact ID
    ///
    /// Case-insensitive substring match against the "first last" full name
    /// or the email address, or an exact case-insensitive match against the
    /// student ID.
    ///
    /// # Errors
    /// Returns [`OpsError::EmptySearchTerm`] for an empty term; matching is
    /// never attempted.
    pub fn search_students(&self, term: &str) -> Result<Vec<&Student>, OpsError> {
        if term.is_empty() {
            return Err(OpsError::EmptySearchTerm);
        }

        let term = term.to_lowercase();
        Ok(self
            .students()
            .into_iter()
            .filter(|student| {
                student.full_name().to_lowercase().contains(&term)
                    || student.email.to_lowercase().contains(&term)
                    || student.student_id.to_lowercase() == term
            })
            .collect())
    }
}
