//! Student repository
//!
//! The in-memory authoritative collection of students, keyed by student ID
//! and synced to a JSON data file. The repository is opened once at startup
//! and owns the full map for the process lifetime; every mutating operation
//! in [`crate::core::ops`] saves the complete snapshot before returning.

use crate::core::error::StoreError;
use crate::core::models::Student;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of opening the repository's data file
#[derive(Debug)]
pub enum LoadStatus {
    /// The data file existed and parsed; contains the record count
    Loaded(usize),
    /// No data file existed yet; the repository starts empty
    Missing,
    /// The data file was unreadable or malformed; the repository starts
    /// empty and no partial data is kept
    Corrupt(StoreError),
}

/// In-memory collection of students backed by a JSON data file
#[derive(Debug)]
pub struct Repository {
    students: HashMap<String, Student>,
    data_file: PathBuf,
}

impl Repository {
    /// Open the repository, loading the data file if present
    ///
    /// A missing file is not an error: the repository starts empty. A
    /// malformed file fails soft: the error is surfaced in the returned
    /// [`LoadStatus`] (and logged), and the repository starts empty rather
    /// than loading partial data.
    ///
    /// # Arguments
    /// * `data_file` - Path to the JSON data file
    pub fn open(data_file: impl Into<PathBuf>) -> (Self, LoadStatus) {
        let data_file = data_file.into();

        let status = if data_file.exists() {
            match Self::load_file(&data_file) {
                Ok(students) => {
                    let count = students.len();
                    return (
                        Self {
                            students,
                            data_file,
                        },
                        LoadStatus::Loaded(count),
                    );
                }
                Err(e) => {
                    crate::warn!("Error loading data: {e}. Starting with empty database.");
                    LoadStatus::Corrupt(e)
                }
            }
        } else {
            LoadStatus::Missing
        };

        (
            Self {
                students: HashMap::new(),
                data_file,
            },
            status,
        )
    }

    /// Parse the full student map from a data file
    ///
    /// The map key is authoritative for `student_id`; the field is restored
    /// from the key after deserialization.
    ///
    /// # Errors
    /// Returns a [`StoreError`] if the file cannot be read or any record
    /// fails to parse (the whole load fails; partial data is never returned).
    fn load_file(path: &Path) -> Result<HashMap<String, Student>, StoreError> {
        let content = fs::read_to_string(path)?;
        let mut students: HashMap<String, Student> = serde_json::from_str(&content)?;
        for (id, student) in &mut students {
            student.student_id.clone_from(id);
        }
        Ok(students)
    }

    /// Serialize every student to the data file, overwriting it entirely
    ///
    /// # Errors
    /// Returns a [`StoreError`] if the file cannot be written. Write
    /// failures propagate; they are never swallowed.
    pub fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.students)?;
        fs::write(&self.data_file, json)?;
        Ok(())
    }

    /// Generate the next student ID
    ///
    /// Scans current keys composed entirely of decimal digits and returns
    /// `max + 1`, or `"1000"` if none exist. Deleting the highest-ID student
    /// makes its ID eligible for reuse; gaps below the maximum are never
    /// backfilled.
    #[must_use]
    pub fn generate_id(&self) -> String {
        self.students
            .keys()
            .filter(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()))
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .map_or_else(|| "1000".to_string(), |max| (max + 1).to_string())
    }

    /// Get a student by ID
    #[must_use]
    pub fn get(&self, student_id: &str) -> Option<&Student> {
        self.students.get(student_id)
    }

    /// Get a mutable reference to a student by ID
    pub fn get_mut(&mut self, student_id: &str) -> Option<&mut Student> {
        self.students.get_mut(student_id)
    }

    /// Whether a student with the given ID exists
    #[must_use]
    pub fn contains(&self, student_id: &str) -> bool {
        self.students.contains_key(student_id)
    }

    /// All students, in map-iteration order
    #[must_use]
    pub fn students(&self) -> Vec<&Student> {
        self.students.values().collect()
    }

    /// Number of students in the repository
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the repository holds no students
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Path of the backing data file
    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Insert a student under its own ID (repository-internal)
    pub(crate) fn insert(&mut self, student: Student) {
        self.students.insert(student.student_id.clone(), student);
    }

    /// Remove a student by ID (repository-internal)
    pub(crate) fn remove(&mut self, student_id: &str) -> Option<Student> {
        self.students.remove(student_id)
    }
}
