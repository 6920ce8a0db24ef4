//! Interactive menu loop
//!
//! Numbered menu over the records core. All input acquisition and
//! re-prompting lives here; the core only sees validated values and
//! confirmation closures.

use super::roster;
use campus_records::error::OpsError;
use campus_records::ops::{Outcome, UpdateField};
use campus_records::repository::Repository;
use campus_records::validation::{validate_date, validate_email};
use std::io::{self, Write};

/// Closed set of menu actions, dispatched by number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    AddStudent = 1,
    ViewStudents = 2,
    UpdateStudent = 3,
    DeleteStudent = 4,
    EnrollCourse = 5,
    RecordGrade = 6,
    GenerateReport = 7,
    SearchStudents = 8,
    Exit = 9,
}

impl MenuOption {
    fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::AddStudent),
            2 => Some(Self::ViewStudents),
            3 => Some(Self::UpdateStudent),
            4 => Some(Self::DeleteStudent),
            5 => Some(Self::EnrollCourse),
            6 => Some(Self::RecordGrade),
            7 => Some(Self::GenerateReport),
            8 => Some(Self::SearchStudents),
            9 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the interactive menu loop until the operator exits
pub fn run(repo: &mut Repository) {
    loop {
        display_menu();

        let option = prompt("Enter your choice (1-9): ")
            .parse::<u32>()
            .ok()
            .and_then(MenuOption::from_choice);

        let Some(option) = option else {
            println!("Invalid input. Please enter a number between 1 and 9.");
            pause();
            continue;
        };

        match option {
            MenuOption::AddStudent => add_student(repo),
            MenuOption::ViewStudents => view_students(repo),
            MenuOption::UpdateStudent => update_student(repo),
            MenuOption::DeleteStudent => delete_student(repo),
            MenuOption::EnrollCourse => enroll_course(repo),
            MenuOption::RecordGrade => record_grade(repo),
            MenuOption::GenerateReport => generate_report(repo),
            MenuOption::SearchStudents => search_students(repo),
            MenuOption::Exit => {
                println!("Exiting Student Management System. Goodbye!");
                break;
            }
        }
    }
}

fn display_menu() {
    println!("\n{}", "=".repeat(50));
    println!("{:^50}", "STUDENT MANAGEMENT SYSTEM");
    println!("{}", "=".repeat(50));
    println!("1. Add New Student");
    println!("2. View Students");
    println!("3. Update Student Information");
    println!("4. Delete Student");
    println!("5. Enroll in Course");
    println!("6. Record Grade");
    println!("7. Generate Student Report");
    println!("8. Search Students");
    println!("9. Exit");
    println!("{}", "=".repeat(50));
}

fn add_student(repo: &mut Repository) {
    println!("\n{}", "=".repeat(50));
    println!("{:^50}", "ADD NEW STUDENT");
    println!("{}", "=".repeat(50));

    let first_name = prompt("First Name: ");
    let last_name = prompt("Last Name: ");
    let email = prompt_until("Email: ", validate_email, "Invalid email format. Please try again.");
    let dob = prompt_until(
        "Date of Birth (YYYY-MM-DD): ",
        validate_date,
        "Invalid date format. Please use YYYY-MM-DD.",
    );

    match repo.add_student(first_name, last_name, email, dob) {
        Ok(student_id) => println!("\nStudent added successfully! Student ID: {student_id}"),
        Err(e) => eprintln!("✗ {e}"),
    }
    pause();
}

fn view_students(repo: &Repository) {
    roster::list(repo);
    pause();
}

fn update_student(repo: &mut Repository) {
    let student_id = prompt("Enter student ID to update: ");

    let Some(student) = repo.get(&student_id) else {
        println!("Student not found!");
        pause();
        return;
    };

    println!("\nCurrent Student Information:");
    println!("1. First Name: {}", student.first_name);
    println!("2. Last Name: {}", student.last_name);
    println!("3. Email: {}", student.email);
    println!("4. Date of Birth: {}", student.date_of_birth);

    let selector = prompt("\nEnter field number to update (1-4) or '0' to cancel: ");
    if selector == "0" {
        return;
    }

    let Ok(selector) = selector.parse::<u8>() else {
        println!("Invalid field number!");
        pause();
        return;
    };

    let value = match selector {
        1 => prompt("Enter new first name: "),
        2 => prompt("Enter new last name: "),
        3 => prompt_until(
            "Enter new email: ",
            validate_email,
            "Invalid email format. Please try again.",
        ),
        4 => prompt_until(
            "Enter new date of birth (YYYY-MM-DD): ",
            validate_date,
            "Invalid date format. Please use YYYY-MM-DD.",
        ),
        _ => {
            println!("Invalid field number!");
            pause();
            return;
        }
    };

    let result = UpdateField::from_selector(selector, value)
        .and_then(|field| repo.update_student(&student_id, field));
    match result {
        Ok(()) => println!("Student information updated successfully!"),
        Err(e) => eprintln!("✗ {e}"),
    }
    pause();
}

fn delete_student(repo: &mut Repository) {
    let student_id = prompt("Enter student ID to delete: ");

    let result = repo.delete_student(&student_id, |student| {
        confirm(&format!(
            "Are you sure you want to delete student {}? (y/n): ",
            student.student_id
        ))
    });

    match result {
        Ok(Outcome::Applied) => println!("Student deleted successfully!"),
        Ok(Outcome::Cancelled) => println!("Deletion cancelled."),
        Err(OpsError::NotFound(_)) => println!("Student not found!"),
        Err(e) => eprintln!("✗ {e}"),
    }
    pause();
}

fn enroll_course(repo: &mut Repository) {
    let student_id = prompt("Enter student ID: ");

    if !repo.contains(&student_id) {
        println!("Student not found!");
        pause();
        return;
    }

    let course_id = prompt("Enter course ID: ");

    match repo.enroll_course(&student_id, &course_id) {
        Ok(()) => {
            println!("Student {student_id} enrolled in course {course_id} successfully!");
        }
        Err(OpsError::AlreadyEnrolled { .. }) => {
            println!("Student is already enrolled in this course!");
        }
        Err(e) => eprintln!("✗ {e}"),
    }
    pause();
}

fn record_grade(repo: &mut Repository) {
    let student_id = prompt("Enter student ID: ");

    let Some(student) = repo.get(&student_id) else {
        println!("Student not found!");
        pause();
        return;
    };

    if student.enrollments.is_empty() {
        println!("Student is not enrolled in any courses!");
        pause();
        return;
    }

    println!("\nCourses enrolled:");
    for (i, enrollment) in student.enrollments.iter().enumerate() {
        println!(
            "{}. {} (Enrolled: {})",
            i + 1,
            enrollment.course_id,
            enrollment.enrollment_date
        );
    }

    let Ok(selection) = prompt("Select course to record grade for (number): ").parse::<usize>()
    else {
        println!("Please enter a valid number.");
        pause();
        return;
    };

    let grade = loop {
        let raw = prompt("Enter grade (0-100): ");
        match raw.parse::<f64>() {
            Ok(g) if (0.0..=100.0).contains(&g) => break g,
            Ok(_) => println!("Grade must be between 0 and 100."),
            Err(_) => println!("Invalid grade. Please enter a number."),
        }
    };

    let result = repo.record_grade(&student_id, selection, grade, |existing| {
        println!("Grade already recorded for this course: {existing}");
        confirm("Overwrite? (y/n): ")
    });

    match result {
        Ok(Outcome::Applied) => println!("Grade recorded successfully!"),
        Ok(Outcome::Cancelled) => {}
        Err(OpsError::InvalidSelection(_)) => println!("Invalid selection!"),
        Err(e) => eprintln!("✗ {e}"),
    }
    pause();
}

fn generate_report(repo: &Repository) {
    let student_id = prompt("Enter student ID: ");

    match repo.generate_report(&student_id) {
        Ok(report) => roster::print_student_report(&report),
        Err(OpsError::NotFound(_)) => println!("Student not found!"),
        Err(e) => eprintln!("✗ {e}"),
    }
    pause();
}

fn search_students(repo: &Repository) {
    let term = prompt("Enter search term (name or email): ");

    match repo.search_students(&term) {
        Ok(results) if results.is_empty() => {
            println!("No matching students found.");
        }
        Ok(mut results) => {
            roster::sort_for_display(&mut results);
            roster::print_student_table(&results);
        }
        Err(OpsError::EmptySearchTerm) => println!("Please enter a search term."),
        Err(e) => eprintln!("✗ {e}"),
    }
    pause();
}

/// Print a prompt and read one trimmed line from stdin
pub(crate) fn prompt(message: &str) -> String {
    print!("{message}");
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin().read_line(&mut line).ok();
    line.trim().to_string()
}

/// Re-prompt until the supplied predicate accepts the input
fn prompt_until(message: &str, valid: impl Fn(&str) -> bool, error: &str) -> String {
    loop {
        let value = prompt(message);
        if valid(&value) {
            return value;
        }
        println!("{error}");
    }
}

/// Ask a y/n question; only "y" (case-insensitive) confirms
pub(crate) fn confirm(message: &str) -> bool {
    prompt(message).eq_ignore_ascii_case("y")
}

fn pause() {
    let _ = prompt("\nPress Enter to continue...");
}
