//! Non-interactive roster commands and shared table rendering

use campus_records::models::Student;
use campus_records::report::StudentReport;
use campus_records::repository::Repository;

/// Print the student records table for all students
pub fn list(repo: &Repository) {
    let mut students = repo.students();
    sort_for_display(&mut students);
    print_student_table(&students);
}

/// Print the detailed report for one student
pub fn report(repo: &Repository, student_id: &str) {
    match repo.generate_report(student_id) {
        Ok(report) => print_student_report(&report),
        Err(e) => eprintln!("✗ {e}"),
    }
}

/// Print the student records table for students matching a search term
pub fn search(repo: &Repository, term: &str) {
    match repo.search_students(term) {
        Ok(results) if results.is_empty() => println!("No matching students found."),
        Ok(mut results) => {
            sort_for_display(&mut results);
            print_student_table(&results);
        }
        Err(e) => eprintln!("✗ {e}"),
    }
}

/// Sort students by numeric ID for stable display (non-numeric IDs last)
pub fn sort_for_display(students: &mut [&Student]) {
    students.sort_by_key(|s| {
        s.student_id
            .parse::<u64>()
            .map_or((1, s.student_id.clone()), |n| (0, format!("{n:020}")))
    });
}

/// Render the tabular student listing used by view and search
pub fn print_student_table(students: &[&Student]) {
    println!("\n{}", "=".repeat(100));
    println!("{:^100}", "STUDENT RECORDS");
    println!("{}", "=".repeat(100));
    println!(
        "{:<10}{:<25}{:<30}{:<15}{:<20}",
        "ID", "Name", "Email", "DOB", "Courses"
    );
    println!("{}", "-".repeat(100));

    for student in students {
        println!(
            "{:<10}{:<25}{:<30}{:<15}{:<20}",
            student.student_id,
            student.full_name(),
            student.email,
            student.date_of_birth,
            student.enrollments.len()
        );
    }

    println!("{}", "=".repeat(100));
}

/// Render the detailed per-student report
pub fn print_student_report(report: &StudentReport) {
    println!("\n{}", "=".repeat(70));
    println!("{:^70}", format!("STUDENT REPORT: {}", report.full_name));
    println!("{}", "=".repeat(70));
    println!("Student ID: {}", report.student_id);
    println!("Email: {}", report.email);
    println!("Date of Birth: {}", report.date_of_birth);
    println!("\n{}", "-".repeat(70));
    println!("{:^70}", "COURSE ENROLLMENTS & GRADES");
    println!("{}", "-".repeat(70));

    if report.courses.is_empty() {
        println!("No course enrollments found.");
    } else {
        println!(
            "{:<15}{:<20}{:<10}{:<15}",
            "Course ID", "Enrollment Date", "Grade", "Status"
        );
        println!("{}", "-".repeat(70));

        for line in &report.courses {
            let grade_str = line
                .grade
                .map_or_else(|| "N/A".to_string(), |g| format!("{g:.1}"));
            println!(
                "{:<15}{:<20}{:<10}{:<15}",
                line.course_id, line.enrollment_date, grade_str, line.status
            );
        }
    }

    if let Some(gpa) = report.gpa {
        println!("\n{}", "-".repeat(70));
        println!("{:^70}", format!("Overall GPA: {gpa:.2}"));
    }

    println!("{}", "=".repeat(70));
}
