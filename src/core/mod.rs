//! Core module: the student records data model and its operations

pub mod config;
pub mod error;
pub mod models;
pub mod ops;
pub mod report;
pub mod repository;
pub mod validation;

/// Returns the current version of the `campus-records` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
