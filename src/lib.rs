//! Shared library for `campus-records`
//! Contains the student records core used by the CLI binary.

pub mod core;
pub mod logger;

pub use crate::core::*;
