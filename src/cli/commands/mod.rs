//! CLI command handlers

pub mod config;
pub mod menu;
pub mod roster;
