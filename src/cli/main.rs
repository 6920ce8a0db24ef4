//! Command-line interface entry point for `campus-records`

mod args;
mod commands;

use args::{Cli, Command};
use campus_records::config::Config;
use campus_records::logger::{set_level, set_level_from_str, Level};
use campus_records::repository::{LoadStatus, Repository};
use clap::Parser;
use std::path::Path;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Effective runtime log level: CLI flag overrides config; fallback warn
    if let Some(level) = args.log_level {
        set_level(level.into());
    } else if !set_level_from_str(&config.logging.level) {
        set_level(Level::Warn);
    }

    let verbose = args.verbose || config.logging.verbose;

    // Initialize file logging: CLI flag wins, otherwise config logging.file
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if campus_records::logger::init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    // Handle subcommands; the config command never touches the data file
    match args.command {
        Some(Command::Config { subcommand }) => {
            if let Err(e) = commands::config::run(subcommand, &mut config, &defaults) {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        }
        Some(Command::List) => {
            let repo = open_repository(&config);
            commands::roster::list(&repo);
        }
        Some(Command::Report { student_id }) => {
            let repo = open_repository(&config);
            commands::roster::report(&repo, &student_id);
        }
        Some(Command::Search { term }) => {
            let repo = open_repository(&config);
            commands::roster::search(&repo, &term);
        }
        Some(Command::Menu) | None => {
            let mut repo = open_repository(&config);
            commands::menu::run(&mut repo);
        }
    }
}

/// Open the repository at the configured data file path, reporting a
/// corrupt store to the operator before continuing with an empty set
fn open_repository(config: &Config) -> Repository {
    let path = Path::new(&config.paths.data_file);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    let (repo, status) = Repository::open(path);
    campus_records::debug!("Using data file: {}", repo.data_file().display());
    if let LoadStatus::Corrupt(e) = status {
        eprintln!(
            "✗ Error loading data from {}: {e}. Starting with empty database.",
            repo.data_file().display()
        );
    }
    repo
}
