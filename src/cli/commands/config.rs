//! Config command handler

use super::menu::confirm;
use crate::args::ConfigSubcommand;
use campus_records::config::Config;

/// Dispatch config subcommands; no subcommand prints the full configuration
///
/// # Errors
/// Returns a message describing an unknown key, an invalid value, or a
/// failed config-file write; the caller reports it and exits non-zero.
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => {
            let value = config
                .get(&key)
                .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
            println!("{value}");
        }
        Some(ConfigSubcommand::Set { key, value }) => {
            config.set(&key, &value)?;
            config
                .save()
                .map_err(|e| format!("Failed to save config: {e}"))?;
            println!("✓ Set {key} = {value}");
        }
        Some(ConfigSubcommand::Unset { key }) => {
            config.unset(&key, defaults)?;
            config
                .save()
                .map_err(|e| format!("Failed to save config: {e}"))?;
            println!("✓ Reset {key} to default");
        }
        Some(ConfigSubcommand::Reset) => {
            if !Config::get_config_file_path().exists() {
                println!("✓ Config is already at defaults");
            } else if confirm("Are you sure you want to reset config to defaults? (y/n): ") {
                Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
                println!("✓ Config reset to defaults");
            } else {
                println!("✗ Reset cancelled");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_get_key_is_an_error() {
        let mut config = Config::from_defaults();
        let defaults = Config::from_defaults();

        let result = run(
            Some(ConfigSubcommand::Get {
                key: Some("bogus".to_string()),
            }),
            &mut config,
            &defaults,
        );

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("bogus"));
    }

    #[test]
    fn test_invalid_value_errors_before_saving() {
        let mut config = Config::from_defaults();
        let defaults = Config::from_defaults();

        // `set` rejects the value, so the error surfaces without touching
        // the config file
        let result = run(
            Some(ConfigSubcommand::Set {
                key: "verbose".to_string(),
                value: "not-a-bool".to_string(),
            }),
            &mut config,
            &defaults,
        );

        assert!(result.is_err());
        assert!(!config.logging.verbose);
    }

    #[test]
    fn test_unknown_unset_key_is_an_error() {
        let mut config = Config::from_defaults();
        let defaults = Config::from_defaults();

        let result = run(
            Some(ConfigSubcommand::Unset {
                key: "bogus".to_string(),
            }),
            &mut config,
            &defaults,
        );

        assert!(result.is_err());
    }
}
