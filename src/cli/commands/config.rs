//! Configuration management commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::cli::output::{OutputFormat, print_formatted, print_success};
use crate::config::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration (file plus command-line overrides)
    Show,

    /// Get a specific config value
    Get {
        /// Config key (e.g., "launcher.locale", "title.fade_ms")
        key: String,
    },

    /// Set a config value in the config file
    Set {
        /// Config key (e.g., "launcher.locale", "title.fade_ms")
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

#[derive(Serialize)]
struct ConfigPathResult {
    path: String,
    exists: bool,
}

pub fn run(command: ConfigCommands, config: &Config, format: OutputFormat, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => show(config, format),
        ConfigCommands::Get { key } => get(config, &key, format),
        ConfigCommands::Set { key, value } => set(&key, &value, quiet),
        ConfigCommands::Path => path(format),
    }
}

fn show(config: &Config, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(config)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let toml = toml::to_string_pretty(config)?;
            println!("{}", toml);
        }
    }

    Ok(())
}

fn get(config: &Config, key: &str, format: OutputFormat) -> Result<()> {
    let value = get_config_value(config, key)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&value)?);
        }
        OutputFormat::Text => {
            println!("{}", value);
        }
    }

    Ok(())
}

fn get_config_value(config: &Config, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["launcher", "legacy_theme"] => Ok(config.launcher.legacy_theme.to_string()),
        ["launcher", "locale"] => Ok(config.launcher.locale.clone()),
        ["launcher", "assets_dir"] => Ok(config.assets_dir().to_string_lossy().to_string()),
        ["title", "api_base"] => Ok(config.title.api_base.clone()),
        ["title", "stats_interval_secs"] => Ok(config.title.stats_interval_secs.to_string()),
        ["title", "fade_ms"] => Ok(config.title.fade_ms.to_string()),
        ["title", "splash_pulse_ms"] => Ok(config.title.splash_pulse_ms.to_string()),
        _ => anyhow::bail!("Unknown config key: {}", key),
    }
}

fn set(key: &str, value: &str, quiet: bool) -> Result<()> {
    let mut config = Config::load()?;

    set_config_value(&mut config, key, value)?;
    config.save()?;

    print_success(&format!("Set {} = {}", key, value), quiet);
    Ok(())
}

fn set_config_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["launcher", "legacy_theme"] => {
            config.launcher.legacy_theme = value.parse()?;
        }
        ["launcher", "locale"] => {
            config.launcher.locale = value.to_string();
        }
        ["launcher", "assets_dir"] => {
            config.launcher.assets_dir = Some(value.to_string());
        }
        ["title", "api_base"] => {
            config.title.api_base = value.to_string();
        }
        ["title", "stats_interval_secs"] => {
            let secs: u64 = value.parse()?;
            if secs == 0 {
                anyhow::bail!("stats_interval_secs must be at least 1");
            }
            config.title.stats_interval_secs = secs;
        }
        ["title", "fade_ms"] => {
            config.title.fade_ms = value.parse()?;
        }
        ["title", "splash_pulse_ms"] => {
            config.title.splash_pulse_ms = value.parse()?;
        }
        _ => anyhow::bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

fn path(format: OutputFormat) -> Result<()> {
    let path = Config::config_path()?;
    let exists = path.exists();

    let result = ConfigPathResult {
        path: path.to_string_lossy().to_string(),
        exists,
    };

    print_formatted(&result, format, |r| {
        format!("{}{}", r.path, if r.exists { "" } else { " (not found)" })
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_keys() {
        let config = Config::default();
        assert_eq!(get_config_value(&config, "launcher.locale").unwrap(), "en");
        assert_eq!(get_config_value(&config, "title.fade_ms").unwrap(), "325");
        assert!(get_config_value(&config, "title.nope").is_err());
    }

    #[test]
    fn test_set_values() {
        let mut config = Config::default();
        set_config_value(&mut config, "launcher.legacy_theme", "true").unwrap();
        set_config_value(&mut config, "title.splash_pulse_ms", "500").unwrap();
        assert!(config.launcher.legacy_theme);
        assert_eq!(config.title.splash_pulse_ms, 500);

        assert!(set_config_value(&mut config, "title.fade_ms", "fast").is_err());
        assert!(set_config_value(&mut config, "title.stats_interval_secs", "0").is_err());
        assert!(set_config_value(&mut config, "events", "x").is_err());
    }
}
