use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::events::TimedEvent;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub launcher: LauncherConfig,
    #[serde(default)]
    pub title: TitleConfig,
    /// Timed events surfaced on the title screen
    #[serde(default)]
    pub events: Vec<TimedEvent>,
}

/// Window appearance and language settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Use the legacy (light) UI theme
    #[serde(default)]
    pub legacy_theme: bool,
    /// UI language code, e.g. "en" or "zh-CN"
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Directory holding `<texture>.png` sprites
    #[serde(default)]
    pub assets_dir: Option<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            legacy_theme: false,
            locale: default_locale(),
            assets_dir: None,
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

/// Title screen timing and backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleConfig {
    /// Base URL of the game API
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Seconds between player count refreshes
    #[serde(default = "default_stats_interval")]
    pub stats_interval_secs: u64,
    /// Fade in/out duration in milliseconds
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u64,
    /// Half-period of the splash text pulse in milliseconds
    #[serde(default = "default_splash_pulse_ms")]
    pub splash_pulse_ms: u64,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            stats_interval_secs: default_stats_interval(),
            fade_ms: default_fade_ms(),
            splash_pulse_ms: default_splash_pulse_ms(),
        }
    }
}

fn default_api_base() -> String {
    "https://api.pokerogue.net".to_string()
}

fn default_stats_interval() -> u64 {
    60
}

fn default_fade_ms() -> u64 {
    325
}

fn default_splash_pulse_ms() -> u64 {
    350
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("net", "titlescreen", "Titlescreen")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        let config_dir = dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            tracing::info!("Loaded configuration from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Directory sprites are loaded from.
    ///
    /// Falls back to `assets/` next to the working directory.
    pub fn assets_dir(&self) -> PathBuf {
        self.launcher
            .assets_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
