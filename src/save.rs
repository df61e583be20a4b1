//! Player save data the title screen reads from.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Player character gender; picks which rival appears on the title screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerGender {
    #[default]
    Male,
    Female,
}

impl PlayerGender {
    pub fn name(&self) -> &'static str {
        match self {
            PlayerGender::Male => "Male",
            PlayerGender::Female => "Female",
        }
    }
}

/// Persistent player data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameData {
    #[serde(default)]
    pub gender: PlayerGender,
}

impl GameData {
    /// Get the save file path
    pub fn save_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("net", "titlescreen", "Titlescreen")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;

        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join("save.json"))
    }

    /// Load save data, falling back to defaults when no save exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::save_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No save file found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let data = serde_json::from_str(&content)?;
        tracing::debug!("Loaded save data from {:?}", path);
        Ok(data)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::save_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved player data to {:?}", path);
        Ok(())
    }
}
