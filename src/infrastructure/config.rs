//! Configuration management

use crate::domain::Settings;
use crate::error::{Result, TickmarkError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub prefixes: Vec<String>,
    pub base_url: String,
    pub use_styles: bool,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            prefixes: vec!["HD".to_string()],
            base_url: "https://jira.example.com".to_string(),
            use_styles: true,
            created: Utc::now(),
        }
    }

    /// Load config from .tickmark/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".tickmark").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TickmarkError::NotTickmarkDirectory(path.to_path_buf())
            } else {
                TickmarkError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TickmarkError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .tickmark/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let tickmark_dir = path.join(".tickmark");
        let config_path = tickmark_dir.join("config.toml");

        // Ensure .tickmark directory exists
        if !tickmark_dir.exists() {
            fs::create_dir(&tickmark_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TickmarkError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Set the base URL, stripping trailing slashes before it is persisted
    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = url.trim_end_matches('/').to_string();
    }

    /// Derive the normalized runtime settings for one annotation pass
    pub fn settings(&self) -> Settings {
        Settings::new(self.prefixes.iter().cloned(), &self.base_url, self.use_styles)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
