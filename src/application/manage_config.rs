//! Config management use case

use crate::error::{Result, TickmarkError};
use crate::infrastructure::{Config, FileSystemRepository, NoteRepository};

/// Service for managing annotation configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "base-url" => Ok(config.base_url.clone()),
            "styles" => Ok(config.use_styles.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TickmarkError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: base-url, styles, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "base-url" => {
                // Trailing slashes are stripped before persisting
                config.set_base_url(value);
            }
            "styles" => {
                let use_styles = value.parse::<bool>().map_err(|_| {
                    TickmarkError::Config(format!(
                        "Invalid styles value: '{}'. Use 'true' or 'false'",
                        value
                    ))
                })?;
                config.use_styles = use_styles;
            }
            "created" => {
                return Err(TickmarkError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TickmarkError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: base-url, styles",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }

    /// Add a ticket prefix
    pub fn add_prefix(&self, prefix: &str) -> Result<()> {
        if prefix.is_empty() {
            return Err(TickmarkError::Config(
                "Prefix must not be empty".to_string(),
            ));
        }

        let mut config = self.repository.load_config()?;

        if config.prefixes.iter().any(|p| p == prefix) {
            return Err(TickmarkError::Config(format!(
                "Prefix already configured: {}",
                prefix
            )));
        }

        config.prefixes.push(prefix.to_string());
        self.repository.save_config(&config)?;
        Ok(())
    }

    /// Remove a ticket prefix
    pub fn remove_prefix(&self, prefix: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        let before = config.prefixes.len();
        config.prefixes.retain(|p| p != prefix);

        if config.prefixes.len() == before {
            return Err(TickmarkError::Config(format!(
                "Prefix not configured: {}",
                prefix
            )));
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List configured prefixes in order
    pub fn list_prefixes(&self) -> Result<Vec<String>> {
        let config = self.repository.load_config()?;
        Ok(config.prefixes)
    }
}
