//! Error types for tickmark

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tickmark application
#[derive(Debug, Error)]
pub enum TickmarkError {
    #[error("Not a tickmark directory: {0}")]
    NotTickmarkDirectory(PathBuf),

    #[error("No ticket prefixes configured")]
    NoPrefixes,

    #[error("Invalid ticket pattern: {0}")]
    Pattern(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TickmarkError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TickmarkError::NotTickmarkDirectory(_) => 2,
            TickmarkError::NoPrefixes => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TickmarkError::NotTickmarkDirectory(path) => {
                format!(
                    "Not a tickmark directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'tickmark init' in this directory to start annotating notes\n\
                    • Navigate to an existing tickmark directory\n\
                    • Set TICKMARK_ROOT environment variable to your notes path",
                    path.display()
                )
            }
            TickmarkError::NoPrefixes => {
                "No ticket prefixes configured\n\n\
                Suggestions:\n\
                • Add a prefix: tickmark prefix add HD\n\
                • If your tickets look like HD-1080, the prefix is 'HD'\n\
                • List configured prefixes: tickmark prefix list"
                    .to_string()
            }
            TickmarkError::Config(msg) => {
                if msg.contains("base-url") {
                    format!(
                        "{}\n\n\
                        Example: tickmark config base-url https://jira.example.com",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TickmarkError
pub type Result<T> = std::result::Result<T, TickmarkError>;
