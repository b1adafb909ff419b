//! Initialize notes directory use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, NoteRepository};
use std::fs;
use std::path::Path;

/// Initialize a new tickmark directory at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    // Create repository for this path
    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .tickmark directory
    repo.initialize()?;

    // Create default config
    let config = Config::new();

    // Save config
    repo.save_config(&config)?;

    println!("Initialized tickmark directory at {}", path.display());
    println!("Prefixes: {}", config.prefixes.join(", "));
    println!("Base URL: {}", config.base_url);

    Ok(())
}
