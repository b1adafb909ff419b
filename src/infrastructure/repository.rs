//! File system repository

use crate::error::{Result, TickmarkError};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A markdown note file, path relative to the repository root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub filename: String,
}

impl NoteEntry {
    pub fn new(filename: String) -> Self {
        NoteEntry { filename }
    }
}

/// Abstract repository for note operations
pub trait NoteRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .tickmark/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .tickmark/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .tickmark directory exists
    fn is_initialized(&self) -> bool;

    /// Create .tickmark directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of NoteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover notes root by walking up from current directory
    /// First checks TICKMARK_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check TICKMARK_ROOT environment variable first
        if let Ok(root_path) = std::env::var("TICKMARK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_tickmark_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TickmarkError::Config(format!(
                    "TICKMARK_ROOT is set to '{}' but no .tickmark directory found. \
                    Run 'tickmark init' in that directory or unset TICKMARK_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover notes root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_tickmark_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            // Try to move to parent directory
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .tickmark
                    return Err(TickmarkError::NotTickmarkDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .tickmark directory
    fn has_tickmark_dir(path: &Path) -> bool {
        path.join(".tickmark").is_dir()
    }
}

impl NoteRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_tickmark_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let tickmark_dir = self.root.join(".tickmark");

        if tickmark_dir.exists() {
            return Err(TickmarkError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&tickmark_dir)?;
        Ok(())
    }
}

// Note operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Check if a note file exists
    pub fn note_exists(&self, filename: &str) -> bool {
        self.root.join(filename).exists()
    }

    /// Read note content (returns empty string if file doesn't exist)
    pub fn read_note(&self, filename: &str) -> Result<String> {
        let path = self.root.join(filename);

        if !path.exists() {
            return Ok(String::new());
        }

        fs::read_to_string(&path).map_err(TickmarkError::Io)
    }

    /// Write note content (creates if doesn't exist, overwrites if exists)
    pub fn write_note(&self, filename: &str, content: &str) -> Result<()> {
        let path = self.root.join(filename);

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, content).map_err(TickmarkError::Io)
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    /// List all markdown notes under the root, recursively, sorted by path.
    /// Dot-directories (including .tickmark itself) are skipped.
    pub fn list_notes(&self) -> Result<Vec<NoteEntry>> {
        let mut notes = Vec::new();

        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let Some(leaf) = rel.file_name().and_then(|s| s.to_str()) else {
                continue;
            };

            // Only consider markdown files.
            if !leaf.ends_with(".md") {
                continue;
            }

            if let Some(filename) = Self::normalize_relative_path(rel) {
                notes.push(NoteEntry::new(filename));
            }
        }

        notes.sort_by(|a, b| a.filename.cmp(&b.filename));

        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_new_repository() {
        let path = PathBuf::from("/tmp/test");
        let repo = FileSystemRepository::new(path.clone());
        assert_eq!(repo.root, path);
    }

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        // Not initialized yet
        assert!(!repo.is_initialized());

        // Create .tickmark directory
        repo.initialize().unwrap();

        // Now it should be initialized
        assert!(repo.is_initialized());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        // First initialization succeeds
        repo.initialize().unwrap();

        // Second initialization fails
        let result = repo.initialize();
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();

        // Create .tickmark in root
        fs::create_dir(temp.path().join(".tickmark")).unwrap();

        // Create a subdirectory
        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        // Discover from subdirectory should find root
        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_tickmark() {
        let temp = TempDir::new().unwrap();

        // No .tickmark directory
        let result = FileSystemRepository::discover_from(temp.path());
        assert!(result.is_err());

        match result.unwrap_err() {
            TickmarkError::NotTickmarkDirectory(_) => {}
            _ => panic!("Expected NotTickmarkDirectory error"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        // Initialize
        repo.initialize().unwrap();

        // Create and save config
        let config = Config::new();
        repo.save_config(&config).unwrap();

        // Load config
        let loaded = repo.load_config().unwrap();
        assert_eq!(loaded.prefixes, config.prefixes);
    }

    #[test]
    fn test_read_note_missing() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        // Reading nonexistent file returns empty string
        let content = repo.read_note("nonexistent.md").unwrap();
        assert_eq!(content, "");
    }

    #[test]
    fn test_write_and_read_note() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        let content = "# My Note\n\nSee HD-1080.";
        repo.write_note("note.md", content).unwrap();

        let read_content = repo.read_note("note.md").unwrap();
        assert_eq!(read_content, content);
    }

    #[test]
    fn test_write_note_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        // Write to nested path that doesn't exist
        repo.write_note("sub/dir/note.md", "content").unwrap();

        // Verify parent dirs were created
        assert!(temp.path().join("sub").join("dir").join("note.md").exists());
    }

    #[test]
    fn test_list_notes_empty() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        let notes = repo.list_notes().unwrap();
        assert_eq!(notes.len(), 0);
    }

    #[test]
    fn test_list_notes_ignores_other_files() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        fs::write(temp.path().join("a.md"), "note").unwrap();
        fs::write(temp.path().join("readme.txt"), "text").unwrap();

        let notes = repo.list_notes().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].filename, "a.md");
    }

    #[test]
    fn test_list_notes_recursive_sorted_and_skips_dot_dirs() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        fs::write(temp.path().join("b.md"), "root").unwrap();
        fs::create_dir_all(temp.path().join("nested").join("project")).unwrap();
        fs::write(
            temp.path().join("nested").join("project").join("a.md"),
            "nested",
        )
        .unwrap();
        fs::create_dir_all(temp.path().join(".tickmark")).unwrap();
        fs::write(temp.path().join(".tickmark").join("hidden.md"), "hidden").unwrap();

        let notes = repo.list_notes().unwrap();
        let filenames = notes
            .iter()
            .map(|entry| entry.filename.as_str())
            .collect::<Vec<_>>();

        assert_eq!(filenames, vec!["b.md", "nested/project/a.md"]);
    }

    #[test]
    fn test_discover_with_tickmark_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("TICKMARK_ROOT");

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".tickmark")).unwrap();

        // Set TICKMARK_ROOT
        std::env::set_var("TICKMARK_ROOT", temp.path());

        let repo = FileSystemRepository::discover().unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_tickmark_root_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("TICKMARK_ROOT");

        let temp = TempDir::new().unwrap();
        // No .tickmark directory

        std::env::set_var("TICKMARK_ROOT", temp.path());

        let result = FileSystemRepository::discover();
        assert!(result.is_err());

        match result.unwrap_err() {
            TickmarkError::Config(msg) => {
                assert!(msg.contains("no .tickmark directory"));
            }
            _ => panic!("Expected Config error"),
        }
    }
}
