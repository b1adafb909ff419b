//! Note annotation use case
//!
//! Runs the rendered pipeline: markdown notes become HTML with ticket
//! identifiers spliced in as tracker links.

use crate::domain::view::tree_from_markdown;
use crate::domain::AnnotationEngine;
use crate::error::{Result, TickmarkError};
use crate::infrastructure::{FileSystemRepository, NoteRepository};
use std::path::{Path, PathBuf};

// Default output location, relative to the repository root
const DEFAULT_OUTPUT_DIR: &str = ".tickmark/html";

/// Service for annotating notes into HTML
pub struct AnnotateService {
    repository: FileSystemRepository,
}

impl AnnotateService {
    /// Create a new annotate service
    pub fn new(repository: FileSystemRepository) -> Self {
        AnnotateService { repository }
    }

    /// Render a single note to annotated HTML.
    ///
    /// # Errors
    ///
    /// Returns `NoPrefixes` when no ticket prefix is configured, or a config
    /// error when the note does not exist.
    pub fn render_note(&self, filename: &str) -> Result<String> {
        if !self.repository.note_exists(filename) {
            return Err(TickmarkError::Config(format!(
                "Note not found: {}",
                filename
            )));
        }

        let config = self.repository.load_config()?;
        let settings = config.settings();
        let engine = AnnotationEngine::from_settings(&settings)?;

        let content = self.repository.read_note(filename)?;
        let mut tree = tree_from_markdown(&content);
        engine.rendered_pass(&mut tree, &settings);

        Ok(tree.to_html())
    }

    /// Annotate every note under the root into `out_dir` (default
    /// `.tickmark/html/`), mirroring relative paths with an `.html`
    /// extension. Returns the written paths.
    pub fn annotate_all(&self, out_dir: Option<&Path>) -> Result<Vec<PathBuf>> {
        let config = self.repository.load_config()?;
        let settings = config.settings();
        let engine = AnnotationEngine::from_settings(&settings)?;

        let out_dir = out_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.repository.root().join(DEFAULT_OUTPUT_DIR));

        let mut written = Vec::new();

        for note in self.repository.list_notes()? {
            let content = self.repository.read_note(&note.filename)?;

            let mut tree = tree_from_markdown(&content);
            engine.rendered_pass(&mut tree, &settings);

            let target = out_dir.join(html_filename(&note.filename));
            if let Some(parent) = target.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&target, tree.to_html())?;
            written.push(target);
        }

        Ok(written)
    }
}

fn html_filename(filename: &str) -> String {
    match filename.strip_suffix(".md") {
        Some(stem) => format!("{}.html", stem),
        None => format!("{}.html", filename),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Config;
    use tempfile::TempDir;

    fn sandbox() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        (temp, repo)
    }

    #[test]
    fn test_render_note_splices_links() {
        let (_temp, repo) = sandbox();
        repo.write_note("a.md", "See HD-1080 for details").unwrap();

        let html = AnnotateService::new(repo).render_note("a.md").unwrap();
        assert!(html.contains(
            "<a class=\"tickmark-link\" href=\"https://jira.example.com/browse/HD-1080\">HD-1080</a>"
        ));
        assert!(html.contains("See "));
    }

    #[test]
    fn test_render_note_missing_fails() {
        let (_temp, repo) = sandbox();
        let result = AnnotateService::new(repo).render_note("missing.md");
        assert!(result.is_err());
    }

    #[test]
    fn test_render_note_without_prefixes_fails() {
        let (_temp, repo) = sandbox();
        let mut config = repo.load_config().unwrap();
        config.prefixes.clear();
        repo.save_config(&config).unwrap();
        repo.write_note("a.md", "HD-1").unwrap();

        let result = AnnotateService::new(repo).render_note("a.md");
        assert!(matches!(result, Err(TickmarkError::NoPrefixes)));
    }

    #[test]
    fn test_annotate_all_mirrors_paths() {
        let (temp, repo) = sandbox();
        repo.write_note("a.md", "HD-1").unwrap();
        repo.write_note("nested/b.md", "HD-2").unwrap();

        let written = AnnotateService::new(repo).annotate_all(None).unwrap();

        let expected_root = temp.path().join(".tickmark/html");
        assert_eq!(
            written,
            vec![expected_root.join("a.html"), expected_root.join("nested/b.html")]
        );
        assert!(expected_root.join("nested/b.html").exists());

        let html = std::fs::read_to_string(expected_root.join("a.html")).unwrap();
        assert!(html.contains("/browse/HD-1"));
    }

    #[test]
    fn test_annotate_all_custom_out_dir() {
        let (temp, repo) = sandbox();
        repo.write_note("a.md", "HD-1").unwrap();

        let out = temp.path().join("site");
        let written = AnnotateService::new(repo)
            .annotate_all(Some(&out))
            .unwrap();

        assert_eq!(written, vec![out.join("a.html")]);
        assert!(out.join("a.html").exists());
    }

    #[test]
    fn test_html_filename() {
        assert_eq!(html_filename("note.md"), "note.html");
        assert_eq!(html_filename("dir/note.md"), "dir/note.html");
        assert_eq!(html_filename("odd"), "odd.html");
    }
}
