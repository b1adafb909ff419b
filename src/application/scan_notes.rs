//! Ticket scanning use case
//!
//! Runs the live annotation pipeline over note snapshots and reports the
//! accepted matches.

use crate::domain::annotation::{LinkRenderer, TextRange};
use crate::domain::view::SourceView;
use crate::domain::AnnotationEngine;
use crate::error::{Result, TickmarkError};
use crate::infrastructure::{FileSystemRepository, NoteEntry, NoteRepository};

/// One accepted ticket match in a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRecord {
    pub filename: String,
    pub range: TextRange,
    pub text: String,
    pub href: String,
}

/// Service for scanning notes for ticket identifiers
pub struct ScanService {
    repository: FileSystemRepository,
}

impl ScanService {
    /// Create a new scan service
    pub fn new(repository: FileSystemRepository) -> Self {
        ScanService { repository }
    }

    /// Execute the scan.
    ///
    /// With `file` set, scans that single note; `cursor` then simulates the
    /// editor selection (the match under the cursor stays raw). Without
    /// `file`, scans every note under the root.
    ///
    /// # Errors
    ///
    /// Returns `NoPrefixes` when no ticket prefix is configured; scanning is
    /// skipped entirely in that state.
    pub fn execute(&self, file: Option<&str>, cursor: Option<usize>) -> Result<Vec<TicketRecord>> {
        let config = self.repository.load_config()?;
        let settings = config.settings();
        let engine = AnnotationEngine::from_settings(&settings)?;
        let renderer = LinkRenderer::new(&settings);

        let notes = match file {
            Some(filename) => {
                if !self.repository.note_exists(filename) {
                    return Err(TickmarkError::Config(format!(
                        "Note not found: {}",
                        filename
                    )));
                }
                vec![NoteEntry::new(filename.to_string())]
            }
            None => self.repository.list_notes()?,
        };

        let mut records = Vec::new();

        for note in notes {
            let content = self.repository.read_note(&note.filename)?;
            if content.is_empty() {
                continue;
            }

            let mut view = SourceView::parse(&content);
            if let Some(offset) = cursor {
                view = view.with_cursor(offset);
            }

            for accepted in engine.accepted_matches(&view) {
                records.push(TicketRecord {
                    filename: note.filename.clone(),
                    range: accepted.range,
                    href: renderer.href(&accepted.text),
                    text: accepted.text,
                });
            }
        }

        Ok(records)
    }
}
