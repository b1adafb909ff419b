//! Output formatting utilities

use crate::application::TicketRecord;
use std::path::PathBuf;

/// Format a list of ticket records for display
pub fn format_match_list(records: &[TicketRecord]) -> String {
    if records.is_empty() {
        return "No ticket identifiers found".to_string();
    }

    let mut output = String::new();
    for record in records {
        output.push_str(&format!(
            "{}:{}  {}  {}\n",
            record.filename, record.range.from, record.text, record.href
        ));
    }
    output
}

/// Format the configured prefix list for display.
pub fn format_prefix_list(prefixes: &[String]) -> String {
    if prefixes.is_empty() {
        return "No prefixes configured".to_string();
    }

    let mut output = String::new();
    for prefix in prefixes {
        output.push_str(prefix);
        output.push('\n');
    }

    output
}

/// Format the list of files written by an annotate run
pub fn format_written_list(written: &[PathBuf]) -> String {
    if written.is_empty() {
        return "No notes found".to_string();
    }

    let mut output = format!("Annotated {} note(s)\n", written.len());
    for path in written {
        output.push_str(&format!("  {}\n", path.display()));
    }
    output
}
