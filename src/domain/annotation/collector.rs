//! Ignore-zone collection for the live view

use regex::Regex;
use std::sync::OnceLock;

use super::range::{IgnoreZones, TextRange};
use crate::domain::view::SourceView;

/// Regex for hashtags: #word, #word-with-dashes, #word_with_underscores
fn hashtag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"#([a-zA-Z0-9_-]+)").unwrap())
}

/// Collect every range of the snapshot that must never be decorated:
/// the full range of each structural ignore-zone node (headings, quotes,
/// callouts, code, raw HTML, strikethrough) plus any inline hashtag span
/// found in the text units. Zones are deduplicated by identical (from, to)
/// pairs. Pure function of the snapshot; the selection is not a zone and is
/// applied per-match at the resolver instead.
pub fn collect_ignore_zones(view: &SourceView) -> IgnoreZones {
    let mut zones = IgnoreZones::new();

    for node in view.nodes() {
        if node.kind.is_ignore_zone() {
            zones.insert(node.range);
        }
    }

    for unit in view.text_units() {
        for found in hashtag_regex().find_iter(unit.text) {
            zones.insert(TextRange::new(
                unit.base + found.start(),
                unit.base + found.end(),
            ));
        }
    }

    zones
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_zones_collected() {
        let source = "# Title\n\nbody `HD-1` text";
        let view = SourceView::parse(source);
        let zones = collect_ignore_zones(&view);

        // Heading line and the inline code span
        assert!(zones.covers(&TextRange::new(2, 7)));
        let code_from = source.find('`').unwrap();
        assert!(zones.covers(&TextRange::new(code_from + 1, code_from + 5)));
    }

    #[test]
    fn test_hashtag_spans_are_zones() {
        let source = "note #HD-12 trailer";
        let view = SourceView::parse(source);
        let zones = collect_ignore_zones(&view);

        // "#HD-12" occupies [5, 11); the embedded ticket text is covered
        assert!(zones.covers(&TextRange::new(6, 11)));
        assert!(!zones.covers(&TextRange::new(12, 19)));
    }

    #[test]
    fn test_plain_text_has_no_zones() {
        let view = SourceView::parse("See HD-1080 and HD-42 for details");
        let zones = collect_ignore_zones(&view);
        assert!(zones.is_empty());
    }

    #[test]
    fn test_one_zone_per_hashtag_occurrence() {
        let view = SourceView::parse("#work #work");
        let zones = collect_ignore_zones(&view);
        assert_eq!(zones.len(), 2);
    }
}
