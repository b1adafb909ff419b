//! Match acceptance: selection suppression, zone rejection, ordering

use std::collections::BTreeMap;

use super::range::{IgnoreZones, TextRange};
use super::scanner::Match;

/// Decide which candidate matches are accepted.
///
/// In order: a match whose range fully contains the active selection is
/// rejected (the cursor sitting inside a ticket keeps it as raw editable
/// text; partial overlap does not suppress); a match fully contained in any
/// ignore zone is rejected, boundary-inclusive; candidates sharing a start
/// offset collapse last-writer-wins. The result is ascending by start offset.
pub fn resolve(
    candidates: Vec<Match>,
    zones: &IgnoreZones,
    selection: Option<TextRange>,
) -> Vec<Match> {
    let mut by_offset: BTreeMap<usize, Match> = BTreeMap::new();

    for candidate in candidates {
        if let Some(active) = selection {
            if candidate.range.contains(&active) {
                continue;
            }
        }

        if zones.covers(&candidate.range) {
            continue;
        }

        by_offset.insert(candidate.range.from, candidate);
    }

    by_offset.into_values().collect()
}
