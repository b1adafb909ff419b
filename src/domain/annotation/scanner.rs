//! Candidate match scanning over text units

use super::pattern::TicketPattern;
use super::range::TextRange;

/// One text-bearing segment of a document view: a slice of text plus the
/// absolute document offset it starts at. Matches never cross unit boundaries.
#[derive(Debug, Clone, Copy)]
pub struct TextUnit<'a> {
    pub base: usize,
    pub text: &'a str,
}

impl<'a> TextUnit<'a> {
    pub fn new(base: usize, text: &'a str) -> Self {
        TextUnit { base, text }
    }
}

/// A candidate ticket match with its absolute document range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub range: TextRange,
    pub text: String,
}

/// Run the compiled pattern over every unit, yielding candidates in unit
/// order with absolute offsets. Produced fresh per scan; never cached.
pub fn scan<'a, I>(units: I, pattern: &TicketPattern) -> Vec<Match>
where
    I: IntoIterator<Item = TextUnit<'a>>,
{
    let mut candidates = Vec::new();

    for unit in units {
        for (start, end, text) in pattern.find_iter(unit.text) {
            candidates.push(Match {
                range: TextRange::new(unit.base + start, unit.base + end),
                text: text.to_string(),
            });
        }
    }

    candidates
}
