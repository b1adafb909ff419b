//! Ticket pattern compilation

use crate::error::{Result, TickmarkError};
use regex::Regex;

/// Compiled matcher for `PREFIX-NUMBER` ticket identifiers.
///
/// Built from the configured prefix list; must be rebuilt whenever that list
/// changes, so it is derived fresh from `Settings` on engine construction.
#[derive(Debug, Clone)]
pub struct TicketPattern {
    regex: Regex,
}

impl TicketPattern {
    /// Compile a pattern matching any configured prefix followed by `-` and
    /// digits, as a whole word, case-sensitively.
    ///
    /// Empty prefix strings are filtered out; an empty resulting list is the
    /// "no prefixes configured" state and yields `TickmarkError::NoPrefixes`.
    pub fn compile<S: AsRef<str>>(prefixes: &[S]) -> Result<Self> {
        let escaped: Vec<String> = prefixes
            .iter()
            .map(|p| p.as_ref())
            .filter(|p| !p.is_empty())
            .map(regex::escape)
            .collect();

        if escaped.is_empty() {
            return Err(TickmarkError::NoPrefixes);
        }

        let source = format!(r"\b({})-\d+\b", escaped.join("|"));
        let regex =
            Regex::new(&source).map_err(|e| TickmarkError::Pattern(e.to_string()))?;

        Ok(TicketPattern { regex })
    }

    /// Iterate non-overlapping matches within one text slice, yielding
    /// (local start, local end, matched text).
    pub fn find_iter<'s, 't>(
        &'s self,
        text: &'t str,
    ) -> impl Iterator<Item = (usize, usize, &'t str)> + use<'s, 't> {
        self.regex
            .find_iter(text)
            .map(move |m| (m.start(), m.end(), m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(prefixes: &[&str]) -> TicketPattern {
        TicketPattern::compile(prefixes).unwrap()
    }

    #[test]
    fn test_single_prefix() {
        let pattern = compile(&["HD"]);
        let matches: Vec<_> = pattern.find_iter("See HD-1080 and HD-42 for details").collect();
        assert_eq!(matches, vec![(4, 11, "HD-1080"), (16, 21, "HD-42")]);
    }

    #[test]
    fn test_multiple_prefixes() {
        let pattern = compile(&["HD", "OPS"]);
        let matches: Vec<_> = pattern.find_iter("OPS-7 blocks HD-9").collect();
        assert_eq!(matches, vec![(0, 5, "OPS-7"), (13, 17, "HD-9")]);
    }

    #[test]
    fn test_word_boundaries() {
        let pattern = compile(&["HD"]);
        // Leading boundary: AHD-1 must not match; trailing: HD-1a must not match
        assert_eq!(pattern.find_iter("AHD-1").count(), 0);
        assert_eq!(pattern.find_iter("HD-1a").count(), 0);
        // Every alternative gets the boundary, not just the first
        let pattern = compile(&["OPS", "HD"]);
        assert_eq!(pattern.find_iter("AHD-1").count(), 0);
    }

    #[test]
    fn test_case_sensitive() {
        let pattern = compile(&["HD"]);
        assert_eq!(pattern.find_iter("hd-1080").count(), 0);
    }

    #[test]
    fn test_requires_digits() {
        let pattern = compile(&["HD"]);
        assert_eq!(pattern.find_iter("HD- HD-x HD").count(), 0);
    }

    #[test]
    fn test_empty_list_is_no_prefixes() {
        let result = TicketPattern::compile::<&str>(&[]);
        assert!(matches!(result, Err(TickmarkError::NoPrefixes)));
    }

    #[test]
    fn test_blank_prefixes_filtered() {
        // Blank entries are dropped rather than producing an empty alternative
        let pattern = TicketPattern::compile(&["", "HD"]).unwrap();
        let matches: Vec<_> = pattern.find_iter("x HD-1 y").collect();
        assert_eq!(matches, vec![(2, 6, "HD-1")]);

        let result = TicketPattern::compile(&["", ""]);
        assert!(matches!(result, Err(TickmarkError::NoPrefixes)));
    }

    #[test]
    fn test_metacharacters_escaped() {
        // A prefix containing regex metacharacters matches literally
        let pattern = compile(&["A+B"]);
        assert_eq!(
            pattern.find_iter("see A+B-12").collect::<Vec<_>>(),
            vec![(4, 10, "A+B-12")]
        );
        assert_eq!(pattern.find_iter("AAB-12").count(), 0);
    }

    #[test]
    fn test_repeated_identical_tokens() {
        let pattern = compile(&["HD"]);
        let matches: Vec<_> = pattern.find_iter("HD-7 HD-7 HD-7").collect();
        assert_eq!(
            matches,
            vec![(0, 4, "HD-7"), (5, 9, "HD-7"), (10, 14, "HD-7")]
        );
    }
}
