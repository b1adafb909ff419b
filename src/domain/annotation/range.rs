//! Document ranges and ignore zones

use std::collections::BTreeSet;

/// A half-open byte range in document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextRange {
    pub from: usize,
    pub to: usize,
}

impl TextRange {
    pub fn new(from: usize, to: usize) -> Self {
        TextRange { from, to }
    }

    /// True when `other` lies fully within this range (boundaries inclusive)
    pub fn contains(&self, other: &TextRange) -> bool {
        self.from <= other.from && other.to <= self.to
    }
}

/// Deduplicated set of ranges that must never be decorated
#[derive(Debug, Clone, Default)]
pub struct IgnoreZones {
    zones: BTreeSet<TextRange>,
}

impl IgnoreZones {
    pub fn new() -> Self {
        IgnoreZones::default()
    }

    /// Add a zone; identical (from, to) pairs collapse to one entry
    pub fn insert(&mut self, zone: TextRange) {
        self.zones.insert(zone);
    }

    /// True when any zone fully contains the given range
    pub fn covers(&self, range: &TextRange) -> bool {
        self.zones.iter().any(|zone| zone.contains(range))
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }
}
