//! Annotation pipeline orchestration

use super::collector::collect_ignore_zones;
use super::pattern::TicketPattern;
use super::render::{Decoration, LinkRenderer};
use super::resolver::resolve;
use super::scanner::{scan, Match};
use crate::domain::settings::Settings;
use crate::domain::view::{Element, MarkupNode, SourceView};
use crate::error::Result;

/// Block-level tags the rendered pass scans for ticket text
const SCAN_TAGS: &[&str] = &[
    "p", "td", "li", "h1", "h2", "h3", "h4", "h5", "h6", "div",
];

/// Tags passed through unmodified, recursively, contents never scanned.
/// Anchors are included so re-running the pass over already-annotated
/// markup is a no-op.
const PASSTHROUGH_TAGS: &[&str] = &["code", "pre", "del", "a"];

/// Class names that mark an element as pass-through
const PASSTHROUGH_CLASSES: &[&str] = &["tag", "comment"];

/// Runs the match-and-decorate pipeline in both rendering contexts.
///
/// Holds the pattern compiled from one `Settings` snapshot; construct a new
/// engine whenever the prefix list changes, since a stale pattern silently
/// misses added or removed prefixes.
pub struct AnnotationEngine {
    pattern: TicketPattern,
}

impl AnnotationEngine {
    /// Compile the engine for the given settings.
    ///
    /// Fails with `NoPrefixes` when no usable prefix is configured; callers
    /// surface that once to the user instead of scanning.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(AnnotationEngine {
            pattern: TicketPattern::compile(settings.prefixes())?,
        })
    }

    /// Accepted matches for a live snapshot: collect zones, scan, resolve.
    pub fn accepted_matches(&self, view: &SourceView) -> Vec<Match> {
        let zones = collect_ignore_zones(view);
        let candidates = scan(view.text_units(), &self.pattern);
        resolve(candidates, &zones, view.primary_selection())
    }

    /// Live pass: the positionally sorted, non-overlapping decoration set
    /// for one editor update. Empty when the view is in raw source mode.
    pub fn live_decorations(&self, view: &SourceView, settings: &Settings) -> Vec<Decoration> {
        if view.is_source_mode() {
            return Vec::new();
        }

        let renderer = LinkRenderer::new(settings);
        self.accepted_matches(view)
            .into_iter()
            .map(|m| Decoration {
                range: m.range,
                widget: renderer.element(&m.text),
            })
            .collect()
    }

    /// Rendered pass: splice anchor elements into the subtree in place.
    ///
    /// Applies to the element itself when its tag is in the scan set,
    /// otherwise to every scan-set descendant; pass-through elements are
    /// left untouched at any depth.
    pub fn rendered_pass(&self, element: &mut Element, settings: &Settings) {
        let renderer = LinkRenderer::new(settings);
        if SCAN_TAGS.contains(&element.tag.as_str()) {
            self.splice_element(element, &renderer);
        } else {
            self.descend(element, &renderer);
        }
    }

    fn descend(&self, element: &mut Element, renderer: &LinkRenderer) {
        for child in element.children.iter_mut() {
            if let MarkupNode::Element(el) = child {
                if SCAN_TAGS.contains(&el.tag.as_str()) {
                    self.splice_element(el, renderer);
                } else {
                    self.descend(el, renderer);
                }
            }
        }
    }

    /// Rebuild the child list, replacing matched spans in text nodes with
    /// anchor elements and recursing into non-pass-through children.
    fn splice_element(&self, element: &mut Element, renderer: &LinkRenderer) {
        if is_passthrough(element) {
            return;
        }

        let children = std::mem::take(&mut element.children);
        let mut spliced = Vec::with_capacity(children.len());

        for child in children {
            match child {
                MarkupNode::Text(text) => self.splice_text(&text, renderer, &mut spliced),
                MarkupNode::Element(mut el) => {
                    self.splice_element(&mut el, renderer);
                    spliced.push(MarkupNode::Element(el));
                }
                raw @ MarkupNode::Raw(_) => spliced.push(raw),
            }
        }

        element.children = spliced;
    }

    fn splice_text(&self, text: &str, renderer: &LinkRenderer, out: &mut Vec<MarkupNode>) {
        let mut last = 0;
        for (start, end, ticket) in self.pattern.find_iter(text) {
            if start > last {
                out.push(MarkupNode::Text(text[last..start].to_string()));
            }
            out.push(MarkupNode::Element(renderer.element(ticket)));
            last = end;
        }
        if last < text.len() {
            out.push(MarkupNode::Text(text[last..].to_string()));
        }
    }
}

fn is_passthrough(element: &Element) -> bool {
    PASSTHROUGH_TAGS.contains(&element.tag.as_str())
        || PASSTHROUGH_CLASSES
            .iter()
            .any(|class| element.has_class(class))
}
