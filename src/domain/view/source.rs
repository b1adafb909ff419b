//! Live-view document snapshot
//!
//! A structural walk of a markdown source string: named nodes with absolute
//! byte ranges, the text-bearing units between them, and the editor state
//! (selection ranges, source-mode flag) the live pipeline needs.

use pulldown_cmark::{Event, Parser, Tag};

use super::markdown_options;
use crate::domain::annotation::{TextRange, TextUnit};

/// Kind of a structural node in the source view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Paragraph,
    Heading,
    BlockQuote,
    Callout,
    CodeBlock,
    InlineCode,
    Html,
    List,
    Item,
    Table,
    TableHead,
    TableRow,
    TableCell,
    Emphasis,
    Strong,
    Strikethrough,
    Link,
    Image,
    Other,
}

impl NodeKind {
    /// Kinds whose full range must never be decorated
    pub fn is_ignore_zone(&self) -> bool {
        matches!(
            self,
            NodeKind::Heading
                | NodeKind::BlockQuote
                | NodeKind::Callout
                | NodeKind::CodeBlock
                | NodeKind::InlineCode
                | NodeKind::Html
                | NodeKind::Strikethrough
        )
    }
}

/// A structural node with its absolute range in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceNode {
    pub kind: NodeKind,
    pub range: TextRange,
}

/// Editor selection state: all ranges plus which one is primary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub ranges: Vec<TextRange>,
    pub primary: usize,
}

/// Snapshot of a markdown document as the live view sees it
#[derive(Debug)]
pub struct SourceView<'a> {
    source: &'a str,
    nodes: Vec<SourceNode>,
    units: Vec<TextRange>,
    selection: Option<Selection>,
    source_mode: bool,
}

impl<'a> SourceView<'a> {
    /// Parse a source snapshot.
    ///
    /// Text units inside an ignore-zone container are dropped here as an
    /// optimization; the resolver re-checks zone containment regardless.
    pub fn parse(source: &'a str) -> Self {
        let mut nodes = Vec::new();
        let mut units = Vec::new();
        let mut kind_stack: Vec<NodeKind> = Vec::new();
        let mut ignored_depth = 0usize;

        for (event, range) in Parser::new_ext(source, markdown_options()).into_offset_iter() {
            let range = TextRange::new(range.start, range.end);
            match event {
                Event::Start(tag) => {
                    let kind = node_kind(&tag);
                    nodes.push(SourceNode { kind, range });
                    if kind.is_ignore_zone() {
                        ignored_depth += 1;
                    }
                    kind_stack.push(kind);
                }
                Event::End(_) => {
                    if let Some(kind) = kind_stack.pop() {
                        if kind.is_ignore_zone() {
                            ignored_depth -= 1;
                        }
                    }
                }
                Event::Text(_) => {
                    if ignored_depth == 0 {
                        units.push(range);
                    }
                }
                Event::Code(_) => {
                    nodes.push(SourceNode {
                        kind: NodeKind::InlineCode,
                        range,
                    });
                }
                Event::Html(_) | Event::InlineHtml(_) => {
                    nodes.push(SourceNode {
                        kind: NodeKind::Html,
                        range,
                    });
                }
                _ => {}
            }
        }

        SourceView {
            source,
            nodes,
            units,
            selection: None,
            source_mode: false,
        }
    }

    /// Attach selection ranges; the range at `primary` is the active one
    pub fn with_selection(mut self, ranges: Vec<TextRange>, primary: usize) -> Self {
        self.selection = Some(Selection { ranges, primary });
        self
    }

    /// Attach a single collapsed cursor
    pub fn with_cursor(self, offset: usize) -> Self {
        self.with_selection(vec![TextRange::new(offset, offset)], 0)
    }

    /// Mark this snapshot as taken in raw source mode (live preview off)
    pub fn in_source_mode(mut self) -> Self {
        self.source_mode = true;
        self
    }

    pub fn is_source_mode(&self) -> bool {
        self.source_mode
    }

    /// The primary selection range, if any selection is attached
    pub fn primary_selection(&self) -> Option<TextRange> {
        let selection = self.selection.as_ref()?;
        selection.ranges.get(selection.primary).copied()
    }

    pub fn nodes(&self) -> &[SourceNode] {
        &self.nodes
    }

    /// Text-bearing units with absolute base offsets
    pub fn text_units(&self) -> impl Iterator<Item = TextUnit<'_>> {
        self.units
            .iter()
            .map(|r| TextUnit::new(r.from, &self.source[r.from..r.to]))
    }
}

fn node_kind(tag: &Tag) -> NodeKind {
    match tag {
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Heading { .. } => NodeKind::Heading,
        Tag::BlockQuote(Some(_)) => NodeKind::Callout,
        Tag::BlockQuote(None) => NodeKind::BlockQuote,
        Tag::CodeBlock(_) => NodeKind::CodeBlock,
        Tag::HtmlBlock => NodeKind::Html,
        Tag::List(_) => NodeKind::List,
        Tag::Item => NodeKind::Item,
        Tag::Table(_) => NodeKind::Table,
        Tag::TableHead => NodeKind::TableHead,
        Tag::TableRow => NodeKind::TableRow,
        Tag::TableCell => NodeKind::TableCell,
        Tag::Emphasis => NodeKind::Emphasis,
        Tag::Strong => NodeKind::Strong,
        Tag::Strikethrough => NodeKind::Strikethrough,
        Tag::Link { .. } => NodeKind::Link,
        Tag::Image { .. } => NodeKind::Image,
        _ => NodeKind::Other,
    }
}
