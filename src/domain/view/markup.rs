//! Rendered-view element tree
//!
//! An owned DOM-like tree built from markdown events. The rendered pipeline
//! transforms this tree in place (splicing anchor elements into text nodes)
//! and serializes it to HTML with proper escaping.

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};
use pulldown_cmark_escape::{escape_href, escape_html, escape_html_body_text};

use super::markdown_options;

/// A node in the rendered markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Element(Element),
    Text(String),
    /// Raw HTML passed through from the source, serialized verbatim and
    /// never scanned
    Raw(String),
}

/// A DOM-like element: tag name, class list, attributes, children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<MarkupNode>,
}

// Serialized without closing tag or children
const VOID_TAGS: &[&str] = &["br", "hr", "img"];

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn push(&mut self, node: MarkupNode) {
        self.children.push(node);
    }

    pub fn push_text(&mut self, text: &str) {
        self.children.push(MarkupNode::Text(text.to_string()));
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Serialize this element and its subtree to an HTML string.
    /// Text nodes and attribute values are escaped; `Raw` nodes are emitted
    /// verbatim.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);

        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            let _ = escape_html(&mut *out, &self.classes.join(" "));
            out.push('"');
        }

        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            if name == "href" || name == "src" {
                let _ = escape_href(&mut *out, value);
            } else {
                let _ = escape_html(&mut *out, value);
            }
            out.push('"');
        }

        if VOID_TAGS.contains(&self.tag.as_str()) {
            out.push('>');
            return;
        }

        out.push('>');
        for child in &self.children {
            match child {
                MarkupNode::Element(el) => el.write_html(out),
                MarkupNode::Text(text) => {
                    let _ = escape_html_body_text(&mut *out, text);
                }
                MarkupNode::Raw(html) => out.push_str(html),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn collect_text(nodes: &[MarkupNode], out: &mut String) {
    for node in nodes {
        match node {
            MarkupNode::Text(text) => out.push_str(text),
            MarkupNode::Element(el) => collect_text(&el.children, out),
            MarkupNode::Raw(_) => {}
        }
    }
}

/// Build an element tree from markdown source.
///
/// The tree is rooted at a generic `div` and covers the block and inline
/// structure the annotation pipeline cares about: paragraphs, headings,
/// quotes and callouts, lists, tables, emphasis, strikethrough, code spans
/// and fenced blocks, links, images, rules and breaks. Raw HTML passes
/// through untouched.
pub fn tree_from_markdown(source: &str) -> Element {
    let parser = Parser::new_ext(source, markdown_options());
    let mut stack: Vec<Element> = vec![Element::new("div")];
    let mut in_table_head = false;

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => stack.push(Element::new("p")),
                Tag::Heading { level, .. } => {
                    stack.push(Element::new(&format!("h{}", level as usize)))
                }
                Tag::BlockQuote(kind) => {
                    let el = Element::new("blockquote");
                    stack.push(if kind.is_some() {
                        el.with_class("callout")
                    } else {
                        el
                    });
                }
                Tag::CodeBlock(kind) => {
                    stack.push(Element::new("pre"));
                    let code = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                            Element::new("code").with_class(&format!("language-{}", lang))
                        }
                        _ => Element::new("code"),
                    };
                    stack.push(code);
                }
                Tag::List(Some(_)) => stack.push(Element::new("ol")),
                Tag::List(None) => stack.push(Element::new("ul")),
                Tag::Item => stack.push(Element::new("li")),
                Tag::Table(_) => stack.push(Element::new("table")),
                Tag::TableHead => {
                    in_table_head = true;
                    stack.push(Element::new("tr"));
                }
                Tag::TableRow => stack.push(Element::new("tr")),
                Tag::TableCell => {
                    stack.push(Element::new(if in_table_head { "th" } else { "td" }))
                }
                Tag::Emphasis => stack.push(Element::new("em")),
                Tag::Strong => stack.push(Element::new("strong")),
                Tag::Strikethrough => stack.push(Element::new("del")),
                Tag::Link {
                    dest_url, title, ..
                } => {
                    let mut el = Element::new("a").with_attr("href", &dest_url);
                    if !title.is_empty() {
                        el = el.with_attr("title", &title);
                    }
                    stack.push(el);
                }
                Tag::Image {
                    dest_url, title, ..
                } => {
                    let mut el = Element::new("img").with_attr("src", &dest_url);
                    if !title.is_empty() {
                        el = el.with_attr("title", &title);
                    }
                    stack.push(el);
                }
                // HTML blocks are transparent; their contents arrive as
                // Event::Html and land on the current element
                Tag::HtmlBlock => {}
                _ => stack.push(Element::new("div")),
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::HtmlBlock => {}
                TagEnd::CodeBlock => {
                    // Pop <code>, then <pre>
                    close_element(&mut stack);
                    close_element(&mut stack);
                }
                TagEnd::TableHead => {
                    in_table_head = false;
                    close_element(&mut stack);
                }
                TagEnd::Image => {
                    // Inner events become the alt text
                    if let Some(mut el) = stack.pop() {
                        let alt = el.text_content();
                        if !alt.is_empty() {
                            el = el.with_attr("alt", &alt);
                        }
                        el.children.clear();
                        attach(&mut stack, el);
                    }
                }
                _ => close_element(&mut stack),
            },
            Event::Text(text) => top(&mut stack).push_text(&text),
            Event::Code(code) => {
                let mut el = Element::new("code");
                el.push_text(&code);
                top(&mut stack).push(MarkupNode::Element(el));
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                top(&mut stack).push(MarkupNode::Raw(html.to_string()));
            }
            Event::SoftBreak => top(&mut stack).push_text("\n"),
            Event::HardBreak => top(&mut stack).push(MarkupNode::Element(Element::new("br"))),
            Event::Rule => top(&mut stack).push(MarkupNode::Element(Element::new("hr"))),
            _ => {}
        }
    }

    // Anything left unclosed folds into the root
    while stack.len() > 1 {
        close_element(&mut stack);
    }
    stack.pop().unwrap_or_else(|| Element::new("div"))
}

fn top(stack: &mut Vec<Element>) -> &mut Element {
    if stack.is_empty() {
        stack.push(Element::new("div"));
    }
    let last = stack.len() - 1;
    &mut stack[last]
}

fn close_element(stack: &mut Vec<Element>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(el) = stack.pop() {
        attach(stack, el);
    }
}

fn attach(stack: &mut Vec<Element>, el: Element) {
    top(stack).push(MarkupNode::Element(el));
}
