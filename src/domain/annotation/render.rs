//! Link rendering for accepted matches

use super::range::TextRange;
use crate::domain::settings::Settings;
use crate::domain::view::Element;

/// Style class applied to rendered links when styles are enabled
pub const LINK_CLASS: &str = "tickmark-link";

/// Builds the anchor representation of an accepted match.
///
/// Both rendering contexts derive their output from `element`, so the live
/// decoration and the rendered markup can never visually diverge.
pub struct LinkRenderer<'a> {
    settings: &'a Settings,
}

impl<'a> LinkRenderer<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        LinkRenderer { settings }
    }

    /// Tracker URL for a ticket identifier
    pub fn href(&self, ticket: &str) -> String {
        format!("{}/browse/{}", self.settings.base_url(), ticket)
    }

    fn class_name(&self) -> Option<&'static str> {
        self.settings.use_styles().then_some(LINK_CLASS)
    }

    /// The shared anchor element: text = ticket, href = tracker URL,
    /// style class when enabled
    pub fn element(&self, ticket: &str) -> Element {
        let mut anchor = Element::new("a").with_attr("href", &self.href(ticket));
        if let Some(class) = self.class_name() {
            anchor = anchor.with_class(class);
        }
        anchor.push_text(ticket);
        anchor
    }

    /// HTML form of the same anchor
    pub fn html(&self, ticket: &str) -> String {
        self.element(ticket).to_html()
    }
}

/// A live-view decoration: replace `range` with the anchor widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub range: TextRange,
    pub widget: Element,
}
