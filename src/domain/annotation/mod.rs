//! Match-and-decorate pipeline

pub mod collector;
pub mod engine;
pub mod pattern;
pub mod range;
pub mod render;
pub mod resolver;
pub mod scanner;

// Re-export main types
pub use collector::collect_ignore_zones;
pub use engine::AnnotationEngine;
pub use pattern::TicketPattern;
pub use range::{IgnoreZones, TextRange};
pub use render::{Decoration, LinkRenderer, LINK_CLASS};
pub use resolver::resolve;
pub use scanner::{scan, Match, TextUnit};
