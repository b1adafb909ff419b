//! tickmark - Ticket-identifier annotation for markdown notes
//!
//! Scans note text for ticket-style identifiers (a configured prefix, a
//! dash, a number, e.g. `HD-1080`) and annotates each one as a link into an
//! external issue tracker, in a live cursor-aware pass and a rendered HTML
//! pass.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TickmarkError;
