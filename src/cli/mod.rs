//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, PrefixAction};
pub use output::{format_match_list, format_prefix_list, format_written_list};
