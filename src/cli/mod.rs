//! CLI argument parsing.

mod args;

pub use args::{Cli, normalize_help_aliases};
