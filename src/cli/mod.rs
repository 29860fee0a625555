//! CLI argument parsing and user prompts for finder-tui.

mod args;
mod prompts;

pub use args::{parse_args, CliConfig, VERSION};
