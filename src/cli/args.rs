//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

use super::prompts::{find_data_files, prompt_data_selection};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments. `data_path` of None means no catalog
/// file was found and the embedded sample should be used.
pub struct CliConfig {
    pub data_path: Option<PathBuf>,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Finder TUI - Interactive terminal program finder");
    eprintln!();
    eprintln!("Usage: finder-tui [data-file] [OPTIONS]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [data-file]  Path to the catalog JSON file (data.json or programs.json)");
    eprintln!("               If omitted, looks in the current directory, then in");
    eprintln!("               the user config directory, then falls back to the");
    eprintln!("               embedded sample catalog");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -y, --yes      Skip selection prompts (take the first candidate)");
    eprintln!("  -h, --help     Show this help message");
    eprintln!("  -V, --version  Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  finder-tui                   # Discover a catalog file");
    eprintln!("  finder-tui programs.json     # Load a specific file");
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut data_path: Option<PathBuf> = None;
    let mut skip_prompts = false;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("finder-tui {}", VERSION);
            std::process::exit(0);
        } else if arg == "-y" || arg == "--yes" {
            skip_prompts = true;
            i += 1;
        } else if !arg.starts_with('-') {
            data_path = Some(PathBuf::from(arg));
            i += 1;
        } else {
            print_usage();
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    // If no data file provided, discover candidates
    let data_path = if data_path.is_some() {
        data_path
    } else {
        let candidates = find_data_files();
        if candidates.is_empty() {
            eprintln!("Warning: no data.json or programs.json found, using embedded sample catalog");
            None
        } else if candidates.len() == 1 || skip_prompts {
            Some(candidates[0].clone())
        } else {
            Some(prompt_data_selection(&candidates)?)
        }
    };

    Ok(CliConfig { data_path })
}
