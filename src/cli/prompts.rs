//! User prompt functions for interactive CLI input.

use std::io::{self, Write};
use std::path::PathBuf;

/// Find candidate catalog files in priority order:
/// 1. ./data.json (local working copy)
/// 2. ./programs.json (alternate local name)
/// 3. <config_dir>/finder-tui/data.json (global user data)
pub fn find_data_files() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    for name in ["data.json", "programs.json"] {
        let path = PathBuf::from(name);
        if path.exists() {
            candidates.push(path);
        }
    }

    if let Some(config) = dirs::config_dir() {
        let global = config.join("finder-tui").join("data.json");
        if global.exists() {
            candidates.push(global);
        }
    }

    candidates
}

/// Get catalog info for display: org name and program count. Handles both
/// catalog shapes without deserializing the full document.
pub fn get_catalog_info(path: &PathBuf) -> (String, usize) {
    let content = std::fs::read_to_string(path).unwrap_or_default();

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&content) {
        let org = value
            .get("orgName")
            .and_then(|v| v.as_str())
            .unwrap_or("Unnamed catalog")
            .to_string();

        let count = if let Some(list) = value.as_array() {
            list.len()
        } else {
            value
                .get("programs")
                .and_then(|v| v.as_array())
                .map(|arr| arr.len())
                .unwrap_or(0)
        };

        (org, count)
    } else {
        ("Unable to parse catalog".to_string(), 0)
    }
}

/// Display data-file selection prompt and return the chosen path
pub fn prompt_data_selection(candidates: &[PathBuf]) -> io::Result<PathBuf> {
    println!();
    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║  Finder TUI - Select a catalog file                           ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Found catalog files:");
    println!();

    for (i, path) in candidates.iter().enumerate() {
        let (org, count) = get_catalog_info(path);
        println!("  {}) {:35} [{} programs]", i + 1, path.display().to_string(), count);
        if !org.is_empty() {
            println!("     {}", org);
        }
    }

    println!();
    print!("Select file [1-{}]: ", candidates.len());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let selection: usize = input
        .trim()
        .parse()
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "Invalid selection"))?;

    if selection < 1 || selection > candidates.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Selection out of range",
        ));
    }

    println!();
    println!("Selected: {}", candidates[selection - 1].display());
    println!();

    Ok(candidates[selection - 1].clone())
}
