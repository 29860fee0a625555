//! Data-file watching for live catalog reload.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

/// Set up a file watcher for changes to the catalog data file.
///
/// The watcher only flips a shared flag; the event loop does the actual
/// reload on its next tick so all catalog mutation stays on one thread.
/// Returns None when watching cannot be set up; the app then simply runs
/// without live reload.
pub fn setup_data_watcher(
    data_path: PathBuf,
    needs_reload: Arc<Mutex<bool>>,
) -> Option<RecommendedWatcher> {
    let config = Config::default().with_poll_interval(Duration::from_millis(500));

    // Canonicalize the path for reliable comparison
    let canonical_data = data_path.canonicalize().unwrap_or_else(|_| data_path.clone());
    let data_filename = data_path.file_name().map(|s| s.to_os_string());

    let watcher_result = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                // Editors often replace the file, so compare canonical paths
                // first and fall back to the filename
                let matches = event.paths.iter().any(|p| {
                    if let Ok(canonical) = p.canonicalize() {
                        if canonical == canonical_data {
                            return true;
                        }
                    }
                    if let Some(ref expected_name) = data_filename {
                        if let Some(event_name) = p.file_name() {
                            return event_name == expected_name;
                        }
                    }
                    false
                });

                if matches {
                    if let Ok(mut flag) = needs_reload.lock() {
                        *flag = true;
                    }
                }
            }
        },
        config,
    );

    match watcher_result {
        Ok(mut watcher) => {
            // Watch the parent directory since some editors replace files
            if let Some(parent) = data_path.parent() {
                let _ = watcher.watch(parent, RecursiveMode::NonRecursive);
            }
            Some(watcher)
        }
        Err(_) => None,
    }
}
