//! Application state and core logic for the finder TUI.
//!
//! This module contains the `App` struct which holds all state for the
//! interactive terminal UI: the loaded catalog, the filter selections, and
//! focus/scroll state. Every mutation is followed by a full re-filter of
//! the catalog on the next draw; nothing is cached between passes.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::cli::CliConfig;
use crate::filter::FilterState;
use crate::grades::{FORMAT_PRESETS, GRADE_PRESETS};
use crate::models::{Catalog, Focus, InputMode, Program};
use crate::ui::pluralize;

/// Fixed status message shown when the data file cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load program data.";

/// Application state
pub struct App {
    pub catalog: Catalog,
    pub data_path: Option<PathBuf>,
    pub load_failed: bool,
    pub load_error: Option<String>,
    pub data_needs_reload: Arc<Mutex<bool>>,
    pub filters: FilterState,
    pub input_mode: InputMode,
    pub focus: Focus,
    // Focused chip within the focused row
    pub chip_index: usize,
    // Index of the first visible result card
    pub results_scroll: usize,
    // Distinct pillar/tag vocabularies collected from the catalog
    pub pillars: Vec<String>,
    pub tags: Vec<String>,
}

impl App {
    pub fn new(config: CliConfig) -> Self {
        let loaded = match &config.data_path {
            Some(path) => Catalog::load(path),
            None => Catalog::embedded(),
        };
        let (catalog, load_failed, load_error) = match loaded {
            Ok(catalog) => (catalog, false, None),
            Err(e) => (Catalog::default(), true, Some(e.to_string())),
        };

        let pillars = collect_pillars(&catalog);
        let tags = collect_tags(&catalog);

        Self {
            catalog,
            data_path: config.data_path,
            load_failed,
            load_error,
            data_needs_reload: Arc::new(Mutex::new(false)),
            filters: FilterState::new(),
            input_mode: InputMode::Browse,
            focus: Focus::Grades,
            chip_index: 0,
            results_scroll: 0,
            pillars,
            tags,
        }
    }

    /// Full filter pass over the catalog, in source order.
    pub fn visible_programs(&self) -> Vec<&Program> {
        self.catalog
            .programs
            .iter()
            .filter(|p| self.filters.matches(p))
            .collect()
    }

    /// Reload the catalog from disk if the watcher flagged a change.
    /// Filters are kept; a failed reload keeps the previous catalog.
    pub fn reload_if_needed(&mut self) {
        let needs_reload = {
            let Ok(mut flag) = self.data_needs_reload.lock() else {
                return;
            };
            if *flag {
                *flag = false;
                true
            } else {
                false
            }
        };
        if !needs_reload {
            return;
        }

        let Some(path) = self.data_path.clone() else {
            return;
        };
        match Catalog::load(&path) {
            Ok(catalog) => {
                self.catalog = catalog;
                self.pillars = collect_pillars(&self.catalog);
                self.tags = collect_tags(&self.catalog);
                self.load_failed = false;
                self.load_error = None;
                self.chip_index = self.chip_index.min(self.row_len().saturating_sub(1));
                self.results_scroll = 0;
            }
            Err(e) => {
                self.load_failed = true;
                self.load_error = Some(e.to_string());
            }
        }
    }

    pub fn has_pillars(&self) -> bool {
        !self.pillars.is_empty()
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    /// Chip labels for the given row. Grade and format rows use the fixed
    /// presets; pillar and tag rows use the vocabulary from the data.
    pub fn row_labels(&self, focus: Focus) -> Vec<String> {
        match focus {
            Focus::Grades => GRADE_PRESETS.iter().map(|p| p.id.to_string()).collect(),
            Focus::Formats => FORMAT_PRESETS.iter().map(|f| f.to_string()).collect(),
            Focus::Pillars => self.pillars.clone(),
            Focus::Tags => self.tags.clone(),
            Focus::Results => Vec::new(),
        }
    }

    fn row_len(&self) -> usize {
        self.row_labels(self.focus).len()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(self.has_pillars(), self.has_tags());
        self.chip_index = 0;
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev(self.has_pillars(), self.has_tags());
        self.chip_index = 0;
    }

    pub fn chip_left(&mut self) {
        self.chip_index = self.chip_index.saturating_sub(1);
    }

    pub fn chip_right(&mut self) {
        let len = self.row_len();
        if len > 0 && self.chip_index + 1 < len {
            self.chip_index += 1;
        }
    }

    /// Toggle the chip under focus in its selection set.
    pub fn toggle_focused_chip(&mut self) {
        let labels = self.row_labels(self.focus);
        let Some(label) = labels.get(self.chip_index) else {
            return;
        };
        let set = match self.focus {
            Focus::Grades => &mut self.filters.selected_grades,
            Focus::Formats => &mut self.filters.selected_formats,
            Focus::Pillars => &mut self.filters.selected_pillars,
            Focus::Tags => &mut self.filters.selected_tags,
            Focus::Results => return,
        };
        FilterState::toggle(set, label);
        self.results_scroll = 0;
    }

    pub fn toggle_community(&mut self) {
        self.filters.include_community = !self.filters.include_community;
        self.results_scroll = 0;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.results_scroll = 0;
    }

    /// Result-count/status line. Selected chips are listed in preset order
    /// so the text is stable across redraws.
    pub fn summary_line(&self) -> String {
        if self.load_failed {
            return LOAD_FAILURE_MESSAGE.to_string();
        }

        let shown = self.visible_programs().len();
        let mut summary = format!("{} shown", pluralize(shown, "program"));

        if !self.filters.selected_grades.is_empty() {
            let grades: Vec<&str> = GRADE_PRESETS
                .iter()
                .map(|p| p.id)
                .filter(|id| self.filters.selected_grades.contains(*id))
                .collect();
            summary.push_str(&format!(" | Grades filter: {}", grades.join(", ")));
        }
        if !self.filters.selected_formats.is_empty() {
            let formats: Vec<&str> = FORMAT_PRESETS
                .iter()
                .copied()
                .filter(|f| self.filters.selected_formats.contains(*f))
                .collect();
            summary.push_str(&format!(" | Format filter: {}", formats.join(", ")));
        }

        summary
    }
}

/// Distinct non-empty category values, sorted, as the pillar vocabulary.
fn collect_pillars(catalog: &Catalog) -> Vec<String> {
    let mut pillars: Vec<String> = catalog
        .programs
        .iter()
        .map(|p| p.category.clone())
        .filter(|c| !c.is_empty())
        .collect();
    pillars.sort();
    pillars.dedup();
    pillars
}

/// Distinct tag values, sorted.
fn collect_tags(catalog: &Catalog) -> Vec<String> {
    let mut tags: Vec<String> = catalog
        .programs
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

/// Prefix the load-failure detail for stderr on exit.
pub fn report_load_error(app: &App) {
    if let Some(ref detail) = app.load_error {
        eprintln!("Error loading program data: {}", detail);
    }
}
