//! Filter state and program matching
//!
//! Holds the user's current selections and decides, per program, whether it
//! belongs in the result list. Every mutation is followed by a full re-filter
//! of the catalog; nothing here is cached. Grade intervals in particular are
//! re-derived from the program's raw text on every pass.

use std::collections::HashSet;

use crate::grades::{parse_grade_intervals, GRADE_PRESETS};
use crate::models::Program;

/// Current user selections. Default is the initial-load view: no chips, no
/// search, community programs hidden.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub selected_grades: HashSet<String>,
    pub selected_formats: HashSet<String>,
    pub selected_pillars: HashSet<String>,
    pub selected_tags: HashSet<String>,
    pub include_community: bool,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset everything to the initial-load view.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn toggle(set: &mut HashSet<String>, id: &str) {
        if !set.remove(id) {
            set.insert(id.to_string());
        }
    }

    /// True when no filter constrains the result list beyond the defaults.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Full gate chain. Order mirrors cost: cheap category and text checks
    /// first, grade parsing last.
    pub fn matches(&self, program: &Program) -> bool {
        // Community gate: default view is school programs only
        if !self.include_community && !program.is_school() {
            return false;
        }

        // Search: case-insensitive substring over name, blurb, and tags
        if !self.search.is_empty() {
            let term = self.search.to_lowercase();
            let hit = program.name.to_lowercase().contains(&term)
                || program.blurb.to_lowercase().contains(&term)
                || program.tags.iter().any(|t| t.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        // Formats: every selected format must be enabled on the program
        if !self.selected_formats.iter().all(|f| program.has_format(f)) {
            return false;
        }

        // Pillars: the program's category must be among the selected ones
        if !self.selected_pillars.is_empty() && !self.selected_pillars.contains(&program.category) {
            return false;
        }

        // Tags: every selected tag must be present
        if !self.selected_tags.iter().all(|t| program.has_tag(t)) {
            return false;
        }

        // Grades: any selected preset may match (OR across presets)
        if !self.selected_grades.is_empty() {
            let intervals = parse_grade_intervals(program.grades_text());
            let overlaps_any = GRADE_PRESETS
                .iter()
                .filter(|p| self.selected_grades.contains(p.id))
                .any(|p| intervals.iter().any(|iv| iv.overlaps(&p.range)));
            if !overlaps_any {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormatsField, GradesField};

    fn program(name: &str, category: &str, grades: &str) -> Program {
        Program {
            name: name.to_string(),
            category: category.to_string(),
            grades: GradesField(grades.to_string()),
            ..Program::default()
        }
    }

    #[test]
    fn test_default_hides_community() {
        let filters = FilterState::new();
        assert!(filters.matches(&program("Plankton Lab", "School", "2–5")));
        assert!(!filters.matches(&program("Shore Walk", "Community", "All Ages")));
    }

    #[test]
    fn test_include_community_flag() {
        let mut filters = FilterState::new();
        filters.include_community = true;
        assert!(filters.matches(&program("Shore Walk", "Community", "All Ages")));
    }

    #[test]
    fn test_search_matches_name_blurb_and_tags() {
        let mut filters = FilterState::new();
        filters.search = "plankton".to_string();
        assert!(filters.matches(&program("Plankton Lab", "School", "2–5")));
        assert!(!filters.matches(&program("Shore Walk", "School", "2–5")));

        let mut tagged = program("Shore Walk", "School", "2–5");
        tagged.tags = vec!["plankton".to_string()];
        assert!(filters.matches(&tagged));

        let mut blurbed = program("Shore Walk", "School", "2–5");
        blurbed.blurb = "Counting plankton at the dock.".to_string();
        assert!(filters.matches(&blurbed));
    }

    #[test]
    fn test_format_filter_requires_all_selected() {
        let mut filters = FilterState::new();
        filters.selected_formats.insert("10-week".to_string());
        filters.selected_formats.insert("4-week".to_string());

        let mut p = program("Plankton Lab", "School", "2–5");
        p.formats = FormatsField(["10-week".to_string()].into_iter().collect());
        assert!(!filters.matches(&p));

        p.formats.0.insert("4-week".to_string());
        assert!(filters.matches(&p));
    }

    #[test]
    fn test_pillar_filter_is_membership() {
        let mut filters = FilterState::new();
        filters.include_community = true;
        filters.selected_pillars.insert("Community".to_string());

        assert!(filters.matches(&program("Shore Walk", "Community", "")));
        assert!(!filters.matches(&program("Plankton Lab", "School", "2–5")));
    }

    #[test]
    fn test_tag_filter_requires_all_selected() {
        let mut filters = FilterState::new();
        filters.selected_tags.insert("outdoor".to_string());
        filters.selected_tags.insert("water".to_string());

        let mut p = program("Shore Walk", "School", "2–5");
        p.tags = vec!["outdoor".to_string()];
        assert!(!filters.matches(&p));

        p.tags.push("water".to_string());
        assert!(filters.matches(&p));
    }

    #[test]
    fn test_grade_gate_or_semantics() {
        let mut filters = FilterState::new();
        filters.selected_grades.insert("K–1".to_string());
        filters.selected_grades.insert("6–8".to_string());

        // Overlaps 6–8 only; one hit is enough
        assert!(filters.matches(&program("Creek Study", "School", "7–9")));
        // Overlaps neither
        assert!(!filters.matches(&program("Seniors Cruise", "School", "10–12")));
    }

    #[test]
    fn test_grade_gate_inactive_without_presets() {
        let filters = FilterState::new();
        // Unparseable grade text still passes when no preset is selected
        assert!(filters.matches(&program("Mystery", "School", "varies")));
    }

    #[test]
    fn test_unparseable_grades_never_match_a_preset() {
        let mut filters = FilterState::new();
        filters.selected_grades.insert("2–5".to_string());
        assert!(!filters.matches(&program("Mystery", "School", "varies")));
    }

    #[test]
    fn test_clear_restores_default_view() {
        let mut filters = FilterState::new();
        filters.search = "crab".to_string();
        filters.selected_grades.insert("2–5".to_string());
        filters.selected_formats.insert("10-week".to_string());
        filters.include_community = true;

        filters.clear();
        assert!(filters.is_default());
        assert_eq!(filters, FilterState::new());
    }
}
