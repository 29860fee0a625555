//! Enums used throughout the finder TUI
//!
//! This module contains the enum types used for input handling and
//! focus navigation.

/// Mode for modal input system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse, // Default mode - keys navigate and toggle chips
    Search, // Search mode - keys edit the search text
}

/// Which part of the screen keyboard focus is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Grades,
    Formats,
    Pillars,
    Tags,
    Results,
}

impl Focus {
    /// Cycle forward, skipping chip rows the loaded data does not populate.
    pub fn next(self, has_pillars: bool, has_tags: bool) -> Self {
        let step = match self {
            Focus::Grades => Focus::Formats,
            Focus::Formats => Focus::Pillars,
            Focus::Pillars => Focus::Tags,
            Focus::Tags => Focus::Results,
            Focus::Results => Focus::Grades,
        };
        match step {
            Focus::Pillars if !has_pillars => step.next(has_pillars, has_tags),
            Focus::Tags if !has_tags => step.next(has_pillars, has_tags),
            _ => step,
        }
    }

    /// Cycle backward, skipping unpopulated chip rows.
    pub fn prev(self, has_pillars: bool, has_tags: bool) -> Self {
        let step = match self {
            Focus::Grades => Focus::Results,
            Focus::Formats => Focus::Grades,
            Focus::Pillars => Focus::Formats,
            Focus::Tags => Focus::Pillars,
            Focus::Results => Focus::Tags,
        };
        match step {
            Focus::Pillars if !has_pillars => step.prev(has_pillars, has_tags),
            Focus::Tags if !has_tags => step.prev(has_pillars, has_tags),
            _ => step,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Focus::Grades => "Grades",
            Focus::Formats => "Formats",
            Focus::Pillars => "Pillars",
            Focus::Tags => "Tags",
            Focus::Results => "Results",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_full() {
        let mut f = Focus::Grades;
        let mut seen = vec![f];
        for _ in 0..4 {
            f = f.next(true, true);
            seen.push(f);
        }
        assert_eq!(
            seen,
            vec![Focus::Grades, Focus::Formats, Focus::Pillars, Focus::Tags, Focus::Results]
        );
        assert_eq!(f.next(true, true), Focus::Grades);
    }

    #[test]
    fn test_focus_skips_empty_rows() {
        assert_eq!(Focus::Formats.next(false, false), Focus::Results);
        assert_eq!(Focus::Results.prev(false, false), Focus::Formats);
        assert_eq!(Focus::Formats.next(false, true), Focus::Tags);
    }

    #[test]
    fn test_focus_prev_inverts_next() {
        for f in [Focus::Grades, Focus::Formats, Focus::Pillars, Focus::Tags, Focus::Results] {
            assert_eq!(f.next(true, true).prev(true, true), f);
        }
    }

    #[test]
    fn test_focus_label() {
        assert_eq!(Focus::Grades.label(), "Grades");
        assert_eq!(Focus::Formats.label(), "Formats");
        assert_eq!(Focus::Pillars.label(), "Pillars");
        assert_eq!(Focus::Tags.label(), "Tags");
        assert_eq!(Focus::Results.label(), "Results");
    }

    #[test]
    fn test_input_mode_default() {
        assert_eq!(InputMode::default(), InputMode::Browse);
    }
}
