//! Result card rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::grades::FORMAT_PRESETS;
use crate::models::{Catalog, Program};
use crate::theme::{
    AMBER_TAG, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, ROUNDED_BORDERS, TEAL_DIM, TEAL_PRIMARY,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::helpers::truncate;

/// Height of one result card including its borders
pub const CARD_HEIGHT: u16 = 7;

/// Build the tag row for a program: the raw grade text, then the enabled
/// preset format labels, else the program's note values as a format hint.
fn tag_line(program: &Program) -> Line<'static> {
    let mut spans: Vec<Span> = Vec::new();

    if !program.grades_text().is_empty() {
        spans.push(Span::styled(
            format!(" Grades: {} ", program.grades_text()),
            Style::default().fg(AMBER_TAG).bg(BG_TERTIARY),
        ));
        spans.push(Span::raw(" "));
    }

    let formats: Vec<&str> = FORMAT_PRESETS
        .iter()
        .copied()
        .filter(|f| program.has_format(f))
        .collect();
    if !formats.is_empty() {
        for f in formats {
            spans.push(Span::styled(
                format!(" {} ", f),
                Style::default().fg(TEAL_PRIMARY).bg(BG_TERTIARY),
            ));
            spans.push(Span::raw(" "));
        }
    } else {
        // Non-preset formats (like Monthly) come from the notes map
        let notes = program.note_values();
        if !notes.is_empty() {
            spans.push(Span::styled(
                format!(" Format: {} ", notes.join(", ")),
                Style::default().fg(TEAL_PRIMARY).bg(BG_TERTIARY),
            ));
        }
    }

    Line::from(spans)
}

/// Category note shown on every card, as on the rendered page.
fn category_details(program: &Program) -> &'static str {
    if program.is_school() {
        "School program."
    } else {
        "Community or adult program."
    }
}

/// Build the content lines of one program card: name, tag row, blurb (an
/// empty line when absent, so cards stay a fixed height), category note,
/// and the call-to-action links. Program-level URLs override the
/// catalog-wide ones.
fn card_lines(program: &Program, catalog: &Catalog, inner_width: usize) -> Vec<Line<'static>> {
    let title_line = Line::from(Span::styled(
        truncate(&program.name, inner_width),
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
    ));

    let blurb_line = Line::from(Span::styled(
        truncate(&program.blurb, inner_width),
        Style::default().fg(TEXT_SECONDARY),
    ));
    let details_line = Line::from(Span::styled(
        category_details(program),
        Style::default().fg(TEXT_MUTED),
    ));

    let estimate_url = program
        .estimate_url
        .as_deref()
        .unwrap_or(&catalog.cta_estimate_url);
    let inquiry_url = program
        .inquiry_url
        .as_deref()
        .unwrap_or(&catalog.cta_inquiry_url);
    let cta_line = Line::from(vec![
        Span::styled("Get estimate ", Style::default().fg(TEAL_DIM)),
        Span::styled(estimate_url.to_string(), Style::default().fg(TEXT_MUTED)),
        Span::styled("  Request booking ", Style::default().fg(TEAL_DIM)),
        Span::styled(inquiry_url.to_string(), Style::default().fg(TEXT_MUTED)),
    ]);

    vec![title_line, tag_line(program), blurb_line, details_line, cta_line]
}

/// Render one program card.
pub fn render_program_card(area: Rect, program: &Program, catalog: &Catalog, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let inner_width = area.width.saturating_sub(4) as usize;
    let paragraph = Paragraph::new(card_lines(program, catalog, inner_width)).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the single placeholder card shown when nothing matches.
pub fn render_no_matches_card(area: Rect, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let lines = vec![
        Line::from(Span::styled(
            "No matches",
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Try clearing filters or selecting a broader grade band.",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GradesField;

    fn flatten(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn program(name: &str, category: &str, blurb: &str) -> Program {
        Program {
            name: name.to_string(),
            category: category.to_string(),
            blurb: blurb.to_string(),
            grades: GradesField("2–5".to_string()),
            ..Program::default()
        }
    }

    #[test]
    fn test_card_shows_blurb_and_category_note() {
        let catalog = Catalog::default();
        let p = program("Plankton Lab", "School", "Counting plankton at the dock.");
        let lines = card_lines(&p, &catalog, 60);
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().any(|l| flatten(l).contains("Counting plankton at the dock.")));
        assert!(lines.iter().any(|l| flatten(l) == "School program."));
    }

    #[test]
    fn test_card_community_category_note() {
        let catalog = Catalog::default();
        let p = program("Low Tide Walks", "Community", "");
        let lines = card_lines(&p, &catalog, 60);
        assert!(lines.iter().any(|l| flatten(l) == "Community or adult program."));
        // Absent blurb still holds its line so cards keep a fixed height
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_card_cta_prefers_program_urls() {
        let catalog = Catalog::default();
        let mut p = program("Docent Training", "Adult", "");
        p.inquiry_url = Some("https://example.org/volunteer".to_string());
        let lines = card_lines(&p, &catalog, 80);
        let cta = flatten(lines.last().unwrap());
        assert!(cta.contains("https://example.org/volunteer"));
        assert!(cta.contains(&catalog.cta_estimate_url));
    }
}
