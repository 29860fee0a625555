//! Header and summary line rendering

use ratatui::{prelude::*, widgets::Paragraph};

use crate::models::Catalog;
use crate::theme::{RED_ERROR, TEAL_PRIMARY, TEXT_MUTED, TEXT_SECONDARY};

/// Render the one-line header: org name and page title.
pub fn render_header(area: Rect, catalog: &Catalog, frame: &mut Frame) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", catalog.org_name),
            Style::default().fg(TEAL_PRIMARY).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {}", catalog.page_title),
            Style::default().fg(TEXT_SECONDARY),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the result-count/status line. Doubles as the error surface when
/// the data file failed to load.
pub fn render_summary(area: Rect, text: &str, failed: bool, frame: &mut Frame) {
    let color = if failed { RED_ERROR } else { TEXT_MUTED };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {}", text),
        Style::default().fg(color),
    )));
    frame.render_widget(paragraph, area);
}
