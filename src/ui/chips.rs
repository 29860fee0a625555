//! Filter chip row rendering

use std::collections::HashSet;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::{
    BG_PRIMARY, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, GREEN_SELECTED, ROUNDED_BORDERS,
    TEAL_PRIMARY, TEXT_MUTED, TEXT_SECONDARY,
};

/// Height of one chip row including its borders
pub const CHIP_ROW_HEIGHT: u16 = 3;

/// Render one row of toggle chips inside a titled block.
///
/// `focused` carries the index of the chip under keyboard focus when this
/// row owns focus, or None when it does not.
pub fn render_chip_row(
    area: Rect,
    title: &str,
    labels: &[String],
    selected: &HashSet<String>,
    focused: Option<usize>,
    frame: &mut Frame,
) {
    let border_color = if focused.is_some() { TEAL_PRIMARY } else { BORDER_SUBTLE };

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(BG_SECONDARY));

    let mut spans: Vec<Span> = Vec::with_capacity(labels.len() * 2);
    for (i, label) in labels.iter().enumerate() {
        let is_selected = selected.contains(label);
        let is_focused = focused == Some(i);

        let indicator = if is_selected { "●" } else { "○" };
        let mut style = if is_selected {
            Style::default().fg(BG_PRIMARY).bg(GREEN_SELECTED)
        } else {
            Style::default().fg(TEXT_SECONDARY).bg(BG_TERTIARY)
        };
        if is_focused {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            if !is_selected {
                style = style.fg(TEAL_PRIMARY);
            }
        }

        spans.push(Span::styled(format!(" {} {} ", indicator, label), style));
        spans.push(Span::styled(" ", Style::default().fg(TEXT_MUTED)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
