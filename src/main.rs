use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{prelude::*, widgets::Paragraph};

mod app;
mod cli;
mod filter;
mod grades;
mod models;
mod theme;
mod ui;
mod watcher;

use app::App;
use models::{Focus, InputMode};
use theme::{BG_PRIMARY, TEAL_PRIMARY, TEXT_MUTED};
use ui::{
    render_chip_row, render_header, render_no_matches_card, render_program_card, render_summary,
    CARD_HEIGHT, CHIP_ROW_HEIGHT,
};

fn main() -> io::Result<()> {
    let config = cli::parse_args()?;
    let mut app = App::new(config);

    // Watcher stays alive for the whole session; the event loop picks up
    // the flag it sets
    let _watcher = app
        .data_path
        .clone()
        .and_then(|path| watcher::setup_data_watcher(path, app.data_needs_reload.clone()));

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    app::report_load_error(&app);
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        app.reload_if_needed();

        terminal.draw(|frame| draw(frame, app))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match app.input_mode {
                    InputMode::Search => match key.code {
                        KeyCode::Esc | KeyCode::Enter => app.input_mode = InputMode::Browse,
                        KeyCode::Backspace => {
                            app.filters.search.pop();
                            app.results_scroll = 0;
                        }
                        KeyCode::Char(c) => {
                            app.filters.search.push(c);
                            app.results_scroll = 0;
                        }
                        _ => {}
                    },
                    InputMode::Browse => match key.code {
                        KeyCode::Char('q') => break,
                        KeyCode::Char('/') => app.input_mode = InputMode::Search,
                        KeyCode::Char('c') => app.clear_filters(),
                        KeyCode::Char('i') => app.toggle_community(),
                        KeyCode::Tab => app.focus_next(),
                        KeyCode::BackTab => app.focus_prev(),
                        KeyCode::Left => app.chip_left(),
                        KeyCode::Right => app.chip_right(),
                        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_focused_chip(),
                        KeyCode::Up => app.results_scroll = app.results_scroll.saturating_sub(1),
                        // Clamped against the result count at draw time
                        KeyCode::Down => app.results_scroll += 1,
                        _ => {}
                    },
                }
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(
        ratatui::widgets::Block::default().style(Style::default().bg(BG_PRIMARY)),
        area,
    );

    // Vertical layout: header, chip rows (pillar/tag rows only when the
    // data populates them), search, summary, results, bottom bar
    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Length(CHIP_ROW_HEIGHT),
        Constraint::Length(CHIP_ROW_HEIGHT),
    ];
    if app.has_pillars() {
        constraints.push(Constraint::Length(CHIP_ROW_HEIGHT));
    }
    if app.has_tags() {
        constraints.push(Constraint::Length(CHIP_ROW_HEIGHT));
    }
    constraints.push(Constraint::Length(1)); // Search line
    constraints.push(Constraint::Length(1)); // Summary line
    constraints.push(Constraint::Min(CARD_HEIGHT)); // Results
    constraints.push(Constraint::Length(1)); // Bottom bar

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let header_area = rows[0];
    let grades_area = rows[1];
    let formats_area = rows[2];
    let mut next = 3;
    let pillars_area = if app.has_pillars() {
        let a = rows[next];
        next += 1;
        Some(a)
    } else {
        None
    };
    let tags_area = if app.has_tags() {
        let a = rows[next];
        next += 1;
        Some(a)
    } else {
        None
    };
    let search_area = rows[next];
    let summary_area = rows[next + 1];
    let results_area = rows[next + 2];
    let bottom_bar_area = rows[next + 3];

    render_header(header_area, &app.catalog, frame);

    let focus_in = |row: Focus| (app.focus == row).then_some(app.chip_index);
    render_chip_row(
        grades_area,
        Focus::Grades.label(),
        &app.row_labels(Focus::Grades),
        &app.filters.selected_grades,
        focus_in(Focus::Grades),
        frame,
    );
    render_chip_row(
        formats_area,
        Focus::Formats.label(),
        &app.row_labels(Focus::Formats),
        &app.filters.selected_formats,
        focus_in(Focus::Formats),
        frame,
    );
    if let Some(area) = pillars_area {
        render_chip_row(
            area,
            Focus::Pillars.label(),
            &app.row_labels(Focus::Pillars),
            &app.filters.selected_pillars,
            focus_in(Focus::Pillars),
            frame,
        );
    }
    if let Some(area) = tags_area {
        render_chip_row(
            area,
            Focus::Tags.label(),
            &app.row_labels(Focus::Tags),
            &app.filters.selected_tags,
            focus_in(Focus::Tags),
            frame,
        );
    }

    draw_search_line(frame, search_area, app);
    render_summary(summary_area, &app.summary_line(), app.load_failed, frame);

    // Clamp scroll before borrowing the result list
    let count = app.visible_programs().len();
    app.results_scroll = app.results_scroll.min(count.saturating_sub(1));

    let visible = app.visible_programs();
    if visible.is_empty() {
        let card_area = Rect::new(
            results_area.x,
            results_area.y,
            results_area.width,
            CARD_HEIGHT.min(results_area.height),
        );
        render_no_matches_card(card_area, frame);
    } else {
        let mut y = results_area.y;
        for program in visible.into_iter().skip(app.results_scroll) {
            if y + CARD_HEIGHT > results_area.y + results_area.height {
                break;
            }
            let card_area = Rect::new(results_area.x, y, results_area.width, CARD_HEIGHT);
            render_program_card(card_area, program, &app.catalog, frame);
            y += CARD_HEIGHT;
        }
    }

    let hints = match app.input_mode {
        InputMode::Browse => {
            " q: Quit | Tab: Next row | ←/→: Chip | Space: Toggle | /: Search | i: Community | c: Clear "
        }
        InputMode::Search => " Type to search | Backspace: Delete | Esc/Enter: Done ",
    };
    let bottom_bar = Paragraph::new(hints).style(Style::default().fg(Color::Black).bg(TEAL_PRIMARY));
    frame.render_widget(bottom_bar, bottom_bar_area);
}

fn draw_search_line(frame: &mut Frame, area: Rect, app: &App) {
    let (text, color) = match app.input_mode {
        InputMode::Search => (format!(" Search: {}▌", app.filters.search), TEAL_PRIMARY),
        InputMode::Browse if app.filters.search.is_empty() => {
            (" Search: (press / to type)".to_string(), TEXT_MUTED)
        }
        InputMode::Browse => (format!(" Search: {}", app.filters.search), TEXT_MUTED),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color)))),
        area,
    );
}
