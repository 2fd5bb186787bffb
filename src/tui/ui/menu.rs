//! Main menu: the anonymous entry screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::styles::{Theme, LOGO};

use super::render_key_hints;

/// Render the main menu.
pub fn render_main_menu(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Banner
            Constraint::Min(0),    // Menu
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let banner = Paragraph::new(
        LOGO.lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Theme::subtitle())))
            .collect::<Vec<_>>(),
    );
    f.render_widget(banner, chunks[0]);

    let items = vec![
        Line::from(""),
        menu_line("1", "Doctor Login"),
        menu_line("2", "Patient Login"),
        menu_line("3", "Exit"),
    ];

    let block = Block::default()
        .title(Span::styled(" Hospital Management System ", Theme::title()))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    f.render_widget(Paragraph::new(items).block(block), chunks[1]);

    render_key_hints(f, chunks[2], &[("1-3", "Choose"), ("Ctrl+Q", "Quit")]);
}

fn menu_line(key: &str, label: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key}. "), Theme::key_hint()),
        Span::styled(label.to_string(), Theme::text()),
    ])
}
