//! Doctor session screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::AppointmentEntry;
use crate::tui::styles::Theme;

use super::{render_activity, render_header, render_key_hints, render_prompt, Message, Prompt};

/// Mutable state of the doctor session screen.
#[derive(Debug, Default)]
pub struct DoctorScreenState {
    pub messages: Vec<Message>,
    pub prompt: Option<Prompt>,
}

impl DoctorScreenState {
    /// Append an activity line, keeping the backlog bounded.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        if self.messages.len() > 200 {
            self.messages.drain(..self.messages.len() - 200);
        }
    }
}

/// Render the doctor session: menu, live appointment book, activity.
pub fn render_doctor_session(
    f: &mut Frame,
    area: Rect,
    name: &str,
    specialization: &str,
    entries: &[AppointmentEntry],
    state: &DoctorScreenState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Prompt or key hints
        ])
        .split(area);

    render_header(
        f,
        chunks[0],
        &format!("Welcome Dr. {name}"),
        specialization,
    );

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);

    render_menu(f, body[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body[1]);

    render_appointments(f, right[0], entries);
    render_activity(f, right[1], &state.messages);

    match &state.prompt {
        Some(prompt) => render_prompt(f, chunks[2], prompt),
        None => render_key_hints(f, chunks[2], &[("1-4", "Choose action"), ("5", "Logout")]),
    }
}

fn render_menu(f: &mut Frame, area: Rect) {
    let items = vec![
        menu_line("1", "View Appointments"),
        menu_line("2", "Change Patient Status"),
        menu_line("3", "Postpone Appointment"),
        menu_line("4", "Cancel Appointment"),
        menu_line("5", "Logout"),
    ];

    let block = Block::default()
        .title(Span::styled(" Actions ", Theme::subtitle()))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    f.render_widget(Paragraph::new(items).block(block), area);
}

fn render_appointments(f: &mut Frame, area: Rect, entries: &[AppointmentEntry]) {
    let block = Block::default()
        .title(Span::styled(" Appointment Book ", Theme::subtitle()))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    if entries.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No appointments available.",
            Theme::text_dim(),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = entries
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(format!(" {} ", entry.patient_id), Theme::text()),
                Span::styled(entry.status.clone(), Theme::status_label(&entry.status)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn menu_line(key: &str, label: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key}. "), Theme::key_hint()),
        Span::styled(label.to_string(), Theme::text()),
    ])
}
