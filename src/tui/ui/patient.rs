//! Patient session screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::application::DoctorChoice;
use crate::tui::styles::Theme;

use super::{render_activity, render_header, render_key_hints, render_prompt, Message, Prompt};

/// Mutable state of the patient session screen.
#[derive(Debug, Default)]
pub struct PatientScreenState {
    pub messages: Vec<Message>,
    pub prompt: Option<Prompt>,
}

impl PatientScreenState {
    /// Append an activity line, keeping the backlog bounded.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        if self.messages.len() > 200 {
            self.messages.drain(..self.messages.len() - 200);
        }
    }
}

/// Render the patient session: menu, doctor chooser, activity.
pub fn render_patient_session(
    f: &mut Frame,
    area: Rect,
    name: &str,
    doctors: &[DoctorChoice],
    state: &PatientScreenState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Prompt or key hints
        ])
        .split(area);

    render_header(f, chunks[0], &format!("Welcome {name}"), "Patient session");

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);

    render_menu(f, body[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(doctors.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(body[1]);

    render_doctor_list(f, right[0], doctors);
    render_activity(f, right[1], &state.messages);

    match &state.prompt {
        Some(prompt) => render_prompt(f, chunks[2], prompt),
        None => render_key_hints(f, chunks[2], &[("1-7", "Choose action"), ("8", "Logout")]),
    }
}

fn render_menu(f: &mut Frame, area: Rect) {
    let items = vec![
        menu_line("1", "Book Appointment"),
        menu_line("2", "View Appointments"),
        menu_line("3", "Postpone Appointment"),
        menu_line("4", "Cancel Appointment"),
        menu_line("5", "View Bill"),
        menu_line("6", "Make Payment"),
        menu_line("7", "View Health Records"),
        menu_line("8", "Logout"),
    ];

    let block = Block::default()
        .title(Span::styled(" Actions ", Theme::subtitle()))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    f.render_widget(Paragraph::new(items).block(block), area);
}

fn render_doctor_list(f: &mut Frame, area: Rect, doctors: &[DoctorChoice]) {
    let block = Block::default()
        .title(Span::styled(" Available Doctors ", Theme::subtitle()))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let lines: Vec<Line> = doctors
        .iter()
        .enumerate()
        .map(|(i, doc)| {
            Line::from(vec![
                Span::styled(format!(" {}. ", i + 1), Theme::key_hint()),
                Span::styled(format!("Dr. {}", doc.name), Theme::text()),
                Span::styled(format!(" ({})", doc.specialization), Theme::text_dim()),
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
