//! Login screens for doctors and patients.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use zeroize::Zeroize;

use crate::tui::styles::Theme;

use super::{render_header, render_key_hints};

/// Doctor login form state: username and password buffers.
#[derive(Debug, Default)]
pub struct DoctorLoginState {
    pub username: String,
    pub password: String,
    pub selected_field: usize,
    pub error_message: Option<String>,
}

impl DoctorLoginState {
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % 2;
    }

    pub fn prev_field(&mut self) {
        self.next_field();
    }

    pub fn input_char(&mut self, c: char) {
        if c.is_ascii_graphic() {
            match self.selected_field {
                0 => self.username.push(c),
                _ => self.password.push(c),
            }
            self.error_message = None;
        }
    }

    pub fn delete_char(&mut self) {
        match self.selected_field {
            0 => self.username.pop(),
            _ => self.password.pop(),
        };
    }

    /// Wipe both credential buffers so they do not linger in UI state.
    pub fn clear_sensitive(&mut self) {
        self.username.zeroize();
        self.password.zeroize();
        self.selected_field = 0;
    }
}

/// Patient login state: a single patient-id buffer.
#[derive(Debug, Default)]
pub struct PatientLoginState {
    pub patient_id: String,
    pub error_message: Option<String>,
}

impl PatientLoginState {
    pub fn input_char(&mut self, c: char) {
        if c.is_ascii_graphic() {
            self.patient_id.push(c);
            self.error_message = None;
        }
    }

    pub fn delete_char(&mut self) {
        self.patient_id.pop();
    }

    pub fn clear(&mut self) {
        self.patient_id.clear();
        self.error_message = None;
    }
}

/// Render the doctor login form.
pub fn render_doctor_login(f: &mut Frame, area: Rect, state: &DoctorLoginState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(1), // Error
            Constraint::Min(0),
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(f, chunks[0], "Doctor Login", "Enter your credentials");

    render_field(
        f,
        chunks[1],
        "Username",
        &state.username,
        state.selected_field == 0,
        false,
    );
    render_field(
        f,
        chunks[2],
        "Password",
        &state.password,
        state.selected_field == 1,
        true,
    );

    render_error(f, chunks[3], state.error_message.as_deref());

    render_key_hints(
        f,
        chunks[5],
        &[
            ("Tab", "Next field"),
            ("Enter", "Login"),
            ("Esc", "Back"),
        ],
    );
}

/// Render the patient login screen.
pub fn render_patient_login(f: &mut Frame, area: Rect, state: &PatientLoginState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Patient ID
            Constraint::Length(1), // Error
            Constraint::Min(0),
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(f, chunks[0], "Patient Login", "Enter your Patient ID");

    render_field(f, chunks[1], "Patient ID", &state.patient_id, true, false);

    render_error(f, chunks[2], state.error_message.as_deref());

    render_key_hints(f, chunks[4], &[("Enter", "Login"), ("Esc", "Back")]);
}

fn render_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    mask: bool,
) {
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let title_style = if focused {
        Theme::focused()
    } else {
        Theme::text_dim()
    };

    let block = Block::default()
        .title(Span::styled(format!(" {label} "), title_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    let shown = if mask {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let mut spans = vec![Span::raw(" "), Span::styled(shown, Theme::text())];
    if focused {
        spans.push(Span::styled("▌", Theme::focused()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_error(f: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(err) = error {
        let line = Line::from(vec![
            Span::styled(" ! ", Theme::danger()),
            Span::styled(err.to_string(), Theme::danger()),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }
}
