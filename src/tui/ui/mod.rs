//! UI module: View components and shared widgets for the TUI.

pub mod doctor;
pub mod login;
pub mod menu;
pub mod patient;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::styles::Theme;

/// One line in a screen's activity panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Plain,
    Success,
    Error,
}

impl Message {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Plain,
        }
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    fn style(&self) -> Style {
        match self.kind {
            MessageKind::Plain => Theme::text(),
            MessageKind::Success => Theme::success(),
            MessageKind::Error => Theme::danger(),
        }
    }
}

/// The value prompt a session action is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub label: &'static str,
    pub hint: &'static str,
    pub value: String,
    pub action: PromptAction,
}

/// What happens with the prompt value on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    // Doctor session
    StatusPatientId,
    StatusLabel { patient_id: String },
    PostponePatientId,
    CancelPatientId,
    // Patient session
    BookDoctorNumber,
    PostponeDoctorNumber,
    CancelDoctorNumber,
    PaymentAmount,
}

impl Prompt {
    fn new(label: &'static str, hint: &'static str, action: PromptAction) -> Self {
        Self {
            label,
            hint,
            value: String::new(),
            action,
        }
    }

    #[must_use]
    pub fn status_patient_id() -> Self {
        Self::new(
            "Enter Patient ID",
            "e.g. P1001",
            PromptAction::StatusPatientId,
        )
    }

    #[must_use]
    pub fn status_label(patient_id: String) -> Self {
        Self::new(
            "Enter Status (Safe / Emergency)",
            "free text",
            PromptAction::StatusLabel { patient_id },
        )
    }

    #[must_use]
    pub fn postpone_patient_id() -> Self {
        Self::new(
            "Enter Patient ID to postpone",
            "e.g. P1001",
            PromptAction::PostponePatientId,
        )
    }

    #[must_use]
    pub fn cancel_patient_id() -> Self {
        Self::new(
            "Enter Patient ID to cancel",
            "e.g. P1001",
            PromptAction::CancelPatientId,
        )
    }

    #[must_use]
    pub fn book_doctor_number() -> Self {
        Self::new(
            "Choose Doctor by number",
            "see Available Doctors",
            PromptAction::BookDoctorNumber,
        )
    }

    #[must_use]
    pub fn postpone_doctor_number() -> Self {
        Self::new(
            "Choose Doctor by number",
            "see Available Doctors",
            PromptAction::PostponeDoctorNumber,
        )
    }

    #[must_use]
    pub fn cancel_doctor_number() -> Self {
        Self::new(
            "Choose Doctor by number",
            "see Available Doctors",
            PromptAction::CancelDoctorNumber,
        )
    }

    #[must_use]
    pub fn payment_amount() -> Self {
        Self::new(
            "Enter Payment Amount",
            "e.g. 4000",
            PromptAction::PaymentAmount,
        )
    }

    /// Append a character, filtered per the expected value shape.
    pub fn input_char(&mut self, c: char) {
        let accepted = match self.action {
            PromptAction::BookDoctorNumber
            | PromptAction::PostponeDoctorNumber
            | PromptAction::CancelDoctorNumber => c.is_ascii_digit(),
            PromptAction::PaymentAmount => c.is_ascii_digit() || c == '.',
            _ => c.is_ascii_graphic() || c == ' ',
        };
        if accepted {
            self.value.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        self.value.pop();
    }
}

/// Render the screen header: title plus a dim subtitle.
pub fn render_header(f: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", Theme::text()),
        Span::styled(title.to_string(), Theme::title()),
        Span::styled(" │ ", Theme::text_dim()),
        Span::styled(subtitle.to_string(), Theme::text_dim()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Theme::border()),
    );

    f.render_widget(header, area);
}

/// Render the rolling activity panel shared by the session screens.
///
/// Shows the tail of `messages` that fits the panel.
pub fn render_activity(f: &mut Frame, area: Rect, messages: &[Message]) {
    let block = Block::default()
        .title(Span::styled(" Activity ", Theme::subtitle()))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let visible = area.height.saturating_sub(2) as usize;
    let start = messages.len().saturating_sub(visible);
    let lines: Vec<Line> = messages[start..]
        .iter()
        .map(|m| Line::from(Span::styled(m.text.clone(), m.style())))
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the footer key hints line.
pub fn render_key_hints(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, desc) in hints {
        spans.push(Span::styled(format!("[{key}] "), Theme::key_hint()));
        spans.push(Span::styled(format!("{desc}  "), Theme::key_desc()));
    }

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Theme::border()),
    );

    f.render_widget(footer, area);
}

/// Render the modal one-line input prompt in the footer area.
pub fn render_prompt(f: &mut Frame, area: Rect, prompt: &Prompt) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", prompt.label), Theme::focused()))
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let value_display = if prompt.value.is_empty() {
        Span::styled(prompt.hint, Theme::text_dim())
    } else {
        Span::styled(prompt.value.as_str(), Theme::text())
    };

    let content = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        value_display,
        Span::styled("▌", Theme::focused()),
    ]))
    .block(block);

    f.render_widget(content, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_filters_digits_for_doctor_choice() {
        let mut prompt = Prompt::book_doctor_number();
        prompt.input_char('a');
        prompt.input_char('3');
        assert_eq!(prompt.value, "3");
    }

    #[test]
    fn test_prompt_accepts_free_text_for_status() {
        let mut prompt = Prompt::status_label("P1001".to_string());
        for c in "Emergency".chars() {
            prompt.input_char(c);
        }
        assert_eq!(prompt.value, "Emergency");
    }

    #[test]
    fn test_prompt_amount_accepts_decimal_point() {
        let mut prompt = Prompt::payment_amount();
        for c in "40.5x".chars() {
            prompt.input_char(c);
        }
        assert_eq!(prompt.value, "40.5");
        prompt.delete_char();
        assert_eq!(prompt.value, "40.");
    }
}
