//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation (main menu, logins, the two session screens)
//! - Input event handling, including the modal value prompts
//! - Front desk service integration

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use zeroize::Zeroize;

use crate::application::FrontDesk;

use super::ui::{
    doctor::{render_doctor_session, DoctorScreenState},
    login::{render_doctor_login, render_patient_login, DoctorLoginState, PatientLoginState},
    menu::render_main_menu,
    patient::{render_patient_session, PatientScreenState},
    Message, Prompt, PromptAction,
};

/// Current screen/view in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    DoctorLogin,
    PatientLogin,
    DoctorSession,
    PatientSession,
}

/// Main application state
pub struct App {
    /// Current screen
    screen: Screen,

    /// Whether the app should quit
    should_quit: bool,

    /// The front desk service owning the roster and session
    front_desk: FrontDesk,

    /// Doctor login form state
    doctor_login: DoctorLoginState,

    /// Patient login state
    patient_login: PatientLoginState,

    /// Doctor session screen state
    doctor_screen: DoctorScreenState,

    /// Patient session screen state
    patient_screen: PatientScreenState,
}

impl App {
    /// Create an application over the fixed demo roster.
    #[must_use]
    pub fn new() -> Self {
        Self::with_front_desk(FrontDesk::seeded())
    }

    /// Create an application over an injected front desk (for tests).
    #[must_use]
    pub fn with_front_desk(front_desk: FrontDesk) -> Self {
        Self {
            screen: Screen::MainMenu,
            should_quit: false,
            front_desk,
            doctor_login: DoctorLoginState::default(),
            patient_login: PatientLoginState::default(),
            doctor_screen: DoctorScreenState::default(),
            patient_screen: PatientScreenState::default(),
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main loop
        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            // Handle input (short poll to stay responsive)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&self, f: &mut Frame) {
        let area = f.area();
        match self.screen {
            Screen::MainMenu => render_main_menu(f, area),
            Screen::DoctorLogin => render_doctor_login(f, area, &self.doctor_login),
            Screen::PatientLogin => render_patient_login(f, area, &self.patient_login),
            Screen::DoctorSession => {
                // Fetch only for render; the service stays the single source of truth.
                let (name, specialization) = match self.front_desk.current_doctor() {
                    Ok(doc) => (doc.name().to_string(), doc.specialization().to_string()),
                    Err(_) => (String::new(), String::new()),
                };
                let entries = self.front_desk.doctor_appointments().unwrap_or_default();
                render_doctor_session(f, area, &name, &specialization, &entries, &self.doctor_screen);
            }
            Screen::PatientSession => {
                let name = self
                    .front_desk
                    .current_patient()
                    .map(|p| p.name().to_string())
                    .unwrap_or_default();
                let doctors = self.front_desk.doctor_choices();
                render_patient_session(f, area, &name, &doctors, &self.patient_screen);
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::MainMenu => self.handle_main_menu_key(key),
            Screen::DoctorLogin => self.handle_doctor_login_key(key),
            Screen::PatientLogin => self.handle_patient_login_key(key),
            Screen::DoctorSession => self.handle_doctor_session_key(key),
            Screen::PatientSession => self.handle_patient_session_key(key),
        }
    }

    fn handle_main_menu_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('1') => {
                self.doctor_login = DoctorLoginState::default();
                self.screen = Screen::DoctorLogin;
            }
            KeyCode::Char('2') => {
                self.patient_login = PatientLoginState::default();
                self.screen = Screen::PatientLogin;
            }
            KeyCode::Char('3') | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_doctor_login_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.doctor_login.clear_sensitive();
                self.screen = Screen::MainMenu;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.doctor_login.next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.doctor_login.prev_field();
            }
            KeyCode::Char(c) => {
                self.doctor_login.input_char(c);
            }
            KeyCode::Backspace => {
                self.doctor_login.delete_char();
            }
            KeyCode::Enter => {
                self.submit_doctor_login();
            }
            _ => {}
        }
    }

    fn submit_doctor_login(&mut self) {
        let result = self
            .front_desk
            .login_doctor(&self.doctor_login.username, &self.doctor_login.password);
        match result {
            Ok(name) => {
                self.doctor_login.clear_sensitive();
                self.doctor_screen = DoctorScreenState::default();
                self.doctor_screen
                    .push(Message::success(format!("Welcome Dr. {name}")));
                self.screen = Screen::DoctorSession;
            }
            Err(e) => {
                // Keep the username for another try; the password never lingers.
                self.doctor_login.password.zeroize();
                self.doctor_login.error_message = Some(e.to_string());
            }
        }
    }

    fn handle_patient_login_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.patient_login.clear();
                self.screen = Screen::MainMenu;
            }
            KeyCode::Char(c) => {
                self.patient_login.input_char(c);
            }
            KeyCode::Backspace => {
                self.patient_login.delete_char();
            }
            KeyCode::Enter => {
                self.submit_patient_login();
            }
            _ => {}
        }
    }

    fn submit_patient_login(&mut self) {
        let patient_id = self.patient_login.patient_id.trim().to_string();
        match self.front_desk.login_patient(&patient_id) {
            Ok(name) => {
                self.patient_login.clear();
                self.patient_screen = PatientScreenState::default();
                self.patient_screen
                    .push(Message::success(format!("Welcome {name}")));
                self.screen = Screen::PatientSession;
            }
            Err(e) => {
                self.patient_login.error_message = Some(e.to_string());
            }
        }
    }

    // =========================================================================
    // Doctor session
    // =========================================================================

    fn handle_doctor_session_key(&mut self, key: KeyCode) {
        if self.doctor_screen.prompt.is_some() {
            match key {
                KeyCode::Esc => {
                    self.doctor_screen.prompt = None;
                }
                KeyCode::Enter => {
                    if let Some(prompt) = self.doctor_screen.prompt.take() {
                        self.submit_doctor_prompt(prompt);
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(prompt) = self.doctor_screen.prompt.as_mut() {
                        prompt.input_char(c);
                    }
                }
                KeyCode::Backspace => {
                    if let Some(prompt) = self.doctor_screen.prompt.as_mut() {
                        prompt.delete_char();
                    }
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('1') => self.show_doctor_appointments(),
            KeyCode::Char('2') => {
                self.doctor_screen.prompt = Some(Prompt::status_patient_id());
            }
            KeyCode::Char('3') => {
                self.doctor_screen.prompt = Some(Prompt::postpone_patient_id());
            }
            KeyCode::Char('4') => {
                self.doctor_screen.prompt = Some(Prompt::cancel_patient_id());
            }
            KeyCode::Char('5') | KeyCode::Esc => {
                self.front_desk.logout();
                self.screen = Screen::MainMenu;
            }
            _ => {}
        }
    }

    fn show_doctor_appointments(&mut self) {
        let header = self
            .front_desk
            .current_doctor()
            .map(|doc| format!("Appointments for Dr. {} ({}):", doc.name(), doc.specialization()))
            .unwrap_or_else(|_| "Appointments:".to_string());

        match self.front_desk.doctor_appointments() {
            Ok(entries) => {
                self.doctor_screen.push(Message::plain(header));
                if entries.is_empty() {
                    self.doctor_screen
                        .push(Message::plain("No appointments available."));
                } else {
                    for entry in entries {
                        self.doctor_screen.push(Message::plain(format!(
                            "- Patient ID: {}, Status: {}",
                            entry.patient_id, entry.status
                        )));
                    }
                }
            }
            Err(e) => self.doctor_screen.push(Message::error(e.to_string())),
        }
    }

    fn submit_doctor_prompt(&mut self, prompt: Prompt) {
        let value = prompt.value.trim().to_string();
        match prompt.action {
            PromptAction::StatusPatientId => {
                // Two-step prompt: id first, then the new label.
                self.doctor_screen.prompt = Some(Prompt::status_label(value));
            }
            PromptAction::StatusLabel { patient_id } => {
                match self.front_desk.change_patient_status(&patient_id, &value) {
                    Ok(()) => self.doctor_screen.push(Message::success(format!(
                        "Patient ID: {patient_id} status updated to: {value}"
                    ))),
                    Err(_) => self
                        .doctor_screen
                        .push(Message::error("Invalid patient ID or no appointment booked.")),
                }
            }
            PromptAction::PostponePatientId => match self.front_desk.postpone_patient(&value) {
                Ok(()) => self.doctor_screen.push(Message::success(format!(
                    "Appointment postponed for patient ID: {value}"
                ))),
                Err(e) => self.doctor_screen.push(Message::error(e.to_string())),
            },
            PromptAction::CancelPatientId => match self.front_desk.cancel_patient(&value) {
                Ok(()) => self.doctor_screen.push(Message::success(format!(
                    "Appointment canceled for patient ID: {value}"
                ))),
                Err(e) => self.doctor_screen.push(Message::error(e.to_string())),
            },
            // Patient-side prompts are never opened on this screen.
            _ => {}
        }
    }

    // =========================================================================
    // Patient session
    // =========================================================================

    fn handle_patient_session_key(&mut self, key: KeyCode) {
        if self.patient_screen.prompt.is_some() {
            match key {
                KeyCode::Esc => {
                    self.patient_screen.prompt = None;
                }
                KeyCode::Enter => {
                    if let Some(prompt) = self.patient_screen.prompt.take() {
                        self.submit_patient_prompt(prompt);
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(prompt) = self.patient_screen.prompt.as_mut() {
                        prompt.input_char(c);
                    }
                }
                KeyCode::Backspace => {
                    if let Some(prompt) = self.patient_screen.prompt.as_mut() {
                        prompt.delete_char();
                    }
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('1') => {
                self.patient_screen.prompt = Some(Prompt::book_doctor_number());
            }
            KeyCode::Char('2') => self.show_patient_appointments(),
            KeyCode::Char('3') => {
                self.patient_screen.prompt = Some(Prompt::postpone_doctor_number());
            }
            KeyCode::Char('4') => {
                self.patient_screen.prompt = Some(Prompt::cancel_doctor_number());
            }
            KeyCode::Char('5') => self.show_patient_bill(),
            KeyCode::Char('6') => {
                self.patient_screen.prompt = Some(Prompt::payment_amount());
            }
            KeyCode::Char('7') => self.show_patient_record(),
            KeyCode::Char('8') | KeyCode::Esc => {
                self.front_desk.logout();
                self.screen = Screen::MainMenu;
            }
            _ => {}
        }
    }

    fn show_patient_appointments(&mut self) {
        match self.front_desk.my_appointments() {
            Ok(doctors) => {
                self.patient_screen.push(Message::plain("Your Appointments:"));
                if doctors.is_empty() {
                    self.patient_screen
                        .push(Message::plain("No appointments found."));
                } else {
                    for doc in doctors {
                        self.patient_screen.push(Message::plain(format!(
                            "- Dr. {} ({})",
                            doc.name, doc.specialization
                        )));
                    }
                }
            }
            Err(e) => self.patient_screen.push(Message::error(e.to_string())),
        }
    }

    fn show_patient_bill(&mut self) {
        match self.front_desk.my_bill() {
            Ok(due) => self
                .patient_screen
                .push(Message::plain(format!("Due Bill: Rs.{}", due as u64))),
            Err(e) => self.patient_screen.push(Message::error(e.to_string())),
        }
    }

    fn show_patient_record(&mut self) {
        match self.front_desk.my_record() {
            Ok(lines) => {
                for line in lines {
                    self.patient_screen.push(Message::plain(line));
                }
            }
            Err(e) => self.patient_screen.push(Message::error(e.to_string())),
        }
    }

    fn submit_patient_prompt(&mut self, prompt: Prompt) {
        let value = prompt.value.trim().to_string();
        match prompt.action {
            PromptAction::BookDoctorNumber => match parse_choice(&value) {
                Some(index) => match self.front_desk.book_with_doctor(index) {
                    Ok(name) => self
                        .patient_screen
                        .push(Message::success(format!("Appointment booked with Dr. {name}"))),
                    Err(e) => self.patient_screen.push(Message::error(e.to_string())),
                },
                None => self
                    .patient_screen
                    .push(Message::error(format!("Invalid choice: {value}"))),
            },
            PromptAction::PostponeDoctorNumber => match parse_choice(&value) {
                Some(index) => match self.front_desk.postpone_with_doctor(index) {
                    Ok(name) => self.patient_screen.push(Message::success(format!(
                        "Appointment postponed with Dr. {name}"
                    ))),
                    Err(e) => self.patient_screen.push(Message::error(e.to_string())),
                },
                None => self
                    .patient_screen
                    .push(Message::error(format!("Invalid choice: {value}"))),
            },
            PromptAction::CancelDoctorNumber => match parse_choice(&value) {
                Some(index) => match self.front_desk.cancel_with_doctor(index) {
                    Ok(name) => self.patient_screen.push(Message::success(format!(
                        "Appointment canceled with Dr. {name}"
                    ))),
                    Err(e) => self.patient_screen.push(Message::error(e.to_string())),
                },
                None => self
                    .patient_screen
                    .push(Message::error(format!("Invalid choice: {value}"))),
            },
            PromptAction::PaymentAmount => match value.parse::<f64>() {
                Ok(amount) => match self.front_desk.pay_bill(amount) {
                    Ok(remaining) => self.patient_screen.push(Message::success(format!(
                        "Payment of Rs.{} made. Remaining bill: Rs.{}",
                        amount as u64, remaining as u64
                    ))),
                    Err(e) => self.patient_screen.push(Message::error(e.to_string())),
                },
                Err(_) => self.patient_screen.push(Message::error("Invalid amount.")),
            },
            // Doctor-side prompts are never opened on this screen.
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a 1-based menu answer to a 0-based index.
fn parse_choice(value: &str) -> Option<usize> {
    value.parse::<usize>().ok().and_then(|n| n.checked_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Session;
    use crate::tui::ui::MessageKind;

    fn press(app: &mut App, key: KeyCode) {
        app.handle_key(key, KeyModifiers::NONE);
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_main_menu_navigation() {
        let mut app = App::new();
        assert_eq!(app.screen, Screen::MainMenu);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.screen, Screen::DoctorLogin);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::MainMenu);

        press(&mut app, KeyCode::Char('3'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_doctor_login_flow() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('1'));

        type_str(&mut app, "Mark");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "pass1");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, Screen::DoctorSession);
        assert_eq!(app.front_desk.session(), Session::Doctor(0));

        // Credential buffers are wiped after a successful login.
        assert!(app.doctor_login.username.is_empty());
        assert!(app.doctor_login.password.is_empty());
    }

    #[test]
    fn test_doctor_login_rejects_bad_password() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('1'));

        type_str(&mut app, "Mark");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "wrong");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, Screen::DoctorLogin);
        assert!(app.doctor_login.error_message.is_some());
        assert!(app.doctor_login.password.is_empty());
        assert_eq!(app.front_desk.session(), Session::Anonymous);
    }

    #[test]
    fn test_patient_booking_and_payment_flow() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('2'));
        type_str(&mut app, "P1001");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::PatientSession);

        // Book with doctor 1 (Dr. Mark).
        press(&mut app, KeyCode::Char('1'));
        type_str(&mut app, "1");
        press(&mut app, KeyCode::Enter);
        assert!(app
            .front_desk
            .roster()
            .doctors()[0]
            .has_appointment("P1001"));

        // Pay 4000 off the 10000 bill.
        press(&mut app, KeyCode::Char('6'));
        type_str(&mut app, "4000");
        press(&mut app, KeyCode::Enter);
        let last = app.patient_screen.messages.last().expect("Message exists");
        assert_eq!(last.kind, MessageKind::Success);
        assert!(last.text.contains("Remaining bill: Rs.6000"));

        // Overpayment is rejected with a message.
        press(&mut app, KeyCode::Char('6'));
        type_str(&mut app, "20000");
        press(&mut app, KeyCode::Enter);
        let last = app.patient_screen.messages.last().expect("Message exists");
        assert_eq!(last.kind, MessageKind::Error);
    }

    #[test]
    fn test_out_of_range_doctor_number_reports_choice_error() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('2'));
        type_str(&mut app, "P1002");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('1'));
        type_str(&mut app, "9");
        press(&mut app, KeyCode::Enter);

        let last = app.patient_screen.messages.last().expect("Message exists");
        assert_eq!(last.kind, MessageKind::Error);
        assert!(last.text.contains("Invalid choice"));
    }

    #[test]
    fn test_logout_returns_to_main_menu() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('2'));
        type_str(&mut app, "P1003");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.front_desk.session(), Session::Patient(2));

        press(&mut app, KeyCode::Char('8'));
        assert_eq!(app.screen, Screen::MainMenu);
        assert_eq!(app.front_desk.session(), Session::Anonymous);
    }

    #[test]
    fn test_doctor_status_change_two_step_prompt() {
        let mut app = App::new();

        // Book P1001 with Dr. Mark first.
        press(&mut app, KeyCode::Char('2'));
        type_str(&mut app, "P1001");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('1'));
        type_str(&mut app, "1");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('8'));

        // Log in as Dr. Mark and flag the patient.
        press(&mut app, KeyCode::Char('1'));
        type_str(&mut app, "Mark");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "pass1");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('2'));
        type_str(&mut app, "P1001");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Emergency");
        press(&mut app, KeyCode::Enter);

        let entries = app.front_desk.doctor_appointments().expect("Should list");
        assert_eq!(entries[0].status, "Emergency");
    }
}
