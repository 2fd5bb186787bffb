//! # MediDesk
//!
//! A single-process hospital front desk for the terminal. A fixed roster of
//! doctors and patients is seeded at startup; a doctor or patient logs in and
//! books, postpones, or cancels appointments, changes patient status labels,
//! views medical history, and settles bills. Nothing persists across runs.
//!
//! ## Architecture
//!
//! - `domain`: Core record types (Doctor, Patient, AppointmentBook, Roster)
//! - `application`: The front desk service and its session state machine
//! - `tui`: Terminal user interface
//! - `logging`: Log sanitization for patient identifiers and credentials

pub mod application;
pub mod domain;
pub mod logging;
pub mod tui;

pub use application::{FrontDesk, Session};
pub use domain::{AppointmentBook, Doctor, Patient, Roster};

/// Result type for front desk operations
pub type Result<T> = std::result::Result<T, FrontDeskError>;

/// Main error type for MediDesk
#[derive(Debug, thiserror::Error)]
pub enum FrontDeskError {
    #[error(transparent)]
    Appointment(#[from] domain::AppointmentError),

    #[error(transparent)]
    Billing(#[from] domain::BillingError),

    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Invalid Patient ID: {0}")]
    UnknownPatient(String),

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("No active {0} session")]
    NoSession(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
