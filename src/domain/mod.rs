//! Domain layer: Core record types and logic.
//!
//! Doctors and patients reference each other by patient-id string only,
//! never by direct reference; the appointment relation lives entirely in
//! each doctor's [`AppointmentBook`].

mod appointment;
mod doctor;
mod patient;
mod person;
mod roster;

pub use appointment::{AppointmentBook, AppointmentEntry, AppointmentError, DEFAULT_STATUS};
pub use doctor::{Credentials, Doctor};
pub use patient::{BillingError, Patient};
pub use person::{Identity, RecordView};
pub use roster::Roster;
