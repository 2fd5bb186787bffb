//! Doctor records and their console login credentials.

use zeroize::Zeroize;

use super::appointment::{AppointmentBook, AppointmentEntry, AppointmentError};
use super::person::{Identity, RecordView};

/// Console login credentials, checked by plain string equality.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Drop for Credentials {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// A doctor on the roster, owning the appointment book kept in their name.
#[derive(Debug, Clone)]
pub struct Doctor {
    identity: Identity,
    specialization: String,
    credentials: Credentials,
    appointments: AppointmentBook,
}

impl Doctor {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        age: u8,
        specialization: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            identity: Identity::new(name, age),
            specialization: specialization.into(),
            credentials: Credentials::new(username, password),
            appointments: AppointmentBook::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    #[must_use]
    pub fn age(&self) -> u8 {
        self.identity.age
    }

    #[must_use]
    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    /// Plain string-equality credential check.
    #[must_use]
    pub fn verify_login(&self, username: &str, password: &str) -> bool {
        self.credentials.matches(username, password)
    }

    /// Book an appointment for the given patient id.
    ///
    /// # Errors
    /// Returns [`AppointmentError::Duplicate`] if already booked.
    pub fn book_appointment(&mut self, patient_id: &str) -> Result<(), AppointmentError> {
        self.appointments.book(patient_id)
    }

    /// Postpone an appointment (existence check only, no state change).
    ///
    /// # Errors
    /// Returns [`AppointmentError::NotFound`] if not booked.
    pub fn postpone_appointment(&self, patient_id: &str) -> Result<(), AppointmentError> {
        self.appointments.postpone(patient_id)
    }

    /// Cancel an appointment.
    ///
    /// # Errors
    /// Returns [`AppointmentError::NotFound`] if not booked.
    pub fn cancel_appointment(&mut self, patient_id: &str) -> Result<(), AppointmentError> {
        self.appointments.cancel(patient_id)
    }

    /// Overwrite a booked patient's status label.
    ///
    /// # Errors
    /// Returns [`AppointmentError::NotFound`] if not booked.
    pub fn change_patient_status(
        &mut self,
        patient_id: &str,
        status: impl Into<String>,
    ) -> Result<(), AppointmentError> {
        self.appointments.change_status(patient_id, status)
    }

    #[must_use]
    pub fn has_appointment(&self, patient_id: &str) -> bool {
        self.appointments.contains(patient_id)
    }

    #[must_use]
    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }

    /// Appointments in booking order.
    #[must_use]
    pub fn appointments(&self) -> Vec<AppointmentEntry> {
        self.appointments.entries()
    }
}

impl RecordView for Doctor {
    fn record_lines(&self) -> Vec<String> {
        vec![
            format!("Dr. {} ({})", self.name(), self.specialization),
            format!("Age: {}", self.age()),
            format!("Booked patients: {}", self.appointments.len()),
        ]
    }
}
