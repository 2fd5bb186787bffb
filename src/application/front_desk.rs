//! Front desk coordinator: one interactive session at a time over the roster.
//!
//! Every menu action in the UI maps to one method here. Failures come back as
//! [`FrontDeskError`] values and are rendered as messages at the menu layer;
//! none are fatal.

use crate::domain::{AppointmentEntry, Doctor, Patient, RecordView, Roster};
use crate::{FrontDeskError, Result};

/// Who is currently logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    /// A doctor session, by roster index.
    Doctor(usize),
    /// A patient session, by roster index.
    Patient(usize),
}

/// A doctor line offered in the patient-side chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorChoice {
    pub name: String,
    pub specialization: String,
}

/// The front desk service owning the roster and the active session.
pub struct FrontDesk {
    roster: Roster,
    session: Session,
}

impl FrontDesk {
    #[must_use]
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            session: Session::Anonymous,
        }
    }

    /// A front desk over the fixed demo roster.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(Roster::seed())
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.session
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    // =========================================================================
    // Session transitions
    // =========================================================================

    /// Log a doctor in by credential scan (first match wins).
    ///
    /// # Errors
    /// Returns [`FrontDeskError::InvalidCredentials`] if no doctor matches.
    pub fn login_doctor(&mut self, username: &str, password: &str) -> Result<String> {
        let index = self
            .roster
            .authenticate_doctor(username, password)
            .ok_or(FrontDeskError::InvalidCredentials)?;
        self.session = Session::Doctor(index);

        let name = self.roster.doctors()[index].name().to_string();
        tracing::info!(doctor = %name, "doctor logged in");
        Ok(name)
    }

    /// Log a patient in by exact patient-id match.
    ///
    /// # Errors
    /// Returns [`FrontDeskError::UnknownPatient`] if the id is not on the roster.
    pub fn login_patient(&mut self, patient_id: &str) -> Result<String> {
        let index = self
            .roster
            .find_patient(patient_id)
            .ok_or_else(|| FrontDeskError::UnknownPatient(patient_id.to_string()))?;
        self.session = Session::Patient(index);

        tracing::info!(patient_id, "patient logged in");
        Ok(self.roster.patients()[index].name().to_string())
    }

    /// Return to the anonymous state.
    pub fn logout(&mut self) {
        if self.session != Session::Anonymous {
            tracing::info!("session logged out");
        }
        self.session = Session::Anonymous;
    }

    fn doctor_index(&self) -> Result<usize> {
        match self.session {
            Session::Doctor(index) => Ok(index),
            _ => Err(FrontDeskError::NoSession("doctor")),
        }
    }

    fn patient_index(&self) -> Result<usize> {
        match self.session {
            Session::Patient(index) => Ok(index),
            _ => Err(FrontDeskError::NoSession("patient")),
        }
    }

    /// The doctor of the active session.
    ///
    /// # Errors
    /// Returns [`FrontDeskError::NoSession`] outside a doctor session.
    pub fn current_doctor(&self) -> Result<&Doctor> {
        let index = self.doctor_index()?;
        self.roster
            .doctor(index)
            .ok_or(FrontDeskError::NoSession("doctor"))
    }

    fn current_doctor_mut(&mut self) -> Result<&mut Doctor> {
        let index = self.doctor_index()?;
        self.roster
            .doctor_mut(index)
            .ok_or(FrontDeskError::NoSession("doctor"))
    }

    /// The patient of the active session.
    ///
    /// # Errors
    /// Returns [`FrontDeskError::NoSession`] outside a patient session.
    pub fn current_patient(&self) -> Result<&Patient> {
        let index = self.patient_index()?;
        self.roster
            .patient(index)
            .ok_or(FrontDeskError::NoSession("patient"))
    }

    fn current_patient_mut(&mut self) -> Result<&mut Patient> {
        let index = self.patient_index()?;
        self.roster
            .patient_mut(index)
            .ok_or(FrontDeskError::NoSession("patient"))
    }

    // =========================================================================
    // Doctor-session operations
    // =========================================================================

    /// The logged-in doctor's appointments in booking order.
    ///
    /// # Errors
    /// Returns [`FrontDeskError::NoSession`] outside a doctor session.
    pub fn doctor_appointments(&self) -> Result<Vec<AppointmentEntry>> {
        Ok(self.current_doctor()?.appointments())
    }

    /// Overwrite a booked patient's status label.
    ///
    /// # Errors
    /// Fails if the patient was never booked with this doctor.
    pub fn change_patient_status(&mut self, patient_id: &str, status: &str) -> Result<()> {
        self.current_doctor_mut()?
            .change_patient_status(patient_id, status)?;
        tracing::info!(patient_id, status, "patient status updated");
        Ok(())
    }

    /// Postpone an appointment in the logged-in doctor's book.
    ///
    /// Postponement is an existence check with no state change.
    ///
    /// # Errors
    /// Fails if the patient was never booked with this doctor.
    pub fn postpone_patient(&self, patient_id: &str) -> Result<()> {
        self.current_doctor()?.postpone_appointment(patient_id)?;
        tracing::info!(patient_id, "appointment postponed");
        Ok(())
    }

    /// Cancel an appointment in the logged-in doctor's book.
    ///
    /// # Errors
    /// Fails if the patient was never booked with this doctor.
    pub fn cancel_patient(&mut self, patient_id: &str) -> Result<()> {
        self.current_doctor_mut()?.cancel_appointment(patient_id)?;
        tracing::info!(patient_id, "appointment canceled");
        Ok(())
    }

    // =========================================================================
    // Patient-session operations
    // =========================================================================

    /// Every doctor on the roster, for the numbered chooser.
    #[must_use]
    pub fn doctor_choices(&self) -> Vec<DoctorChoice> {
        self.roster
            .doctors()
            .iter()
            .map(|doc| DoctorChoice {
                name: doc.name().to_string(),
                specialization: doc.specialization().to_string(),
            })
            .collect()
    }

    fn chosen_doctor_mut(&mut self, doctor_index: usize) -> Result<&mut Doctor> {
        let count = self.roster.doctors().len();
        if doctor_index >= count {
            return Err(FrontDeskError::InvalidChoice(format!("{}", doctor_index + 1)));
        }
        self.roster
            .doctor_mut(doctor_index)
            .ok_or_else(|| FrontDeskError::InvalidChoice(format!("{}", doctor_index + 1)))
    }

    /// Book the logged-in patient with the doctor at `doctor_index` (0-based).
    ///
    /// # Errors
    /// Fails on an out-of-range choice or a duplicate booking.
    pub fn book_with_doctor(&mut self, doctor_index: usize) -> Result<String> {
        let patient_id = self.current_patient()?.patient_id().to_string();
        let doctor = self.chosen_doctor_mut(doctor_index)?;
        doctor.book_appointment(&patient_id)?;

        let name = doctor.name().to_string();
        tracing::info!(patient_id, doctor = %name, "appointment booked");
        Ok(name)
    }

    /// Postpone the logged-in patient's appointment with the chosen doctor.
    ///
    /// # Errors
    /// Fails on an out-of-range choice or if no appointment exists there.
    pub fn postpone_with_doctor(&mut self, doctor_index: usize) -> Result<String> {
        let patient_id = self.current_patient()?.patient_id().to_string();
        let doctor = self.chosen_doctor_mut(doctor_index)?;
        doctor.postpone_appointment(&patient_id)?;

        let name = doctor.name().to_string();
        tracing::info!(patient_id, doctor = %name, "appointment postponed");
        Ok(name)
    }

    /// Cancel the logged-in patient's appointment with the chosen doctor.
    ///
    /// # Errors
    /// Fails on an out-of-range choice or if no appointment exists there.
    pub fn cancel_with_doctor(&mut self, doctor_index: usize) -> Result<String> {
        let patient_id = self.current_patient()?.patient_id().to_string();
        let doctor = self.chosen_doctor_mut(doctor_index)?;
        doctor.cancel_appointment(&patient_id)?;

        let name = doctor.name().to_string();
        tracing::info!(patient_id, doctor = %name, "appointment canceled");
        Ok(name)
    }

    /// Doctors currently attending the logged-in patient, in roster order.
    ///
    /// # Errors
    /// Returns [`FrontDeskError::NoSession`] outside a patient session.
    pub fn my_appointments(&self) -> Result<Vec<DoctorChoice>> {
        let patient = self.current_patient()?;
        Ok(patient
            .attending_doctors(self.roster.doctors())
            .into_iter()
            .map(|doc| DoctorChoice {
                name: doc.name().to_string(),
                specialization: doc.specialization().to_string(),
            })
            .collect())
    }

    /// The logged-in patient's due balance.
    ///
    /// # Errors
    /// Returns [`FrontDeskError::NoSession`] outside a patient session.
    pub fn my_bill(&self) -> Result<f64> {
        Ok(self.current_patient()?.due_balance())
    }

    /// Pay `amount` off the logged-in patient's bill; returns the remainder.
    ///
    /// # Errors
    /// Fails if the amount is non-positive or exceeds the balance.
    pub fn pay_bill(&mut self, amount: f64) -> Result<f64> {
        let remaining = self.current_patient_mut()?.make_payment(amount)?;
        tracing::info!(amount, remaining, "payment received");
        Ok(remaining)
    }

    /// The logged-in patient's record card (identity + medical history).
    ///
    /// # Errors
    /// Returns [`FrontDeskError::NoSession`] outside a patient session.
    pub fn my_record(&self) -> Result<Vec<String>> {
        Ok(self.current_patient()?.record_lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AppointmentError;

    fn desk() -> FrontDesk {
        FrontDesk::seeded()
    }

    #[test]
    fn test_session_transitions() {
        let mut desk = desk();
        assert_eq!(desk.session(), Session::Anonymous);

        let name = desk.login_doctor("Mark", "pass1").expect("Should log in");
        assert_eq!(name, "Mark");
        assert_eq!(desk.session(), Session::Doctor(0));

        desk.logout();
        assert_eq!(desk.session(), Session::Anonymous);

        let name = desk.login_patient("P1001").expect("Should log in");
        assert_eq!(name, "Patient1");
        assert_eq!(desk.session(), Session::Patient(0));

        desk.logout();
        assert_eq!(desk.session(), Session::Anonymous);
    }

    #[test]
    fn test_invalid_credentials() {
        let mut desk = desk();
        let err = desk
            .login_doctor("Mark", "wrong")
            .expect_err("Login must fail");
        assert!(matches!(err, FrontDeskError::InvalidCredentials));
        assert_eq!(desk.session(), Session::Anonymous);
    }

    #[test]
    fn test_unknown_patient_id() {
        let mut desk = desk();
        let err = desk.login_patient("P9999").expect_err("Login must fail");
        assert!(matches!(err, FrontDeskError::UnknownPatient(_)));
        assert_eq!(desk.session(), Session::Anonymous);
    }

    #[test]
    fn test_operations_require_matching_session() {
        let mut desk = desk();
        assert!(matches!(
            desk.doctor_appointments(),
            Err(FrontDeskError::NoSession("doctor"))
        ));
        assert!(matches!(
            desk.my_bill(),
            Err(FrontDeskError::NoSession("patient"))
        ));

        desk.login_doctor("Mark", "pass1").expect("Should log in");
        assert!(matches!(
            desk.my_bill(),
            Err(FrontDeskError::NoSession("patient"))
        ));
    }

    #[test]
    fn test_patient_booking_round_trip() {
        let mut desk = desk();
        desk.login_patient("P1001").expect("Should log in");

        let name = desk.book_with_doctor(0).expect("Should book");
        assert_eq!(name, "Mark");

        // Booking the same doctor twice fails and keeps one entry.
        let err = desk.book_with_doctor(0).expect_err("Duplicate must fail");
        assert!(matches!(
            err,
            FrontDeskError::Appointment(AppointmentError::Duplicate(_))
        ));

        let attending = desk.my_appointments().expect("Should list");
        assert_eq!(attending.len(), 1);
        assert_eq!(attending[0].name, "Mark");

        // Cancel removes the relation.
        desk.cancel_with_doctor(0).expect("Should cancel");
        assert!(desk.my_appointments().expect("Should list").is_empty());
    }

    #[test]
    fn test_doctor_sees_patient_booking() {
        let mut desk = desk();
        desk.login_patient("P1002").expect("Should log in");
        desk.book_with_doctor(1).expect("Should book");
        desk.logout();

        desk.login_doctor("John", "pass2").expect("Should log in");
        let entries = desk.doctor_appointments().expect("Should list");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].patient_id, "P1002");
        assert_eq!(entries[0].status, "Safe");

        desk.change_patient_status("P1002", "Emergency")
            .expect("Should update");
        let entries = desk.doctor_appointments().expect("Should list");
        assert_eq!(entries[0].status, "Emergency");
    }

    #[test]
    fn test_postpone_leaves_state_untouched() {
        let mut desk = desk();
        desk.login_patient("P1003").expect("Should log in");
        desk.book_with_doctor(2).expect("Should book");
        desk.logout();

        desk.login_doctor("Tony", "pass3").expect("Should log in");
        let before = desk.doctor_appointments().expect("Should list");
        desk.postpone_patient("P1003").expect("Should postpone");
        assert_eq!(desk.doctor_appointments().expect("Should list"), before);

        let err = desk
            .postpone_patient("P1004")
            .expect_err("Unbooked postpone must fail");
        assert!(matches!(
            err,
            FrontDeskError::Appointment(AppointmentError::NotFound)
        ));
    }

    #[test]
    fn test_out_of_range_doctor_choice() {
        let mut desk = desk();
        desk.login_patient("P1001").expect("Should log in");

        let err = desk.book_with_doctor(5).expect_err("Choice must fail");
        assert!(matches!(err, FrontDeskError::InvalidChoice(_)));
    }

    #[test]
    fn test_seeded_p1001_payment_scenario() {
        let mut desk = desk();
        desk.login_patient("P1001").expect("Should log in");
        assert!((desk.my_bill().expect("Should read") - 10_000.0).abs() < f64::EPSILON);

        let remaining = desk.pay_bill(4_000.0).expect("Should pay");
        assert!((remaining - 6_000.0).abs() < f64::EPSILON);

        let err = desk.pay_bill(20_000.0).expect_err("Overpayment must fail");
        assert!(matches!(err, FrontDeskError::Billing(_)));
        assert!((desk.my_bill().expect("Should read") - 6_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_my_record_shows_seeded_history() {
        let mut desk = desk();
        desk.login_patient("P1005").expect("Should log in");
        let lines = desk.my_record().expect("Should read");
        assert!(lines[0].contains("Patient5"));
        assert!(lines.iter().any(|l| l.contains("Visit 5 - Routine Checkup")));
    }

    #[test]
    fn test_bookings_with_multiple_doctors_tracked_independently() {
        let mut desk = desk();
        desk.login_patient("P1001").expect("Should log in");
        desk.book_with_doctor(0).expect("Should book");
        desk.book_with_doctor(3).expect("Should book");

        let attending = desk.my_appointments().expect("Should list");
        let names: Vec<&str> = attending.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Mark", "David"]);

        desk.cancel_with_doctor(0).expect("Should cancel");
        let attending = desk.my_appointments().expect("Should list");
        assert_eq!(attending.len(), 1);
        assert_eq!(attending[0].name, "David");
    }
}
