//! Patient records: identity, medical history, and the outstanding bill.

use serde::{Deserialize, Serialize};

use super::appointment::AppointmentError;
use super::doctor::Doctor;
use super::person::{Identity, RecordView};

/// Errors from billing operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BillingError {
    #[error("Invalid amount.")]
    InvalidAmount { amount: f64, due: f64 },
}

/// A patient on the roster.
///
/// The patient id is immutable and unique; medical history is append-only;
/// the due balance never goes negative and only decreases via payments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    identity: Identity,
    patient_id: String,
    medical_history: Vec<String>,
    due_balance: f64,
}

impl Patient {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        age: u8,
        patient_id: impl Into<String>,
        due_balance: f64,
    ) -> Self {
        Self {
            identity: Identity::new(name, age),
            patient_id: patient_id.into(),
            medical_history: Vec::new(),
            due_balance: due_balance.max(0.0),
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
    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    /// Append an entry to the medical history. Always succeeds.
    pub fn add_medical_record(&mut self, entry: impl Into<String>) {
        self.medical_history.push(entry.into());
    }

    #[must_use]
    pub fn medical_history(&self) -> &[String] {
        &self.medical_history
    }

    #[must_use]
    pub fn due_balance(&self) -> f64 {
        self.due_balance
    }

    /// Balance in whole currency units, as printed on the bill.
    #[must_use]
    pub fn due_balance_rupees(&self) -> u64 {
        self.due_balance as u64
    }

    /// Pay `amount` off the bill and return the remaining balance.
    ///
    /// # Errors
    /// Returns [`BillingError::InvalidAmount`] if `amount` exceeds the due
    /// balance, or is zero or negative. No partial application.
    pub fn make_payment(&mut self, amount: f64) -> Result<f64, BillingError> {
        if amount <= 0.0 || amount > self.due_balance {
            return Err(BillingError::InvalidAmount {
                amount,
                due: self.due_balance,
            });
        }
        self.due_balance -= amount;
        Ok(self.due_balance)
    }

    /// Book with `doctor` under this patient's own id.
    ///
    /// # Errors
    /// Returns [`AppointmentError::Duplicate`] if already booked there.
    pub fn book_with(&self, doctor: &mut Doctor) -> Result<(), AppointmentError> {
        doctor.book_appointment(&self.patient_id)
    }

    /// Postpone with `doctor` (existence check only).
    ///
    /// # Errors
    /// Returns [`AppointmentError::NotFound`] if not booked there.
    pub fn postpone_with(&self, doctor: &Doctor) -> Result<(), AppointmentError> {
        doctor.postpone_appointment(&self.patient_id)
    }

    /// Cancel with `doctor`.
    ///
    /// # Errors
    /// Returns [`AppointmentError::NotFound`] if not booked there.
    pub fn cancel_with(&self, doctor: &mut Doctor) -> Result<(), AppointmentError> {
        doctor.cancel_appointment(&self.patient_id)
    }

    /// Doctors whose book contains this patient, in roster order.
    #[must_use]
    pub fn attending_doctors<'a>(&self, doctors: &'a [Doctor]) -> Vec<&'a Doctor> {
        doctors
            .iter()
            .filter(|doc| doc.has_appointment(&self.patient_id))
            .collect()
    }
}

impl RecordView for Patient {
    fn record_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Patient: {}, ID: {}, Age: {}",
                self.name(),
                self.patient_id,
                self.age()
            ),
            "Medical History:".to_string(),
        ];
        for record in &self.medical_history {
            lines.push(format!("- {record}"));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient() -> Patient {
        Patient::new("Patient1", 21, "P1001", 10_000.0)
    }

    #[test]
    fn test_payment_reduces_balance_exactly() {
        let mut p = patient();
        let remaining = p.make_payment(4_000.0).expect("Should pay");
        assert!((remaining - 6_000.0).abs() < f64::EPSILON);
        assert!((p.due_balance() - 6_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overpayment_rejected_and_balance_unchanged() {
        let mut p = patient();
        p.make_payment(4_000.0).expect("Should pay");

        let err = p.make_payment(20_000.0).expect_err("Overpayment must fail");
        assert!(matches!(err, BillingError::InvalidAmount { .. }));
        assert!((p.due_balance() - 6_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_positive_payment_rejected() {
        let mut p = patient();
        assert!(p.make_payment(0.0).is_err());
        assert!(p.make_payment(-50.0).is_err());
        assert!((p.due_balance() - 10_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_full_payment_clears_balance() {
        let mut p = patient();
        let remaining = p.make_payment(10_000.0).expect("Should pay");
        assert_eq!(remaining, 0.0);
        assert_eq!(p.due_balance_rupees(), 0);
    }

    #[test]
    fn test_medical_history_appends() {
        let mut p = patient();
        p.add_medical_record("Visit 1 - Routine Checkup");
        p.add_medical_record("Visit 2 - Follow-up");
        assert_eq!(p.medical_history().len(), 2);
        assert_eq!(p.medical_history()[0], "Visit 1 - Routine Checkup");
    }

    #[test]
    fn test_attending_doctors_in_roster_order() {
        let mut doctors = vec![
            Doctor::new("Mark", 45, "Cardiologist", "Mark", "pass1"),
            Doctor::new("John", 50, "Neurologist", "John", "pass2"),
            Doctor::new("Tony", 38, "Orthopedic", "Tony", "pass3"),
        ];
        let p = patient();

        // Book in reverse roster order; listing must still follow the roster.
        p.book_with(&mut doctors[2]).expect("Should book");
        p.book_with(&mut doctors[0]).expect("Should book");

        let attending = p.attending_doctors(&doctors);
        let names: Vec<&str> = attending.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Mark", "Tony"]);
    }

    #[test]
    fn test_record_lines_include_history() {
        let mut p = patient();
        p.add_medical_record("Visit 1 - Routine Checkup");
        let lines = p.record_lines();
        assert!(lines[0].contains("P1001"));
        assert!(lines.iter().any(|l| l.contains("Routine Checkup")));
    }
}
