//! The appointment book each doctor keeps.
//!
//! A booking is a patient id in the ordered list plus a status label in the
//! map. Invariant: an id appears in the booking order iff it has exactly one
//! status entry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Status label assigned to every fresh booking.
///
/// Labels are free text; `"Safe"` and `"Emergency"` are conventions, not an
/// enforced enumeration.
pub const DEFAULT_STATUS: &str = "Safe";

/// Errors from appointment book operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentError {
    #[error("Duplicate appointment detected for patient ID: {0}")]
    Duplicate(String),

    #[error("Appointment not found.")]
    NotFound,
}

/// A booked patient with its current status label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentEntry {
    pub patient_id: String,
    pub status: String,
}

/// Ordered booking list plus per-patient status labels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentBook {
    order: Vec<String>,
    status: HashMap<String, String>,
}

impl AppointmentBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Book an appointment for `patient_id` with the default status label.
    ///
    /// # Errors
    /// Returns [`AppointmentError::Duplicate`] if the patient is already booked.
    pub fn book(&mut self, patient_id: &str) -> Result<(), AppointmentError> {
        if self.status.contains_key(patient_id) {
            return Err(AppointmentError::Duplicate(patient_id.to_string()));
        }
        self.order.push(patient_id.to_string());
        self.status
            .insert(patient_id.to_string(), DEFAULT_STATUS.to_string());
        Ok(())
    }

    /// Postpone an appointment: an existence check only.
    ///
    /// Postponement does not reorder, relabel, or timestamp anything.
    ///
    /// # Errors
    /// Returns [`AppointmentError::NotFound`] if the patient is not booked.
    pub fn postpone(&self, patient_id: &str) -> Result<(), AppointmentError> {
        if self.status.contains_key(patient_id) {
            Ok(())
        } else {
            Err(AppointmentError::NotFound)
        }
    }

    /// Cancel an appointment, removing both the booking and its status entry.
    ///
    /// # Errors
    /// Returns [`AppointmentError::NotFound`] if the patient is not booked.
    pub fn cancel(&mut self, patient_id: &str) -> Result<(), AppointmentError> {
        if self.status.remove(patient_id).is_none() {
            return Err(AppointmentError::NotFound);
        }
        self.order.retain(|id| id != patient_id);
        Ok(())
    }

    /// Overwrite the status label of a booked patient.
    ///
    /// # Errors
    /// Returns [`AppointmentError::NotFound`] if the patient is not booked;
    /// the book is left untouched.
    pub fn change_status(
        &mut self,
        patient_id: &str,
        status: impl Into<String>,
    ) -> Result<(), AppointmentError> {
        match self.status.get_mut(patient_id) {
            Some(slot) => {
                *slot = status.into();
                Ok(())
            }
            None => Err(AppointmentError::NotFound),
        }
    }

    #[must_use]
    pub fn contains(&self, patient_id: &str) -> bool {
        self.status.contains_key(patient_id)
    }

    #[must_use]
    pub fn status_of(&self, patient_id: &str) -> Option<&str> {
        self.status.get(patient_id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(patient_id, status)` pairs in booking order.
    #[must_use]
    pub fn entries(&self) -> Vec<AppointmentEntry> {
        self.order
            .iter()
            .map(|id| AppointmentEntry {
                patient_id: id.clone(),
                status: self.status.get(id).cloned().unwrap_or_default(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_sets_default_status() {
        let mut book = AppointmentBook::new();
        book.book("P1001").expect("Should book");

        assert!(book.contains("P1001"));
        assert_eq!(book.status_of("P1001"), Some(DEFAULT_STATUS));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_duplicate_booking_rejected() {
        let mut book = AppointmentBook::new();
        book.book("P1001").expect("Should book");

        let err = book.book("P1001").expect_err("Second booking must fail");
        assert_eq!(err, AppointmentError::Duplicate("P1001".to_string()));

        // The booked list retains exactly one entry.
        assert_eq!(book.len(), 1);
        assert_eq!(book.entries().len(), 1);
    }

    #[test]
    fn test_cancel_unbooked_fails() {
        let mut book = AppointmentBook::new();
        assert_eq!(book.cancel("P1001"), Err(AppointmentError::NotFound));
    }

    #[test]
    fn test_cancel_removes_order_and_status() {
        let mut book = AppointmentBook::new();
        book.book("P1001").expect("Should book");
        book.book("P1002").expect("Should book");

        book.cancel("P1001").expect("Should cancel");

        assert!(!book.contains("P1001"));
        assert_eq!(book.status_of("P1001"), None);
        assert_eq!(book.len(), 1);
        assert_eq!(book.entries()[0].patient_id, "P1002");
    }

    #[test]
    fn test_postpone_is_existence_check_only() {
        let mut book = AppointmentBook::new();
        book.book("P1001").expect("Should book");
        book.book("P1002").expect("Should book");
        book.change_status("P1002", "Emergency").expect("Should update");

        let before = book.entries();
        book.postpone("P1001").expect("Should postpone");
        assert_eq!(book.entries(), before);

        assert_eq!(book.postpone("P9999"), Err(AppointmentError::NotFound));
    }

    #[test]
    fn test_change_status_unbooked_is_noop() {
        let mut book = AppointmentBook::new();
        book.book("P1001").expect("Should book");

        let before = book.entries();
        assert_eq!(
            book.change_status("P9999", "Emergency"),
            Err(AppointmentError::NotFound)
        );
        assert_eq!(book.entries(), before);
    }

    #[test]
    fn test_change_status_overwrites_idempotently() {
        let mut book = AppointmentBook::new();
        book.book("P1001").expect("Should book");

        book.change_status("P1001", "Emergency").expect("Should update");
        assert_eq!(book.status_of("P1001"), Some("Emergency"));

        // Applying the same status twice yields the same observable state.
        book.change_status("P1001", "Emergency").expect("Should update");
        assert_eq!(book.status_of("P1001"), Some("Emergency"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_entries_in_booking_order() {
        let mut book = AppointmentBook::new();
        for id in ["P1003", "P1001", "P1002"] {
            book.book(id).expect("Should book");
        }

        let entries = book.entries();
        let ids: Vec<&str> = entries.iter().map(|e| e.patient_id.as_str()).collect();
        assert_eq!(ids, vec!["P1003", "P1001", "P1002"]);
    }
}
