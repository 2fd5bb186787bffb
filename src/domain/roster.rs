//! The process-wide roster: every doctor and patient for this run.

use super::doctor::Doctor;
use super::patient::Patient;

/// Owns both rosters for the process lifetime.
///
/// Seeded once at startup; records are mutated in place by front desk
/// operations but never added or removed during a run.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    doctors: Vec<Doctor>,
    patients: Vec<Patient>,
}

impl Roster {
    #[must_use]
    pub fn new(doctors: Vec<Doctor>, patients: Vec<Patient>) -> Self {
        Self { doctors, patients }
    }

    /// The fixed demo data the front desk starts with: 5 doctors and 15
    /// patients, each patient preloaded with one history entry.
    #[must_use]
    pub fn seed() -> Self {
        let doctors = vec![
            Doctor::new("Mark", 45, "Cardiologist", "Mark", "pass1"),
            Doctor::new("John", 50, "Neurologist", "John", "pass2"),
            Doctor::new("Tony", 38, "Orthopedic", "Tony", "pass3"),
            Doctor::new("David", 42, "Dermatologist", "david123", "pass4"),
            Doctor::new("Eva", 35, "Pediatrician", "eva123", "pass5"),
        ];

        let mut patients = Vec::with_capacity(15);
        for i in 1..=15u32 {
            let mut patient = Patient::new(
                format!("Patient{i}"),
                (20 + i) as u8,
                format!("P{}", 1000 + i),
                f64::from(10_000 * i),
            );
            patient.add_medical_record(format!("Visit {i} - Routine Checkup"));
            patients.push(patient);
        }

        Self { doctors, patients }
    }

    #[must_use]
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    #[must_use]
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    #[must_use]
    pub fn doctor(&self, index: usize) -> Option<&Doctor> {
        self.doctors.get(index)
    }

    pub fn doctor_mut(&mut self, index: usize) -> Option<&mut Doctor> {
        self.doctors.get_mut(index)
    }

    #[must_use]
    pub fn patient(&self, index: usize) -> Option<&Patient> {
        self.patients.get(index)
    }

    pub fn patient_mut(&mut self, index: usize) -> Option<&mut Patient> {
        self.patients.get_mut(index)
    }

    /// Linear credential scan over the doctor roster; first match wins.
    #[must_use]
    pub fn authenticate_doctor(&self, username: &str, password: &str) -> Option<usize> {
        self.doctors
            .iter()
            .position(|doc| doc.verify_login(username, password))
    }

    /// Exact patient-id lookup.
    #[must_use]
    pub fn find_patient(&self, patient_id: &str) -> Option<usize> {
        self.patients
            .iter()
            .position(|p| p.patient_id() == patient_id)
    }

    /// Doctors whose book contains `patient_id`, in roster order.
    #[must_use]
    pub fn doctors_attending(&self, patient_id: &str) -> Vec<&Doctor> {
        self.doctors
            .iter()
            .filter(|doc| doc.has_appointment(patient_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let roster = Roster::seed();
        assert_eq!(roster.doctors().len(), 5);
        assert_eq!(roster.patients().len(), 15);

        let first = &roster.patients()[0];
        assert_eq!(first.patient_id(), "P1001");
        assert_eq!(first.age(), 21);
        assert!((first.due_balance() - 10_000.0).abs() < f64::EPSILON);
        assert_eq!(first.medical_history().len(), 1);

        let last = &roster.patients()[14];
        assert_eq!(last.patient_id(), "P1015");
        assert_eq!(last.age(), 35);
        assert!((last.due_balance() - 150_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_authenticate_doctor_first_match() {
        let roster = Roster::seed();
        assert_eq!(roster.authenticate_doctor("Mark", "pass1"), Some(0));
        assert_eq!(roster.authenticate_doctor("eva123", "pass5"), Some(4));
        assert_eq!(roster.authenticate_doctor("Mark", "pass2"), None);
        assert_eq!(roster.authenticate_doctor("nobody", "pass1"), None);
    }

    #[test]
    fn test_find_patient() {
        let roster = Roster::seed();
        assert_eq!(roster.find_patient("P1007"), Some(6));
        assert_eq!(roster.find_patient("P9999"), None);
    }

    #[test]
    fn test_doctors_attending_scans_full_roster() {
        let mut roster = Roster::seed();
        roster
            .doctor_mut(3)
            .expect("Doctor exists")
            .book_appointment("P1002")
            .expect("Should book");
        roster
            .doctor_mut(1)
            .expect("Doctor exists")
            .book_appointment("P1002")
            .expect("Should book");

        let names: Vec<&str> = roster
            .doctors_attending("P1002")
            .iter()
            .map(|d| d.name())
            .collect();
        assert_eq!(names, vec!["John", "David"]);

        assert!(roster.doctors_attending("P1003").is_empty());
    }
}
