//! Identity attributes shared by doctors and patients.

use serde::{Deserialize, Serialize};

/// Name and age, common to everyone on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub age: u8,
}

impl Identity {
    #[must_use]
    pub fn new(name: impl Into<String>, age: u8) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Read-only record view shared by doctors and patients.
///
/// Each record renders itself as display lines for the record screens; this
/// is the whole of the polymorphism between the two record kinds.
pub trait RecordView {
    fn record_lines(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let id = Identity::new("Mark", 45);
        assert_eq!(id.name, "Mark");
        assert_eq!(id.age, 45);
    }
}
