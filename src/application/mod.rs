//! Application layer: the front desk service.
//!
//! Orchestrates domain records for the one interactive session the process
//! serves at a time.

mod front_desk;

pub use front_desk::{DoctorChoice, FrontDesk, Session};
