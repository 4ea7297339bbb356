//! navigator-core
//!
//! Pure domain types for the patient-intake workflow: the patient record,
//! stage names, care levels and the form inputs that seed a record.
//! No network or model dependency; this is the shared vocabulary of Navigator.

pub mod error;
pub mod models;
