//! Data model for the doctor directory.
//!
//! This crate holds the canonical record shape and the filter state types
//! shared by the ingest, engine, and CLI crates. It has no I/O of its own.

pub mod doctor;
pub mod enums;
pub mod filter;

pub use doctor::DoctorRecord;
pub use enums::{ConsultationFilter, ConsultationMode, SortKey};
pub use filter::FilterState;
