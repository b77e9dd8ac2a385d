//! The canonical doctor record.

use serde::{Deserialize, Serialize};

use crate::enums::ConsultationMode;

/// One doctor in the directory, normalized from the raw feed.
///
/// Records are immutable once constructed; the filter engine only ever
/// clones and reorders them. Numeric fields are non-negative by type, and
/// `consultation_mode` is always defined (see
/// [`ConsultationMode::from_flags`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRecord {
    /// Opaque unique identifier from the feed.
    pub id: String,

    /// Display name, e.g. `"Dr. Kshitija Jagdale"`.
    pub name: String,

    /// Specialty names in feed order; may be empty.
    pub specialties: Vec<String>,

    /// Years of experience, parsed from free text like
    /// `"13 Years of experience"`. Malformed text coerces to 0.
    pub experience_years: u32,

    /// Consultation fee with the currency prefix stripped.
    /// Malformed text coerces to 0.
    pub fee: u32,

    /// How this doctor offers consultations.
    pub consultation_mode: ConsultationMode,

    /// Clinic locality; may be empty.
    pub locality: String,

    /// Recognized qualification tokens (BDS, MBBS, MD) pulled out of the
    /// free-text introduction; may be empty.
    pub qualifications: Vec<String>,

    /// Clinic display name.
    pub clinic_name: String,

    /// Profile photo URL; may be empty.
    pub photo_url: String,
}

impl DoctorRecord {
    /// Case-insensitive substring match against the display name.
    ///
    /// This is the single name-matching rule shared by the search filter
    /// and the suggestion engine.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Returns true if any of this doctor's specialties appears in `selected`.
    pub fn has_any_specialty(&self, selected: &[String]) -> bool {
        self.specialties.iter().any(|s| selected.contains(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, specialties: &[&str]) -> DoctorRecord {
        DoctorRecord {
            id: "1".to_string(),
            name: name.to_string(),
            specialties: specialties.iter().map(|s| (*s).to_string()).collect(),
            experience_years: 5,
            fee: 400,
            consultation_mode: ConsultationMode::Both,
            locality: String::new(),
            qualifications: vec![],
            clinic_name: String::new(),
            photo_url: String::new(),
        }
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let doc = record("Dr. Kshitija Jagdale", &[]);
        assert!(doc.name_contains("kshitija"));
        assert!(doc.name_contains("JAGDALE"));
        assert!(!doc.name_contains("Munaf"));
    }

    #[test]
    fn specialty_match_is_or_semantics() {
        let doc = record("Dr. A", &["Dentist", "Orthodontist"]);
        let selected = vec!["Dentist".to_string(), "Cardiologist".to_string()];
        assert!(doc.has_any_specialty(&selected));
        assert!(!doc.has_any_specialty(&["Gynaecologist".to_string()]));
    }
}
