//! Normalization of raw feed records into [`DoctorRecord`]s.
//!
//! The feed carries numbers inside free text (`"13 Years of experience"`,
//! `"₹ 500"`). Parsing here is total: a field that does not match the
//! expected shape coerces to 0 and the record is kept. A malformed field
//! never drops a record or fails the batch.

use docdir_model::{ConsultationMode, DoctorRecord};
use tracing::debug;

use crate::raw::RawDoctor;

/// Tokens that mark a comma-separated introduction fragment as a
/// qualification worth keeping.
pub const QUALIFICATION_MARKERS: &[&str] = &["BDS", "MBBS", "MD"];

/// Convert the raw feed array into canonical records, preserving order.
pub fn normalize(raw: Vec<RawDoctor>) -> Vec<DoctorRecord> {
    raw.into_iter().map(normalize_record).collect()
}

/// Normalize a single raw record. Total; never fails.
pub fn normalize_record(raw: RawDoctor) -> DoctorRecord {
    let experience_years = parse_leading_number(&raw.experience);
    let fee = parse_fee(&raw.fees);
    if experience_years == 0 && !raw.experience.trim().is_empty() {
        debug!(id = %raw.id, experience = %raw.experience, "unparsable experience, coerced to 0");
    }
    DoctorRecord {
        consultation_mode: ConsultationMode::from_flags(raw.video_consult, raw.in_clinic),
        qualifications: extract_qualifications(&raw.doctor_introduction),
        specialties: raw.specialities.into_iter().map(|s| s.name).collect(),
        experience_years,
        fee,
        id: raw.id,
        name: raw.name,
        locality: raw.clinic.address.locality,
        clinic_name: raw.clinic.name,
        photo_url: raw.photo,
    }
}

/// Every distinct specialty name across the records, in first-seen order.
pub fn collect_specialties(records: &[DoctorRecord]) -> Vec<String> {
    let mut seen = Vec::new();
    for record in records {
        for specialty in &record.specialties {
            if !seen.contains(specialty) {
                seen.push(specialty.clone());
            }
        }
    }
    seen
}

/// Parse the leading integer out of free text like `"13 Years of experience"`.
///
/// Returns 0 when the text does not start with a digit after trimming.
pub fn parse_leading_number(text: &str) -> u32 {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Parse a fee out of free text with a currency prefix, e.g. `"₹ 500"`.
///
/// Skips any non-digit prefix, then reads the first run of digits.
/// Returns 0 when no digits are present.
pub fn parse_fee(text: &str) -> u32 {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Pull recognized qualification tokens out of a free-text introduction.
///
/// The introduction is comma-separated; a fragment survives when it
/// contains one of [`QUALIFICATION_MARKERS`]. Empty input yields an empty
/// list.
pub fn extract_qualifications(introduction: &str) -> Vec<String> {
    if introduction.trim().is_empty() {
        return Vec::new();
    }
    introduction
        .split(',')
        .map(str::trim)
        .filter(|fragment| {
            QUALIFICATION_MARKERS
                .iter()
                .any(|marker| fragment.contains(marker))
        })
        .map(ToString::to_string)
        .collect()
}
