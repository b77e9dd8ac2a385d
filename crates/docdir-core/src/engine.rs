//! The pure filter/sort pipeline.
//!
//! Evaluated freshly on every state change; inputs are immutable so there
//! is no incremental state to keep in sync. The pipeline order is fixed:
//! search, consultation, specialty, then sort.

use docdir_model::{DoctorRecord, FilterState, SortKey};

/// Apply the filter state to the canonical list.
///
/// Total: never fails, and an empty result is a normal outcome. The output
/// is always a subsequence of `records` before sorting; both sorts are
/// stable, so equal-key records keep their filtered relative order.
pub fn apply(records: &[DoctorRecord], filters: &FilterState) -> Vec<DoctorRecord> {
    let mut visible: Vec<DoctorRecord> = records
        .iter()
        .filter(|doctor| filters.search.is_empty() || doctor.name_contains(&filters.search))
        .filter(|doctor| doctor.consultation_mode.matches(filters.consultation))
        .filter(|doctor| {
            filters.specialties.is_empty() || doctor.has_any_specialty(&filters.specialties)
        })
        .cloned()
        .collect();

    match filters.sort {
        Some(SortKey::Fees) => visible.sort_by_key(|doctor| doctor.fee),
        Some(SortKey::Experience) => {
            visible.sort_by(|a, b| b.experience_years.cmp(&a.experience_years));
        }
        None => {}
    }

    visible
}
