//! Name autocomplete over the canonical list.
//!
//! Read-only: suggesting never touches the filter state. Committing a
//! suggestion is the caller invoking `set_search` with the full name.

use docdir_model::DoctorRecord;

/// Autocomplete shows at most this many names.
pub const SUGGESTION_LIMIT: usize = 3;

/// Suggest doctors whose name contains `partial`, case-insensitively, in
/// input order, truncated to [`SUGGESTION_LIMIT`].
///
/// Empty or whitespace-only input yields no suggestions.
pub fn suggest<'a>(records: &'a [DoctorRecord], partial: &str) -> Vec<&'a DoctorRecord> {
    let partial = partial.trim();
    if partial.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|doctor| doctor.name_contains(partial))
        .take(SUGGESTION_LIMIT)
        .collect()
}
