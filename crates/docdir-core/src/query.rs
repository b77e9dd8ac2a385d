//! Query-string codec for [`FilterState`].
//!
//! The query string is the entire persisted-state surface of the
//! directory: a shareable link reconstructs the exact filter state. The
//! two functions here are inverses on recognized values; unrecognized or
//! missing parameters fall back to the field default rather than failing.

use docdir_model::{ConsultationFilter, FilterState, SortKey};
use url::form_urlencoded;

pub const PARAM_CONSULTATION: &str = "consultationType";
pub const PARAM_SPECIALTIES: &str = "specialties";
pub const PARAM_SORT: &str = "sortBy";
pub const PARAM_SEARCH: &str = "search";

/// Serialize the state into a query string, omitting default-valued fields.
///
/// A fully-default state serializes to the empty string.
pub fn to_query(state: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if let Some(value) = state.consultation.as_query_value() {
        serializer.append_pair(PARAM_CONSULTATION, value);
    }
    if !state.specialties.is_empty() {
        serializer.append_pair(PARAM_SPECIALTIES, &state.specialties.join(","));
    }
    if let Some(sort) = state.sort {
        serializer.append_pair(PARAM_SORT, sort.as_query_value());
    }
    if !state.search.is_empty() {
        serializer.append_pair(PARAM_SEARCH, &state.search);
    }
    serializer.finish()
}

/// Parse a query string back into a state. Total: anything unrecognized
/// leaves the corresponding field at its default.
///
/// A leading `?` is tolerated so a pasted address-bar fragment works as-is.
pub fn from_query(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut state = FilterState::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match &*key {
            PARAM_CONSULTATION => {
                if let Ok(filter) = value.parse::<ConsultationFilter>() {
                    state.consultation = filter;
                }
            }
            PARAM_SPECIALTIES => {
                state.specialties = split_specialties(&value);
            }
            PARAM_SORT => {
                if let Ok(sort) = value.parse::<SortKey>() {
                    state.sort = Some(sort);
                }
            }
            PARAM_SEARCH => {
                state.search = value.into_owned();
            }
            _ => {}
        }
    }
    state
}

/// Split the comma-joined specialty parameter, discarding empty tokens and
/// duplicates while keeping first-seen order.
fn split_specialties(value: &str) -> Vec<String> {
    let mut specialties: Vec<String> = Vec::new();
    for token in value.split(',') {
        if token.is_empty() || specialties.iter().any(|s| s == token) {
            continue;
        }
        specialties.push(token.to_string());
    }
    specialties
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_serializes_to_empty() {
        assert_eq!(to_query(&FilterState::default()), "");
        assert_eq!(from_query(""), FilterState::default());
    }

    #[test]
    fn spaces_encode_as_plus() {
        let state = FilterState::default()
            .with_consultation(ConsultationFilter::InClinic)
            .with_specialty_toggled("Dentist")
            .with_sort(Some(SortKey::Fees));
        assert_eq!(
            to_query(&state),
            "consultationType=In+Clinic&specialties=Dentist&sortBy=fees"
        );
    }

    #[test]
    fn leading_question_mark_is_tolerated() {
        let state = from_query("?search=dr&sortBy=experience");
        assert_eq!(state.search, "dr");
        assert_eq!(state.sort, Some(SortKey::Experience));
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let state = from_query("consultationType=Telepathy&sortBy=height&bogus=1");
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn empty_specialty_tokens_are_discarded() {
        let state = from_query("specialties=Dentist,,Orthopaedic,");
        assert_eq!(
            state.specialties,
            vec!["Dentist".to_string(), "Orthopaedic".to_string()]
        );
    }
}
