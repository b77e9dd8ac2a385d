//! Round-trip property for the query-string codec.

use docdir_core::{from_query, to_query};
use docdir_model::{ConsultationFilter, FilterState, SortKey};
use proptest::prelude::*;

fn consultation_strategy() -> impl Strategy<Value = ConsultationFilter> {
    prop_oneof![
        Just(ConsultationFilter::All),
        Just(ConsultationFilter::VideoConsult),
        Just(ConsultationFilter::InClinic),
    ]
}

fn sort_strategy() -> impl Strategy<Value = Option<SortKey>> {
    prop_oneof![
        Just(None),
        Just(Some(SortKey::Fees)),
        Just(Some(SortKey::Experience)),
    ]
}

/// Comma-free ASCII specialty names, unique, insertion order preserved.
fn specialties_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z][A-Za-z ]{0,20}", 0..4).prop_map(|mut names| {
        names.retain(|name| !name.trim().is_empty());
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        unique
    })
}

fn state_strategy() -> impl Strategy<Value = FilterState> {
    (
        consultation_strategy(),
        specialties_strategy(),
        sort_strategy(),
        "[ -~]{0,24}",
    )
        .prop_map(|(consultation, specialties, sort, search)| FilterState {
            consultation,
            specialties,
            sort,
            search,
        })
}

proptest! {
    #[test]
    fn round_trip_is_exact(state in state_strategy()) {
        let query = to_query(&state);
        prop_assert_eq!(from_query(&query), state);
    }

    #[test]
    fn parse_never_panics(query in "[ -~]{0,64}") {
        let _ = from_query(&query);
    }
}

#[test]
fn scenario_from_listing_page() {
    let state = FilterState::default()
        .with_consultation(ConsultationFilter::InClinic)
        .with_specialty_toggled("Dentist")
        .with_sort(Some(SortKey::Fees));
    let query = to_query(&state);
    assert_eq!(query, "consultationType=In+Clinic&specialties=Dentist&sortBy=fees");
    assert_eq!(from_query(&query), state);
}
