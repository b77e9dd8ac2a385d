//! Tests for the filter store's mutate-then-rederive contract.

use docdir_core::FilterStore;
use docdir_model::{ConsultationFilter, ConsultationMode, DoctorRecord, SortKey};

fn record(id: &str, name: &str, specialty: &str, fee: u32) -> DoctorRecord {
    DoctorRecord {
        id: id.to_string(),
        name: name.to_string(),
        specialties: vec![specialty.to_string()],
        experience_years: 10,
        fee,
        consultation_mode: ConsultationMode::Both,
        locality: String::new(),
        qualifications: vec![],
        clinic_name: String::new(),
        photo_url: String::new(),
    }
}

fn roster() -> Vec<DoctorRecord> {
    vec![
        record("1", "Dr. Kshitija Jagdale", "Dentist", 500),
        record("2", "Dr. Chhaya Vora", "Gynaecologist", 400),
        record("3", "Dr. Mufaddal Zakir", "Dentist", 300),
    ]
}

#[test]
fn new_store_shows_everything() {
    let store = FilterStore::new(roster());
    assert_eq!(store.visible().len(), 3);
    assert_eq!(store.query(), "");
    assert!(store.state().is_default());
}

#[test]
fn every_mutation_rederives_visible_and_query() {
    let mut store = FilterStore::new(roster());

    store.toggle_specialty("Dentist");
    assert_eq!(store.visible().len(), 2);
    assert_eq!(store.query(), "specialties=Dentist");

    store.set_sort(Some(SortKey::Fees));
    assert_eq!(store.visible()[0].id, "3");
    assert_eq!(store.query(), "specialties=Dentist&sortBy=fees");

    store.set_search("kshitija");
    assert_eq!(store.visible().len(), 1);
    assert_eq!(
        store.query(),
        "specialties=Dentist&sortBy=fees&search=kshitija"
    );

    store.set_search("");
    store.set_sort(None);
    store.toggle_specialty("Dentist");
    assert_eq!(store.query(), "");
    assert_eq!(store.visible().len(), 3);
}

#[test]
fn from_query_seeds_state() {
    let store = FilterStore::from_query(
        roster(),
        "consultationType=In+Clinic&specialties=Dentist&sortBy=fees",
    );
    assert_eq!(store.state().consultation, ConsultationFilter::InClinic);
    assert_eq!(store.state().specialties, vec!["Dentist".to_string()]);
    assert_eq!(store.state().sort, Some(SortKey::Fees));
    // Both-mode dentists pass the in-clinic filter, cheapest first
    let ids: Vec<&str> = store.visible().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1"]);
}

#[test]
fn committing_a_suggestion_is_a_search_replacement() {
    let mut store = FilterStore::new(roster());
    let name = docdir_core::suggest(store.records(), "vora")[0].name.clone();
    store.set_search(name);
    assert_eq!(store.visible().len(), 1);
    assert_eq!(store.visible()[0].id, "2");
    assert_eq!(store.query(), "search=Dr.+Chhaya+Vora");
}
