//! Subcommand implementations.

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info_span};

use docdir_core::{FilterStore, suggest};
use docdir_ingest::{collect_specialties, fetch_directory};
use docdir_model::DoctorRecord;

use crate::cli::{ListArgs, SuggestArgs};
use crate::summary::{apply_table_style, print_directory};

pub fn run_list(url: &str, args: &ListArgs) -> Result<()> {
    let span = info_span!("list", url);
    let _guard = span.enter();
    let records = fetch_directory(url).context("fetch doctor feed")?;
    let store = seeded_store(records, args);
    if args.json {
        let json = serde_json::to_string_pretty(store.visible())
            .context("encode visible records")?;
        println!("{json}");
        return Ok(());
    }
    print_directory(&store);
    Ok(())
}

pub fn run_specialties(url: &str) -> Result<()> {
    let records = fetch_directory(url).context("fetch doctor feed")?;
    let specialties = collect_specialties(&records);
    let mut table = Table::new();
    table.set_header(vec!["Specialty", "Doctors"]);
    apply_table_style(&mut table);
    for specialty in &specialties {
        let count = records
            .iter()
            .filter(|doctor| doctor.specialties.contains(specialty))
            .count();
        table.add_row(vec![specialty.clone(), count.to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_suggest(url: &str, args: &SuggestArgs) -> Result<()> {
    let records = fetch_directory(url).context("fetch doctor feed")?;
    let suggestions = suggest(&records, &args.query);
    if suggestions.is_empty() {
        println!("No matching doctors.");
        return Ok(());
    }
    for doctor in suggestions {
        println!("{}  ({})", doctor.name, doctor.specialties.join(", "));
    }
    Ok(())
}

/// Build the filter store from the `--query` seed plus flag overrides.
///
/// Flags go through the store mutators so each one replaces the state and
/// re-derives the visible list and query string, the same path a UI event
/// would take.
fn seeded_store(records: Vec<DoctorRecord>, args: &ListArgs) -> FilterStore {
    let mut store = match &args.query {
        Some(query) => FilterStore::from_query(records, query),
        None => FilterStore::new(records),
    };
    if let Some(search) = &args.search {
        store.set_search(search.clone());
    }
    if let Some(consultation) = args.consultation {
        store.set_consultation(consultation.into());
    }
    for specialty in &args.specialties {
        store.toggle_specialty(specialty);
    }
    if let Some(sort) = args.sort {
        store.set_sort(sort.into());
    }
    debug!(query = %store.query(), "seeded filter state");
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ConsultationArg, SortArg};
    use docdir_model::{ConsultationFilter, ConsultationMode, SortKey};

    fn record(id: &str, name: &str, specialty: &str) -> DoctorRecord {
        DoctorRecord {
            id: id.to_string(),
            name: name.to_string(),
            specialties: vec![specialty.to_string()],
            experience_years: 5,
            fee: 300,
            consultation_mode: ConsultationMode::Both,
            locality: String::new(),
            qualifications: vec![],
            clinic_name: String::new(),
            photo_url: String::new(),
        }
    }

    fn list_args() -> ListArgs {
        ListArgs {
            query: None,
            search: None,
            consultation: None,
            specialties: vec![],
            sort: None,
            json: false,
        }
    }

    #[test]
    fn flags_override_query_seed() {
        let records = vec![
            record("1", "Dr. Kshitija Jagdale", "Dentist"),
            record("2", "Dr. Chhaya Vora", "Gynaecologist"),
        ];
        let args = ListArgs {
            query: Some("sortBy=experience&specialties=Dentist".to_string()),
            consultation: Some(ConsultationArg::InClinic),
            sort: Some(SortArg::Fees),
            ..list_args()
        };
        let store = seeded_store(records, &args);
        assert_eq!(store.state().sort, Some(SortKey::Fees));
        assert_eq!(store.state().consultation, ConsultationFilter::InClinic);
        assert_eq!(store.state().specialties, vec!["Dentist".to_string()]);
        assert_eq!(store.visible().len(), 1);
    }

    #[test]
    fn sort_none_clears_inherited_sort() {
        let records = vec![record("1", "Dr. A", "Dentist")];
        let args = ListArgs {
            query: Some("sortBy=fees".to_string()),
            sort: Some(SortArg::None),
            ..list_args()
        };
        let store = seeded_store(records, &args);
        assert_eq!(store.state().sort, None);
        assert_eq!(store.query(), "");
    }

    #[test]
    fn specialty_flag_toggles_out_of_seed() {
        let records = vec![record("1", "Dr. A", "Dentist")];
        let args = ListArgs {
            query: Some("specialties=Dentist".to_string()),
            specialties: vec!["Dentist".to_string()],
            ..list_args()
        };
        let store = seeded_store(records, &args);
        assert!(store.state().specialties.is_empty());
        assert_eq!(store.visible().len(), 1);
    }
}
