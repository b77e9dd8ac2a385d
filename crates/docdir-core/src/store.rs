//! The session's single filter-state owner.
//!
//! The store holds the canonical record list and the one [`FilterState`]
//! instance. Collaborators never mutate the state directly; they call the
//! mutators here, and every mutation replaces the state immutably, re-runs
//! the filter/sort pipeline, and re-serializes the query string.

use docdir_model::{ConsultationFilter, DoctorRecord, FilterState, SortKey};
use tracing::debug;

use crate::engine::apply;
use crate::query::{from_query, to_query};

/// Owns the canonical list and the filter state, plus the two values
/// derived from them: the visible records and the shareable query string.
#[derive(Debug, Clone)]
pub struct FilterStore {
    records: Vec<DoctorRecord>,
    state: FilterState,
    visible: Vec<DoctorRecord>,
    query: String,
}

impl FilterStore {
    /// Build a store with the default (everything visible) state.
    pub fn new(records: Vec<DoctorRecord>) -> Self {
        Self::with_state(records, FilterState::default())
    }

    /// Build a store seeded from a query string, e.g. a pasted share link.
    pub fn from_query(records: Vec<DoctorRecord>, query: &str) -> Self {
        Self::with_state(records, from_query(query))
    }

    /// Build a store with an explicit initial state.
    pub fn with_state(records: Vec<DoctorRecord>, state: FilterState) -> Self {
        let mut store = Self {
            records,
            state,
            visible: Vec::new(),
            query: String::new(),
        };
        store.refresh();
        store
    }

    /// The canonical (unfiltered) record list, in feed order.
    pub fn records(&self) -> &[DoctorRecord] {
        &self.records
    }

    /// The current filter state.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// The filtered, sorted records for display.
    pub fn visible(&self) -> &[DoctorRecord] {
        &self.visible
    }

    /// The current state as a query string; empty when everything is default.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.replace(self.state.with_search(search));
    }

    /// Replace the consultation filter.
    pub fn set_consultation(&mut self, consultation: ConsultationFilter) {
        self.replace(self.state.with_consultation(consultation));
    }

    /// Flip one specialty in or out of the selection.
    pub fn toggle_specialty(&mut self, name: &str) {
        self.replace(self.state.with_specialty_toggled(name));
    }

    /// Replace the sort key; `None` clears sorting.
    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.replace(self.state.with_sort(sort));
    }

    fn replace(&mut self, state: FilterState) {
        self.state = state;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.visible = apply(&self.records, &self.state);
        self.query = to_query(&self.state);
        debug!(
            visible = self.visible.len(),
            total = self.records.len(),
            query = %self.query,
            "filter state applied"
        );
    }
}
