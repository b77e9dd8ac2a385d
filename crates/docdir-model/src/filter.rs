//! The user's current search/filter/sort intent.

use serde::{Deserialize, Serialize};

use crate::enums::{ConsultationFilter, SortKey};

/// One session's filter state.
///
/// There is a single instance per session, owned by the store; every
/// mutation replaces the whole value rather than editing a field in place,
/// so change detection stays a plain value comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Consultation channel filter; `All` means no filtering.
    pub consultation: ConsultationFilter,

    /// Selected specialty names. Semantically a set, but insertion order
    /// is kept so results and serialization stay deterministic.
    pub specialties: Vec<String>,

    /// Active sort order; `None` preserves filtered order.
    pub sort: Option<SortKey>,

    /// Name search text; empty means no search filtering.
    pub search: String,
}

impl FilterState {
    /// Returns a copy with the search text replaced.
    #[must_use]
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with the consultation filter replaced.
    #[must_use]
    pub fn with_consultation(&self, consultation: ConsultationFilter) -> Self {
        Self {
            consultation,
            ..self.clone()
        }
    }

    /// Returns a copy with the sort key replaced; `None` clears sorting.
    #[must_use]
    pub fn with_sort(&self, sort: Option<SortKey>) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    /// Returns a copy with `name` flipped in the specialty selection:
    /// removed if present, appended if not.
    #[must_use]
    pub fn with_specialty_toggled(&self, name: &str) -> Self {
        let mut specialties = self.specialties.clone();
        if let Some(position) = specialties.iter().position(|s| s == name) {
            specialties.remove(position);
        } else {
            specialties.push(name.to_string());
        }
        Self {
            specialties,
            ..self.clone()
        }
    }

    /// Returns true if every field holds its default.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
