//! Type-safe enumerations for directory filtering.
//!
//! These enums give compile-time safety to concepts the upstream feed and
//! the shareable query string represent as plain strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a doctor offers consultations.
///
/// Derived from two independent capability flags in the raw feed
/// (`video_consult`, `in_clinic`); both set means `Both`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsultationMode {
    /// Remote consultation over video only.
    VideoConsult,

    /// In-person consultation at the clinic only.
    InClinic,

    /// Offers both remote and in-person consultations.
    Both,
}

impl ConsultationMode {
    /// Returns the display string as shown in the directory.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationMode::VideoConsult => "Video Consult",
            ConsultationMode::InClinic => "In Clinic",
            ConsultationMode::Both => "Both",
        }
    }

    /// Derive the mode from the raw feed's capability flags.
    ///
    /// Neither flag set falls back to `InClinic`; the feed never states
    /// what a doctor with no capabilities means, and an in-person default
    /// keeps the mode total.
    pub fn from_flags(video_consult: bool, in_clinic: bool) -> Self {
        match (video_consult, in_clinic) {
            (true, true) => ConsultationMode::Both,
            (true, false) => ConsultationMode::VideoConsult,
            (false, _) => ConsultationMode::InClinic,
        }
    }

    /// Returns true if this mode satisfies the given filter.
    ///
    /// `Both` satisfies either specific filter; `All` admits everything.
    pub fn matches(&self, filter: ConsultationFilter) -> bool {
        match filter {
            ConsultationFilter::All => true,
            ConsultationFilter::VideoConsult => {
                matches!(self, ConsultationMode::VideoConsult | ConsultationMode::Both)
            }
            ConsultationFilter::InClinic => {
                matches!(self, ConsultationMode::InClinic | ConsultationMode::Both)
            }
        }
    }
}

impl fmt::Display for ConsultationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConsultationMode {
    type Err = String;

    /// Parse a display string back into a mode (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "VIDEO CONSULT" => Ok(ConsultationMode::VideoConsult),
            "IN CLINIC" => Ok(ConsultationMode::InClinic),
            "BOTH" => Ok(ConsultationMode::Both),
            _ => Err(format!("Unknown consultation mode: {s}")),
        }
    }
}

/// User-selected consultation filter.
///
/// Unlike [`ConsultationMode`], this has an `All` state and never `Both`:
/// the user narrows to one channel or leaves the directory unfiltered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsultationFilter {
    /// No consultation filtering (the default).
    #[default]
    All,

    /// Only doctors reachable over video.
    VideoConsult,

    /// Only doctors seeing patients in person.
    InClinic,
}

impl ConsultationFilter {
    /// Returns the query-string value; `All` has none (the parameter is omitted).
    pub fn as_query_value(&self) -> Option<&'static str> {
        match self {
            ConsultationFilter::All => None,
            ConsultationFilter::VideoConsult => Some("Video Consult"),
            ConsultationFilter::InClinic => Some("In Clinic"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationFilter::All => "All",
            ConsultationFilter::VideoConsult => "Video Consult",
            ConsultationFilter::InClinic => "In Clinic",
        }
    }
}

impl fmt::Display for ConsultationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConsultationFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ALL" => Ok(ConsultationFilter::All),
            "VIDEO CONSULT" => Ok(ConsultationFilter::VideoConsult),
            "IN CLINIC" => Ok(ConsultationFilter::InClinic),
            _ => Err(format!("Unknown consultation filter: {s}")),
        }
    }
}

/// Sort order for the visible directory.
///
/// The unsorted state is modeled as `Option<SortKey>::None` so the enum
/// itself only names real orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Ascending by consultation fee.
    Fees,

    /// Descending by years of experience.
    Experience,
}

impl SortKey {
    /// Returns the value used in the `sortBy` query parameter.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            SortKey::Fees => "fees",
            SortKey::Experience => "experience",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_query_value())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fees" => Ok(SortKey::Fees),
            "experience" => Ok(SortKey::Experience),
            _ => Err(format!("Unknown sort key: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_flags() {
        assert_eq!(
            ConsultationMode::from_flags(true, true),
            ConsultationMode::Both
        );
        assert_eq!(
            ConsultationMode::from_flags(true, false),
            ConsultationMode::VideoConsult
        );
        assert_eq!(
            ConsultationMode::from_flags(false, true),
            ConsultationMode::InClinic
        );
        // Neither flag set defaults to in-person
        assert_eq!(
            ConsultationMode::from_flags(false, false),
            ConsultationMode::InClinic
        );
    }

    #[test]
    fn test_mode_matches_filter() {
        assert!(ConsultationMode::Both.matches(ConsultationFilter::VideoConsult));
        assert!(ConsultationMode::Both.matches(ConsultationFilter::InClinic));
        assert!(ConsultationMode::VideoConsult.matches(ConsultationFilter::All));
        assert!(!ConsultationMode::InClinic.matches(ConsultationFilter::VideoConsult));
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!(
            "Video Consult".parse::<ConsultationFilter>().unwrap(),
            ConsultationFilter::VideoConsult
        );
        assert_eq!(
            "in clinic".parse::<ConsultationFilter>().unwrap(),
            ConsultationFilter::InClinic
        );
        assert!("Telepathy".parse::<ConsultationFilter>().is_err());
    }

    #[test]
    fn test_sort_key_round_trip() {
        assert_eq!("fees".parse::<SortKey>().unwrap(), SortKey::Fees);
        assert_eq!(
            "EXPERIENCE".parse::<SortKey>().unwrap(),
            SortKey::Experience
        );
        assert_eq!(SortKey::Fees.as_query_value(), "fees");
    }
}
