//! Raw feed payload shapes.
//!
//! Every field is defaulted so a record with missing or null fields still
//! decodes; the normalizer turns the gaps into zero values instead of
//! dropping the record.

use serde::Deserialize;

/// One element of the raw JSON array served by the feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDoctor {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Note the feed's spelling: `specialities`, not `specialties`.
    #[serde(default)]
    pub specialities: Vec<RawSpeciality>,
    /// Free text, e.g. `"13 Years of experience"`.
    #[serde(default)]
    pub experience: String,
    /// Free text with a currency prefix, e.g. `"₹ 500"`.
    #[serde(default)]
    pub fees: String,
    #[serde(default)]
    pub video_consult: bool,
    #[serde(default)]
    pub in_clinic: bool,
    /// Free-text biography; qualification tokens are mined out of it.
    #[serde(default)]
    pub doctor_introduction: String,
    #[serde(default)]
    pub clinic: RawClinic,
    #[serde(default)]
    pub photo: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSpeciality {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawClinic {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: RawAddress,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAddress {
    #[serde(default)]
    pub locality: String,
}
