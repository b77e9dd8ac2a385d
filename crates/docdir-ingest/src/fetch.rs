//! Remote feed fetch.
//!
//! One blocking GET at session start. A failure here is terminal for the
//! session: there is no retry, no cache, and no partial data.

use docdir_model::DoctorRecord;
use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::normalize::normalize;
use crate::raw::RawDoctor;

/// The published mock feed the directory reads from by default.
pub const DEFAULT_FEED_URL: &str =
    "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

/// Fetch the raw doctor array from `url`.
pub fn fetch_raw(url: &str) -> Result<Vec<RawDoctor>> {
    debug!(url, "requesting doctor feed");
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::Status(status));
    }
    let body = response.text()?;
    let raw: Vec<RawDoctor> = serde_json::from_str(&body)?;
    Ok(raw)
}

/// Fetch and normalize the directory in one step.
pub fn fetch_directory(url: &str) -> Result<Vec<DoctorRecord>> {
    let raw = fetch_raw(url)?;
    let records = normalize(raw);
    info!(count = records.len(), "normalized doctor feed");
    Ok(records)
}
