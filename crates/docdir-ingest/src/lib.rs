//! Doctor directory ingestion: feed fetch and record normalization.
//!
//! The feed is a single JSON array of loosely-typed doctor objects. This
//! crate decodes it leniently (missing fields default), normalizes each
//! element into a [`docdir_model::DoctorRecord`], and derives the distinct
//! specialty list the filter UI offers.

pub mod error;
pub mod fetch;
pub mod normalize;
pub mod raw;

pub use error::{IngestError, Result};
pub use fetch::{DEFAULT_FEED_URL, fetch_directory, fetch_raw};
pub use normalize::{collect_specialties, normalize, normalize_record};
pub use raw::RawDoctor;
