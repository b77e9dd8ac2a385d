//! Filtering, sorting, suggestion, and URL-state logic for the doctor
//! directory.
//!
//! Everything here is synchronous and total: the engine, the codec, and
//! the suggestion scan are pure functions over typed inputs, and the store
//! is a thin owner that re-derives both of its outputs on every mutation.

pub mod engine;
pub mod query;
pub mod store;
pub mod suggest;

pub use engine::apply;
pub use query::{from_query, to_query};
pub use store::FilterStore;
pub use suggest::{SUGGESTION_LIMIT, suggest};
