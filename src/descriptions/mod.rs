//! Curated reference descriptions.
//!
//! The store loads one file per element type, the matcher maps element names
//! onto store entries, and discovered descriptions are appended back to
//! `found_*.json` files for curators.

pub mod format;
pub mod matcher;
pub mod store;

pub use format::{merge_into_file, normalize, read_description_file, write_description_file};
pub use matcher::{candidate_names, MatchPolicy, NameMatcher, Resolution};
pub use store::{AppendOutcome, DescriptionStore};
