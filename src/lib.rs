//! Documentation coverage auditing for PHP source trees.
//!
//! Elements extracted from PHP files are matched against curated reference
//! descriptions, numbered within their class and written out as a coverage
//! report. Inline doc comments unknown to the reference set are saved as
//! discovered descriptions, and undocumented names are collected into stub
//! files for later curation.

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod coverage;
pub mod descriptions;
pub mod extraction;
pub mod io;
pub mod progress;
pub mod report;

pub use crate::core::{
    DescriptionRecord, ElementRecord, ElementType, Error, Labels, MatchCondition, ReportRow,
    Result,
};

pub use crate::analysis::{audit_directory, AuditEngine, AuditOptions, AuditSettings, AuditSummary};

pub use crate::coverage::{CoverageStats, CoverageTracker};

pub use crate::descriptions::{DescriptionStore, MatchPolicy, NameMatcher, Resolution};

pub use crate::extraction::{ElementExtractor, Extraction, MemoryExtractor, PhpExtractor};

pub use crate::io::output::{create_writer, write_report, ReportFormat, ReportWriter};
