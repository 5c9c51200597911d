//! The audit pipeline: per-file numbering, duplicate tracking and the engine
//! that drives extraction, coverage tracking and report assembly.

pub mod duplicates;
pub mod engine;
pub mod sequencer;

pub use duplicates::{DuplicateRegistry, Occurrence};
pub use engine::{
    audit_directory, AuditEngine, AuditOptions, AuditOutcome, AuditSettings, AuditSummary,
};
pub use sequencer::{ClassScope, ClassSequencer};
