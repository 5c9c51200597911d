//! Per-type documentation coverage bookkeeping.
//!
//! Every processed element bumps `total`, then exactly one of `found` /
//! `missing`, and `empty` when no description could be resolved at all.
//! Inline doc comments that the store does not know yet are promoted into the
//! store ("discovery"); names that end up without any description are queued
//! for the `empty_*.json` stub files.

pub mod stubs;

pub use stubs::FlushReport;

use crate::core::{normalize_variable_name, ElementType};
use crate::descriptions::{AppendOutcome, DescriptionStore, MatchPolicy, NameMatcher};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Counters for a single element type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeCounts {
    pub total: usize,
    pub found: usize,
    pub missing: usize,
    pub empty: usize,
    /// Descriptions promoted from doc comments into the store.
    pub discovered: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageStats {
    counts: BTreeMap<ElementType, TypeCounts>,
}

impl CoverageStats {
    pub fn counts(&self, element_type: ElementType) -> TypeCounts {
        self.counts.get(&element_type).copied().unwrap_or_default()
    }

    pub fn total(&self, element_type: ElementType) -> usize {
        self.counts(element_type).total
    }

    pub fn found(&self, element_type: ElementType) -> usize {
        self.counts(element_type).found
    }

    pub fn missing(&self, element_type: ElementType) -> usize {
        self.counts(element_type).missing
    }

    pub fn empty(&self, element_type: ElementType) -> usize {
        self.counts(element_type).empty
    }

    pub fn discovered(&self, element_type: ElementType) -> usize {
        self.counts(element_type).discovered
    }

    pub fn total_discovered(&self) -> usize {
        self.counts.values().map(|c| c.discovered).sum()
    }

    pub fn total_elements(&self) -> usize {
        self.counts.values().map(|c| c.total).sum()
    }

    fn entry(&mut self, element_type: ElementType) -> &mut TypeCounts {
        self.counts.entry(element_type).or_default()
    }
}

/// Description chosen for an element after matching and discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedDescription {
    pub description: String,
    pub found: bool,
}

/// Owns the description store for a run and tallies coverage against it.
#[derive(Debug)]
pub struct CoverageTracker {
    store: DescriptionStore,
    matcher: NameMatcher,
    stats: CoverageStats,
    pending_empty: BTreeMap<ElementType, BTreeSet<String>>,
}

impl CoverageTracker {
    pub fn new(store: DescriptionStore, policy: MatchPolicy) -> Self {
        Self {
            store,
            matcher: NameMatcher::new(policy),
            stats: CoverageStats::default(),
            pending_empty: BTreeMap::new(),
        }
    }

    pub fn store(&self) -> &DescriptionStore {
        &self.store
    }

    pub fn stats(&self) -> &CoverageStats {
        &self.stats
    }

    /// Names queued for the stub file of `element_type`.
    pub fn pending_empty(&self, element_type: ElementType) -> impl Iterator<Item = &str> {
        self.pending_empty
            .get(&element_type)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Resolves the description of one element and updates the counters.
    ///
    /// A store entry always wins over the element's own doc text.
    pub fn record(
        &mut self,
        element_type: ElementType,
        name: &str,
        short_name: Option<&str>,
        doc_text: &str,
    ) -> TrackedDescription {
        self.stats.entry(element_type).total += 1;

        let resolution = self
            .matcher
            .resolve(&self.store, element_type, name, short_name);

        let stored_name = match element_type {
            ElementType::Variable => normalize_variable_name(name),
            _ => name.to_string(),
        };

        let description = if resolution.found {
            self.stats.entry(element_type).found += 1;
            resolution.description.unwrap_or_default()
        } else {
            self.stats.entry(element_type).missing += 1;
            if !doc_text.trim().is_empty() {
                self.discover(element_type, &stored_name, doc_text);
            }
            doc_text.to_string()
        };

        if description.trim().is_empty() {
            self.stats.entry(element_type).empty += 1;
            self.pending_empty
                .entry(element_type)
                .or_default()
                .insert(stored_name);
        }

        TrackedDescription {
            description,
            found: resolution.found,
        }
    }

    fn discover(&mut self, element_type: ElementType, name: &str, doc_text: &str) {
        match self.store.append(element_type, name, doc_text) {
            Ok(AppendOutcome::Appended) => {
                self.stats.entry(element_type).discovered += 1;
                log::info!("Saved discovered description: {} '{}'", element_type, name);
            }
            Ok(_) => {}
            Err(e) => log::warn!(
                "Failed to save discovered description for {} '{}': {}",
                element_type,
                name,
                e
            ),
        }
    }

    /// Writes all queued names into their `empty_*.json` stub files.
    pub fn flush_empty(&mut self) -> FlushReport {
        let pending = std::mem::take(&mut self.pending_empty);
        stubs::write_stub_files(self.store.directory(), pending)
    }
}
