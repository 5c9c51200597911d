use crate::core::{DescriptionRecord, ElementType};
use crate::descriptions::merge_into_file;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Names written per stub file during a flush.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlushReport {
    written: BTreeMap<ElementType, usize>,
    failed: Vec<ElementType>,
}

impl FlushReport {
    pub fn written(&self, element_type: ElementType) -> usize {
        self.written.get(&element_type).copied().unwrap_or(0)
    }

    pub fn total_written(&self) -> usize {
        self.written.values().sum()
    }

    pub fn failed(&self) -> &[ElementType] {
        &self.failed
    }
}

/// Merges pending names into `empty_*.json`, one file per type.
///
/// A failing type is logged and skipped; the remaining types are still written.
pub(crate) fn write_stub_files(
    directory: &Path,
    pending: BTreeMap<ElementType, BTreeSet<String>>,
) -> FlushReport {
    let mut report = FlushReport::default();

    for (element_type, names) in pending {
        if names.is_empty() {
            continue;
        }
        let path = directory.join(element_type.stub_file());
        log::debug!("{}: {} elements without description", element_type, names.len());

        let stubs = names
            .into_iter()
            .map(|name| DescriptionRecord::new(name, ""))
            .collect();

        match merge_into_file(&path, stubs) {
            Ok(added) => {
                if added > 0 {
                    log::info!("Saved {} new entries to {}", added, path.display());
                }
                report.written.insert(element_type, added);
            }
            Err(e) => {
                log::warn!("Failed to update {}: {}", path.display(), e);
                report.failed.push(element_type);
            }
        }
    }

    report
}
