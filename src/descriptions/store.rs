use super::format::{merge_into_file, read_description_file};
use crate::core::{DescriptionRecord, ElementType, Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of [`DescriptionStore::append`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// New to the discovery file; written there and recorded in memory.
    Appended,
    /// An entry with this name is already known.
    AlreadyPresent,
    /// Blank descriptions are never stored.
    EmptyDescription,
}

/// Curated descriptions for every element type, in file order.
#[derive(Debug, Clone)]
pub struct DescriptionStore {
    directory: PathBuf,
    sets: BTreeMap<ElementType, Vec<DescriptionRecord>>,
}

impl DescriptionStore {
    /// Loads all reference files from `directory`, creating it if needed.
    ///
    /// Missing files yield empty sets; unreadable or malformed files are
    /// logged and treated as empty.
    pub fn load(directory: impl Into<PathBuf>) -> Result<Self> {
        let directory = directory.into();
        if !directory.exists() {
            log::info!("Creating descriptions directory {}", directory.display());
            fs::create_dir_all(&directory).map_err(|e| {
                Error::file_system_io("Failed to create descriptions directory", &directory, e)
            })?;
        }

        let sets = ElementType::ALL
            .iter()
            .map(|&ty| (ty, load_reference_set(&directory, ty)))
            .collect();

        Ok(Self { directory, sets })
    }

    /// Builds a store from already-loaded sets without touching disk.
    pub fn from_sets(
        directory: impl Into<PathBuf>,
        sets: impl IntoIterator<Item = (ElementType, Vec<DescriptionRecord>)>,
    ) -> Self {
        Self {
            directory: directory.into(),
            sets: sets.into_iter().collect(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn descriptions(&self, element_type: ElementType) -> &[DescriptionRecord] {
        self.sets
            .get(&element_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, element_type: ElementType, name: &str) -> bool {
        self.descriptions(element_type).iter().any(|r| r.name == name)
    }

    pub fn total_len(&self) -> usize {
        self.sets.values().map(Vec::len).sum()
    }

    /// Records a discovered description for `name`.
    ///
    /// The discovery file is re-read, merged and rewritten in full; the
    /// in-memory set only grows once the write succeeded.
    pub fn append(
        &mut self,
        element_type: ElementType,
        name: &str,
        desc: &str,
    ) -> Result<AppendOutcome> {
        if desc.trim().is_empty() {
            return Ok(AppendOutcome::EmptyDescription);
        }
        if self.contains(element_type, name) {
            return Ok(AppendOutcome::AlreadyPresent);
        }

        let record = DescriptionRecord::new(name, desc);
        let path = self.directory.join(element_type.discovery_file());
        let added = merge_into_file(&path, vec![record.clone()])?;

        self.sets.entry(element_type).or_default().push(record);
        if added == 0 {
            Ok(AppendOutcome::AlreadyPresent)
        } else {
            Ok(AppendOutcome::Appended)
        }
    }
}

fn load_reference_set(directory: &Path, element_type: ElementType) -> Vec<DescriptionRecord> {
    let primary = directory.join(element_type.reference_file());
    let path = match element_type.legacy_reference_file() {
        Some(legacy) if !primary.exists() => directory.join(legacy),
        _ => primary,
    };

    match read_description_file(&path) {
        Ok(records) => {
            log::debug!(
                "Loaded {} {} descriptions from {}",
                records.len(),
                element_type,
                path.display()
            );
            records
        }
        Err(e) => {
            log::warn!("Failed to load {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
