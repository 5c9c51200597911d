use crate::core::{unqualified_name, ElementType};
use serde::Serialize;
use std::collections::BTreeMap;

/// Where a name was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub relative_path: String,
    pub source_line: usize,
}

/// Occurrences of same-named members, functions and variables across the tree.
///
/// Members are keyed by their unqualified name, so `A::save` and `B::save`
/// share one entry.
#[derive(Debug, Clone, Default)]
pub struct DuplicateRegistry {
    entries: BTreeMap<(String, ElementType), Vec<Occurrence>>,
}

impl DuplicateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracks(element_type: ElementType) -> bool {
        matches!(
            element_type,
            ElementType::Method
                | ElementType::Property
                | ElementType::ClassConstant
                | ElementType::Function
                | ElementType::Variable
        )
    }

    pub fn observe(
        &mut self,
        element_type: ElementType,
        name: &str,
        relative_path: &str,
        source_line: usize,
    ) {
        if !Self::tracks(element_type) {
            return;
        }
        let key_name = if element_type.is_class_member() {
            unqualified_name(name)
        } else {
            name
        };
        self.entries
            .entry((key_name.to_string(), element_type))
            .or_default()
            .push(Occurrence {
                relative_path: relative_path.to_string(),
                source_line,
            });
    }

    /// Every keyed name of `element_type` with its occurrences.
    pub fn duplicates_of(&self, element_type: ElementType) -> BTreeMap<String, Vec<Occurrence>> {
        self.entries
            .iter()
            .filter(|((_, ty), _)| *ty == element_type)
            .map(|((name, _), occurrences)| (name.clone(), occurrences.clone()))
            .collect()
    }

    /// Names of `element_type` seen in more than one place.
    pub fn collisions(&self, element_type: ElementType) -> BTreeMap<String, Vec<Occurrence>> {
        self.duplicates_of(element_type)
            .into_iter()
            .filter(|(_, occurrences)| occurrences.len() > 1)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
