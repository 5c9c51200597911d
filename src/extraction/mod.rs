//! Element extraction boundary.
//!
//! Extractors turn one source file into an ordered list of
//! [`ElementRecord`]s. A file that cannot be parsed yields no elements and a
//! diagnostic; it never fails the run.

pub mod docblock;
pub mod environment;
pub mod php;

pub use docblock::summarize;
pub use php::PhpExtractor;

use crate::core::ElementRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Elements of one file plus an optional message from the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub elements: Vec<ElementRecord>,
    pub diagnostic: Option<String>,
}

impl Extraction {
    pub fn failed(diagnostic: impl Into<String>) -> Self {
        Self {
            elements: Vec::new(),
            diagnostic: Some(diagnostic.into()),
        }
    }
}

pub trait ElementExtractor {
    /// Elements of `path` in document order.
    fn extract(&self, path: &Path) -> Extraction;
}

impl<T: ElementExtractor + ?Sized> ElementExtractor for &T {
    fn extract(&self, path: &Path) -> Extraction {
        (**self).extract(path)
    }
}

/// Serves pre-built element lists keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryExtractor {
    files: HashMap<PathBuf, Vec<ElementRecord>>,
}

impl MemoryExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, elements: Vec<ElementRecord>) -> Self {
        self.files.insert(path.into(), elements);
        self
    }
}

impl ElementExtractor for MemoryExtractor {
    fn extract(&self, path: &Path) -> Extraction {
        match self.files.get(path) {
            Some(elements) => Extraction {
                elements: elements.clone(),
                diagnostic: None,
            },
            None => Extraction::failed(format!("no elements registered for {}", path.display())),
        }
    }
}
