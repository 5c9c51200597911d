use crate::core::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

pub struct FileWalker {
    root: PathBuf,
    extensions: Vec<String>,
    ignore_patterns: Vec<String>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extensions: vec!["php".to_string()],
            ignore_patterns: vec![],
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Matching files under the root, sorted by path.
    ///
    /// Unreadable entries are logged and skipped.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let patterns = self
            .ignore_patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry under {}: {}", self.root.display(), e);
                    continue;
                }
            };
            let path = entry.path();

            if path.is_file() && self.should_process(path, &patterns) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path, patterns: &[glob::Pattern]) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = ext.to_string_lossy();
        if !self
            .extensions
            .iter()
            .any(|wanted| wanted.eq_ignore_ascii_case(&ext))
        {
            return false;
        }

        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        !patterns
            .iter()
            .any(|p| p.matches_path(relative) || p.matches_path(path))
    }
}
