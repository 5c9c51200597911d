use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::{DoccovConfig, CONFIG_FILE_NAME};
use crate::core::{Error, Result};

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parses a `.doccov.toml` document.
pub fn parse_and_validate_config(contents: &str) -> Result<DoccovConfig> {
    let config = toml::from_str::<DoccovConfig>(contents)
        .map_err(|e| Error::configuration(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))?;

    if let Some(extensions) = config.analysis.as_ref().and_then(|a| a.extensions.as_ref()) {
        if extensions.iter().any(|ext| ext.trim().is_empty()) {
            return Err(Error::configuration("analysis.extensions must not contain empty entries"));
        }
    }

    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<DoccovConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its parents, nearest first, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Finds the nearest `.doccov.toml` above the current directory.
///
/// Falls back to defaults when none is found or the one found is invalid.
pub fn load_config() -> DoccovConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return DoccovConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            DoccovConfig::default()
        })
}

/// Loads an explicitly requested config file; any failure is an error.
pub fn load_config_from(path: &Path) -> Result<DoccovConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::file_system_io("Failed to read config file", path, e))?;
    parse_and_validate_config(&contents)
}
