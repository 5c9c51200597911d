use super::{ElementExtractor, Extraction};
use crate::core::{ElementRecord, Error, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// AST script run by `php` for every file; requires `nikic/php-parser`.
pub const PARSER_SCRIPT: &str = include_str!("../../scripts/php_ast_parser.php");

/// Extracts elements by running the bundled AST script through `php`.
#[derive(Debug, Clone)]
pub struct PhpExtractor {
    php: PathBuf,
    script: PathBuf,
}

impl PhpExtractor {
    /// Writes the parser script to `script_path` and binds to `php`.
    pub fn new(php: impl Into<PathBuf>, script_path: impl Into<PathBuf>) -> Result<Self> {
        let script = script_path.into();
        install_script(&script)?;
        Ok(Self {
            php: php.into(),
            script,
        })
    }

    pub fn script_path(&self) -> &Path {
        &self.script
    }
}

/// Writes the bundled script, creating parent directories.
pub fn install_script(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| Error::file_system_io("Failed to create script directory", parent, e))?;
    }
    fs::write(path, PARSER_SCRIPT)
        .map_err(|e| Error::file_system_io("Failed to write parser script", path, e))
}

impl ElementExtractor for PhpExtractor {
    fn extract(&self, path: &Path) -> Extraction {
        log::debug!("Parsing {}", path.display());

        let output = match Command::new(&self.php).arg(&self.script).arg(path).output() {
            Ok(output) => output,
            Err(e) => return Extraction::failed(format!("failed to run php: {e}")),
        };

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            let message = if stderr.is_empty() {
                format!("php exited with {}", output.status)
            } else {
                stderr
            };
            return Extraction::failed(message);
        }

        let diagnostic = (!stderr.is_empty()).then_some(stderr);
        match parse_elements(&String::from_utf8_lossy(&output.stdout)) {
            Ok(elements) => Extraction {
                elements,
                diagnostic,
            },
            Err(e) => Extraction::failed(format!("invalid parser output: {e}")),
        }
    }
}

/// Decodes the script's JSON output, skipping entries of unknown shape.
pub fn parse_elements(stdout: &str) -> Result<Vec<ElementRecord>> {
    if stdout.trim().is_empty() {
        return Ok(Vec::new());
    }
    let values: Vec<Value> = serde_json::from_str(stdout)?;
    Ok(values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<ElementRecord>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping unrecognized element: {}", e);
                None
            }
        })
        .collect())
}
