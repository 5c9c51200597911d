//! Prerequisite checks for the PHP extractor.

use crate::core::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Directory composer installs the parser library into.
pub const PHP_PARSER_VENDOR_DIR: &str = "vendor/nikic/php-parser";

/// Resolves the PHP interpreter and checks that it actually runs.
pub fn check_php(binary: &str) -> Result<PathBuf> {
    let php = which::which(binary)
        .map_err(|e| Error::environment(format!("{binary} not found in PATH: {e}")))?;

    let output = Command::new(&php)
        .arg("-v")
        .output()
        .map_err(|e| Error::environment(format!("failed to run {}: {e}", php.display())))?;

    let version = String::from_utf8_lossy(&output.stdout);
    if !output.status.success() || !version.contains("PHP") {
        return Err(Error::environment(format!(
            "{} is not a working PHP interpreter",
            php.display()
        )));
    }

    log::debug!("Using {}", version.lines().next().unwrap_or_default());
    Ok(php)
}

/// Installs `nikic/php-parser` with composer unless it is already vendored.
pub fn ensure_php_parser(project_root: &Path, skip_install: bool) -> Result<()> {
    if skip_install || project_root.join(PHP_PARSER_VENDOR_DIR).exists() {
        return Ok(());
    }

    let composer = which::which("composer")
        .map_err(|e| Error::environment(format!("composer not found in PATH: {e}")))?;

    log::info!("Installing PHP-Parser...");
    let status = Command::new(composer)
        .args(["require", "nikic/php-parser"])
        .current_dir(project_root)
        .status()
        .map_err(|e| Error::environment(format!("failed to run composer: {e}")))?;

    if !status.success() {
        return Err(Error::environment(format!(
            "composer require nikic/php-parser failed with {status}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_interpreter_is_environment_error() {
        let err = check_php("definitely-not-a-php-binary").unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_vendored_parser_skips_install() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(PHP_PARSER_VENDOR_DIR)).unwrap();
        assert!(ensure_php_parser(temp.path(), false).is_ok());
    }

    #[test]
    fn test_skip_flag_skips_install() {
        let temp = TempDir::new().unwrap();
        assert!(ensure_php_parser(temp.path(), true).is_ok());
    }
}
