pub mod output;
pub mod walker;
pub mod writers;

pub use output::{create_writer, write_report, ReportFormat, ReportLayout, ReportWriter};
pub use walker::FileWalker;

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Path of `file` relative to `base`, or just its file name when `file`
/// lies outside `base`.
pub fn relative_path(file: &Path, base: &Path) -> String {
    match file.strip_prefix(base) {
        Ok(relative) => relative.to_string_lossy().into_owned(),
        Err(_) => file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.to_string_lossy().into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_relative_path_inside_base() {
        let base = PathBuf::from("/base");
        let file = base.join("subdir").join("file.php");
        assert_eq!(
            relative_path(&file, &base),
            PathBuf::from("subdir").join("file.php").to_string_lossy()
        );
    }

    #[test]
    fn test_relative_path_outside_base_uses_file_name() {
        let file = PathBuf::from("/elsewhere/file.php");
        assert_eq!(relative_path(&file, Path::new("/base")), "file.php");
    }

    #[test]
    fn test_write_file_replaces_contents() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(".doccov.toml");
        write_file(&path, "old").unwrap();
        write_file(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
