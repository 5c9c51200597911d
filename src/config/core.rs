use crate::core::Labels;
use crate::io::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = ".doccov.toml";

/// Root configuration structure for doccov
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DoccovConfig {
    #[serde(default)]
    pub analysis: Option<AnalysisConfig>,

    /// Location of the reference description files
    #[serde(default)]
    pub descriptions: Option<DescriptionsConfig>,

    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// PHP interpreter and parser script
    #[serde(default)]
    pub extractor: Option<ExtractorConfig>,

    /// Ignore patterns
    #[serde(default)]
    pub ignore: Option<IgnoreConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Case-sensitive name matching (default: true)
    pub exact_match: Option<bool>,
    /// Report qualified member names (default: true)
    pub full_names: Option<bool>,
    pub check_duplicates: Option<bool>,
    /// File extensions to scan (default: ["php"])
    pub extensions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescriptionsConfig {
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
    pub format: Option<ReportFormat>,
    pub labels: Option<Labels>,
    pub include_line_numbers: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractorConfig {
    pub php: Option<String>,
    /// Where the bundled AST script is written before parsing
    pub script: Option<PathBuf>,
    pub skip_composer: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IgnoreConfig {
    pub patterns: Vec<String>,
}

impl DoccovConfig {
    pub fn exact_match(&self) -> bool {
        self.analysis
            .as_ref()
            .and_then(|a| a.exact_match)
            .unwrap_or(true)
    }

    pub fn full_names(&self) -> bool {
        self.analysis
            .as_ref()
            .and_then(|a| a.full_names)
            .unwrap_or(true)
    }

    pub fn check_duplicates(&self) -> bool {
        self.analysis
            .as_ref()
            .and_then(|a| a.check_duplicates)
            .unwrap_or(true)
    }

    pub fn extensions(&self) -> Vec<String> {
        self.analysis
            .as_ref()
            .and_then(|a| a.extensions.clone())
            .unwrap_or_else(|| vec!["php".to_string()])
    }

    pub fn descriptions_dir(&self) -> PathBuf {
        self.descriptions
            .as_ref()
            .and_then(|d| d.directory.clone())
            .unwrap_or_else(|| PathBuf::from("descriptions"))
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .as_ref()
            .and_then(|o| o.path.clone())
            .unwrap_or_else(|| PathBuf::from("php_analysis.csv"))
    }

    pub fn output_format(&self) -> ReportFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }

    pub fn labels(&self) -> Labels {
        self.output
            .as_ref()
            .and_then(|o| o.labels)
            .unwrap_or_default()
    }

    pub fn include_line_numbers(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.include_line_numbers)
            .unwrap_or(true)
    }

    pub fn php_binary(&self) -> String {
        self.extractor
            .as_ref()
            .and_then(|e| e.php.clone())
            .unwrap_or_else(|| "php".to_string())
    }

    pub fn script_path(&self) -> PathBuf {
        self.extractor
            .as_ref()
            .and_then(|e| e.script.clone())
            .unwrap_or_else(|| PathBuf::from("php_ast_parser.php"))
    }

    pub fn skip_composer(&self) -> bool {
        self.extractor
            .as_ref()
            .and_then(|e| e.skip_composer)
            .unwrap_or(false)
    }

    /// Glob patterns excluded from the scan.
    pub fn get_ignore_patterns(&self) -> Vec<String> {
        self.ignore
            .as_ref()
            .map(|ig| ig.patterns.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sections() {
        let config = DoccovConfig::default();
        assert!(config.exact_match());
        assert!(config.full_names());
        assert!(config.include_line_numbers());
        assert!(!config.skip_composer());
        assert_eq!(config.descriptions_dir(), PathBuf::from("descriptions"));
        assert_eq!(config.output_path(), PathBuf::from("php_analysis.csv"));
        assert_eq!(config.output_format(), ReportFormat::Csv);
        assert_eq!(config.labels(), Labels::Ru);
        assert_eq!(config.extensions(), vec!["php".to_string()]);
        assert!(config.get_ignore_patterns().is_empty());
    }

    #[test]
    fn test_partial_sections_fall_back_per_field() {
        let config = DoccovConfig {
            analysis: Some(AnalysisConfig {
                exact_match: Some(false),
                ..AnalysisConfig::default()
            }),
            ..DoccovConfig::default()
        };
        assert!(!config.exact_match());
        assert!(config.full_names());
    }
}
