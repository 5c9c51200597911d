use crate::analysis::{audit_directory, AuditOptions, AuditSettings, AuditSummary};
use crate::config::{self, DoccovConfig};
use crate::core::{ElementType, Labels};
use crate::descriptions::MatchPolicy;
use crate::extraction::environment::{check_php, ensure_php_parser};
use crate::extraction::PhpExtractor;
use crate::io::writers::print_statistics;
use crate::io::{ReportFormat, ReportLayout};
use crate::progress::ProgressConfig;
use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

/// Command-line values for `doccov analyze`; `None` defers to the config file.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub descriptions: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<ReportFormat>,
    pub exact_match: Option<bool>,
    pub full_names: Option<bool>,
    pub include_lines: Option<bool>,
    pub labels: Option<Labels>,
    pub skip_composer: bool,
    pub php: Option<String>,
    pub config: Option<PathBuf>,
    pub verbosity: u8,
    pub quiet: bool,
}

impl AnalyzeConfig {
    /// Merges command-line values over `file`, flags taking precedence.
    pub fn settings(&self, file: &DoccovConfig) -> AuditSettings {
        AuditSettings {
            target: self.path.clone(),
            descriptions_dir: self
                .descriptions
                .clone()
                .unwrap_or_else(|| file.descriptions_dir()),
            output: self.output.clone().unwrap_or_else(|| file.output_path()),
            format: self.format.unwrap_or_else(|| file.output_format()),
            layout: ReportLayout {
                labels: self.labels.unwrap_or_else(|| file.labels()),
                include_line_numbers: self
                    .include_lines
                    .unwrap_or_else(|| file.include_line_numbers()),
            },
            extensions: file.extensions(),
            ignore_patterns: file.get_ignore_patterns(),
            options: AuditOptions {
                match_policy: MatchPolicy {
                    exact_match: self.exact_match.unwrap_or_else(|| file.exact_match()),
                },
                full_names: self.full_names.unwrap_or_else(|| file.full_names()),
                check_duplicates: file.check_duplicates(),
            },
            progress: ProgressConfig::from_env(self.quiet, self.verbosity),
        }
    }
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let file_config = match &config.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => config::load_config(),
    };
    let settings = config.settings(&file_config);

    let php = config.php.clone().unwrap_or_else(|| file_config.php_binary());
    let php = check_php(&php).context("PHP interpreter is not available")?;

    let project_root = std::env::current_dir().context("Failed to get current directory")?;
    let spinner = settings.progress.spinner("Checking PHP-Parser");
    let installed = ensure_php_parser(
        &project_root,
        config.skip_composer || file_config.skip_composer(),
    );
    spinner.finish_and_clear();
    installed.context("Failed to install nikic/php-parser")?;

    let extractor = PhpExtractor::new(php, file_config.script_path())
        .context("Failed to install the PHP parser script")?;

    let summary = audit_directory(&settings, &extractor)
        .with_context(|| format!("Failed to analyze {}", settings.target.display()))?;

    if !settings.progress.quiet_mode {
        print_summary(&summary, settings.layout.labels);
    }
    Ok(())
}

fn print_summary(summary: &AuditSummary, labels: Labels) {
    let Some(report) = &summary.report_path else {
        println!("{}", "Nothing to report.".yellow());
        return;
    };

    println!(
        "Analyzed {} files, {} elements. Report saved to {}",
        summary.files_scanned,
        summary.rows.len(),
        report.display().to_string().bold()
    );
    print_statistics(&summary.stats, labels);

    if summary.stubs.total_written() > 0 {
        println!(
            "{} names without descriptions added to empty_*.json",
            summary.stubs.total_written()
        );
    }

    let collisions: usize = ElementType::ALL
        .iter()
        .map(|ty| summary.duplicates.collisions(*ty).len())
        .sum();
    if collisions > 0 {
        log::debug!("{} names occur more than once across files", collisions);
    }
}
