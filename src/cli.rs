use crate::core::Labels;
use crate::io::ReportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "doccov")]
#[command(about = "Documentation coverage auditor for PHP projects", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit a PHP source tree for documentation coverage
    Analyze {
        /// Directory to analyze
        path: PathBuf,

        /// Directory with the reference description files
        #[arg(short, long, env = "DOCCOV_DESCRIPTIONS")]
        descriptions: Option<PathBuf>,

        /// Report file (default: php_analysis.csv)
        #[arg(short, long, env = "DOCCOV_OUTPUT")]
        output: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,

        /// Match names case-sensitively (default)
        #[arg(long, conflicts_with = "partial_match")]
        exact_match: bool,

        /// Match names case-insensitively
        #[arg(long)]
        partial_match: bool,

        /// Show qualified member names such as `Foo::bar` (default)
        #[arg(long, conflicts_with = "short_names")]
        full_names: bool,

        /// Show member names without their class
        #[arg(long)]
        short_names: bool,

        /// Add a source line column to the report (default)
        #[arg(long, conflicts_with = "no_lines")]
        include_lines: bool,

        /// Leave the source line column out
        #[arg(long)]
        no_lines: bool,

        /// Language of report headers and type labels
        #[arg(long, value_enum)]
        labels: Option<Labels>,

        /// Do not install nikic/php-parser with composer
        #[arg(long)]
        skip_composer: bool,

        /// PHP interpreter to run the parser with
        #[arg(long, env = "DOCCOV_PHP")]
        php: Option<String>,

        /// Configuration file (default: nearest .doccov.toml)
        #[arg(short, long, env = "DOCCOV_CONFIG")]
        config: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,

        /// Suppress progress and statistics output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Collapses a `--flag` / `--no-flag` pair into an optional override.
pub fn flag_pair(enabled: bool, disabled: bool) -> Option<bool> {
    match (enabled, disabled) {
        (_, true) => Some(false),
        (true, false) => Some(true),
        (false, false) => None,
    }
}
