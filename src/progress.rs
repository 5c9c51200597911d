//! Progress feedback for long audits.
//!
//! A single `indicatif` bar tracks files as they are parsed. It is hidden in
//! quiet mode (`--quiet` or the `DOCCOV_QUIET` env var) and whenever stderr
//! is not a terminal, so piped output and CI logs stay clean.

use indicatif::{ProgressBar, ProgressStyle};

pub const TEMPLATE_FILE_ANALYSIS: &str = "📁 {msg} {pos}/{len} files ({percent}%) - {eta}";
pub const TEMPLATE_SPINNER: &str = "{spinner} {msg}";

/// Configuration for progress display behavior
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressConfig {
    /// Whether to suppress all progress output
    pub quiet_mode: bool,
    /// Verbosity level (0 = basic, 1 = detailed, 2 = very detailed)
    pub verbosity: u8,
}

impl ProgressConfig {
    pub fn new(quiet_mode: bool, verbosity: u8) -> Self {
        Self {
            quiet_mode,
            verbosity,
        }
    }

    /// Quiet when either `quiet` is set or `DOCCOV_QUIET` is present.
    pub fn from_env(quiet: bool, verbosity: u8) -> Self {
        let env_quiet = std::env::var_os("DOCCOV_QUIET").is_some();
        Self::new(quiet || env_quiet, verbosity)
    }

    pub fn should_show_progress(&self) -> bool {
        if self.quiet_mode {
            return false;
        }

        use std::io::IsTerminal;
        std::io::stderr().is_terminal()
    }

    /// Bar over `len` files, hidden when progress should not be shown.
    pub fn file_bar(&self, len: u64) -> ProgressBar {
        if !self.should_show_progress() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        let style = ProgressStyle::default_bar()
            .template(TEMPLATE_FILE_ANALYSIS)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░  ");
        pb.set_style(style);
        pb
    }

    /// Spinner for steps of unknown length such as installing PHP-Parser.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if !self.should_show_progress() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template(TEMPLATE_SPINNER)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        pb.set_style(style);
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_mode_disables_progress() {
        let config = ProgressConfig::new(true, 0);
        assert!(!config.should_show_progress());
    }

    #[test]
    fn test_explicit_quiet_flag() {
        let config = ProgressConfig::from_env(true, 0);
        assert!(!config.should_show_progress());
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(ProgressConfig::from_env(false, 2).verbosity, 2);
    }

    #[test]
    fn test_quiet_mode_creates_hidden_bars() {
        let config = ProgressConfig::new(true, 0);
        assert!(config.file_bar(10).is_hidden());
        assert!(config.spinner("Installing").is_hidden());
    }
}
