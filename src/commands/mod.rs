//! CLI command implementations.
//!
//! - **analyze**: audit a PHP tree and write the coverage report
//! - **init**: write a default `.doccov.toml`

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
