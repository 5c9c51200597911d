mod core;
mod loader;

pub use self::core::{
    AnalysisConfig, DescriptionsConfig, DoccovConfig, ExtractorConfig, IgnoreConfig,
    OutputConfig, CONFIG_FILE_NAME,
};
pub use loader::{directory_ancestors, load_config, load_config_from, parse_and_validate_config};
