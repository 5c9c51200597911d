use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = r#"# doccov configuration

[analysis]
exact_match = true
full_names = true
check_duplicates = true
extensions = ["php"]

[descriptions]
directory = "descriptions"

[output]
path = "php_analysis.csv"
format = "csv"
labels = "ru"
include_line_numbers = true

[extractor]
php = "php"
script = "php_ast_parser.php"
skip_composer = false

[ignore]
patterns = [
    "vendor/**",
    "node_modules/**",
]
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
