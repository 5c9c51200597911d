use anyhow::Result;
use clap::Parser;
use doccov::cli::{flag_pair, Cli, Commands};
use doccov::commands::{self, AnalyzeConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            descriptions,
            output,
            format,
            exact_match,
            partial_match,
            full_names,
            short_names,
            include_lines,
            no_lines,
            labels,
            skip_composer,
            php,
            config,
            verbosity,
            quiet,
        } => {
            init_logging(verbosity, quiet);
            commands::handle_analyze(AnalyzeConfig {
                path,
                descriptions,
                output,
                format,
                exact_match: flag_pair(exact_match, partial_match),
                full_names: flag_pair(full_names, short_names),
                include_lines: flag_pair(include_lines, no_lines),
                labels,
                skip_composer,
                php,
                config,
                verbosity,
                quiet,
            })
        }
        Commands::Init { force } => {
            init_logging(0, false);
            commands::init_config(force)
        }
    }
}

/// `RUST_LOG` wins; otherwise the level follows `-v` / `--quiet`.
fn init_logging(verbosity: u8, quiet: bool) {
    let default_level = match (quiet, verbosity) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("doccov={default_level}")));

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
