use anyhow::{Context, Result};
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use tidyspace::cleaner;
use tidyspace::cli::args::Cli;
use tidyspace::cli::output;
use tidyspace::common::config::CleanConfig;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse_normalized();

    if cli.no_color {
        colored::control::set_override(false);
    }

    init_logging(cli.verbose, cli.no_color);

    // Validate before touching any file
    let config = match CleanConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e);
            return Ok(ExitCode::from(1));
        }
    };

    if cli.files.is_empty() {
        output::print_no_files();
        return Ok(ExitCode::SUCCESS);
    }

    tracing::debug!(
        "cleaning {} file(s): indent={}, tab_size={}, eof={:?}",
        cli.files.len(),
        config.indent,
        config.tab_size,
        config.eof
    );

    let report = cleaner::clean_files(&cli.files, &config, output::print_file_outcome);
    output::print_summary(&report, config.dry_run);

    std::io::stdout().flush().context("Failed to flush stdout")?;
    Ok(ExitCode::SUCCESS)
}

/// Warnings always go to stderr; `--verbose` adds per-file debug detail.
/// `RUST_LOG` overrides both.
fn init_logging(verbose: bool, no_color: bool) {
    let default_filter = if verbose {
        "tidyspace=debug"
    } else {
        "tidyspace=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .without_time()
        .init();
}
