//! siteconf - documentation-site configuration checker.

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use siteconf::cli::{Cli, Commands, check::run_check, query::run_query};
use siteconf::config::{SiteConfig, find_config_file};
use siteconf::{log, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    if let Commands::Check { verbose, .. } = &cli.command {
        logger::set_verbose(*verbose);
    }

    let Some(config_path) = find_config_file(&cli.config) else {
        log!("error"; "Config file '{}' not found.", cli.config.display());
        std::process::exit(1);
    };

    let config = SiteConfig::load(&config_path)
        .with_context(|| format!("failed to load '{}'", config_path.display()))?;

    match &cli.command {
        Commands::Check { strict, pages, .. } => run_check(&config, *strict, pages),
        Commands::Query { section, pretty } => run_query(&config, *section, *pretty),
    }
}
