//! `check` command: load, validate, and scan for dead links.

use crate::config::SiteConfig;
use crate::link::LinkCheck;
use crate::log;
use crate::logger::plural_count;
use anyhow::{Result, bail};
use owo_colors::OwoColorize;

/// Validate the config and report advisory warnings.
///
/// Structural errors have already aborted in `SiteConfig::load`; this
/// runs the advisory dead-link scan on a config that loaded cleanly.
pub fn run_check(config: &SiteConfig, strict: bool, pages: &[String]) -> Result<()> {
    log!("check"; "loaded '{}'", config.config_path.display());

    let check = LinkCheck::new(config).with_pages(pages.iter().cloned());
    let warnings: Vec<_> = check.warnings().collect();

    if warnings.is_empty() {
        log!("check"; "{}", "all checks passed".green());
        return Ok(());
    }

    log!("warning"; "found {}:", plural_count(warnings.len(), "dead link warning"));
    for warning in &warnings {
        eprintln!("{warning}");
    }

    if strict {
        bail!("check failed: {}", plural_count(warnings.len(), "warning"));
    }
    Ok(())
}
