//! `query` command: print a section of the resolved config as JSON.

use super::args::QuerySection;
use crate::config::SiteConfig;
use anyhow::Result;
use serde::Serialize;

pub fn run_query(config: &SiteConfig, section: QuerySection, pretty: bool) -> Result<()> {
    match section {
        QuerySection::Config => print_json(config, pretty),
        QuerySection::Head => print_json(config.head_tags(), pretty),
        QuerySection::Nav => print_json(&config.theme.nav, pretty),
        QuerySection::Sidebar => print_json(&config.theme.sidebar, pretty),
        QuerySection::Social => print_json(&config.theme.social, pretty),
        QuerySection::Footer => print_json(&config.theme.footer, pretty),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
