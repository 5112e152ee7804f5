//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// siteconf documentation-site configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: site.toml, searched upward from cwd)
    #[arg(short = 'C', long, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load the config, validate it, and report dead links
    #[command(visible_alias = "c")]
    Check {
        /// Treat dead-link warnings as errors (non-zero exit)
        #[arg(short, long)]
        strict: bool,

        /// Content paths known to the generator, counted as declared
        /// (e.g. `-p /changelog -p /contributing`)
        #[arg(short, long, value_name = "PATH")]
        pages: Vec<String>,

        /// Enable verbose output for debugging
        #[arg(short = 'V', long)]
        verbose: bool,
    },

    /// Print a section of the resolved config as JSON
    #[command(visible_alias = "q")]
    Query {
        /// Section to print
        #[arg(value_enum, default_value = "config")]
        section: QuerySection,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

/// Sections addressable by `query`.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySection {
    /// The whole resolved configuration
    Config,
    /// Head elements, in declared order
    Head,
    /// Top navigation entries
    Nav,
    /// Sidebars keyed by path prefix
    Sidebar,
    /// Social links
    Social,
    /// Footer text
    Footer,
}
