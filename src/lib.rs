//! siteconf - declarative documentation-site configuration.
//!
//! Loads an immutable `site.toml` describing a documentation site
//! (title, base path, head metadata, navigation, sidebars, social links,
//! footer), validates its structure in one pass, and offers an advisory
//! dead-link scan. An external static-site generator consumes the loaded
//! structure once at build start.

pub mod cli;
pub mod config;
pub mod link;
pub mod logger;

pub use config::{ConfigError, SiteConfig};
pub use link::{LinkCheck, Warning};
