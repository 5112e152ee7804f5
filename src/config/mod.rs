//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── head       # head metadata elements
//! │   ├── nav        # [[theme.nav]]
//! │   ├── sidebar    # [theme.sidebar]
//! │   └── theme      # [theme] (social, footer)
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The configuration is loaded once, validated in full, and never
//! mutated afterwards. `load` is an explicit function returning an
//! explicit value; there is no process-wide singleton, so tests can
//! construct as many configs as they like.

pub mod section;
pub mod types;
mod util;

pub use section::{Footer, HeadTag, NavEntry, NavItem, Sidebar, SidebarSection, SocialLink, ThemeConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, fields};
pub use util::find_config_file;

use crate::link::LinkKind;
use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Well-known config file name, searched upward from cwd.
pub const DEFAULT_CONFIG_NAME: &str = "site.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site title. Required.
    pub title: String,

    /// Site description, used for metadata tags.
    pub description: String,

    /// Root-relative URL prefix all pages are served under.
    /// Must start and end with `/`. Required.
    pub base: String,

    /// Output directory for generated pages, relative to the project
    /// root. `None` leaves the generator's default in place.
    pub out_dir: Option<PathBuf>,

    /// Suppress dead-link warnings entirely.
    pub ignore_dead_links: bool,

    /// Head elements injected into every generated page, in order.
    pub head: Vec<HeadTag>,

    /// Theme settings (nav, sidebar, social, footer)
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Load configuration from a file path with unknown field detection.
    ///
    /// Unknown fields are reported as warnings and ignored; structural
    /// errors abort with all collected diagnostics at once.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;

        if !ignored.is_empty() {
            log!("warning"; "unknown config fields, ignoring:");
            for field in &ignored {
                eprintln!("- {field}");
            }
        }

        config.validate().map_err(ConfigError::Diagnostics)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Get the project root directory
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Head elements in declared order, unchanged.
    pub fn head_tags(&self) -> &[HeadTag] {
        &self.head
    }

    /// Join a site-root link under `base`.
    ///
    /// `base = "/TokySnatcher/"` maps `/guide/usage` to
    /// `/TokySnatcher/guide/usage`. Links that are not site-root
    /// (absolute URLs, fragments) pass through untouched.
    pub fn url_for<'a>(&self, link: &'a str) -> std::borrow::Cow<'a, str> {
        match LinkKind::parse(link) {
            LinkKind::SiteRoot(path) => {
                std::borrow::Cow::Owned(format!("{}{}", self.base.trim_end_matches('/'), path))
            }
            _ => std::borrow::Cow::Borrowed(link),
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration structure.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();

        if self.title.is_empty() {
            diag.error(fields::TITLE, "required");
        }

        self.validate_base(&mut diag);

        if let Some(out_dir) = &self.out_dir
            && out_dir.is_absolute()
        {
            diag.error_with_hint(
                fields::OUT_DIR,
                format!("'{}' must be relative to the project root", out_dir.display()),
                "use a relative path like \"dist\"",
            );
        }

        for tag in &self.head {
            if tag.tag().is_empty() {
                diag.error(fields::HEAD, "head entry with empty tag name");
            }
        }

        self.validate_links(&mut diag);

        diag.into_result()
    }

    /// Check `base` invariants: non-empty, starts and ends with `/`.
    fn validate_base(&self, diag: &mut ConfigDiagnostics) {
        if self.base.is_empty() {
            diag.error_with_hint(fields::BASE, "required", "use \"/\" for a root deployment");
            return;
        }
        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            diag.error_with_hint(
                fields::BASE,
                format!("'{}' must start and end with '/'", self.base),
                "e.g. \"/TokySnatcher/\"",
            );
        }
    }

    /// Every declared link must be an absolute URL or a site-root path.
    fn validate_links(&self, diag: &mut ConfigDiagnostics) {
        for entry in &self.theme.nav {
            for link in entry.links() {
                Self::check_link_shape(fields::NAV, link, diag);
            }
        }
        for sidebar in self.theme.sidebar.values() {
            for link in sidebar.links() {
                Self::check_link_shape(fields::SIDEBAR, link, diag);
            }
        }
        for social in &self.theme.social {
            Self::check_link_shape(fields::SOCIAL, &social.link, diag);
        }
    }

    fn check_link_shape(field: FieldPath, link: &str, diag: &mut ConfigDiagnostics) {
        match LinkKind::parse(link) {
            LinkKind::External(_) | LinkKind::SiteRoot(_) => {}
            LinkKind::Fragment(_) | LinkKind::FileRelative(_) => diag.error_with_hint(
                field,
                format!("link '{link}' is neither an absolute URL nor a site-root path"),
                "start internal links with '/'",
            ),
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the minimal required fields prepended.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let content = format!("title = \"Test\"\nbase = \"/\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
