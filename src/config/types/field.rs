//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Diagnostics reference fields through these constants instead of loose
/// strings, so a renamed field only has to change in one place.
///
/// # Example
///
/// ```ignore
/// diag.error(fields::BASE, "must start with '/'");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Field paths for every validated `site.toml` field.
pub mod fields {
    use super::FieldPath;

    pub const TITLE: FieldPath = FieldPath::new("title");
    pub const BASE: FieldPath = FieldPath::new("base");
    pub const OUT_DIR: FieldPath = FieldPath::new("out_dir");
    pub const HEAD: FieldPath = FieldPath::new("head");
    pub const NAV: FieldPath = FieldPath::new("theme.nav");
    pub const SIDEBAR: FieldPath = FieldPath::new("theme.sidebar");
    pub const SOCIAL: FieldPath = FieldPath::new("theme.social");
}
