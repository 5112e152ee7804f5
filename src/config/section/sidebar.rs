//! `[theme.sidebar]` configuration: per-path-prefix link sections.
//!
//! Each key is a URL-path prefix; pages under that prefix show the
//! associated sidebar beside their content.
//!
//! # Example
//!
//! ```toml
//! [theme.sidebar."/guide/"]
//! sections = [
//!     { text = "Introduction", items = [
//!         { text = "Installation", link = "/guide/installation" },
//!     ] },
//! ]
//! ```

use super::nav::NavItem;
use serde::{Deserialize, Serialize};

/// Sidebar shown for one URL-path prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sidebar {
    /// Ordered sections, each with a title and its entries.
    pub sections: Vec<SidebarSection>,
}

impl Sidebar {
    /// Iterate over all link targets in this sidebar, in declaration order.
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|section| section.items.iter())
            .map(|item| item.link.as_str())
    }
}

/// A titled group of sidebar entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    /// Section title.
    pub text: String,
    /// Ordered entries.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_empty_by_default() {
        let config = test_parse_config("");
        assert!(config.theme.sidebar.is_empty());
    }

    #[test]
    fn test_prefix_keys_and_sections() {
        let config = test_parse_config(
            r#"[theme.sidebar."/guide/"]
sections = [
    { text = "Introduction", items = [
        { text = "Installation", link = "/guide/installation" },
        { text = "Usage", link = "/guide/usage" },
    ] },
]

[theme.sidebar."/api/"]
sections = [
    { text = "API Reference", items = [{ text = "CLI Commands", link = "/api/cli" }] },
]"#,
        );
        assert_eq!(config.theme.sidebar.len(), 2);

        let guide = &config.theme.sidebar["/guide/"];
        assert_eq!(guide.sections.len(), 1);
        assert_eq!(guide.sections[0].text, "Introduction");
        assert_eq!(
            guide.links().collect::<Vec<_>>(),
            ["/guide/installation", "/guide/usage"]
        );

        let api = &config.theme.sidebar["/api/"];
        assert_eq!(api.links().collect::<Vec<_>>(), ["/api/cli"]);
    }

    #[test]
    fn test_section_items_default_empty() {
        let config = test_parse_config(
            "[theme.sidebar.\"/notes/\"]\nsections = [{ text = \"Notes\" }]",
        );
        let notes = &config.theme.sidebar["/notes/"];
        assert!(notes.sections[0].items.is_empty());
        assert_eq!(notes.links().count(), 0);
    }
}
