//! `[[theme.nav]]` configuration: top navigation bar entries.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[theme.nav]]
//! text = "Documentation"
//! items = [
//!     { text = "Installation", link = "/guide/installation" },
//!     { text = "Usage", link = "/guide/usage" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// A top navigation entry: either a direct link or a labeled dropdown
/// group of links.
///
/// An entry with neither `link` nor `items` fails deserialization, so
/// every valid shape is enumerable here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Labeled group of links (dropdown).
    Group { text: String, items: Vec<NavItem> },
    /// Direct link.
    Leaf(NavItem),
}

impl NavEntry {
    /// Display label for this entry.
    pub fn text(&self) -> &str {
        match self {
            Self::Group { text, .. } => text,
            Self::Leaf(item) => &item.text,
        }
    }

    /// Iterate over all link targets in this entry (one for a leaf,
    /// each item for a group). Order is declaration order.
    pub fn links(&self) -> impl Iterator<Item = &str> {
        let items = match self {
            Self::Group { items, .. } => items.as_slice(),
            Self::Leaf(item) => std::slice::from_ref(item),
        };
        items.iter().map(|item| item.link.as_str())
    }
}

/// A labeled link: the leaf shape shared by nav entries and sidebar
/// sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, test_parse_config};

    #[test]
    fn test_leaf_entry() {
        let config = test_parse_config("[[theme.nav]]\ntext = \"Home\"\nlink = \"/\"");
        assert_eq!(config.theme.nav.len(), 1);
        assert_eq!(
            config.theme.nav[0],
            NavEntry::Leaf(NavItem::new("Home", "/"))
        );
        assert_eq!(config.theme.nav[0].text(), "Home");
        assert_eq!(config.theme.nav[0].links().collect::<Vec<_>>(), ["/"]);
    }

    #[test]
    fn test_group_entry() {
        let config = test_parse_config(
            r#"[[theme.nav]]
text = "Docs"
items = [
    { text = "Install", link = "/guide/installation" },
    { text = "Usage", link = "/guide/usage" },
]"#,
        );
        assert_eq!(config.theme.nav[0].text(), "Docs");
        assert_eq!(
            config.theme.nav[0].links().collect::<Vec<_>>(),
            ["/guide/installation", "/guide/usage"]
        );
    }

    #[test]
    fn test_entry_without_link_or_items_rejected() {
        let result = SiteConfig::from_str(
            "title = \"Test\"\nbase = \"/\"\n[[theme.nav]]\ntext = \"Broken\"",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_declaration_order_preserved() {
        let config = test_parse_config(
            r#"[[theme.nav]]
text = "B"
link = "/b"

[[theme.nav]]
text = "A"
link = "/a"
"#,
        );
        let labels: Vec<_> = config.theme.nav.iter().map(NavEntry::text).collect();
        assert_eq!(labels, ["B", "A"]);
    }
}
