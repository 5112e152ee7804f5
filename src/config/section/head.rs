//! `head` configuration: HTML metadata elements injected into every page.
//!
//! # Example
//!
//! ```toml
//! head = [
//!     ["meta", { name = "theme-color", content = "#3b82f6" }],
//!     ["link", { rel = "icon", href = "/favicon.ico" }],
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Elements that take no closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A single head element: tag name plus attribute map.
///
/// Serializes as a two-element sequence `["meta", { name = "...", ... }]`,
/// matching the shape documentation generators expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag(pub String, pub BTreeMap<String, String>);

impl HeadTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into(), BTreeMap::new())
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.1.insert(name.into(), value.into());
        self
    }

    /// Tag name (e.g. "meta", "link", "script").
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// Attribute map.
    pub fn attrs(&self) -> &BTreeMap<String, String> {
        &self.1
    }

    /// Render this element as HTML, attribute values escaped.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(32);
        out.push('<');
        out.push_str(&self.0);
        for (name, value) in &self.1 {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');
        if !VOID_ELEMENTS.contains(&self.0.as_str()) {
            out.push_str("</");
            out.push_str(&self.0);
            out.push('>');
        }
        out
    }
}

/// Escape an attribute value for safe HTML embedding.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_parse_order_preserved() {
        let config = test_parse_config(
            r#"head = [
    ["meta", { name = "a" }],
    ["link", { rel = "icon" }],
]"#,
        );
        assert_eq!(config.head.len(), 2);
        assert_eq!(config.head[0].tag(), "meta");
        assert_eq!(config.head[0].attrs().get("name").unwrap(), "a");
        assert_eq!(config.head[1].tag(), "link");
        assert_eq!(config.head[1].attrs().get("rel").unwrap(), "icon");
    }

    #[test]
    fn test_render_void_element() {
        let tag = HeadTag::new("meta")
            .with_attr("name", "theme-color")
            .with_attr("content", "#3b82f6");
        assert_eq!(
            tag.render(),
            r##"<meta content="#3b82f6" name="theme-color">"##
        );
    }

    #[test]
    fn test_render_closing_tag() {
        let tag = HeadTag::new("script").with_attr("src", "/analytics.js");
        assert_eq!(tag.render(), r#"<script src="/analytics.js"></script>"#);
    }

    #[test]
    fn test_render_escapes_attrs() {
        let tag = HeadTag::new("meta").with_attr("content", "a \"quoted\" <value> & more");
        assert_eq!(
            tag.render(),
            r#"<meta content="a &quot;quoted&quot; &lt;value&gt; &amp; more">"#
        );
    }

    #[test]
    fn test_empty_head_by_default() {
        let config = test_parse_config("");
        assert!(config.head.is_empty());
    }
}
