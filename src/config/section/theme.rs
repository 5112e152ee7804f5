//! `[theme]` configuration: navigation, sidebars, social links, footer.

use super::nav::NavEntry;
use super::sidebar::Sidebar;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the theme layer of the generator consumes: top navigation,
/// per-prefix sidebars, social links, and the footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Top navigation entries, in display order.
    pub nav: Vec<NavEntry>,

    /// Sidebars keyed by URL-path prefix.
    pub sidebar: BTreeMap<String, Sidebar>,

    /// Social links shown in the navbar.
    pub social: Vec<SocialLink>,

    /// Footer text.
    pub footer: Footer,
}

/// A social link: platform icon name plus target URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform icon name (e.g. "github", "discord").
    pub icon: String,
    /// Absolute URL of the profile or repository.
    pub link: String,
}

/// Footer message and copyright line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub message: String,
    pub copyright: String,
}
