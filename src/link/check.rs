//! Advisory dead-link checking over a loaded configuration.
//!
//! Sidebars enumerate the site's content pages; navigation entries point
//! at them. A nav link that resolves to no declared sidebar page, sidebar
//! prefix, or known content path is reported as a dead link. Findings are
//! warnings only and are suppressed entirely by `ignore_dead_links`.

use super::kind::{LinkKind, without_fragment};
use crate::config::SiteConfig;
use owo_colors::OwoColorize;
use rustc_hash::FxHashSet;
use std::fmt;

/// A single advisory finding. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// An internal link that resolves to no declared path.
    DeadLink {
        /// Label of the nav entry the link appears under.
        text: String,
        /// The unresolved link target.
        link: String,
    },
    /// A sidebar prefix no declared path falls under.
    UnusedSidebarPrefix { prefix: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeadLink { text, link } => write!(
                f,
                "{} {} {} {}",
                "→".yellow(),
                link,
                "dead link in nav entry".dimmed(),
                format_args!("'{text}'").cyan()
            ),
            Self::UnusedSidebarPrefix { prefix } => write!(
                f,
                "{} {} {}",
                "→".yellow(),
                prefix,
                "sidebar prefix matches no declared path".dimmed()
            ),
        }
    }
}

/// Dead-link checker for one configuration.
///
/// The declared-path index is built once; `warnings()` returns a fresh
/// lazy iterator each call, so the scan is restartable.
pub struct LinkCheck<'a> {
    config: &'a SiteConfig,
    /// Resolvable targets: site root, sidebar prefixes, sidebar pages,
    /// and any extra content paths the generator knows about.
    declared: FxHashSet<String>,
}

impl<'a> LinkCheck<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        let mut declared = FxHashSet::default();
        declared.insert("/".to_string());

        for (prefix, sidebar) in &config.theme.sidebar {
            declared.insert(prefix.clone());
            for link in sidebar.links() {
                if matches!(LinkKind::parse(link), LinkKind::SiteRoot(_)) {
                    declared.insert(without_fragment(link).to_string());
                }
            }
        }

        Self { config, declared }
    }

    /// Extend the declared set with content paths known to the generator.
    pub fn with_pages<I, S>(mut self, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declared.extend(pages.into_iter().map(Into::into));
        self
    }

    /// Lazily yield advisory warnings: dead nav links first, then unused
    /// sidebar prefixes. Empty when `ignore_dead_links` is set.
    pub fn warnings(&self) -> impl Iterator<Item = Warning> + '_ {
        let enabled = !self.config.ignore_dead_links;

        let dead_links = self
            .config
            .theme
            .nav
            .iter()
            .flat_map(|entry| entry.links().map(move |link| (entry.text(), link)))
            .filter(move |(_, link)| enabled && !self.resolves(link))
            .map(|(text, link)| Warning::DeadLink {
                text: text.to_string(),
                link: link.to_string(),
            });

        let unused_prefixes = self
            .config
            .theme
            .sidebar
            .keys()
            .filter(move |prefix| enabled && !self.prefix_used(prefix))
            .map(|prefix| Warning::UnusedSidebarPrefix {
                prefix: prefix.clone(),
            });

        dead_links.chain(unused_prefixes)
    }

    /// Whether an internal link resolves to a declared path.
    /// External links and fragments always resolve.
    fn resolves(&self, link: &str) -> bool {
        match LinkKind::parse(link) {
            LinkKind::SiteRoot(path) => self.declared.contains(without_fragment(path)),
            _ => true,
        }
    }

    /// Whether any declared path or nav link falls under `prefix`.
    fn prefix_used(&self, prefix: &str) -> bool {
        self.declared
            .iter()
            .any(|path| path != prefix && path.starts_with(prefix))
            || self
                .config
                .theme
                .nav
                .iter()
                .flat_map(|entry| entry.links())
                .any(|link| link.starts_with(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn config(extra: &str) -> SiteConfig {
        SiteConfig::from_str(&format!("title = \"Test\"\nbase = \"/\"\n{extra}")).unwrap()
    }

    const GUIDE_SIDEBAR: &str = r#"[theme.sidebar."/guide/"]
sections = [
    { text = "Introduction", items = [
        { text = "Installation", link = "/guide/installation" },
    ] },
]"#;

    #[test]
    fn test_declared_links_resolve() {
        let config = config(&format!(
            "[[theme.nav]]\ntext = \"Home\"\nlink = \"/\"\n\n{GUIDE_SIDEBAR}"
        ));
        let check = LinkCheck::new(&config);
        assert!(check.resolves("/guide/installation"));
        assert!(check.resolves("/guide/"));
        assert!(check.resolves("/"));
        assert_eq!(check.warnings().count(), 0);
    }

    #[test]
    fn test_undeclared_nav_link_warns() {
        let config = config(&format!(
            r#"[[theme.nav]]
text = "Home"
link = "/"

[[theme.nav]]
text = "Missing"
link = "/guide/missing"

{GUIDE_SIDEBAR}"#
        ));
        let check = LinkCheck::new(&config);
        let warnings: Vec<_> = check.warnings().collect();
        assert_eq!(
            warnings,
            [Warning::DeadLink {
                text: "Missing".to_string(),
                link: "/guide/missing".to_string(),
            }]
        );
    }

    #[test]
    fn test_warnings_restartable() {
        let config = config("[[theme.nav]]\ntext = \"Gone\"\nlink = \"/gone\"");
        let check = LinkCheck::new(&config);
        assert_eq!(check.warnings().count(), 1);
        // A second scan over the same checker yields the same findings.
        assert_eq!(check.warnings().count(), 1);
    }

    #[test]
    fn test_ignore_dead_links_suppresses_all() {
        let config = config(
            "ignore_dead_links = true\n[[theme.nav]]\ntext = \"Gone\"\nlink = \"/gone\"",
        );
        let check = LinkCheck::new(&config);
        assert_eq!(check.warnings().count(), 0);
    }

    #[test]
    fn test_external_links_skipped() {
        let config = config(
            "[[theme.nav]]\ntext = \"GitHub\"\nlink = \"https://github.com/rahaaatul/TokySnatcher\"",
        );
        let check = LinkCheck::new(&config);
        assert_eq!(check.warnings().count(), 0);
    }

    #[test]
    fn test_fragment_stripped_before_matching() {
        let config = config(&format!(
            "[[theme.nav]]\ntext = \"Install\"\nlink = \"/guide/installation#requirements\"\n\n{GUIDE_SIDEBAR}"
        ));
        let check = LinkCheck::new(&config);
        assert_eq!(check.warnings().count(), 0);
    }

    #[test]
    fn test_extra_pages_extend_declared_set() {
        let config = config("[[theme.nav]]\ntext = \"Changelog\"\nlink = \"/changelog\"");
        assert_eq!(LinkCheck::new(&config).warnings().count(), 1);

        let check = LinkCheck::new(&config).with_pages(["/changelog"]);
        assert_eq!(check.warnings().count(), 0);
    }

    #[test]
    fn test_unused_sidebar_prefix_warns() {
        let config = config(
            "[theme.sidebar.\"/orphan/\"]\nsections = [{ text = \"Empty\" }]",
        );
        let check = LinkCheck::new(&config);
        let warnings: Vec<_> = check.warnings().collect();
        assert_eq!(
            warnings,
            [Warning::UnusedSidebarPrefix {
                prefix: "/orphan/".to_string(),
            }]
        );
    }

    #[test]
    fn test_prefix_satisfied_by_own_entries() {
        let config = config(GUIDE_SIDEBAR);
        // /guide/installation falls under /guide/, so the prefix is used.
        assert_eq!(LinkCheck::new(&config).warnings().count(), 0);
    }
}
