//! Link classification utilities.

/// Syntactic classification of links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, tel:, etc.)
    External(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/about, /guide/usage).
    SiteRoot(&'a str),
    /// File-relative path (./image.png, ../other).
    FileRelative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            Self::External(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::FileRelative(link)
        }
    }

    /// Check if link is HTTP/HTTPS.
    #[inline]
    pub fn is_http(link: &str) -> bool {
        link.starts_with("http://") || link.starts_with("https://")
    }
}

/// Check if a link carries a URL scheme.
///
/// `url::Url::parse` accepts any absolute URL (https, mailto, tel, ...)
/// and rejects scheme-less relative references.
#[inline]
pub fn is_external_link(link: &str) -> bool {
    url::Url::parse(link).is_ok()
}

/// Strip a `#fragment` suffix from a link, if present.
#[inline]
pub fn without_fragment(link: &str) -> &str {
    link.split_once('#').map_or(link, |(path, _)| path)
}
