//! Base path and canonical URL resolution.
//!
//! - [`BasePath`]: deployment sub-path, always `/`-delimited on both ends
//! - [`canonical_base`]: `siteUrl` + base path, or the base path alone
//! - [`abs_url`] / [`origin_of`]: soft-failing helpers built on the `url` crate
//!
//! Nothing here returns an error: malformed inputs degrade to relative values,
//! since canonical and Open Graph URLs are not critical to page function.

use std::fmt;

use serde::Serialize;
use url::Url;

/// Normalized deployment base path.
///
/// Invariants:
/// - Always starts with `/`
/// - Always ends with `/`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BasePath(String);

impl BasePath {
    /// Normalize a raw base path (`portfolio` -> `/portfolio/`).
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return Self::root();
        }

        let mut path = String::with_capacity(trimmed.len() + 2);
        if !trimmed.starts_with('/') {
            path.push('/');
        }
        path.push_str(trimmed);
        if !path.ends_with('/') {
            path.push('/');
        }
        Self(path)
    }

    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Pick the first non-blank source and normalize it.
    ///
    /// Sources are ordered by precedence (CLI, env, config); `/` when all
    /// are blank.
    pub fn resolve<'a, I>(sources: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        sources
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .map_or_else(Self::root, Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical base URL for the site.
///
/// With a `site_url`, the base path is resolved against it (one trailing
/// slash on `site_url` is dropped first). Without one, or when `site_url`
/// cannot be parsed, the host-relative base path is returned.
pub fn canonical_base(site_url: &str, base_path: &BasePath) -> String {
    let site_url = site_url.trim();
    let site_url = site_url.strip_suffix('/').unwrap_or(site_url);
    if site_url.is_empty() {
        return base_path.to_string();
    }

    Url::parse(site_url)
        .and_then(|url| url.join(base_path.as_str()))
        .map_or_else(|_| base_path.to_string(), String::from)
}

/// Whether `s` parses as an absolute URL.
pub fn is_absolute(s: &str) -> bool {
    Url::parse(s).is_ok()
}

/// Resolve `path` against `base`.
///
/// - empty `path` -> `base`
/// - absolute `base` -> standard URL resolution
/// - otherwise `path` is returned unchanged
pub fn abs_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }

    match Url::parse(base).and_then(|b| b.join(path)) {
        Ok(url) => url.into(),
        Err(_) => path.to_string(),
    }
}

/// Origin (`scheme://host[:port]`) of an absolute URL.
///
/// Returns `None` for relative or opaque URLs (e.g. `mailto:`).
pub fn origin_of(s: &str) -> Option<String> {
    let url = Url::parse(s.trim()).ok()?;
    let origin = url.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}

/// Host name of an absolute URL.
pub fn host_of(s: &str) -> Option<String> {
    Url::parse(s).ok()?.host_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_normalize() {
        assert_eq!(BasePath::new("").as_str(), "/");
        assert_eq!(BasePath::new("/").as_str(), "/");
        assert_eq!(BasePath::new("portfolio").as_str(), "/portfolio/");
        assert_eq!(BasePath::new("/portfolio").as_str(), "/portfolio/");
        assert_eq!(BasePath::new("portfolio/").as_str(), "/portfolio/");
        assert_eq!(BasePath::new(" /a/b/ ").as_str(), "/a/b/");
    }

    #[test]
    fn test_base_path_resolve_precedence() {
        let base = BasePath::resolve([Some("/cli"), Some("/env"), Some("/seo")]);
        assert_eq!(base.as_str(), "/cli/");

        let base = BasePath::resolve([None, Some("env"), Some("/seo")]);
        assert_eq!(base.as_str(), "/env/");

        let base = BasePath::resolve([None, Some("  "), Some("/seo")]);
        assert_eq!(base.as_str(), "/seo/");

        let base = BasePath::resolve([None, None, None]);
        assert_eq!(base.as_str(), "/");
    }

    #[test]
    fn test_canonical_with_site_url() {
        let base = BasePath::new("/portfolio");
        assert_eq!(
            canonical_base("https://example.com", &base),
            "https://example.com/portfolio/"
        );
        assert_eq!(
            canonical_base("https://example.com/", &base),
            "https://example.com/portfolio/"
        );
        assert_eq!(
            canonical_base("https://example.com", &BasePath::root()),
            "https://example.com/"
        );
    }

    #[test]
    fn test_canonical_without_site_url() {
        let base = BasePath::new("/portfolio/");
        assert_eq!(canonical_base("", &base), "/portfolio/");
        assert_eq!(canonical_base("   ", &base), "/portfolio/");
    }

    #[test]
    fn test_canonical_malformed_site_url() {
        let base = BasePath::new("/x/");
        assert_eq!(canonical_base("not a url", &base), "/x/");
        assert_eq!(canonical_base("example.com", &base), "/x/");
    }

    #[test]
    fn test_abs_url() {
        let base = "https://example.com/portfolio/";
        assert_eq!(abs_url(base, ""), base);
        assert_eq!(abs_url(base, "/feed.xml"), "https://example.com/feed.xml");
        assert_eq!(
            abs_url(base, "posts/hello"),
            "https://example.com/portfolio/posts/hello"
        );
        assert_eq!(abs_url(base, "#about"), "https://example.com/portfolio/#about");
        assert_eq!(abs_url(base, "https://cdn.dev/a.png"), "https://cdn.dev/a.png");
    }

    #[test]
    fn test_abs_url_relative_base() {
        assert_eq!(abs_url("/", "/feed.xml"), "/feed.xml");
        assert_eq!(abs_url("/", "posts/a"), "posts/a");
        assert_eq!(abs_url("/", ""), "/");
    }

    #[test]
    fn test_origin_of() {
        assert_eq!(
            origin_of("https://avatars.githubusercontent.com/u/1?v=4"),
            Some("https://avatars.githubusercontent.com".to_string())
        );
        assert_eq!(
            origin_of("http://localhost:5173/x"),
            Some("http://localhost:5173".to_string())
        );
        assert_eq!(origin_of("/assets/me.png"), None);
        assert_eq!(origin_of("mailto:me@example.com"), None);
        assert_eq!(origin_of(""), None);
    }

    #[test]
    fn test_host_of() {
        assert_eq!(
            host_of("https://example.com/portfolio/"),
            Some("example.com".to_string())
        );
        assert_eq!(host_of("/portfolio/"), None);
    }
}
