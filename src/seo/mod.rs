//! Resolved SEO values.
//!
//! [`SeoContext::resolve`] applies every fallback chain of the site data
//! once, so the generators and the head builder only read finished values:
//!
//! - **Base path / canonical URL**: override -> `seo.basePath` -> `/`
//! - **Titles**: `seo.title` -> `personal.name` -> `"Portfolio"`
//! - **Favicons, manifest, feed**: `/assets/images/...` defaults
//! - **Preconnect origins**: configured list + avatar host + canonical origin
//!
//! Resolution never fails; a missing or malformed `siteUrl` is reported via
//! [`SiteUrlState`] and the context falls back to host-relative URLs.

pub mod head;
pub mod jsonld;
pub mod og;

use crate::config::{NonEmpty, SiteData};
use crate::core::url::{BasePath, abs_url, canonical_base, is_absolute, origin_of};
use crate::utils::date::DateTimeUtc;
use serde::Serialize;

pub const DEFAULT_TITLE: &str = "Portfolio";
pub const DEFAULT_DESCRIPTION: &str = "A fast, modern, programmer-themed portfolio.";
/// The feed channel keeps its own fallback text.
pub const DEFAULT_FEED_DESCRIPTION: &str = "A fast, modern, tech portfolio.";
pub const DEFAULT_GENERATOR: &str = "Vite + React";
pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_ROBOTS: &str =
    "index, follow, max-snippet:-1, max-image-preview:large, max-video-preview:-1";
pub const DEFAULT_OG_IMAGE: &str = "/assets/images/og-image.png";
pub const DEFAULT_THEME_COLOR: &str = "#0D1117";
pub const DEFAULT_MANIFEST: &str = "/site.webmanifest";
pub const DEFAULT_FEED: &str = "/feed.xml";
pub const SITEMAP_PATH: &str = "/sitemap.xml";

/// Favicon defaults, relative to the site root.
pub mod favicon_defaults {
    pub const SVG: &str = "/assets/images/favicon.svg";
    pub const ICO: &str = "/assets/images/favicon.ico";
    pub const PNG96: &str = "/assets/images/favicon-96x96.png";
    pub const APPLE: &str = "/assets/images/apple-touch-icon.png";
    pub const MASK: &str = "/assets/images/safari-pinned-tab.svg";
    pub const MASK_COLOR: &str = "#0D1117";
}

/// Environment variables that override `seo.basePath`, in precedence order.
pub const BASE_PATH_ENV: [&str; 2] = ["BASE_PATH", "VITE_BASE"];

/// Command-line / environment overrides applied on top of `data.json`.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Already merged in precedence order (flag, then env).
    pub base_path: Option<String>,
    pub site_url: Option<String>,
}

impl Overrides {
    /// Merge command-line flags with the process environment.
    pub fn from_env(base_path: Option<String>, site_url: Option<String>) -> Self {
        Self::with_lookup(base_path, site_url, |key| std::env::var(key).ok())
    }

    /// Blank values at any level fall through to the next source.
    pub fn with_lookup<F>(base_path: Option<String>, site_url: Option<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let blank_to_none = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        let base_path = blank_to_none(base_path)
            .or_else(|| BASE_PATH_ENV.iter().find_map(|key| blank_to_none(lookup(key))));
        Self {
            base_path,
            site_url: blank_to_none(site_url),
        }
    }
}

/// How the canonical URL could be made absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteUrlState {
    Absolute,
    Missing,
    Malformed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct Favicons {
    pub icon: String,
    pub png96: String,
    pub shortcut: String,
    pub apple: String,
    pub mask_href: String,
    pub mask_color: String,
}

/// Every derived value the generators need.
#[derive(Debug, Clone, Serialize)]
pub struct SeoContext {
    pub site_url: SiteUrlState,
    pub base_path: BasePath,
    /// Absolute when `site_url` is `Absolute`, host-relative otherwise.
    pub canonical: String,

    pub title: String,
    pub description: String,
    pub site_name: String,
    pub app_name: String,
    pub generator: String,
    pub locale: String,
    /// First segment of `locale` (`en_US` -> `en`).
    pub language: String,
    pub keywords: String,
    pub robots: String,

    pub image: String,
    pub image_width: String,
    pub image_height: String,

    pub twitter: Option<String>,
    pub twitter_id: Option<String>,

    pub favicons: Favicons,
    pub manifest_href: String,
    pub sitemap_href: String,
    pub feed_href: String,
    pub feed_title: String,
    pub feed_description: String,

    pub theme_color: String,
    pub theme_color_light: Option<String>,
    pub theme_color_dark: Option<String>,

    pub updated_at: Option<String>,
    pub preconnect: Vec<String>,
}

impl SeoContext {
    pub fn resolve(data: &SiteData, overrides: &Overrides) -> Self {
        let seo = &data.seo;
        let personal = &data.personal;

        let base_path = BasePath::resolve([
            overrides.base_path.as_deref(),
            seo.base_path.non_empty(),
        ]);
        let site_url_raw = overrides
            .site_url
            .non_empty()
            .or_else(|| seo.site_url.non_empty())
            .unwrap_or_default();
        let canonical = canonical_base(site_url_raw, &base_path);
        let site_url = if site_url_raw.trim().is_empty() {
            SiteUrlState::Missing
        } else if is_absolute(&canonical) {
            SiteUrlState::Absolute
        } else {
            SiteUrlState::Malformed(site_url_raw.to_string())
        };

        let title = seo
            .title
            .non_empty()
            .or_else(|| personal.name.non_empty())
            .unwrap_or(DEFAULT_TITLE)
            .to_string();
        let configured = seo
            .description
            .non_empty()
            .or_else(|| personal.tagline.non_empty());
        let description = configured.unwrap_or(DEFAULT_DESCRIPTION).to_string();
        let feed_description = configured.unwrap_or(DEFAULT_FEED_DESCRIPTION).to_string();
        let site_name = seo
            .site_name
            .non_empty()
            .or_else(|| personal.name.non_empty())
            .unwrap_or(DEFAULT_TITLE)
            .to_string();
        let app_name = seo.app_name.non_empty().unwrap_or(&site_name).to_string();
        let locale = seo.locale.non_empty().unwrap_or(DEFAULT_LOCALE).to_string();
        let language = language_of(&locale);

        let favicons = {
            let f = &seo.favicons;
            let pick = |v: &Option<String>, default: &str| v.non_empty().unwrap_or(default).to_string();
            Favicons {
                icon: pick(&f.icon, favicon_defaults::SVG),
                png96: pick(&f.png96, favicon_defaults::PNG96),
                shortcut: pick(&f.shortcut, favicon_defaults::ICO),
                apple: pick(&f.apple, favicon_defaults::APPLE),
                mask_href: pick(&f.mask_icon_href, favicon_defaults::MASK),
                mask_color: pick(&f.mask_icon_color, favicon_defaults::MASK_COLOR),
            }
        };

        let feed_path = seo
            .rss
            .non_empty()
            .or_else(|| data.blog.rss_json.non_empty())
            .unwrap_or(DEFAULT_FEED);

        let preconnect = preconnect_origins(
            seo.preconnect.iter().map(String::as_str),
            personal.avatar_url.non_empty(),
            &canonical,
        );

        Self {
            title,
            description,
            feed_description,
            app_name,
            generator: seo
                .generator
                .non_empty()
                .unwrap_or(DEFAULT_GENERATOR)
                .to_string(),
            language,
            locale,
            keywords: seo
                .keywords
                .iter()
                .map(|k| k.trim())
                .filter(|k| !k.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
            robots: seo.robots.non_empty().unwrap_or(DEFAULT_ROBOTS).to_string(),
            image: abs_url(
                &canonical,
                seo.image.non_empty().unwrap_or(DEFAULT_OG_IMAGE),
            ),
            image_width: dimension(seo.image_width.as_ref(), "1200"),
            image_height: dimension(seo.image_height.as_ref(), "630"),
            twitter: seo.twitter.non_empty().map(twitter_handle),
            twitter_id: seo
                .twitter_id
                .as_ref()
                .filter(|id| !id.is_empty())
                .map(ToString::to_string),
            favicons,
            manifest_href: seo
                .manifest
                .non_empty()
                .unwrap_or(DEFAULT_MANIFEST)
                .to_string(),
            sitemap_href: abs_url(&canonical, SITEMAP_PATH),
            feed_href: abs_url(&canonical, feed_path),
            feed_title: format!(
                "{} RSS",
                personal.name.non_empty().unwrap_or("Feed")
            ),
            theme_color: seo
                .theme_color_dark
                .non_empty()
                .unwrap_or(DEFAULT_THEME_COLOR)
                .to_string(),
            theme_color_light: seo.theme_color_light.non_empty().map(str::to_string),
            theme_color_dark: seo.theme_color_dark.non_empty().map(str::to_string),
            updated_at: seo
                .updated_at
                .non_empty()
                .and_then(DateTimeUtc::parse)
                .map(DateTimeUtc::to_rfc3339),
            preconnect,
            site_name,
            site_url,
            base_path,
            canonical,
        }
    }

    /// Whether canonical/feed/robots URLs are absolute.
    pub fn has_absolute_urls(&self) -> bool {
        self.site_url == SiteUrlState::Absolute
    }

    /// Resolve a site path against the canonical base.
    pub fn url(&self, path: &str) -> String {
        abs_url(&self.canonical, path)
    }
}

/// `en_US` -> `en`; `en` when nothing usable precedes the `_`.
fn language_of(locale: &str) -> String {
    match locale.split('_').next().map(str::trim) {
        Some(lang) if !lang.is_empty() => lang.to_string(),
        _ => "en".to_string(),
    }
}

fn twitter_handle(raw: &str) -> String {
    let handle = raw.trim();
    if handle.starts_with('@') {
        handle.to_string()
    } else {
        format!("@{handle}")
    }
}

fn dimension(value: Option<&crate::config::Scalar>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .map_or_else(|| default.to_string(), ToString::to_string)
}

/// Unique origins to warm up, in first-seen order.
///
/// Configured entries that are not absolute URLs are kept verbatim; the
/// avatar and canonical URLs only contribute when they are absolute.
fn preconnect_origins<'a>(
    configured: impl Iterator<Item = &'a str>,
    avatar: Option<&str>,
    canonical: &str,
) -> Vec<String> {
    let configured = configured
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(|h| origin_of(h).unwrap_or_else(|| h.to_string()));
    let derived = [avatar, Some(canonical)]
        .into_iter()
        .flatten()
        .filter_map(origin_of);

    let mut origins: Vec<String> = Vec::new();
    for origin in configured.chain(derived) {
        if !origins.contains(&origin) {
            origins.push(origin);
        }
    }
    origins
}
