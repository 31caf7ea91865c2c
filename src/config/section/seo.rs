//! `seo` section of `data.json`.

use crate::config::types::{Scalar, null_default};
use serde::Deserialize;

/// Search, social and PWA metadata.
///
/// Every field is optional; fallbacks are applied when the SEO context is
/// resolved, not here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoConfig {
    /// Absolute production origin, e.g. `https://example.com`.
    pub site_url: Option<String>,
    /// Deployment sub-path, e.g. `/portfolio/`.
    pub base_path: Option<String>,

    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub keywords: Vec<String>,
    /// Robots policy, also used for `googlebot`.
    pub robots: Option<String>,
    pub notranslate: bool,

    pub image: Option<String>,
    pub image_width: Option<Scalar>,
    pub image_height: Option<Scalar>,

    pub site_name: Option<String>,
    pub app_name: Option<String>,
    pub generator: Option<String>,
    /// `language_REGION`, e.g. `en_US`.
    pub locale: Option<String>,

    pub twitter: Option<String>,
    pub twitter_id: Option<Scalar>,
    pub facebook_app_id: Option<Scalar>,
    pub fb_page_id: Option<Scalar>,
    #[serde(deserialize_with = "null_default")]
    pub facebook_admins: Vec<Scalar>,

    #[serde(deserialize_with = "null_default")]
    pub favicons: FaviconConfig,
    /// Web path of the web app manifest.
    pub manifest: Option<String>,
    pub theme_color_light: Option<String>,
    pub theme_color_dark: Option<String>,

    /// hreflang -> path
    #[serde(deserialize_with = "null_default")]
    pub alternates: serde_json::Map<String, serde_json::Value>,
    /// Web path of the RSS feed.
    pub rss: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub preconnect: Vec<String>,

    /// ISO 8601 timestamp of the last content update.
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub see_also: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub article_tags: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub locale_alternates: Vec<String>,

    pub organization: Option<OrganizationConfig>,
}

/// Favicon overrides; unset entries use the `/assets/images/` defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaviconConfig {
    /// Primary (usually SVG) icon.
    pub icon: Option<String>,
    pub png96: Option<String>,
    /// Legacy `shortcut icon` (ICO).
    pub shortcut: Option<String>,
    /// Apple touch icon, 180x180.
    pub apple: Option<String>,
    pub mask_icon_href: Option<String>,
    pub mask_icon_color: Option<String>,
}

/// Publisher organization for the Organization JSON-LD block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrganizationConfig {
    pub name: Option<String>,
    pub legal_name: Option<String>,
    pub url: Option<String>,
    pub logo: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub same_as: Vec<String>,
}
