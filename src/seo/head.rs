//! Head fragment assembly.
//!
//! The fragment is a flat list of `<meta>` / `<link>` / JSON-LD `<script>`
//! elements wrapped in [`HEAD_BEGIN`] / [`HEAD_END`] so later runs can
//! replace it wholesale.

use super::{SeoContext, jsonld, og};
use crate::config::SiteData;
use crate::utils::{html, mime};
use std::fmt::Write;

pub const HEAD_BEGIN: &str = "<!-- seo:begin -->";
pub const HEAD_END: &str = "<!-- seo:end -->";

// ============================================================================
// HeadTag
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Attr {
    Value(&'static str, String),
    /// Boolean attribute rendered without a value (`crossorigin`).
    Bare(&'static str),
}

/// A void `<meta>` or `<link>` element.
///
/// The first attribute set through a constructor is the *primary* value
/// (`content` for meta, `href` for link); a tag whose primary value is blank
/// is never emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    element: &'static str,
    primary: &'static str,
    attrs: Vec<Attr>,
}

impl HeadTag {
    /// `<meta name="..." content="..." />`
    pub fn name(name: &'static str, content: impl Into<String>) -> Self {
        Self {
            element: "meta",
            primary: "content",
            attrs: vec![
                Attr::Value("name", name.to_string()),
                Attr::Value("content", content.into()),
            ],
        }
    }

    /// `<meta property="..." content="..." />`
    pub fn property(property: &'static str, content: impl Into<String>) -> Self {
        Self {
            element: "meta",
            primary: "content",
            attrs: vec![
                Attr::Value("property", property.to_string()),
                Attr::Value("content", content.into()),
            ],
        }
    }

    /// `<link rel="..." href="..." />`
    pub fn link(rel: &'static str, href: impl Into<String>) -> Self {
        Self {
            element: "link",
            primary: "href",
            attrs: vec![
                Attr::Value("rel", rel.to_string()),
                Attr::Value("href", href.into()),
            ],
        }
    }

    /// Append an attribute; blank values are skipped.
    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.attrs.push(Attr::Value(key, value));
        }
        self
    }

    /// Append an optional attribute.
    pub fn attr_opt(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.attr(key, v),
            None => self,
        }
    }

    pub fn bare(mut self, key: &'static str) -> Self {
        self.attrs.push(Attr::Bare(key));
        self
    }

    /// Whether the primary value is blank.
    pub fn is_empty(&self) -> bool {
        !self.attrs.iter().any(|attr| {
            matches!(attr, Attr::Value(k, v) if *k == self.primary && !v.trim().is_empty())
        })
    }

    pub fn render(&self) -> String {
        let mut out = format!("<{}", self.element);
        for attr in &self.attrs {
            match attr {
                Attr::Value(k, v) => {
                    let _ = write!(out, " {k}=\"{}\"", html::escape_attr(v));
                }
                Attr::Bare(k) => {
                    let _ = write!(out, " {k}");
                }
            }
        }
        out.push_str(" />");
        out
    }
}

// ============================================================================
// fragment
// ============================================================================

/// Tags in emission order, before filtering.
pub fn head_tags(ctx: &SeoContext, data: &SiteData) -> Vec<HeadTag> {
    let seo = &data.seo;
    let fav = &ctx.favicons;
    let mut tags = vec![
        HeadTag::name("description", &ctx.description),
        HeadTag::name("keywords", &ctx.keywords),
        HeadTag::name("robots", &ctx.robots),
        HeadTag::name("googlebot", &ctx.robots),
        HeadTag::name("application-name", &ctx.app_name),
        HeadTag::name("generator", &ctx.generator),
    ];
    if seo.notranslate {
        tags.push(HeadTag::name("google", "notranslate"));
    }

    tags.extend([
        HeadTag::link("canonical", &ctx.canonical),
        HeadTag::link("sitemap", &ctx.sitemap_href),
        HeadTag::name("theme-color", &ctx.theme_color),
    ]);
    if let Some(light) = &ctx.theme_color_light {
        tags.push(
            HeadTag::name("theme-color", light).attr("media", "(prefers-color-scheme: light)"),
        );
    }
    if let Some(dark) = &ctx.theme_color_dark {
        tags.push(HeadTag::name("theme-color", dark).attr("media", "(prefers-color-scheme: dark)"));
    }

    tags.extend([
        HeadTag::link("icon", &fav.icon).attr_opt("type", mime::for_image(&fav.icon)),
        HeadTag::link("icon", &fav.png96)
            .attr("type", mime::for_image(&fav.png96).unwrap_or(mime::types::PNG))
            .attr("sizes", "96x96"),
        HeadTag::link("shortcut icon", &fav.shortcut),
        HeadTag::link("apple-touch-icon", &fav.apple).attr("sizes", "180x180"),
        HeadTag::name("apple-mobile-web-app-title", &ctx.app_name),
        HeadTag::link("manifest", &ctx.manifest_href),
        HeadTag::link("mask-icon", &fav.mask_href).attr("color", &fav.mask_color),
    ]);

    tags.extend(og::open_graph(ctx, seo));
    tags.extend(og::facebook(seo));
    tags.extend(og::twitter(ctx));

    tags.push(
        HeadTag::link("alternate", &ctx.feed_href)
            .attr("type", mime::types::RSS)
            .attr("title", &ctx.feed_title),
    );
    for (lang, href) in &seo.alternates {
        if let Some(href) = href.as_str() {
            tags.push(HeadTag::link("alternate", ctx.url(href)).attr("hreflang", lang));
        }
    }
    tags.push(HeadTag::link("alternate", &ctx.canonical).attr("hreflang", "x-default"));

    for origin in &ctx.preconnect {
        tags.push(HeadTag::link("dns-prefetch", origin));
        tags.push(HeadTag::link("preconnect", origin).bare("crossorigin"));
    }

    tags
}

/// The complete marker-delimited fragment.
pub fn build_head_fragment(ctx: &SeoContext, data: &SiteData) -> String {
    let mut lines = vec![HEAD_BEGIN.to_string()];
    lines.extend(
        head_tags(ctx, data)
            .iter()
            .filter(|tag| !tag.is_empty())
            .map(HeadTag::render),
    );
    lines.extend(jsonld::documents(ctx, data).iter().map(jsonld::JsonLd::render));
    lines.push(HEAD_END.to_string());
    lines.join("\n")
}
