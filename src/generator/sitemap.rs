//! Sitemap generation.
//!
//! The site is a single page, so the sitemap lists exactly one URL: the
//! canonical base.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01T00:00:00Z</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.8</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{seo::SeoContext, utils::date::DateTimeUtc, utils::xml::escape_xml};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub const FILE_NAME: &str = "sitemap.xml";

/// Render `sitemap.xml` for the canonical base.
pub fn render(ctx: &SeoContext, now: DateTimeUtc) -> String {
    Sitemap {
        urls: vec![UrlEntry {
            loc: ctx.canonical.clone(),
            lastmod: Some(now.to_rfc3339()),
            changefreq: Some("weekly"),
            priority: Some("0.8"),
        }],
    }
    .into_xml()
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
    changefreq: Option<&'static str>,
    priority: Option<&'static str>,
}

impl Sitemap {
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(512);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            push_element(&mut xml, "lastmod", entry.lastmod.as_deref());
            push_element(&mut xml, "changefreq", entry.changefreq);
            push_element(&mut xml, "priority", entry.priority);
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

fn push_element(xml: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        xml.push_str("    <");
        xml.push_str(name);
        xml.push('>');
        xml.push_str(&escape_xml(value));
        xml.push_str("</");
        xml.push_str(name);
        xml.push_str(">\n");
    }
}
