//! `robots.txt` generation.

use crate::seo::SeoContext;

pub const FILE_NAME: &str = "robots.txt";

/// Allow everything and point crawlers at the sitemap.
pub fn render(ctx: &SeoContext) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {}\n", ctx.sitemap_href)
}
