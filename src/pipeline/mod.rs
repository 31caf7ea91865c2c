//! Metadata build pipeline.
//!
//! ```text
//! SiteData ──► SeoContext ──┬──► generator::generate_all ──► dist/*.xml, robots.txt, manifest
//!                           └──► seo::head fragment ──► inject ──► dist/index.html, 404.html
//! ```
//!
//! Every stage reads the same immutable inputs; the only side effects are
//! the file writes at the end of each branch.

pub mod inject;

use crate::{
    config::{ProjectPaths, SiteData},
    generator,
    log,
    seo::{SeoContext, SiteUrlState, head::build_head_fragment},
    utils::date::DateTimeUtc,
};
use anyhow::Result;
use inject::{HeadInjector, Placement, TARGETS};
use std::path::PathBuf;

/// What a build run touched.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
    pub injected: Vec<(PathBuf, Placement)>,
}

impl BuildReport {
    pub fn summary(&self) -> String {
        let placed = self
            .injected
            .iter()
            .filter(|(_, p)| *p != Placement::NoHead)
            .count();
        format!(
            "{} written, {} injected",
            counted(self.written.len(), "file"),
            counted(placed, "document")
        )
    }
}

fn counted(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Run the whole pipeline against the output directory.
pub fn run(
    data: &SiteData,
    ctx: &SeoContext,
    paths: &ProjectPaths,
    now: DateTimeUtc,
) -> Result<BuildReport> {
    warn_site_url(ctx);

    let mut report = BuildReport::default();

    for artifact in generator::generate_all(ctx, data, paths, now)? {
        let path = artifact.write(paths)?;
        log!("write"; "{}", artifact.web_path.trim_start_matches('/'));
        report.written.push(path);
    }

    let fragment = build_head_fragment(ctx, data);
    let injector = HeadInjector::new(ctx, &fragment);
    for target in TARGETS {
        let path = paths.output_join(target);
        if !path.is_file() {
            continue;
        }
        let placement = injector.inject_file(&path)?;
        match placement {
            Placement::NoHead => {
                log!("warning"; "{}: no </head> found, head fragment not injected", target);
            }
            Placement::Replaced | Placement::Inserted => log!("inject"; "{}", target),
        }
        report.injected.push((path, placement));
    }

    Ok(report)
}

/// Non-fatal: relative canonical, feed and robots URLs.
fn warn_site_url(ctx: &SeoContext) {
    match &ctx.site_url {
        SiteUrlState::Absolute => {}
        SiteUrlState::Missing => log!(
            "warning";
            "seo.siteUrl is empty; canonical, RSS and robots URLs will be relative ({})",
            ctx.canonical
        ),
        SiteUrlState::Malformed(raw) => log!(
            "warning";
            "seo.siteUrl `{}` is not an absolute URL; falling back to {}",
            raw,
            ctx.canonical
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::Overrides;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    const INDEX: &str = "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Vite App</title>\n</head>\n<body><div id=\"root\"></div></body>\n</html>\n";

    const DATA: &str = r#"{
        "seo": {
            "siteUrl": "https://example.com",
            "basePath": "/portfolio",
            "title": "Ada & Co's \"Lab\"",
            "locale": "en_GB"
        },
        "personal": { "name": "Ada", "avatarUrl": "https://avatars.example.com/ada.png" },
        "blog": {
            "posts": [
                { "title": "Older", "date": "2024-01-01", "excerpt": "first <post>" },
                { "title": "Newer", "date": "2024-06-01", "slug": "posts/newer" }
            ]
        },
        "about": { "enabled": true }
    }"#;

    struct Site {
        dir: TempDir,
        paths: ProjectPaths,
    }

    impl Site {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let paths = ProjectPaths::new(dir.path(), Path::new("dist"), Path::new("public"));
            fs::create_dir_all(paths.output_dir()).unwrap();
            fs::write(paths.output_join("index.html"), INDEX).unwrap();
            Self { dir, paths }
        }

        fn build(&self) -> BuildReport {
            let data = SiteData::parse(DATA).unwrap();
            let ctx = SeoContext::resolve(&data, &Overrides::default());
            run(&data, &ctx, &self.paths, DateTimeUtc::new(2025, 3, 1, 8, 0, 0)).unwrap()
        }

        fn read(&self, rel: &str) -> String {
            fs::read_to_string(self.dir.path().join("dist").join(rel)).unwrap()
        }
    }

    #[test]
    fn test_build_writes_everything() {
        let site = Site::new();
        let report = site.build();

        assert_eq!(report.written.len(), 4);
        assert_eq!(report.injected.len(), 1);
        assert_eq!(report.summary(), "4 files written, 1 document injected");

        assert!(site.read("sitemap.xml").contains("<loc>https://example.com/portfolio/</loc>"));
        assert!(site.read("robots.txt").contains("Sitemap: https://example.com/sitemap.xml"));
        assert!(site.read("site.webmanifest").contains("\"start_url\": \"/portfolio/\""));

        let feed = site.read("feed.xml");
        assert!(feed.find("Newer").unwrap() < feed.find("Older").unwrap());
        assert!(feed.contains("<link>https://example.com/portfolio/posts/newer</link>"));
        assert!(feed.contains("<![CDATA[first <post>]]>"));
        assert!(feed.contains("<title>Ada &amp; Co"));
        assert!(feed.contains("https://example.com/portfolio/posts/newer</guid>"));

        let index = site.read("index.html");
        assert!(index.contains("<html lang=\"en\">"));
        assert!(index.contains("<title>Ada &amp; Co&#39;s &quot;Lab&quot;</title>"));
        assert!(!index.contains("Vite App"));
        assert!(index.contains("<link rel=\"canonical\" href=\"https://example.com/portfolio/\" />"));
        assert!(index.contains("https://example.com/portfolio/#about"));
        assert!(index.contains("<link rel=\"preconnect\" href=\"https://avatars.example.com\" crossorigin />"));
    }

    #[test]
    fn test_build_is_idempotent() {
        let site = Site::new();
        site.build();
        let first: Vec<String> = ["sitemap.xml", "feed.xml", "robots.txt", "site.webmanifest", "index.html"]
            .iter()
            .map(|f| site.read(f))
            .collect();

        site.build();
        let second: Vec<String> = ["sitemap.xml", "feed.xml", "robots.txt", "site.webmanifest", "index.html"]
            .iter()
            .map(|f| site.read(f))
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_build_preserves_prior_manifest_fields() {
        let site = Site::new();
        fs::create_dir_all(site.paths.public_dir()).unwrap();
        fs::write(
            site.paths.public_join("site.webmanifest"),
            r#"{"short_name":"AdaLab","categories":["portfolio"]}"#,
        )
        .unwrap();

        site.build();
        let manifest: serde_json::Value =
            serde_json::from_str(&site.read("site.webmanifest")).unwrap();
        assert_eq!(manifest["short_name"], "AdaLab");
        assert_eq!(manifest["categories"][0], "portfolio");
        assert_eq!(manifest["icons"][0]["sizes"], "192x192");
    }

    #[test]
    fn test_missing_targets_are_skipped() {
        let site = Site::new();
        fs::remove_file(site.paths.output_join("index.html")).unwrap();
        let report = site.build();
        assert!(report.injected.is_empty());
        assert_eq!(report.written.len(), 4);
    }

    #[test]
    fn test_not_found_page_injected() {
        let site = Site::new();
        fs::write(site.paths.output_join("404.html"), "<html><head></head><body>404</body></html>").unwrap();
        let report = site.build();
        assert_eq!(report.injected.len(), 2);
        assert!(site.read("404.html").contains(crate::seo::head::HEAD_END));
    }
}
