//! Artifact generators.
//!
//! Builds the auxiliary files written next to the built HTML:
//!
//! - **Sitemap**: `sitemap.xml` with the canonical base
//! - **Feed**: RSS 2.0 `feed.xml` from the blog posts
//! - **Robots**: `robots.txt` pointing at the sitemap
//! - **Manifest**: web app manifest merged with a prior one
//!
//! Rendering is pure given the resolved [`SeoContext`] and the build clock;
//! only the manifest reads the filesystem (prior manifest, icon probe).

pub mod feed;
pub mod manifest;
pub mod robots;
pub mod sitemap;

use crate::{
    config::{ProjectPaths, SiteData},
    seo::SeoContext,
    utils::date::DateTimeUtc,
};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

/// A rendered file, addressed by its web path under the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub web_path: String,
    pub content: String,
}

impl Artifact {
    fn new(web_path: impl Into<String>, content: String) -> Self {
        Self {
            web_path: web_path.into(),
            content,
        }
    }

    /// Write under the output directory, creating parent directories.
    pub fn write(&self, paths: &ProjectPaths) -> Result<PathBuf> {
        let path = paths.output_join(&self.web_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

/// Render every artifact, in write order.
pub fn generate_all(
    ctx: &SeoContext,
    data: &SiteData,
    paths: &ProjectPaths,
    now: DateTimeUtc,
) -> Result<Vec<Artifact>> {
    let items = feed::collect_items(data.blog.entries(), ctx, now);

    let manifest_path = manifest::web_path(ctx);
    let prior = manifest::read_prior(paths, &manifest_path);
    let icons = manifest::ManifestIcons::probe(paths);
    let manifest = manifest::build(ctx, data, &prior, &icons);

    Ok(vec![
        Artifact::new(sitemap::FILE_NAME, sitemap::render(ctx, now)),
        Artifact::new(feed::FILE_NAME, feed::render(ctx, &items, now)?),
        Artifact::new(robots::FILE_NAME, robots::render(ctx)),
        Artifact::new(manifest_path, manifest::render(&manifest)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::Overrides;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_generate_all_names() {
        let dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(dir.path(), Path::new("dist"), Path::new("public"));
        let data = SiteData::parse(r#"{"seo":{"manifest":"/app.webmanifest"}}"#).unwrap();
        let ctx = SeoContext::resolve(&data, &Overrides::default());

        let artifacts = generate_all(&ctx, &data, &paths, DateTimeUtc::from_ymd(2025, 1, 1)).unwrap();
        let names: Vec<&str> = artifacts.iter().map(|a| a.web_path.as_str()).collect();
        assert_eq!(
            names,
            ["sitemap.xml", "feed.xml", "robots.txt", "/app.webmanifest"]
        );
    }

    #[test]
    fn test_artifact_write_creates_dirs() {
        let dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(dir.path(), Path::new("dist"), Path::new("public"));

        let artifact = Artifact::new("/meta/site.webmanifest", "{}\n".to_string());
        let written = artifact.write(&paths).unwrap();

        assert_eq!(written, dir.path().join("dist/meta/site.webmanifest"));
        assert_eq!(fs::read_to_string(written).unwrap(), "{}\n");
    }
}
